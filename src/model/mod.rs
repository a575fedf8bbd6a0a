pub mod chart_style;
pub mod configs;
pub mod record;
pub mod region;
