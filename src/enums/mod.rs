pub mod chart_kind;
pub mod sort_order;
