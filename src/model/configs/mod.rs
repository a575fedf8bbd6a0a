pub mod font_config;
pub mod job_config;
pub mod map_config;
pub mod source_config;
pub mod style_config;
pub mod system_config;
pub mod total_config;
