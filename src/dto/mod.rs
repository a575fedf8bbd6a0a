pub mod daily_count;
pub mod daily_region_counts;
pub mod province_count;
pub mod region_count;
pub mod region_share;
