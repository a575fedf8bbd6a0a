pub mod province_mapping;
