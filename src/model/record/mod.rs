pub mod post_record;
pub mod record_table;
