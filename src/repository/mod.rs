pub mod excel_repository_impl;
pub mod sqlite_repository_impl;
