pub use chrono::{DateTime, NaiveDate, NaiveDateTime};
pub use once_cell::sync::Lazy as once_lazy;
pub use rusqlite::{Connection, OpenFlags, types::ValueRef};
pub use calamine::{Data, Reader, open_workbook_auto};
pub use num_format::{Locale, ToFormattedString};
