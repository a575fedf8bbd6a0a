use crate::common::*;

#[doc = "차트 작업이 읽어올 테이블 원본"]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceConfig {
    /// One table of a local SQLite database file.
    Sqlite { path: PathBuf, table: String },
    /// One sheet of a spreadsheet file; the first sheet when `sheet` is unset.
    Excel {
        path: PathBuf,
        #[serde(default)]
        sheet: Option<String>,
    },
}
