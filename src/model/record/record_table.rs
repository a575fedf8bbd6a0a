use crate::common::*;

use crate::errors::data_shape_error::*;
use crate::utils_modules::traits::*;

#[doc = r#"
    원본(SQLite 테이블 / 스프레드시트 시트)을 한 번 읽어 들인 결과.

    모든 셀은 문자열로 보관하며 읽은 뒤에는 변경하지 않는다.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct RecordTable {
    source_name: String,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RecordTable {
    #[doc = r#"
        논리 컬럼에 해당하는 실제 컬럼 위치를 찾는다.

        `aliases` 순서대로 검사하여 처음 존재하는 컬럼을 사용하고,
        첫 번째 alias 가 아닌 이름을 사용한 경우 info 로그를 남긴다.

        # Errors
        * `DataShapeError::MissingColumn` - 어떤 alias 도 존재하지 않을 때 (사용 가능한 컬럼 목록 포함)
    "#]
    pub fn resolve_column(&self, logical: &str, aliases: &[String]) -> Result<usize, DataShapeError> {
        for (alias_idx, alias) in aliases.iter().enumerate() {
            if let Some(pos) = self.columns.iter().position(|col| col == alias) {
                if alias_idx > 0 {
                    info!(
                        "[{}] Column '{}' not found, using alternate column '{}' for {}",
                        self.source_name, aliases[0], alias, logical
                    );
                }
                return Ok(pos);
            }
        }

        Err(DataShapeError::MissingColumn {
            logical: logical.to_string(),
            tried: aliases.to_vec(),
            available: self.columns.clone(),
        })
    }

    #[doc = "i 번째 행의 셀 (행 길이가 짧으면 빈 문자열)"]
    pub fn cell<'a>(cells: &'a [String], column: usize) -> &'a str {
        cells.get(column).map(|s| s.as_str()).unwrap_or("")
    }

    #[doc = r#"
        모든 행을 도메인 타입으로 변환한다.

        `from_table_row` 가 `None` 을 반환한 행은 건너뛰며, 건너뛴 행 수를 warn 로그로 남긴다.
    "#]
    pub fn to_records<T: FromTableRow>(&self, columns: &T::Columns) -> anyhow::Result<Vec<T>> {
        let mut records: Vec<T> = Vec::with_capacity(self.rows.len());
        let mut skipped: usize = 0;

        for (row_no, cells) in self.rows.iter().enumerate() {
            match T::from_table_row(row_no, cells, columns)? {
                Some(record) => records.push(record),
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            warn!(
                "[{}] Skipped {} of {} rows with blank key cells",
                self.source_name,
                skipped,
                self.rows.len()
            );
        }

        Ok(records)
    }
}
