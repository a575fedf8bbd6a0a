use crate::common::*;

use crate::errors::data_shape_error::*;
use crate::model::record::record_table::*;
use crate::traits::repository_traits::record_repository::*;
use crate::utils_modules::time_utils::*;

#[derive(Debug, Clone, new)]
pub struct ExcelRepositoryImpl {
    workbook_path: PathBuf,
    sheet_name: Option<String>,
}

impl ExcelRepositoryImpl {
    #[doc = r#"
        시트의 행들을 `RecordTable` 로 변환한다. 첫 행은 헤더.

        # Errors
        * `DataShapeError::MissingHeader` - 시트가 비어 있을 때
    "#]
    fn table_from_rows<'a, I>(
        source_name: String,
        sheet_name: &str,
        mut rows: I,
    ) -> Result<RecordTable, DataShapeError>
    where
        I: Iterator<Item = &'a [Data]>,
    {
        let header: &[Data] = rows.next().ok_or_else(|| DataShapeError::MissingHeader {
            sheet: sheet_name.to_string(),
        })?;

        let columns: Vec<String> = header.iter().map(cell_to_string).collect();

        let body: Vec<Vec<String>> = rows
            .map(|row| row.iter().map(cell_to_string).collect())
            .collect();

        Ok(RecordTable::new(source_name, columns, body))
    }
}

#[doc = r#"
    스프레드시트 셀을 문자열로 변환.

    - 날짜 셀은 `YYYY-MM-DD HH:MM:SS` 로 직렬화해서 타임스탬프 파서가 그대로 읽을 수 있게 한다
    - 정수값 실수(예: 3.0)는 `3` 으로
    - 빈 셀/오류 셀은 빈 문자열
"#]
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => format_cell_datetime(&naive),
            None => dt.as_f64().to_string(),
        },
    }
}

impl RecordRepository for ExcelRepositoryImpl {
    #[doc = r#"
        스프레드시트(.xlsx/.xls/.ods)의 시트 하나를 읽는다.

        시트명이 설정되지 않았으면 첫 번째 시트를 사용한다.
    "#]
    fn load_table(&self) -> anyhow::Result<RecordTable> {
        if !self.workbook_path.is_file() {
            return Err(anyhow!(
                "[ExcelRepositoryImpl->load_table] Workbook not found: {:?}",
                self.workbook_path
            ));
        }

        let mut workbook = open_workbook_auto(&self.workbook_path).with_context(|| {
            format!(
                "[ExcelRepositoryImpl->load_table] Failed to open {:?}",
                self.workbook_path
            )
        })?;

        let sheet_name: String = match &self.sheet_name {
            Some(name) => name.clone(),
            None => workbook.sheet_names().first().cloned().ok_or_else(|| {
                DataShapeError::EmptyWorkbook(self.workbook_path.display().to_string())
            })?,
        };

        let range = workbook.worksheet_range(&sheet_name).with_context(|| {
            format!(
                "[ExcelRepositoryImpl->load_table] Failed to read sheet '{}' of {:?}",
                sheet_name, self.workbook_path
            )
        })?;

        let table: RecordTable = Self::table_from_rows(
            format!("{}:{}", self.workbook_path.display(), sheet_name),
            &sheet_name,
            range.rows(),
        )?;

        info!("[{}] columns: {:?}", sheet_name, table.columns());
        info!(
            "Loaded {} rows from {:?} (sheet '{}')",
            table.rows().len(),
            self.workbook_path,
            sheet_name
        );

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn cells_convert_to_strings() {
        assert_eq!(cell_to_string(&Data::String("北京".to_string())), "北京");
        assert_eq!(cell_to_string(&Data::Int(42)), "42");
        assert_eq!(cell_to_string(&Data::Float(3.0)), "3");
        assert_eq!(cell_to_string(&Data::Float(2.5)), "2.5");
        assert_eq!(cell_to_string(&Data::Bool(true)), "true");
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(
            cell_to_string(&Data::DateTimeIso("2024-01-01T08:00:00".to_string())),
            "2024-01-01T08:00:00"
        );
    }

    #[test]
    fn first_row_becomes_header() {
        let sheet: Vec<Vec<Data>> = vec![
            vec![Data::String("ip".to_string()), Data::String("created_at".to_string())],
            vec![
                Data::String("北京".to_string()),
                Data::String("2024-01-01 08:00:00".to_string()),
            ],
            vec![Data::String("河北".to_string()), Data::Empty],
        ];

        let table: RecordTable = ExcelRepositoryImpl::table_from_rows(
            "sheet".to_string(),
            "Sheet1",
            sheet.iter().map(|row| row.as_slice()),
        )
        .unwrap();

        assert_eq!(table.columns(), &vec!["ip", "created_at"]);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[1], vec!["河北", ""]);
    }

    #[test]
    fn empty_sheet_has_no_header() {
        let sheet: Vec<Vec<Data>> = Vec::new();

        let err: DataShapeError = ExcelRepositoryImpl::table_from_rows(
            "sheet".to_string(),
            "Sheet1",
            sheet.iter().map(|row| row.as_slice()),
        )
        .unwrap_err();

        assert_eq!(
            err,
            DataShapeError::MissingHeader {
                sheet: "Sheet1".to_string()
            }
        );
    }

    #[test]
    fn missing_workbook_is_an_error() {
        let dir: TempDir = TempDir::new().unwrap();
        let repo: ExcelRepositoryImpl =
            ExcelRepositoryImpl::new(dir.path().join("weibo.xlsx"), None);

        assert!(repo.load_table().is_err());
    }
}
