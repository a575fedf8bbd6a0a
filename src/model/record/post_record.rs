use crate::common::*;

use crate::errors::data_shape_error::*;
use crate::model::{configs::job_config::*, record::record_table::*};
use crate::utils_modules::{time_utils::*, traits::*};

#[doc = "게시글 한 건 - 지역(ip) 과 작성 시각만 사용한다"]
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct PostRecord {
    region: String,
    posted_at: Option<NaiveDateTime>,
}

impl PostRecord {
    pub fn posted_on(&self) -> Option<NaiveDate> {
        self.posted_at.as_ref().map(truncate_to_date)
    }
}

#[doc = "테이블에서 찾은 지역/타임스탬프 컬럼 위치"]
#[derive(Debug, Clone, new)]
pub struct PostColumns {
    region: usize,
    timestamp: Option<(usize, String)>,
}

impl PostColumns {
    #[doc = r#"
        작업 설정의 alias 목록으로 컬럼 위치를 찾는다.

        `need_timestamp` 가 false 이면 타임스탬프 컬럼은 찾지 않는다.
    "#]
    pub fn resolve(
        table: &RecordTable,
        columns: &ColumnConfig,
        need_timestamp: bool,
    ) -> Result<Self, DataShapeError> {
        let region: usize = table.resolve_column("region", columns.region())?;

        let timestamp: Option<(usize, String)> = if need_timestamp {
            let pos: usize = table.resolve_column("timestamp", columns.timestamp())?;
            Some((pos, table.columns()[pos].clone()))
        } else {
            None
        };

        Ok(Self::new(region, timestamp))
    }
}

impl FromTableRow for PostRecord {
    type Columns = PostColumns;

    fn from_table_row(
        row_no: usize,
        cells: &[String],
        columns: &PostColumns,
    ) -> anyhow::Result<Option<Self>> {
        let region: &str = RecordTable::cell(cells, columns.region).trim();

        if region.is_empty() {
            return Ok(None);
        }

        let posted_at: Option<NaiveDateTime> = match &columns.timestamp {
            None => None,
            Some((pos, column_name)) => {
                let raw: &str = RecordTable::cell(cells, *pos).trim();

                if raw.is_empty() {
                    return Ok(None);
                }

                let ts: NaiveDateTime =
                    parse_post_timestamp(raw).ok_or_else(|| DataShapeError::InvalidTimestamp {
                        row: row_no + 1,
                        column: column_name.clone(),
                        value: raw.to_string(),
                    })?;

                Some(ts)
            }
        };

        Ok(Some(PostRecord::new(region.to_string(), posted_at)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> RecordTable {
        RecordTable::new(
            "sample".to_string(),
            vec!["id".to_string(), "ip".to_string(), "created_at".to_string()],
            vec![
                vec!["1".to_string(), "北京".to_string(), "2024-01-01 10:00:00".to_string()],
                vec!["2".to_string(), "".to_string(), "2024-01-01 11:00:00".to_string()],
                vec!["3".to_string(), "河北".to_string(), "".to_string()],
                vec!["4".to_string(), " 天津 ".to_string(), "2024-01-02".to_string()],
            ],
        )
    }

    #[test]
    fn rows_with_blank_keys_are_skipped() {
        let table: RecordTable = sample_table();
        let columns: PostColumns =
            PostColumns::resolve(&table, &ColumnConfig::default(), true).unwrap();

        let records: Vec<PostRecord> = table.to_records::<PostRecord>(&columns).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].region(), "北京");
        assert_eq!(records[1].region(), "天津");
        assert_eq!(
            records[1].posted_on(),
            NaiveDate::from_ymd_opt(2024, 1, 2)
        );
    }

    #[test]
    fn timestamp_is_ignored_when_not_needed() {
        let table: RecordTable = sample_table();
        let columns: PostColumns =
            PostColumns::resolve(&table, &ColumnConfig::default(), false).unwrap();

        let records: Vec<PostRecord> = table.to_records::<PostRecord>(&columns).unwrap();

        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.posted_at().is_none()));
    }

    #[test]
    fn garbage_timestamp_is_a_data_shape_error() {
        let table: RecordTable = RecordTable::new(
            "bad".to_string(),
            vec!["ip".to_string(), "created_at".to_string()],
            vec![vec!["北京".to_string(), "not a date".to_string()]],
        );
        let columns: PostColumns =
            PostColumns::resolve(&table, &ColumnConfig::default(), true).unwrap();

        let err: anyhow::Error = table.to_records::<PostRecord>(&columns).unwrap_err();
        let shape: &DataShapeError = err.downcast_ref::<DataShapeError>().unwrap();

        assert_eq!(
            shape,
            &DataShapeError::InvalidTimestamp {
                row: 1,
                column: "created_at".to_string(),
                value: "not a date".to_string(),
            }
        );
    }

    #[test]
    fn missing_timestamp_column_fails_resolution() {
        let table: RecordTable = RecordTable::new(
            "no_ts".to_string(),
            vec!["ip".to_string()],
            Vec::new(),
        );

        let err: DataShapeError =
            PostColumns::resolve(&table, &ColumnConfig::default(), true).unwrap_err();
        assert!(matches!(err, DataShapeError::MissingColumn { .. }));
    }
}
