use crate::common::*;

use crate::model::record::record_table::*;
use crate::traits::repository_traits::record_repository::*;

#[derive(Debug, Clone, new)]
pub struct SqliteRepositoryImpl {
    db_path: PathBuf,
    table_name: String,
}

impl SqliteRepositoryImpl {
    #[doc = "SQL 식별자 인용 - 테이블명은 설정 파일에서 오므로 그대로 붙이지 않는다"]
    fn quote_identifier(name: &str) -> String {
        format!("\"{}\"", name.replace('"', "\"\""))
    }

    fn value_to_cell(value: ValueRef<'_>) -> String {
        match value {
            ValueRef::Null => String::new(),
            ValueRef::Integer(i) => i.to_string(),
            ValueRef::Real(f) => f.to_string(),
            ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
                String::from_utf8_lossy(bytes).to_string()
            }
        }
    }
}

impl RecordRepository for SqliteRepositoryImpl {
    #[doc = r#"
        SQLite 파일을 읽기 전용으로 열어 `SELECT * FROM <table>` 결과 전체를 읽는다.

        1. 파일이 없으면 (빈 DB 를 새로 만들지 않도록) 오류
        2. 컬럼명 목록을 info 로그로 남긴다
        3. 모든 셀을 문자열로 변환 (NULL 은 빈 문자열)
    "#]
    fn load_table(&self) -> anyhow::Result<RecordTable> {
        if !self.db_path.is_file() {
            return Err(anyhow!(
                "[SqliteRepositoryImpl->load_table] Database file not found: {:?}",
                self.db_path
            ));
        }

        let conn: Connection = Connection::open_with_flags(
            &self.db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .with_context(|| {
            format!(
                "[SqliteRepositoryImpl->load_table] Failed to open {:?}",
                self.db_path
            )
        })?;

        let query: String = format!("SELECT * FROM {}", Self::quote_identifier(&self.table_name));

        let mut stmt: rusqlite::Statement<'_> = conn.prepare(&query).with_context(|| {
            format!(
                "[SqliteRepositoryImpl->load_table] Failed to prepare '{}'",
                query
            )
        })?;

        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect();

        info!("[{}] columns: {:?}", self.table_name, columns);

        let column_count: usize = columns.len();

        let rows: Vec<Vec<String>> = stmt
            .query_map([], |row| {
                (0..column_count)
                    .map(|idx| row.get_ref(idx).map(Self::value_to_cell))
                    .collect::<rusqlite::Result<Vec<String>>>()
            })?
            .collect::<rusqlite::Result<Vec<Vec<String>>>>()
            .with_context(|| {
                format!(
                    "[SqliteRepositoryImpl->load_table] Failed to read rows of '{}'",
                    self.table_name
                )
            })?;

        info!(
            "Loaded {} rows from {:?} (table '{}')",
            rows.len(),
            self.db_path,
            self.table_name
        );

        Ok(RecordTable::new(
            format!("{}:{}", self.db_path.display(), self.table_name),
            columns,
            rows,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::params;
    use tempfile::TempDir;

    fn create_weibo_db(dir: &TempDir) -> PathBuf {
        let path: PathBuf = dir.path().join("weibo.db");
        let conn: Connection = Connection::open(&path).unwrap();

        conn.execute_batch(
            "CREATE TABLE weibo (id INTEGER, ip TEXT, 发布时间 TEXT, score REAL);",
        )
        .unwrap();

        let rows: [(i64, Option<&str>, &str, f64); 3] = [
            (1, Some("北京"), "2024-01-01 09:00:00", 0.5),
            (2, Some("河北"), "2024-01-01 10:00:00", 1.0),
            (3, None, "2024-01-02 11:00:00", 0.25),
        ];

        for (id, ip, ts, score) in rows {
            conn.execute(
                "INSERT INTO weibo (id, ip, 发布时间, score) VALUES (?1, ?2, ?3, ?4)",
                params![id, ip, ts, score],
            )
            .unwrap();
        }

        path
    }

    #[test]
    fn loads_all_columns_and_rows_as_strings() {
        let dir: TempDir = TempDir::new().unwrap();
        let path: PathBuf = create_weibo_db(&dir);

        let table: RecordTable = SqliteRepositoryImpl::new(path, "weibo".to_string())
            .load_table()
            .unwrap();

        assert_eq!(table.columns(), &vec!["id", "ip", "发布时间", "score"]);
        assert_eq!(table.rows().len(), 3);
        assert_eq!(table.rows()[0], vec!["1", "北京", "2024-01-01 09:00:00", "0.5"]);
        assert_eq!(table.rows()[2][1], "");
    }

    #[test]
    fn missing_table_is_an_error() {
        let dir: TempDir = TempDir::new().unwrap();
        let path: PathBuf = create_weibo_db(&dir);

        let result = SqliteRepositoryImpl::new(path, "posts".to_string()).load_table();
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_is_not_created() {
        let dir: TempDir = TempDir::new().unwrap();
        let path: PathBuf = dir.path().join("absent.db");

        let result = SqliteRepositoryImpl::new(path.clone(), "weibo".to_string()).load_table();
        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn identifiers_are_quoted() {
        assert_eq!(SqliteRepositoryImpl::quote_identifier("weibo"), "\"weibo\"");
        assert_eq!(
            SqliteRepositoryImpl::quote_identifier("we\"ibo"),
            "\"we\"\"ibo\""
        );
    }
}
