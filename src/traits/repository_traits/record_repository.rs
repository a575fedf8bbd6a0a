use crate::model::record::record_table::*;

pub trait RecordRepository {
    #[doc = "원본 테이블/시트 전체를 한 번 읽어 `RecordTable` 로 반환"]
    fn load_table(&self) -> anyhow::Result<RecordTable>;
}
