/* group-by 결과 한 행을 정렬/합계 계산에 쓰기 위한 공통 트레이트 */
pub trait AggregateRow {
    type Key: Ord;

    fn group_key(&self) -> &Self::Key;
    fn count(&self) -> u64;
}

/* 테이블 한 행(문자열 셀) → 도메인 타입 변환을 위한 공통 트레이트 */
pub trait FromTableRow
where
    Self: Sized,
{
    type Columns;

    /// `Ok(None)` means the row is skipped (blank key cells).
    fn from_table_row(
        row_no: usize,
        cells: &[String],
        columns: &Self::Columns,
    ) -> anyhow::Result<Option<Self>>;
}

#[doc = "집계 행 전체 건수 합계"]
pub fn total_count<R: AggregateRow>(rows: &[R]) -> u64 {
    rows.iter().map(|row| row.count()).sum()
}

#[doc = "집계 행 중 최대 건수 (행이 없으면 0)"]
pub fn max_count<R: AggregateRow>(rows: &[R]) -> u64 {
    rows.iter().map(|row| row.count()).max().unwrap_or(0)
}
