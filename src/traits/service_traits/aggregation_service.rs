use crate::dto::{
    daily_count::*, daily_region_counts::*, province_count::*, region_count::*,
    region_share::*,
};
use crate::enums::sort_order::*;
use crate::model::record::post_record::*;

pub trait AggregationService {
    #[doc = "지역 허용 목록으로 필터링 (`None` 이면 그대로 반환)"]
    fn filter_regions(
        &self,
        records: Vec<PostRecord>,
        allow_list: Option<&[String]>,
    ) -> Vec<PostRecord>;

    #[doc = "날짜별 건수 - 작성 시각이 없는 레코드가 있으면 오류"]
    fn count_by_date(
        &self,
        records: &[PostRecord],
        sort: SortSpec,
    ) -> anyhow::Result<Vec<DailyCount>>;

    fn count_by_region(&self, records: &[PostRecord], sort: SortSpec) -> Vec<RegionCount>;

    #[doc = "지역별 건수에 전체 대비 비율(0~100)을 붙인다 - 입력 순서 유지"]
    fn share_by_region(&self, counts: &[RegionCount]) -> Vec<RegionShare>;

    #[doc = "날짜 × 지역 2키 집계"]
    fn count_by_date_and_region(
        &self,
        records: &[PostRecord],
        dense: bool,
    ) -> anyhow::Result<DailyRegionCounts>;

    #[doc = "지역 라벨을 정식 행정구역명으로 바꾸고, 변환할 수 없는 행은 제외"]
    fn to_province_counts(&self, counts: &[RegionCount]) -> Vec<ProvinceCount>;
}
