use crate::common::*;

use crate::dto::{daily_count::*, daily_region_counts::*, region_count::*, region_share::*};

pub trait ChartService {
    #[doc = "
        일별 건수 꺾은선 차트를 PNG 로 저장
        # Arguments
        * `title` - 차트 제목
        * `daily` - 날짜 오름차순 일별 건수
        * `output_path` - 저장 경로
    "]
    fn render_daily_trend(
        &self,
        title: &str,
        daily: &[DailyCount],
        output_path: &Path,
    ) -> anyhow::Result<()>;

    fn render_region_counts(
        &self,
        title: &str,
        regions: &[RegionCount],
        output_path: &Path,
    ) -> anyhow::Result<()>;

    fn render_region_share(
        &self,
        title: &str,
        shares: &[RegionShare],
        output_path: &Path,
    ) -> anyhow::Result<()>;

    fn render_daily_region_comparison(
        &self,
        title: &str,
        counts: &DailyRegionCounts,
        output_path: &Path,
    ) -> anyhow::Result<()>;
}
