use crate::common::*;

use crate::enums::sort_order::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    DailyTrend,
    RegionCounts,
    RegionShare,
    ProvinceMap,
    DailyRegionComparison,
}

impl ChartKind {
    #[doc = "날짜 단위 집계가 필요한 차트인지 여부 (타임스탬프 컬럼 필수)"]
    pub fn needs_timestamp(&self) -> bool {
        matches!(self, ChartKind::DailyTrend | ChartKind::DailyRegionComparison)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ChartKind::ProvinceMap => ".html",
            _ => ".png",
        }
    }

    pub fn default_title(&self) -> &'static str {
        match self {
            ChartKind::DailyTrend => "每日帖子数量趋势",
            ChartKind::RegionCounts => "各地区数据量统计",
            ChartKind::RegionShare => "各地区帖子数量占比",
            ChartKind::ProvinceMap => "各省帖子数量热力图",
            ChartKind::DailyRegionComparison => "每日各地区帖子数量分布",
        }
    }

    pub fn default_sort(&self) -> SortSpec {
        match self {
            ChartKind::RegionCounts | ChartKind::RegionShare => SortSpec::count_desc(),
            _ => SortSpec::key_asc(),
        }
    }
}

impl Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name: &str = match self {
            ChartKind::DailyTrend => "daily_trend",
            ChartKind::RegionCounts => "region_counts",
            ChartKind::RegionShare => "region_share",
            ChartKind::ProvinceMap => "province_map",
            ChartKind::DailyRegionComparison => "daily_region_comparison",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_map_renders_html() {
        assert_eq!(ChartKind::ProvinceMap.extension(), ".html");
        assert_eq!(ChartKind::RegionShare.extension(), ".png");
        assert_eq!(ChartKind::DailyTrend.extension(), ".png");
    }

    #[test]
    fn daily_charts_need_timestamps() {
        assert!(ChartKind::DailyTrend.needs_timestamp());
        assert!(ChartKind::DailyRegionComparison.needs_timestamp());
        assert!(!ChartKind::RegionCounts.needs_timestamp());
        assert!(!ChartKind::ProvinceMap.needs_timestamp());
    }

    #[test]
    fn regional_summaries_default_to_count_descending() {
        assert_eq!(ChartKind::RegionCounts.default_sort(), SortSpec::count_desc());
        assert_eq!(ChartKind::DailyTrend.default_sort(), SortSpec::key_asc());
    }
}
