use crate::common::*;

use crate::model::configs::{
    font_config::*, job_config::*, map_config::*, style_config::*, system_config::*,
};

use crate::utils_modules::io_utils::*;

#[derive(Debug, Deserialize, Getters, Clone)]
#[getset(get = "pub")]
pub struct TotalConfig {
    #[serde(default)]
    pub system: SystemConfig,
    #[serde(default)]
    pub font: FontConfig,
    #[serde(default)]
    pub style: StyleConfig,
    #[serde(default)]
    pub map: MapConfig,
    #[serde(default)]
    pub jobs: Vec<JobConfig>,
}

impl TotalConfig {
    #[doc = r#"
        설정 파일을 읽어 `TotalConfig` 를 만든다.

        1. TOML 파일을 역직렬화
        2. 작업 이름 중복, 빈 base_name, 빈 컬럼 alias 목록을 검사
    "#]
    pub fn load(config_path: &str) -> anyhow::Result<Self> {
        info!("TotalConfig::load() from {}", config_path);

        let config: TotalConfig = read_toml_from_file::<TotalConfig>(config_path)?;
        config.validate()?;

        Ok(config)
    }

    pub fn from_toml_str(toml_str: &str) -> anyhow::Result<Self> {
        let config: TotalConfig = toml::from_str(toml_str)
            .map_err(|e| anyhow!("[TotalConfig->from_toml_str] {}", e))?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        let mut seen: BTreeSet<&str> = BTreeSet::new();

        for job in &self.jobs {
            if !seen.insert(job.name()) {
                return Err(anyhow!(
                    "[TotalConfig->validate] Duplicate job name '{}'",
                    job.name()
                ));
            }

            if job.base_name().trim().is_empty() {
                return Err(anyhow!(
                    "[TotalConfig->validate] Job '{}' has an empty base_name",
                    job.name()
                ));
            }

            if job.columns().region().is_empty()
                || (job.chart().needs_timestamp() && job.columns().timestamp().is_empty())
            {
                return Err(anyhow!(
                    "[TotalConfig->validate] Job '{}' has an empty column alias list",
                    job.name()
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{chart_kind::*, sort_order::*};
    use crate::model::configs::source_config::*;

    const SHIPPED_CONFIG: &str = include_str!("../../../config/chart_config.toml");

    #[test]
    fn shipped_config_defines_all_five_charts() {
        let config: TotalConfig = TotalConfig::from_toml_str(SHIPPED_CONFIG).unwrap();

        let charts: Vec<ChartKind> = config.jobs().iter().map(|job| *job.chart()).collect();
        assert_eq!(
            charts,
            vec![
                ChartKind::DailyTrend,
                ChartKind::RegionCounts,
                ChartKind::RegionShare,
                ChartKind::ProvinceMap,
                ChartKind::DailyRegionComparison,
            ]
        );

        let bases: Vec<&str> = config.jobs().iter().map(|job| job.base_name().as_str()).collect();
        assert_eq!(
            bases,
            vec![
                "daily_posts_trend",
                "region_counts",
                "region_posts_pie_chart",
                "province_posts_heatmap",
                "daily_posts_comparison",
            ]
        );
    }

    #[test]
    fn minimal_job_gets_defaults() {
        let config: TotalConfig = TotalConfig::from_toml_str(
            r#"
            [[jobs]]
            name = "pie"
            chart = "region_share"
            base_name = "pie"
            source = { kind = "excel", path = "posts.xlsx" }
            "#,
        )
        .unwrap();

        let job: &JobConfig = &config.jobs()[0];
        assert!(*job.enabled());
        assert!(*job.dense());
        assert_eq!(job.columns().region(), &vec!["ip".to_string()]);
        assert_eq!(job.effective_sort(), SortSpec::count_desc());
        assert_eq!(job.effective_title(), "各地区帖子数量占比");
        assert_eq!(
            job.source(),
            &SourceConfig::Excel {
                path: PathBuf::from("posts.xlsx"),
                sheet: None
            }
        );
        assert_eq!(config.system().output_dir(), &PathBuf::from("."));
        assert_eq!(config.map().pieces().len(), 5);
    }

    #[test]
    fn duplicate_job_names_are_rejected() {
        let result = TotalConfig::from_toml_str(
            r#"
            [[jobs]]
            name = "a"
            chart = "region_counts"
            base_name = "a"
            source = { kind = "sqlite", path = "weibo.db", table = "weibo" }

            [[jobs]]
            name = "a"
            chart = "region_share"
            base_name = "b"
            source = { kind = "sqlite", path = "weibo.db", table = "weibo" }
            "#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn unknown_chart_kind_is_rejected() {
        let result = TotalConfig::from_toml_str(
            r#"
            [[jobs]]
            name = "a"
            chart = "scatter"
            base_name = "a"
            source = { kind = "sqlite", path = "weibo.db", table = "weibo" }
            "#,
        );

        assert!(result.is_err());
    }
}
