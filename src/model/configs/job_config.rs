use crate::common::*;

use crate::enums::{chart_kind::*, sort_order::*};
use crate::model::configs::source_config::*;

#[doc = r#"
    논리 컬럼별로 허용하는 실제 컬럼명 목록.

    목록 앞쪽이 우선이며, 첫 번째로 테이블에 존재하는 이름을 사용한다.
"#]
#[derive(Debug, Deserialize, Serialize, Getters, Clone, PartialEq, Eq, new)]
#[getset(get = "pub")]
#[serde(default)]
pub struct ColumnConfig {
    pub region: Vec<String>,
    pub timestamp: Vec<String>,
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            region: vec!["ip".to_string()],
            timestamp: vec![
                "发布时间".to_string(),
                "发布日期".to_string(),
                "post_time".to_string(),
                "created_at".to_string(),
            ],
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, Serialize, Getters, Clone)]
#[getset(get = "pub")]
pub struct JobConfig {
    pub name: String,
    pub chart: ChartKind,
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub base_name: String,
    #[serde(default)]
    pub title: Option<String>,
    pub source: SourceConfig,
    #[serde(default)]
    pub columns: ColumnConfig,
    #[serde(default)]
    pub region_allow_list: Option<Vec<String>>,
    #[serde(default)]
    pub sort: Option<SortSpec>,
    #[serde(default = "default_true")]
    pub dense: bool,
}

impl JobConfig {
    pub fn effective_title(&self) -> &str {
        self.title
            .as_deref()
            .unwrap_or_else(|| self.chart.default_title())
    }

    pub fn effective_sort(&self) -> SortSpec {
        self.sort.unwrap_or_else(|| self.chart.default_sort())
    }
}
