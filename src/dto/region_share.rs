use crate::common::*;

use crate::utils_modules::traits::*;

#[doc = "지역별 건수와 전체 대비 비율(0~100)"]
#[derive(Debug, Clone, PartialEq, Serialize, new)]
pub struct RegionShare {
    pub region: String,
    pub count: u64,
    pub percentage: f64,
}

impl AggregateRow for RegionShare {
    type Key = String;

    fn group_key(&self) -> &String {
        &self.region
    }

    fn count(&self) -> u64 {
        self.count
    }
}
