use crate::common::*;

use crate::utils_modules::traits::*;

#[doc = "정식 행정구역명으로 변환된 지도 입력 행"]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct ProvinceCount {
    pub province: String,
    pub count: u64,
}

impl AggregateRow for ProvinceCount {
    type Key = String;

    fn group_key(&self) -> &String {
        &self.province
    }

    fn count(&self) -> u64 {
        self.count
    }
}
