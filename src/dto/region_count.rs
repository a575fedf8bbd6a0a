use crate::common::*;

use crate::utils_modules::traits::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct RegionCount {
    pub region: String,
    pub count: u64,
}

impl AggregateRow for RegionCount {
    type Key = String;

    fn group_key(&self) -> &String {
        &self.region
    }

    fn count(&self) -> u64 {
        self.count
    }
}
