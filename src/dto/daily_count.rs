use crate::common::*;

use crate::utils_modules::traits::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: u64,
}

impl AggregateRow for DailyCount {
    type Key = NaiveDate;

    fn group_key(&self) -> &NaiveDate {
        &self.date
    }

    fn count(&self) -> u64 {
        self.count
    }
}
