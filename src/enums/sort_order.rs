use crate::common::*;

use crate::utils_modules::traits::*;

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[doc = "집계 행을 정렬할 기준 - 그룹 키(날짜/지역) 또는 건수"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Key,
    Count,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct SortSpec {
    pub key: SortKey,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn key_asc() -> Self {
        Self::new(SortKey::Key, SortOrder::Asc)
    }

    pub fn count_desc() -> Self {
        Self::new(SortKey::Count, SortOrder::Desc)
    }

    #[doc = r#"
        두 집계 행의 순서를 비교한다.

        건수 기준 정렬에서 건수가 같으면 그룹 키 오름차순으로 정렬해서
        실행할 때마다 같은 순서가 나오도록 한다.
    "#]
    pub fn compare<R: AggregateRow>(&self, a: &R, b: &R) -> Ordering {
        let primary: Ordering = match self.key {
            SortKey::Key => a.group_key().cmp(b.group_key()),
            SortKey::Count => a.count().cmp(&b.count()),
        };

        let primary: Ordering = match self.order {
            SortOrder::Asc => primary,
            SortOrder::Desc => primary.reverse(),
        };

        primary.then_with(|| a.group_key().cmp(b.group_key()))
    }
}
