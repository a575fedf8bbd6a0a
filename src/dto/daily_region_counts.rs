use crate::common::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, new)]
pub struct DailyRegionCount {
    pub date: NaiveDate,
    pub region: String,
    pub count: u64,
}

#[doc = r#"
    날짜 × 지역 2키 집계 결과.

    - `dates` : 관측된 날짜 (오름차순)
    - `regions` : 관측된 지역 (전체 건수 내림차순, 동률이면 이름순)
    - `cells` : 실제로 관측된 (날짜, 지역) 조합의 건수
    - `dense` : true 이면 `rows()` 가 모든 조합을 0 으로 채워 반환
"#]
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct DailyRegionCounts {
    dates: Vec<NaiveDate>,
    regions: Vec<String>,
    cells: BTreeMap<(NaiveDate, String), u64>,
    dense: bool,
}

impl DailyRegionCounts {
    #[doc = "(날짜, 지역) 건수 - 관측되지 않은 조합은 0"]
    pub fn count(&self, date: &NaiveDate, region: &str) -> u64 {
        self.cells
            .get(&(*date, region.to_string()))
            .copied()
            .unwrap_or(0)
    }

    #[doc = "날짜별 전체 건수 (dates 순서)"]
    pub fn daily_totals(&self) -> Vec<u64> {
        self.dates
            .iter()
            .map(|date| {
                self.regions
                    .iter()
                    .map(|region| self.count(date, region))
                    .sum()
            })
            .collect()
    }

    pub fn total(&self) -> u64 {
        self.cells.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    #[doc = r#"
        집계 행 목록을 날짜 → 지역 순으로 반환한다.

        dense 이면 `dates.len() * regions.len()` 행이 나오고, 아니면 관측된 조합만 나온다.
    "#]
    pub fn rows(&self) -> Vec<DailyRegionCount> {
        let mut rows: Vec<DailyRegionCount> = Vec::new();

        for date in &self.dates {
            for region in &self.regions {
                let count: u64 = self.count(date, region);

                if self.dense || count > 0 {
                    rows.push(DailyRegionCount::new(*date, region.clone(), count));
                }
            }
        }

        rows
    }
}
