use crate::common::*;

use crate::dto::{
    daily_count::*, daily_region_counts::*, province_count::*, region_count::*,
    region_share::*,
};
use crate::enums::sort_order::*;
use crate::model::{record::post_record::*, region::province_mapping::*};
use crate::traits::service_traits::aggregation_service::*;
use crate::utils_modules::traits::*;

#[derive(Debug, Clone, Default, new)]
pub struct AggregationServiceImpl;

impl AggregationServiceImpl {
    #[doc = "선언된 정렬 기준으로 집계 행 정렬"]
    fn sort_rows<R: AggregateRow>(&self, rows: &mut [R], sort: SortSpec) {
        rows.sort_by(|a, b| sort.compare(a, b));
    }

    fn posted_on(record: &PostRecord) -> anyhow::Result<NaiveDate> {
        record.posted_on().ok_or_else(|| {
            anyhow!(
                "[AggregationServiceImpl->posted_on] Record for region '{}' has no timestamp; the timestamp column was not loaded",
                record.region()
            )
        })
    }
}

impl AggregationService for AggregationServiceImpl {
    fn filter_regions(
        &self,
        records: Vec<PostRecord>,
        allow_list: Option<&[String]>,
    ) -> Vec<PostRecord> {
        let allow_list: &[String] = match allow_list {
            Some(allow_list) => allow_list,
            None => return records,
        };

        let before: usize = records.len();

        let filtered: Vec<PostRecord> = records
            .into_iter()
            .filter(|record| allow_list.iter().any(|region| region == record.region()))
            .collect();

        info!(
            "Region filter {:?} kept {} of {} records",
            allow_list,
            filtered.len(),
            before
        );

        filtered
    }

    fn count_by_date(
        &self,
        records: &[PostRecord],
        sort: SortSpec,
    ) -> anyhow::Result<Vec<DailyCount>> {
        let mut counts: BTreeMap<NaiveDate, u64> = BTreeMap::new();

        for record in records {
            *counts.entry(Self::posted_on(record)?).or_insert(0) += 1;
        }

        let mut rows: Vec<DailyCount> = counts
            .into_iter()
            .map(|(date, count)| DailyCount::new(date, count))
            .collect();

        self.sort_rows(&mut rows, sort);

        Ok(rows)
    }

    fn count_by_region(&self, records: &[PostRecord], sort: SortSpec) -> Vec<RegionCount> {
        let mut counts: BTreeMap<&str, u64> = BTreeMap::new();

        for record in records {
            *counts.entry(record.region().as_str()).or_insert(0) += 1;
        }

        let mut rows: Vec<RegionCount> = counts
            .into_iter()
            .map(|(region, count)| RegionCount::new(region.to_string(), count))
            .collect();

        self.sort_rows(&mut rows, sort);

        rows
    }

    fn share_by_region(&self, counts: &[RegionCount]) -> Vec<RegionShare> {
        let total: u64 = total_count(counts);

        if total == 0 {
            return Vec::new();
        }

        counts
            .iter()
            .map(|row| {
                let percentage: f64 = row.count as f64 / total as f64 * 100.0;
                RegionShare::new(row.region.clone(), row.count, percentage)
            })
            .collect()
    }

    #[doc = r#"
        날짜 × 지역 2키 집계.

        1. (날짜, 지역) 별 건수를 센다
        2. 날짜는 오름차순, 지역은 전체 건수 내림차순(동률이면 이름순)으로 정렬
        3. dense 플래그를 결과에 기록 - 조회 시 빠진 조합은 0 으로 채운다
    "#]
    fn count_by_date_and_region(
        &self,
        records: &[PostRecord],
        dense: bool,
    ) -> anyhow::Result<DailyRegionCounts> {
        let mut cells: BTreeMap<(NaiveDate, String), u64> = BTreeMap::new();
        let mut dates: BTreeSet<NaiveDate> = BTreeSet::new();

        for record in records {
            let date: NaiveDate = Self::posted_on(record)?;
            dates.insert(date);
            *cells.entry((date, record.region().clone())).or_insert(0) += 1;
        }

        let regions: Vec<String> = self
            .count_by_region(records, SortSpec::count_desc())
            .into_iter()
            .map(|row| row.region)
            .collect();

        Ok(DailyRegionCounts::new(
            dates.into_iter().collect(),
            regions,
            cells,
            dense,
        ))
    }

    fn to_province_counts(&self, counts: &[RegionCount]) -> Vec<ProvinceCount> {
        let mut provinces: Vec<ProvinceCount> = Vec::with_capacity(counts.len());
        let mut dropped: Vec<&str> = Vec::new();

        for row in counts {
            match canonicalize_province(&row.region) {
                Some(province) => provinces.push(ProvinceCount::new(province.to_string(), row.count)),
                None => dropped.push(&row.region),
            }
        }

        if !dropped.is_empty() {
            warn!(
                "Dropped {} region label(s) with no province mapping: {:?}",
                dropped.len(),
                dropped
            );
        }

        provinces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(region: &str, date: NaiveDate, hour: u32) -> PostRecord {
        PostRecord::new(region.to_string(), date.and_hms_opt(hour, 0, 0))
    }

    fn untimed(region: &str) -> PostRecord {
        PostRecord::new(region.to_string(), None)
    }

    fn allow_list() -> Vec<String> {
        vec!["北京".to_string(), "河北".to_string(), "天津".to_string()]
    }

    fn sample_records() -> Vec<PostRecord> {
        vec![
            record("北京", ymd(2024, 1, 1), 8),
            record("河北", ymd(2024, 1, 1), 9),
            record("北京", ymd(2024, 1, 2), 10),
            record("上海", ymd(2024, 1, 2), 11),
            record("北京", ymd(2024, 1, 3), 23),
            record("天津", ymd(2024, 1, 3), 0),
            record("广东", ymd(2024, 1, 1), 12),
        ]
    }

    #[test]
    fn end_to_end_dense_daily_by_region() {
        let service: AggregationServiceImpl = AggregationServiceImpl::new();
        let records: Vec<PostRecord> = vec![
            record("北京", ymd(2024, 1, 1), 0),
            record("河北", ymd(2024, 1, 1), 0),
            record("北京", ymd(2024, 1, 2), 0),
        ];

        let allow: Vec<String> = allow_list();
        let filtered: Vec<PostRecord> = service.filter_regions(records, Some(allow.as_slice()));
        let counts: DailyRegionCounts = service.count_by_date_and_region(&filtered, true).unwrap();

        assert_eq!(
            counts.rows(),
            vec![
                DailyRegionCount::new(ymd(2024, 1, 1), "北京".to_string(), 1),
                DailyRegionCount::new(ymd(2024, 1, 1), "河北".to_string(), 1),
                DailyRegionCount::new(ymd(2024, 1, 2), "北京".to_string(), 1),
                DailyRegionCount::new(ymd(2024, 1, 2), "河北".to_string(), 0),
            ]
        );
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.daily_totals(), vec![2, 1]);
    }

    #[test]
    fn dense_result_covers_every_observed_combination() {
        let service: AggregationServiceImpl = AggregationServiceImpl::new();
        let records: Vec<PostRecord> = sample_records();

        let counts: DailyRegionCounts = service.count_by_date_and_region(&records, true).unwrap();

        assert_eq!(counts.dates().len(), 3);
        assert_eq!(counts.regions().len(), 5);
        assert_eq!(counts.rows().len(), 3 * 5);
        assert_eq!(
            counts.rows().iter().map(|row| row.count).sum::<u64>(),
            records.len() as u64
        );
    }

    #[test]
    fn sparse_result_only_lists_observed_combinations() {
        let service: AggregationServiceImpl = AggregationServiceImpl::new();
        let records: Vec<PostRecord> = sample_records();

        let counts: DailyRegionCounts = service.count_by_date_and_region(&records, false).unwrap();

        assert_eq!(counts.rows().len(), 7);
        assert!(counts.rows().iter().all(|row| row.count > 0));
        assert_eq!(
            counts
                .dates()
                .iter()
                .map(|date| counts.count(date, "上海"))
                .collect::<Vec<u64>>(),
            vec![0, 1, 0]
        );
    }

    #[test]
    fn regions_are_ordered_by_total_descending() {
        let service: AggregationServiceImpl = AggregationServiceImpl::new();
        let counts: DailyRegionCounts =
            service.count_by_date_and_region(&sample_records(), true).unwrap();

        assert_eq!(counts.regions()[0], "北京");
        assert_eq!(
            counts.regions()[1..].to_vec(),
            vec!["上海", "天津", "广东", "河北"]
        );
    }

    #[test]
    fn single_key_counts_sum_to_filtered_records() {
        let service: AggregationServiceImpl = AggregationServiceImpl::new();
        let allow: Vec<String> = allow_list();
        let filtered: Vec<PostRecord> = service.filter_regions(sample_records(), Some(allow.as_slice()));

        let by_region: Vec<RegionCount> =
            service.count_by_region(&filtered, SortSpec::count_desc());
        let by_date: Vec<DailyCount> = service
            .count_by_date(&filtered, SortSpec::key_asc())
            .unwrap();

        assert_eq!(filtered.len(), 5);
        assert_eq!(total_count(&by_region), 5);
        assert_eq!(total_count(&by_date), 5);
    }

    #[test]
    fn region_counts_follow_declared_order() {
        let service: AggregationServiceImpl = AggregationServiceImpl::new();
        let records: Vec<PostRecord> = sample_records();

        let desc: Vec<RegionCount> = service.count_by_region(&records, SortSpec::count_desc());
        assert_eq!(desc[0], RegionCount::new("北京".to_string(), 3));
        assert!(desc.windows(2).all(|w| w[0].count >= w[1].count));

        let by_key: Vec<RegionCount> = service.count_by_region(&records, SortSpec::key_asc());
        assert!(by_key.windows(2).all(|w| w[0].region < w[1].region));
    }

    #[test]
    fn daily_counts_ascend_by_date() {
        let service: AggregationServiceImpl = AggregationServiceImpl::new();

        let daily: Vec<DailyCount> = service
            .count_by_date(&sample_records(), SortSpec::key_asc())
            .unwrap();

        assert_eq!(
            daily,
            vec![
                DailyCount::new(ymd(2024, 1, 1), 3),
                DailyCount::new(ymd(2024, 1, 2), 2),
                DailyCount::new(ymd(2024, 1, 3), 2),
            ]
        );

        let desc: Vec<DailyCount> = service
            .count_by_date(&sample_records(), SortSpec::new(SortKey::Key, SortOrder::Desc))
            .unwrap();
        assert_eq!(desc[0].date, ymd(2024, 1, 3));
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let service: AggregationServiceImpl = AggregationServiceImpl::new();
        let records: Vec<PostRecord> = vec![
            untimed("北京"),
            untimed("北京"),
            untimed("河北"),
            untimed("天津"),
            untimed("天津"),
            untimed("天津"),
            untimed("上海"),
        ];

        let counts: Vec<RegionCount> = service.count_by_region(&records, SortSpec::count_desc());
        let shares: Vec<RegionShare> = service.share_by_region(&counts);

        let sum: f64 = shares.iter().map(|share| share.percentage).sum();
        assert!((sum - 100.0).abs() <= 0.1);
        assert_eq!(shares[0].region, "天津");
        assert!((shares[0].percentage - 300.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn empty_input_produces_no_rows() {
        let service: AggregationServiceImpl = AggregationServiceImpl::new();
        let allow: Vec<String> = vec!["西藏".to_string()];
        let filtered: Vec<PostRecord> = service.filter_regions(sample_records(), Some(allow.as_slice()));

        assert!(filtered.is_empty());
        assert!(service.count_by_region(&filtered, SortSpec::count_desc()).is_empty());
        assert!(service.share_by_region(&[]).is_empty());
        assert!(service
            .count_by_date(&filtered, SortSpec::key_asc())
            .unwrap()
            .is_empty());

        let counts: DailyRegionCounts = service.count_by_date_and_region(&filtered, true).unwrap();
        assert!(counts.is_empty());
        assert!(counts.rows().is_empty());
    }

    #[test]
    fn no_allow_list_keeps_everything() {
        let service: AggregationServiceImpl = AggregationServiceImpl::new();
        assert_eq!(service.filter_regions(sample_records(), None).len(), 7);
    }

    #[test]
    fn date_grouping_requires_timestamps() {
        let service: AggregationServiceImpl = AggregationServiceImpl::new();
        let records: Vec<PostRecord> = vec![untimed("北京")];

        assert!(service.count_by_date(&records, SortSpec::key_asc()).is_err());
        assert!(service.count_by_date_and_region(&records, true).is_err());
    }

    #[test]
    fn unknown_regions_are_excluded_from_map_input() {
        let service: AggregationServiceImpl = AggregationServiceImpl::new();
        let counts: Vec<RegionCount> = vec![
            RegionCount::new("北京".to_string(), 4),
            RegionCount::new("美国".to_string(), 2),
            RegionCount::new("广西".to_string(), 1),
        ];

        assert_eq!(
            service.to_province_counts(&counts),
            vec![
                ProvinceCount::new("北京市".to_string(), 4),
                ProvinceCount::new("广西壮族自治区".to_string(), 1),
            ]
        );
    }
}
