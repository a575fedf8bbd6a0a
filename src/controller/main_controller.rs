use crate::common::*;

use crate::utils_modules::{io_utils::*, viewer_utils::*};

use crate::model::{
    configs::{job_config::*, source_config::*, system_config::*},
    record::{post_record::*, record_table::*},
};

use crate::dto::{province_count::*, region_count::*};

use crate::enums::chart_kind::*;

use crate::repository::{excel_repository_impl::*, sqlite_repository_impl::*};

use crate::traits::{
    repository_traits::record_repository::*,
    service_traits::{aggregation_service::*, chart_service::*, map_service::*},
};

#[derive(Debug, new)]
pub struct MainController<A: AggregationService, C: ChartService, M: MapService> {
    aggregation_service: A,
    chart_service: C,
    map_service: M,
    system_config: SystemConfig,
    jobs: Vec<JobConfig>,
}

impl<A: AggregationService, C: ChartService, M: MapService> MainController<A, C, M> {
    #[doc = r#"
        설정된 차트 작업들을 순서대로 실행하는 핵심 함수.

        1. `enabled = false` 인 작업은 건너뛴다
        2. 작업 하나가 실패하면 error 로그를 남기고 다음 작업을 계속 실행
        3. 모든 작업이 끝난 뒤, 실패한 작업이 하나라도 있으면 Err 반환

        # Returns
        * `anyhow::Result<()>` - 모든 작업 성공 시 Ok(()), 실패 작업이 있으면 Err
    "#]
    pub fn main_task(&self) -> anyhow::Result<()> {
        let enabled_jobs: Vec<&JobConfig> = self.jobs.iter().filter(|job| job.enabled).collect();

        if enabled_jobs.is_empty() {
            warn!("No enabled chart jobs in configuration.");
            return Ok(());
        }

        let mut failed_jobs: Vec<&str> = Vec::new();

        for job in &enabled_jobs {
            info!("[{}] start ({})", job.name(), job.chart());

            match self.run_job(job) {
                Ok(saved_path) => {
                    info!("[{}] saved to {:?}", job.name(), saved_path);
                }
                Err(e) => {
                    error!("[{}] job failed: {:?}", job.name(), e);
                    failed_jobs.push(job.name());
                }
            }
        }

        if failed_jobs.is_empty() {
            Ok(())
        } else {
            Err(anyhow!(
                "[MainController->main_task] {} of {} jobs failed: {:?}",
                failed_jobs.len(),
                enabled_jobs.len(),
                failed_jobs
            ))
        }
    }

    #[doc = "작업 설정의 원본 종류에 맞는 저장소 생성"]
    fn open_repository(source: &SourceConfig) -> Box<dyn RecordRepository> {
        match source {
            SourceConfig::Sqlite { path, table } => {
                Box::new(SqliteRepositoryImpl::new(path.clone(), table.clone()))
            }
            SourceConfig::Excel { path, sheet } => {
                Box::new(ExcelRepositoryImpl::new(path.clone(), sheet.clone()))
            }
        }
    }

    #[doc = r#"
        작업 하나의 입력 레코드를 읽는다.

        1. 원본 테이블 전체 로드
        2. alias 목록으로 지역/타임스탬프 컬럼 위치 결정
        3. 행 → `PostRecord` 변환 (빈 셀 행은 건너뜀)
        4. 지역 허용 목록이 있으면 필터링
    "#]
    fn load_records(&self, job: &JobConfig) -> anyhow::Result<Vec<PostRecord>> {
        let table: RecordTable = Self::open_repository(job.source()).load_table()?;

        let columns: PostColumns =
            PostColumns::resolve(&table, job.columns(), job.chart().needs_timestamp())?;

        let records: Vec<PostRecord> = table.to_records::<PostRecord>(&columns)?;

        Ok(self
            .aggregation_service
            .filter_regions(records, job.region_allow_list().as_deref()))
    }

    #[doc = r#"
        차트 작업 하나를 실행하고 저장된 파일 경로를 반환한다.

        출력 파일명은 `<base_name>_<n><ext>` 형식으로, 이미 있는 파일은 덮어쓰지 않는다.
    "#]
    pub fn run_job(&self, job: &JobConfig) -> anyhow::Result<PathBuf> {
        let records: Vec<PostRecord> = self.load_records(job)?;

        let output_dir: &Path = self.system_config.output_dir();
        ensure_dir(output_dir)?;

        let output_path: PathBuf =
            get_unique_filename(job.base_name(), job.chart().extension(), output_dir);

        self.render(job, &records, &output_path)?;

        if *self.system_config.open_viewer() {
            if let Err(e) = open_in_viewer(&output_path) {
                warn!("[{}] could not open viewer: {:?}", job.name(), e);
            }
        }

        Ok(output_path)
    }

    fn render(&self, job: &JobConfig, records: &[PostRecord], output_path: &Path) -> anyhow::Result<()> {
        let title: &str = job.effective_title();

        match job.chart() {
            ChartKind::DailyTrend => {
                let daily = self
                    .aggregation_service
                    .count_by_date(records, job.effective_sort())?;

                self.chart_service
                    .render_daily_trend(title, &daily, output_path)
            }
            ChartKind::RegionCounts => {
                let regions: Vec<RegionCount> = self
                    .aggregation_service
                    .count_by_region(records, job.effective_sort());

                self.chart_service
                    .render_region_counts(title, &regions, output_path)
            }
            ChartKind::RegionShare => {
                let regions: Vec<RegionCount> = self
                    .aggregation_service
                    .count_by_region(records, job.effective_sort());
                let shares = self.aggregation_service.share_by_region(&regions);

                self.chart_service
                    .render_region_share(title, &shares, output_path)
            }
            ChartKind::ProvinceMap => {
                let regions: Vec<RegionCount> = self
                    .aggregation_service
                    .count_by_region(records, job.effective_sort());
                let provinces: Vec<ProvinceCount> =
                    self.aggregation_service.to_province_counts(&regions);

                self.map_service
                    .render_province_map(title, &provinces, output_path)
            }
            ChartKind::DailyRegionComparison => {
                let counts = self
                    .aggregation_service
                    .count_by_date_and_region(records, *job.dense())?;

                self.chart_service
                    .render_daily_region_comparison(title, &counts, output_path)
            }
        }
    }
}
