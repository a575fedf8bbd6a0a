use crate::common::*;

use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, LoggerHandle, Naming,
    Record,
};

#[doc = r#"
    전역 로거를 설정하는 함수.

    1. `log_directory` 아래에 `region_post_charts_*.log` 파일로 기록
    2. 하루 단위로 로그 파일을 교체하고 최근 30개만 유지
    3. info 레벨 이상은 stdout 으로도 복제 출력
    4. `RUST_LOG` 환경변수가 있으면 해당 레벨 설정을 우선 적용

    반환되는 `LoggerHandle` 이 drop 되면 파일 로깅이 중단되므로 main 에서 보관해야 한다.
"#]
pub fn set_global_logger(log_directory: &str) -> anyhow::Result<LoggerHandle> {
    let handle: LoggerHandle = Logger::try_with_env_or_str("info")?
        .log_to_file(
            FileSpec::default()
                .directory(log_directory)
                .basename("region_post_charts"),
        )
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(30),
        )
        .format_for_files(custom_format)
        .format_for_stdout(custom_format)
        .duplicate_to_stdout(Duplicate::Info)
        .start()
        .map_err(|e| anyhow!("[set_global_logger()] Failed to start logger: {:?}", e))?;

    Ok(handle)
}

#[doc = "로그 한 줄 형식: [시각] [레벨] [모듈:라인] 메시지"]
fn custom_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] [{}:{}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        record.module_path().unwrap_or("<unnamed>"),
        record.line().unwrap_or(0),
        &record.args()
    )
}
