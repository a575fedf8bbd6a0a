use crate::common::*;

#[doc = r#"
    환경변수를 읽어와서 반환하고, 환경변수가 설정되지 않은 경우 기본값을 사용하는 함수.

    리포트 도구는 커맨드라인 인자를 받지 않으므로, 설정 파일 경로와 로그 경로만
    환경변수(.env 포함)로 덮어쓸 수 있게 한다.

    # Arguments
    * `key` - 조회할 환경변수 키명
    * `default` - 환경변수가 없을 때 사용할 값

    # Returns
    * `String` - 환경변수 값 또는 기본값
"#]
fn get_env_or_default(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(val) if !val.trim().is_empty() => val,
        _ => default.to_string(),
    }
}

#[doc = r#"
    차트 작업 설정 파일(TOML)의 경로.

    `CHART_CONFIG_PATH` 환경변수로 지정하며, 없으면 `./config/chart_config.toml` 을 사용한다.
    이 파일에는 출력 디렉토리, 폰트, 차트 스타일, 차트별 작업(job) 목록이 들어 있다.
"#]
pub static CHART_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_default("CHART_CONFIG_PATH", "./config/chart_config.toml"));

#[doc = "로그 파일이 쌓이는 디렉토리 (`LOG_DIRECTORY`, 기본값 `./logs`)"]
pub static LOG_DIRECTORY: once_lazy<String> =
    once_lazy::new(|| get_env_or_default("LOG_DIRECTORY", "./logs"));
