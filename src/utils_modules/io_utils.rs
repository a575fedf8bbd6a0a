use crate::common::*;

#[doc = r#"
    TOML 형식의 설정 파일을 읽어와서 지정된 구조체 타입으로 역직렬화하는 제네릭 함수.

    1. 지정된 경로의 TOML 파일을 문자열로 읽어온다
    2. `toml::from_str()`을 사용하여 TOML 문자열을 제네릭 타입 T로 파싱
    3. 파일 읽기나 파싱 실패 시 경로를 포함한 오류 반환

    # Arguments
    * `file_path` - 읽을 TOML 파일의 절대 경로 또는 상대 경로

    # Returns
    * `Result<T, anyhow::Error>` - 성공 시 파싱된 구조체, 실패 시 오류
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content: String = fs::read_to_string(file_path).with_context(|| {
        format!("[read_toml_from_file()] Failed to read '{}'", file_path)
    })?;

    let toml: T = toml::from_str(&toml_content).with_context(|| {
        format!("[read_toml_from_file()] Failed to parse '{}'", file_path)
    })?;

    Ok(toml)
}

#[doc = r#"
    기존 파일을 덮어쓰지 않도록 번호가 붙은 출력 파일 경로를 찾아주는 함수.

    counter 를 1부터 증가시키면서 `{output_dir}/{base_name}_{counter}{extension}` 경로에
    파일(또는 디렉토리)이 없는 첫 번째 경로를 반환한다. 상한은 없다.

    존재 여부 확인과 실제 쓰기 사이에 간격이 있으므로, 같은 디렉토리/같은 base_name 으로
    여러 프로세스가 동시에 실행되면 같은 경로를 받을 수 있다. 단일 실행 리포트 도구이므로
    이 제약은 그대로 둔다.

    # Arguments
    * `base_name` - 파일명 앞부분 (예: `daily_posts_trend`)
    * `extension` - 점을 포함한 확장자 (예: `.png`)
    * `output_dir` - 출력 디렉토리

    # Returns
    * `PathBuf` - 호출 시점에 존재하지 않는 경로
"#]
pub fn get_unique_filename(base_name: &str, extension: &str, output_dir: &Path) -> PathBuf {
    let mut counter: u64 = 1;

    loop {
        let file_path: PathBuf =
            output_dir.join(format!("{}_{}{}", base_name, counter, extension));

        if !file_path.exists() {
            return file_path;
        }

        counter += 1;
    }
}

#[doc = "출력 디렉토리가 없으면 생성"]
pub fn ensure_dir(dir: &Path) -> anyhow::Result<()> {
    if !dir.as_os_str().is_empty() && !dir.exists() {
        fs::create_dir_all(dir).with_context(|| {
            format!("[ensure_dir()] Failed to create output directory {:?}", dir)
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn sequential_calls_yield_numbered_paths() {
        let dir: TempDir = TempDir::new().unwrap();

        let mut allocated: Vec<PathBuf> = Vec::new();
        for _ in 0..4 {
            let path: PathBuf = get_unique_filename("region_counts", ".png", dir.path());
            fs::write(&path, b"x").unwrap();
            allocated.push(path);
        }

        let names: Vec<String> = allocated
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(
            names,
            vec![
                "region_counts_1.png",
                "region_counts_2.png",
                "region_counts_3.png",
                "region_counts_4.png"
            ]
        );
    }

    #[test]
    fn skips_existing_first_slot() {
        let dir: TempDir = TempDir::new().unwrap();
        fs::write(dir.path().join("daily_posts_trend_1.png"), b"x").unwrap();

        let path: PathBuf = get_unique_filename("daily_posts_trend", ".png", dir.path());
        assert_eq!(path, dir.path().join("daily_posts_trend_2.png"));
    }

    #[test]
    fn directory_entries_count_as_taken() {
        let dir: TempDir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("map_1.html")).unwrap();

        let path: PathBuf = get_unique_filename("map", ".html", dir.path());
        assert_eq!(path, dir.path().join("map_2.html"));
    }

    #[test]
    fn gaps_are_reused() {
        let dir: TempDir = TempDir::new().unwrap();
        fs::write(dir.path().join("pie_2.png"), b"x").unwrap();

        let path: PathBuf = get_unique_filename("pie", ".png", dir.path());
        assert_eq!(path, dir.path().join("pie_1.png"));
    }

    #[test]
    fn ensure_dir_creates_nested_output_dir() {
        let dir: TempDir = TempDir::new().unwrap();
        let nested: PathBuf = dir.path().join("out").join("charts");

        ensure_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
