use crate::common::*;

use std::process::{Command, Stdio};

#[doc = r#"
    저장된 차트 파일을 OS 기본 뷰어로 여는 함수.

    뷰어 프로세스는 기다리지 않는다(spawn 후 바로 반환).
    실행 실패는 호출 측에서 warn 로그로만 처리한다.
"#]
pub fn open_in_viewer(path: &Path) -> anyhow::Result<()> {
    let mut command: Command = viewer_command(path);

    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("[open_in_viewer()] Failed to launch viewer for {:?}", path))?;

    Ok(())
}

fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "windows") {
        let mut command: Command = Command::new("cmd");
        command.args(["/C", "start", ""]).arg(path);
        command
    } else if cfg!(target_os = "macos") {
        let mut command: Command = Command::new("open");
        command.arg(path);
        command
    } else {
        let mut command: Command = Command::new("xdg-open");
        command.arg(path);
        command
    }
}
