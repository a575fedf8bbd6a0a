use crate::common::*;

use crate::model::configs::font_config::*;

use plotters::style::{register_font, FontStyle};

/* 폰트를 쓸 수 없을 때 사용하는 기본 폰트 패밀리 */
pub const FALLBACK_FONT_FAMILY: &str = "sans-serif";

/* TrueType / OpenType / TrueType collection 파일 시그니처 */
const FONT_MAGIC: [[u8; 4]; 4] = [
    [0x00, 0x01, 0x00, 0x00],
    *b"OTTO",
    *b"true",
    *b"ttcf",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    NotConfigured,
    Unreadable { path: PathBuf, message: String },
    NotAFont { path: PathBuf },
}

impl Display for FallbackReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FallbackReason::NotConfigured => write!(f, "no preferred font configured"),
            FallbackReason::Unreadable { path, message } => {
                write!(f, "cannot read {:?}: {}", path, message)
            }
            FallbackReason::NotAFont { path } => {
                write!(f, "{:?} is not a TrueType/OpenType font", path)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontChoice {
    Preferred { family: String, path: PathBuf },
    Fallback(FallbackReason),
}

impl FontChoice {
    #[doc = "렌더러에 전달할 폰트 패밀리명"]
    pub fn family(&self) -> &str {
        match self {
            FontChoice::Preferred { family, .. } => family,
            FontChoice::Fallback(_) => FALLBACK_FONT_FAMILY,
        }
    }
}

#[doc = r#"
    폰트 파일을 읽어 렌더러의 폰트 테이블에 `family` 이름으로 등록하는 함수.

    렌더러는 등록된 폰트 데이터만 사용하므로, 차트를 그리기 전에 반드시 호출되어야 한다.
    등록된 데이터는 프로세스가 끝날 때까지 유지된다.

    # Errors
    * `FallbackReason::Unreadable` - 파일을 읽을 수 없을 때
    * `FallbackReason::NotAFont` - 시그니처가 맞지 않거나 폰트 테이블을 해석할 수 없을 때
"#]
pub fn register_font_file(family: &str, path: &Path) -> Result<(), FallbackReason> {
    let bytes: Vec<u8> = fs::read(path).map_err(|e| FallbackReason::Unreadable {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let is_font: bool = bytes
        .get(..4)
        .map(|header| FONT_MAGIC.iter().any(|magic| magic == header))
        .unwrap_or(false);

    if !is_font {
        return Err(FallbackReason::NotAFont {
            path: path.to_path_buf(),
        });
    }

    let data: &'static [u8] = Box::leak(bytes.into_boxed_slice());

    register_font(family, FontStyle::Normal, data).map_err(|_| FallbackReason::NotAFont {
        path: path.to_path_buf(),
    })
}

#[doc = r#"
    설정된 선호 폰트(한자 표시용)를 불러오는 함수.

    1. 폰트 경로가 설정되지 않았으면 `NotConfigured`
    2. 파일을 읽을 수 없으면 `Unreadable`
    3. TTF/OTF/TTC 파일로 해석되지 않으면 `NotAFont`
    4. 모두 통과하면 설정된 패밀리명으로 등록 후 `Preferred`

    fallback 은 오류가 아니라 정상 분기이며, 호출 측에서 info 로그만 남긴다.
"#]
pub fn load_font(font_config: &FontConfig) -> FontChoice {
    let path: &Path = match font_config.path() {
        Some(path) => path,
        None => return FontChoice::Fallback(FallbackReason::NotConfigured),
    };

    match register_font_file(font_config.family(), path) {
        Ok(()) => FontChoice::Preferred {
            family: font_config.family().to_string(),
            path: path.to_path_buf(),
        },
        Err(reason) => FontChoice::Fallback(reason),
    }
}

#[doc = r#"
    `fallback_paths` 중 처음으로 등록에 성공한 폰트를 `FALLBACK_FONT_FAMILY` 로 등록한다.

    # Returns
    * `Some(PathBuf)` - 등록된 폰트 파일 경로
    * `None` - 사용할 수 있는 폰트가 하나도 없을 때 (차트 글자 렌더링 실패)
"#]
pub fn register_fallback_font(font_config: &FontConfig) -> Option<PathBuf> {
    font_config
        .fallback_paths()
        .iter()
        .find(|path| register_font_file(FALLBACK_FONT_FAMILY, path).is_ok())
        .cloned()
}
