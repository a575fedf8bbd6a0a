use crate::common::*;

/* 선호 폰트를 쓸 수 없을 때 순서대로 시도하는 시스템 폰트 파일 */
const SYSTEM_FALLBACK_FONTS: [&str; 9] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\msyh.ttc",
    "C:\\Windows\\Fonts\\arial.ttf",
];

#[derive(Debug, Deserialize, Serialize, Getters, Clone)]
#[getset(get = "pub")]
#[serde(default)]
pub struct FontConfig {
    pub path: Option<PathBuf>,
    pub family: String,
    pub fallback_paths: Vec<PathBuf>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            path: None,
            family: "SimHei".to_string(),
            fallback_paths: SYSTEM_FALLBACK_FONTS.iter().map(PathBuf::from).collect(),
        }
    }
}
