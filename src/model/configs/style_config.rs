use crate::common::*;

use crate::model::chart_style::*;

/* seaborn "pastel" 팔레트 */
const PASTEL_PALETTE: [&str; 10] = [
    "#a1c9f4", "#ffb482", "#8de5a1", "#ff9f9b", "#d0bbff", "#debb9b", "#fab0e4", "#cfcfcf",
    "#fffea3", "#b9f2f0",
];

#[derive(Debug, Deserialize, Serialize, Getters, Clone)]
#[getset(get = "pub")]
#[serde(default)]
pub struct StyleConfig {
    pub width: u32,
    pub height: u32,
    pub background: String,
    pub text_color: String,
    pub grid_color: String,
    pub total_line_color: String,
    pub palette: Vec<String>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            width: 1800,
            height: 900,
            background: "#ffffff".to_string(),
            text_color: "#262626".to_string(),
            grid_color: "#dddddd".to_string(),
            total_line_color: "#ff0000".to_string(),
            palette: PASTEL_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl StyleConfig {
    #[doc = r#"
        설정 파일의 스타일 값(hex 문자열)을 렌더러용 불변 `ChartStyle` 로 변환한다.

        # Errors
        - 색상 문자열이 `#rrggbb` 형식이 아닌 경우
        - 팔레트가 비어 있거나 캔버스 크기가 0 인 경우
    "#]
    pub fn to_chart_style(&self, font_family: &str) -> anyhow::Result<ChartStyle> {
        if self.width == 0 || self.height == 0 {
            return Err(anyhow!(
                "[StyleConfig->to_chart_style] Canvas size must be positive: {}x{}",
                self.width,
                self.height
            ));
        }

        if self.palette.is_empty() {
            return Err(anyhow!(
                "[StyleConfig->to_chart_style] Palette must contain at least one color"
            ));
        }

        let palette: Vec<Rgb> = self
            .palette
            .iter()
            .map(|hex| parse_hex_color(hex))
            .collect::<anyhow::Result<Vec<Rgb>>>()?;

        Ok(ChartStyle::new(
            (self.width, self.height),
            parse_hex_color(&self.background)?,
            parse_hex_color(&self.text_color)?,
            parse_hex_color(&self.grid_color)?,
            parse_hex_color(&self.total_line_color)?,
            palette,
            font_family.to_string(),
        ))
    }
}

#[doc = "`#rrggbb` (또는 `rrggbb`) 문자열을 RGB 로 변환"]
pub fn parse_hex_color(hex: &str) -> anyhow::Result<Rgb> {
    let digits: &str = hex.trim().trim_start_matches('#');

    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(anyhow!(
            "[parse_hex_color()] Invalid color '{}', expected #rrggbb",
            hex
        ));
    }

    let channel = |from: usize| -> anyhow::Result<u8> {
        u8::from_str_radix(&digits[from..from + 2], 16)
            .map_err(|e| anyhow!("[parse_hex_color()] Invalid color '{}': {}", hex, e))
    };

    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}
