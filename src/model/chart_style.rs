use crate::common::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[doc = r#"
    렌더러에 전달되는 불변 스타일 설정.

    실행 시작 시 한 번 만들어져 `ChartServiceImpl` 이 소유한다.
    전역 상태(팔레트/그리드 스타일)를 두지 않는다.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct ChartStyle {
    size: (u32, u32),
    background: Rgb,
    text_color: Rgb,
    grid_color: Rgb,
    total_line_color: Rgb,
    palette: Vec<Rgb>,
    font_family: String,
}

impl ChartStyle {
    #[doc = "index 번째 계열 색상 (팔레트 길이를 넘으면 순환)"]
    pub fn series_color(&self, index: usize) -> Rgb {
        self.palette[index % self.palette.len()]
    }
}
