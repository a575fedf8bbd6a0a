use crate::common::*;

use crate::dto::province_count::*;

pub trait MapService {
    #[doc = "성(省)별 건수 단계 구분도(choropleth)를 HTML 문서로 저장"]
    fn render_province_map(
        &self,
        title: &str,
        provinces: &[ProvinceCount],
        output_path: &Path,
    ) -> anyhow::Result<()>;
}
