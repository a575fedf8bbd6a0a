use crate::common::*;

use crate::dto::province_count::*;
use crate::model::configs::map_config::*;
use crate::traits::service_traits::map_service::*;
use crate::utils_modules::{io_utils::*, traits::*};

const PLACEHOLDER_TITLE: &str = "{{PAGE_TITLE}}";
const PLACEHOLDER_WIDTH: &str = "{{WIDTH}}";
const PLACEHOLDER_HEIGHT: &str = "{{HEIGHT}}";
const PLACEHOLDER_OPTION: &str = "{{OPTION_JSON}}";

#[doc = "HTML 본문/속성에 들어갈 문자열 이스케이프"]
fn escape_html(raw: &str) -> String {
    let mut escaped: String = String::with_capacity(raw.len());

    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }

    escaped
}

#[derive(Debug, Clone, new)]
pub struct MapServiceImpl {
    map_config: MapConfig,
}

impl MapServiceImpl {
    #[doc = r#"
        ECharts 옵션 객체 생성.

        단계 구분(piecewise) visualMap 의 max 는 가장 큰 건수, 조각은 설정 순서 그대로 사용한다.
    "#]
    fn build_option(&self, title: &str, provinces: &[ProvinceCount]) -> Value {
        let data: Vec<Value> = provinces
            .iter()
            .map(|row| json!({ "name": row.province, "value": row.count }))
            .collect();

        let pieces: Vec<Value> = self
            .map_config
            .pieces()
            .iter()
            .map(|piece| json!({ "min": piece.min, "max": piece.max, "label": piece.label }))
            .collect();

        json!({
            "title": { "text": title },
            "tooltip": { "trigger": "item" },
            "toolbox": {
                "show": true,
                "feature": {
                    "saveAsImage": {},
                    "restore": {},
                    "dataView": { "readOnly": true }
                }
            },
            "visualMap": {
                "type": "piecewise",
                "min": 0,
                "max": max_count(provinces),
                "text": ["高", "低"],
                "pieces": pieces
            },
            "series": [{
                "type": "map",
                "name": self.map_config.series_name(),
                "map": "china",
                "label": { "show": true },
                "data": data
            }]
        })
    }

    #[doc = "템플릿의 자리표시자를 채운 HTML 문서 문자열"]
    fn fill_template(&self, template: &str, title: &str, option: &Value) -> anyhow::Result<String> {
        for placeholder in [PLACEHOLDER_TITLE, PLACEHOLDER_OPTION] {
            if !template.contains(placeholder) {
                return Err(anyhow!(
                    "[MapServiceImpl->fill_template] Template is missing placeholder {} : {:?}",
                    placeholder,
                    self.map_config.template_path()
                ));
            }
        }

        /* JSON 안의 "</" 가 script 태그를 닫지 않도록 처리 */
        let option_json: String = serde_json::to_string(option)
            .context("[MapServiceImpl->fill_template] Failed to serialize map option")?
            .replace("</", "<\\/");

        Ok(template
            .replace(PLACEHOLDER_TITLE, &escape_html(title))
            .replace(PLACEHOLDER_WIDTH, &escape_html(self.map_config.width()))
            .replace(PLACEHOLDER_HEIGHT, &escape_html(self.map_config.height()))
            .replace(PLACEHOLDER_OPTION, &option_json))
    }
}

impl MapService for MapServiceImpl {
    fn render_province_map(
        &self,
        title: &str,
        provinces: &[ProvinceCount],
        output_path: &Path,
    ) -> anyhow::Result<()> {
        let template: String = fs::read_to_string(self.map_config.template_path()).with_context(|| {
            format!(
                "[MapServiceImpl->render_province_map] Failed to read map template: {:?}",
                self.map_config.template_path()
            )
        })?;

        if provinces.is_empty() {
            warn!("No province rows to plot, map will be empty: {:?}", output_path);
        }

        let option: Value = self.build_option(title, provinces);
        let html: String = self.fill_template(&template, title, &option)?;

        if let Some(parent) = output_path.parent() {
            ensure_dir(parent)?;
        }

        fs::write(output_path, html).with_context(|| {
            format!(
                "[MapServiceImpl->render_province_map] Failed to write map document: {:?}",
                output_path
            )
        })?;

        info!("Province map generated successfully: {:?}", output_path);

        Ok(())
    }
}
