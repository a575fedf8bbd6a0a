use crate::common::*;

#[derive(Debug, Deserialize, Serialize, Getters, Clone, PartialEq, Eq, new)]
#[getset(get = "pub")]
pub struct VisualPiece {
    pub min: u64,
    pub max: u64,
    pub label: String,
}

#[derive(Debug, Deserialize, Serialize, Getters, Clone)]
#[getset(get = "pub")]
#[serde(default)]
pub struct MapConfig {
    pub template_path: PathBuf,
    pub width: String,
    pub height: String,
    pub series_name: String,
    pub pieces: Vec<VisualPiece>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from("./html/province_map_template.html"),
            width: "1000px".to_string(),
            height: "600px".to_string(),
            series_name: "帖子数量".to_string(),
            pieces: vec![
                VisualPiece::new(10000, 999999, "10000+".to_string()),
                VisualPiece::new(1000, 9999, "1000-9999".to_string()),
                VisualPiece::new(100, 999, "100-999".to_string()),
                VisualPiece::new(10, 99, "10-99".to_string()),
                VisualPiece::new(0, 9, "0-9".to_string()),
            ],
        }
    }
}
