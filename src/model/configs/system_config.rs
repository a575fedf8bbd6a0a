use crate::common::*;

#[derive(Debug, Deserialize, Serialize, Getters, Clone)]
#[getset(get = "pub")]
#[serde(default)]
pub struct SystemConfig {
    pub output_dir: PathBuf,
    pub open_viewer: bool,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            open_viewer: true,
        }
    }
}
