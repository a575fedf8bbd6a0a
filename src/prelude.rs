pub use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    env,
    fmt::Display,
    fs,
    io::Write,
    path::{Path, PathBuf},
};

pub use anyhow::{Context, anyhow};
pub use derive_new::new;
pub use dotenv::dotenv;
pub use getset::Getters;
pub use log::{error, info, warn};
pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
pub use serde_json::{Value, json};
