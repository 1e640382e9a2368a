use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::domain::TransactionType;
use crate::errors::{PickerError, Result};
use crate::selector::DEFAULT_PLACEHOLDER;

const CONFIG_ENV: &str = "CATEGORY_COMBO_CONFIG";
const CONFIG_DIR: &str = "category_combo";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PickerConfig {
    pub placeholder: String,
    pub plain_mode: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
    pub default_transaction_type: TransactionType,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.into(),
            plain_mode: false,
            catalog_path: None,
            default_transaction_type: TransactionType::Expense,
        }
    }
}

/// Locates and reads the picker configuration file.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Uses `CATEGORY_COMBO_CONFIG` when set, else the platform config dir.
    pub fn new() -> Result<Self> {
        if let Some(path) = env::var_os(CONFIG_ENV) {
            return Ok(Self::with_path(PathBuf::from(path)));
        }
        let base = dirs::config_dir().ok_or_else(|| {
            PickerError::Config("unable to resolve the user configuration directory".into())
        })?;
        Ok(Self::with_path(base.join(CONFIG_DIR).join(CONFIG_FILE)))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> Result<PickerConfig> {
        if !self.path.exists() {
            return Ok(PickerConfig::default());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| {
            PickerError::Config(format!("{}: {}", self.path.display(), err))
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
