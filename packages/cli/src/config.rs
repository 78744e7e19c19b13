use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "htmlgen.config.json";

/// htmlgen configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// File the finished document is written to
    #[serde(default = "default_out_file")]
    pub out_file: String,

    /// Start from the sample page instead of an empty body
    #[serde(default)]
    pub sample: bool,

    /// Emit `<!DOCTYPE html>` ahead of the html root
    #[serde(default = "default_doctype")]
    pub doctype: bool,
}

fn default_out_file() -> String {
    "index.html".to_string()
}

fn default_doctype() -> bool {
    true
}

impl Config {
    /// Load config from a directory, falling back to defaults
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            Self::load_file(&config_path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load config from an explicit path, which must exist
    pub fn load_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Absolute path of the output file
    pub fn get_out_path(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.out_file)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out_file: default_out_file(),
            sample: false,
            doctype: default_doctype(),
        }
    }
}
