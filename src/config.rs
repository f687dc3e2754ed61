use crate::plugin::definition::CANONICAL_DEFINITION_FILE;
use crate::plugin::synthesis::PLACEHOLDER_SOURCE;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TzenConfig {
    /// Foreign file every definition lookup lands in, relative to the project root
    pub definition_file: String,
    /// Declaration served in place of a foreign file's content
    pub placeholder_source: String,
}

impl Default for TzenConfig {
    fn default() -> Self {
        Self {
            definition_file: CANONICAL_DEFINITION_FILE.to_string(),
            placeholder_source: PLACEHOLDER_SOURCE.to_string(),
        }
    }
}

impl TzenConfig {
    /// Read the plugin entry a host passes from its project configuration,
    /// e.g. `{ "name": "tzen-bridge", "definitionFile": "types.tzen" }`.
    pub fn from_plugin_entry(entry: serde_json::Value) -> Result<Self> {
        let mut entry = entry;
        if let Some(map) = entry.as_object_mut() {
            map.remove("name");
        }
        serde_json::from_value(entry).map_err(|e| Error::Config(e.to_string()))
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("tzen.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<TzenConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: TzenConfig = toml::from_str(&contents)?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &TzenConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}
