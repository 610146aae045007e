use serde::Deserialize;
use std::path::PathBuf;

/// Site generator configuration.
///
/// Loaded by the application from an optional file plus `ARMYFORGE__*`
/// environment overrides; every field has a default so a bare checkout
/// builds without any configuration present.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory holding the faction JSON fixtures.
    pub data_dir: PathBuf,
    /// Directory the rendered HTML tree is written to.
    pub out_dir: PathBuf,
    /// Game-system tag used as the fixture file suffix (`<slug>_<system>.json`).
    pub system: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("public/factions"),
            out_dir: PathBuf::from("dist"),
            system: "aof".to_owned(),
        }
    }
}
