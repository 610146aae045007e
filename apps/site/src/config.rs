use armyforge_domain::config::SiteConfig;
use config::{Config, Environment, File};
use std::path::Path;
use tracing::info;

/// A reusable configuration loader that combines file-based settings with
/// environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base file**: settings from a TOML file. With no explicit path the
///    loader looks for `armyforge` in the working directory and treats its
///    absence as "all defaults"; an explicit path must exist.
/// 2. **Environment overrides**: values prefixed with `ARMYFORGE__`, nested
///    keys separated by double underscores (e.g. `ARMYFORGE__OUT_DIR`).
///
/// Every [`SiteConfig`] field has a default, so an empty layering is valid.
///
/// # Errors
/// Returns an error if an explicitly supplied file cannot be read or if the
/// merged content does not match the [`SiteConfig`] structure.
pub fn load_config(path: Option<&Path>) -> Result<SiteConfig, config::ConfigError> {
    let builder = match path {
        Some(path) => {
            info!("Loading config from {}", path.display());
            Config::builder().add_source(File::from(path).required(true))
        },
        None => Config::builder().add_source(File::with_name("armyforge").required(false)),
    };

    builder
        .add_source(Environment::with_prefix("ARMYFORGE").separator("__"))
        .build()?
        .try_deserialize::<SiteConfig>()
}
