use config::{Config, Environment, File};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use squadup_structs::{FlattenConfig, Flattener};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Custom error type for config loading.
#[squadup_derive::squadup_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Top-level application configuration.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub flatten: FlattenConfig,
}

impl AppConfig {
    /// Builds the flattener described by the `flatten` section.
    #[must_use]
    pub const fn flattener(&self) -> Flattener {
        Flattener::from_config(&self.flatten)
    }
}

/// Loads configuration from a file with environment overrides layered on top.
///
/// 1. **Base File**: settings from `path` (e.g. `squadup.toml`). Without a path the `squadup`
///    file in the working directory is used; a missing extension is resolved by the loader.
/// 2. **Environment Overrides**: variables prefixed with `SQUADUP__`. Nested keys use double
///    underscores (e.g. `SQUADUP__FLATTEN__RECURSION_MAX` maps to `flatten.recursion_max`).
///
/// # Errors
/// * The configuration file cannot be found.
/// * The merged sources do not deserialize into `T`.
///
/// # Example
/// ```rust
/// use squadup_kernel::config::{AppConfig, load_config};
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// assert_eq!(cfg.flatten.recursion_max, 20);
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path = path.map_or_else(|| PathBuf::from("squadup"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(Environment::with_prefix("SQUADUP").separator("__").convert_case(config::Case::Snake));

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
