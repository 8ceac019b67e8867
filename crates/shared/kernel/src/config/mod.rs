use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment prefix for overrides, e.g. `TUBEFORM__LOOKUP__TIMEOUT_MS=3000`.
pub const ENV_PREFIX: &str = "TUBEFORM";
/// Config file looked up when no path is given (any extension `config` understands).
pub const DEFAULT_CONFIG_FILE: &str = "tubeform";

#[tubeform_derive::form_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads `T` from a config file overlaid with `TUBEFORM__*` environment variables.
///
/// Nested keys use a double underscore: `TUBEFORM__FORM__MODE=on_change` sets `form.mode`.
///
/// # Errors
/// Returns [`ConfigError::Config`] when the file is missing or unreadable, or when the
/// merged document does not deserialize into `T`.
///
/// # Example
/// ```rust
/// use tubeform_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct Settings {
///     endpoint: String,
/// }
///
/// let cfg: Settings = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let path = path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());
    info!("Loading config from {}", path.display());

    Config::builder()
        .add_source(File::from(path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .convert_case(config::Case::Snake),
        )
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}

/// Like [`load_config`], but falls back to `T::default()` and logs why.
#[must_use]
pub fn load_config_or_default<T>(path: Option<impl AsRef<Path>>) -> T
where
    T: DeserializeOwned + Default,
{
    load_config(path).unwrap_or_else(|err| {
        warn!(error = %err, "Using default configuration");
        T::default()
    })
}
