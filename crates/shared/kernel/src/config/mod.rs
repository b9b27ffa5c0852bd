use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix of environment overrides, e.g. `FOODLOOP__DATABASE__URL`.
pub const ENV_PREFIX: &str = "FOODLOOP";

/// Custom error type for config loading.
#[foodloop_derive::foodloop_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base File**: Loads settings from a file (e.g., `server.toml`). If no path is provided,
///    it looks for `server` with any supported extension in the working directory. The file is optional;
///    every setting has a default.
/// 2. **Environment Overrides**: Overlays values from environment variables prefixed with `FOODLOOP__`.
///    Nested structures are accessed using double underscores (e.g., `FOODLOOP__DATABASE__URL` maps to `database.url`).
///
/// # Errors
/// This function will return an error if:
/// * An explicitly given configuration file cannot be found.
/// * The content of the file does not match the structure of type `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with(path, Environment::with_prefix(ENV_PREFIX))
}

/// Same as [`load_config`] with a caller supplied environment source.
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with<T>(
    path: Option<impl AsRef<Path>>,
    environment: Environment,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let required = path.is_some();
    let effective_path = path.map_or_else(|| PathBuf::from("server"), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(required))
        .add_source(environment.separator("__").convert_case(config::Case::Snake));

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use foodloop_domain::config::ApiConfig;
    use std::io::Write;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    fn toml_file(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().expect("temp file");
        file.write_all(body.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn file_values_are_loaded() {
        let file = toml_file(
            r#"
            [server]
            port = 8080

            [security.jwt]
            secret = "from-file"
            "#,
        );

        let cfg: ApiConfig = load_config_with(Some(file.path()), env(&[])).unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.security.jwt.secret, "from-file");
        assert_eq!(cfg.database.url, "mem://");
    }

    #[test]
    fn environment_overrides_file() {
        let file = toml_file("[database]\nurl = \"ws://db:8000\"\n");

        let cfg: ApiConfig = load_config_with(
            Some(file.path()),
            env(&[("FOODLOOP__DATABASE__URL", "mem://"), ("FOODLOOP__LOGGING__LEVEL", "debug")]),
        )
        .unwrap();

        assert_eq!(cfg.database.url, "mem://");
        assert_eq!(cfg.logging.level, "debug");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let result = load_config_with::<ApiConfig>(Some("/nonexistent/foodloop.toml"), env(&[]));
        assert!(matches!(result, Err(ConfigError::Config { context: Some(_), .. })));
    }
}
