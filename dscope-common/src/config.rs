//! Service configuration resolution
//!
//! Four-tier priority, highest first:
//! 1. Command-line argument
//! 2. Environment variable (`DSCOPE_PORT` / `DSCOPE_CATALOG`)
//! 3. TOML config file (user config dir, then /etc on Linux)
//! 4. Compiled default

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{Error, Result};

/// Default listen port for dscope-ui
pub const DEFAULT_PORT: u16 = 5740;

pub const PORT_ENV: &str = "DSCOPE_PORT";
pub const CATALOG_ENV: &str = "DSCOPE_CATALOG";

/// Resolved service configuration
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub port: u16,
    /// Catalog file overriding the bundled dataset
    pub catalog_path: Option<PathBuf>,
}

/// Resolve configuration from CLI arguments, environment, config file, and
/// compiled defaults. A missing config file is not an error; an invalid
/// value in any consulted tier is.
pub fn resolve(cli_port: Option<u16>, cli_catalog: Option<PathBuf>) -> Result<ServiceConfig> {
    let file = match find_config_file() {
        Ok(path) => {
            debug!("Using config file {}", path.display());
            Some(read_config_file(&path)?)
        }
        Err(_) => None,
    };
    resolve_from(cli_port, cli_catalog, file.as_ref())
}

fn resolve_from(
    cli_port: Option<u16>,
    cli_catalog: Option<PathBuf>,
    file: Option<&toml::Value>,
) -> Result<ServiceConfig> {
    let port = match cli_port {
        Some(port) => port,
        None => match std::env::var(PORT_ENV) {
            Ok(raw) => raw
                .parse()
                .map_err(|_| Error::Config(format!("{} is not a valid port: {}", PORT_ENV, raw)))?,
            Err(_) => match file.and_then(|v| v.get("port")).and_then(|v| v.as_integer()) {
                Some(value) => u16::try_from(value)
                    .map_err(|_| Error::Config(format!("config file port out of range: {}", value)))?,
                None => DEFAULT_PORT,
            },
        },
    };

    let catalog_path = cli_catalog
        .or_else(|| std::env::var(CATALOG_ENV).ok().map(PathBuf::from))
        .or_else(|| {
            file.and_then(|v| v.get("catalog"))
                .and_then(|v| v.as_str())
                .map(PathBuf::from)
        });

    Ok(ServiceConfig { port, catalog_path })
}

/// Locate the config file for the platform, if one exists
fn find_config_file() -> Result<PathBuf> {
    if cfg!(target_os = "linux") {
        // Try ~/.config/distroscope/config.toml first, then /etc
        if let Some(path) = dirs::config_dir().map(|d| d.join("distroscope").join("config.toml")) {
            if path.exists() {
                return Ok(path);
            }
        }
        let system = PathBuf::from("/etc/distroscope/config.toml");
        if system.exists() {
            return Ok(system);
        }
        Err(Error::Config("No config file found".to_string()))
    } else {
        let path = dirs::config_dir()
            .map(|d| d.join("distroscope").join("config.toml"))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;
        if path.exists() {
            Ok(path)
        } else {
            Err(Error::Config(format!("Config file not found: {:?}", path)))
        }
    }
}

fn read_config_file(path: &Path) -> Result<toml::Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Invalid config file {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var(PORT_ENV);
        std::env::remove_var(CATALOG_ENV);
    }

    #[test]
    #[serial]
    fn defaults_apply_when_nothing_is_set() {
        clear_env();
        let config = resolve_from(None, None, None).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    #[serial]
    fn cli_argument_beats_environment() {
        clear_env();
        std::env::set_var(PORT_ENV, "6000");
        let config = resolve_from(Some(7000), None, None).unwrap();
        assert_eq!(config.port, 7000);
        clear_env();
    }

    #[test]
    #[serial]
    fn environment_beats_config_file() {
        clear_env();
        std::env::set_var(PORT_ENV, "6000");
        std::env::set_var(CATALOG_ENV, "/tmp/env-catalog.json");
        let file: toml::Value =
            toml::from_str("port = 9000\ncatalog = \"/tmp/file-catalog.json\"").unwrap();
        let config = resolve_from(None, None, Some(&file)).unwrap();
        assert_eq!(config.port, 6000);
        assert_eq!(
            config.catalog_path.as_deref(),
            Some(Path::new("/tmp/env-catalog.json"))
        );
        clear_env();
    }

    #[test]
    #[serial]
    fn config_file_beats_compiled_default() {
        clear_env();
        let file: toml::Value =
            toml::from_str("port = 9000\ncatalog = \"/srv/distros.json\"").unwrap();
        let config = resolve_from(None, None, Some(&file)).unwrap();
        assert_eq!(config.port, 9000);
        assert_eq!(
            config.catalog_path.as_deref(),
            Some(Path::new("/srv/distros.json"))
        );
    }

    #[test]
    #[serial]
    fn invalid_port_values_are_configuration_errors() {
        clear_env();
        std::env::set_var(PORT_ENV, "not-a-port");
        assert!(matches!(
            resolve_from(None, None, None),
            Err(Error::Config(_))
        ));
        clear_env();

        let file: toml::Value = toml::from_str("port = 123456").unwrap();
        assert!(matches!(
            resolve_from(None, None, Some(&file)),
            Err(Error::Config(_))
        ));
    }
}
