use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Connection parameters for the register database.
///
/// The register lives in a single SQLite file, so the whole connection
/// object collapses to a path. Loaded from `config.toml` in the data
/// directory; `REGISTRY_DB_PATH` overrides everything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbConfig {
    pub path: PathBuf,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

impl DbConfig {
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("REGISTRY_DB_PATH") {
            return Self {
                path: PathBuf::from(path),
            };
        }

        let path = config_path();
        let Ok(contents) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        toml::from_str(&contents).unwrap_or_default()
    }
}

fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("REGISTRY_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    app_data_dir().join("config.toml")
}

fn default_db_path() -> PathBuf {
    app_data_dir().join("register.sqlite")
}

fn app_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var("REGISTRY_DATA_HOME") {
        return PathBuf::from(path);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = home::home_dir() {
            return home
                .join("Library")
                .join("Application Support")
                .join("BusinessRegistry");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("BusinessRegistry");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("business-registry");
        }
        if let Some(home) = home::home_dir() {
            return home.join(".local").join("share").join("business-registry");
        }
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".business-registry")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_register_file() {
        let config = DbConfig::default();
        assert!(config.path.to_string_lossy().contains("register.sqlite"));
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = DbConfig {
            path: PathBuf::from("/tmp/register.sqlite"),
        };
        let contents = toml::to_string(&config).unwrap();
        let parsed: DbConfig = toml::from_str(&contents).unwrap();
        assert_eq!(parsed.path, config.path);
    }
}
