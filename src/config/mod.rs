use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Display record shown in the header. Read-only for the session.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "default_avatar")]
    pub avatar: String,
}

fn default_name() -> String {
    "Administrator".to_string()
}

fn default_role() -> String {
    "Super Admin".to_string()
}

fn default_avatar() -> String {
    "https://picsum.photos/40/40".to_string()
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: default_name(),
            role: default_role(),
            avatar: default_avatar(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub user: UserProfile,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Load the config, degrading to defaults. A missing file at the default
/// location is normal; a file that exists but cannot be read or parsed is
/// reported so the caller can surface a warning.
pub fn load(override_path: Option<&Path>) -> (Config, Option<ConfigError>) {
    let path = match override_path {
        Some(path) => path.to_path_buf(),
        None => match config_path() {
            Some(path) => path,
            None => return (Config::default(), None),
        },
    };

    // An explicitly requested file must exist; the default location may not.
    if !path.exists() && override_path.is_none() {
        return (Config::default(), None);
    }

    match load_from(&path) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    }
}

pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<Config>(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("KANRI_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("kanri").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("kanri").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "kanri", "kanri")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_the_administrator() {
        let config = Config::default();
        assert_eq!(config.user.name, "Administrator");
        assert_eq!(config.user.role, "Super Admin");
        assert!(!config.user.avatar.is_empty());
    }

    #[test]
    fn user_table_overrides_profile() {
        let config: Config = toml::from_str(
            r#"
            [user]
            name = "Hanako"
            role = "Operator"
            "#,
        )
        .unwrap();
        assert_eq!(config.user.name, "Hanako");
        assert_eq!(config.user.role, "Operator");
        // Fields not given keep their defaults.
        assert_eq!(config.user.avatar, "https://picsum.photos/40/40");
    }

    #[test]
    fn empty_document_is_a_valid_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.user.name, "Administrator");
    }

    #[test]
    fn missing_explicit_file_is_reported() {
        let (config, err) = load(Some(Path::new("/nonexistent/kanri.toml")));
        assert_eq!(config.user.name, "Administrator");
        assert!(matches!(err, Some(ConfigError::Read { .. })));
    }
}
