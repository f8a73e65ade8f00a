//! Configuration management for ado-link
//!
//! Two settings are persisted (`org_url`, `pat`) as a small YAML file
//! under the user config directory. Every set writes through to disk.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The name of the package, used for config directory naming
const PKG_NAME: &str = "ado-link";

pub const KEY_ORG_URL: &str = "org_url";
pub const KEY_PAT: &str = "pat";

/// The persisted settings
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Organization URL, e.g. https://dev.azure.com/myorg
    pub org_url: String,
    /// Personal access token used for REST authentication
    pub pat: String,
}

impl Config {
    /// The organization name, taken as the last path segment of the
    /// organization URL (e.g. "myorg" for https://dev.azure.com/myorg)
    pub fn organization_name(&self) -> String {
        self.org_url
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string()
    }
}

/// Read/write access to the two stored settings, keyed by name.
///
/// The orchestrator takes this as a trait so tests can substitute an
/// in-memory store for the file-backed one.
pub trait ConfigStore {
    fn config(&self) -> &Config;
    fn get(&self, key: &str) -> Result<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed store; every `set` rewrites the file
pub struct FileStore {
    path: PathBuf,
    config: Config,
}

impl FileStore {
    /// Load from the given path, or start from defaults if the file
    /// doesn't exist yet
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            return Ok(Self {
                path,
                config: Config::default(),
            });
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents)?;

        Ok(Self { path, config })
    }

    /// Open the store at the default location (`~/.config/ado-link/config.yaml`)
    pub fn open_default() -> Result<Self> {
        Self::load(get_config_path())
    }

    fn save(&self) -> Result<()> {
        let contents = serde_yaml::to_string(&self.config)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl ConfigStore for FileStore {
    fn config(&self) -> &Config {
        &self.config
    }

    fn get(&self, key: &str) -> Result<String> {
        match key {
            KEY_ORG_URL => Ok(self.config.org_url.clone()),
            KEY_PAT => Ok(self.config.pat.clone()),
            other => Err(Error::Config(format!("unknown config key '{}'", other))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            KEY_ORG_URL => self.config.org_url = value.to_string(),
            KEY_PAT => self.config.pat = value.to_string(),
            other => return Err(Error::Config(format!("unknown config key '{}'", other))),
        }
        self.save()
    }
}

/// In-memory store used by tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    config: Config,
}

impl MemoryStore {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl ConfigStore for MemoryStore {
    fn config(&self) -> &Config {
        &self.config
    }

    fn get(&self, key: &str) -> Result<String> {
        match key {
            KEY_ORG_URL => Ok(self.config.org_url.clone()),
            KEY_PAT => Ok(self.config.pat.clone()),
            other => Err(Error::Config(format!("unknown config key '{}'", other))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            KEY_ORG_URL => self.config.org_url = value.to_string(),
            KEY_PAT => self.config.pat = value.to_string(),
            other => return Err(Error::Config(format!("unknown config key '{}'", other))),
        }
        Ok(())
    }
}

/// Get the path to the config file
///
/// Returns the full path to `~/.config/ado-link/config.yaml`
pub fn get_config_path() -> PathBuf {
    PathBuf::from(get_config_dir()).join("config.yaml")
}

/// Get the configuration directory path
///
/// Returns the path to `~/.config/ado-link/`, creating it if it doesn't exist.
///
/// # Panics
///
/// Panics if the HOME environment variable is not set or if the directory
/// cannot be created.
pub fn get_config_dir() -> String {
    let home = std::env::var("HOME").expect("HOME environment variable not set");
    let path = PathBuf::from(home).join(".config").join(PKG_NAME);

    ensure_config_dir_exists(&path);

    path.to_str()
        .expect("Failed to convert config path to string")
        .to_string()
}

/// Ensure the configuration directory exists, creating it if necessary
fn ensure_config_dir_exists(path: &Path) {
    if !path.exists() {
        std::fs::create_dir_all(path).expect("Failed to create config directory");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file_defaults() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::load(dir.path().join("config.yaml")).unwrap();
        assert_eq!(store.get(KEY_ORG_URL).unwrap(), "");
        assert_eq!(store.get(KEY_PAT).unwrap(), "");
    }

    #[test]
    fn test_set_round_trips_through_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");

        let mut store = FileStore::load(&path).unwrap();
        store.set(KEY_ORG_URL, "https://dev.azure.com/myorg").unwrap();
        store.set(KEY_PAT, "s3cr3t").unwrap();

        let store = FileStore::load(&path).unwrap();
        assert_eq!(store.get(KEY_ORG_URL).unwrap(), "https://dev.azure.com/myorg");
        assert_eq!(store.get(KEY_PAT).unwrap(), "s3cr3t");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::load(dir.path().join("config.yaml")).unwrap();
        assert!(store.get("nope").is_err());
        assert!(store.set("nope", "x").is_err());
    }

    #[test]
    fn test_malformed_file_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "org_url: [unclosed").unwrap();
        assert!(FileStore::load(&path).is_err());
    }

    #[test]
    fn test_organization_name_from_url() {
        let config = Config {
            org_url: "https://dev.azure.com/myorg".into(),
            pat: String::new(),
        };
        assert_eq!(config.organization_name(), "myorg");

        let config = Config {
            org_url: "https://dev.azure.com/myorg/".into(),
            pat: String::new(),
        };
        assert_eq!(config.organization_name(), "myorg");
    }
}
