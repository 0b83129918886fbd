// YAML configuration for the task list screen

use crate::error::{Result, TaskError};
use crate::ids::IdStrategy;
use crate::messages::{Locale, Messages};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Per-message overrides; unset fields keep the locale's text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MessageOverrides {
    pub duplicate_title: Option<String>,
    pub duplicate_body: Option<String>,
    pub remove_title: Option<String>,
    pub remove_body: Option<String>,
    pub confirm: Option<String>,
    pub cancel: Option<String>,
    pub empty_list: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub locale: Locale,
    pub ids: IdStrategy,
    pub messages: MessageOverrides,
}

impl Config {
    /// Default config file location: `<config_dir>/tasklist/tasklist.yml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tasklist").join("tasklist.yml"))
    }

    /// Load config from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| TaskError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content).map_err(|source| TaskError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = ?path, locale = %config.locale, ids = %config.ids, "Loaded config");
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // An empty file deserializes to null
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Resolve the config to use
    ///
    /// An explicit path must exist. Without one the default location is
    /// tried and a missing file falls back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Locale texts with overrides applied
    pub fn messages(&self) -> Messages {
        let mut messages = Messages::for_locale(self.locale);
        let o = &self.messages;

        let fields = [
            (&mut messages.duplicate_title, &o.duplicate_title),
            (&mut messages.duplicate_body, &o.duplicate_body),
            (&mut messages.remove_title, &o.remove_title),
            (&mut messages.remove_body, &o.remove_body),
            (&mut messages.confirm, &o.confirm),
            (&mut messages.cancel, &o.cancel),
            (&mut messages.empty_list, &o.empty_list),
        ];
        for (target, value) in fields {
            if let Some(value) = value {
                *target = value.clone();
            }
        }

        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
locale: pt-BR
ids: sequential
messages:
  duplicate_body: "Nome repetido"
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.locale, Locale::PtBr);
        assert_eq!(config.ids, IdStrategy::Sequential);

        let messages = config.messages();
        assert_eq!(messages.duplicate_title, "Task já cadastrada");
        assert_eq!(messages.duplicate_body, "Nome repetido");
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
        assert_eq!(Config::from_yaml("locale: en\n").unwrap(), Config::default());
    }

    #[test]
    fn test_unknown_values_rejected() {
        assert!(Config::from_yaml("locale: fr\n").is_err());
        assert!(Config::from_yaml("ids: uuid\n").is_err());
        assert!(Config::from_yaml("colour: red\n").is_err());
    }

    #[test]
    fn test_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tasklist.yml");
        fs::write(&path, "ids: sequential\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.ids, IdStrategy::Sequential);
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.yml");

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(matches!(err, TaskError::ConfigRead { .. }));
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.yml");
        fs::write(&path, "locale: [unclosed\n").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, TaskError::ConfigParse { .. }));
    }
}
