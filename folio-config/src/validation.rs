//! Guard rails run on every loaded configuration.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::FolioConfig;

/// Configuration that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigGuardRailError {
    #[error("content_path must not be empty")]
    EmptyContentPath,

    #[error("mount id `{setting}` must not be empty")]
    EmptyMountId { setting: &'static str },

    #[error("mount id `{setting}` = {id:?} contains whitespace")]
    WhitespaceInMountId { setting: &'static str, id: String },

    #[error("mount id {id:?} is used by both `{first}` and `{second}`")]
    DuplicateMountId {
        id: String,
        first: &'static str,
        second: &'static str,
    },
}

/// Usable configuration that is probably not what was meant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    ContentMissing(PathBuf),
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigWarning::ContentMissing(path) => {
                write!(f, "content file {} does not exist", path.display())
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigWarnings(Vec<ConfigWarning>);

impl ConfigWarnings {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.0.iter()
    }

    fn push(&mut self, warning: ConfigWarning) {
        self.0.push(warning);
    }
}

/// Reject unusable settings and collect warnings for suspicious ones.
pub fn validate(config: &FolioConfig) -> Result<ConfigWarnings, ConfigGuardRailError> {
    if config.content_path.as_os_str().is_empty() {
        return Err(ConfigGuardRailError::EmptyContentPath);
    }

    let mut seen: HashMap<&str, &'static str> = HashMap::new();
    for (setting, id) in config.mounts.entries() {
        if id.trim().is_empty() {
            return Err(ConfigGuardRailError::EmptyMountId { setting });
        }
        if id.chars().any(char::is_whitespace) {
            return Err(ConfigGuardRailError::WhitespaceInMountId {
                setting,
                id: id.to_string(),
            });
        }
        if let Some(first) = seen.insert(id, setting) {
            return Err(ConfigGuardRailError::DuplicateMountId {
                id: id.to_string(),
                first,
                second: setting,
            });
        }
    }

    let mut warnings = ConfigWarnings::default();
    if !config.content_path.exists() {
        warnings.push(ConfigWarning::ContentMissing(config.content_path.clone()));
    }
    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_guard_rails() {
        assert!(validate(&FolioConfig::default()).is_ok());
    }

    #[test]
    fn empty_mount_id_is_rejected() {
        let mut config = FolioConfig::default();
        config.mounts.carousel.quote = "  ".into();
        assert_eq!(
            validate(&config),
            Err(ConfigGuardRailError::EmptyMountId {
                setting: "carousel.quote"
            })
        );
    }

    #[test]
    fn duplicate_mount_id_names_both_settings() {
        let mut config = FolioConfig::default();
        config.mounts.dialog.close = "project-modal".into();
        assert_eq!(
            validate(&config),
            Err(ConfigGuardRailError::DuplicateMountId {
                id: "project-modal".into(),
                first: "dialog.root",
                second: "dialog.close",
            })
        );
    }

    #[test]
    fn whitespace_in_mount_id_is_rejected() {
        let mut config = FolioConfig::default();
        config.mounts.projects.list = "projects list".into();
        assert!(matches!(
            validate(&config),
            Err(ConfigGuardRailError::WhitespaceInMountId { .. })
        ));
    }

    #[test]
    fn missing_content_is_only_a_warning() {
        let config = FolioConfig {
            content_path: PathBuf::from("/definitely/not/here.json"),
            ..Default::default()
        };
        let warnings = validate(&config).unwrap();
        assert_eq!(
            warnings.iter().collect::<Vec<_>>(),
            [&ConfigWarning::ContentMissing(config.content_path.clone())]
        );
    }

    #[test]
    fn empty_content_path_is_rejected() {
        let config = FolioConfig {
            content_path: PathBuf::new(),
            ..Default::default()
        };
        assert_eq!(
            validate(&config),
            Err(ConfigGuardRailError::EmptyContentPath)
        );
    }
}
