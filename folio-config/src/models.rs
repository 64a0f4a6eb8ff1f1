//! Configuration records as they appear in `folio.toml`.

use std::path::PathBuf;

use folio_core::MountIds;
use serde::{Deserialize, Serialize};

/// Default location of the content JSON, relative to the config file (or the
/// working directory when no file is used).
pub const DEFAULT_CONTENT_PATH: &str = "content/site.json";

/// Site configuration.
///
/// Every field is optional in the file; missing ones keep their defaults, and
/// so does every mount id left out of a `[mounts.*]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// JSON document holding projects and testimonials.
    pub content_path: PathBuf,
    /// Element ids for the dialog, carousel and project grid.
    pub mounts: MountIds,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            content_path: PathBuf::from(DEFAULT_CONTENT_PATH),
            mounts: MountIds::default(),
        }
    }
}

impl FolioConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Render the effective configuration back to TOML.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(
            FolioConfig::from_toml_str("").unwrap(),
            FolioConfig::default()
        );
    }

    #[test]
    fn partial_mount_table_keeps_other_defaults() {
        let config = FolioConfig::from_toml_str(
            r#"
            content_path = "data/portfolio.json"

            [mounts.dialog]
            root = "case-study"
            "#,
        )
        .unwrap();

        assert_eq!(config.content_path, PathBuf::from("data/portfolio.json"));
        assert_eq!(config.mounts.dialog.root, "case-study");
        assert_eq!(config.mounts.dialog.close, "project-modal-close");
        assert_eq!(config.mounts.carousel, Default::default());
    }

    #[test]
    fn toml_output_parses_back() {
        let mut config = FolioConfig::default();
        config.mounts.projects.list = "work-grid".into();
        let rendered = config.to_toml_string().unwrap();
        assert!(rendered.contains("work-grid"));
        assert_eq!(FolioConfig::from_toml_str(&rendered).unwrap(), config);
    }
}
