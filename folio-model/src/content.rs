use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ContentError, Result};
use crate::lenient;

/// The slice of the site content the interactive components consume.
///
/// Other top-level sections (hero, skills, experience, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    #[serde(default, deserialize_with = "lenient::seq")]
    pub projects: Vec<Project>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub testimonials: Vec<Testimonial>,
}

impl SiteContent {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let content: SiteContent = serde_json::from_str(raw)?;
        log::debug!(
            "decoded site content: {} projects, {} testimonials",
            content.projects.len(),
            content.testimonials.len()
        );
        Ok(content)
    }
}

/// Read and decode a content file.
pub fn load_content(path: impl AsRef<Path>) -> Result<SiteContent> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    SiteContent::from_json_str(&raw)
}

/// One project card plus its optional case study.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, deserialize_with = "lenient::text")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub meta: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub badge: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    /// Rich-text description. Rendered as plain text.
    #[serde(default, deserialize_with = "lenient::text")]
    pub description_html: Option<String>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub tags: Vec<String>,
    /// Older content files list technologies here instead of `tags`.
    #[serde(default, deserialize_with = "lenient::seq")]
    pub badges: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "lenient::record")]
    pub demo: Option<DemoLink>,
    #[serde(default, deserialize_with = "lenient::record")]
    pub spotlight: Option<Spotlight>,
}

impl Project {
    /// Tags shown on the card, falling back to `badges`.
    pub fn card_tags(&self) -> &[String] {
        if self.tags.is_empty() {
            &self.badges
        } else {
            &self.tags
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoLink {
    #[serde(default, deserialize_with = "lenient::text")]
    pub href: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: Option<String>,
}

/// Case-study data opened in the project dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spotlight {
    #[serde(default, deserialize_with = "lenient::text")]
    pub headline: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub overview: Option<String>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub roles: Vec<String>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub highlights: Vec<String>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub outcomes: Vec<Outcome>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub walkthrough: Vec<WalkthroughStep>,
    #[serde(default, deserialize_with = "lenient::record")]
    pub sandbox: Option<Sandbox>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub value: Option<String>,
}

/// One tab of a case-study walkthrough.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkthroughStep {
    #[serde(default, deserialize_with = "lenient::text")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub metric_label: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub metric_value: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sandbox {
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub src: Option<String>,
}

/// A quote shown in the testimonial carousel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    /// Free-form grouping label; compared case-insensitively.
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub quote: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub attribution: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub badge: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub badge_color: Option<String>,
}
