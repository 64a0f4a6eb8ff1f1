//! Element identifiers the components attach to.
//!
//! Defaults match the page markup; sites with different markup override them
//! through configuration.

use serde::{Deserialize, Serialize};

/// Every mount identifier, grouped by component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MountIds {
    pub dialog: DialogMountIds,
    pub carousel: CarouselMountIds,
    pub projects: ProjectMountIds,
}

impl MountIds {
    /// `(setting, id)` pairs for validation and diagnostics.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let mut entries = self.dialog.entries();
        entries.extend(self.carousel.entries());
        entries.extend(self.projects.entries());
        entries
    }
}

macro_rules! mount_ids {
    (
        $(#[$meta:meta])*
        $name:ident, $prefix:literal {
            $($field:ident => $default:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct $name {
            $(pub $field: String,)+
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $($field: $default.to_string(),)+
                }
            }
        }

        impl $name {
            pub fn entries(&self) -> Vec<(&'static str, &str)> {
                vec![$((concat!($prefix, ".", stringify!($field)), self.$field.as_str()),)+]
            }
        }
    };
}

mount_ids!(
    /// Project spotlight dialog.
    DialogMountIds, "dialog" {
        root => "project-modal",
        overlay => "project-modal-overlay",
        content => "project-modal-content",
        close => "project-modal-close",
        meta => "project-modal-meta",
        badge => "project-modal-badge",
        title => "project-modal-title",
        overview => "project-modal-overview",
        roles => "project-modal-roles",
        highlights => "project-modal-highlights",
        outcomes => "project-modal-outcomes",
        walkthrough => "project-modal-walkthrough",
        walkthrough_tabs => "project-modal-walkthrough-tabs",
        step_label => "project-modal-step-label",
        step_summary => "project-modal-step-summary",
        step_metric => "project-modal-step-metric",
        step_metric_label => "project-modal-step-metric-label",
        step_metric_value => "project-modal-step-metric-value",
        step_code_block => "project-modal-step-code-block",
        step_code => "project-modal-step-code",
        sandbox => "project-modal-sandbox",
        sandbox_title => "project-modal-sandbox-title",
        sandbox_description => "project-modal-sandbox-description",
        sandbox_frame => "project-modal-sandbox-frame",
        sandbox_link => "project-modal-sandbox-link",
    }
);

mount_ids!(
    /// Testimonial carousel.
    CarouselMountIds, "carousel" {
        filters => "testimonial-filters",
        badge => "testimonial-badge",
        quote => "testimonial-quote",
        attribution => "testimonial-attribution",
        role => "testimonial-role",
        prev => "testimonial-prev",
        next => "testimonial-next",
        pagination => "testimonial-pagination",
    }
);

mount_ids!(
    /// Project card grid.
    ProjectMountIds, "projects" {
        list => "projects-list",
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_unique() {
        let ids = MountIds::default();
        let entries = ids.entries();
        let mut seen: Vec<&str> = entries.iter().map(|(_, id)| *id).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), entries.len());
    }

    #[test]
    fn partial_overrides_keep_defaults() {
        let raw = r#"{ "carousel": { "quote": "quote-slot" } }"#;
        let ids: MountIds = serde_json::from_str(raw).expect("decode");
        assert_eq!(ids.carousel.quote, "quote-slot");
        assert_eq!(ids.carousel.prev, "testimonial-prev");
        assert_eq!(ids.dialog.root, "project-modal");
    }

    #[test]
    fn entries_are_labelled_by_setting() {
        let ids = ProjectMountIds::default();
        assert_eq!(ids.entries(), vec![("projects.list", "projects-list")]);
    }
}
