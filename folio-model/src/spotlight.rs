//! Flattened case-study view consumed by the project dialog.

use std::borrow::Cow;

use crate::content::{Outcome, Project, Sandbox, WalkthroughStep};
use crate::placeholders;
use crate::text::{html_to_text, non_blank};

/// Everything the dialog shows for one project.
///
/// Built from a [`Project`]; each accessor applies the fallback chain for its
/// field so the renderer never has to reason about missing data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpotlightItem {
    pub title: Option<String>,
    pub headline: Option<String>,
    pub meta: Option<String>,
    pub badge: Option<String>,
    pub overview: Option<String>,
    pub description: Option<String>,
    pub description_html: Option<String>,
    pub roles: Vec<String>,
    pub highlights: Vec<String>,
    pub outcomes: Vec<Outcome>,
    pub walkthrough: Vec<WalkthroughStep>,
    pub sandbox: Option<Sandbox>,
    pub demo_href: Option<String>,
    pub demo_label: Option<String>,
}

impl From<&Project> for SpotlightItem {
    fn from(project: &Project) -> Self {
        let spotlight = project.spotlight.clone().unwrap_or_default();
        let demo = project.demo.clone().unwrap_or_default();
        Self {
            title: project.title.clone(),
            headline: spotlight.headline,
            meta: project.meta.clone(),
            badge: project.badge.clone(),
            overview: spotlight.overview,
            description: project.description.clone(),
            description_html: project.description_html.clone(),
            roles: spotlight.roles,
            highlights: spotlight.highlights,
            outcomes: spotlight.outcomes,
            walkthrough: spotlight.walkthrough,
            sandbox: spotlight.sandbox,
            demo_href: demo.href,
            demo_label: demo.label,
        }
    }
}

/// A rendered outcome card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeCard<'a> {
    Metric {
        label: &'a str,
        value: &'a str,
    },
    /// Shown alone when no outcomes were published.
    Pending(&'a str),
}

impl SpotlightItem {
    pub fn display_title(&self) -> &str {
        non_blank(&self.title)
            .or_else(|| non_blank(&self.headline))
            .unwrap_or(placeholders::PROJECT_TITLE)
    }

    pub fn meta_text(&self) -> Option<&str> {
        non_blank(&self.meta)
    }

    pub fn badge_text(&self) -> Option<&str> {
        non_blank(&self.badge)
    }

    /// Explicit overview, then description, then the rich-text description.
    pub fn overview_text(&self) -> Cow<'_, str> {
        if let Some(overview) = non_blank(&self.overview) {
            return Cow::Borrowed(overview);
        }
        if let Some(description) = non_blank(&self.description) {
            return Cow::Borrowed(description);
        }
        if let Some(html) = non_blank(&self.description_html) {
            let text = html_to_text(html);
            if !text.trim().is_empty() {
                return Cow::Owned(text);
            }
        }
        Cow::Borrowed(placeholders::OVERVIEW)
    }

    pub fn role_tags(&self) -> Vec<&str> {
        with_fallback(&self.roles, placeholders::ROLE)
    }

    pub fn highlight_lines(&self) -> Vec<&str> {
        with_fallback(&self.highlights, placeholders::HIGHLIGHT)
    }

    pub fn outcome_cards(&self) -> Vec<OutcomeCard<'_>> {
        if self.outcomes.is_empty() {
            return vec![OutcomeCard::Pending(placeholders::OUTCOMES)];
        }
        self.outcomes
            .iter()
            .map(|outcome| OutcomeCard::Metric {
                label: non_blank(&outcome.label).unwrap_or(placeholders::OUTCOME_LABEL),
                value: non_blank(&outcome.value).unwrap_or(placeholders::OUTCOME_VALUE),
            })
            .collect()
    }

    pub fn sandbox_src(&self) -> Option<&str> {
        self.sandbox
            .as_ref()
            .and_then(|sandbox| non_blank(&sandbox.src))
    }

    pub fn demo_href(&self) -> Option<&str> {
        non_blank(&self.demo_href)
    }

    /// The sandbox panel renders when there is something to embed or link to.
    pub fn has_sandbox_panel(&self) -> bool {
        self.sandbox_src().is_some() || self.demo_href().is_some()
    }

    pub fn sandbox_title(&self) -> &str {
        self.sandbox
            .as_ref()
            .and_then(|sandbox| non_blank(&sandbox.title))
            .unwrap_or(placeholders::SANDBOX_TITLE)
    }

    pub fn sandbox_description(&self) -> Option<&str> {
        self.sandbox
            .as_ref()
            .and_then(|sandbox| non_blank(&sandbox.description))
    }

    pub fn demo_label(&self) -> &str {
        non_blank(&self.demo_label).unwrap_or(placeholders::DEMO_LABEL)
    }
}

impl WalkthroughStep {
    /// Tab caption; unlabeled steps are numbered from one.
    pub fn tab_label(&self, index: usize) -> Cow<'_, str> {
        match non_blank(&self.label) {
            Some(label) => Cow::Borrowed(label),
            None => Cow::Owned(format!("Step {}", index + 1)),
        }
    }

    /// Metric pair, or `None` when both halves are empty.
    pub fn metric(&self) -> Option<(&str, &str)> {
        let label = non_blank(&self.metric_label);
        let value = non_blank(&self.metric_value);
        if label.is_none() && value.is_none() {
            return None;
        }
        Some((label.unwrap_or_default(), value.unwrap_or_default()))
    }

    pub fn code_sample(&self) -> Option<&str> {
        non_blank(&self.code)
    }

    pub fn language(&self) -> Option<&str> {
        non_blank(&self.language)
    }
}

fn with_fallback<'a>(values: &'a [String], fallback: &'a str) -> Vec<&'a str> {
    let present: Vec<&str> = values
        .iter()
        .map(String::as_str)
        .filter(|value| !value.trim().is_empty())
        .collect();
    if present.is_empty() {
        vec![fallback]
    } else {
        present
    }
}
