//! Category filters for the carousel.

use std::fmt;

use folio_model::Testimonial;

/// Which subset of entries the carousel shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum FilterKey {
    #[default]
    All,
    /// Normalized (trimmed, lowercased) category.
    Category(String),
}

impl FilterKey {
    /// Key for a raw category label. Blank labels map to `All`, since such
    /// entries only ever appear in the unfiltered view.
    pub fn from_label(label: &str) -> Self {
        let key = normalize(label);
        if key.is_empty() {
            FilterKey::All
        } else {
            FilterKey::Category(key)
        }
    }

    pub fn matches(&self, entry: &Testimonial) -> bool {
        match self {
            FilterKey::All => true,
            FilterKey::Category(key) => entry
                .category
                .as_deref()
                .is_some_and(|category| normalize(category) == *key),
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterKey::All => f.write_str("all"),
            FilterKey::Category(key) => f.write_str(key),
        }
    }
}

/// A filter tab: what it says and what it selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterTab {
    pub label: String,
    pub key: FilterKey,
}

impl FilterTab {
    pub fn all() -> Self {
        Self {
            label: "All".to_string(),
            key: FilterKey::All,
        }
    }
}

pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Leading "All" tab plus one tab per distinct category, in order of first
/// appearance. Categories differing only in case or surrounding whitespace
/// collapse into the first spelling seen.
pub fn derive_tabs(entries: &[Testimonial]) -> Vec<FilterTab> {
    let mut tabs = vec![FilterTab::all()];
    for category in entries.iter().filter_map(|entry| entry.category.as_deref()) {
        let key = FilterKey::from_label(category);
        if key == FilterKey::All || tabs.iter().any(|tab| tab.key == key) {
            continue;
        }
        tabs.push(FilterTab {
            label: category.trim().to_string(),
            key,
        });
    }
    tabs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(category: Option<&str>) -> Testimonial {
        Testimonial {
            category: category.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn merges_case_variants_into_first_label() {
        let entries = [
            entry(Some("Engineering")),
            entry(Some("Design")),
            entry(Some("engineering")),
        ];
        let labels: Vec<String> = derive_tabs(&entries).into_iter().map(|t| t.label).collect();
        assert_eq!(labels, ["All", "Engineering", "Design"]);
    }

    #[test]
    fn blank_categories_produce_no_tab() {
        let entries = [entry(Some("   ")), entry(None), entry(Some(" Product "))];
        let tabs = derive_tabs(&entries);
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[1].label, "Product");
        assert_eq!(tabs[1].key, FilterKey::Category("product".into()));
    }

    #[test]
    fn key_matching_ignores_case_and_padding() {
        let key = FilterKey::from_label("Engineering");
        assert!(key.matches(&entry(Some("  ENGINEERING "))));
        assert!(!key.matches(&entry(None)));
        assert!(FilterKey::All.matches(&entry(None)));
    }
}
