//! Testimonial carousel: one quote at a time, filterable by category.

mod badge;
mod filter;
mod state;

pub use badge::{BADGE_BASE_CLASS, BadgeColor, badge_class, badge_text};
pub use filter::{FilterKey, FilterTab, derive_tabs, normalize};
pub use state::{CarouselState, Direction};

use folio_model::{Testimonial, placeholders};

use crate::dom::{Document, ElementSpec, NodeId};
use crate::mounts::CarouselMountIds;

const FILTER_CLASS: &str = "inline-flex items-center gap-2 rounded-full border border-slate-200 px-4 py-2 text-xs font-semibold uppercase tracking-[0.3em] text-slate-600 dark:border-slate-700 dark:text-slate-300";
const FILTER_ACTIVE_CLASS: &str = "bg-brand text-white border-brand";
const DOT_CLASS: &str = "h-2 w-2 rounded-full bg-slate-300 transition-all dark:bg-slate-700";
const DOT_ACTIVE_CLASS: &str = "h-2 w-6 rounded-full bg-brand transition-all";
const ROLE_SEPARATOR: &str = " · ";

#[derive(Debug, Clone, Default)]
pub struct CarouselMounts {
    pub filters: Option<NodeId>,
    pub badge: Option<NodeId>,
    pub quote: Option<NodeId>,
    pub attribution: Option<NodeId>,
    pub role: Option<NodeId>,
    pub prev: Option<NodeId>,
    pub next: Option<NodeId>,
    pub pagination: Option<NodeId>,
}

impl CarouselMounts {
    pub fn resolve(doc: &dyn Document, ids: &CarouselMountIds) -> Self {
        Self {
            filters: doc.element_by_id(&ids.filters),
            badge: doc.element_by_id(&ids.badge),
            quote: doc.element_by_id(&ids.quote),
            attribution: doc.element_by_id(&ids.attribution),
            role: doc.element_by_id(&ids.role),
            prev: doc.element_by_id(&ids.prev),
            next: doc.element_by_id(&ids.next),
            pagination: doc.element_by_id(&ids.pagination),
        }
    }
}

/// Messages the host forwards to the carousel.
#[derive(Debug, Clone)]
pub enum CarouselMessage {
    Load(Vec<Testimonial>),
    SelectFilter(FilterKey),
    Previous,
    Next,
    Clicked(NodeId),
}

impl CarouselMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Load(_) => "Carousel::Load",
            Self::SelectFilter(_) => "Carousel::SelectFilter",
            Self::Previous => "Carousel::Previous",
            Self::Next => "Carousel::Next",
            Self::Clicked(_) => "Carousel::Clicked",
        }
    }
}

#[derive(Debug)]
pub struct TestimonialCarousel {
    mounts: CarouselMounts,
    state: CarouselState,
    tabs: Vec<FilterTab>,
    tab_nodes: Vec<(NodeId, FilterKey)>,
    listeners_bound: bool,
}

impl TestimonialCarousel {
    pub fn new(mounts: CarouselMounts) -> Self {
        Self {
            mounts,
            state: CarouselState::default(),
            tabs: Vec::new(),
            tab_nodes: Vec::new(),
            listeners_bound: false,
        }
    }

    pub fn mount(doc: &dyn Document, ids: &CarouselMountIds) -> Self {
        Self::new(CarouselMounts::resolve(doc, ids))
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn index(&self) -> usize {
        self.state.index
    }

    pub fn filter(&self) -> &FilterKey {
        &self.state.filter
    }

    pub fn filter_tabs(&self) -> &[FilterTab] {
        &self.tabs
    }

    /// Tab element for a filter, once the filter bar is built.
    pub fn tab_node(&self, key: &FilterKey) -> Option<NodeId> {
        self.tab_nodes
            .iter()
            .find(|(_, tab_key)| tab_key == key)
            .map(|(node, _)| *node)
    }

    /// Load a fresh list of entries and show the first one.
    ///
    /// Prev/next handling is enabled on the first call only; later calls just
    /// replace the entries and reset filter and position.
    pub fn init(&mut self, doc: &mut dyn Document, entries: Vec<Testimonial>) {
        self.listeners_bound = true;
        self.state = CarouselState::new(entries);
        self.tabs = derive_tabs(&self.state.items);
        self.build_filter_bar(doc);
        log::debug!(
            "carousel loaded {} entries across {} categories",
            self.state.items.len(),
            self.tabs.len() - 1
        );
        self.render(doc);
    }

    pub fn set_filter(&mut self, doc: &mut dyn Document, key: FilterKey) -> bool {
        if !self.state.set_filter(key) {
            return false;
        }
        log::debug!("carousel filter -> {}", self.state.filter);
        self.refresh_tab_states(doc);
        self.render(doc);
        true
    }

    pub fn next(&mut self, doc: &mut dyn Document) -> bool {
        self.step(doc, Direction::Next)
    }

    pub fn prev(&mut self, doc: &mut dyn Document) -> bool {
        self.step(doc, Direction::Previous)
    }

    fn step(&mut self, doc: &mut dyn Document, direction: Direction) -> bool {
        if !self.state.step(direction) {
            return false;
        }
        self.render(doc);
        true
    }

    /// Click handler. Returns whether the click belonged to the carousel.
    pub fn handle_click(&mut self, doc: &mut dyn Document, target: NodeId) -> bool {
        if let Some(key) = self
            .tab_nodes
            .iter()
            .find(|(node, _)| doc.is_within(target, *node))
            .map(|(_, key)| key.clone())
        {
            self.set_filter(doc, key);
            return true;
        }
        if !self.listeners_bound {
            return false;
        }
        if self.hits(doc, target, self.mounts.prev) {
            self.prev(doc);
            return true;
        }
        if self.hits(doc, target, self.mounts.next) {
            self.next(doc);
            return true;
        }
        false
    }

    pub fn update(&mut self, doc: &mut dyn Document, message: CarouselMessage) -> bool {
        log::trace!("{}", message.name());
        match message {
            CarouselMessage::Load(entries) => {
                self.init(doc, entries);
                true
            }
            CarouselMessage::SelectFilter(key) => self.set_filter(doc, key),
            CarouselMessage::Previous => self.prev(doc),
            CarouselMessage::Next => self.next(doc),
            CarouselMessage::Clicked(target) => self.handle_click(doc, target),
        }
    }

    fn hits(&self, doc: &dyn Document, target: NodeId, control: Option<NodeId>) -> bool {
        control.is_some_and(|node| doc.is_within(target, node))
    }

    fn build_filter_bar(&mut self, doc: &mut dyn Document) {
        self.tab_nodes.clear();
        let Some(bar) = self.mounts.filters else {
            return;
        };
        doc.clear_children(bar);
        for tab in &self.tabs {
            let node = doc.append(
                bar,
                ElementSpec::new("button")
                    .class(FILTER_CLASS)
                    .text(tab.label.as_str())
                    .attr("type", "button")
                    .attr("role", "tab")
                    .attr("data-filter", tab.key.to_string()),
            );
            self.tab_nodes.push((node, tab.key.clone()));
        }
        self.refresh_tab_states(doc);
    }

    fn refresh_tab_states(&self, doc: &mut dyn Document) {
        for (node, key) in &self.tab_nodes {
            let active = *key == self.state.filter;
            let class = if active {
                format!("{FILTER_CLASS} {FILTER_ACTIVE_CLASS}")
            } else {
                FILTER_CLASS.to_string()
            };
            doc.set_class(*node, &class);
            doc.set_attribute(*node, "aria-selected", &active.to_string());
            doc.set_attribute(*node, "tabindex", if active { "0" } else { "-1" });
        }
    }

    fn render(&mut self, doc: &mut dyn Document) {
        self.state.clamp();
        let len = self.state.filtered_len();
        let Some(current) = self.state.current().cloned() else {
            self.render_empty(doc);
            return;
        };

        let single = len <= 1;
        for control in [self.mounts.prev, self.mounts.next].into_iter().flatten() {
            doc.set_disabled(control, single);
        }

        if let Some(badge) = self.mounts.badge {
            doc.set_class(badge, &badge_class(&current));
            doc.set_text(badge, &badge_text(&current));
        }
        if let Some(quote) = self.mounts.quote {
            doc.set_text(quote, current.quote.as_deref().unwrap_or_default());
        }
        if let Some(attribution) = self.mounts.attribution {
            doc.set_text(
                attribution,
                current.attribution.as_deref().unwrap_or_default(),
            );
        }
        if let Some(role) = self.mounts.role {
            doc.set_text(role, &role_line(&current));
        }

        self.render_pagination(doc, len);
    }

    fn render_empty(&self, doc: &mut dyn Document) {
        if let Some(quote) = self.mounts.quote {
            doc.set_text(quote, placeholders::TESTIMONIALS);
        }
        if let Some(attribution) = self.mounts.attribution {
            doc.set_text(attribution, "");
        }
        if let Some(role) = self.mounts.role {
            doc.set_text(role, "");
        }
        if let Some(badge) = self.mounts.badge {
            let neutral = BadgeColor::Neutral.class();
            doc.set_text(badge, "");
            doc.set_class(badge, &format!("{BADGE_BASE_CLASS} {neutral} opacity-0"));
        }
        for control in [self.mounts.prev, self.mounts.next].into_iter().flatten() {
            doc.set_disabled(control, true);
        }
        if let Some(pagination) = self.mounts.pagination {
            doc.clear_children(pagination);
        }
    }

    fn render_pagination(&self, doc: &mut dyn Document, len: usize) {
        let Some(pagination) = self.mounts.pagination else {
            return;
        };
        doc.clear_children(pagination);
        if len <= 1 {
            return;
        }
        for position in 0..len {
            let class = if position == self.state.index {
                DOT_ACTIVE_CLASS
            } else {
                DOT_CLASS
            };
            doc.append(
                pagination,
                ElementSpec::new("span")
                    .class(class)
                    .attr("aria-hidden", "true")
                    .attr("data-index", position.to_string()),
            );
        }
    }
}

/// "Role · Company", skipping whichever half is empty.
pub fn role_line(entry: &Testimonial) -> String {
    [&entry.role, &entry.company]
        .into_iter()
        .filter_map(|part| folio_model::non_blank(part))
        .collect::<Vec<_>>()
        .join(ROLE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_line_skips_empty_parts() {
        let mut entry = Testimonial {
            role: Some("CTO".into()),
            company: Some("Initech".into()),
            ..Default::default()
        };
        assert_eq!(role_line(&entry), "CTO · Initech");
        entry.role = Some(" ".into());
        assert_eq!(role_line(&entry), "Initech");
        entry.company = None;
        assert_eq!(role_line(&entry), "");
    }
}
