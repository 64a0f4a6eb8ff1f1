//! Tabbed walkthrough inside the project dialog.

use folio_model::WalkthroughStep;

use crate::dom::{Document, ElementSpec, NodeId};
use crate::mounts::DialogMountIds;

const TAB_CLASS: &str = "rounded-full border border-slate-200 px-4 py-2 text-xs font-semibold uppercase tracking-[0.3em] text-slate-600 dark:border-slate-700 dark:text-slate-300";
const TAB_ACTIVE_CLASS: &str = "rounded-full border border-brand bg-brand px-4 py-2 text-xs font-semibold uppercase tracking-[0.3em] text-white";

#[derive(Debug, Clone, Default)]
pub struct WalkthroughMounts {
    pub section: Option<NodeId>,
    pub tabs: Option<NodeId>,
    pub label: Option<NodeId>,
    pub summary: Option<NodeId>,
    pub metric: Option<NodeId>,
    pub metric_label: Option<NodeId>,
    pub metric_value: Option<NodeId>,
    pub code_block: Option<NodeId>,
    pub code: Option<NodeId>,
}

impl WalkthroughMounts {
    pub fn resolve(doc: &dyn Document, ids: &DialogMountIds) -> Self {
        Self {
            section: doc.element_by_id(&ids.walkthrough),
            tabs: doc.element_by_id(&ids.walkthrough_tabs),
            label: doc.element_by_id(&ids.step_label),
            summary: doc.element_by_id(&ids.step_summary),
            metric: doc.element_by_id(&ids.step_metric),
            metric_label: doc.element_by_id(&ids.step_metric_label),
            metric_value: doc.element_by_id(&ids.step_metric_value),
            code_block: doc.element_by_id(&ids.step_code_block),
            code: doc.element_by_id(&ids.step_code),
        }
    }
}

/// Step list plus the single active step.
///
/// While steps are loaded exactly one of them is active.
#[derive(Debug, Default)]
pub struct Walkthrough {
    mounts: WalkthroughMounts,
    steps: Vec<WalkthroughStep>,
    tabs: Vec<NodeId>,
    active: Option<usize>,
}

impl Walkthrough {
    pub fn new(mounts: WalkthroughMounts) -> Self {
        Self {
            mounts,
            ..Default::default()
        }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn tabs(&self) -> &[NodeId] {
        &self.tabs
    }

    /// Replace the steps, rebuild the tab strip and activate the first step.
    /// An empty list hides the whole section.
    pub fn rebuild(&mut self, doc: &mut dyn Document, steps: &[WalkthroughStep]) {
        self.clear(doc);
        if steps.is_empty() {
            return;
        }

        self.steps = steps.to_vec();
        if let Some(section) = self.mounts.section {
            doc.set_hidden(section, false);
        }
        if let Some(strip) = self.mounts.tabs {
            for (index, step) in self.steps.iter().enumerate() {
                let tab = doc.append(
                    strip,
                    ElementSpec::new("button")
                        .class(TAB_CLASS)
                        .text(step.tab_label(index))
                        .attr("type", "button")
                        .attr("role", "tab")
                        .attr("data-step", index.to_string()),
                );
                self.tabs.push(tab);
            }
        }
        self.activate(doc, 0);
    }

    /// Switch to `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, doc: &mut dyn Document, index: usize) -> bool {
        if index >= self.steps.len() {
            log::debug!(
                "ignoring walkthrough step {index}; only {} steps loaded",
                self.steps.len()
            );
            return false;
        }
        self.activate(doc, index);
        true
    }

    /// Which step a clicked node belongs to, if any.
    pub fn step_for(&self, doc: &dyn Document, target: NodeId) -> Option<usize> {
        self.tabs.iter().position(|tab| doc.is_within(target, *tab))
    }

    pub fn clear(&mut self, doc: &mut dyn Document) {
        if let Some(strip) = self.mounts.tabs {
            doc.clear_children(strip);
        }
        if let Some(section) = self.mounts.section {
            doc.set_hidden(section, true);
        }
        self.steps.clear();
        self.tabs.clear();
        self.active = None;
    }

    fn activate(&mut self, doc: &mut dyn Document, index: usize) {
        self.active = Some(index);
        for (position, tab) in self.tabs.iter().enumerate() {
            let selected = position == index;
            let class = if selected {
                TAB_ACTIVE_CLASS
            } else {
                TAB_CLASS
            };
            doc.set_class(*tab, class);
            doc.set_attribute(*tab, "aria-selected", &selected.to_string());
            doc.set_attribute(*tab, "tabindex", if selected { "0" } else { "-1" });
        }
        if let Some(step) = self.steps.get(index) {
            render_step(doc, &self.mounts, index, step);
        }
    }
}

fn render_step(
    doc: &mut dyn Document,
    mounts: &WalkthroughMounts,
    index: usize,
    step: &WalkthroughStep,
) {
    if let Some(label) = mounts.label {
        doc.set_text(label, &step.tab_label(index));
    }
    if let Some(summary) = mounts.summary {
        doc.set_text(summary, step.summary.as_deref().unwrap_or_default());
    }

    let metric = step.metric();
    if let Some(block) = mounts.metric {
        doc.set_hidden(block, metric.is_none());
    }
    let (metric_label, metric_value) = metric.unwrap_or_default();
    if let Some(node) = mounts.metric_label {
        doc.set_text(node, metric_label);
    }
    if let Some(node) = mounts.metric_value {
        doc.set_text(node, metric_value);
    }

    let code = step.code_sample();
    if let Some(block) = mounts.code_block {
        doc.set_hidden(block, code.is_none());
    }
    if let Some(node) = mounts.code {
        doc.set_text(node, code.unwrap_or_default());
        match step.language() {
            Some(language) => {
                doc.set_attribute(node, "data-language", language);
                doc.set_class(node, &format!("language-{}", language.to_lowercase()));
            }
            None => {
                doc.remove_attribute(node, "data-language");
                doc.set_class(node, "");
            }
        }
    }
}
