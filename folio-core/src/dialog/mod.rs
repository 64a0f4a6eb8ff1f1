//! Project spotlight dialog.
//!
//! A single modal surface with two states, closed and open. Opening populates
//! every field from a [`SpotlightItem`], locks page scroll, moves focus inside
//! and engages the focus trap; closing undoes all of it and hands focus back
//! to whatever opened the dialog.

mod sandbox;
mod walkthrough;

pub use sandbox::{SandboxMounts, SandboxPanel};
pub use walkthrough::{Walkthrough, WalkthroughMounts};

use folio_model::{OutcomeCard, SpotlightItem};

use crate::dom::{Document, ElementSpec, NodeId};
use crate::focus::{FocusTrap, KeyOutcome, KeyPress, TrapResponse};
use crate::mounts::DialogMountIds;

const TAG_CLASS: &str =
    "rounded-full bg-brand/10 px-3 py-1 text-xs font-semibold uppercase tracking-widest text-brand";
const HIGHLIGHT_CLASS: &str = "leading-relaxed text-slate-600 dark:text-slate-300";
const OUTCOME_CLASS: &str = "rounded-2xl border border-slate-200 bg-white/90 p-4 text-left text-sm text-slate-700 shadow-sm dark:border-slate-800/80 dark:bg-slate-950/40 dark:text-slate-200";
const OUTCOME_LABEL_CLASS: &str = "text-xs uppercase tracking-[0.3em] text-slate-500";
const OUTCOME_VALUE_CLASS: &str = "mt-2 text-lg font-semibold text-brand";

/// Resolved mount points. Any of them may be missing; the matching piece of
/// content is then skipped.
#[derive(Debug, Clone, Default)]
pub struct DialogMounts {
    pub root: Option<NodeId>,
    pub overlay: Option<NodeId>,
    pub content: Option<NodeId>,
    pub close: Option<NodeId>,
    pub meta: Option<NodeId>,
    pub badge: Option<NodeId>,
    pub title: Option<NodeId>,
    pub overview: Option<NodeId>,
    pub roles: Option<NodeId>,
    pub highlights: Option<NodeId>,
    pub outcomes: Option<NodeId>,
    pub walkthrough: WalkthroughMounts,
    pub sandbox: SandboxMounts,
}

impl DialogMounts {
    pub fn resolve(doc: &dyn Document, ids: &DialogMountIds) -> Self {
        let mounts = Self {
            root: doc.element_by_id(&ids.root),
            overlay: doc.element_by_id(&ids.overlay),
            content: doc.element_by_id(&ids.content),
            close: doc.element_by_id(&ids.close),
            meta: doc.element_by_id(&ids.meta),
            badge: doc.element_by_id(&ids.badge),
            title: doc.element_by_id(&ids.title),
            overview: doc.element_by_id(&ids.overview),
            roles: doc.element_by_id(&ids.roles),
            highlights: doc.element_by_id(&ids.highlights),
            outcomes: doc.element_by_id(&ids.outcomes),
            walkthrough: WalkthroughMounts::resolve(doc, ids),
            sandbox: SandboxMounts::resolve(doc, ids),
        };
        if mounts.root.is_none() {
            log::debug!(
                "project dialog root #{} not on page; dialog disabled",
                ids.root
            );
        }
        mounts
    }
}

#[derive(Debug, Default)]
enum DialogState {
    #[default]
    Closed,
    Open {
        trigger: Option<NodeId>,
        previous_overflow: String,
    },
}

/// Messages the host forwards to the dialog.
#[derive(Debug, Clone)]
pub enum DialogMessage {
    Open {
        item: Box<SpotlightItem>,
        trigger: Option<NodeId>,
    },
    Close,
    SelectStep(usize),
    Clicked(NodeId),
    Key(KeyPress),
}

impl DialogMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Open { .. } => "Dialog::Open",
            Self::Close => "Dialog::Close",
            Self::SelectStep(_) => "Dialog::SelectStep",
            Self::Clicked(_) => "Dialog::Clicked",
            Self::Key(_) => "Dialog::Key",
        }
    }
}

#[derive(Debug)]
pub struct ProjectDialog {
    mounts: DialogMounts,
    state: DialogState,
    trap: FocusTrap,
    walkthrough: Walkthrough,
    sandbox: SandboxPanel,
    listeners_bound: bool,
}

impl ProjectDialog {
    pub fn new(mounts: DialogMounts) -> Self {
        Self {
            walkthrough: Walkthrough::new(mounts.walkthrough.clone()),
            sandbox: SandboxPanel::new(mounts.sandbox.clone()),
            mounts,
            state: DialogState::Closed,
            trap: FocusTrap::default(),
            listeners_bound: false,
        }
    }

    /// Resolve mounts from `doc` and build the dialog.
    pub fn mount(doc: &dyn Document, ids: &DialogMountIds) -> Self {
        Self::new(DialogMounts::resolve(doc, ids))
    }

    /// Start honouring close-button and overlay clicks. Safe to call again.
    pub fn init(&mut self) {
        if self.mounts.root.is_none() || self.listeners_bound {
            return;
        }
        self.listeners_bound = true;
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, DialogState::Open { .. })
    }

    pub fn is_trapping_focus(&self) -> bool {
        self.trap.is_engaged()
    }

    /// Active walkthrough step while open with a non-empty walkthrough.
    pub fn active_step(&self) -> Option<usize> {
        self.walkthrough.active()
    }

    pub fn walkthrough(&self) -> &Walkthrough {
        &self.walkthrough
    }

    pub fn sandbox(&self) -> &SandboxPanel {
        &self.sandbox
    }

    /// Element focus returns to on close.
    pub fn trigger(&self) -> Option<NodeId> {
        match &self.state {
            DialogState::Open { trigger, .. } => *trigger,
            DialogState::Closed => None,
        }
    }

    /// Show `item`. Opening while already open re-populates everything.
    pub fn open(&mut self, doc: &mut dyn Document, item: &SpotlightItem, trigger: Option<NodeId>) {
        let Some(root) = self.mounts.root else {
            return;
        };

        let trigger = trigger.filter(|node| doc.is_connected(*node));
        // Re-opening keeps the overflow captured before the first open; the
        // live value is our own lock by now.
        let previous_overflow = match std::mem::take(&mut self.state) {
            DialogState::Open {
                previous_overflow, ..
            } => previous_overflow,
            DialogState::Closed => doc.body_overflow(),
        };
        doc.set_body_overflow("hidden");
        doc.set_hidden(root, false);

        self.populate(doc, item);
        self.walkthrough.rebuild(doc, &item.walkthrough);
        self.sandbox.render(doc, item);

        if let Some(content) = self.mounts.content {
            doc.set_scroll_top(content, 0);
        }
        if let Some(close) = self.mounts.close {
            doc.focus(close);
        } else if let Some(content) = self.mounts.content {
            doc.focus(content);
        }

        self.trap.engage(root);
        self.state = DialogState::Open {
            trigger,
            previous_overflow,
        };
        log::debug!(
            "opened project dialog '{}' ({} walkthrough steps)",
            item.display_title(),
            self.walkthrough.len()
        );
    }

    /// Hide the dialog and restore the page. No-op when already closed.
    pub fn close(&mut self, doc: &mut dyn Document) {
        let DialogState::Open {
            trigger,
            previous_overflow,
        } = std::mem::take(&mut self.state)
        else {
            return;
        };

        if let Some(root) = self.mounts.root {
            doc.set_hidden(root, true);
        }
        self.trap.release();
        if let Some(content) = self.mounts.content {
            doc.set_scroll_top(content, 0);
        }
        doc.set_body_overflow(&previous_overflow);

        if let Some(trigger) = trigger
            && doc.is_connected(trigger)
        {
            doc.focus(trigger);
        }

        self.walkthrough.clear(doc);
        self.sandbox.clear(doc);
        log::debug!("closed project dialog");
    }

    /// Switch walkthrough tabs. Ignored when closed or out of range.
    pub fn select_walkthrough_step(&mut self, doc: &mut dyn Document, index: usize) -> bool {
        if !self.is_open() {
            return false;
        }
        self.walkthrough.select(doc, index)
    }

    /// Keydown handler; active only while open.
    pub fn handle_key(&mut self, doc: &mut dyn Document, press: KeyPress) -> KeyOutcome {
        if !self.is_open() {
            return KeyOutcome::Ignored;
        }
        match self.trap.on_key(doc, press) {
            TrapResponse::Close => {
                self.close(doc);
                KeyOutcome::Handled
            }
            TrapResponse::Wrapped(_) => KeyOutcome::Handled,
            TrapResponse::PassThrough => KeyOutcome::Ignored,
        }
    }

    /// Click handler. Returns whether the click belonged to the dialog.
    pub fn handle_click(&mut self, doc: &mut dyn Document, target: NodeId) -> bool {
        if !self.is_open() {
            return false;
        }
        if let Some(index) = self.walkthrough.step_for(doc, target) {
            return self.select_walkthrough_step(doc, index);
        }
        if !self.listeners_bound {
            return false;
        }
        let dismiss = [self.mounts.close, self.mounts.overlay]
            .into_iter()
            .flatten()
            .any(|node| doc.is_within(target, node));
        if dismiss {
            self.close(doc);
        }
        dismiss
    }

    /// Single entry point for hosts that dispatch messages.
    pub fn update(&mut self, doc: &mut dyn Document, message: DialogMessage) -> bool {
        log::trace!("{}", message.name());
        match message {
            DialogMessage::Open { item, trigger } => {
                self.open(doc, &item, trigger);
                self.is_open()
            }
            DialogMessage::Close => {
                let was_open = self.is_open();
                self.close(doc);
                was_open
            }
            DialogMessage::SelectStep(index) => self.select_walkthrough_step(doc, index),
            DialogMessage::Clicked(target) => self.handle_click(doc, target),
            DialogMessage::Key(press) => self.handle_key(doc, press) == KeyOutcome::Handled,
        }
    }

    fn populate(&self, doc: &mut dyn Document, item: &SpotlightItem) {
        if let Some(meta) = self.mounts.meta {
            doc.set_text(meta, item.meta_text().unwrap_or_default());
            doc.set_hidden(meta, item.meta_text().is_none());
        }
        if let Some(badge) = self.mounts.badge {
            doc.set_text(badge, item.badge_text().unwrap_or_default());
            doc.set_hidden(badge, item.badge_text().is_none());
        }
        if let Some(title) = self.mounts.title {
            doc.set_text(title, item.display_title());
        }
        if let Some(overview) = self.mounts.overview {
            doc.set_text(overview, &item.overview_text());
        }

        if let Some(roles) = self.mounts.roles {
            doc.clear_children(roles);
            for role in item.role_tags() {
                doc.append(roles, ElementSpec::new("span").class(TAG_CLASS).text(role));
            }
        }

        if let Some(highlights) = self.mounts.highlights {
            doc.clear_children(highlights);
            for line in item.highlight_lines() {
                doc.append(
                    highlights,
                    ElementSpec::new("li").class(HIGHLIGHT_CLASS).text(line),
                );
            }
        }

        if let Some(outcomes) = self.mounts.outcomes {
            doc.clear_children(outcomes);
            for card in item.outcome_cards() {
                append_outcome(doc, outcomes, card);
            }
        }
    }
}

fn append_outcome(doc: &mut dyn Document, list: NodeId, card: OutcomeCard<'_>) {
    match card {
        OutcomeCard::Metric { label, value } => {
            let entry = doc.append(list, ElementSpec::new("li").class(OUTCOME_CLASS));
            doc.append(
                entry,
                ElementSpec::new("p").class(OUTCOME_LABEL_CLASS).text(label),
            );
            doc.append(
                entry,
                ElementSpec::new("p").class(OUTCOME_VALUE_CLASS).text(value),
            );
        }
        OutcomeCard::Pending(message) => {
            doc.append(
                list,
                ElementSpec::new("li")
                    .class(OUTCOME_CLASS)
                    .text(message)
                    .attr("data-placeholder", "true"),
            );
        }
    }
}
