//! Keyboard focus trapping for modal surfaces.

use crate::dom::{Document, NodeId};

/// Keys the trap cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Tab,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(name: &str) -> Self {
        match name {
            "Escape" | "Esc" => Key::Escape,
            "Tab" => Key::Tab,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    pub logo: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    pub fn shifted(mut self) -> Self {
        self.modifiers.shift = true;
        self
    }
}

/// Whether a key press was consumed. `Handled` means the host must suppress
/// the browser's default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Ignored,
    Handled,
}

/// What the trap decided for a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapResponse {
    /// Not ours; let the page handle it.
    PassThrough,
    /// Escape: the owner should close.
    Close,
    /// Focus was wrapped to the given node.
    Wrapped(NodeId),
}

/// Tracks whether a modal currently owns keyboard focus.
#[derive(Debug, Default)]
pub struct FocusTrap {
    root: Option<NodeId>,
}

impl FocusTrap {
    /// Start trapping focus inside `root`.
    pub fn engage(&mut self, root: NodeId) {
        self.root = Some(root);
    }

    pub fn release(&mut self) {
        self.root = None;
    }

    pub fn is_engaged(&self) -> bool {
        self.root.is_some()
    }

    /// Apply the trap to one key press.
    ///
    /// The focusable set is re-read on every press; the modal's content
    /// changes between presses (tab switches, sandbox links).
    pub fn on_key(&self, doc: &mut dyn Document, press: KeyPress) -> TrapResponse {
        let Some(root) = self.root else {
            return TrapResponse::PassThrough;
        };

        match press.key {
            Key::Escape => TrapResponse::Close,
            Key::Tab => {
                let modifiers = press.modifiers;
                if modifiers.control || modifiers.alt || modifiers.logo {
                    return TrapResponse::PassThrough;
                }
                let focusable = doc.focusable_within(root);
                match resolve_wrap(modifiers.shift, doc.active_element(), &focusable) {
                    Some(target) => {
                        doc.focus(target);
                        TrapResponse::Wrapped(target)
                    }
                    None => TrapResponse::PassThrough,
                }
            }
            Key::Other => TrapResponse::PassThrough,
        }
    }
}

/// Decide whether Tab needs to wrap around the ends of `focusable`.
///
/// Only the edges are handled: Shift+Tab on the first element goes to the
/// last, Tab on the last goes to the first. Anywhere else the browser's own
/// traversal already stays inside the modal.
pub fn resolve_wrap(
    backwards: bool,
    focused: Option<NodeId>,
    focusable: &[NodeId],
) -> Option<NodeId> {
    let first = *focusable.first()?;
    let last = *focusable.last()?;
    let focused = focused?;

    if backwards && focused == first {
        Some(last)
    } else if !backwards && focused == last {
        Some(first)
    } else {
        None
    }
}
