//! Binding between controllers and whatever renders the page.
//!
//! Controllers never look elements up themselves. They are handed resolved
//! [`NodeId`]s for their mount points and issue mutations through
//! [`Document`]. A browser host implements the trait over real elements;
//! [`MemoryDocument`] is the in-process implementation used by tests and the
//! preview tool.

mod memory;
mod scaffold;

pub use memory::MemoryDocument;
pub use scaffold::scaffold;

/// Class toggled to hide an element.
pub const HIDDEN_CLASS: &str = "hidden";

/// Opaque handle to an element owned by a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Description of an element to create.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementSpec {
    pub tag: String,
    pub class: String,
    pub text: Option<String>,
    pub attributes: Vec<(String, String)>,
}

impl ElementSpec {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }
}

/// Mutations and queries the controllers need from a page.
///
/// Every method must tolerate handles that are no longer attached; a detached
/// node simply ignores mutations.
pub trait Document {
    /// The page body; parent of every mount.
    fn body(&self) -> NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId>;

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Create `spec` as the last child of `parent`.
    fn append(&mut self, parent: NodeId, spec: ElementSpec) -> NodeId;

    fn clear_children(&mut self, node: NodeId);

    /// Replace the node's content with plain text.
    fn set_text(&mut self, node: NodeId, text: &str);

    fn set_class(&mut self, node: NodeId, class: &str);

    fn toggle_class(&mut self, node: NodeId, class: &str, present: bool);

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    fn remove_attribute(&mut self, node: NodeId, name: &str);

    fn set_disabled(&mut self, node: NodeId, disabled: bool);

    fn focus(&mut self, node: NodeId);

    fn active_element(&self) -> Option<NodeId>;

    /// Whether the node is still part of the page.
    fn is_connected(&self, node: NodeId) -> bool;

    /// Keyboard-reachable descendants of `root`, in document order.
    fn focusable_within(&self, root: NodeId) -> Vec<NodeId>;

    fn set_scroll_top(&mut self, node: NodeId, top: u32);

    fn body_overflow(&self) -> String;

    fn set_body_overflow(&mut self, value: &str);

    fn set_hidden(&mut self, node: NodeId, hidden: bool) {
        self.toggle_class(node, HIDDEN_CLASS, hidden);
    }

    /// True when `node` is `ancestor` or sits somewhere below it.
    fn is_within(&self, node: NodeId, ancestor: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }
}
