use std::collections::BTreeMap;
use std::fmt::Write as _;

use super::{Document, ElementSpec, HIDDEN_CLASS, NodeId};

const BODY: NodeId = NodeId::new(0);
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    classes: Vec<String>,
    text: Option<String>,
    attributes: BTreeMap<String, String>,
    disabled: bool,
    scroll_top: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(tag: String) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            text: None,
            attributes: BTreeMap::new(),
            disabled: false,
            scroll_top: 0,
            parent: None,
            children: Vec::new(),
        }
    }

    fn is_focusable(&self) -> bool {
        match self.tag.as_str() {
            "a" if self.attributes.contains_key("href") => true,
            "button" => !self.disabled,
            "textarea" | "input" | "select" => true,
            _ => self
                .attributes
                .get("tabindex")
                .is_some_and(|value| value.trim() != "-1"),
        }
    }
}

/// Arena-backed page used off-browser.
///
/// Nodes are never freed; detaching only unlinks them, so stale handles stay
/// valid and report `is_connected() == false`.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    active: Option<NodeId>,
    body_overflow: String,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new("body".to_string())],
            active: None,
            body_overflow: String::new(),
        }
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        usize::try_from(id.raw())
            .ok()
            .and_then(|index| self.nodes.get(index))
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        usize::try_from(id.raw())
            .ok()
            .and_then(|index| self.nodes.get_mut(index))
    }

    /// Unlink a node (and its subtree) from the page.
    pub fn detach(&mut self, node: NodeId) {
        if node == BODY {
            return;
        }
        let Some(parent) = self.node(node).and_then(|n| n.parent) else {
            return;
        };
        if let Some(parent) = self.node_mut(parent) {
            parent.children.retain(|child| *child != node);
        }
        if let Some(detached) = self.node_mut(node) {
            detached.parent = None;
        }
        self.drop_focus_outside_page();
    }

    fn drop_focus_outside_page(&mut self) {
        if let Some(active) = self.active
            && !self.is_connected(active)
        {
            self.active = None;
        }
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.node(node).map(|n| n.tag.as_str())
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.node(node)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.node(node)
            .and_then(|n| n.attributes.get(name))
            .map(String::as_str)
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.node(node)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    pub fn is_hidden(&self, node: NodeId) -> bool {
        self.has_class(node, HIDDEN_CLASS)
    }

    pub fn is_disabled(&self, node: NodeId) -> bool {
        self.node(node).is_some_and(|n| n.disabled)
    }

    pub fn scroll_top(&self, node: NodeId) -> u32 {
        self.node(node).map(|n| n.scroll_top).unwrap_or_default()
    }

    /// Concatenated text of the node and its descendants.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        let Some(n) = self.node(node) else { return };
        if let Some(text) = &n.text {
            out.push_str(text);
        }
        for child in &n.children {
            self.collect_text(*child, out);
        }
    }

    /// Serialize a subtree as HTML.
    pub fn to_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_html(node, 0, &mut out);
        out
    }

    fn write_html(&self, node: NodeId, depth: usize, out: &mut String) {
        let Some(n) = self.node(node) else { return };
        let indent = "  ".repeat(depth);
        let _ = write!(out, "{indent}<{}", n.tag);
        if let Some(id) = n.attributes.get("id") {
            let _ = write!(out, " id=\"{}\"", escape(id));
        }
        if !n.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&n.classes.join(" ")));
        }
        for (name, value) in n.attributes.iter().filter(|(name, _)| *name != "id") {
            let _ = write!(out, " {name}=\"{}\"", escape(value));
        }
        if n.disabled {
            out.push_str(" disabled");
        }
        out.push('>');

        if VOID_TAGS.contains(&n.tag.as_str()) {
            out.push('\n');
            return;
        }

        if n.children.is_empty() {
            if let Some(text) = &n.text {
                out.push_str(&escape(text));
            }
        } else {
            out.push('\n');
            if let Some(text) = &n.text {
                let _ = writeln!(out, "{indent}  {}", escape(text));
            }
            for child in &n.children {
                self.write_html(*child, depth + 1, out);
            }
            out.push_str(&indent);
        }
        let _ = writeln!(out, "</{}>", n.tag);
    }

    fn is_hidden_between(&self, node: NodeId, root: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            if self.is_hidden(current) {
                return true;
            }
            if current == root {
                return false;
            }
            cursor = self.node(current).and_then(|n| n.parent);
        }
        false
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

impl Document for MemoryDocument {
    fn body(&self) -> NodeId {
        BODY
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        (0..self.nodes.len())
            .map(|index| NodeId::new(index as u64))
            .find(|node| self.attribute(*node, "id") == Some(id) && self.is_connected(*node))
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).and_then(|n| n.parent)
    }

    fn append(&mut self, parent: NodeId, spec: ElementSpec) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u64);
        let mut node = Node::new(spec.tag);
        node.classes = split_classes(&spec.class);
        node.text = spec.text;
        for (name, value) in spec.attributes {
            if name == "disabled" {
                node.disabled = true;
            } else {
                node.attributes.insert(name, value);
            }
        }
        if self.node(parent).is_some() {
            node.parent = Some(parent);
        }
        self.nodes.push(node);
        if let Some(parent) = self.node_mut(parent) {
            parent.children.push(id);
        }
        id
    }

    fn clear_children(&mut self, node: NodeId) {
        let children = match self.node_mut(node) {
            Some(n) => std::mem::take(&mut n.children),
            None => return,
        };
        for child in children {
            if let Some(child) = self.node_mut(child) {
                child.parent = None;
            }
        }
        self.drop_focus_outside_page();
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        self.clear_children(node);
        if let Some(n) = self.node_mut(node) {
            n.text = Some(text.to_string());
        }
    }

    fn set_class(&mut self, node: NodeId, class: &str) {
        if let Some(n) = self.node_mut(node) {
            n.classes = split_classes(class);
        }
    }

    fn toggle_class(&mut self, node: NodeId, class: &str, present: bool) {
        let Some(n) = self.node_mut(node) else { return };
        let has = n.classes.iter().any(|c| c == class);
        if present && !has {
            n.classes.push(class.to_string());
        } else if !present && has {
            n.classes.retain(|c| c != class);
        }
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(n) = self.node_mut(node) {
            n.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn remove_attribute(&mut self, node: NodeId, name: &str) {
        if let Some(n) = self.node_mut(node) {
            n.attributes.remove(name);
        }
    }

    fn set_disabled(&mut self, node: NodeId, disabled: bool) {
        if let Some(n) = self.node_mut(node) {
            n.disabled = disabled;
        }
    }

    fn focus(&mut self, node: NodeId) {
        if self.is_connected(node) {
            self.active = Some(node);
        }
    }

    fn active_element(&self) -> Option<NodeId> {
        self.active
    }

    fn is_connected(&self, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            if current == BODY {
                return true;
            }
            cursor = self.node(current).and_then(|n| n.parent);
        }
        false
    }

    fn focusable_within(&self, root: NodeId) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack: Vec<NodeId> = self.children(root).iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            let Some(n) = self.node(current) else {
                continue;
            };
            if n.is_focusable() && !self.is_hidden_between(current, root) {
                found.push(current);
            }
            stack.extend(n.children.iter().rev().copied());
        }
        found
    }

    fn set_scroll_top(&mut self, node: NodeId, top: u32) {
        if let Some(n) = self.node_mut(node) {
            n.scroll_top = top;
        }
    }

    fn body_overflow(&self) -> String {
        self.body_overflow.clone()
    }

    fn set_body_overflow(&mut self, value: &str) {
        self.body_overflow = value.to_string();
    }
}

fn split_classes(class: &str) -> Vec<String> {
    class.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focusable_order_follows_document_order() {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        let root = doc.append(body, ElementSpec::new("div"));
        let close = doc.append(root, ElementSpec::new("button"));
        let section = doc.append(root, ElementSpec::new("section"));
        let link = doc.append(section, ElementSpec::new("a").attr("href", "#"));
        let _anchor = doc.append(section, ElementSpec::new("a"));
        let disabled = doc.append(root, ElementSpec::new("button").attr("disabled", ""));
        let skipped = doc.append(root, ElementSpec::new("div").attr("tabindex", "-1"));
        let tabbable = doc.append(root, ElementSpec::new("div").attr("tabindex", "0"));

        assert_eq!(doc.focusable_within(root), vec![close, link, tabbable]);
        assert!(doc.is_disabled(disabled));
        assert!(!doc.focusable_within(root).contains(&skipped));
    }

    #[test]
    fn hidden_subtrees_are_not_focusable() {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        let root = doc.append(body, ElementSpec::new("div"));
        let panel = doc.append(root, ElementSpec::new("div").class("hidden"));
        doc.append(panel, ElementSpec::new("a").attr("href", "#"));
        let visible = doc.append(root, ElementSpec::new("button"));
        assert_eq!(doc.focusable_within(root), vec![visible]);
    }

    #[test]
    fn detaching_drops_focus_and_lookup() {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        let button = doc.append(body, ElementSpec::new("button").id("trigger"));
        doc.focus(button);
        assert_eq!(doc.active_element(), Some(button));

        doc.detach(button);
        assert!(!doc.is_connected(button));
        assert_eq!(doc.active_element(), None);
        assert_eq!(doc.element_by_id("trigger"), None);

        doc.focus(button);
        assert_eq!(doc.active_element(), None);
    }

    #[test]
    fn set_text_replaces_children_and_html_escapes() {
        let mut doc = MemoryDocument::new();
        let body = doc.body();
        let list = doc.append(body, ElementSpec::new("ul").class("tags"));
        doc.append(list, ElementSpec::new("li").text("a"));
        doc.set_text(list, "<none>");
        assert!(doc.children(list).is_empty());
        assert_eq!(doc.text_content(list), "<none>");
        assert_eq!(doc.to_html(list), "<ul class=\"tags\">&lt;none&gt;</ul>\n");
    }
}
