//! Live-demo panel: embedded frame and/or external link.

use folio_model::SpotlightItem;

use crate::dom::{Document, NodeId};
use crate::mounts::DialogMountIds;

#[derive(Debug, Clone, Default)]
pub struct SandboxMounts {
    pub panel: Option<NodeId>,
    pub title: Option<NodeId>,
    pub description: Option<NodeId>,
    pub frame: Option<NodeId>,
    pub link: Option<NodeId>,
}

impl SandboxMounts {
    pub fn resolve(doc: &dyn Document, ids: &DialogMountIds) -> Self {
        Self {
            panel: doc.element_by_id(&ids.sandbox),
            title: doc.element_by_id(&ids.sandbox_title),
            description: doc.element_by_id(&ids.sandbox_description),
            frame: doc.element_by_id(&ids.sandbox_frame),
            link: doc.element_by_id(&ids.sandbox_link),
        }
    }
}

#[derive(Debug, Default)]
pub struct SandboxPanel {
    mounts: SandboxMounts,
    embedded: Option<String>,
    link: Option<String>,
}

impl SandboxPanel {
    pub fn new(mounts: SandboxMounts) -> Self {
        Self {
            mounts,
            ..Default::default()
        }
    }

    /// Source currently loaded in the frame.
    pub fn embedded(&self) -> Option<&str> {
        self.embedded.as_deref()
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    pub fn render(&mut self, doc: &mut dyn Document, item: &SpotlightItem) {
        self.clear(doc);
        if !item.has_sandbox_panel() {
            return;
        }

        if let Some(panel) = self.mounts.panel {
            doc.set_hidden(panel, false);
        }
        if let Some(title) = self.mounts.title {
            doc.set_text(title, item.sandbox_title());
        }
        if let Some(node) = self.mounts.description {
            let description = item.sandbox_description();
            doc.set_text(node, description.unwrap_or_default());
            doc.set_hidden(node, description.is_none());
        }

        if let Some(src) = item.sandbox_src() {
            if let Some(frame) = self.mounts.frame {
                doc.set_attribute(frame, "src", src);
                doc.set_attribute(frame, "title", item.sandbox_title());
                doc.set_hidden(frame, false);
            }
            self.embedded = Some(src.to_string());
        }

        if let Some(href) = item.demo_href() {
            if let Some(link) = self.mounts.link {
                doc.set_attribute(link, "href", href);
                doc.set_text(link, item.demo_label());
                doc.set_hidden(link, false);
            }
            self.link = Some(href.to_string());
        }
    }

    /// Hide the panel and unload the frame.
    pub fn clear(&mut self, doc: &mut dyn Document) {
        if let Some(panel) = self.mounts.panel {
            doc.set_hidden(panel, true);
        }
        if let Some(frame) = self.mounts.frame {
            doc.remove_attribute(frame, "src");
            doc.set_hidden(frame, true);
        }
        if let Some(link) = self.mounts.link {
            doc.remove_attribute(link, "href");
            doc.set_hidden(link, true);
        }
        self.embedded = None;
        self.link = None;
    }
}
