//! Off-browser rendering session.

use anyhow::{Result, bail};
use folio_core::dom::scaffold;
use folio_core::{Document, FilterKey, MemoryDocument, MountIds, Portfolio};
use folio_model::SiteContent;

use crate::cli::Script;

/// A scaffolded page with the portfolio mounted and rendered.
#[derive(Debug)]
pub struct Session {
    doc: MemoryDocument,
    portfolio: Portfolio,
    content: SiteContent,
}

impl Session {
    pub fn new(content: SiteContent, mounts: &MountIds) -> Self {
        let mut doc = MemoryDocument::new();
        scaffold(&mut doc, mounts);
        let mut portfolio = Portfolio::mount(&doc, mounts);
        portfolio.render(&mut doc, &content);
        Self {
            doc,
            portfolio,
            content,
        }
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn apply(&mut self, script: &Script) -> Result<()> {
        if let Some(category) = &script.filter {
            let key = FilterKey::from_label(category);
            if !self
                .portfolio
                .carousel()
                .filter_tabs()
                .iter()
                .any(|tab| tab.key == key)
            {
                log::warn!("no testimonials in category '{category}'");
            }
            self.portfolio.carousel_mut().set_filter(&mut self.doc, key);
        }
        for _ in 0..script.next {
            self.portfolio.carousel_mut().next(&mut self.doc);
        }
        for _ in 0..script.prev {
            self.portfolio.carousel_mut().prev(&mut self.doc);
        }

        if let Some(target) = &script.open {
            let index = self.resolve_project(target)?;
            self.portfolio.open_project(&mut self.doc, index);
            if let Some(step) = script.step
                && !self
                    .portfolio
                    .dialog_mut()
                    .select_walkthrough_step(&mut self.doc, step)
            {
                log::warn!("project '{target}' has no walkthrough step {step}");
            }
            if script.close {
                self.portfolio.dialog_mut().close(&mut self.doc);
            }
        }
        Ok(())
    }

    /// HTML of the whole body, or of the element with `id`.
    pub fn html(&self, id: Option<&str>) -> Result<String> {
        let node = match id {
            Some(id) => match self.doc.element_by_id(id) {
                Some(node) => node,
                None => bail!("no element with id '{id}'"),
            },
            None => self.doc.body(),
        };
        Ok(self.doc.to_html(node))
    }

    fn resolve_project(&self, target: &str) -> Result<usize> {
        let projects = &self.content.projects;
        if let Ok(index) = target.parse::<usize>() {
            if index < projects.len() {
                return Ok(index);
            }
            bail!(
                "project index {index} out of range ({} projects loaded)",
                projects.len()
            );
        }
        projects
            .iter()
            .position(|project| project.slug.as_deref() == Some(target))
            .ok_or_else(|| anyhow::anyhow!("no project with slug '{target}'"))
    }
}
