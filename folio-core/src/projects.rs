//! Project card grid; the source of dialog triggers.

use folio_model::{Project, SpotlightItem, html_to_text, non_blank, placeholders};

use crate::dom::{Document, ElementSpec, NodeId};
use crate::mounts::ProjectMountIds;

const CARD_CLASS: &str = "group flex h-full flex-col rounded-3xl border border-slate-200 bg-white/80 p-6 transition hover:-translate-y-1 dark:border-slate-800 dark:bg-slate-900/80";
const TAG_CLASS: &str =
    "rounded-full bg-brand/10 px-3 py-1 text-xs font-semibold uppercase tracking-widest text-brand";
const TRIGGER_CLASS: &str = "inline-flex items-center gap-2 rounded-full border border-slate-300 px-4 py-2 text-xs font-semibold uppercase tracking-[0.3em] text-slate-700 dark:border-slate-700 dark:text-slate-200";
const DEMO_CLASS: &str = "inline-flex items-center gap-2 rounded-full bg-brand/10 px-4 py-2 text-xs font-semibold uppercase tracking-[0.3em] text-brand";
const META_CLASS: &str =
    "flex items-center justify-between text-xs uppercase tracking-[0.3em] text-slate-500";
const EMPTY_CLASS: &str = "rounded-3xl border border-dashed border-slate-200 p-6 text-sm text-slate-500 dark:border-slate-800 dark:text-slate-400";

/// Renders project cards and remembers which button opens which project.
#[derive(Debug, Default)]
pub struct ProjectGrid {
    list: Option<NodeId>,
    projects: Vec<Project>,
    triggers: Vec<NodeId>,
}

impl ProjectGrid {
    pub fn new(list: Option<NodeId>) -> Self {
        Self {
            list,
            ..Default::default()
        }
    }

    pub fn mount(doc: &dyn Document, ids: &ProjectMountIds) -> Self {
        Self::new(doc.element_by_id(&ids.list))
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// "View case study" button of the project at `index`.
    pub fn trigger(&self, index: usize) -> Option<NodeId> {
        self.triggers.get(index).copied()
    }

    pub fn render(&mut self, doc: &mut dyn Document, projects: &[Project]) {
        self.projects = projects.to_vec();
        self.triggers.clear();
        let Some(list) = self.list else {
            return;
        };
        doc.clear_children(list);

        if projects.is_empty() {
            doc.append(
                list,
                ElementSpec::new("li")
                    .class(EMPTY_CLASS)
                    .text(placeholders::PROJECTS),
            );
            return;
        }

        for project in projects {
            let item = doc.append(list, ElementSpec::new("li").class("h-full"));
            let trigger = render_card(doc, item, project);
            self.triggers.push(trigger);
        }
    }

    /// The project a click landed on, with the trigger to refocus later.
    pub fn spotlight_for(
        &self,
        doc: &dyn Document,
        target: NodeId,
    ) -> Option<(SpotlightItem, NodeId)> {
        let index = self
            .triggers
            .iter()
            .position(|trigger| doc.is_within(target, *trigger))?;
        let project = self.projects.get(index)?;
        Some((SpotlightItem::from(project), self.triggers[index]))
    }
}

fn render_card(doc: &mut dyn Document, item: NodeId, project: &Project) -> NodeId {
    let title = non_blank(&project.title).unwrap_or_default();
    let article = doc.append(item, ElementSpec::new("article").class(CARD_CLASS));

    let meta_row = doc.append(article, ElementSpec::new("div").class(META_CLASS));
    doc.append(
        meta_row,
        ElementSpec::new("span").text(project.meta.as_deref().unwrap_or_default()),
    );
    doc.append(
        meta_row,
        ElementSpec::new("span")
            .class("font-medium text-brand")
            .text(project.badge.as_deref().unwrap_or_default()),
    );

    doc.append(
        article,
        ElementSpec::new("h3")
            .class("mt-4 text-2xl font-semibold")
            .text(title),
    );

    let description = if let Some(html) = non_blank(&project.description_html) {
        html_to_text(html)
    } else {
        project.description.clone().unwrap_or_default()
    };
    doc.append(
        article,
        ElementSpec::new("p")
            .class("mt-3 text-sm leading-relaxed text-slate-600 dark:text-slate-300")
            .text(description),
    );

    let tags = doc.append(
        article,
        ElementSpec::new("div").class("mt-6 flex flex-wrap gap-2"),
    );
    for tag in project.card_tags() {
        doc.append(
            tags,
            ElementSpec::new("span").class(TAG_CLASS).text(tag.as_str()),
        );
    }

    let actions = doc.append(
        article,
        ElementSpec::new("div").class("mt-6 flex flex-wrap items-center gap-3"),
    );
    let subject = if title.is_empty() { "project" } else { title };
    let trigger = doc.append(
        actions,
        ElementSpec::new("button")
            .class(TRIGGER_CLASS)
            .text("View case study")
            .attr("type", "button")
            .attr("aria-label", format!("View case study for {subject}")),
    );

    if let Some(demo) = &project.demo
        && let Some(href) = non_blank(&demo.href)
    {
        doc.append(
            actions,
            ElementSpec::new("a")
                .class(DEMO_CLASS)
                .text(non_blank(&demo.label).unwrap_or("Live demo"))
                .attr("href", href)
                .attr("target", "_blank")
                .attr("rel", "noreferrer noopener")
                .attr("aria-label", format!("Open live demo for {subject}")),
        );
    }

    trigger
}
