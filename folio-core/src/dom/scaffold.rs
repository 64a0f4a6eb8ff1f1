use super::{Document, ElementSpec, HIDDEN_CLASS};
use crate::mounts::MountIds;

/// Build the page markup the components expect, one element per mount id.
///
/// Browser hosts ship this markup in their HTML; off-browser hosts call this
/// on an empty document.
pub fn scaffold(doc: &mut dyn Document, ids: &MountIds) {
    let body = doc.body();

    let work = doc.append(body, ElementSpec::new("section").id("work"));
    doc.append(
        work,
        ElementSpec::new("ul")
            .id(&ids.projects.list)
            .class("grid gap-6 md:grid-cols-2"),
    );

    let carousel = &ids.carousel;
    let testimonials = doc.append(body, ElementSpec::new("section").id("testimonials"));
    doc.append(
        testimonials,
        ElementSpec::new("div")
            .id(&carousel.filters)
            .class("flex flex-wrap gap-2")
            .attr("role", "tablist"),
    );
    let figure = doc.append(testimonials, ElementSpec::new("figure"));
    doc.append(figure, ElementSpec::new("div").id(&carousel.badge));
    doc.append(figure, ElementSpec::new("blockquote").id(&carousel.quote));
    let caption = doc.append(figure, ElementSpec::new("figcaption"));
    doc.append(caption, ElementSpec::new("p").id(&carousel.attribution));
    doc.append(caption, ElementSpec::new("p").id(&carousel.role));
    let controls = doc.append(
        testimonials,
        ElementSpec::new("div").class("flex items-center gap-4"),
    );
    doc.append(
        controls,
        ElementSpec::new("button")
            .id(&carousel.prev)
            .attr("type", "button")
            .attr("aria-label", "Previous testimonial"),
    );
    doc.append(
        controls,
        ElementSpec::new("div")
            .id(&carousel.pagination)
            .class("flex gap-2"),
    );
    doc.append(
        controls,
        ElementSpec::new("button")
            .id(&carousel.next)
            .attr("type", "button")
            .attr("aria-label", "Next testimonial"),
    );

    let dialog = &ids.dialog;
    let root = doc.append(
        body,
        ElementSpec::new("div")
            .id(&dialog.root)
            .class(HIDDEN_CLASS)
            .attr("role", "dialog")
            .attr("aria-modal", "true")
            .attr("aria-labelledby", &dialog.title),
    );
    doc.append(
        root,
        ElementSpec::new("div")
            .id(&dialog.overlay)
            .class("fixed inset-0 bg-slate-950/60")
            .attr("data-modal-overlay", ""),
    );
    let panel = doc.append(
        root,
        ElementSpec::new("div").class("relative mx-auto max-w-3xl"),
    );
    doc.append(
        panel,
        ElementSpec::new("button")
            .id(&dialog.close)
            .attr("type", "button")
            .attr("aria-label", "Close project details"),
    );
    let content = doc.append(
        panel,
        ElementSpec::new("div")
            .id(&dialog.content)
            .class("max-h-[80vh] overflow-y-auto")
            .attr("tabindex", "-1"),
    );
    let header = doc.append(content, ElementSpec::new("header"));
    doc.append(header, ElementSpec::new("span").id(&dialog.meta));
    doc.append(header, ElementSpec::new("span").id(&dialog.badge));
    doc.append(header, ElementSpec::new("h2").id(&dialog.title));
    doc.append(content, ElementSpec::new("p").id(&dialog.overview));
    doc.append(
        content,
        ElementSpec::new("div")
            .id(&dialog.roles)
            .class("flex flex-wrap gap-2"),
    );
    doc.append(content, ElementSpec::new("ul").id(&dialog.highlights));
    doc.append(
        content,
        ElementSpec::new("ul")
            .id(&dialog.outcomes)
            .class("grid gap-4 sm:grid-cols-3"),
    );

    let walkthrough = doc.append(
        content,
        ElementSpec::new("section")
            .id(&dialog.walkthrough)
            .class(HIDDEN_CLASS),
    );
    doc.append(
        walkthrough,
        ElementSpec::new("div")
            .id(&dialog.walkthrough_tabs)
            .attr("role", "tablist"),
    );
    let detail = doc.append(
        walkthrough,
        ElementSpec::new("div").attr("role", "tabpanel"),
    );
    doc.append(detail, ElementSpec::new("h3").id(&dialog.step_label));
    doc.append(detail, ElementSpec::new("p").id(&dialog.step_summary));
    let metric = doc.append(detail, ElementSpec::new("dl").id(&dialog.step_metric));
    doc.append(metric, ElementSpec::new("dt").id(&dialog.step_metric_label));
    doc.append(metric, ElementSpec::new("dd").id(&dialog.step_metric_value));
    let code_block = doc.append(detail, ElementSpec::new("pre").id(&dialog.step_code_block));
    doc.append(code_block, ElementSpec::new("code").id(&dialog.step_code));

    let sandbox = doc.append(
        content,
        ElementSpec::new("section")
            .id(&dialog.sandbox)
            .class(HIDDEN_CLASS),
    );
    doc.append(sandbox, ElementSpec::new("h3").id(&dialog.sandbox_title));
    doc.append(
        sandbox,
        ElementSpec::new("p").id(&dialog.sandbox_description),
    );
    doc.append(
        sandbox,
        ElementSpec::new("iframe")
            .id(&dialog.sandbox_frame)
            .class(HIDDEN_CLASS)
            .attr("loading", "lazy"),
    );
    doc.append(
        sandbox,
        ElementSpec::new("a")
            .id(&dialog.sandbox_link)
            .class(HIDDEN_CLASS)
            .attr("target", "_blank")
            .attr("rel", "noreferrer noopener"),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::MemoryDocument;

    #[test]
    fn every_mount_id_resolves() {
        let mut doc = MemoryDocument::new();
        let ids = MountIds::default();
        scaffold(&mut doc, &ids);
        for (setting, id) in ids.entries() {
            assert!(doc.element_by_id(id).is_some(), "{setting} ({id}) missing");
        }
    }
}
