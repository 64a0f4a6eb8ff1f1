#![allow(dead_code)]

use folio_core::dom::scaffold;
use folio_core::{Document, ElementSpec, MemoryDocument, MountIds, NodeId};
use folio_model::{
    DemoLink, Outcome, Project, Sandbox, Spotlight, SpotlightItem, Testimonial, WalkthroughStep,
};

/// Document with every default mount in place.
pub fn page() -> (MemoryDocument, MountIds) {
    let mut doc = MemoryDocument::new();
    let ids = MountIds::default();
    scaffold(&mut doc, &ids);
    (doc, ids)
}

pub fn by_id(doc: &MemoryDocument, id: &str) -> NodeId {
    doc.element_by_id(id)
        .unwrap_or_else(|| panic!("#{id} should exist"))
}

/// A button outside the dialog that opens it.
pub fn trigger_button(doc: &mut MemoryDocument) -> NodeId {
    let body = doc.body();
    doc.append(body, ElementSpec::new("button").text("View case study"))
}

pub fn step(label: &str) -> WalkthroughStep {
    WalkthroughStep {
        label: Some(label.to_string()),
        summary: Some(format!("{label} summary")),
        ..Default::default()
    }
}

pub fn two_step_item() -> SpotlightItem {
    SpotlightItem {
        title: Some("X".into()),
        walkthrough: vec![
            WalkthroughStep {
                metric_label: Some("Scan speed".into()),
                metric_value: Some("< 1s".into()),
                code: Some("repos := scanner.FindRepos(root)".into()),
                language: Some("Go".into()),
                ..step("Step A")
            },
            step("Step B"),
        ],
        ..Default::default()
    }
}

pub fn sample_project(slug: &str) -> Project {
    Project {
        slug: Some(slug.to_string()),
        title: Some(slug.to_string()),
        meta: Some("2024".into()),
        badge: Some("OSS".into()),
        description: Some(format!("{slug} description")),
        tags: vec!["Rust".into()],
        demo: Some(DemoLink {
            href: Some(format!("https://demo.example/{slug}")),
            label: None,
        }),
        spotlight: Some(Spotlight {
            roles: vec!["Creator".into()],
            highlights: vec!["Keyboard driven".into()],
            outcomes: vec![Outcome {
                label: Some("Stars".into()),
                value: Some("Growing".into()),
            }],
            walkthrough: vec![step("Discovery"), step("Graph")],
            sandbox: Some(Sandbox {
                title: Some("Try it".into()),
                description: None,
                src: Some(format!("https://sandbox.example/{slug}")),
            }),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn testimonial(category: &str, quote: &str) -> Testimonial {
    Testimonial {
        category: Some(category.to_string()),
        quote: Some(quote.to_string()),
        attribution: Some(format!("{quote} author")),
        role: Some("Lead".into()),
        company: Some("Initech".into()),
        ..Default::default()
    }
}
