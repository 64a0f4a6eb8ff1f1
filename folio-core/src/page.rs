//! Page host that owns the components and routes events to them.

use folio_model::{SiteContent, SpotlightItem};

use crate::carousel::{CarouselMessage, TestimonialCarousel};
use crate::dialog::{DialogMessage, ProjectDialog};
use crate::dom::{Document, NodeId};
use crate::focus::{KeyOutcome, KeyPress};
use crate::mounts::MountIds;
use crate::projects::ProjectGrid;

/// Everything interactive on the page, built once per mount.
///
/// All mutation goes through `&mut self`, so events are applied one at a time
/// in dispatch order. Events reach the components as messages through their
/// `update` entry points.
#[derive(Debug)]
pub struct Portfolio {
    grid: ProjectGrid,
    dialog: ProjectDialog,
    carousel: TestimonialCarousel,
}

impl Portfolio {
    pub fn mount(doc: &dyn Document, ids: &MountIds) -> Self {
        Self {
            grid: ProjectGrid::mount(doc, &ids.projects),
            dialog: ProjectDialog::mount(doc, &ids.dialog),
            carousel: TestimonialCarousel::mount(doc, &ids.carousel),
        }
    }

    pub fn dialog(&self) -> &ProjectDialog {
        &self.dialog
    }

    pub fn carousel(&self) -> &TestimonialCarousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut TestimonialCarousel {
        &mut self.carousel
    }

    pub fn dialog_mut(&mut self) -> &mut ProjectDialog {
        &mut self.dialog
    }

    pub fn grid(&self) -> &ProjectGrid {
        &self.grid
    }

    /// (Re)render from content. All component state starts over.
    pub fn render(&mut self, doc: &mut dyn Document, content: &SiteContent) {
        self.dialog.update(doc, DialogMessage::Close);
        self.grid.render(doc, &content.projects);
        self.dialog.init();
        let load = CarouselMessage::Load(content.testimonials.clone());
        self.carousel.update(doc, load);
        log::info!(
            "rendered portfolio: {} projects, {} testimonials",
            content.projects.len(),
            content.testimonials.len()
        );
    }

    /// Open the case study for the project at `index`, as if its trigger was
    /// clicked.
    pub fn open_project(&mut self, doc: &mut dyn Document, index: usize) -> bool {
        let Some(project) = self.grid.projects().get(index) else {
            log::warn!("no project at index {index}");
            return false;
        };
        let item = Box::new(SpotlightItem::from(project));
        let trigger = self.grid.trigger(index);
        let message = DialogMessage::Open { item, trigger };
        self.dialog.update(doc, message)
    }

    pub fn handle_click(&mut self, doc: &mut dyn Document, target: NodeId) -> bool {
        if self.dialog.update(doc, DialogMessage::Clicked(target)) {
            return true;
        }
        if let Some((item, trigger)) = self.grid.spotlight_for(doc, target) {
            let message = DialogMessage::Open {
                item: Box::new(item),
                trigger: Some(trigger),
            };
            self.dialog.update(doc, message);
            return true;
        }
        self.carousel.update(doc, CarouselMessage::Clicked(target))
    }

    pub fn handle_key(&mut self, doc: &mut dyn Document, press: KeyPress) -> KeyOutcome {
        if self.dialog.update(doc, DialogMessage::Key(press)) {
            KeyOutcome::Handled
        } else {
            KeyOutcome::Ignored
        }
    }
}
