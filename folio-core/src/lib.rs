//! Interactive pieces of the portfolio page.
//!
//! Two controllers carry real state: [`dialog::ProjectDialog`] (focus-trapped
//! case-study modal with walkthrough tabs and an optional sandbox) and
//! [`carousel::TestimonialCarousel`] (filtered, cyclic, one-at-a-time quotes).
//! Both render through the [`dom::Document`] binding so they can be driven by a
//! browser host or by the in-memory document used in tests.

pub mod carousel;
pub mod dialog;
pub mod dom;
pub mod focus;
pub mod mounts;
pub mod page;
pub mod projects;

pub use carousel::{CarouselMessage, FilterKey, TestimonialCarousel};
pub use dialog::{DialogMessage, ProjectDialog};
pub use dom::{Document, ElementSpec, MemoryDocument, NodeId};
pub use focus::{Key, KeyOutcome, KeyPress, Modifiers};
pub use mounts::MountIds;
pub use page::Portfolio;
pub use projects::ProjectGrid;
