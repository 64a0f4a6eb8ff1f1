//! Content records shared across folio crates.
//!
//! The records mirror the site content JSON. Decoding is deliberately forgiving:
//! malformed sections degrade to empty values instead of failing the whole load,
//! so a half-written content file still renders something.

pub mod content;
pub mod error;
pub mod lenient;
pub mod placeholders;
pub mod spotlight;
pub mod text;

// Intentionally curated re-exports for downstream consumers.
pub use content::{
    DemoLink, Outcome, Project, Sandbox, SiteContent, Spotlight, Testimonial, WalkthroughStep,
    load_content,
};
pub use error::{ContentError, Result as ContentResult};
pub use spotlight::{OutcomeCard, SpotlightItem};
pub use text::{html_to_text, non_blank};
