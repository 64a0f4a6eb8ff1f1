//! Copy shown when a piece of content is missing.

pub const PROJECT_TITLE: &str = "Project spotlight";
pub const OVERVIEW: &str = "Detailed write-up coming soon.";
pub const ROLE: &str = "Hands-on partner";
pub const HIGHLIGHT: &str = "Highlights coming soon.";
pub const OUTCOMES: &str = "Outcomes to be published soon.";
pub const OUTCOME_LABEL: &str = "Outcome";
pub const OUTCOME_VALUE: &str = "—";
pub const SANDBOX_TITLE: &str = "Interactive demo";
pub const DEMO_LABEL: &str = "Open live demo";
pub const TESTIMONIALS: &str = "Testimonials are on their way.";
pub const PROJECTS: &str = "Project case studies are coming soon.";
pub const BADGE: &str = "?";
