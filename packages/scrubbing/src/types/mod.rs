//! Data types shared across the scrubbing pipeline.

pub mod account;
pub mod content;
pub mod scrub;

pub use account::{Account, Contact};
pub use content::{CalloutBox, PageContent, ScrubbedPage};
pub use scrub::ScrubResult;
