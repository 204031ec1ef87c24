pub mod cli;
pub mod error;
pub mod loader;
pub mod model;
pub mod render;
pub mod search;
pub mod tracing;

pub use model::{Attachment, Category, Guide};
pub use search::{FindOutcome, IndexedGuide, SearchIndex};
