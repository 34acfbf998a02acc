//! `nutriscan-kb` — read-only ingredient knowledge base.
//!
//! Provides:
//! - `KnowledgeBase`: an immutable, name-indexed snapshot the analysis
//!   pipeline reads from
//! - `KbLoader`: the async loading seam, with a compiled-in fallback
//!   dataset and a SQLite-backed implementation

pub mod dataset;
pub mod loader;
pub mod snapshot;
pub mod sqlite;

pub use dataset::static_records;
pub use loader::{KbLoader, StaticKbLoader};
pub use snapshot::KnowledgeBase;
pub use sqlite::SqliteKbLoader;
