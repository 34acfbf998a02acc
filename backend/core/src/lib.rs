pub mod error;
pub mod outcome;
pub mod summary;
pub mod types;

pub use error::ScanError;
pub use outcome::ClassificationOutcome;
pub use summary::{AnalysisSummary, Verdict};
pub use types::{Candidate, Category, IngredientRecord};
