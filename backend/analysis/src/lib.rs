//! `nutriscan-analysis` — the ingredient analysis pipeline.
//!
//! Turns raw OCR text from a photographed food label into an
//! `AnalysisSummary`: segmenter → tokenizer → matcher (with a lexical
//! heuristic fallback) → aggregator. The pipeline is pure and
//! synchronous; it reads an immutable `KnowledgeBase` snapshot and
//! never errors — unresolvable input degrades to unknown ingredients,
//! never to a failure.

pub mod aggregate;
pub mod heuristics;
pub mod matcher;
pub mod pipeline;
pub mod product;
pub mod segment;
pub mod token;

pub use aggregate::summarize;
pub use pipeline::analyze;
pub use product::{DEFAULT_PRODUCT_NAME, extract_product_name};
pub use segment::segment;
pub use token::{tokenize, tokenize_fallback};
