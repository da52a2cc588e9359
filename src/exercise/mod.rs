pub mod analyzers;
pub mod catalog;
pub mod hysteresis;
pub mod phase;

pub use analyzers::{analyze, analyzer_for, Analyzer};
pub use catalog::{catalog, CatalogEntry, CatalogSection, ExerciseCategory, ExerciseKind};
pub use phase::{AnalysisResult, Cue, ExercisePhase};
