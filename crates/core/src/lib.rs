//! LexDraft core data models.
//!
//! This crate defines the data structures shared by the drafting assistant's
//! analysis services: document and case classification, quality reports,
//! missing-information findings and citations.

#![warn(missing_docs)]

// Classification
mod document;

// Analysis outputs
mod quality;
mod validation;
mod citation;

// Re-exports
pub use document::{DocumentType, CaseType, ParseError, normalize_key};
pub use quality::{
    QualityReport, QualityGrade, QualityBreakdown, Dimension,
    StructureFeedback, ToneFeedback, CompletenessFeedback,
    LegalReferenceFeedback, GrammarFeedback,
};
pub use validation::{Priority, MissingFieldAnalysis, ProvidedData, is_filled};
pub use citation::Citation;
