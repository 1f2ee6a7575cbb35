//! Draft quality scoring.
//!
//! A deterministic, rule-based engine that scores a legal draft on
//! structure, tone, completeness, legal-reference density and grammar,
//! then turns the diagnostics into suggestions and strengths.

#![warn(missing_docs)]

pub mod advice;
pub mod engine;
pub mod error;
pub mod rules;
pub mod text;

pub use engine::{
    overall_score, CompletenessScorer, DimensionScorer, DraftContext, GrammarScorer,
    LegalReferenceScorer, QualityScorer, Scorecard, StructureScorer, ToneScorer,
};
pub use error::{Result, RuleError};
pub use rules::{NamedPattern, RuleTables};
