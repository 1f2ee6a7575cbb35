//! LexDraft citation suggestions.
//!
//! Keyword search over a static catalogue of landmark judgments.

#![warn(missing_docs)]

pub mod catalog;
pub mod service;

pub use catalog::{CatalogEntry, LANDMARK_CASES};
pub use service::{CitationConfig, CitationService, LEGAL_TERMS};
