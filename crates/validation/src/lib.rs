//! LexDraft missing-information detection.
//!
//! Given a document type and the case facts supplied so far, the detector
//! lists required fields that are absent, applies contextual rules over the
//! facts, and renders prioritized follow-up prompts.

#![warn(missing_docs)]

pub mod context;
pub mod detector;
pub mod prompts;
pub mod questions;
pub mod requirements;

pub use context::{ContextRule, RuleContext, CONTEXT_RULES};
pub use detector::MissingInfoDetector;
pub use prompts::PromptConfig;
pub use requirements::{RequiredFields, RequirementTables};
