//! Missing-information detector.

use lexdraft_core::{MissingFieldAnalysis, Priority, ProvidedData};
use tracing::debug;

use crate::context::{RuleContext, CONTEXT_RULES};
use crate::prompts::{self, PromptConfig};
use crate::questions::question_for;
use crate::requirements::RequirementTables;

/// Detects absent case facts and turns them into follow-up questions.
#[derive(Debug, Clone, Default)]
pub struct MissingInfoDetector {
    tables: RequirementTables,
    config: PromptConfig,
}

impl MissingInfoDetector {
    /// Create a detector with the built-in tables and default prompt limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with custom prompt limits.
    pub fn with_config(config: PromptConfig) -> Self {
        Self {
            tables: RequirementTables::new(),
            config,
        }
    }

    /// Fields missing from `data` for a document type.
    ///
    /// High-tier then medium-tier gaps come first, in table order, followed by
    /// contextual findings in rule order. A field may appear twice when a
    /// contextual rule re-raises a tier gap with a sharper question.
    pub fn detect_missing_info(&self, document_type: &str, data: &ProvidedData) -> Vec<MissingFieldAnalysis> {
        let (required, _) = self.tables.lookup(document_type);
        let mut missing = Vec::new();

        for priority in [Priority::High, Priority::Medium] {
            for field in required.tier(priority) {
                if data.has(field) {
                    continue;
                }
                let (question, suggestions) = question_for(field);
                missing.push(MissingFieldAnalysis::new(*field, question, priority).with_suggestions(suggestions));
            }
        }

        let ctx = RuleContext { document_type, data };
        for rule in CONTEXT_RULES {
            let found = rule.apply(&ctx);
            if !found.is_empty() {
                debug!("Context rule '{}' raised {} finding(s)", rule.name, found.len());
            }
            missing.extend(found);
        }

        debug!("Detected {} missing field(s) for '{}'", missing.len(), document_type);
        missing
    }

    /// Conversational follow-up prompts for detected gaps.
    pub fn generate_interactive_prompts(&self, missing: &[MissingFieldAnalysis]) -> Vec<String> {
        prompts::render(missing, &self.config)
    }
}
