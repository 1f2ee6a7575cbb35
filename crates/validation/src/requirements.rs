//! Required-field tables per document type.

use lexdraft_core::{normalize_key, Priority};
use serde::Serialize;
use std::collections::HashMap;

/// Document type whose table is used when the requested one is unknown.
pub const FALLBACK_DOCUMENT_TYPE: &str = "petition";

/// Fields a document type needs, split into priority tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequiredFields {
    /// Checked automatically; missing fields are high priority
    pub high: &'static [&'static str],
    /// Checked automatically; missing fields are medium priority
    pub medium: &'static [&'static str],
    /// Listed for callers but never checked automatically
    pub low: &'static [&'static str],
}

impl RequiredFields {
    /// Fields of a tier.
    pub fn tier(&self, priority: Priority) -> &'static [&'static str] {
        match priority {
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }
}

const PETITION: RequiredFields = RequiredFields {
    high: &["title", "case_type", "court", "facts", "relief_sought"],
    medium: &["parties", "sections"],
    low: &["tone", "citations"],
};

const NOTICE: RequiredFields = RequiredFields {
    high: &["title", "facts", "parties"],
    medium: &["relief_sought", "sections"],
    low: &["tone"],
};

const AFFIDAVIT: RequiredFields = RequiredFields {
    high: &["title", "facts", "parties"],
    medium: &["verification_details"],
    low: &[],
};

const BAIL_APPLICATION: RequiredFields = RequiredFields {
    high: &["case_type", "fir_number", "sections", "facts", "accused_details"],
    medium: &["previous_bail_applications", "surety_details"],
    low: &["medical_condition", "family_circumstances"],
};

/// Lookup of required fields by document type.
#[derive(Debug, Clone)]
pub struct RequirementTables {
    tables: HashMap<&'static str, RequiredFields>,
}

impl RequirementTables {
    /// Build the built-in tables.
    pub fn new() -> Self {
        let tables = HashMap::from([
            ("petition", PETITION),
            ("notice", NOTICE),
            ("affidavit", AFFIDAVIT),
            ("bail_application", BAIL_APPLICATION),
        ]);
        Self { tables }
    }

    /// Required fields for a document type.
    ///
    /// Unrecognized types get the petition table. The second element reports
    /// whether this fallback was taken.
    pub fn lookup(&self, document_type: &str) -> (&RequiredFields, bool) {
        match self.tables.get(normalize_key(document_type).as_str()) {
            Some(fields) => (fields, false),
            None => {
                tracing::debug!(
                    "No requirement table for '{}', using '{}'",
                    document_type,
                    FALLBACK_DOCUMENT_TYPE
                );
                (&PETITION, true)
            }
        }
    }

    /// Document types with a dedicated table.
    pub fn document_types(&self) -> Vec<&'static str> {
        let mut types: Vec<_> = self.tables.keys().copied().collect();
        types.sort_unstable();
        types
    }
}

impl Default for RequirementTables {
    fn default() -> Self {
        Self::new()
    }
}
