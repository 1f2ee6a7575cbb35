//! Citation search and suggestion.

use lexdraft_core::{CaseType, Citation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::{CatalogEntry, LANDMARK_CASES};

/// Legal terms looked for in a draft when suggesting citations.
pub const LEGAL_TERMS: &[&str] = &[
    "fundamental rights",
    "constitution",
    "contract",
    "tort",
    "criminal",
    "civil",
    "property",
    "evidence",
    "procedure",
];

/// At most this many draft terms make up a suggestion query.
const MAX_QUERY_TERMS: usize = 3;

const TITLE_WEIGHT: f32 = 0.5;
const KEYWORD_WEIGHT: f32 = 0.3;
const SUMMARY_WEIGHT: f32 = 0.2;

/// Citation service configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationConfig {
    /// Results returned by draft suggestions
    pub default_limit: usize,
}

impl Default for CitationConfig {
    fn default() -> Self {
        Self { default_limit: 5 }
    }
}

/// Keyword search over a citation catalogue.
#[derive(Debug, Clone)]
pub struct CitationService {
    catalog: Vec<CatalogEntry>,
    config: CitationConfig,
}

impl CitationService {
    /// Create a service over the landmark catalogue.
    pub fn new() -> Self {
        Self::with_config(CitationConfig::default())
    }

    /// Create a service with custom configuration.
    pub fn with_config(config: CitationConfig) -> Self {
        Self {
            catalog: LANDMARK_CASES.to_vec(),
            config,
        }
    }

    /// Replace the catalogue.
    pub fn with_catalog(mut self, catalog: Vec<CatalogEntry>) -> Self {
        self.catalog = catalog;
        self
    }

    /// Citations relevant to `query`, best first.
    ///
    /// Entries with zero relevance are dropped; ties keep catalogue order.
    /// The catalogue carries no case-type facet, so `case_type` does not
    /// affect ranking.
    pub fn search_citations(&self, query: &str, case_type: Option<CaseType>, limit: usize) -> Vec<Citation> {
        let query_lower = query.to_lowercase();

        let mut scored: Vec<_> = self
            .catalog
            .iter()
            .map(|entry| (entry, relevance(entry, &query_lower)))
            .filter(|(_, score)| *score > 0.0)
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        debug!(
            "Citation search '{}' (case type {:?}): {} match(es)",
            query,
            case_type,
            scored.len()
        );

        scored
            .into_iter()
            .take(limit)
            .map(|(entry, score)| entry.to_citation(score))
            .collect()
    }

    /// Catalogued citation with exactly this reporter reference.
    pub fn get_citation_by_reference(&self, reference: &str) -> Option<Citation> {
        self.catalog
            .iter()
            .find(|entry| entry.citation == reference)
            .map(|entry| entry.to_citation(1.0))
    }

    /// Citations suggested by the legal terms a draft mentions.
    ///
    /// Falls back to the case type name when the draft mentions none.
    pub fn suggest_citations_for_draft(&self, content: &str, case_type: CaseType) -> Vec<Citation> {
        let query = draft_query(content, case_type);
        debug!("Suggesting citations for draft with query '{}'", query);
        self.search_citations(&query, Some(case_type), self.config.default_limit)
    }
}

impl Default for CitationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Relevance of a catalogue entry to a lowercased query, capped at 1.0.
fn relevance(entry: &CatalogEntry, query_lower: &str) -> f32 {
    let mut score = 0.0;

    if entry.title.to_lowercase().contains(query_lower) {
        score += TITLE_WEIGHT;
    }

    for keyword in entry.keywords {
        if query_lower.contains(keyword) || keyword.contains(query_lower) {
            score += KEYWORD_WEIGHT;
        }
    }

    if entry.summary.to_lowercase().contains(query_lower) {
        score += SUMMARY_WEIGHT;
    }

    score.min(1.0)
}

fn draft_query(content: &str, case_type: CaseType) -> String {
    let lowered = content.to_lowercase();
    let terms: Vec<_> = LEGAL_TERMS
        .iter()
        .copied()
        .filter(|term| lowered.contains(term))
        .take(MAX_QUERY_TERMS)
        .collect();

    if terms.is_empty() {
        case_type.as_str().to_string()
    } else {
        terms.join(" ")
    }
}
