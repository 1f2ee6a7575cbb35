//! Citation model.

use serde::{Deserialize, Serialize};

/// A reported judgment suggested as authority for a draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    /// Case title, e.g. "Maneka Gandhi v. Union of India"
    pub title: String,

    /// Reporter reference, e.g. "AIR 1978 SC 597"
    pub citation: String,

    /// Deciding court
    pub court: String,

    /// Year of decision
    pub year: u16,

    /// Relevance to the query (0.0 to 1.0)
    pub relevance_score: f32,

    /// Short headnote
    pub summary: Option<String>,
}
