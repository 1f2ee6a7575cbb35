//! Document and case classification.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors raised when parsing classification values from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Unknown document type
    #[error("unknown document type: {0}")]
    DocumentType(String),

    /// Unknown case type
    #[error("unknown case type: {0}")]
    CaseType(String),

    /// Unknown priority
    #[error("unknown priority: {0}")]
    Priority(String),
}

/// Kind of court filing being drafted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Petition,
    Notice,
    Affidavit,
    BailApplication,
    Contract,
    Agreement,
    Reply,
    Application,
    Appeal,
}

impl DocumentType {
    /// All known document types.
    pub const ALL: [DocumentType; 9] = [
        DocumentType::Petition,
        DocumentType::Notice,
        DocumentType::Affidavit,
        DocumentType::BailApplication,
        DocumentType::Contract,
        DocumentType::Agreement,
        DocumentType::Reply,
        DocumentType::Application,
        DocumentType::Appeal,
    ];

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Petition => "petition",
            DocumentType::Notice => "notice",
            DocumentType::Affidavit => "affidavit",
            DocumentType::BailApplication => "bail_application",
            DocumentType::Contract => "contract",
            DocumentType::Agreement => "agreement",
            DocumentType::Reply => "reply",
            DocumentType::Application => "application",
            DocumentType::Appeal => "appeal",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == key)
            .ok_or_else(|| ParseError::DocumentType(s.to_string()))
    }
}

/// Area of law a matter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseType {
    Civil,
    Criminal,
    Corporate,
    Family,
    Tax,
    Property,
    Labour,
    Constitutional,
}

impl CaseType {
    /// All known case types.
    pub const ALL: [CaseType; 8] = [
        CaseType::Civil,
        CaseType::Criminal,
        CaseType::Corporate,
        CaseType::Family,
        CaseType::Tax,
        CaseType::Property,
        CaseType::Labour,
        CaseType::Constitutional,
    ];

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseType::Civil => "civil",
            CaseType::Criminal => "criminal",
            CaseType::Corporate => "corporate",
            CaseType::Family => "family",
            CaseType::Tax => "tax",
            CaseType::Property => "property",
            CaseType::Labour => "labour",
            CaseType::Constitutional => "constitutional",
        }
    }
}

impl fmt::Display for CaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_key(s);
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == key)
            .ok_or_else(|| ParseError::CaseType(s.to_string()))
    }
}

/// Lowercase and fold spaces/hyphens into underscores ("Bail Application" -> "bail_application").
pub fn normalize_key(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}
