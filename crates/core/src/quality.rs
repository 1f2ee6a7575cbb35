//! Quality model - scored reports for drafted documents.

use serde::{Deserialize, Serialize};

/// One of the five independently scored quality dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Structure,
    Tone,
    Completeness,
    LegalReferences,
    Grammar,
}

impl Dimension {
    /// All dimensions, in report order.
    pub const ALL: [Dimension; 5] = [
        Dimension::Structure,
        Dimension::Tone,
        Dimension::Completeness,
        Dimension::LegalReferences,
        Dimension::Grammar,
    ];

    /// Weight of this dimension in the overall score. Weights sum to 1.0.
    pub fn weight(&self) -> f64 {
        match self {
            Dimension::Structure => 0.25,
            Dimension::Tone => 0.20,
            Dimension::Completeness => 0.25,
            Dimension::LegalReferences => 0.20,
            Dimension::Grammar => 0.10,
        }
    }

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Structure => "structure",
            Dimension::Tone => "tone",
            Dimension::Completeness => "completeness",
            Dimension::LegalReferences => "legal_references",
            Dimension::Grammar => "grammar",
        }
    }
}

/// Coarse grade band for an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityGrade {
    Excellent,
    Good,
    Fair,
    NeedsWork,
}

impl QualityGrade {
    /// Band an overall score: >=8 excellent, >=6 good, >=4 fair.
    pub fn from_overall(overall: f64) -> Self {
        if overall >= 8.0 {
            QualityGrade::Excellent
        } else if overall >= 6.0 {
            QualityGrade::Good
        } else if overall >= 4.0 {
            QualityGrade::Fair
        } else {
            QualityGrade::NeedsWork
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            QualityGrade::Excellent => "Excellent",
            QualityGrade::Good => "Good",
            QualityGrade::Fair => "Fair",
            QualityGrade::NeedsWork => "Needs Work",
        }
    }
}

/// Full quality report for a draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityReport {
    /// Weighted combination of the five sub-scores, one decimal place
    pub overall: f64,

    /// Grade band of `overall`
    pub grade: QualityGrade,

    /// Structure score (0-10)
    pub structure: u8,

    /// Tone score (0-10)
    pub tone: u8,

    /// Completeness score (0-10)
    pub completeness: u8,

    /// Legal references score (0-10)
    pub legal_references: u8,

    /// Grammar score (0-10)
    pub grammar: u8,

    /// Diagnostic facts behind each score
    pub breakdown: QualityBreakdown,

    /// Actionable improvements, in dimension order
    pub suggestions: Vec<String>,

    /// Positive signals, in dimension order
    pub strengths: Vec<String>,

    /// Names of absent structural components and sections
    pub missing_elements: Vec<String>,

    /// Version of the rule tables that produced this report
    pub rules_version: String,
}

impl QualityReport {
    /// Score for a single dimension.
    pub fn score(&self, dimension: Dimension) -> u8 {
        match dimension {
            Dimension::Structure => self.structure,
            Dimension::Tone => self.tone,
            Dimension::Completeness => self.completeness,
            Dimension::LegalReferences => self.legal_references,
            Dimension::Grammar => self.grammar,
        }
    }
}

/// Per-dimension diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityBreakdown {
    pub structure: StructureFeedback,
    pub tone: ToneFeedback,
    pub completeness: CompletenessFeedback,
    pub legal_references: LegalReferenceFeedback,
    pub grammar: GrammarFeedback,
}

/// Structure diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructureFeedback {
    pub has_title: bool,
    pub has_parties: bool,
    pub has_prayer: bool,
    pub has_verification: bool,
    pub proper_paragraphing: bool,
    pub paragraph_count: usize,
    pub word_count: usize,
    pub deductions: Vec<String>,
}

/// Tone diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToneFeedback {
    /// Distinct formal vocabulary terms present
    pub formal_terms_count: usize,
    /// Distinct informal vocabulary terms present
    pub informal_terms_count: usize,
    /// formal / (formal + informal), two decimals; 0 when neither occurs
    pub formality_ratio: f64,
    pub has_honorifics: bool,
    pub deductions: Vec<String>,
}

/// Completeness diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompletenessFeedback {
    pub has_facts: bool,
    pub has_legal_grounds: bool,
    pub has_relief: bool,
    pub has_sections: bool,
    pub deductions: Vec<String>,
}

/// Legal reference diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegalReferenceFeedback {
    pub sections_count: usize,
    pub case_citations: usize,
    /// Distinct act names, compared case-insensitively
    pub acts_referenced: usize,
    pub deductions: Vec<String>,
}

/// Grammar diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GrammarFeedback {
    pub sentence_count: usize,
    /// Words per sentence, one decimal
    pub avg_sentence_length: f64,
    /// Flagged only; never penalized
    pub excessive_whitespace: bool,
    /// Every issue noticed, penalized or not
    pub potential_issues: Vec<String>,
    pub deductions: Vec<String>,
}
