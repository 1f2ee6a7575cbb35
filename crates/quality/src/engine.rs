//! Quality scoring engine.
//!
//! Each dimension is scored independently by a [`DimensionScorer`]: start at
//! 10, subtract a fixed penalty for every violated rule, floor at 0. The
//! [`QualityScorer`] runs all five and aggregates them into a
//! [`QualityReport`].

use lexdraft_core::{
    CaseType, CompletenessFeedback, Dimension, DocumentType, GrammarFeedback,
    LegalReferenceFeedback, QualityBreakdown, QualityGrade, QualityReport,
    StructureFeedback, ToneFeedback,
};
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::advice;
use crate::error::Result;
use crate::rules::RuleTables;
use crate::text;

/// Highest score any dimension can reach.
pub const MAX_SCORE: u8 = 10;

/// Minimum word count expected of a petition.
pub const PETITION_MIN_WORDS: usize = 500;

/// Minimum number of paragraphs for proper paragraphing.
pub const MIN_PARAGRAPHS: usize = 3;

/// Average sentence length (in words) above which grammar is penalized.
pub const MAX_AVG_SENTENCE_WORDS: f64 = 40.0;

/// The draft being scored, with derived views computed once.
#[derive(Debug, Clone)]
pub struct DraftContext<'a> {
    /// Raw text
    pub content: &'a str,

    /// Lowercased text
    pub lowered: String,

    /// Kind of filing
    pub document_type: DocumentType,

    /// Area of law
    pub case_type: CaseType,
}

impl<'a> DraftContext<'a> {
    /// Create a new draft context.
    pub fn new(content: &'a str, document_type: DocumentType, case_type: CaseType) -> Self {
        Self {
            content,
            lowered: content.to_lowercase(),
            document_type,
            case_type,
        }
    }
}

/// Additive-penalty tally for one dimension.
#[derive(Debug, Clone)]
pub struct Scorecard {
    score: i32,
    deductions: Vec<String>,
}

impl Scorecard {
    /// Start from a perfect score.
    pub fn new() -> Self {
        Self {
            score: i32::from(MAX_SCORE),
            deductions: Vec::new(),
        }
    }

    /// Subtract `points` and record why.
    pub fn deduct(&mut self, points: u8, reason: impl Into<String>) {
        self.score -= i32::from(points);
        self.deductions.push(reason.into());
    }

    /// Final score, floored at zero, and the recorded reasons.
    pub fn finish(self) -> (u8, Vec<String>) {
        let score = self.score.clamp(0, i32::from(MAX_SCORE));
        (u8::try_from(score).unwrap_or_default(), self.deductions)
    }
}

impl Default for Scorecard {
    fn default() -> Self {
        Self::new()
    }
}

/// Scores a single quality dimension.
pub trait DimensionScorer: Send + Sync {
    /// Diagnostics produced alongside the score.
    type Feedback;

    /// Which dimension this scorer covers.
    const DIMENSION: Dimension;

    /// Score the draft, returning the 0-10 score and its diagnostics.
    fn score(&self, draft: &DraftContext<'_>) -> (u8, Self::Feedback);
}

/// Court heading, cause title, prayer and verification.
pub struct StructureScorer {
    rules: Arc<RuleTables>,
}

impl StructureScorer {
    /// Create a scorer over shared rule tables.
    pub fn new(rules: Arc<RuleTables>) -> Self {
        Self { rules }
    }
}

impl DimensionScorer for StructureScorer {
    type Feedback = StructureFeedback;
    const DIMENSION: Dimension = Dimension::Structure;

    fn score(&self, draft: &DraftContext<'_>) -> (u8, StructureFeedback) {
        let mut card = Scorecard::new();
        let mut feedback = StructureFeedback::default();

        for component in self.rules.components() {
            let present = component.is_match(draft.content);
            match component.name {
                "title" => feedback.has_title = present,
                "parties" => feedback.has_parties = present,
                "prayer" => feedback.has_prayer = present,
                "verification" => feedback.has_verification = present,
                _ => {}
            }
            if !present {
                card.deduct(2, format!("Missing {}", component.name));
            }
        }

        feedback.paragraph_count = text::paragraphs(draft.content).count();
        if feedback.paragraph_count >= MIN_PARAGRAPHS {
            feedback.proper_paragraphing = true;
        } else {
            card.deduct(1, "Insufficient paragraph structure");
        }

        feedback.word_count = text::word_count(draft.content);
        if draft.document_type == DocumentType::Petition && feedback.word_count < PETITION_MIN_WORDS {
            card.deduct(1, "Document may be too brief for a petition");
        }

        let (score, deductions) = card.finish();
        feedback.deductions = deductions;
        (score, feedback)
    }
}

/// Formal register and court honorifics.
pub struct ToneScorer {
    rules: Arc<RuleTables>,
}

impl ToneScorer {
    /// Create a scorer over shared rule tables.
    pub fn new(rules: Arc<RuleTables>) -> Self {
        Self { rules }
    }
}

impl DimensionScorer for ToneScorer {
    type Feedback = ToneFeedback;
    const DIMENSION: Dimension = Dimension::Tone;

    fn score(&self, draft: &DraftContext<'_>) -> (u8, ToneFeedback) {
        let mut card = Scorecard::new();

        let formal = text::distinct_terms_present(&draft.lowered, self.rules.formal_terms());
        let informal = text::distinct_terms_present(&draft.lowered, self.rules.informal_terms());
        let total = formal + informal;
        let formality_ratio = if total > 0 {
            text::round_to(formal as f64 / total as f64, 2)
        } else {
            0.0
        };

        if formal < 3 {
            card.deduct(2, "Insufficient formal legal terminology");
        }
        if informal > 2 {
            card.deduct(2, format!("Contains {} informal terms", informal));
        }

        let has_honorifics = self.rules.honorific().is_match(&draft.lowered);
        if !has_honorifics {
            card.deduct(1, "Missing court honorifics");
        }

        let (score, deductions) = card.finish();
        (
            score,
            ToneFeedback {
                formal_terms_count: formal,
                informal_terms_count: informal,
                formality_ratio,
                has_honorifics,
                deductions,
            },
        )
    }
}

/// Facts, grounds, relief and statutory basis.
pub struct CompletenessScorer {
    rules: Arc<RuleTables>,
}

impl CompletenessScorer {
    /// Create a scorer over shared rule tables.
    pub fn new(rules: Arc<RuleTables>) -> Self {
        Self { rules }
    }
}

impl DimensionScorer for CompletenessScorer {
    type Feedback = CompletenessFeedback;
    const DIMENSION: Dimension = Dimension::Completeness;

    fn score(&self, draft: &DraftContext<'_>) -> (u8, CompletenessFeedback) {
        let mut card = Scorecard::new();
        let mut feedback = CompletenessFeedback::default();

        for section in self.rules.sections() {
            let present = section.is_match(draft.content);
            let (flag, penalty, reason) = match section.name {
                "facts" => (&mut feedback.has_facts, 3, "Missing facts section"),
                "legal_grounds" => (&mut feedback.has_legal_grounds, 2, "Missing legal grounds/arguments"),
                "relief" => (&mut feedback.has_relief, 3, "Missing relief/prayer section"),
                "sections" => (&mut feedback.has_sections, 2, "No legal sections cited"),
                _ => continue,
            };
            *flag = present;
            if !present {
                card.deduct(penalty, reason);
            }
        }

        let (score, deductions) = card.finish();
        feedback.deductions = deductions;
        (score, feedback)
    }
}

/// Density of statutory sections, precedents and acts.
pub struct LegalReferenceScorer {
    rules: Arc<RuleTables>,
}

impl LegalReferenceScorer {
    /// Create a scorer over shared rule tables.
    pub fn new(rules: Arc<RuleTables>) -> Self {
        Self { rules }
    }
}

impl DimensionScorer for LegalReferenceScorer {
    type Feedback = LegalReferenceFeedback;
    const DIMENSION: Dimension = Dimension::LegalReferences;

    fn score(&self, draft: &DraftContext<'_>) -> (u8, LegalReferenceFeedback) {
        let mut card = Scorecard::new();

        let sections_count = self.rules.section_citation().count(draft.content);
        let case_citations = self.rules.case_citation().count(draft.content);
        let acts_referenced = self
            .rules
            .act_name()
            .matches(draft.content)
            .collect::<BTreeSet<_>>()
            .len();

        if sections_count == 0 {
            card.deduct(4, "No legal sections cited");
        } else if sections_count < 2 {
            card.deduct(2, "Very few legal sections cited");
        }
        if case_citations == 0 {
            card.deduct(3, "No precedent case citations");
        }
        if acts_referenced == 0 {
            card.deduct(3, "No acts/statutes referenced");
        }

        let (score, deductions) = card.finish();
        (
            score,
            LegalReferenceFeedback {
                sections_count,
                case_citations,
                acts_referenced,
                deductions,
            },
        )
    }
}

/// Sentence length, spacing and capitalization.
pub struct GrammarScorer {
    rules: Arc<RuleTables>,
}

impl GrammarScorer {
    /// Create a scorer over shared rule tables.
    pub fn new(rules: Arc<RuleTables>) -> Self {
        Self { rules }
    }
}

impl DimensionScorer for GrammarScorer {
    type Feedback = GrammarFeedback;
    const DIMENSION: Dimension = Dimension::Grammar;

    fn score(&self, draft: &DraftContext<'_>) -> (u8, GrammarFeedback) {
        let mut card = Scorecard::new();
        let mut feedback = GrammarFeedback::default();

        let lengths: Vec<usize> = text::sentences(draft.content, self.rules.sentence_boundary())
            .map(text::word_count)
            .collect();
        feedback.sentence_count = lengths.len();

        if !lengths.is_empty() {
            let avg = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;
            feedback.avg_sentence_length = text::round_to(avg, 1);
            if avg > MAX_AVG_SENTENCE_WORDS {
                let issue = "Very long average sentence length";
                feedback.potential_issues.push(issue.to_string());
                card.deduct(1, issue);
            }
        }

        if self.rules.excessive_whitespace().is_match(draft.content) {
            feedback.excessive_whitespace = true;
            feedback.potential_issues.push("Excessive whitespace detected".to_string());
        }

        if self.rules.missing_space_after_period().is_match(draft.content) {
            let issue = "Missing space after period";
            feedback.potential_issues.push(issue.to_string());
            card.deduct(1, issue);
        }

        if !self.rules.leading_capital().is_match(draft.content.trim()) {
            let issue = "Document should start with capital letter";
            feedback.potential_issues.push(issue.to_string());
            card.deduct(1, issue);
        }

        let (score, deductions) = card.finish();
        feedback.deductions = deductions;
        (score, feedback)
    }
}

/// Weighted overall score, rounded to one decimal.
pub fn overall_score(structure: u8, tone: u8, completeness: u8, legal_references: u8, grammar: u8) -> f64 {
    let weighted = [
        (Dimension::Structure, structure),
        (Dimension::Tone, tone),
        (Dimension::Completeness, completeness),
        (Dimension::LegalReferences, legal_references),
        (Dimension::Grammar, grammar),
    ]
    .iter()
    .map(|(dimension, score)| f64::from(*score) * dimension.weight())
    .sum::<f64>();

    text::round_to(weighted, 1)
}

/// Scores legal drafts on all five dimensions.
///
/// Holds only immutable rule tables, so one instance can be shared across
/// threads and requests.
#[derive(Clone)]
pub struct QualityScorer {
    rules: Arc<RuleTables>,
}

impl QualityScorer {
    /// Create a scorer with the built-in rule tables.
    pub fn new() -> Result<Self> {
        Ok(Self::with_rules(Arc::new(RuleTables::new()?)))
    }

    /// Create a scorer over existing rule tables.
    pub fn with_rules(rules: Arc<RuleTables>) -> Self {
        Self { rules }
    }

    /// Score a draft and build the full report.
    pub fn score_document(
        &self,
        content: &str,
        document_type: DocumentType,
        case_type: CaseType,
    ) -> QualityReport {
        let draft = DraftContext::new(content, document_type, case_type);
        tracing::debug!(
            "Scoring {} draft ({} case, {} bytes)",
            document_type,
            case_type,
            content.len()
        );

        let (structure, structure_feedback) = self.run(&StructureScorer::new(self.rules.clone()), &draft);
        let (tone, tone_feedback) = self.run(&ToneScorer::new(self.rules.clone()), &draft);
        let (completeness, completeness_feedback) =
            self.run(&CompletenessScorer::new(self.rules.clone()), &draft);
        let (legal_references, legal_feedback) =
            self.run(&LegalReferenceScorer::new(self.rules.clone()), &draft);
        let (grammar, grammar_feedback) = self.run(&GrammarScorer::new(self.rules.clone()), &draft);

        let overall = overall_score(structure, tone, completeness, legal_references, grammar);

        let mut report = QualityReport {
            overall,
            grade: QualityGrade::from_overall(overall),
            structure,
            tone,
            completeness,
            legal_references,
            grammar,
            breakdown: QualityBreakdown {
                structure: structure_feedback,
                tone: tone_feedback,
                completeness: completeness_feedback,
                legal_references: legal_feedback,
                grammar: grammar_feedback,
            },
            suggestions: Vec::new(),
            strengths: Vec::new(),
            missing_elements: Vec::new(),
            rules_version: RuleTables::VERSION.to_string(),
        };

        report.suggestions = advice::suggestions(&report);
        report.strengths = advice::strengths(&report);
        report.missing_elements = advice::missing_elements(&report.breakdown);

        tracing::debug!("Overall score {} ({})", report.overall, report.grade.label());
        report
    }

    fn run<S: DimensionScorer>(&self, scorer: &S, draft: &DraftContext<'_>) -> (u8, S::Feedback) {
        let (score, feedback) = scorer.score(draft);
        tracing::debug!("{} scored {}/{}", S::DIMENSION.as_str(), score, MAX_SCORE);
        (score, feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> QualityScorer {
        QualityScorer::new().unwrap()
    }

    fn rules() -> Arc<RuleTables> {
        Arc::new(RuleTables::new().unwrap())
    }

    fn sample_petition() -> String {
        let mut doc = String::from(
            "IN THE HON'BLE HIGH COURT OF DELHI AT NEW DELHI\n\n\
             Ramesh Kumar ... PETITIONER\nVERSUS\nState of NCT of Delhi ... RESPONDENT\n\n\
             BRIEF FACTS\n\n\
             The petitioner respectfully submits that the aforesaid FIR was registered \
             under Section 420 of the IPC and Section 406 of the Indian Penal Code. \
             The learned trial court erred in law.\n\n\
             GROUNDS\n\n\
             The petitioner humbly relies on Arnesh Kumar v. State of Bihar (2014) SCC 273 \
             and Section 41A of the CrPC. The Code of Criminal Procedure mandates notice. \
             Whereas the respondent has not complied, the petitioner is hereby entitled to relief.\n\n",
        );
        for i in 0..60 {
            doc.push_str(&format!(
                "{}. The petitioner has cooperated with the investigation at every stage.\n\n",
                i + 1
            ));
        }
        doc.push_str(
            "PRAYER\n\nIt is therefore humbly prayed that this Hon'ble Court may quash the FIR.\n\n\
             VERIFICATION\n\nVerified at Delhi that the contents above are true.",
        );
        doc
    }

    #[test]
    fn test_scorecard_floors_at_zero() {
        let mut card = Scorecard::new();
        card.deduct(4, "a");
        card.deduct(4, "b");
        card.deduct(4, "c");
        let (score, deductions) = card.finish();
        assert_eq!(score, 0);
        assert_eq!(deductions, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_hello_floors_heavily_deducted_scores() {
        let report = scorer().score_document("Hello", DocumentType::Petition, CaseType::Civil);
        assert!(report.structure <= 3);
        assert!(report.completeness <= 3);
        assert_eq!(report.legal_references, 0);
        assert_eq!(report.structure, 0);
        assert_eq!(report.breakdown.structure.deductions.len(), 6);
    }

    #[test]
    fn test_empty_input_is_a_low_report_not_an_error() {
        let report = scorer().score_document("", DocumentType::Notice, CaseType::Family);
        assert_eq!(report.structure, 1);
        assert_eq!(report.completeness, 0);
        assert_eq!(report.legal_references, 0);
        assert_eq!(report.tone, 7);
        assert_eq!(report.grammar, 9);
        assert_eq!(report.breakdown.grammar.sentence_count, 0);
        assert_eq!(report.breakdown.grammar.avg_sentence_length, 0.0);
        assert_eq!(report.overall, overall_score(1, 7, 0, 0, 9));
    }

    #[test]
    fn test_overall_matches_weighted_formula() {
        let s = scorer();
        let petition = sample_petition();
        for content in ["", "Hello", "in the high court.No", petition.as_str()] {
            let r = s.score_document(content, DocumentType::Petition, CaseType::Criminal);
            let weighted = 0.25 * f64::from(r.structure)
                + 0.20 * f64::from(r.tone)
                + 0.25 * f64::from(r.completeness)
                + 0.20 * f64::from(r.legal_references)
                + 0.10 * f64::from(r.grammar);
            assert!((r.overall - weighted).abs() <= 0.05 + 1e-9);
            for dimension in Dimension::ALL {
                assert!(r.score(dimension) <= MAX_SCORE);
            }
        }
    }

    #[test]
    fn test_overall_rounds_ties_to_even() {
        // 0.25 -> 0.2, 0.35 -> 0.3, 1.25 -> 1.2
        assert_eq!(overall_score(1, 0, 0, 0, 0), 0.2);
        assert_eq!(overall_score(0, 0, 1, 0, 1), 0.3);
        assert_eq!(overall_score(0, 0, 1, 0, 10), 1.2);
        assert_eq!(overall_score(1, 7, 0, 0, 9), 2.6);
        assert_eq!(overall_score(10, 10, 10, 10, 10), 10.0);
        assert_eq!(overall_score(0, 0, 0, 0, 0), 0.0);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let s = scorer();
        let doc = sample_petition();
        let first = s.score_document(&doc, DocumentType::Petition, CaseType::Criminal);
        let second = s.score_document(&doc, DocumentType::Petition, CaseType::Criminal);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_adding_core_sections_increases_scores() {
        let s = scorer();
        let baseline = s.score_document("", DocumentType::Petition, CaseType::Criminal);
        let improved = s.score_document(
            "FACTS\n\nThe accused was arrested.\n\n\
             PRAYER\n\nIt is prayed that bail be granted under Section 439 of the CrPC read with Section 302 of the IPC.\n\n\
             VERIFICATION\n\nVerified at Delhi.",
            DocumentType::Petition,
            CaseType::Criminal,
        );
        assert!(improved.structure > baseline.structure);
        assert!(improved.completeness > baseline.completeness);
        assert!(improved.legal_references > baseline.legal_references);
    }

    #[test]
    fn test_well_formed_petition_scores_high() {
        let report = scorer().score_document(&sample_petition(), DocumentType::Petition, CaseType::Criminal);
        assert_eq!(report.structure, 10, "{:?}", report.breakdown.structure);
        assert_eq!(report.completeness, 10, "{:?}", report.breakdown.completeness);
        assert_eq!(report.tone, 10, "{:?}", report.breakdown.tone);
        assert!(report.legal_references >= 8, "{:?}", report.breakdown.legal_references);
        assert_eq!(report.grade, QualityGrade::Excellent);
        assert!(report.missing_elements.is_empty());
    }

    #[test]
    fn test_structure_non_petition_skips_length_rule() {
        let scorer = StructureScorer::new(rules());
        let content = "IN THE DISTRICT COURT\n\nPlaintiff A versus Defendant B\n\nPRAYER and VERIFICATION";
        let (petition, _) = scorer.score(&DraftContext::new(content, DocumentType::Petition, CaseType::Civil));
        let (notice, feedback) = scorer.score(&DraftContext::new(content, DocumentType::Notice, CaseType::Civil));
        assert_eq!(petition, 9);
        assert_eq!(notice, 10);
        assert!(feedback.has_parties && feedback.proper_paragraphing);
        assert_eq!(feedback.paragraph_count, 3);
    }

    #[test]
    fn test_tone_counts_and_ratio() {
        let scorer = ToneScorer::new(rules());
        let draft = DraftContext::new(
            "I really think we need this, maybe. The petitioner respectfully submits.",
            DocumentType::Petition,
            CaseType::Civil,
        );
        let (score, feedback) = scorer.score(&draft);
        assert_eq!(feedback.formal_terms_count, 2);
        assert_eq!(feedback.informal_terms_count, 4);
        assert_eq!(feedback.formality_ratio, 0.33);
        assert!(!feedback.has_honorifics);
        assert_eq!(score, 5);
        assert!(feedback.deductions.contains(&"Contains 4 informal terms".to_string()));
    }

    #[test]
    fn test_legal_reference_penalty_tiers() {
        let scorer = LegalReferenceScorer::new(rules());
        let one_section = DraftContext::new("Under Section 302 IPC", DocumentType::Petition, CaseType::Criminal);
        let (score, feedback) = scorer.score(&one_section);
        assert_eq!(feedback.sections_count, 1);
        assert_eq!(feedback.acts_referenced, 1);
        assert_eq!(score, 5);

        let repeated_acts = DraftContext::new(
            "IPC and IPC, Section 1, Section 2, (2010) AIR",
            DocumentType::Petition,
            CaseType::Criminal,
        );
        let (score, feedback) = scorer.score(&repeated_acts);
        assert_eq!(feedback.acts_referenced, 1);
        assert_eq!(feedback.case_citations, 1);
        assert_eq!(score, 10);

        // distinct spellings are distinct acts
        let mixed_case = DraftContext::new(
            "IPC and ipc, Section 1, Section 2, (2010) AIR",
            DocumentType::Petition,
            CaseType::Criminal,
        );
        let (score, feedback) = scorer.score(&mixed_case);
        assert_eq!(feedback.acts_referenced, 2);
        assert_eq!(feedback.case_citations, 1);
        assert_eq!(score, 10);
    }

    #[test]
    fn test_grammar_flags_whitespace_without_penalty() {
        let scorer = GrammarScorer::new(rules());
        let (score, feedback) = scorer.score(&DraftContext::new(
            "The facts are stated.   The grounds follow.",
            DocumentType::Petition,
            CaseType::Civil,
        ));
        assert_eq!(score, 10);
        assert!(feedback.excessive_whitespace);
        assert_eq!(feedback.sentence_count, 2);
        assert_eq!(feedback.avg_sentence_length, 3.5);
        assert!(feedback.deductions.is_empty());
        assert_eq!(feedback.potential_issues, vec!["Excessive whitespace detected"]);
    }

    #[test]
    fn test_grammar_penalties() {
        let scorer = GrammarScorer::new(rules());
        let long_sentence = vec!["word"; 45].join(" ");
        let (score, feedback) = scorer.score(&DraftContext::new(
            &format!("lowercase start.Then {}", long_sentence),
            DocumentType::Petition,
            CaseType::Civil,
        ));
        assert_eq!(score, 8);
        assert_eq!(feedback.deductions, vec![
            "Missing space after period",
            "Document should start with capital letter",
        ]);

        let (score, _) = scorer.score(&DraftContext::new(&long_sentence, DocumentType::Petition, CaseType::Civil));
        assert_eq!(score, 8);
    }
}
