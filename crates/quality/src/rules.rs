//! Static rule tables.
//!
//! Every pattern the scorer relies on is registered here by name, compiled
//! once, and shared read-only for the lifetime of the process.

use regex::Regex;
use std::collections::HashSet;

use crate::error::{Result, RuleError};

/// Formal legal terms (good indicators).
pub const FORMAL_TERMS: &[&str] = &[
    "respectfully", "humbly", "hon'ble", "honourable", "learned",
    "aforementioned", "aforesaid", "hereinafter", "pursuant",
    "petitioner", "respondent", "applicant", "covenant",
    "whereas", "hereby", "thereof", "wherein", "therein",
];

/// Informal terms that weaken a filing.
pub const INFORMAL_TERMS: &[&str] = &[
    "please", "kindly", "want", "need", "think", "feel",
    "maybe", "perhaps", "basically", "actually", "really",
];

/// A compiled, named pattern.
#[derive(Debug, Clone)]
pub struct NamedPattern {
    /// Rule name
    pub name: &'static str,
    regex: Regex,
}

impl NamedPattern {
    fn compile(name: &'static str, pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| RuleError::InvalidPattern { name, source })?;
        Ok(Self { name, regex })
    }

    /// Whether the pattern occurs anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        let matched = self.regex.is_match(text);
        tracing::trace!("rule {} matched: {}", self.name, matched);
        matched
    }

    /// Number of non-overlapping matches.
    pub fn count(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }

    /// Matched substrings, in order.
    pub fn matches<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.regex.find_iter(text).map(|m| m.as_str())
    }

    /// Split `text` on matches of this pattern.
    pub fn split<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.regex.split(text)
    }
}

/// Immutable vocabulary and pattern tables used by the quality scorer.
#[derive(Debug, Clone)]
pub struct RuleTables {
    formal_terms: &'static [&'static str],
    informal_terms: &'static [&'static str],
    components: Vec<NamedPattern>,
    sections: Vec<NamedPattern>,
    honorific: NamedPattern,
    section_citation: NamedPattern,
    case_citation: NamedPattern,
    act_name: NamedPattern,
    sentence_boundary: NamedPattern,
    excessive_whitespace: NamedPattern,
    missing_space_after_period: NamedPattern,
    leading_capital: NamedPattern,
}

impl RuleTables {
    /// Version tag stamped on every report.
    pub const VERSION: &'static str = "2024.1";

    /// Compile the built-in tables.
    pub fn new() -> Result<Self> {
        let tables = Self {
            formal_terms: FORMAL_TERMS,
            informal_terms: INFORMAL_TERMS,
            components: vec![
                NamedPattern::compile(
                    "title",
                    r"(?is)IN THE (?:HON'BLE )?(?:SUPREME COURT|HIGH COURT|DISTRICT COURT)",
                )?,
                NamedPattern::compile(
                    "parties",
                    r"(?is)(?:PETITIONER|APPLICANT|PLAINTIFF).+(?:VERSUS|V/S|VS\.?).+(?:RESPONDENT|DEFENDANT)",
                )?,
                NamedPattern::compile(
                    "prayer",
                    r"(?is)PRAYER|IT IS (?:THEREFORE )?(?:HUMBLY )?PRAYED",
                )?,
                NamedPattern::compile("verification", r"(?is)VERIFICATION|VERILY VERIFIED")?,
            ],
            sections: vec![
                NamedPattern::compile("facts", r"(?i)FACTS|BRIEF FACTS|FACTUAL BACKGROUND")?,
                NamedPattern::compile(
                    "legal_grounds",
                    r"(?i)LEGAL GROUNDS|GROUNDS|SUBMISSIONS|ARGUMENTS",
                )?,
                NamedPattern::compile("relief", r"(?i)RELIEF|PRAYER|PRAYED|RELIEF SOUGHT")?,
                NamedPattern::compile(
                    "sections",
                    r"(?i)(?:Section|Article|Order).+(?:IPC|CrPC|CPC|Constitution)",
                )?,
            ],
            honorific: NamedPattern::compile("honorific", r"(?i)hon'ble|honourable")?,
            section_citation: NamedPattern::compile(
                "section_citation",
                r"(?i)(?:Section|Sec\.|S\.)\s*\d+[A-Z]?(?:\(\d+\))?",
            )?,
            case_citation: NamedPattern::compile(
                "case_citation",
                r"\(\d{4}\)\s*(?:SCC|SCR|AIR|Cri\.L\.J\.|Mad\.L\.J\.)",
            )?,
            act_name: NamedPattern::compile(
                "act_name",
                r"(?i)Indian Penal Code|Code of Criminal Procedure|Code of Civil Procedure|Constitution of India|IPC|CrPC|CPC",
            )?,
            sentence_boundary: NamedPattern::compile("sentence_boundary", r"[.!?]+")?,
            excessive_whitespace: NamedPattern::compile("excessive_whitespace", r"\s{3,}")?,
            missing_space_after_period: NamedPattern::compile(
                "missing_space_after_period",
                r"[a-z]\.[A-Z]",
            )?,
            leading_capital: NamedPattern::compile("leading_capital", r"^[A-Z]")?,
        };

        let mut seen = HashSet::new();
        for pattern in tables.patterns() {
            if !seen.insert(pattern.name) {
                return Err(RuleError::DuplicateRule(pattern.name));
            }
        }

        Ok(tables)
    }

    /// Formal vocabulary.
    pub fn formal_terms(&self) -> &[&'static str] {
        self.formal_terms
    }

    /// Informal vocabulary.
    pub fn informal_terms(&self) -> &[&'static str] {
        self.informal_terms
    }

    /// Structural components: title, parties, prayer, verification.
    pub fn components(&self) -> &[NamedPattern] {
        &self.components
    }

    /// Content sections: facts, legal grounds, relief, statutory sections.
    pub fn sections(&self) -> &[NamedPattern] {
        &self.sections
    }

    /// Court honorific.
    pub fn honorific(&self) -> &NamedPattern {
        &self.honorific
    }

    /// `Section 302`, `Sec. 438(2)`, `S. 498A`.
    pub fn section_citation(&self) -> &NamedPattern {
        &self.section_citation
    }

    /// `(2014) SCC`, `(1978) AIR`.
    pub fn case_citation(&self) -> &NamedPattern {
        &self.case_citation
    }

    /// Names of the principal codes and the Constitution.
    pub fn act_name(&self) -> &NamedPattern {
        &self.act_name
    }

    /// Sentence-terminating punctuation runs.
    pub fn sentence_boundary(&self) -> &NamedPattern {
        &self.sentence_boundary
    }

    /// Three or more consecutive whitespace characters.
    pub fn excessive_whitespace(&self) -> &NamedPattern {
        &self.excessive_whitespace
    }

    /// A period wedged between two words.
    pub fn missing_space_after_period(&self) -> &NamedPattern {
        &self.missing_space_after_period
    }

    /// Capital letter at the start of the text.
    pub fn leading_capital(&self) -> &NamedPattern {
        &self.leading_capital
    }

    /// Every registered pattern.
    pub fn patterns(&self) -> impl Iterator<Item = &NamedPattern> {
        self.components
            .iter()
            .chain(self.sections.iter())
            .chain([
                &self.honorific,
                &self.section_citation,
                &self.case_citation,
                &self.act_name,
                &self.sentence_boundary,
                &self.excessive_whitespace,
                &self.missing_space_after_period,
                &self.leading_capital,
            ])
    }

    /// Look up a pattern by name.
    pub fn get(&self, name: &str) -> Option<&NamedPattern> {
        self.patterns().find(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> RuleTables {
        RuleTables::new().unwrap()
    }

    fn pattern(name: &str) -> NamedPattern {
        rules().get(name).cloned().unwrap()
    }

    #[test]
    fn test_tables_compile_with_unique_names() {
        let rules = rules();
        assert_eq!(rules.patterns().count(), 16);
        assert_eq!(rules.components().len(), 4);
        assert_eq!(rules.sections().len(), 4);
        assert_eq!(rules.formal_terms().len(), 18);
        assert_eq!(rules.informal_terms().len(), 11);
    }

    #[test]
    fn test_title_pattern() {
        let title = pattern("title");
        assert!(title.is_match("IN THE HON'BLE HIGH COURT OF DELHI"));
        assert!(title.is_match("in the supreme court of india"));
        assert!(title.is_match("IN THE DISTRICT COURT AT PUNE"));
        assert!(!title.is_match("IN THE CONSUMER FORUM"));
    }

    #[test]
    fn test_parties_pattern_spans_lines() {
        let parties = pattern("parties");
        assert!(parties.is_match("Ramesh Kumar ... PETITIONER\nVERSUS\nState of Delhi ... RESPONDENT"));
        assert!(parties.is_match("ABC Ltd, Plaintiff v/s XYZ Ltd, Defendant"));
        assert!(!parties.is_match("PETITIONER against RESPONDENT"));
    }

    #[test]
    fn test_prayer_and_verification_patterns() {
        let prayer = pattern("prayer");
        assert!(prayer.is_match("PRAYER\nIn view of the above"));
        assert!(prayer.is_match("It is therefore humbly prayed that"));
        assert!(prayer.is_match("IT IS PRAYED"));
        assert!(!prayer.is_match("It is requested that"));

        let verification = pattern("verification");
        assert!(verification.is_match("VERIFICATION"));
        assert!(verification.is_match("verily verified at Delhi"));
        assert!(!verification.is_match("verified"));
    }

    #[test]
    fn test_section_heading_patterns() {
        assert!(pattern("facts").is_match("BRIEF FACTS OF THE CASE"));
        assert!(pattern("facts").is_match("Factual Background"));
        assert!(pattern("legal_grounds").is_match("GROUNDS"));
        assert!(pattern("legal_grounds").is_match("Submissions on behalf of the applicant"));
        assert!(pattern("relief").is_match("RELIEF SOUGHT"));
        assert!(!pattern("relief").is_match("The petitioner seeks bail"));
    }

    #[test]
    fn test_statute_reference_stays_on_one_line() {
        let sections = pattern("sections");
        assert!(sections.is_match("Section 302 of the IPC"));
        assert!(sections.is_match("Article 21 of the Constitution"));
        assert!(sections.is_match("Order XXXIX of the CPC"));
        assert!(!sections.is_match("Section 302\nIPC"));
    }

    #[test]
    fn test_section_citation_pattern() {
        let section = pattern("section_citation");
        let text = "Section 302, Sec. 438(2), S. 498A and section 34 apply.";
        assert_eq!(
            section.matches(text).collect::<Vec<_>>(),
            vec!["Section 302", "Sec. 438(2)", "S. 498A", "section 34"]
        );
    }

    #[test]
    fn test_case_citation_is_case_sensitive() {
        let citation = pattern("case_citation");
        assert_eq!(citation.count("(2014) 8 SCC and (1978) AIR 597 and (2001) Cri.L.J."), 2);
        assert_eq!(citation.count("(2014) 8 SCC"), 0);
        assert_eq!(citation.count("(2014) SCC 273"), 1);
        assert_eq!(citation.count("(2014) scc 273"), 0);
    }

    #[test]
    fn test_act_name_pattern() {
        let act = pattern("act_name");
        let found: Vec<_> = act
            .matches("Indian Penal Code read with CrPC and the Constitution of India")
            .collect();
        assert_eq!(found, vec!["Indian Penal Code", "CrPC", "Constitution of India"]);
    }

    #[test]
    fn test_grammar_patterns() {
        let rules = rules();
        assert!(rules.excessive_whitespace().is_match("word   word"));
        assert!(!rules.excessive_whitespace().is_match("word  word"));
        assert!(rules.missing_space_after_period().is_match("the end.Next"));
        assert!(!rules.missing_space_after_period().is_match("the end. Next"));
        assert!(rules.leading_capital().is_match("The"));
        assert!(!rules.leading_capital().is_match("the"));
        assert_eq!(rules.sentence_boundary().split("One. Two!? Three").count(), 3);
    }

    #[test]
    fn test_honorific_pattern() {
        let honorific = pattern("honorific");
        assert!(honorific.is_match("This Hon'ble Court"));
        assert!(honorific.is_match("the HONOURABLE judge"));
        assert!(!honorific.is_match("honorable"));
    }
}
