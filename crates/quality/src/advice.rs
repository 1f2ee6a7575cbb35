//! Improvement suggestions and strengths derived from a scored report.
//!
//! Both are fixed mappings from breakdown flags to canned text, gated on the
//! dimension score crossing a threshold.

use lexdraft_core::{QualityBreakdown, QualityReport};

/// Below this score, structure/tone/completeness/reference suggestions fire.
pub const SUGGESTION_THRESHOLD: u8 = 7;

/// Below this score, grammar suggestions fire.
pub const GRAMMAR_SUGGESTION_THRESHOLD: u8 = 8;

/// Actionable improvements, in dimension order.
pub fn suggestions(report: &QualityReport) -> Vec<String> {
    let b = &report.breakdown;
    let mut out = Vec::new();

    if report.structure < SUGGESTION_THRESHOLD {
        if !b.structure.has_title {
            out.push("Add proper court heading (e.g., 'IN THE HON'BLE HIGH COURT OF...')".to_string());
        }
        if !b.structure.has_prayer {
            out.push("Include a clear PRAYER section stating what relief you seek".to_string());
        }
        if !b.structure.has_verification {
            out.push("Add VERIFICATION clause at the end".to_string());
        }
    }

    if report.tone < SUGGESTION_THRESHOLD {
        if b.tone.formal_terms_count < 3 {
            out.push(
                "Use more formal legal terminology (e.g., 'respectfully submitted', 'learned counsel')"
                    .to_string(),
            );
        }
        if b.tone.informal_terms_count > 2 {
            out.push("Replace informal language with formal legal expressions".to_string());
        }
    }

    if report.completeness < SUGGESTION_THRESHOLD {
        if !b.completeness.has_facts {
            out.push("Add a FACTS section outlining the case background".to_string());
        }
        if !b.completeness.has_legal_grounds {
            out.push("Include LEGAL GROUNDS section with your arguments".to_string());
        }
    }

    if report.legal_references < SUGGESTION_THRESHOLD {
        if b.legal_references.sections_count < 2 {
            out.push(
                "Cite relevant legal sections (IPC, CrPC, CPC, etc.) to strengthen arguments".to_string(),
            );
        }
        if b.legal_references.case_citations == 0 {
            out.push("Add precedent case citations to support your position".to_string());
        }
    }

    if report.grammar < GRAMMAR_SUGGESTION_THRESHOLD {
        out.extend(b.grammar.potential_issues.iter().map(|issue| format!("Fix: {}", issue)));
    }

    out
}

/// Positive signals, in dimension order.
pub fn strengths(report: &QualityReport) -> Vec<String> {
    let mut out = Vec::new();

    if report.structure >= 9 {
        out.push("Excellent document structure and organization".to_string());
    }
    if report.tone >= 9 {
        out.push("Professional legal tone maintained throughout".to_string());
    }
    if report.completeness >= 9 {
        out.push("Comprehensive coverage of all essential elements".to_string());
    }
    if report.legal_references >= 8 {
        let refs = &report.breakdown.legal_references;
        if refs.case_citations > 0 {
            out.push(format!("Good use of precedent citations ({} cases cited)", refs.case_citations));
        }
        if refs.sections_count >= 3 {
            out.push(format!("Well-supported with legal sections ({} sections)", refs.sections_count));
        }
    }
    if report.grammar >= 9 {
        out.push("Clean, well-written language".to_string());
    }

    out
}

/// Absent structural components, then absent content sections.
pub fn missing_elements(breakdown: &QualityBreakdown) -> Vec<String> {
    let s = &breakdown.structure;
    let c = &breakdown.completeness;
    [
        ("title", s.has_title),
        ("parties", s.has_parties),
        ("prayer", s.has_prayer),
        ("verification", s.has_verification),
        ("facts", c.has_facts),
        ("legal_grounds", c.has_legal_grounds),
        ("relief", c.has_relief),
        ("sections", c.has_sections),
    ]
    .into_iter()
    .filter(|(_, present)| !present)
    .map(|(name, _)| name.to_string())
    .collect()
}
