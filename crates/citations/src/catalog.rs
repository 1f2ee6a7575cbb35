//! Built-in catalogue of landmark judgments.

use lexdraft_core::Citation;

/// A catalogued judgment with its search keywords.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    /// Case title
    pub title: &'static str,
    /// Reporter reference
    pub citation: &'static str,
    /// Deciding court
    pub court: &'static str,
    /// Year of decision
    pub year: u16,
    /// Short headnote
    pub summary: &'static str,
    /// Lowercase search keywords
    pub keywords: &'static [&'static str],
}

impl CatalogEntry {
    /// Citation for this entry with the given relevance.
    pub fn to_citation(&self, relevance_score: f32) -> Citation {
        Citation {
            title: self.title.to_string(),
            citation: self.citation.to_string(),
            court: self.court.to_string(),
            year: self.year,
            relevance_score,
            summary: Some(self.summary.to_string()),
        }
    }
}

const SUPREME_COURT: &str = "Supreme Court of India";

/// Landmark Supreme Court judgments.
pub const LANDMARK_CASES: &[CatalogEntry] = &[
    CatalogEntry {
        title: "Kesavananda Bharati v. State of Kerala",
        citation: "AIR 1973 SC 1461",
        court: SUPREME_COURT,
        year: 1973,
        summary: "Landmark case establishing the basic structure doctrine of the Constitution",
        keywords: &["constitution", "basic structure", "amendment"],
    },
    CatalogEntry {
        title: "Maneka Gandhi v. Union of India",
        citation: "AIR 1978 SC 597",
        court: SUPREME_COURT,
        year: 1978,
        summary: "Expanded interpretation of Article 21 - Right to Life and Personal Liberty",
        keywords: &["fundamental rights", "article 21", "personal liberty"],
    },
    CatalogEntry {
        title: "Vishaka v. State of Rajasthan",
        citation: "AIR 1997 SC 3011",
        court: SUPREME_COURT,
        year: 1997,
        summary: "Guidelines for prevention of sexual harassment at workplace",
        keywords: &["sexual harassment", "workplace", "women's rights"],
    },
    CatalogEntry {
        title: "Hussainara Khatoon v. Home Secretary, State of Bihar",
        citation: "AIR 1979 SC 1360",
        court: SUPREME_COURT,
        year: 1979,
        summary: "Speedy trial recognised as part of Article 21; release of undertrial prisoners on bail",
        keywords: &["speedy trial", "undertrial", "bail"],
    },
    CatalogEntry {
        title: "Arnesh Kumar v. State of Bihar",
        citation: "(2014) 8 SCC 273",
        court: SUPREME_COURT,
        year: 2014,
        summary: "Arrest guidelines for offences punishable up to seven years under Section 41 CrPC",
        keywords: &["arrest", "498a", "section 41"],
    },
    CatalogEntry {
        title: "Lalita Kumari v. Government of Uttar Pradesh",
        citation: "(2014) 2 SCC 1",
        court: SUPREME_COURT,
        year: 2013,
        summary: "Registration of FIR is mandatory where information discloses a cognizable offence",
        keywords: &["fir", "cognizable offence", "section 154"],
    },
];
