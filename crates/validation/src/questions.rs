//! Follow-up questions for required fields.

/// A question with example answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldQuestion {
    /// Prompt shown to the user
    pub question: &'static str,
    /// Example answers
    pub suggestions: &'static [&'static str],
}

const CATALOGUE: &[(&str, FieldQuestion)] = &[
    (
        "title",
        FieldQuestion {
            question: "What is the title or subject of this case/document?",
            suggestions: &[
                "E.g., 'Bail Application in FIR No. 123/2024'",
                "E.g., 'Petition for Divorce'",
            ],
        },
    ),
    (
        "case_type",
        FieldQuestion {
            question: "What type of case is this?",
            suggestions: &["Civil", "Criminal", "Family", "Corporate", "Constitutional"],
        },
    ),
    (
        "court",
        FieldQuestion {
            question: "Which court will this be filed in?",
            suggestions: &["District Court", "High Court", "Supreme Court", "Tribunal"],
        },
    ),
    (
        "facts",
        FieldQuestion {
            question: "Can you provide the facts or background of the case?",
            suggestions: &["Describe what happened, when, where, and who was involved"],
        },
    ),
    (
        "relief_sought",
        FieldQuestion {
            question: "What relief or remedy are you seeking from the court?",
            suggestions: &[
                "E.g., 'Grant bail to the accused'",
                "E.g., 'Direct the respondent to pay damages'",
            ],
        },
    ),
    (
        "parties",
        FieldQuestion {
            question: "Who are the parties involved?",
            suggestions: &["Petitioner/Applicant name", "Respondent/Defendant name"],
        },
    ),
    (
        "sections",
        FieldQuestion {
            question: "Which legal sections or acts are relevant to this case?",
            suggestions: &[
                "E.g., 'Section 420 IPC'",
                "E.g., 'Section 138 Negotiable Instruments Act'",
            ],
        },
    ),
    (
        "fir_number",
        FieldQuestion {
            question: "What is the FIR number?",
            suggestions: &["Format: FIR No. XXX/YYYY"],
        },
    ),
    (
        "accused_details",
        FieldQuestion {
            question: "Please provide accused person's details",
            suggestions: &["Name, age, address, occupation"],
        },
    ),
    (
        "previous_bail_applications",
        FieldQuestion {
            question: "Have you filed any previous bail applications in this case?",
            suggestions: &["If yes, please provide details and outcome"],
        },
    ),
    (
        "verification_details",
        FieldQuestion {
            question: "Who will verify this affidavit?",
            suggestions: &["Name and designation of the deponent"],
        },
    ),
];

/// Catalogued question for a field, if any.
pub fn lookup(field: &str) -> Option<&'static FieldQuestion> {
    CATALOGUE
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, question)| question)
}

/// Question and suggestions for a missing field.
///
/// Fields without a catalogue entry get "Please provide <field>" with
/// underscores turned into spaces and no suggestions.
pub fn question_for(field: &str) -> (String, Vec<String>) {
    match lookup(field) {
        Some(q) => (
            q.question.to_string(),
            q.suggestions.iter().map(|s| s.to_string()).collect(),
        ),
        None => (format!("Please provide {}", field.replace('_', " ")), Vec::new()),
    }
}
