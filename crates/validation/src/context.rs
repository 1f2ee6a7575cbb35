//! Contextual rules that infer gaps from the facts already supplied.

use lexdraft_core::{normalize_key, CaseType, MissingFieldAnalysis, Priority, ProvidedData};

/// Facts below this many characters count as brief for civil matters.
pub const BRIEF_FACTS_CHARS: usize = 100;

/// Inputs shared by every contextual rule.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Requested document type as given by the caller
    pub document_type: &'a str,
    /// Facts supplied so far
    pub data: &'a ProvidedData,
}

impl RuleContext<'_> {
    fn case_type_is(&self, case_type: CaseType) -> bool {
        self.data.text("case_type") == case_type.as_str()
    }

    fn facts_lowered(&self) -> String {
        self.data.text("facts").to_lowercase()
    }
}

/// A named inference over the supplied facts.
#[derive(Clone, Copy)]
pub struct ContextRule {
    /// Rule identifier, used in logs
    pub name: &'static str,
    apply: fn(&RuleContext<'_>) -> Vec<MissingFieldAnalysis>,
}

impl ContextRule {
    /// Findings this rule produces for the context.
    pub fn apply(&self, ctx: &RuleContext<'_>) -> Vec<MissingFieldAnalysis> {
        (self.apply)(ctx)
    }
}

impl std::fmt::Debug for ContextRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextRule").field("name", &self.name).finish()
    }
}

/// Built-in rules, in evaluation order.
pub const CONTEXT_RULES: &[ContextRule] = &[
    ContextRule { name: "criminal_sections", apply: criminal_sections },
    ContextRule { name: "criminal_fir", apply: criminal_fir },
    ContextRule { name: "petition_court", apply: petition_court },
    ContextRule { name: "bail_details", apply: bail_details },
    ContextRule { name: "civil_brief_facts", apply: civil_brief_facts },
    ContextRule { name: "incomplete_parties", apply: incomplete_parties },
];

fn criminal_sections(ctx: &RuleContext<'_>) -> Vec<MissingFieldAnalysis> {
    if !ctx.case_type_is(CaseType::Criminal) || ctx.data.has("sections") {
        return Vec::new();
    }
    vec![MissingFieldAnalysis::new(
        "sections",
        "This is a criminal case. Which IPC/CrPC sections are involved?",
        Priority::High,
    )
    .with_suggestions(["Common sections: 302 (Murder), 420 (Cheating), 376 (Rape), 498A (Dowry harassment)"])]
}

fn criminal_fir(ctx: &RuleContext<'_>) -> Vec<MissingFieldAnalysis> {
    if !ctx.case_type_is(CaseType::Criminal)
        || ctx.facts_lowered().contains("fir")
        || ctx.data.has("fir_number")
    {
        return Vec::new();
    }
    vec![MissingFieldAnalysis::new(
        "fir_number",
        "Is there an FIR registered in this case? If yes, what's the FIR number?",
        Priority::Medium,
    )
    .with_suggestions(["FIR No. format: XXX/YYYY at PS (Police Station name)"])]
}

fn petition_court(ctx: &RuleContext<'_>) -> Vec<MissingFieldAnalysis> {
    if normalize_key(ctx.document_type) != "petition" || ctx.data.has("court") {
        return Vec::new();
    }
    vec![MissingFieldAnalysis::new(
        "court",
        "Which court do you plan to file this petition in?",
        Priority::High,
    )
    .with_suggestions([
        "District Court (for local matters)",
        "High Court (for constitutional/writ petitions)",
        "Supreme Court (for appeals)",
    ])]
}

fn bail_details(ctx: &RuleContext<'_>) -> Vec<MissingFieldAnalysis> {
    let bail = ctx.document_type.to_lowercase().contains("bail")
        || ctx.data.text("relief_sought").to_lowercase().contains("bail");
    if !bail {
        return Vec::new();
    }

    let mut found = Vec::new();
    if !ctx.data.has("accused_details") {
        found.push(
            MissingFieldAnalysis::new(
                "accused_details",
                "Please provide details of the accused person",
                Priority::High,
            )
            .with_suggestions(["Name, age, address, occupation, family status"]),
        );
    }
    if !ctx.data.has("bail_grounds") {
        found.push(
            MissingFieldAnalysis::new(
                "bail_grounds",
                "What are the grounds for granting bail?",
                Priority::High,
            )
            .with_suggestions([
                "First-time offender",
                "Cooperating with investigation",
                "No flight risk",
                "Medical condition",
                "Sole breadwinner of family",
            ]),
        );
    }
    found
}

fn civil_brief_facts(ctx: &RuleContext<'_>) -> Vec<MissingFieldAnalysis> {
    if !ctx.case_type_is(CaseType::Civil) || ctx.data.text("facts").chars().count() >= BRIEF_FACTS_CHARS {
        return Vec::new();
    }
    vec![MissingFieldAnalysis::new(
        "detailed_facts",
        "The facts seem brief. Can you provide more details about the cause of action?",
        Priority::Medium,
    )
    .with_suggestions([
        "When did the dispute arise?",
        "What is the financial value involved?",
        "What attempts were made to resolve the dispute?",
    ])]
}

fn incomplete_parties(ctx: &RuleContext<'_>) -> Vec<MissingFieldAnalysis> {
    let Some(parties) = ctx.data.parties() else {
        return Vec::new();
    };
    let named = |keys: [&str; 2]| {
        keys.iter()
            .any(|key| parties.get(*key).is_some_and(lexdraft_core::is_filled))
    };

    let mut found = Vec::new();
    if !named(["petitioner", "applicant"]) {
        found.push(
            MissingFieldAnalysis::new(
                "petitioner_name",
                "Who is the petitioner/applicant in this case?",
                Priority::High,
            )
            .with_suggestions(["Full name as it should appear in court records"]),
        );
    }
    if !named(["respondent", "defendant"]) {
        found.push(
            MissingFieldAnalysis::new("respondent_name", "Who is the respondent/defendant?", Priority::High)
                .with_suggestions(["Full name and address if known"]),
        );
    }
    found
}
