//! LexDraft CLI - legal draft quality scoring and gap detection.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use lexdraft_citations::CitationService;
use lexdraft_core::{CaseType, Citation, DocumentType, MissingFieldAnalysis, ProvidedData, QualityReport};
use lexdraft_quality::QualityScorer;
use lexdraft_validation::MissingInfoDetector;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lexdraft")]
#[command(about = "Legal draft quality scoring and missing-information detection", long_about = None)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a draft's quality
    Score {
        /// Draft file, or "-" for stdin
        file: PathBuf,
        /// Document type (petition, notice, bail_application, ...)
        #[arg(long, default_value = "petition")]
        document_type: DocumentType,
        /// Case type (civil, criminal, ...)
        #[arg(long, default_value = "civil")]
        case_type: CaseType,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// List missing case facts as follow-up questions
    Check {
        /// JSON file with the facts provided so far
        facts: PathBuf,
        /// Document type; unknown types use the petition requirements
        #[arg(long, default_value = "petition")]
        document_type: String,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Suggest precedent citations
    Cite {
        /// Search query
        #[arg(required_unless_present = "draft", conflicts_with = "draft")]
        query: Option<String>,
        /// Suggest from the terms in a draft file instead
        #[arg(long)]
        draft: Option<PathBuf>,
        /// Case type
        #[arg(long)]
        case_type: Option<CaseType>,
        /// Maximum results for a query search
        #[arg(long, default_value = "5")]
        limit: usize,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct CheckOutput<'a> {
    missing: &'a [MissingFieldAnalysis],
    prompts: &'a [String],
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Score { file, document_type, case_type, format } => {
            let content = read_input(&file).await?;
            let scorer = QualityScorer::new().context("Failed to compile rule tables")?;
            let report = scorer.score_document(&content, document_type, case_type);
            info!("Scored {} as {} ({})", file.display(), report.overall, report.grade.label());

            match format {
                Format::Json => print_json(&report)?,
                Format::Text => print_report(&report),
            }
        }
        Commands::Check { facts, document_type, format } => {
            let raw = read_input(&facts).await?;
            let value: serde_json::Value = serde_json::from_str(&raw)
                .with_context(|| format!("Invalid JSON in {}", facts.display()))?;
            let data = ProvidedData::from_value(value);

            let detector = MissingInfoDetector::new();
            let missing = detector.detect_missing_info(&document_type, &data);
            let prompts = detector.generate_interactive_prompts(&missing);

            match format {
                Format::Json => print_json(&CheckOutput { missing: &missing, prompts: &prompts })?,
                Format::Text => {
                    for line in &prompts {
                        println!("{}", line);
                    }
                    if !missing.is_empty() {
                        println!();
                        println!("Missing fields ({})", missing.len());
                        for field in &missing {
                            println!("  {} | {}", field.priority.as_str().to_uppercase(), field.field_name);
                        }
                    }
                }
            }
        }
        Commands::Cite { query, draft, case_type, limit, format } => {
            let service = CitationService::new();
            let citations = match (draft, query) {
                (Some(path), _) => {
                    let content = read_input(&path).await?;
                    service.suggest_citations_for_draft(&content, case_type.unwrap_or(CaseType::Civil))
                }
                (None, Some(query)) => service.search_citations(&query, case_type, limit),
                (None, None) => anyhow::bail!("Provide a query or --draft"),
            };

            match format {
                Format::Json => print_json(&citations)?,
                Format::Text => print_citations(&citations),
            }
        }
    }

    Ok(())
}

async fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .context("Failed to read stdin")?;
        return Ok(buf);
    }
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_report(report: &QualityReport) {
    println!("Overall: {:.1}/10 ({})", report.overall, report.grade.label());
    println!("  Structure:        {}", report.structure);
    println!("  Tone:             {}", report.tone);
    println!("  Completeness:     {}", report.completeness);
    println!("  Legal references: {}", report.legal_references);
    println!("  Grammar:          {}", report.grammar);

    if !report.strengths.is_empty() {
        println!("Strengths:");
        for strength in &report.strengths {
            println!("  + {}", strength);
        }
    }
    if !report.suggestions.is_empty() {
        println!("Suggestions:");
        for suggestion in &report.suggestions {
            println!("  - {}", suggestion);
        }
    }
    if !report.missing_elements.is_empty() {
        println!("Missing: {}", report.missing_elements.join(", "));
    }
}

fn print_citations(citations: &[Citation]) {
    if citations.is_empty() {
        println!("No matching citations");
        return;
    }
    println!("Citations ({})", citations.len());
    for citation in citations {
        println!(
            "  {:.2} | {} | {} ({}, {})",
            citation.relevance_score, citation.citation, citation.title, citation.court, citation.year
        );
        if let Some(summary) = &citation.summary {
            println!("         {}", summary);
        }
    }
}
