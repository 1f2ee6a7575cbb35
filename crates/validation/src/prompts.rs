//! Conversational follow-up prompts.

use lexdraft_core::{MissingFieldAnalysis, Priority};
use serde::{Deserialize, Serialize};

/// Message returned when nothing is missing.
pub const ALL_PROVIDED: &str =
    "Great! All essential information is provided. Proceeding with draft generation.";

const HIGH_HEADER: &str = "I noticed some important information is missing:";
const MEDIUM_HEADER: &str = "\nAdditionally, it would help to know:";

/// Limits on how many questions a prompt surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptConfig {
    /// High-priority questions shown
    pub max_high: usize,
    /// Medium-priority questions shown when high ones leave room
    pub max_medium: usize,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            max_high: 3,
            max_medium: 2,
        }
    }
}

/// Render findings as prompt lines. Low-priority findings are never shown.
pub fn render(missing: &[MissingFieldAnalysis], config: &PromptConfig) -> Vec<String> {
    if missing.is_empty() {
        return vec![ALL_PROVIDED.to_string()];
    }

    let high: Vec<_> = missing.iter().filter(|f| f.priority == Priority::High).collect();
    let medium: Vec<_> = missing.iter().filter(|f| f.priority == Priority::Medium).collect();
    let mut lines = Vec::new();

    if !high.is_empty() {
        lines.push(HIGH_HEADER.to_string());
        for field in high.iter().take(config.max_high) {
            lines.push(format!("• {}", field.question));
            if let Some(hint) = field.suggestions.first() {
                lines.push(format!("  💡 {}", hint));
            }
        }
    }

    if !medium.is_empty() && high.len() < config.max_high {
        lines.push(MEDIUM_HEADER.to_string());
        for field in medium.iter().take(config.max_medium) {
            lines.push(format!("• {}", field.question));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(name: &str, priority: Priority) -> MissingFieldAnalysis {
        MissingFieldAnalysis::new(name, format!("{}?", name), priority).with_suggestions([format!("{} hint", name)])
    }

    fn questions(lines: &[String]) -> usize {
        lines.iter().filter(|l| l.starts_with("• ")).count()
    }

    #[test]
    fn test_empty_is_affirmative() {
        assert_eq!(render(&[], &PromptConfig::default()), vec![ALL_PROVIDED]);
    }

    #[test]
    fn test_high_capped_at_three() {
        let missing: Vec<_> = (0..5).map(|i| finding(&format!("f{}", i), Priority::High)).collect();
        let lines = render(&missing, &PromptConfig::default());

        assert_eq!(lines[0], HIGH_HEADER);
        assert_eq!(questions(&lines), 3);
        assert_eq!(lines[1], "• f0?");
        assert_eq!(lines[2], "  💡 f0 hint");
        assert!(!lines.contains(&MEDIUM_HEADER.to_string()));
    }

    #[test]
    fn test_medium_shown_when_room() {
        let missing = vec![
            finding("a", Priority::High),
            finding("b", Priority::Medium),
            finding("c", Priority::Medium),
            finding("d", Priority::Medium),
        ];
        let lines = render(&missing, &PromptConfig::default());
        assert_eq!(
            lines,
            vec![HIGH_HEADER, "• a?", "  💡 a hint", MEDIUM_HEADER, "• b?", "• c?"]
        );
    }

    #[test]
    fn test_medium_suppressed_by_three_high() {
        let mut missing: Vec<_> = (0..3).map(|i| finding(&format!("h{}", i), Priority::High)).collect();
        missing.push(finding("m", Priority::Medium));
        let lines = render(&missing, &PromptConfig::default());
        assert!(!lines.iter().any(|l| l == "• m?"));
    }

    #[test]
    fn test_only_low_yields_nothing() {
        let lines = render(&[finding("tone", Priority::Low)], &PromptConfig::default());
        assert!(lines.is_empty());
    }

    #[test]
    fn test_only_medium_skips_high_header_and_hints() {
        let mut bare = MissingFieldAnalysis::new("sections", "Which sections?", Priority::Medium);
        bare.suggestions.clear();
        let lines = render(&[finding("parties", Priority::Medium), bare], &PromptConfig::default());
        assert_eq!(lines, vec![MEDIUM_HEADER, "• parties?", "• Which sections?"]);
    }

    #[test]
    fn test_custom_limits() {
        let config = PromptConfig { max_high: 1, max_medium: 1 };
        let missing = vec![
            finding("a", Priority::High),
            finding("b", Priority::High),
            finding("c", Priority::Medium),
        ];
        let lines = render(&missing, &config);
        assert_eq!(questions(&lines), 1);
    }
}
