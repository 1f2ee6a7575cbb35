//! Error types for the quality engine.

/// Result type for rule-table construction.
pub type Result<T> = std::result::Result<T, RuleError>;

/// Errors raised while building rule tables.
///
/// Scoring itself never fails; these only surface when the static tables
/// are corrupt, which is a programming error rather than a data problem.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// A pattern failed to compile
    #[error("invalid pattern for rule '{name}': {source}")]
    InvalidPattern {
        /// Rule name
        name: &'static str,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// Two rules share a name
    #[error("duplicate rule name: {0}")]
    DuplicateRule(&'static str),
}
