use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    /// A disjunction reached a point where only conjunctive merging is possible,
    /// e.g. an `Or` nested inside an `And`.
    #[error("Unsupported combination: {0} cannot be merged into a conjunctive block")]
    UnsupportedCombination(String),

    #[error("Event type selector and contains check cannot be combined in one block")]
    MutuallyExclusiveSelection,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse time from '{input}'")]
    TimeParse { input: String },
}

pub type Result<T> = std::result::Result<T, QueryError>;
