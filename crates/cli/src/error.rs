use hek_query::QueryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read or write a file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse the query document as JSON: {0}")]
    QueryDocument(#[from] serde_json::Error),

    #[error("Failed to serialize the query: {0}")]
    Query(#[from] QueryError),

    #[error("Unknown catalog category: {0}")]
    UnknownCategory(String),
}
