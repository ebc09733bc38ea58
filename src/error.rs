use thiserror::Error;

#[derive(Debug, Error)]
pub enum MultiCheckError {
    #[error("Invalid JSON input: {0}")]
    InvalidJson(String),

    #[error(
        "Invalid options: {0}\n\nExpected a JSON array of objects like {{\"label\": \"Apple\", \"value\": \"apple\"}}"
    )]
    InvalidOptions(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
