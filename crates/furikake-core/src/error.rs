#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("malformed source {file}: {message}")]
    Malformed { file: String, message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("service error: {0}")]
    Service(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
