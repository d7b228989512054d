use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptCheckError {
    #[error("file '{0}' not found")]
    InputNotFound(String),

    #[error("input is not valid UTF-8 text: {0}")]
    InvalidEncoding(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PromptCheckError>;
