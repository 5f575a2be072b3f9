use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown test: {0}")]
    UnknownTest(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScoreError>;
