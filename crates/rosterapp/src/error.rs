use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
