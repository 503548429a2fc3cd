use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdapterError {
    /// Settings file parsed, but the required key is absent.
    #[error("settings: {0}")]
    Settings(String),

    #[error("http: {0}")]
    Http(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("serde: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AdapterError>;
