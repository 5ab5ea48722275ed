use thiserror::Error;

#[derive(Error, Debug)]
pub enum AjustesError {
    #[error("Network error while requesting {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Error response {status} while requesting {url}")]
    HttpStatus { status: u16, url: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Date parsing error: {0}")]
    Date(#[from] chrono::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Data error: {0}")]
    Data(String),
}

impl AjustesError {
    /// True for failures talking to the remote service, as opposed to local ones.
    pub fn is_transport(&self) -> bool {
        matches!(self, AjustesError::Network { .. } | AjustesError::HttpStatus { .. })
    }
}

pub type Result<T> = std::result::Result<T, AjustesError>;
