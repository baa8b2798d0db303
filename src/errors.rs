use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("geocoding error: {0}")]
    Geocode(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("logger error: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),
}

pub type PortfolioResult<T> = Result<T, PortfolioError>;

impl PortfolioError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn validation_error(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn geocode_error(msg: impl Into<String>) -> Self {
        Self::Geocode(msg.into())
    }

    /// Errors the user can fix from the form they are filling in.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
