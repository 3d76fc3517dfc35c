use thiserror::Error;

/// Custom error type for market data operations.
#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("Provider error: {0}")]
    ProviderError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
