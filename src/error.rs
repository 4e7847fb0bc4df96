//! Common error type and result alias.
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(reqwest::Error),
    #[error("Inference error: {0}")]
    Inference(String),
}
