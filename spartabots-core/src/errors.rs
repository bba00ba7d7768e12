use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SiteError {
    #[error("media url is empty")]
    EmptyUrl,
    #[error("no element to observe")]
    MissingElement,
    #[error("visibility threshold {0} is outside 0.0..=1.0")]
    InvalidThreshold(f64),
    #[error("root margin is empty")]
    EmptyRootMargin,
    #[error("intersection observer unavailable: {0}")]
    ObserverUnavailable(String),
}

pub type SiteResult<T> = Result<T, SiteError>;
