use thiserror::Error;

/// Construction-time validation failures for protocol value objects.
///
/// These are raised synchronously by the builders and are never caught
/// inside this crate; they propagate to whoever tried to build the invalid
/// object.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("invalid status code {code}, expected 100..=599")]
    InvalidStatusCode { code: u16 },

    #[error("invalid http method: {reason}")]
    InvalidMethod { reason: String },

    #[error("invalid url: {reason}")]
    InvalidUrl { reason: String },
}

impl ValidationError {
    pub fn invalid_status_code(code: u16) -> Self {
        Self::InvalidStatusCode { code }
    }

    pub fn invalid_method<S: ToString>(reason: S) -> Self {
        Self::InvalidMethod { reason: reason.to_string() }
    }

    pub fn invalid_url<S: ToString>(reason: S) -> Self {
        Self::InvalidUrl { reason: reason.to_string() }
    }
}
