use thiserror::Error;

/// Postgres error code raised for unique-constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Supabase not configured")]
    NotConfigured,
    #[error("{0}")]
    Auth(String),
    #[error("Request failed: {0}")]
    Request(String),
    #[error("{message}")]
    Rejected {
        status: u16,
        code: Option<String>,
        message: String,
    },
    #[error("Record not found")]
    NotFound,
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl StoreError {
    pub fn rejected(status: u16, code: Option<String>, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            Self::Rejected { code: Some(code), .. } if code == UNIQUE_VIOLATION
        )
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::Decode(error.to_string())
        } else {
            Self::Request(error.to_string())
        }
    }
}
