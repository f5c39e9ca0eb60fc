use std::fmt;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Insert into {table} failed with status {status}: {detail}")]
    Rejected {
        table: String,
        status: StatusCode,
        detail: ErrorDetail,
    },
}

/// Error payload returned by PostgREST.
///
/// Falls back to the raw body when the gateway (or a proxy in front of it)
/// answers with something that isn't the usual JSON shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorDetail {
    Postgrest(PostgrestError),
    Raw(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PostgrestError {
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl ErrorDetail {
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<PostgrestError>(body) {
            Ok(err) => ErrorDetail::Postgrest(err),
            Err(_) => ErrorDetail::Raw(body.to_string()),
        }
    }

    /// Postgres SQLSTATE or PostgREST error code, if the body carried one.
    pub fn code(&self) -> Option<&str> {
        match self {
            ErrorDetail::Postgrest(err) => err.code.as_deref(),
            ErrorDetail::Raw(_) => None,
        }
    }
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorDetail::Postgrest(err) => {
                if let Some(code) = &err.code {
                    write!(f, "[{code}] ")?;
                }
                write!(f, "{}", err.message)?;
                if let Some(details) = &err.details {
                    write!(f, " ({details})")?;
                }
                if let Some(hint) = &err.hint {
                    write!(f, " hint: {hint}")?;
                }
                Ok(())
            }
            ErrorDetail::Raw(body) if body.is_empty() => f.write_str("<empty body>"),
            ErrorDetail::Raw(body) => f.write_str(body),
        }
    }
}
