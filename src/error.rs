use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Reference error: {0}")]
    Reference(String),

    #[error("Duplicate error: {0}")]
    Duplicate(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Persistence error: {0}")]
    Persistence(DbErr),

    #[error("Broken reference: {0}")]
    BrokenReference(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Short machine-readable name of the error class.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::Reference(_) => "reference",
            Self::Duplicate(_) => "duplicate",
            Self::NotFound(_) => "not_found",
            Self::Persistence(_) => "persistence",
            Self::BrokenReference(_) => "broken_reference",
            Self::Configuration(_) => "configuration",
            Self::Other(_) => "internal",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Constraint violations reported by the storage engine are lifted into the
/// domain taxonomy so callers see the same error whether a pre-check or the
/// database caught the problem.
impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => Self::Duplicate(msg),
            Some(SqlErr::ForeignKeyConstraintViolation(msg)) => Self::Reference(msg),
            _ => Self::Persistence(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = match self {
            Self::NotFound(ref msg) => msg.clone(),
            Self::Persistence(ref e) => {
                tracing::error!("Database error: {}", e);
                "Database error occurred".to_string()
            }
            Self::Other(ref e) => {
                tracing::error!("Unexpected error: {}", e);
                "An unexpected error occurred".to_string()
            }
            ref other => {
                tracing::error!("{}", other);
                other.to_string()
            }
        };

        let body = Json(json!({
            "error": error_message,
            "kind": self.kind(),
            "details": self.to_string(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
