//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server errors to Sentry
//! before responding to the client. All route handlers return `Result<T>`.
//!
//! Every error response has a JSON body:
//!
//! ```json
//! {"error": "not_found", "message": "Order not found", "entity": "order", "id": 7}
//! ```
//!
//! `entity`, `id` and `field` are present only when they apply.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::db::RepositoryError;

/// Application-level error type for the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body or path was structurally invalid.
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// The requested entity does not exist.
    #[error("{entity} {id} not found")]
    NotFound { entity: Entity, id: i64 },

    /// A write would break a uniqueness rule.
    #[error("Constraint violation: {entity}: {message}")]
    Conflict {
        entity: Entity,
        field: &'static str,
        message: String,
    },

    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),
}

/// The kind of record an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Entity {
    User,
    Product,
    Order,
}

impl Entity {
    /// Capitalised name used in messages ("User not found").
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Product => "Product",
            Self::Order => "Order",
        }
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl AppError {
    /// Not-found error for the given entity and id.
    pub fn not_found(entity: Entity, id: impl Into<i64>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Attach entity context to a repository error.
    ///
    /// Unique violations become `Conflict` on the given field; everything
    /// else passes through unchanged.
    #[must_use]
    pub fn from_repository(err: RepositoryError, entity: Entity, field: &'static str) -> Self {
        match err {
            RepositoryError::Conflict(message) => Self::Conflict {
                entity,
                field,
                message,
            },
            other => Self::Database(other),
        }
    }

    /// HTTP status for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body of an error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<Entity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Database(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = self.status();

        // Don't expose internal error details to clients
        let body = match self {
            Self::Validation { message, field } => ErrorBody {
                error: "validation_error",
                message,
                entity: None,
                id: None,
                field,
            },
            Self::NotFound { entity, id } => ErrorBody {
                error: "not_found",
                message: format!("{entity} not found"),
                entity: Some(entity),
                id: Some(id),
                field: None,
            },
            Self::Conflict {
                entity,
                field,
                message,
            } => ErrorBody {
                error: "constraint_violation",
                message,
                entity: Some(entity),
                id: None,
                field: Some(field.to_owned()),
            },
            Self::Database(_) => ErrorBody {
                error: "internal_error",
                message: "Internal server error".to_string(),
                entity: None,
                id: None,
                field: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection, "Rejected request body");
        Self::Validation {
            message: rejection.body_text(),
            field: None,
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!(error = %rejection, "Rejected path parameter");
        Self::Validation {
            message: rejection.body_text(),
            field: Some("id".to_string()),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
