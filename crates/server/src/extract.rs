//! Request extractors that report malformed input as [`AppError::Validation`].
//!
//! Only structure is checked (field presence and JSON types). Values such as
//! email format or price range are accepted as given.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `Json<T>` whose rejection renders the structured error body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ValidJson<T>(pub T);

/// `Path<T>` whose rejection renders the structured error body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ValidPath<T>(pub T);
