//! Errors returned by the `/api` handlers.
//!
//! Every variant renders as a JSON `ApiError { message }` so the frontend can
//! show the text as-is in its error toast.

use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::requests::ApiError;
use common::validation::FieldErrors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Species {0} not found")]
    NotFound(i64),
    #[error("Missing X-Session-Id header")]
    Unauthenticated,
    #[error("Only the author of species {0} may change it")]
    Forbidden(i64),
    #[error("Invalid species: {0}")]
    Invalid(FieldErrors),
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("Worker pool unavailable: {0}")]
    Blocking(#[from] BlockingError),
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ServiceError::Forbidden(_) => StatusCode::FORBIDDEN,
            ServiceError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServiceError::Database(_) | ServiceError::Blocking(_) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiError {
            message: self.to_string(),
        })
    }
}
