//! HTTP API of the species catalog.
//!
//! - `species`: the `species` table, by primary key.
//! - `session`: who the current viewer is.

pub mod session;
pub mod species;

use actix_web::error::InternalError;
use actix_web::{web, HttpResponse};
use common::requests::ApiError;

/// JSON extractor settings shared by all routes: bodies up to 1 MB, and
/// malformed bodies answered with an `ApiError` like every other failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(1024 * 1024)
        .error_handler(|err, _req| {
            let response = HttpResponse::BadRequest().json(ApiError {
                message: format!("Invalid request body: {}", err),
            });
            InternalError::from_response(err, response).into()
        })
}
