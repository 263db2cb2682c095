//! # Species Table Service
//!
//! Routes under `/api/species` exposing the `species` table by primary key.
//!
//! - `GET /`: every row, ordered by scientific name (`list`).
//! - `GET /{id}`: one row (`get`).
//! - `PATCH /{id}`: replaces the editable fields with a `SpeciesUpdate` body
//!   and returns the stored row (`update`).
//! - `DELETE /{id}`: removes the row, `204 No Content` on success (`delete`).
//!
//! Mutating routes need the `X-Session-Id` header and only succeed for the
//! row's author, using the same rule the frontend uses to show its controls.

mod delete;
mod get;
mod list;
mod update;

use actix_web::web::{delete, get, patch, scope};
use actix_web::{HttpRequest, Scope};
use common::model::species::{Species, SpeciesCapabilities};
use common::requests::SESSION_HEADER;

use crate::error::ServiceError;

const API_PATH: &str = "/api/species";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/{id}", get().to(get::process))
        .route("/{id}", patch().to(update::process))
        .route("/{id}", delete().to(delete::process))
}

/// Viewer identity from the session header; blank counts as missing.
fn session_id(req: &HttpRequest) -> Result<String, ServiceError> {
    req.headers()
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or(ServiceError::Unauthenticated)
}

fn authorize_edit(species: &Species, session_id: &str) -> Result<(), ServiceError> {
    if SpeciesCapabilities::for_session(species, Some(session_id)).can_edit {
        Ok(())
    } else {
        Err(ServiceError::Forbidden(species.id))
    }
}

fn authorize_delete(species: &Species, session_id: &str) -> Result<(), ServiceError> {
    if SpeciesCapabilities::for_session(species, Some(session_id)).can_delete {
        Ok(())
    } else {
        Err(ServiceError::Forbidden(species.id))
    }
}
