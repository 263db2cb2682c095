//! HTTP client for the species table service.
//!
//! Every call resolves to `Result<_, RequestError>`; the error's `Display` is
//! the human-readable text shown in error toasts.

use common::model::species::Species;
use common::requests::{ApiError, SessionInfo, SpeciesUpdate, SESSION_HEADER};
use gloo_net::http::{Request, Response};
use thiserror::Error;

const SPECIES_PATH: &str = "/api/species";
const SESSION_PATH: &str = "/api/session";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The service answered with a non-2xx status. The text comes from its
    /// `ApiError` body when there is one.
    #[error("{0}")]
    Backend(String),
    #[error("Network error: {0}")]
    Network(String),
}

impl From<gloo_net::Error> for RequestError {
    fn from(err: gloo_net::Error) -> Self {
        RequestError::Network(err.to_string())
    }
}

pub async fn fetch_session() -> Result<SessionInfo, RequestError> {
    let response = checked(Request::get(SESSION_PATH).send().await?).await?;
    Ok(response.json::<SessionInfo>().await?)
}

pub async fn list_species() -> Result<Vec<Species>, RequestError> {
    let response = checked(Request::get(SPECIES_PATH).send().await?).await?;
    Ok(response.json::<Vec<Species>>().await?)
}

/// `update(table="species", id, fields)`.
pub async fn update_species(
    id: i64,
    session_id: &str,
    update: &SpeciesUpdate,
) -> Result<Species, RequestError> {
    let request = Request::patch(&species_url(id))
        .header(SESSION_HEADER, session_id)
        .json(update)?;
    let response = checked(request.send().await?).await?;
    Ok(response.json::<Species>().await?)
}

/// `delete(table="species", id)`.
pub async fn delete_species(id: i64, session_id: &str) -> Result<(), RequestError> {
    let response = Request::delete(&species_url(id))
        .header(SESSION_HEADER, session_id)
        .send()
        .await?;
    checked(response).await?;
    Ok(())
}

fn species_url(id: i64) -> String {
    format!("{}/{}", SPECIES_PATH, id)
}

async fn checked(response: Response) -> Result<Response, RequestError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = match response.json::<ApiError>().await {
        Ok(body) => body.message,
        Err(_) => format!("Request failed with status {} {}", status, response.status_text()),
    };
    Err(RequestError::Backend(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_displays_service_message() {
        let err = RequestError::Backend("Only the author of species 3 may change it".to_string());
        assert_eq!(err.to_string(), "Only the author of species 3 may change it");
    }

    #[test]
    fn species_url_is_keyed_by_id() {
        assert_eq!(species_url(12), "/api/species/12");
    }
}
