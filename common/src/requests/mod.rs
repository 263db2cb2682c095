use serde::{Deserialize, Serialize};

/// Header carrying the viewer identity on mutating requests.
pub const SESSION_HEADER: &str = "X-Session-Id";

/// Body of `PATCH /api/species/{id}`.
///
/// Always carries the full editable field set; `author` and `id` are not
/// editable and therefore absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesUpdate {
    pub scientific_name: String,
    pub common_name: Option<String>,
    pub kingdom: Option<String>,
    pub total_population: Option<i64>,
    #[serde(default)]
    pub endangered: bool,
    pub image: Option<String>,
    pub description: Option<String>,
}

/// Error body returned by every failing `/api` route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
}

/// Response of `GET /api/session`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub user_id: Option<String>,
}
