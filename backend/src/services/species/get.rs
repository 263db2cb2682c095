use std::path::Path;

use actix_web::{web, HttpResponse};
use common::model::species::Species;

use crate::db;
use crate::error::ServiceError;
use crate::state::AppState;

/// `GET /api/species/{id}`: `200 OK` with the row, `404` when it does not exist.
pub async fn process(
    id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ServiceError> {
    let id = id.into_inner();
    let db_path = state.db_path.clone();
    let species = web::block(move || get_species(&db_path, id)).await??;
    Ok(HttpResponse::Ok().json(species))
}

pub fn get_species(db_path: &Path, id: i64) -> Result<Species, ServiceError> {
    let conn = db::open(db_path)?;
    db::find_species(&conn, id)?.ok_or(ServiceError::NotFound(id))
}
