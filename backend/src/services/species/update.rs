use std::path::Path;

use actix_web::{web, HttpRequest, HttpResponse};
use common::model::species::Species;
use common::requests::SpeciesUpdate;
use log::{info, warn};
use rusqlite::params;

use super::{authorize_edit, session_id};
use crate::db;
use crate::error::ServiceError;
use crate::state::AppState;

/// `PATCH /api/species/{id}`.
///
/// The body is normalized and checked against the shared form schema before
/// touching the database; an invalid body is answered with `422` and never
/// stored.
pub async fn process(
    req: HttpRequest,
    id: web::Path<i64>,
    payload: web::Json<SpeciesUpdate>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ServiceError> {
    let id = id.into_inner();
    let session = session_id(&req)?;
    let update = payload.into_inner().normalized();
    if let Err(errors) = update.check() {
        warn!("Rejected update of species {}: {}", id, errors);
        return Err(ServiceError::Invalid(errors));
    }

    let db_path = state.db_path.clone();
    let species = web::block(move || update_species(&db_path, id, &session, &update)).await??;
    info!("Species {} updated by {}", id, species.author);
    Ok(HttpResponse::Ok().json(species))
}

pub fn update_species(
    db_path: &Path,
    id: i64,
    session_id: &str,
    update: &SpeciesUpdate,
) -> Result<Species, ServiceError> {
    let conn = db::open(db_path)?;
    let existing = db::find_species(&conn, id)?.ok_or(ServiceError::NotFound(id))?;
    authorize_edit(&existing, session_id)?;

    let update = update.clone().normalized();
    conn.execute(
        "UPDATE species SET scientific_name = ?1, common_name = ?2, kingdom = ?3, \
         total_population = ?4, endangered = ?5, image = ?6, description = ?7 \
         WHERE id = ?8",
        params![
            update.scientific_name,
            update.common_name,
            update.kingdom,
            update.total_population,
            update.endangered,
            update.image,
            update.description,
            id,
        ],
    )?;

    db::find_species(&conn, id)?.ok_or(ServiceError::NotFound(id))
}
