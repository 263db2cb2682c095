use std::path::Path;

use actix_web::{web, HttpResponse};
use common::model::species::Species;

use crate::db::{self, SPECIES_COLUMNS};
use crate::error::ServiceError;
use crate::state::AppState;

/// `GET /api/species`: all rows as a JSON array.
pub async fn process(state: web::Data<AppState>) -> Result<HttpResponse, ServiceError> {
    let db_path = state.db_path.clone();
    let species = web::block(move || list_species(&db_path)).await??;
    Ok(HttpResponse::Ok().json(species))
}

pub fn list_species(db_path: &Path) -> Result<Vec<Species>, ServiceError> {
    let conn = db::open(db_path)?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {SPECIES_COLUMNS} FROM species ORDER BY scientific_name COLLATE NOCASE, id"
    ))?;
    let rows = stmt.query_map([], db::species_from_row)?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}
