use std::path::Path;

use actix_web::{web, HttpRequest, HttpResponse};
use log::info;
use rusqlite::params;

use super::{authorize_delete, session_id};
use crate::db;
use crate::error::ServiceError;
use crate::state::AppState;

/// `DELETE /api/species/{id}`: `204 No Content` once the row is gone.
pub async fn process(
    req: HttpRequest,
    id: web::Path<i64>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ServiceError> {
    let id = id.into_inner();
    let session = session_id(&req)?;
    let db_path = state.db_path.clone();
    web::block(move || delete_species(&db_path, id, &session)).await??;
    info!("Species {} deleted", id);
    Ok(HttpResponse::NoContent().finish())
}

pub fn delete_species(db_path: &Path, id: i64, session_id: &str) -> Result<(), ServiceError> {
    let conn = db::open(db_path)?;
    let existing = db::find_species(&conn, id)?.ok_or(ServiceError::NotFound(id))?;
    authorize_delete(&existing, session_id)?;
    conn.execute("DELETE FROM species WHERE id = ?1", params![id])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, web, App};
    use common::requests::SESSION_HEADER;

    use super::*;
    use crate::services::species::{configure_routes, test_support::state_with_species};

    #[actix_web::test]
    async fn author_deletes_once() {
        let (_dir, state, species) = state_with_species("owner");
        let db_path = state.db_path.clone();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(configure_routes()),
        )
        .await;
        let uri = format!("/api/species/{}", species.id);

        let req = test::TestRequest::delete()
            .uri(&uri)
            .insert_header((SESSION_HEADER, "owner"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let conn = db::open(&db_path).unwrap();
        assert_eq!(db::find_species(&conn, species.id).unwrap(), None);

        let req = test::TestRequest::delete()
            .uri(&uri)
            .insert_header((SESSION_HEADER, "owner"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn other_users_cannot_delete() {
        let (_dir, state, species) = state_with_species("owner");
        let err = delete_species(&state.db_path, species.id, "someone-else").unwrap_err();
        assert!(matches!(err, ServiceError::Forbidden(id) if id == species.id));

        let conn = db::open(&state.db_path).unwrap();
        assert!(db::find_species(&conn, species.id).unwrap().is_some());
    }
}
