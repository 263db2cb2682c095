use actix_web::web::{get, scope};
use actix_web::{web, HttpResponse, Scope};
use common::requests::SessionInfo;

use crate::state::AppState;

const API_PATH: &str = "/api/session";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(process))
}

/// `GET /api/session`: the configured viewer, or `{"user_id": null}`.
async fn process(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(SessionInfo {
        user_id: state.session_user.clone(),
    })
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use common::requests::SessionInfo;

    use super::configure_routes;
    use crate::services::species::test_support::state_with_species;

    #[actix_web::test]
    async fn reports_configured_user() {
        let (_dir, state, _species) = state_with_species("naturalist");
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/session").to_request();
        let session: SessionInfo = test::call_and_read_body_json(&app, req).await;
        assert_eq!(session.user_id.as_deref(), Some("naturalist"));
    }
}
