mod config;
mod db;
mod error;
mod services;
mod state;

use std::path::{Component, Path, PathBuf};
use std::thread;
use std::time::Duration;

use actix_files::NamedFile;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpRequest, HttpServer};
use env_logger::Env;
use log::{error, info, warn};

use crate::config::Config;
use crate::state::AppState;

/// Owner of the demo rows when no session user is configured.
const DEMO_AUTHOR: &str = "demo-user";

/// Serves the built frontend. Unknown paths fall back to `index.html` so the
/// single-page app can handle them.
async fn serve_frontend(req: HttpRequest, state: web::Data<AppState>) -> actix_web::Result<NamedFile> {
    let path = req.path().trim_start_matches('/');
    let candidate = resolve_static(&state.static_dir, path);

    match candidate {
        Some(file) if file.is_file() => Ok(NamedFile::open(file)?),
        _ => Ok(NamedFile::open(state.static_dir.join("index.html"))?),
    }
}

/// Joins a request path onto the static root, refusing anything that could
/// escape it.
fn resolve_static(root: &Path, request_path: &str) -> Option<PathBuf> {
    if request_path.is_empty() {
        return None;
    }
    let relative = Path::new(request_path);
    if relative
        .components()
        .all(|component| matches!(component, Component::Normal(_)))
    {
        Some(root.join(relative))
    } else {
        None
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::from_env();
    let url = config.url();

    let seed_author = config
        .seed
        .then(|| config.session_user.as_deref().unwrap_or(DEMO_AUTHOR));
    if let Err(e) = db::initialize(&config.db_path, seed_author) {
        error!("Cannot initialise database {}: {}", config.db_path.display(), e);
        return Err(std::io::Error::other(e));
    }

    if !config.static_dir.join("index.html").is_file() {
        warn!(
            "No frontend build found in {}; only /api routes will work",
            config.static_dir.display()
        );
    }

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url_clone) {
                warn!("Could not open browser: {}", e);
            }
        });
    }

    let state = AppState::from(&config);
    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(services::json_config())
            .app_data(web::Data::new(state.clone()))
            .service(services::session::configure_routes())
            .service(services::species::configure_routes())
            .default_service(web::route().to(serve_frontend))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_paths_stay_under_root() {
        let root = Path::new("/srv/dist");
        assert_eq!(
            resolve_static(root, "assets/app.js"),
            Some(PathBuf::from("/srv/dist/assets/app.js"))
        );
        assert_eq!(resolve_static(root, ""), None);
        assert_eq!(resolve_static(root, "../secret"), None);
        assert_eq!(resolve_static(root, "a/../../b"), None);
    }
}
