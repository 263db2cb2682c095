//! Shared application state injected into every handler as `web::Data`.

use std::path::PathBuf;

use crate::config::Config;

/// Cheap to clone; handlers copy `db_path` into their blocking closures.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db_path: PathBuf,
    pub static_dir: PathBuf,
    pub session_user: Option<String>,
}

impl From<&Config> for AppState {
    fn from(config: &Config) -> Self {
        Self {
            db_path: config.db_path.clone(),
            static_dir: config.static_dir.clone(),
            session_user: config.session_user.clone(),
        }
    }
}
