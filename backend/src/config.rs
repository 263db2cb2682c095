//! Service configuration, read from `SPECIES_*` environment variables.
//!
//! A `.env` file in the working directory is loaded first when present.
//! Unset or unparsable values fall back to the defaults below.

use std::path::PathBuf;

use log::info;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// SQLite file holding the `species` table.
    pub db_path: PathBuf,
    /// Directory with the built frontend (`trunk build` output).
    pub static_dir: PathBuf,
    /// Identity reported by `GET /api/session`. `None` means an anonymous viewer.
    pub session_user: Option<String>,
    /// Insert demo rows when the table is empty.
    pub seed: bool,
    pub open_browser: bool,
}

impl Config {
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            info!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from any key lookup; `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let get_bool = |key: &str| {
            get(key)
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false)
        };

        Config {
            host: get("SPECIES_HOST").unwrap_or_else(|| "127.0.0.1".into()),
            port: get("SPECIES_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            db_path: PathBuf::from(get("SPECIES_DB_PATH").unwrap_or_else(|| "species.sqlite".into())),
            static_dir: PathBuf::from(
                get("SPECIES_STATIC_DIR").unwrap_or_else(|| "../frontend/dist".into()),
            ),
            session_user: get("SPECIES_SESSION_USER"),
            seed: get_bool("SPECIES_SEED"),
            open_browser: get_bool("SPECIES_OPEN_BROWSER"),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.db_path, PathBuf::from("species.sqlite"));
        assert_eq!(config.session_user, None);
        assert!(!config.seed);
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("SPECIES_PORT", "9090"),
            ("SPECIES_SESSION_USER", " naturalist-42 "),
            ("SPECIES_SEED", "TRUE"),
            ("SPECIES_OPEN_BROWSER", "1"),
        ]);
        assert_eq!(config.port, 9090);
        assert_eq!(config.session_user.as_deref(), Some("naturalist-42"));
        assert!(config.seed);
        assert!(config.open_browser);
    }

    #[test]
    fn bad_port_and_blank_user_fall_back() {
        let config = config_from(&[("SPECIES_PORT", "eighty"), ("SPECIES_SESSION_USER", "  ")]);
        assert_eq!(config.port, 8080);
        assert_eq!(config.session_user, None);
    }
}
