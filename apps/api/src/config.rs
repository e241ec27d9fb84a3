use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::listings::locale::{LocaleProfile, ProfileKind};

/// Application configuration loaded from environment variables.
/// Every variable is optional; defaults match a local demo setup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory holding `index.html` and its assets for the catch-all route.
    pub static_dir: PathBuf,
    pub profile: ProfileKind,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            static_dir: std::env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("static")),
            profile: match std::env::var("LOCALE_PROFILE") {
                Ok(raw) => raw
                    .parse::<ProfileKind>()
                    .context("LOCALE_PROFILE must be 'western' or 'indian'")?,
                Err(_) => ProfileKind::Western,
            },
        })
    }

    /// Builds the locale profile selected by `LOCALE_PROFILE`.
    pub fn locale_profile(&self) -> LocaleProfile {
        LocaleProfile::from_kind(self.profile)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 3000,
            rust_log: "info".to_string(),
            static_dir: PathBuf::from("static"),
            profile: ProfileKind::Western,
        }
    }
}
