use std::sync::Arc;

use crate::config::Config;
use crate::listings::{JobSource, LocaleProfile, MockJobGenerator};

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is immutable; requests never share mutable state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Locale profile selected at startup via LOCALE_PROFILE.
    pub profile: Arc<LocaleProfile>,
    /// Pluggable listing source. Default: MockJobGenerator over `profile`.
    pub source: Arc<dyn JobSource>,
}

impl AppState {
    /// Builds state with the in-process mock generator for the configured profile.
    pub fn new(config: Config) -> Self {
        let profile = Arc::new(config.locale_profile());
        let source = Arc::new(MockJobGenerator::new(Arc::clone(&profile)));
        Self {
            config,
            profile,
            source,
        }
    }
}
