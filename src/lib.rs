//! CyberHQ — incident tracking API.
//!
//! Library crate: the binary in `main.rs` and the integration tests in
//! `tests/` both assemble the service from these modules.

pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod query;
pub mod seed;
pub mod store;

use auth::token::TokenService;
use store::incidents::IncidentStore;
use store::reporters::ReporterStore;

/// Shared application state passed to handlers and middleware.
pub struct AppState {
    pub config: config::Config,
    pub tokens: TokenService,
    pub reporters: ReporterStore,
    pub incidents: IncidentStore,
}

impl AppState {
    /// Assemble fresh state from configuration. Fails if the configured
    /// signing algorithm is not a supported one.
    pub fn new(config: config::Config) -> anyhow::Result<Self> {
        let algorithm = config.algorithm()?;
        let tokens = TokenService::new(&config.jwt_secret, algorithm, config.token_ttl_minutes);
        Ok(Self {
            config,
            tokens,
            reporters: ReporterStore::new(),
            incidents: IncidentStore::new(),
        })
    }
}
