use std::sync::Arc;

use crate::config::Config;
use crate::schema::generator::SchemaGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable schema source. Default: KeywordSchemaGenerator.
    pub generator: Arc<dyn SchemaGenerator>,
}
