//! Startup orchestration.
//!
//! # Responsibilities
//! - Build controller classes from a validated manifest
//! - Derive and install every route
//! - Wrap the router with the server middleware
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Routes are installed before the listener is bound

use crate::config::{build_classes, ConfigError, RoutingConfig};
use crate::http::{RouteServer, RouteTable};

/// Derive the routes of every manifest controller.
pub fn route_table(config: &RoutingConfig) -> Result<RouteTable, ConfigError> {
    let mut table = RouteTable::new().with_body_limit(config.server.max_body_size);
    for class in build_classes(config)? {
        table = table.mount(&class)?;
    }

    tracing::info!(
        controllers = config.controllers.len(),
        routes = table.routes().len(),
        "Route table derived"
    );
    Ok(table)
}

/// Build a ready-to-run server for a manifest.
pub fn build_server(config: &RoutingConfig) -> Result<RouteServer, ConfigError> {
    let router = route_table(config)?.into_router()?;
    Ok(RouteServer::new(router, config.server.clone()))
}
