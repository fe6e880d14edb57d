#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the Oslo housing-market map.
//!
//! Serves the district catalog, stats panels, district boundaries, the
//! selection/hover reducer and the valuation estimator as a JSON API, and
//! optionally the built front end from a static directory. The server is
//! stateless: the catalog and boundaries are immutable and shared, and the
//! per-visitor view state travels with each request.

mod handlers;
pub mod interactive;

use std::path::PathBuf;
use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use oslo_market_district::Catalog;
use oslo_market_map::DistrictBoundaries;

/// Shared application state.
pub struct AppState {
    /// District catalog.
    pub catalog: Arc<Catalog>,
    /// District boundary polygons.
    pub boundaries: Arc<DistrictBoundaries>,
}

/// Server settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind (`BIND_ADDR`, default `127.0.0.1`).
    pub bind_addr: String,
    /// Port to bind (`PORT`, default `8080`).
    pub port: u16,
    /// Directory with the built front end (`STATIC_DIR`, optional).
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1".to_string(),
            port: 8080,
            static_dir: None,
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup. Invalid
    /// or missing values fall back to the defaults.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let bind_addr = lookup("BIND_ADDR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.bind_addr);

        let port = match lookup("PORT") {
            Some(p) => p.trim().parse().unwrap_or_else(|_| {
                log::warn!("Ignoring invalid PORT value {p:?}, using {}", defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };

        let static_dir = lookup("STATIC_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Self {
            bind_addr,
            port,
            static_dir,
        }
    }
}

/// Registers the `/api` routes.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(handlers::health))
            .route("/districts", web::get().to(handlers::districts))
            .route("/districts/{id}", web::get().to(handlers::district))
            .route("/boundaries", web::get().to(handlers::boundaries))
            .route("/boundaries/lookup", web::get().to(handlers::lookup))
            .route("/view", web::post().to(handlers::view))
            .route("/valuation", web::post().to(handlers::valuation)),
    );
}

/// Loads the catalog and boundaries into shared state.
///
/// # Errors
///
/// Returns an `std::io::Error` if the embedded catalog or boundary data
/// fail to load.
pub fn load_state() -> std::io::Result<AppState> {
    let catalog = Catalog::load().map_err(std::io::Error::other)?;
    let boundaries = DistrictBoundaries::load().map_err(std::io::Error::other)?;

    for id in boundaries.unknown_ids(&catalog) {
        log::warn!("Boundary '{id}' has no district record; it will display the Oslo figures");
    }

    Ok(AppState {
        catalog: Arc::new(catalog),
        boundaries: Arc::new(boundaries),
    })
}

/// Starts the API server with the given configuration.
///
/// This is a regular async function: the caller provides the runtime (e.g.
/// via `#[actix_web::main]`) and initialises logging.
///
/// # Errors
///
/// Returns an `std::io::Result` error if the embedded data fail to load, or
/// the HTTP server fails to bind or encounters a runtime error.
#[allow(clippy::future_not_send)]
pub async fn run_server(config: ServerConfig) -> std::io::Result<()> {
    log::info!("Loading district catalog and boundaries...");
    let state = web::Data::new(load_state()?);
    log::info!(
        "Loaded {} districts",
        state.catalog.list_districts().len()
    );

    let static_dir = config.static_dir.filter(|dir| {
        let exists = dir.is_dir();
        if !exists {
            log::warn!("STATIC_DIR {} is not a directory, not serving it", dir.display());
        }
        exists
    });

    log::info!("Starting server on {}:{}", config.bind_addr, config.port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        let mut app = App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure_api);

        if let Some(dir) = &static_dir {
            // Serve frontend static files (production)
            app = app.service(Files::new("/", dir.clone()).index_file("index.html"));
        }

        app
    })
    .bind((config.bind_addr, config.port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: BTreeMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn config_defaults() {
        assert_eq!(ServerConfig::from_lookup(lookup(&[])), ServerConfig::default());
    }

    #[test]
    fn config_reads_variables() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("BIND_ADDR", "0.0.0.0"),
            ("PORT", "9090"),
            ("STATIC_DIR", "app/dist"),
        ]));
        assert_eq!(config.bind_addr, "0.0.0.0");
        assert_eq!(config.port, 9090);
        assert_eq!(config.static_dir, Some(PathBuf::from("app/dist")));
    }

    #[test]
    fn invalid_port_falls_back_to_default() {
        let config = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")]));
        assert_eq!(config.port, 8080);
        let config = ServerConfig::from_lookup(lookup(&[("PORT", "70000")]));
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn embedded_state_loads() {
        let state = load_state().unwrap();
        assert!(state.boundaries.unknown_ids(&state.catalog).is_empty());
    }
}
