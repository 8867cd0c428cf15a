//! Bakery API: read-only REST endpoints over bakeries and their baked goods.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use models::{BakedGood, Bakery, BakeryRef, PricedGood};
pub use response::{error_body, json_response};
pub use routes::{app, catalog_routes, common_routes};
pub use service::CatalogService;
pub use state::AppState;
pub use store::{connect, ensure_tables};
