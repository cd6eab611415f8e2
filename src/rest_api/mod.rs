//! # dinedb REST API Module
//!
//! Read-only HTTP endpoints over the restaurant and dish catalog.
//!
//! # Endpoints
//!
//! - `/restaurants`, `/restaurants/details/:id`, `/restaurants/cuisine/:cuisine`
//! - `/restaurants/filter?isVeg&hasOutdoorSeating&isLuxury`
//! - `/restaurants/sort-by-rating`
//! - `/dishes`, `/dishes/details/:id`, `/dishes/filter?isVeg`, `/dishes/sort-by-price`
//! - `/health`
//! - `/` and static assets for the front end

pub mod config;
pub mod observe;
pub mod parser;
pub mod response;
pub mod routes;
pub mod server;

pub use config::ServerConfig;
pub use response::Outcome;
pub use routes::catalog_routes;
pub use server::{CatalogApp, CatalogServer};
