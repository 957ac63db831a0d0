//! # Phonebook HTTP Server Module
//!
//! Axum-based HTTP surface for the phonebook service.
//!
//! # Endpoints
//!
//! - `/info` - HTML info page (record count + server time)
//! - `/api/persons` - person collection (list, create)
//! - `/api/persons/{id}` - single person (get, replace, delete)

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use routes::{person_routes, AppState};
pub use server::HttpServer;
