/// Blog Service Library
///
/// CRUD REST service for blog posts backed by an in-memory, thread-safe store.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and route registration
/// - `models`: The post entity and its validation rules
/// - `services`: Business logic layer
/// - `db`: Post repository and startup data loading
/// - `middleware`: CORS policy
/// - `error`: Error types and HTTP error responses
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
