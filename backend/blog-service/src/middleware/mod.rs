/// HTTP middleware for blog-service
///
/// Request logging is provided by `tracing_actix_web::TracingLogger`; this
/// module builds the CORS policy from configuration.
use crate::config::CorsConfig;
use actix_cors::Cors;
use actix_web::http::{header, Method};

/// Build the CORS middleware.
///
/// `allowed_origins` is a comma-separated list; `*` allows any origin.
pub fn cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default();
    for origin in config.allowed_origins.split(',') {
        let origin = origin.trim();
        if origin.is_empty() {
            continue;
        }
        if origin == "*" {
            cors = cors.allow_any_origin();
        } else {
            cors = cors.allowed_origin(origin);
        }
    }

    cors.allowed_methods([
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ])
    .allow_any_header()
    .expose_headers([header::CONTENT_LENGTH])
    .max_age(3600)
}
