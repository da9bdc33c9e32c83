/// HTTP handlers for blog-service
///
/// - Posts: create, read, update, delete
/// - Health: liveness probe
pub mod posts;

pub use posts::{create_post, delete_post, get_all_posts, get_post, update_post};

use crate::error::AppError;
use actix_web::{web, HttpResponse};

/// Liveness probe
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

/// JSON extractor settings: malformed or incomplete bodies become a 400
/// `validation_error`
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::error!(error = %err, "Invalid request body");
        AppError::Validation(err.to_string()).into()
    })
}

/// Register every route of the service
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/health", web::get().to(health))
        .service(
            web::scope("/api/v1").service(
                web::scope("/posts")
                    .service(
                        web::resource("")
                            .route(web::post().to(create_post))
                            .route(web::get().to(get_all_posts)),
                    )
                    .service(
                        web::resource("/{post_id}")
                            .route(web::get().to(get_post))
                            .route(web::put().to(update_post))
                            .route(web::delete().to(delete_post)),
                    ),
            ),
        );
}
