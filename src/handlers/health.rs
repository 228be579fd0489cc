use actix_web::{get, HttpResponse};
use serde_json::json;

use crate::domain::dto::api_response::ApiResponse;

/// 헬스 체크
///
/// # Endpoint
/// `GET /api/v1/healthcheck`
#[get("/healthcheck")]
pub async fn health_check() -> HttpResponse {
    let data = json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    HttpResponse::Ok().json(ApiResponse::new(200, data, "Health check passed"))
}
