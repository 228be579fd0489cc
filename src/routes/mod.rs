//! HTTP 라우트 구성
//!
//! ```text
//! /api/v1
//! ├── GET  /healthcheck
//! └── /users
//!     ├── POST /register   (multipart)
//!     ├── POST /login
//!     ├── POST /logout     (AuthMiddleware)
//!     └── POST /refresh
//! ```
//!
//! 추출기 설정(JSON 16KiB 제한, 멀티파트 제한, 임시 파일 디렉터리)도 여기서 등록하며,
//! 추출 실패는 모두 400 실패 봉투로 응답합니다.

use actix_multipart::form::{tempfile::TempFileConfig, MultipartFormConfig};
use actix_web::{web, HttpRequest};

use crate::config::UploadConfig;
use crate::errors::AppError;
use crate::handlers;

/// JSON 본문 최대 크기
pub const JSON_LIMIT_BYTES: usize = 16 * 1024;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig, uploads: &UploadConfig) {
    configure_extractors(cfg, uploads);

    cfg.service(
        web::scope("/api/v1")
            .service(handlers::health::health_check)
            .service(
                web::scope("/users")
                    .service(handlers::users::register_user)
                    .service(handlers::users::login_user)
                    .service(handlers::users::logout_user)
                    .service(handlers::users::refresh_access_token),
            ),
    );
}

fn configure_extractors(cfg: &mut web::ServiceConfig, uploads: &UploadConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(JSON_LIMIT_BYTES)
            .error_handler(|err, _req: &HttpRequest| {
                AppError::ValidationError(format!("Invalid JSON body: {}", err)).into()
            }),
    )
    .app_data(
        MultipartFormConfig::default()
            .total_limit(uploads.max_file_bytes * 2 + JSON_LIMIT_BYTES)
            .memory_limit(JSON_LIMIT_BYTES)
            .error_handler(|err, _req: &HttpRequest| {
                AppError::ValidationError(format!("Invalid multipart payload: {}", err)).into()
            }),
    )
    .app_data(
        TempFileConfig::default()
            .directory(&uploads.directory)
            .error_handler(|err, _req: &HttpRequest| {
                AppError::InternalError(format!("Failed to store uploaded file: {}", err)).into()
            }),
    );
}
