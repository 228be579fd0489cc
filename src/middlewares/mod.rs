//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용하는 미들웨어를 제공합니다.
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - 쿠키 또는 Bearer 헤더의 액세스 토큰 검증
//! - 사용자 정보를 request extension에 저장
//!
//! ## 특정 라우트에만 적용
//! ```rust,ignore
//! web::scope("/api/v1/users")
//!     .service(
//!         web::resource("/logout")
//!             .wrap(AuthMiddleware::required())
//!             .route(web::post().to(logout)),
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
