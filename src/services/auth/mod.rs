//! 인증 및 보안 서비스 모듈
//!
//! - [`token_service`] - JWT 액세스/리프레시 토큰 발급과 검증
//! - [`password_service`] - bcrypt 비밀번호 해싱과 검증
//! - [`session_service`] - 로그인, 로그아웃, 토큰 갱신
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명 (액세스/리프레시 시크릿 분리)
//! - 마지막으로 발급된 리프레시 토큰만 갱신에 사용 가능

pub mod password_service;
pub mod session_service;
pub mod token_service;

pub use password_service::*;
pub use session_service::*;
pub use token_service::*;
