//! 미디어 호스팅 서비스 모듈
//!
//! - [`cloudinary`] - [`MediaHost`](cloudinary::MediaHost) trait과 Cloudinary 구현체
//! - [`media_service`] - 임시 파일 업로드와 최선 노력 삭제

pub mod cloudinary;
pub mod media_service;

pub use cloudinary::*;
pub use media_service::*;
