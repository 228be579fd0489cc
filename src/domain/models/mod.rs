//! # Domain Models Module
//!
//! 영속화되지 않는 도메인 모델을 정의합니다.
//!
//! - [`token`] - JWT 클레임과 토큰 쌍
//! - [`auth`] - 인증 미들웨어가 요청에 첨부하는 사용자 정보
//! - [`media`] - 미디어 호스트가 돌려주는 업로드 참조와 로컬 임시 파일

pub mod auth;
pub mod media;
pub mod token;

pub use auth::*;
pub use media::*;
pub use token::*;
