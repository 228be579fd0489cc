//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 `main`에서 한 번 생성되어 [`AppState`](crate::state::AppState)를 통해 공유됩니다.
//!
//! - [`auth`] - 토큰, 비밀번호, 세션
//! - [`media`] - 원격 미디어 호스트 업로드/삭제
//! - [`users`] - 회원가입 흐름

pub mod auth;
pub mod media;
pub mod users;
