//! # Data Transfer Objects Module
//!
//! HTTP 계층과 서비스 계층 사이를 오가는 요청/응답 타입을 정의합니다.
//!
//! - [`api_response`] - 성공/실패 응답 봉투
//! - [`users`] - 회원가입, 로그인, 토큰 갱신 요청과 사용자 응답

pub mod api_response;
pub mod users;

pub use api_response::*;
pub use users::*;
