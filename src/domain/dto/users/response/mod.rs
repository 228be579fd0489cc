//! 사용자 응답 DTO 모듈
//!
//! 모든 응답은 비밀번호와 리프레시 토큰이 제거된 사용자 뷰만 포함합니다.

pub mod user_response;

pub use user_response::UserResponse;
