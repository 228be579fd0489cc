//! # HTTP 핸들러 모듈
//!
//! 요청을 추출기로 파싱하고 서비스 계층을 호출한 뒤 [`ApiResponse`] 봉투로 응답합니다.
//! 에러는 `AppError`가 `ResponseError`로 변환하므로 핸들러는 `?`로 전파만 합니다.
//!
//! - [`users`] - 회원가입, 로그인, 로그아웃, 토큰 갱신
//! - [`health`] - 헬스 체크
//! - [`cookies`] - 세션 쿠키 생성/삭제
//!
//! [`ApiResponse`]: crate::domain::dto::api_response::ApiResponse

pub mod cookies;
pub mod health;
pub mod users;
