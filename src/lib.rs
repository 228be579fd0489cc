//! 사용자 계정 서비스 백엔드
//!
//! 이미지 업로드를 포함한 회원가입, 로그인/로그아웃,
//! JWT 액세스/리프레시 토큰 기반 세션 갱신을 제공하는 REST 서비스입니다.
//!
//! # Features
//!
//! - **회원가입**: 멀티파트 폼, 아바타(필수)/커버(선택) 이미지를 Cloudinary에 업로드
//! - **롤백**: 레코드 생성 실패 시 업로드된 이미지 삭제
//! - **JWT 인증**: 액세스/리프레시 토큰, httpOnly 쿠키
//! - **MongoDB**: 사용자 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트, 인증 미들웨어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 쿠키
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 회원가입/세션 흐름, 토큰, 비밀번호, 미디어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore trait
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB         │ ← 저장소 (+ Cloudinary)
//! └─────────────────┘
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test_support;
