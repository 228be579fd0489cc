//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 모듈로, 저장되는 엔티티와 HTTP 계약,
//! 그리고 서비스 사이를 오가는 모델을 정의합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB `users` 컬렉션 문서
//! ├── dto       - 요청/응답 타입과 응답 봉투
//! └── models    - JWT 클레임, 인증 사용자, 미디어 업로드 모델
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db, 미디어 호스트)
//! ```
//!
//! ## 민감 정보 경계
//!
//! [`entities::User`]는 비밀번호 해시와 리프레시 토큰을 포함합니다.
//! 응답은 항상 [`entities::UserProfile`]에서 만든 [`dto::UserResponse`]를 사용하므로
//! 두 필드가 클라이언트로 나가는 경로가 없습니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
