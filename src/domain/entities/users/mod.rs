//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 주요 구성 요소
//!
//! - [`User`](user::User) - `users` 컬렉션의 전체 문서 (비밀번호 해시, 리프레시 토큰 포함)
//! - [`UserProfile`](user::UserProfile) - 민감 필드를 제외한 프로젝션 결과
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::new(
//!     "janedoe".to_string(),
//!     "jane@x.com".to_string(),
//!     "Jane Doe".to_string(),
//!     avatar.url,
//!     cover.map(|c| c.url),
//!     password_hash,
//! );
//! ```

pub mod user;

pub use user::*;
