//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! MongoDB 문서와 직접 매핑되는 데이터 구조체들을 포함합니다.
//!
//! ## MongoDB 통합
//!
//! - **BSON 직렬화**: `serde`와 `bson`을 통한 자동 변환
//! - **ObjectId 지원**: MongoDB의 `_id` 필드와 매핑
//! - **camelCase 필드**: `coverImage`, `refreshToken`, `createdAt` 등
//!
//! ## 주의사항
//!
//! 엔티티는 저장소 내부 표현입니다. HTTP 응답은 항상 `dto` 모듈의
//! 응답 타입으로 변환한 뒤 내보냅니다.

pub mod users;

pub use users::*;
