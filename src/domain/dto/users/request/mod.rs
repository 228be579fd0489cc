//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 멀티파트/JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! 검증하는 역할을 담당합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: 멀티파트/JSON 구조와 타입 일치성 (실패 시 400)
//! 2. **형식 검증**: `validator` 크레이트를 통한 필수값 규칙
//! 3. **비즈니스 검증**: 중복 확인 등은 서비스 계층에서 수행

pub mod auth_request;
pub mod register_user;

pub use auth_request::*;
pub use register_user::*;
