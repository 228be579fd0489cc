//! 사용자 관리 서비스 모듈
//!
//! 회원가입 흐름(검증, 중복 확인, 이미지 업로드, 레코드 생성, 실패 시 이미지 삭제)과
//! 민감 필드를 제외한 사용자 조회를 제공합니다.

pub mod user_service;

pub use user_service::*;
