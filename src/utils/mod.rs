//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 요청 문자열 정리, 사용자명 정규화

pub mod string_utils;
