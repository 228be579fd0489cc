//! 인증 요청관련 DTO
//!
//! 로그인과 토큰 갱신 요청 본문을 매핑합니다.
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::utils::string_utils::deserialize_optional_string;

/// 로그인 요청 구조체
///
/// 이메일과 사용자명 중 하나 이상, 그리고 비밀번호가 필요합니다.
/// 공백만 있는 값은 누락으로 취급합니다. 비밀번호는 받은 그대로 검증에 씁니다.
#[derive(Debug, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_login_request"))]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,
}

fn validate_login_request(request: &LoginRequest) -> Result<(), ValidationError> {
    if request.email.is_none() && request.username.is_none() {
        return Err(ValidationError::new("identity")
            .with_message("Email or username is required".into()));
    }
    if request.password.as_deref().is_none_or(|p| p.trim().is_empty()) {
        return Err(ValidationError::new("password").with_message("Password is required".into()));
    }
    Ok(())
}

/// 리프레시 토큰 요청 구조체
///
/// 쿠키에 토큰이 없을 때 본문의 `refreshToken`을 대신 사용합니다.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub refresh_token: Option<String>,
}
