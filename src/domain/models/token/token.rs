//! JWT 인증 토큰 구조체 및 페어링 된 세트
//!
//! RFC 7519 JWT 표준 클레임과 2개의 용도별 토큰을 페어링 한 정보를 정의합니다.
use serde::{Deserialize, Serialize};

/// 액세스 토큰 클레임
///
/// 요청마다 사용되는 단기 토큰으로, 사용자 식별 정보를 함께 담습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessTokenClaims {
    /// 토큰의 주체 (사용자 ObjectId 16진수 문자열)
    pub sub: String,
    pub email: String,
    pub username: String,
    pub fullname: String,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}

/// 리프레시 토큰 클레임
///
/// 개인정보 보호를 위해 사용자 ID만 포함합니다.
/// `jti`는 같은 초에 발급된 토큰끼리도 서로 다르도록 보장합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenClaims {
    pub sub: String,
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

/// JWT 토큰 쌍 구조체
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    /// 액세스 토큰 (API 접근용 단기 토큰)
    pub access_token: String,
    /// 리프레시 토큰 (토큰 갱신용 장기 토큰)
    pub refresh_token: String,
}
