//! # Authentication Configuration Module
//!
//! JWT 토큰과 세션 쿠키 관련 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export ACCESS_TOKEN_SECRET="your-access-token-secret"
//! export REFRESH_TOKEN_SECRET="your-refresh-token-secret"
//! ```
//!
//! ## 선택 환경 변수
//!
//! ```bash
//! export ACCESS_TOKEN_EXPIRATION_MINUTES="60"
//! export REFRESH_TOKEN_EXPIRATION_DAYS="10"
//! ```
//!
//! 액세스 토큰과 리프레시 토큰은 서로 다른 시크릿으로 서명되므로
//! 한 종류의 토큰을 다른 용도로 재사용할 수 없습니다.

use super::{ConfigError, Environment, EnvSource};

/// JWT 토큰 서명/만료 설정
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// 액세스 토큰 서명 시크릿
    pub access_secret: String,
    /// 액세스 토큰 유효 시간 (분)
    pub access_expiration_minutes: i64,
    /// 리프레시 토큰 서명 시크릿
    pub refresh_secret: String,
    /// 리프레시 토큰 유효 기간 (일)
    pub refresh_expiration_days: i64,
}

impl JwtConfig {
    pub(crate) fn from_source(source: &EnvSource) -> Result<Self, ConfigError> {
        let config = Self {
            access_secret: source.required("ACCESS_TOKEN_SECRET")?,
            access_expiration_minutes: source.parse_or("ACCESS_TOKEN_EXPIRATION_MINUTES", 60)?,
            refresh_secret: source.required("REFRESH_TOKEN_SECRET")?,
            refresh_expiration_days: source.parse_or("REFRESH_TOKEN_EXPIRATION_DAYS", 10)?,
        };

        if config.access_secret == config.refresh_secret {
            log::warn!("⚠️ ACCESS_TOKEN_SECRET과 REFRESH_TOKEN_SECRET이 동일합니다");
        }

        Ok(config)
    }
}

/// 세션 쿠키 속성
///
/// `httpOnly`는 항상 켜져 있고, `secure`는 프로덕션 환경에서만 켜집니다.
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub secure: bool,
}

impl CookieConfig {
    pub fn for_env(env: &Environment) -> Self {
        Self {
            secure: env.is_production(),
        }
    }
}
