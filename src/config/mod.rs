//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 프로세스 시작 시 [`AppConfig::from_env`]로 한 번만 구성되며,
//! 이후에는 생성자 인자로 각 서비스(토큰, 비밀번호, 미디어 업로드)에 전달됩니다.
//! 비즈니스 로직은 환경 변수를 직접 읽지 않습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 환경, 서버, 데이터베이스, 업로드, 비밀번호 설정
//! - [`auth_config`] - JWT, 세션 쿠키 설정
//! - [`media_config`] - Cloudinary 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 필수
//! export ACCESS_TOKEN_SECRET="..."
//! export REFRESH_TOKEN_SECRET="..."
//! export CLOUDINARY_CLOUD_NAME="..."
//! export CLOUDINARY_API_KEY="..."
//! export CLOUDINARY_API_SECRET="..."
//!
//! # 선택
//! export ENVIRONMENT="production"   # development, test, staging, production
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="user_service_dev"
//! export CORS_ORIGIN="http://localhost:3000"
//! export BCRYPT_COST="12"
//! export UPLOAD_DIR="./public/temp"
//! ```

pub mod auth_config;
pub mod data_config;
pub mod media_config;

pub use auth_config::*;
pub use data_config::*;
pub use media_config::*;

use std::collections::HashMap;
use std::str::FromStr;

use thiserror::Error;

/// 설정 로딩 에러
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    Missing(String),

    #[error("environment variable {key} has an invalid value: {value}")]
    Invalid { key: String, value: String },
}

/// 설정값을 읽어오는 키-값 소스
///
/// 운영 환경에서는 프로세스 환경 변수 스냅샷을, 테스트에서는 고정된 쌍을 사용합니다.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    values: HashMap<String, String>,
}

impl EnvSource {
    /// 현재 프로세스 환경 변수 스냅샷
    pub fn from_process() -> Self {
        Self {
            values: std::env::vars().collect(),
        }
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            values: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// 빈 문자열은 설정되지 않은 것으로 취급합니다.
    pub fn get(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    pub fn required(&self, key: &str) -> Result<String, ConfigError> {
        self.get(key).ok_or_else(|| ConfigError::Missing(key.to_string()))
    }

    pub fn parse_or<T: FromStr>(&self, key: &str, default: T) -> Result<T, ConfigError> {
        match self.get(key) {
            None => Ok(default),
            Some(value) => value.parse::<T>().map_err(|_| ConfigError::Invalid {
                key: key.to_string(),
                value,
            }),
        }
    }
}

/// 애플리케이션 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub cookies: CookieConfig,
    pub password: PasswordConfig,
    pub cloudinary: CloudinaryConfig,
    pub uploads: UploadConfig,
}

impl AppConfig {
    /// 프로세스 환경 변수로부터 설정을 구성합니다.
    ///
    /// # Errors
    ///
    /// * `ConfigError::Missing` - 필수 시크릿이 없는 경우
    /// * `ConfigError::Invalid` - 숫자 설정값 파싱 실패
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(&EnvSource::from_process())
    }

    pub fn from_source(source: &EnvSource) -> Result<Self, ConfigError> {
        let environment = Environment::from_source(source);

        Ok(Self {
            server: ServerConfig::from_source(source)?,
            database: DatabaseConfig::from_source(source),
            jwt: JwtConfig::from_source(source)?,
            cookies: CookieConfig::for_env(&environment),
            password: PasswordConfig::from_source(source, &environment),
            cloudinary: CloudinaryConfig::from_source(source)?,
            uploads: UploadConfig::from_source(source)?,
            environment,
        })
    }
}
