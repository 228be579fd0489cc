//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경, 업로드 및 보안 관련 설정을 관리합니다.

use std::path::PathBuf;

use super::{ConfigError, EnvSource};

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 환경 변수에서 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 값을 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub(crate) fn from_source(source: &EnvSource) -> Self {
        let raw = source
            .get("ENVIRONMENT")
            .or_else(|| source.get("NODE_ENV"))
            .unwrap_or_else(|| "production".to_string());
        Self::from_str(&raw)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 패스워드 해싱 설정
#[derive(Debug, Clone)]
pub struct PasswordConfig {
    /// bcrypt cost (4-15)
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    /// `BCRYPT_COST`가 유효 범위(4-15)이면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub(crate) fn from_source(source: &EnvSource, env: &Environment) -> Self {
        let bcrypt_cost = source
            .get("BCRYPT_COST")
            .and_then(|raw| raw.parse::<u32>().ok())
            .filter(|cost| (4..=15).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(env));

        Self { bcrypt_cost }
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 호스트 주소. 기본값: "0.0.0.0"
    pub host: String,
    /// 포트 번호. 기본값: 8080
    pub port: u16,
    /// 허용할 CORS Origin. 기본값: "http://localhost:3000"
    pub cors_origin: String,
}

impl ServerConfig {
    pub(crate) fn from_source(source: &EnvSource) -> Result<Self, ConfigError> {
        Ok(Self {
            host: source.get_or("HOST", "0.0.0.0"),
            port: source.parse_or("PORT", 8080)?,
            cors_origin: source.get_or("CORS_ORIGIN", "http://localhost:3000"),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// MongoDB 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// `MONGODB_URI` (기본값: "mongodb://localhost:27017")
    pub uri: String,
    /// `DATABASE_NAME` (기본값: "user_service_dev")
    pub name: String,
}

impl DatabaseConfig {
    pub(crate) fn from_source(source: &EnvSource) -> Self {
        Self {
            uri: source.get_or("MONGODB_URI", "mongodb://localhost:27017"),
            name: source.get_or("DATABASE_NAME", "user_service_dev"),
        }
    }
}

/// 멀티파트 업로드 임시 저장 설정
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// 업로드 파일이 잠시 머무는 로컬 디렉터리
    pub directory: PathBuf,
    /// 파일 하나당 최대 크기 (바이트)
    pub max_file_bytes: usize,
}

impl UploadConfig {
    pub(crate) fn from_source(source: &EnvSource) -> Result<Self, ConfigError> {
        Ok(Self {
            directory: PathBuf::from(source.get_or("UPLOAD_DIR", "./public/temp")),
            max_file_bytes: source.parse_or("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)?,
        })
    }
}
