//! 미디어 호스팅(Cloudinary) 설정

use super::{ConfigError, EnvSource};

/// Cloudinary 업로드 API 자격 증명과 접속 정보
#[derive(Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    /// API 베이스 URL (기본값: "https://api.cloudinary.com")
    pub api_base: String,
    /// 업로드/삭제 요청 타임아웃 (초)
    pub timeout_seconds: u64,
}

impl CloudinaryConfig {
    pub(crate) fn from_source(source: &EnvSource) -> Result<Self, ConfigError> {
        Ok(Self {
            cloud_name: source.required("CLOUDINARY_CLOUD_NAME")?,
            api_key: source.required("CLOUDINARY_API_KEY")?,
            api_secret: source.required("CLOUDINARY_API_SECRET")?,
            api_base: source
                .get_or("CLOUDINARY_API_BASE", "https://api.cloudinary.com")
                .trim_end_matches('/')
                .to_string(),
            timeout_seconds: source.parse_or("MEDIA_TIMEOUT_SECONDS", 30)?,
        })
    }
}

// api_secret이 로그에 남지 않도록 직접 구현
impl std::fmt::Debug for CloudinaryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudinaryConfig")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_base", &self.api_base)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}
