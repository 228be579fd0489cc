//! Cloudinary REST API 클라이언트
//!
//! 서명된 업로드(`/v1_1/{cloud}/auto/upload`)와 삭제(`/v1_1/{cloud}/{resource_type}/destroy`)만 사용합니다.
//! 삭제는 업로드 때 호스트가 감지한 리소스 종류의 엔드포인트로 보내야 합니다.
//! 요청 서명은 파라미터를 키 순으로 정렬해 `k=v&k=v` 형태로 이은 뒤
//! API 시크릿을 붙여 SHA-256 해시한 16진수 문자열입니다.

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::config::CloudinaryConfig;
use crate::domain::models::media::MediaReference;
use crate::errors::{AppError, AppResult};

/// 원격 미디어 호스트 추상화
///
/// 실패는 모두 [`AppError::ExternalServiceError`]로 보고됩니다.
#[async_trait]
pub trait MediaHost: Send + Sync {
    /// 로컬 파일을 올리고 참조를 돌려받습니다. 리소스 종류는 호스트가 감지합니다.
    async fn upload(&self, path: &Path, file_name: &str) -> AppResult<MediaReference>;

    /// 업로드 참조의 식별자와 리소스 종류로 원격 파일을 삭제합니다.
    async fn destroy(&self, reference: &MediaReference) -> AppResult<()>;
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
    url: Option<String>,
    public_id: String,
    resource_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

pub struct CloudinaryClient {
    config: CloudinaryConfig,
    http: reqwest::Client,
}

impl CloudinaryClient {
    pub fn new(config: CloudinaryConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::InternalError(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self { config, http })
    }

    fn endpoint(&self, resource_type: &str, action: &str) -> String {
        format!(
            "{}/v1_1/{}/{}/{}",
            self.config.api_base, self.config.cloud_name, resource_type, action
        )
    }

    fn destroy_endpoint(&self, reference: &MediaReference) -> String {
        self.endpoint(&reference.resource_type, "destroy")
    }

    fn timestamp() -> String {
        chrono::Utc::now().timestamp().to_string()
    }
}

/// 요청 파라미터 서명
pub(crate) fn sign_params(params: &[(&str, String)], api_secret: &str) -> String {
    let mut sorted: Vec<&(&str, String)> = params.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let to_sign = sorted
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    let digest = Sha256::digest(format!("{}{}", to_sign, api_secret).as_bytes());
    format!("{:x}", digest)
}

#[async_trait]
impl MediaHost for CloudinaryClient {
    async fn upload(&self, path: &Path, file_name: &str) -> AppResult<MediaReference> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            AppError::ExternalServiceError(format!("업로드 파일 읽기 실패 {}: {}", path.display(), e))
        })?;

        let timestamp = Self::timestamp();
        let signature = sign_params(&[("timestamp", timestamp.clone())], &self.config.api_secret);

        let form = Form::new()
            .text("api_key", self.config.api_key.clone())
            .text("timestamp", timestamp)
            .text("signature", signature)
            .text("signature_algorithm", "sha256")
            .part("file", Part::bytes(bytes).file_name(file_name.to_string()));

        let response = self
            .http
            .post(self.endpoint("auto", "upload"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Cloudinary 업로드 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Cloudinary 업로드 실패 ({}): {}",
                status, body
            )));
        }

        let uploaded = response
            .json::<UploadResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Cloudinary 응답 파싱 실패: {}", e)))?;

        let url = uploaded
            .secure_url
            .or(uploaded.url)
            .ok_or_else(|| AppError::ExternalServiceError("Cloudinary 응답에 URL이 없습니다".to_string()))?;

        Ok(MediaReference {
            url,
            public_id: uploaded.public_id,
            resource_type: uploaded.resource_type.unwrap_or_else(|| "image".to_string()),
        })
    }

    async fn destroy(&self, reference: &MediaReference) -> AppResult<()> {
        let public_id = reference.public_id.as_str();
        let timestamp = Self::timestamp();
        let signature = sign_params(
            &[
                ("public_id", public_id.to_string()),
                ("timestamp", timestamp.clone()),
            ],
            &self.config.api_secret,
        );

        let form = Form::new()
            .text("api_key", self.config.api_key.clone())
            .text("public_id", public_id.to_string())
            .text("timestamp", timestamp)
            .text("signature", signature)
            .text("signature_algorithm", "sha256");

        let response = self
            .http
            .post(self.destroy_endpoint(reference))
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Cloudinary 삭제 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalServiceError(format!(
                "Cloudinary 삭제 실패 ({}): {}",
                response.status(),
                public_id
            )));
        }

        let destroyed = response
            .json::<DestroyResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Cloudinary 응답 파싱 실패: {}", e)))?;

        match destroyed.result.as_str() {
            "ok" => Ok(()),
            other => Err(AppError::ExternalServiceError(format!(
                "Cloudinary 삭제 결과 {}: {}",
                other, public_id
            ))),
        }
    }
}
