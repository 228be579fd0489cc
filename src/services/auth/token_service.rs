//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 액세스 토큰과 리프레시 토큰은 서로 다른 시크릿으로 HS256 서명되며,
//! 마지막으로 발급된 리프레시 토큰은 사용자 문서에 저장됩니다.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use mongodb::bson::oid::ObjectId;
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::domain::entities::users::user::User;
use crate::domain::models::token::{AccessTokenClaims, RefreshTokenClaims, TokenPair};
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserStore;

const TOKEN_GENERATION_FAILED: &str = "Something went wrong while generating tokens";

/// JWT 토큰 관리 서비스
///
/// 액세스 토큰(기본 60분)과 리프레시 토큰(기본 10일)을 발급/검증합니다.
pub struct TokenService {
    config: JwtConfig,
    users: Arc<dyn UserStore>,
}

impl TokenService {
    pub fn new(config: JwtConfig, users: Arc<dyn UserStore>) -> Self {
        Self { config, users }
    }

    /// 사용자를 위한 JWT 액세스 토큰 생성
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 생성 실패 또는 사용자 ID 없음
    pub fn issue_access_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(self.config.access_expiration_minutes);

        let claims = AccessTokenClaims {
            sub: user
                .id_string()
                .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?,
            email: user.email.clone(),
            username: user.username.clone(),
            fullname: user.fullname.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.config.access_secret.as_bytes());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 리프레시 토큰 생성
    ///
    /// 사용자 ID만 담고, `jti`로 연속 발급된 토큰이 서로 다르도록 합니다.
    pub fn issue_refresh_token(&self, user_id: &ObjectId) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now + Duration::days(self.config.refresh_expiration_days);

        let claims = RefreshTokenClaims {
            sub: user_id.to_hex(),
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.config.refresh_secret.as_bytes());

        encode(&Header::default(), &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("리프레시 토큰 생성 실패: {}", e)))
    }

    /// 토큰 쌍 생성 및 리프레시 토큰 저장
    ///
    /// 사용자가 없으면 `NotFound`, 생성이나 저장이 실패하면
    /// 원인을 로그에 남기고 `InternalError`를 반환합니다.
    pub async fn issue_token_pair(&self, user_id: &ObjectId) -> AppResult<TokenPair> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let pair = self.generate_pair(&user).map_err(|e| {
            log::error!("토큰 생성 실패 - 사용자: {}, 에러: {}", user_id.to_hex(), e);
            AppError::InternalError(TOKEN_GENERATION_FAILED.to_string())
        })?;

        self.users
            .set_refresh_token(user_id, Some(&pair.refresh_token))
            .await
            .map_err(|e| {
                log::error!("리프레시 토큰 저장 실패 - 사용자: {}, 에러: {}", user_id.to_hex(), e);
                AppError::InternalError(TOKEN_GENERATION_FAILED.to_string())
            })?;

        log::debug!("토큰 쌍 발급 - 사용자: {}", user_id.to_hex());
        Ok(pair)
    }

    /// 제출된 리프레시 토큰을 새 토큰 쌍으로 교체합니다.
    ///
    /// 저장된 토큰이 `current`와 같을 때만 교체되며, 그 사이 다른 요청이
    /// 먼저 교체했다면 401을 반환합니다.
    pub async fn rotate_token_pair(&self, user: &User, current: &str) -> AppResult<TokenPair> {
        let user_id = user
            .id
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        let pair = self.generate_pair(user).map_err(|e| {
            log::error!("토큰 생성 실패 - 사용자: {}, 에러: {}", user_id.to_hex(), e);
            AppError::InternalError(TOKEN_GENERATION_FAILED.to_string())
        })?;

        let replaced = self
            .users
            .replace_refresh_token(&user_id, current, &pair.refresh_token)
            .await
            .map_err(|e| {
                log::error!("리프레시 토큰 교체 실패 - 사용자: {}, 에러: {}", user_id.to_hex(), e);
                AppError::InternalError(TOKEN_GENERATION_FAILED.to_string())
            })?;

        if !replaced {
            log::warn!("리프레시 토큰이 이미 교체됨 - 사용자: {}", user_id.to_hex());
            return Err(AppError::AuthenticationError(
                "Invalid refresh token".to_string(),
            ));
        }

        Ok(pair)
    }

    fn generate_pair(&self, user: &User) -> AppResult<TokenPair> {
        let user_id = user
            .id
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        Ok(TokenPair {
            access_token: self.issue_access_token(user)?,
            refresh_token: self.issue_refresh_token(&user_id)?,
        })
    }

    /// 리프레시 토큰 검증 후 사용자 ID 반환
    ///
    /// 서명 불일치, 만료, 형식 오류 모두 401로 처리합니다.
    pub fn validate_refresh_token(&self, token: &str) -> AppResult<ObjectId> {
        let decoding_key = DecodingKey::from_secret(self.config.refresh_secret.as_bytes());

        let claims = decode::<RefreshTokenClaims>(token, &decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| {
                log::debug!("리프레시 토큰 검증 실패: {}", e);
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::AuthenticationError("Refresh token is expired".to_string())
                    }
                    _ => AppError::AuthenticationError("Invalid refresh token".to_string()),
                }
            })?;

        ObjectId::parse_str(&claims.sub)
            .map_err(|_| AppError::AuthenticationError("Invalid refresh token".to_string()))
    }

    /// 액세스 토큰 검증 및 클레임 추출
    pub fn validate_access_token(&self, token: &str) -> AppResult<AccessTokenClaims> {
        let decoding_key = DecodingKey::from_secret(self.config.access_secret.as_bytes());

        decode::<AccessTokenClaims>(token, &decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| {
                log::debug!("액세스 토큰 검증 실패: {}", e);
                AppError::AuthenticationError("Invalid access token".to_string())
            })
    }
}
