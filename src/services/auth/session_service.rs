//! 세션 서비스
//!
//! 로그인, 로그아웃, 액세스 토큰 갱신을 담당합니다.
//! 쿠키 설정은 핸들러 계층의 몫이고, 여기서는 토큰 쌍과 사용자 정보만 돌려줍니다.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::domain::dto::users::request::LoginRequest;
use crate::domain::dto::users::response::UserResponse;
use crate::domain::models::token::TokenPair;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserStore;
use crate::services::auth::{PasswordService, TokenService};
use crate::utils::string_utils::normalize_username;

/// 로그인 결과
#[derive(Debug)]
pub struct LoginOutcome {
    pub user: UserResponse,
    pub tokens: TokenPair,
}

pub struct SessionService {
    users: Arc<dyn UserStore>,
    passwords: Arc<PasswordService>,
    tokens: Arc<TokenService>,
}

impl SessionService {
    pub fn new(
        users: Arc<dyn UserStore>,
        passwords: Arc<PasswordService>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            users,
            passwords,
            tokens,
        }
    }

    /// 로그인
    ///
    /// 비밀번호가 틀리면 토큰을 발급하지 않고 401을 반환합니다.
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginOutcome> {
        request.validate()?;

        let username = request.username.as_deref().map(normalize_username);
        let password = request.password.as_deref().unwrap_or_default();

        let user = self
            .users
            .find_by_username_or_email(username.as_deref(), request.email.as_deref())
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if !self.passwords.verify_password(&user, password)? {
            log::info!("로그인 실패 - 비밀번호 불일치: {}", user.username);
            return Err(AppError::AuthenticationError(
                "Password is incorrect".to_string(),
            ));
        }

        let user_id = user
            .id
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        let tokens = self.tokens.issue_token_pair(&user_id).await?;

        let profile = self
            .users
            .find_profile_by_id(&user_id)
            .await?
            .ok_or_else(|| AppError::InternalError("Something went wrong while logging in".to_string()))?;

        log::info!("로그인 성공 - 사용자: {}, ID: {}", profile.username, user_id.to_hex());

        Ok(LoginOutcome {
            user: profile.into(),
            tokens,
        })
    }

    /// 로그아웃: 저장된 리프레시 토큰을 지웁니다.
    pub async fn logout(&self, user_id: &ObjectId) -> AppResult<()> {
        self.users.set_refresh_token(user_id, None).await?;

        log::info!("로그아웃 - 사용자 ID: {}", user_id.to_hex());
        Ok(())
    }

    /// 액세스 토큰 갱신
    ///
    /// 제출된 리프레시 토큰은 서명과 만료를 통과하고, 사용자 문서에 저장된
    /// 마지막 토큰과 같아야 합니다. 성공하면 새 토큰 쌍으로 교체됩니다.
    /// 같은 토큰으로 동시에 갱신하면 하나만 성공합니다.
    pub async fn refresh(&self, refresh_token: Option<&str>) -> AppResult<TokenPair> {
        let refresh_token = refresh_token
            .ok_or_else(|| AppError::ValidationError("Refresh token is required".to_string()))?;

        let user_id = self.tokens.validate_refresh_token(refresh_token)?;

        let user = self
            .users
            .find_by_id(&user_id)
            .await?
            .ok_or_else(|| AppError::AuthenticationError("Invalid refresh token".to_string()))?;

        if user.refresh_token.as_deref() != Some(refresh_token) {
            log::warn!("저장된 리프레시 토큰과 불일치 - 사용자 ID: {}", user_id.to_hex());
            return Err(AppError::AuthenticationError(
                "Invalid refresh token".to_string(),
            ));
        }

        let tokens = self.tokens.rotate_token_pair(&user, refresh_token).await?;

        log::info!("액세스 토큰 갱신 - 사용자 ID: {}", user_id.to_hex());
        Ok(tokens)
    }
}
