//! # 사용자 서비스 구현
//!
//! 회원가입 흐름과 사용자 레코드 생성/조회를 담당합니다.
//!
//! ## 회원가입 단계
//!
//! ```text
//! 검증 → 중복 확인 → 아바타 업로드 → 커버 업로드 → 레코드 생성 → 완료
//!                                                     │
//!                                                     └─ 실패 시 업로드된 이미지 삭제
//! ```
//!
//! 커버 업로드가 실패하면 이미 올라간 아바타는 삭제하지 않고 400을 반환합니다.
//! 업로드된 이미지 삭제는 레코드 생성 단계의 실패에서만 수행됩니다.

use std::sync::Arc;

use mongodb::bson::oid::ObjectId;
use validator::Validate;

use crate::domain::dto::users::request::RegisterUserRequest;
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::users::user::{User, UserProfile};
use crate::domain::models::media::MediaReference;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserStore;
use crate::services::auth::PasswordService;
use crate::services::media::MediaService;
use crate::utils::string_utils::normalize_username;

const REGISTRATION_ROLLED_BACK: &str =
    "Something went wrong while registering a user and images were deleted";

/// 새 사용자 레코드에 들어갈 값
#[derive(Debug)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub fullname: &'a str,
    pub password: &'a str,
    pub avatar_url: &'a str,
    pub cover_image_url: Option<&'a str>,
}

pub struct UserService {
    users: Arc<dyn UserStore>,
    passwords: Arc<PasswordService>,
    media: Arc<MediaService>,
}

impl UserService {
    pub fn new(
        users: Arc<dyn UserStore>,
        passwords: Arc<PasswordService>,
        media: Arc<MediaService>,
    ) -> Self {
        Self {
            users,
            passwords,
            media,
        }
    }

    /// 회원가입
    ///
    /// # 에러
    ///
    /// * `ValidationError` - 필수 필드 누락, 아바타 누락, 아바타/커버 업로드 실패
    /// * `ConflictError` - 사용자명 또는 이메일 중복 (미디어 호스트는 호출되지 않음)
    /// * `InternalError` - 레코드 생성 실패 (업로드된 이미지는 삭제됨)
    pub async fn register_user(&self, request: RegisterUserRequest) -> AppResult<UserResponse> {
        request.validate()?;

        let RegisterUserRequest {
            fullname,
            email,
            username,
            password,
            avatar,
            cover_image,
        } = request;
        let username = normalize_username(&username);

        if self
            .users
            .find_by_username_or_email(Some(&username), Some(&email))
            .await?
            .is_some()
        {
            log::info!("회원가입 거절 - 중복 사용자: {} / {}", username, email);
            return Err(AppError::ConflictError(
                "User with email or username already exists".to_string(),
            ));
        }

        let avatar = avatar
            .ok_or_else(|| AppError::ValidationError("Avatar file is missing".to_string()))?;

        let avatar = self
            .media
            .upload(Some(avatar))
            .await
            .ok_or_else(|| AppError::ValidationError("Failed to upload avatar".to_string()))?;

        let cover_image = match cover_image {
            Some(file) => Some(self.media.upload(Some(file)).await.ok_or_else(|| {
                AppError::ValidationError("Failed to upload cover image".to_string())
            })?),
            None => None,
        };

        let new_user = NewUser {
            username: &username,
            email: &email,
            fullname: &fullname,
            password: &password,
            avatar_url: &avatar.url,
            cover_image_url: cover_image.as_ref().map(|c| c.url.as_str()),
        };

        match self.create_and_fetch(new_user).await {
            Ok(profile) => {
                log::info!("회원가입 완료 - 사용자: {}", profile.username);
                Ok(profile.into())
            }
            Err(e) => {
                log::error!("사용자 생성 실패, 업로드된 이미지 삭제: {}", e);
                self.discard_media(&avatar, cover_image.as_ref()).await;
                Err(AppError::InternalError(REGISTRATION_ROLLED_BACK.to_string()))
            }
        }
    }

    async fn create_and_fetch(&self, new_user: NewUser<'_>) -> AppResult<UserProfile> {
        let user = self.create_user(new_user).await?;
        let user_id = user
            .id
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        self.find_profile(&user_id).await?.ok_or_else(|| {
            AppError::InternalError("Something went wrong while registering a user".to_string())
        })
    }

    /// 비밀번호를 해싱한 뒤 사용자 레코드를 저장합니다.
    pub async fn create_user(&self, new_user: NewUser<'_>) -> AppResult<User> {
        let password_hash = self.passwords.hash_password(new_user.password)?;

        let user = User::new(
            new_user.username.to_string(),
            new_user.email.to_string(),
            new_user.fullname.to_string(),
            new_user.avatar_url.to_string(),
            new_user.cover_image_url.map(str::to_string),
            password_hash,
        );

        self.users.insert(user).await
    }

    /// 민감 필드를 제외한 사용자 조회
    pub async fn find_profile(&self, user_id: &ObjectId) -> AppResult<Option<UserProfile>> {
        self.users.find_profile_by_id(user_id).await
    }

    async fn discard_media(&self, avatar: &MediaReference, cover_image: Option<&MediaReference>) {
        // 실패는 delete 내부에서 이미 기록됨
        let _ = self.media.delete(avatar).await;
        if let Some(cover_image) = cover_image {
            let _ = self.media.delete(cover_image).await;
        }
    }
}
