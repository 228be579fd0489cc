use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::users::user::UserProfile;

/// 사용자 응답 DTO
///
/// 비밀번호와 리프레시 토큰 필드가 구조적으로 존재하지 않습니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub fullname: String,
    pub avatar: String,
    pub cover_image: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserProfile> for UserResponse {
    fn from(profile: UserProfile) -> Self {
        let UserProfile {
            id,
            username,
            email,
            fullname,
            avatar,
            cover_image,
            created_at,
            updated_at,
        } = profile;

        Self {
            id: id.to_hex(),
            username,
            email,
            fullname,
            avatar,
            cover_image,
            created_at: created_at.to_chrono(),
            updated_at: updated_at.to_chrono(),
        }
    }
}
