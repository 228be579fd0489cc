//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! MongoDB `users` 컬렉션의 문서와 1:1로 매핑되며, 필드 이름은 camelCase로 저장됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// 저장소 내부에서만 사용되는 전체 문서입니다. 비밀번호 해시와 리프레시 토큰을
/// 포함하므로 외부로 직접 노출하지 않고, [`UserProfile`]을 통해서만 응답을 만듭니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자명 (unique, 소문자)
    pub username: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 전체 이름
    pub fullname: String,
    /// 아바타 이미지 URL (필수)
    pub avatar: String,
    /// 커버 이미지 URL (없으면 빈 문자열)
    #[serde(default)]
    pub cover_image: String,
    /// bcrypt 해시된 비밀번호
    pub password: String,
    /// 마지막으로 발급된 리프레시 토큰
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// `password_hash`는 이미 해싱된 값이어야 합니다.
    /// 커버 이미지가 없으면 빈 문자열로 저장됩니다.
    pub fn new(
        username: String,
        email: String,
        fullname: String,
        avatar: String,
        cover_image: Option<String>,
        password_hash: String,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username,
            email,
            fullname,
            avatar,
            cover_image: cover_image.unwrap_or_default(),
            password: password_hash,
            refresh_token: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 비밀번호와 리프레시 토큰을 제외한 공개 뷰
    pub fn profile(&self) -> Option<UserProfile> {
        Some(UserProfile {
            id: self.id?,
            username: self.username.clone(),
            email: self.email.clone(),
            fullname: self.fullname.clone(),
            avatar: self.avatar.clone(),
            cover_image: self.cover_image.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// 민감 필드가 제거된 사용자 문서
///
/// `password`, `refreshToken`을 제외하는 프로젝션으로 조회한 결과를 그대로 역직렬화합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub username: String,
    pub email: String,
    pub fullname: String,
    pub avatar: String,
    #[serde(default)]
    pub cover_image: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    fn sample() -> User {
        User::new(
            "janedoe".to_string(),
            "jane@x.com".to_string(),
            "Jane Doe".to_string(),
            "https://media.example/avatar.png".to_string(),
            None,
            "$2b$04$hash".to_string(),
        )
    }

    #[test]
    fn test_new_user_defaults_cover_image_to_empty() {
        let user = sample();

        assert_eq!(user.cover_image, "");
        assert!(user.refresh_token.is_none());
        assert!(user.id.is_none());
        assert!(user.profile().is_none());
    }

    #[test]
    fn test_document_uses_camel_case_field_names() {
        let mut user = sample();
        user.id = Some(ObjectId::new());
        user.refresh_token = Some("token".to_string());

        let doc = bson::to_document(&user).unwrap();

        assert!(doc.contains_key("_id"));
        assert!(doc.contains_key("coverImage"));
        assert!(doc.contains_key("refreshToken"));
        assert!(doc.contains_key("createdAt"));
        assert!(!doc.contains_key("cover_image"));
    }

    #[test]
    fn test_profile_reads_projected_document() {
        let mut user = sample();
        user.id = Some(ObjectId::new());

        let mut doc = bson::to_document(&user).unwrap();
        doc.remove("password");
        doc.remove("refreshToken");

        let profile: UserProfile = bson::from_document(doc).unwrap();
        assert_eq!(profile.id, user.id.unwrap());
        assert_eq!(profile.username, "janedoe");
    }
}
