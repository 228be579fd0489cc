//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층입니다.
//! 서비스 계층은 [`UserStore`] trait에만 의존하고, 운영 환경에서는
//! MongoDB `users` 컬렉션을 사용하는 [`UserRepository`]가 주입됩니다.
//!
//! ## 인덱스
//!
//! - `email` (unique)
//! - `username` (unique)
//!
//! 중복 검사와 삽입 사이의 경쟁 상태는 유니크 인덱스가 최종적으로 막으며,
//! 이때 발생하는 duplicate key 에러는 [`AppError::ConflictError`]로 변환됩니다.

use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson, DateTime, Document},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::db::Database;
use crate::domain::entities::users::user::{User, UserProfile};
use crate::errors::{AppError, AppResult};

const USERS_COLLECTION: &str = "users";
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 저장소 추상화
///
/// `find_*` 메서드는 문서가 없을 때 `Ok(None)`을 반환합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 사용자명 또는 이메일이 일치하는 사용자를 조회합니다.
    ///
    /// 두 값이 모두 `None`이면 조회 없이 `Ok(None)`입니다.
    async fn find_by_username_or_email(
        &self,
        username: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<Option<User>>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>>;

    /// 비밀번호와 리프레시 토큰을 제외한 사용자 문서를 조회합니다.
    async fn find_profile_by_id(&self, id: &ObjectId) -> AppResult<Option<UserProfile>>;

    /// 새 사용자를 저장하고 ID가 할당된 엔티티를 돌려줍니다.
    async fn insert(&self, user: User) -> AppResult<User>;

    /// 저장된 리프레시 토큰을 교체합니다. `None`이면 null로 지웁니다.
    async fn set_refresh_token(&self, id: &ObjectId, token: Option<&str>) -> AppResult<()>;

    /// 저장된 토큰이 `current`일 때만 `next`로 바꿉니다.
    ///
    /// 같은 토큰으로 동시에 들어온 갱신 중 하나만 `true`를 받습니다.
    async fn replace_refresh_token(&self, id: &ObjectId, current: &str, next: &str) -> AppResult<bool>;
}

/// MongoDB 기반 사용자 리포지토리
#[derive(Clone)]
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<User>(USERS_COLLECTION),
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    /// 이미 중복 데이터가 있으면 유니크 인덱스 생성이 실패합니다.
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("username_unique".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_indexes([email_index, username_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("users 컬렉션 인덱스 확인 완료");
        Ok(())
    }

    fn profile_projection() -> Document {
        doc! { "password": 0, "refreshToken": 0 }
    }
}

/// 사용자명/이메일 `$or` 필터 생성
fn identity_filter(username: Option<&str>, email: Option<&str>) -> Option<Document> {
    let mut clauses = Vec::new();
    if let Some(username) = username {
        clauses.push(doc! { "username": username });
    }
    if let Some(email) = email {
        clauses.push(doc! { "email": email });
    }

    if clauses.is_empty() {
        None
    } else {
        Some(doc! { "$or": clauses })
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        *error.kind,
        ErrorKind::Write(WriteFailure::WriteError(ref write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_username_or_email(
        &self,
        username: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<Option<User>> {
        let Some(filter) = identity_filter(username, email) else {
            return Ok(None);
        };

        self.collection
            .find_one(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_profile_by_id(&self, id: &ObjectId) -> AppResult<Option<UserProfile>> {
        self.collection
            .clone_with_type::<UserProfile>()
            .find_one(doc! { "_id": id })
            .projection(Self::profile_projection())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let result = self.collection.insert_one(&user).await.map_err(|e| {
            if is_duplicate_key(&e) {
                AppError::ConflictError("User with email or username already exists".to_string())
            } else {
                AppError::DatabaseError(e.to_string())
            }
        })?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError("Inserted id is not an ObjectId".to_string())
        })?;
        user.id = Some(id);

        log::debug!("사용자 저장 완료 - ID: {}", id.to_hex());
        Ok(user)
    }

    async fn set_refresh_token(&self, id: &ObjectId, token: Option<&str>) -> AppResult<()> {
        let token = token.map_or(Bson::Null, |t| Bson::String(t.to_string()));

        self.collection
            .update_one(
                doc! { "_id": id },
                doc! { "$set": { "refreshToken": token, "updatedAt": DateTime::now() } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn replace_refresh_token(&self, id: &ObjectId, current: &str, next: &str) -> AppResult<bool> {
        let result = self
            .collection
            .update_one(
                rotation_filter(id, current),
                doc! { "$set": { "refreshToken": next, "updatedAt": DateTime::now() } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count == 1)
    }
}

fn rotation_filter(id: &ObjectId, current: &str) -> Document {
    doc! { "_id": id, "refreshToken": current }
}
