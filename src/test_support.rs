//! 테스트 전용 대역(double)과 픽스처
//!
//! MongoDB와 Cloudinary 없이 서비스/핸들러를 검증하기 위한 인메모리 구현입니다.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};

use crate::config::{AppConfig, EnvSource};
use crate::domain::entities::users::user::{User, UserProfile};
use crate::domain::models::media::{MediaReference, StagedFile};
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserStore;
use crate::services::media::MediaHost;
use crate::state::AppState;

/// 인메모리 사용자 저장소
#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
    fail_inserts: AtomicBool,
    fail_updates: AtomicBool,
}

impl InMemoryUserStore {
    pub fn get(&self, id: &ObjectId) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id.as_ref() == Some(id))
            .cloned()
    }

    pub fn find_username(&self, username: &str) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.username == username)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn remove(&self, id: &ObjectId) {
        self.users.lock().unwrap().retain(|u| u.id.as_ref() != Some(id));
    }

    pub fn fail_inserts(&self, fail: bool) {
        self.fail_inserts.store(fail, Ordering::SeqCst);
    }

    pub fn fail_updates(&self, fail: bool) {
        self.fail_updates.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_username_or_email(
        &self,
        username: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| username == Some(u.username.as_str()) || email == Some(u.email.as_str()))
            .cloned())
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<User>> {
        Ok(self.get(id))
    }

    async fn find_profile_by_id(&self, id: &ObjectId) -> AppResult<Option<UserProfile>> {
        Ok(self.get(id).and_then(|u| u.profile()))
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError("insert failed".to_string()));
        }

        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|u| u.username == user.username || u.email == user.email)
        {
            return Err(AppError::ConflictError(
                "User with email or username already exists".to_string(),
            ));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn set_refresh_token(&self, id: &ObjectId, token: Option<&str>) -> AppResult<()> {
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError("update failed".to_string()));
        }

        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.id.as_ref() == Some(id)) {
            user.refresh_token = token.map(str::to_string);
            user.updated_at = DateTime::now();
        }
        Ok(())
    }

    async fn replace_refresh_token(&self, id: &ObjectId, current: &str, next: &str) -> AppResult<bool> {
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError("update failed".to_string()));
        }

        let mut users = self.users.lock().unwrap();
        match users
            .iter_mut()
            .find(|u| u.id.as_ref() == Some(id) && u.refresh_token.as_deref() == Some(current))
        {
            Some(user) => {
                user.refresh_token = Some(next.to_string());
                user.updated_at = DateTime::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// 업로드/삭제 호출을 기록하는 가짜 미디어 호스트
///
/// 업로드 URL은 `https://media.test/{파일명}`, 식별자는 `public-{파일명}`입니다.
/// 리소스 종류는 확장자로 정합니다 (`.mp4`/`.mov` → video, `.pdf` → raw, 나머지 image).
#[derive(Default)]
pub struct FakeMediaHost {
    uploaded: Mutex<Vec<String>>,
    destroyed: Mutex<Vec<(String, String)>>,
    failing_uploads: Mutex<HashSet<String>>,
    fail_destroys: AtomicBool,
}

impl FakeMediaHost {
    /// 성공한 업로드의 파일명 목록
    pub fn uploaded(&self) -> Vec<String> {
        self.uploaded.lock().unwrap().clone()
    }

    /// 삭제 요청된 식별자 목록 (실패 포함)
    pub fn destroyed(&self) -> Vec<String> {
        self.destroyed
            .lock()
            .unwrap()
            .iter()
            .map(|(_, public_id)| public_id.clone())
            .collect()
    }

    /// 삭제 요청된 (리소스 종류, 식별자) 목록
    pub fn destroyed_targets(&self) -> Vec<(String, String)> {
        self.destroyed.lock().unwrap().clone()
    }

    pub fn fail_uploads_named(&self, file_name: &str) {
        self.failing_uploads
            .lock()
            .unwrap()
            .insert(file_name.to_string());
    }

    pub fn fail_destroys(&self, fail: bool) {
        self.fail_destroys.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl MediaHost for FakeMediaHost {
    async fn upload(&self, path: &Path, file_name: &str) -> AppResult<MediaReference> {
        if !path.exists() {
            return Err(AppError::ExternalServiceError(format!(
                "staged file missing: {}",
                path.display()
            )));
        }
        if self.failing_uploads.lock().unwrap().contains(file_name) {
            return Err(AppError::ExternalServiceError("upload rejected".to_string()));
        }

        self.uploaded.lock().unwrap().push(file_name.to_string());
        Ok(MediaReference {
            url: format!("https://media.test/{}", file_name),
            public_id: format!("public-{}", file_name),
            resource_type: detected_resource_type(file_name).to_string(),
        })
    }

    async fn destroy(&self, reference: &MediaReference) -> AppResult<()> {
        self.destroyed
            .lock()
            .unwrap()
            .push((reference.resource_type.clone(), reference.public_id.clone()));
        if self.fail_destroys.load(Ordering::SeqCst) {
            return Err(AppError::ExternalServiceError("destroy rejected".to_string()));
        }
        Ok(())
    }
}

fn detected_resource_type(file_name: &str) -> &'static str {
    match Path::new(file_name).extension().and_then(|e| e.to_str()) {
        Some("mp4" | "mov") => "video",
        Some("pdf") => "raw",
        _ => "image",
    }
}

pub fn test_config() -> AppConfig {
    let upload_dir = std::env::temp_dir();
    let upload_dir = upload_dir.to_string_lossy();

    AppConfig::from_source(&EnvSource::from_pairs(&[
        ("ENVIRONMENT", "test"),
        ("ACCESS_TOKEN_SECRET", "test-access-secret"),
        ("REFRESH_TOKEN_SECRET", "test-refresh-secret"),
        ("CLOUDINARY_CLOUD_NAME", "test"),
        ("CLOUDINARY_API_KEY", "test-key"),
        ("CLOUDINARY_API_SECRET", "test-secret"),
        ("UPLOAD_DIR", upload_dir.as_ref()),
    ]))
    .unwrap()
}

pub fn test_state(store: Arc<InMemoryUserStore>, host: Arc<FakeMediaHost>) -> AppState {
    AppState::new(test_config(), store, host)
}

/// 비밀번호를 해싱해 저장소에 바로 넣은 사용자
pub async fn saved_user(
    store: &InMemoryUserStore,
    username: &str,
    email: &str,
    password: &str,
) -> User {
    let user = User::new(
        username.to_string(),
        email.to_string(),
        "Test User".to_string(),
        "https://media.test/avatar.png".to_string(),
        None,
        bcrypt::hash(password, 4).unwrap(),
    );
    store.insert(user).await.unwrap()
}

/// 디렉터리에 작은 파일을 만들고 그 파일을 소유하는 [`StagedFile`]을 돌려줍니다.
pub fn staged_file(dir: &Path, name: &str) -> (StagedFile, PathBuf) {
    let path = dir.join(name);
    std::fs::write(&path, b"\x89PNG test").unwrap();
    (StagedFile::new(path.clone(), Some(name.to_string())), path)
}

pub const MULTIPART_BOUNDARY: &str = "----user-service-test-boundary";

/// `multipart/form-data` 본문 생성
///
/// `files`는 (필드명, 파일명, 내용) 목록입니다.
pub fn multipart_body(fields: &[(&str, &str)], files: &[(&str, &str, &[u8])]) -> (String, Vec<u8>) {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\nContent-Type: text/plain\r\n\r\n{}\r\n",
                MULTIPART_BOUNDARY, name, value
            )
            .as_bytes(),
        );
    }

    for (name, file_name, content) in files {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: image/png\r\n\r\n",
                MULTIPART_BOUNDARY, name, file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", MULTIPART_BOUNDARY).as_bytes());

    (
        format!("multipart/form-data; boundary={}", MULTIPART_BOUNDARY),
        body,
    )
}
