//! 미디어 업로드 모델
//!
//! 원격 미디어 호스트에 올라간 파일의 참조와,
//! 업로드 전까지 로컬 디스크에 머무는 임시 파일을 표현합니다.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// 원격 미디어 호스트가 돌려준 업로드 참조
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaReference {
    /// 공개 URL
    pub url: String,
    /// 삭제 시 사용하는 식별자
    pub public_id: String,
    /// 호스트가 감지한 리소스 종류 (image, video, raw)
    pub resource_type: String,
}

/// 업로드 대기 중인 로컬 임시 파일
///
/// 값을 소유한 쪽이 파일 정리 책임도 함께 가집니다.
/// 업로드 성공, 업로드 실패, 검증 실패 등 어떤 경로로 drop 되더라도 디스크에서 삭제됩니다.
#[derive(Debug)]
pub struct StagedFile {
    path: PathBuf,
    file_name: Option<String>,
}

impl StagedFile {
    pub fn new(path: PathBuf, file_name: Option<String>) -> Self {
        Self { path, file_name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 클라이언트가 보낸 원래 파일 이름 (없으면 임시 파일 이름)
    pub fn file_name(&self) -> String {
        self.file_name
            .clone()
            .or_else(|| {
                self.path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| "upload".to_string())
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => log::debug!("임시 파일 삭제: {}", self.path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => log::warn!("임시 파일 삭제 실패 {}: {}", self.path.display(), e),
        }
    }
}
