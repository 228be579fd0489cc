//! 미디어 업로드 서비스
//!
//! 등록 흐름이 사용하는 업로드/삭제 진입점입니다. 원격 호스트 오류를
//! 흐름별 메시지로 바꾸는 일은 호출자가 맡고, 여기서는 로그만 남깁니다.

use std::sync::Arc;

use crate::domain::models::media::{MediaReference, StagedFile};
use crate::errors::AppResult;
use crate::services::media::MediaHost;

pub struct MediaService {
    host: Arc<dyn MediaHost>,
}

impl MediaService {
    pub fn new(host: Arc<dyn MediaHost>) -> Self {
        Self { host }
    }

    /// 임시 파일을 업로드합니다.
    ///
    /// 파일이 없으면 아무 것도 하지 않고 `None`을 반환합니다.
    /// 업로드 실패도 `None`으로 보고되며, 어느 쪽이든 임시 파일은 함수가 끝날 때 삭제됩니다.
    pub async fn upload(&self, staged: Option<StagedFile>) -> Option<MediaReference> {
        let staged = staged?;
        let file_name = staged.file_name();

        match self.host.upload(staged.path(), &file_name).await {
            Ok(reference) => {
                log::info!("미디어 업로드 완료: {} ({})", reference.public_id, reference.resource_type);
                Some(reference)
            }
            Err(e) => {
                log::error!("미디어 업로드 실패 {}: {}", file_name, e);
                None
            }
        }
    }

    /// 원격 파일 삭제 (최선 노력)
    ///
    /// 실패는 로그로 남긴 뒤 그대로 반환합니다. 재시도하지 않습니다.
    pub async fn delete(&self, reference: &MediaReference) -> AppResult<()> {
        self.host.destroy(reference).await.inspect_err(|e| {
            log::warn!(
                "미디어 삭제 실패 {} ({}): {}",
                reference.public_id, reference.resource_type, e
            );
        })
    }
}
