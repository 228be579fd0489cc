//! 회원가입 요청 DTO
//!
//! `multipart/form-data` 본문을 받아 텍스트 필드와 업로드 파일을 분리합니다.
//! 파일 파트는 디스크의 임시 파일로 저장되며, [`StagedFile`]로 넘어간 뒤에는
//! 요청 처리 결과와 관계없이 drop 시점에 삭제됩니다.

use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use validator::{Validate, ValidationError};

use crate::domain::models::media::StagedFile;
use crate::errors::{AppResult, ErrorContext};
use crate::utils::string_utils::clean_optional_string;

/// 회원가입 멀티파트 폼
///
/// 텍스트 필드: `fullname`, `email`, `username`, `password`
/// 파일 필드: `avatar` (필수), `coverImage` (선택)
#[derive(Debug, MultipartForm)]
pub struct RegisterUserForm {
    pub fullname: Option<Text<String>>,
    pub email: Option<Text<String>>,
    pub username: Option<Text<String>>,
    pub password: Option<Text<String>>,
    pub avatar: Option<TempFile>,
    #[multipart(rename = "coverImage")]
    pub cover_image: Option<TempFile>,
}

impl RegisterUserForm {
    /// 폼을 서비스 계층 요청으로 변환합니다.
    ///
    /// 크기가 0인 파일 파트는 첨부되지 않은 것으로 봅니다.
    pub fn into_request(self) -> AppResult<RegisterUserRequest> {
        Ok(RegisterUserRequest {
            fullname: text_value(self.fullname),
            email: text_value(self.email),
            username: text_value(self.username),
            password: self.password.map(Text::into_inner).unwrap_or_default(),
            avatar: stage(self.avatar)?,
            cover_image: stage(self.cover_image)?,
        })
    }
}

fn text_value(field: Option<Text<String>>) -> String {
    clean_optional_string(field.map(Text::into_inner)).unwrap_or_default()
}

fn stage(file: Option<TempFile>) -> AppResult<Option<StagedFile>> {
    let Some(file) = file else {
        return Ok(None);
    };
    let TempFile {
        file,
        file_name,
        size,
        ..
    } = file;

    if size == 0 {
        return Ok(None);
    }

    let path = file
        .into_temp_path()
        .keep()
        .context("Failed to stage uploaded file")?;

    Ok(Some(StagedFile::new(path, file_name)))
}

/// 회원가입 요청
///
/// 비밀번호를 제외한 텍스트 필드는 앞뒤 공백이 제거된 상태입니다.
/// 비밀번호는 받은 그대로 해싱되고, 공백만 있으면 누락으로 봅니다. 누락된 필드는 빈 문자열입니다.
#[derive(Debug, Validate)]
#[validate(schema(function = "validate_register_request"))]
pub struct RegisterUserRequest {
    pub fullname: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub avatar: Option<StagedFile>,
    pub cover_image: Option<StagedFile>,
}

fn validate_register_request(request: &RegisterUserRequest) -> Result<(), ValidationError> {
    let fields = [
        &request.fullname,
        &request.email,
        &request.username,
        &request.password,
    ];

    if fields.iter().any(|field| field.trim().is_empty()) {
        return Err(ValidationError::new("required").with_message("All fields are required".into()));
    }
    Ok(())
}
