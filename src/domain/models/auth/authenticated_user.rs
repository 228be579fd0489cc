use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};
use mongodb::bson::oid::ObjectId;
use serde::Serialize;

use crate::errors::AppError;

/// 인증 미들웨어가 액세스 토큰과 저장소 조회로 확인한 사용자 정보
#[derive(Debug, Clone, Serialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID
    pub user_id: ObjectId,
    pub username: String,
    pub email: String,
}

/// ActixWeb FromRequest trait 구현
///
/// 미들웨어가 Request Extensions에 넣어둔 값을 꺼냅니다.
/// 미들웨어가 적용되지 않은 라우트에서는 401을 돌려줍니다.
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "Unauthorized request".to_string(),
            ))),
        }
    }
}
