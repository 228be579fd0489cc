//! 인증 미들웨어
//!
//! 액세스 토큰(쿠키 `accessToken` 또는 `Authorization: Bearer`)을 검증하고
//! 민감 필드를 제외한 사용자 정보를 조회해 Request Extensions에 [`AuthenticatedUser`]로 저장합니다.
//! 실패하면 핸들러를 호출하지 않고 401 응답을 돌려줍니다.
//!
//! ```rust,ignore
//! web::resource("/logout")
//!     .wrap(AuthMiddleware::required())
//!     .route(web::post().to(logout))
//! ```
//!
//! [`AuthenticatedUser`]: crate::domain::models::auth::AuthenticatedUser

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::AuthMiddlewareService;

pub struct AuthMiddleware;

impl AuthMiddleware {
    /// 인증이 반드시 필요한 라우트용
    pub fn required() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
