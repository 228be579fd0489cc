//! 사용자 계정 핸들러
//!
//! 회원가입, 로그인, 로그아웃, 액세스 토큰 갱신 엔드포인트입니다.
//! 모든 응답은 [`ApiResponse`] 봉투를 사용하고, 토큰은 httpOnly 쿠키로도 내려갑니다.
//!
//! | Method | Path | 인증 |
//! |--------|------|------|
//! | POST | `/api/v1/users/register` | - |
//! | POST | `/api/v1/users/login` | - |
//! | POST | `/api/v1/users/logout` | 액세스 토큰 |
//! | POST | `/api/v1/users/refresh` | - |

use actix_multipart::form::MultipartForm;
use actix_web::{post, web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::domain::dto::api_response::ApiResponse;
use crate::domain::dto::users::request::{LoginRequest, RefreshTokenRequest, RegisterUserForm};
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::token::TokenPair;
use crate::errors::AppError;
use crate::handlers::cookies::{removal_cookie, session_cookie, ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE};
use crate::middlewares::AuthMiddleware;
use crate::state::AppState;

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /api/v1/users/register` (`multipart/form-data`)
///
/// # Fields
/// - `fullname`, `email`, `username`, `password` (텍스트, 필수)
/// - `avatar` (파일, 필수)
/// - `coverImage` (파일, 선택)
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users/register \
///   -F fullname="Jane Doe" -F email=jane@x.com -F username=JaneDoe \
///   -F password=secret1 -F avatar=@me.png
/// ```
#[post("/register")]
pub async fn register_user(
    state: web::Data<AppState>,
    MultipartForm(form): MultipartForm<RegisterUserForm>,
) -> Result<HttpResponse, AppError> {
    let request = form.into_request()?;

    let user = state.users.register_user(request).await?;

    Ok(HttpResponse::Created().json(ApiResponse::new(201, user, "User registered successfully")))
}

/// 로그인 핸들러
///
/// # Endpoint
/// `POST /api/v1/users/login`
///
/// 이메일 또는 사용자명과 비밀번호로 로그인하고
/// `accessToken`, `refreshToken` 쿠키를 설정합니다.
#[post("/login")]
pub async fn login_user(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let outcome = state.sessions.login(payload.into_inner()).await?;

    Ok(with_session_cookies(HttpResponse::Ok(), &state, &outcome.tokens)
        .json(ApiResponse::new(200, outcome.user, "User logged in successfully")))
}

/// 로그아웃 핸들러
///
/// # Endpoint
/// `POST /api/v1/users/logout`
///
/// 저장된 리프레시 토큰을 지우고 두 쿠키를 삭제합니다.
#[post("/logout", wrap = "AuthMiddleware::required()")]
pub async fn logout_user(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    state.sessions.logout(&user.user_id).await?;

    let cookies = state.cookies();
    Ok(HttpResponse::Ok()
        .cookie(removal_cookie(ACCESS_TOKEN_COOKIE, cookies))
        .cookie(removal_cookie(REFRESH_TOKEN_COOKIE, cookies))
        .json(ApiResponse::new(200, json!({}), "User logged out successfully")))
}

/// 액세스 토큰 갱신 핸들러
///
/// # Endpoint
/// `POST /api/v1/users/refresh`
///
/// 리프레시 토큰은 `refreshToken` 쿠키를 우선 사용하고,
/// 없으면 JSON 본문의 `refreshToken`을 사용합니다.
#[post("/refresh")]
pub async fn refresh_access_token(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: Option<web::Json<RefreshTokenRequest>>,
) -> Result<HttpResponse, AppError> {
    let incoming = req
        .cookie(REFRESH_TOKEN_COOKIE)
        .map(|cookie| cookie.value().trim().to_string())
        .filter(|value| !value.is_empty())
        .or_else(|| body.and_then(|b| b.into_inner().refresh_token));

    let tokens = state.sessions.refresh(incoming.as_deref()).await?;

    Ok(with_session_cookies(HttpResponse::Ok(), &state, &tokens)
        .json(ApiResponse::new(200, &tokens, "Access token refreshed")))
}

fn with_session_cookies(
    mut builder: actix_web::HttpResponseBuilder,
    state: &AppState,
    tokens: &TokenPair,
) -> actix_web::HttpResponseBuilder {
    let cookies = state.cookies();
    builder
        .cookie(session_cookie(ACCESS_TOKEN_COOKIE, tokens.access_token.clone(), cookies))
        .cookie(session_cookie(REFRESH_TOKEN_COOKIE, tokens.refresh_token.clone(), cookies));
    builder
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::cookie::Cookie;
    use actix_web::http::{header, StatusCode};
    use actix_web::{test, App};
    use serde_json::Value;

    use super::*;
    use crate::routes::configure_all_routes;
    use crate::repositories::users::UserStore;
    use crate::services::auth::TokenService;
    use crate::test_support::{multipart_body, saved_user, test_config, FakeMediaHost, InMemoryUserStore};

    struct Harness {
        store: Arc<InMemoryUserStore>,
        host: Arc<FakeMediaHost>,
        state: AppState,
        upload_dir: tempfile::TempDir,
    }

    fn harness() -> Harness {
        let upload_dir = tempfile::tempdir().unwrap();
        let mut config = test_config();
        config.uploads.directory = upload_dir.path().to_path_buf();

        let store = Arc::new(InMemoryUserStore::default());
        let host = Arc::new(FakeMediaHost::default());
        let state = AppState::new(config, store.clone(), host.clone());

        Harness {
            store,
            host,
            state,
            upload_dir,
        }
    }

    macro_rules! init_app {
        ($harness:expr) => {{
            let uploads = $harness.state.config.uploads.clone();
            test::init_service(
                App::new()
                    .app_data(web::Data::new($harness.state.clone()))
                    .configure(|cfg| configure_all_routes(cfg, &uploads)),
            )
            .await
        }};
    }

    const JANE_FIELDS: [(&str, &str); 4] = [
        ("fullname", "Jane Doe"),
        ("email", "jane@x.com"),
        ("username", "JaneDoe"),
        ("password", "secret1"),
    ];

    fn register_request(fields: &[(&str, &str)], files: &[(&str, &str, &[u8])]) -> test::TestRequest {
        let (content_type, body) = multipart_body(fields, files);
        test::TestRequest::post()
            .uri("/api/v1/users/register")
            .insert_header((header::CONTENT_TYPE, content_type))
            .set_payload(body)
    }

    fn login_request(body: Value) -> test::TestRequest {
        test::TestRequest::post().uri("/api/v1/users/login").set_json(body)
    }

    fn cookie_value(resp: &actix_web::dev::ServiceResponse, name: &str) -> Option<String> {
        resp.response()
            .cookies()
            .find(|c| c.name() == name)
            .map(|c| c.value().to_string())
    }

    fn upload_dir_is_empty(harness: &Harness) -> bool {
        std::fs::read_dir(harness.upload_dir.path()).unwrap().next().is_none()
    }

    #[actix_web::test]
    async fn test_register_returns_sanitized_user() {
        let h = harness();
        let app = init_app!(h);

        let req = register_request(&JANE_FIELDS, &[("avatar", "me.png", b"png-bytes")]).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["statusCode"], 201);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "User registered successfully");
        assert_eq!(body["data"]["username"], "janedoe");
        assert_eq!(body["data"]["avatar"], "https://media.test/me.png");
        assert_eq!(body["data"]["coverImage"], "");
        assert!(body["data"].get("password").is_none());
        assert!(body["data"].get("refreshToken").is_none());

        assert_eq!(h.store.len(), 1);
        assert!(upload_dir_is_empty(&h));
    }

    #[actix_web::test]
    async fn test_register_same_email_twice_conflicts_without_upload() {
        let h = harness();
        let app = init_app!(h);

        let first = register_request(&JANE_FIELDS, &[("avatar", "me.png", b"png")]).to_request();
        assert_eq!(test::call_service(&app, first).await.status(), StatusCode::CREATED);

        let fields = [
            ("fullname", "Jane Again"),
            ("email", "jane@x.com"),
            ("username", "another"),
            ("password", "secret1"),
        ];
        let second = register_request(&fields, &[("avatar", "second.png", b"png")]).to_request();
        let resp = test::call_service(&app, second).await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "User with email or username already exists");
        assert_eq!(body["success"], false);
        assert_eq!(h.host.uploaded(), vec!["me.png".to_string()]);
        assert!(upload_dir_is_empty(&h));
    }

    #[actix_web::test]
    async fn test_register_without_avatar() {
        let h = harness();
        let app = init_app!(h);

        let req = register_request(&JANE_FIELDS, &[("coverImage", "bg.png", b"png")]).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Avatar file is missing");
        assert_eq!(h.store.len(), 0);
        assert!(upload_dir_is_empty(&h));
    }

    #[actix_web::test]
    async fn test_register_with_empty_avatar_part() {
        let h = harness();
        let app = init_app!(h);

        let req = register_request(&JANE_FIELDS, &[("avatar", "me.png", b"")]).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(h.host.uploaded().is_empty());
    }

    #[actix_web::test]
    async fn test_register_with_blank_field() {
        let h = harness();
        let app = init_app!(h);

        let fields = [
            ("fullname", "   "),
            ("email", "jane@x.com"),
            ("username", "janedoe"),
            ("password", "secret1"),
        ];
        let req = register_request(&fields, &[("avatar", "me.png", b"png")]).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "All fields are required");
        assert!(h.host.uploaded().is_empty());
        assert!(upload_dir_is_empty(&h));
    }

    #[actix_web::test]
    async fn test_register_rolls_back_media_when_insert_fails() {
        let h = harness();
        h.store.fail_inserts(true);
        let app = init_app!(h);

        let req = register_request(
            &JANE_FIELDS,
            &[("avatar", "me.png", b"png"), ("coverImage", "bg.png", b"png")],
        )
        .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["message"],
            "Something went wrong while registering a user and images were deleted"
        );
        let mut destroyed = h.host.destroyed();
        destroyed.sort();
        assert_eq!(destroyed, vec!["public-bg.png".to_string(), "public-me.png".to_string()]);
        assert!(upload_dir_is_empty(&h));
    }

    #[actix_web::test]
    async fn test_register_rejects_non_multipart_body() {
        let h = harness();
        let app = init_app!(h);

        let req = test::TestRequest::post()
            .uri("/api/v1/users/register")
            .set_json(serde_json::json!({"username": "janedoe"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
    }

    #[actix_web::test]
    async fn test_login_sets_both_cookies() {
        let h = harness();
        saved_user(&h.store, "janedoe", "jane@x.com", "secret1").await;
        let app = init_app!(h);

        let req = login_request(serde_json::json!({"username": "janedoe", "password": "secret1"})).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert!(cookie_value(&resp, ACCESS_TOKEN_COOKIE).is_some());
        let refresh = cookie_value(&resp, REFRESH_TOKEN_COOKIE).unwrap();
        let http_only = resp
            .response()
            .cookies()
            .all(|c| c.http_only() == Some(true) && c.path() == Some("/"));
        assert!(http_only);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "User logged in successfully");
        assert_eq!(body["data"]["email"], "jane@x.com");
        assert!(body["data"].get("password").is_none());

        let stored = h.store.find_username("janedoe").unwrap();
        assert_eq!(stored.refresh_token, Some(refresh));
    }

    #[actix_web::test]
    async fn test_login_wrong_password_sets_no_cookies() {
        let h = harness();
        saved_user(&h.store, "janedoe", "jane@x.com", "secret1").await;
        let app = init_app!(h);

        let req = login_request(serde_json::json!({"username": "janedoe", "password": "wrong"})).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(resp.headers().get(header::SET_COOKIE).is_none());
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Password is incorrect");
    }

    #[actix_web::test]
    async fn test_login_validation_and_unknown_user() {
        let h = harness();
        let app = init_app!(h);

        let missing_identity = login_request(serde_json::json!({"password": "secret1"})).to_request();
        let resp = test::call_service(&app, missing_identity).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Email or username is required");

        let unknown = login_request(serde_json::json!({"email": "ghost@x.com", "password": "secret1"})).to_request();
        let resp = test::call_service(&app, unknown).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_login_malformed_json_uses_failure_envelope() {
        let h = harness();
        let app = init_app!(h);

        let req = test::TestRequest::post()
            .uri("/api/v1/users/login")
            .insert_header((header::CONTENT_TYPE, "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["statusCode"], 400);
        assert_eq!(body["success"], false);
    }

    #[actix_web::test]
    async fn test_logout_clears_token_and_cookies() {
        let h = harness();
        let user = saved_user(&h.store, "janedoe", "jane@x.com", "secret1").await;
        let app = init_app!(h);

        let login = login_request(serde_json::json!({"email": "jane@x.com", "password": "secret1"})).to_request();
        let resp = test::call_service(&app, login).await;
        let access = cookie_value(&resp, ACCESS_TOKEN_COOKIE).unwrap();

        let logout = test::TestRequest::post()
            .uri("/api/v1/users/logout")
            .cookie(Cookie::new(ACCESS_TOKEN_COOKIE, access))
            .to_request();
        let resp = test::call_service(&app, logout).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(cookie_value(&resp, ACCESS_TOKEN_COOKIE).as_deref(), Some(""));
        assert_eq!(cookie_value(&resp, REFRESH_TOKEN_COOKIE).as_deref(), Some(""));
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"], serde_json::json!({}));
        assert_eq!(body["message"], "User logged out successfully");

        assert!(h.store.get(&user.id.unwrap()).unwrap().refresh_token.is_none());
    }

    #[actix_web::test]
    async fn test_logout_without_token_is_unauthorized() {
        let h = harness();
        let app = init_app!(h);

        let req = test::TestRequest::post().uri("/api/v1/users/logout").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
    }

    #[actix_web::test]
    async fn test_refresh_with_valid_token_rotates_cookies() {
        let h = harness();
        saved_user(&h.store, "janedoe", "jane@x.com", "secret1").await;
        let app = init_app!(h);

        let login = login_request(serde_json::json!({"username": "janedoe", "password": "secret1"})).to_request();
        let resp = test::call_service(&app, login).await;
        let refresh = cookie_value(&resp, REFRESH_TOKEN_COOKIE).unwrap();

        let req = test::TestRequest::post()
            .uri("/api/v1/users/refresh")
            .cookie(Cookie::new(REFRESH_TOKEN_COOKIE, refresh.clone()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let rotated = cookie_value(&resp, REFRESH_TOKEN_COOKIE).unwrap();
        assert_ne!(rotated, refresh);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Access token refreshed");
        assert_eq!(body["data"]["refreshToken"], rotated);
        assert!(body["data"]["accessToken"].is_string());
    }

    #[actix_web::test]
    async fn test_refresh_accepts_body_token() {
        let h = harness();
        let user = saved_user(&h.store, "janedoe", "jane@x.com", "secret1").await;
        let pair = h.state.tokens.issue_token_pair(&user.id.unwrap()).await.unwrap();
        let app = init_app!(h);

        let req = test::TestRequest::post()
            .uri("/api/v1/users/refresh")
            .set_json(serde_json::json!({"refreshToken": pair.refresh_token}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_refresh_with_expired_token_is_unauthorized() {
        let h = harness();
        let user = saved_user(&h.store, "janedoe", "jane@x.com", "secret1").await;
        let user_id = user.id.unwrap();

        let mut expired_config = h.state.config.jwt.clone();
        expired_config.refresh_expiration_days = -1;
        let expired = TokenService::new(expired_config, h.store.clone())
            .issue_refresh_token(&user_id)
            .unwrap();
        h.store.set_refresh_token(&user_id, Some(&expired)).await.unwrap();
        let app = init_app!(h);

        let req = test::TestRequest::post()
            .uri("/api/v1/users/refresh")
            .cookie(Cookie::new(REFRESH_TOKEN_COOKIE, expired))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        assert!(resp.headers().get(header::SET_COOKIE).is_none());
    }

    #[actix_web::test]
    async fn test_refresh_without_token() {
        let h = harness();
        let app = init_app!(h);

        let req = test::TestRequest::post().uri("/api/v1/users/refresh").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Refresh token is required");
    }
}
