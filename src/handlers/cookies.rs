//! 세션 쿠키 헬퍼
//!
//! 두 토큰 쿠키는 항상 `httpOnly`, `path=/`이며 `secure`는 설정을 따릅니다.
//! 삭제 쿠키도 같은 속성으로 만들어야 브라우저가 기존 쿠키를 지웁니다.

use actix_web::cookie::Cookie;

use crate::config::CookieConfig;

pub const ACCESS_TOKEN_COOKIE: &str = "accessToken";
pub const REFRESH_TOKEN_COOKIE: &str = "refreshToken";

pub fn session_cookie(name: &'static str, value: String, config: &CookieConfig) -> Cookie<'static> {
    Cookie::build(name, value)
        .path("/")
        .http_only(true)
        .secure(config.secure)
        .finish()
}

pub fn removal_cookie(name: &'static str, config: &CookieConfig) -> Cookie<'static> {
    let mut cookie = session_cookie(name, String::new(), config);
    cookie.make_removal();
    cookie
}
