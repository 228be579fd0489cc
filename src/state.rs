//! 애플리케이션 공유 상태
//!
//! 설정과 서비스 인스턴스를 한 번 조립해 `web::Data<AppState>`로 모든 워커에 공유합니다.
//! 저장소와 미디어 호스트는 trait 객체로 주입되므로 테스트에서 교체할 수 있습니다.

use std::sync::Arc;

use crate::config::{AppConfig, CookieConfig};
use crate::repositories::users::UserStore;
use crate::services::auth::{PasswordService, SessionService, TokenService};
use crate::services::media::{MediaHost, MediaService};
use crate::services::users::UserService;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<UserService>,
    pub sessions: Arc<SessionService>,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn UserStore>, media_host: Arc<dyn MediaHost>) -> Self {
        let passwords = Arc::new(PasswordService::new(&config.password));
        let tokens = Arc::new(TokenService::new(config.jwt.clone(), store.clone()));
        let media = Arc::new(MediaService::new(media_host));

        let users = Arc::new(UserService::new(store.clone(), passwords.clone(), media));
        let sessions = Arc::new(SessionService::new(store, passwords, tokens.clone()));

        Self {
            config: Arc::new(config),
            users,
            sessions,
            tokens,
        }
    }

    pub fn cookies(&self) -> &CookieConfig {
        &self.config.cookies
    }
}
