//! 비밀번호 해싱/검증 서비스
//!
//! bcrypt를 사용합니다. 솔트는 해시마다 자동 생성되며,
//! cost는 환경별 [`PasswordConfig`] 값을 따릅니다.

use crate::config::PasswordConfig;
use crate::domain::entities::users::user::User;
use crate::errors::{AppError, AppResult};

pub struct PasswordService {
    bcrypt_cost: u32,
}

impl PasswordService {
    pub fn new(config: &PasswordConfig) -> Self {
        Self {
            bcrypt_cost: config.bcrypt_cost,
        }
    }

    /// 평문 비밀번호를 bcrypt 해시로 변환합니다.
    pub fn hash_password(&self, plain: &str) -> AppResult<String> {
        let hash_start = std::time::Instant::now();

        let hashed = bcrypt::hash(plain, self.bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        log::debug!("Password hashing took: {:?}", hash_start.elapsed());
        Ok(hashed)
    }

    /// 저장된 해시와 평문 비밀번호를 비교합니다.
    ///
    /// 저장된 해시 형식이 잘못된 경우에만 에러이며, 불일치는 `Ok(false)`입니다.
    pub fn verify_password(&self, user: &User, plain: &str) -> AppResult<bool> {
        let verify_start = std::time::Instant::now();

        let is_valid = bcrypt::verify(plain, &user.password)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        log::debug!("Password verification took: {:?}", verify_start.elapsed());
        Ok(is_valid)
    }
}
