//! API 토큰 자격증명.
//!
//! 시작 시 설정에서 토큰을 읽어 `Authorization` 헤더 값으로 만든다.
//! 토큰 발급(로그인)은 이 클라이언트의 범위 밖이다.

use sociocon_core::config::{AuthConfig, AuthScheme};
use sociocon_core::error::CoreError;
use std::fmt;

/// 요청마다 붙일 API 자격증명
#[derive(Clone)]
pub struct ApiCredentials {
    scheme: AuthScheme,
    token: String,
}

impl ApiCredentials {
    /// 스킴과 토큰으로 생성
    pub fn new(scheme: AuthScheme, token: impl Into<String>) -> Result<Self, CoreError> {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            return Err(CoreError::Auth("API 토큰이 비어 있음".to_string()));
        }
        Ok(Self { scheme, token })
    }

    /// 설정에서 생성 — 토큰이 없으면 `CoreError::Auth`
    pub fn from_config(auth: &AuthConfig) -> Result<Self, CoreError> {
        let token = auth.token.as_deref().ok_or_else(|| {
            CoreError::Auth(
                "API 토큰 미설정 (auth.token 또는 SOCIOCON__AUTH__TOKEN)".to_string(),
            )
        })?;
        Self::new(auth.scheme, token)
    }

    /// `Authorization` 헤더 값 (`"Token <key>"` / `"Bearer <key>"`)
    pub fn header_value(&self) -> String {
        format!("{} {}", self.scheme, self.token)
    }

    pub fn scheme(&self) -> AuthScheme {
        self.scheme
    }
}

impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("scheme", &self.scheme)
            .field("token", &"***")
            .finish()
    }
}
