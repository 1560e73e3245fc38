//! 애플리케이션 설정 구조체.
//!
//! 서버 URL, 요청 타임아웃, API 토큰, 인박스 동작 등 런타임 설정을 정의한다.
//! `ConfigManager`가 `config` crate로 파일과 환경변수를 합쳐 로드한다.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::error::CoreError;
use crate::models::tab::InboxTab;

/// 최상위 애플리케이션 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// 서버 연결 설정
    #[serde(default)]
    pub server: ServerConfig,
    /// API 인증 설정
    #[serde(default)]
    pub auth: AuthConfig,
    /// 인박스 동작 설정
    #[serde(default)]
    pub inbox: InboxConfig,
}

/// 서버 연결 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// API 서버 기본 URL (예: "http://127.0.0.1:8000")
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// 요청 타임아웃 (밀리초)
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    /// 일시적 에러 재시도 횟수
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_ms: default_request_timeout_ms(),
            max_retries: default_max_retries(),
        }
    }
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// Authorization 헤더 스킴
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthScheme {
    /// `Authorization: Token <key>` (서버 기본 토큰 인증)
    #[default]
    Token,
    /// `Authorization: Bearer <key>`
    Bearer,
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthScheme::Token => f.write_str("Token"),
            AuthScheme::Bearer => f.write_str("Bearer"),
        }
    }
}

/// API 인증 설정
///
/// 토큰은 소스에 두지 않는다. 설정 파일 또는 `SOCIOCON__AUTH__TOKEN`으로 주입.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub scheme: AuthScheme,
}

// 토큰이 로그에 찍히지 않도록 Debug 직접 구현
impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("scheme", &self.scheme)
            .finish()
    }
}

/// 인박스 동작 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InboxConfig {
    /// 시작 탭
    #[serde(default)]
    pub initial_tab: InboxTab,
    /// 수락/거절을 서버에도 반영할지 (기본: 로컬 목록에서만 제거)
    #[serde(default)]
    pub write_back: bool,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_request_timeout_ms() -> u64 {
    30_000
}

fn default_max_retries() -> u32 {
    3
}

impl AppConfig {
    /// 기본 설정 생성
    pub fn default_config() -> Self {
        Self::default()
    }

    /// 설정값 검증
    pub fn validate(&self) -> Result<(), CoreError> {
        let url = url::Url::parse(&self.server.base_url).map_err(|e| CoreError::Validation {
            field: "server.base_url".to_string(),
            message: format!("URL 파싱 실패: {e}"),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CoreError::Validation {
                field: "server.base_url".to_string(),
                message: format!("지원하지 않는 스킴: {}", url.scheme()),
            });
        }
        if self.server.request_timeout_ms == 0 {
            return Err(CoreError::Validation {
                field: "server.request_timeout_ms".to_string(),
                message: "0보다 커야 함".to_string(),
            });
        }
        if let Some(token) = &self.auth.token {
            if token.trim().is_empty() {
                return Err(CoreError::Validation {
                    field: "auth.token".to_string(),
                    message: "빈 토큰".to_string(),
                });
            }
        }
        Ok(())
    }
}
