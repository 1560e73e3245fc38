//! # sociocon-network
//!
//! Sociocon REST API 네트워크 어댑터.
//! 팔로우 요청 조회/수락/거절 HTTP 호출과 API 토큰 헤더 주입을 담당한다.
//!
//! ## 사용 예시
//!
//! ```rust,ignore
//! use sociocon_network::auth::ApiCredentials;
//! use sociocon_network::http_client::HttpFollowClient;
//!
//! let credentials = ApiCredentials::from_config(&config.auth)?;
//! let client = HttpFollowClient::new(&config.server.base_url, credentials, timeout)?;
//! ```

pub mod auth;
pub mod http_client;
