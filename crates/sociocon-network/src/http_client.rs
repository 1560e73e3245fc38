//! HTTP REST API 클라이언트.
//!
//! `FollowRequestApi` 포트 구현. Authorization 헤더 자동 주입 + 재시도 로직.

use async_trait::async_trait;
use sociocon_core::error::CoreError;
use sociocon_core::models::follow::{FollowRequest, FollowRequestList};
use sociocon_core::ports::follow_api::FollowRequestApi;
use std::time::Duration;
use tracing::{debug, warn};

use crate::auth::ApiCredentials;

/// 기본 재시도 횟수
const DEFAULT_MAX_RETRIES: u32 = 3;

/// Retry-After 헤더가 없을 때 기본 대기 시간 (초)
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// 재시도 대기 상한 (Retry-After 포함)
const MAX_BACKOFF: Duration = Duration::from_secs(30);

const INCOMING_PATH: &str = "/follows/incoming/";
const OUTGOING_PATH: &str = "/follows/outgoing/";

/// REST API 클라이언트 — `FollowRequestApi` 포트 구현
pub struct HttpFollowClient {
    client: reqwest::Client,
    base_url: String,
    credentials: ApiCredentials,
    max_retries: u32,
    retry_base_delay: Duration,
    max_retry_delay: Duration,
}

/// 404 응답을 어떤 리소스로 보고할지
struct NotFoundTarget<'a> {
    resource_type: &'a str,
    id: &'a str,
}

impl HttpFollowClient {
    /// 새 HTTP API 클라이언트 생성
    pub fn new(
        base_url: &str,
        credentials: ApiCredentials,
        timeout: Duration,
    ) -> Result<Self, CoreError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CoreError::Network(format!("HTTP 클라이언트 빌드 실패: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_base_delay: Duration::from_secs(1),
            max_retry_delay: MAX_BACKOFF,
        })
    }

    /// 재시도 횟수 설정
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// 첫 재시도 대기 시간 설정 (이후 2배씩 증가)
    pub fn with_retry_base_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    /// 재시도 대기 상한 설정 (서버 Retry-After도 이 값으로 제한)
    pub fn with_max_retry_delay(mut self, delay: Duration) -> Self {
        self.max_retry_delay = delay;
        self
    }

    /// Authorization 헤더가 포함된 요청 빌더 반환
    fn authorized_request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, &url)
            .header(reqwest::header::AUTHORIZATION, self.credentials.header_value())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
    }

    /// 응답 상태 코드 확인 및 에러 매핑
    async fn check_response(
        &self,
        resp: reqwest::Response,
        target: NotFoundTarget<'_>,
    ) -> Result<reqwest::Response, CoreError> {
        let status = resp.status();

        if status.is_success() {
            return Ok(resp);
        }

        let retry_after = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_RETRY_AFTER_SECS);

        let text = resp.text().await.unwrap_or_else(|e| {
            warn!("응답 본문 읽기 실패: {e}");
            String::new()
        });

        match status.as_u16() {
            401 | 403 => Err(CoreError::Auth(format!("인증 실패 ({status}): {text}"))),
            404 => Err(CoreError::NotFound {
                resource_type: target.resource_type.to_string(),
                id: target.id.to_string(),
            }),
            429 => Err(CoreError::RateLimit {
                retry_after_secs: retry_after,
            }),
            503 => Err(CoreError::ServiceUnavailable(text)),
            _ => Err(CoreError::Internal(format!("API 에러 ({status}): {text}"))),
        }
    }

    /// 재시도가 포함된 요청 실행
    ///
    /// exponential backoff: base → 2×base → 4×base (최대 `max_retry_delay`)
    async fn execute_with_retry<F, Fut, T>(&self, operation: F) -> Result<T, CoreError>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<T, CoreError>>,
    {
        let mut delay = self.retry_base_delay.min(self.max_retry_delay);
        let mut attempt = 0;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) if !e.is_transient() || attempt >= self.max_retries => return Err(e),
                Err(e) => {
                    attempt += 1;

                    // RateLimit의 경우 서버 지정 대기 시간 사용 (상한 적용)
                    if let CoreError::RateLimit { retry_after_secs } = &e {
                        delay = Duration::from_secs(*retry_after_secs).min(self.max_retry_delay);
                    }

                    warn!(
                        "요청 실패 (시도 {}/{}): {e}, {delay:?} 후 재시도",
                        attempt,
                        self.max_retries + 1
                    );

                    tokio::time::sleep(delay).await;
                    delay = delay.saturating_mul(2).min(self.max_retry_delay);
                }
            }
        }
    }

    /// 목록 엔드포인트 조회
    async fn fetch_list(&self, path: &str) -> Result<Vec<FollowRequest>, CoreError> {
        self.execute_with_retry(|| async {
            let resp = self
                .authorized_request(reqwest::Method::GET, path)
                .send()
                .await
                .map_err(|e| CoreError::Network(format!("요청 목록 조회 실패: {e}")))?;

            let target = NotFoundTarget {
                resource_type: "endpoint",
                id: path,
            };
            let resp = self.check_response(resp, target).await?;
            let list: FollowRequestList = resp
                .json()
                .await
                .map_err(|e| CoreError::Internal(format!("요청 목록 파싱 실패: {e}")))?;

            debug!("요청 목록 수신: {path} → {}건", list.items.len());
            Ok(list.items)
        })
        .await
    }
}

/// 단건 요청 경로 (`/follows/{id}/`)
fn request_path(id: &str) -> Result<String, CoreError> {
    if id.is_empty() || id.contains('/') {
        return Err(CoreError::Validation {
            field: "id".to_string(),
            message: format!("잘못된 요청 ID: {id:?}"),
        });
    }
    Ok(format!("/follows/{id}/"))
}

#[async_trait]
impl FollowRequestApi for HttpFollowClient {
    async fn incoming_requests(&self) -> Result<Vec<FollowRequest>, CoreError> {
        debug!("수신 요청 목록 조회");
        self.fetch_list(INCOMING_PATH).await
    }

    async fn outgoing_requests(&self) -> Result<Vec<FollowRequest>, CoreError> {
        debug!("발신 요청 목록 조회");
        self.fetch_list(OUTGOING_PATH).await
    }

    async fn accept_request(&self, id: &str) -> Result<(), CoreError> {
        let path = request_path(id)?;
        debug!("요청 수락 전송: {id}");

        self.execute_with_retry(|| async {
            let body = serde_json::json!({ "hasAccepted": true });
            let resp = self
                .authorized_request(reqwest::Method::PUT, &path)
                .json(&body)
                .send()
                .await
                .map_err(|e| CoreError::Network(format!("요청 수락 전송 실패: {e}")))?;

            let target = NotFoundTarget {
                resource_type: "FollowRequest",
                id,
            };
            self.check_response(resp, target).await?;
            Ok(())
        })
        .await
    }

    async fn decline_request(&self, id: &str) -> Result<(), CoreError> {
        let path = request_path(id)?;
        debug!("요청 거절 전송: {id}");

        self.execute_with_retry(|| async {
            let resp = self
                .authorized_request(reqwest::Method::DELETE, &path)
                .send()
                .await
                .map_err(|e| CoreError::Network(format!("요청 거절 전송 실패: {e}")))?;

            let target = NotFoundTarget {
                resource_type: "FollowRequest",
                id,
            };
            self.check_response(resp, target).await?;
            Ok(())
        })
        .await
    }
}
