//! 팔로우(친구) 요청 모델.
//!
//! 서버 `/follows/incoming/` 응답의 항목과 목록 봉투(envelope).

use serde::{Deserialize, Serialize};

/// 대기 중인 팔로우 요청
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowRequest {
    /// 요청자 기준 고유 ID
    pub id: String,
    /// 요청자 리소스 참조 (불투명 URL)
    #[serde(default)]
    pub url: String,
}

impl FollowRequest {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }
}

/// 목록 응답 봉투 — `{"type": "followRequests", "items": [...]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FollowRequestList {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub items: Vec<FollowRequest>,
}

/// 요청별 로컬 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestState {
    /// 목록에 남아 있음
    Pending,
    /// 수락/거절로 목록에서 제거됨
    Removed,
}

/// 요청에 대한 사용자 액션
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestAction {
    Accept,
    Decline,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_server_envelope() {
        let json = r#"{"type":"followRequests","items":[{"id":"bob","url":"bobs_url"},{"id":"tim","url":"tims_url"}]}"#;
        let list: FollowRequestList = serde_json::from_str(json).unwrap();
        assert_eq!(list.kind.as_deref(), Some("followRequests"));
        assert_eq!(
            list.items,
            vec![
                FollowRequest::new("bob", "bobs_url"),
                FollowRequest::new("tim", "tims_url"),
            ]
        );
    }

    #[test]
    fn ignores_extra_fields_and_missing_url() {
        let json = r#"{"items":[{"id":"bob","actor":{"displayName":"Bob"},"hasAccepted":false}]}"#;
        let list: FollowRequestList = serde_json::from_str(json).unwrap();
        assert!(list.kind.is_none());
        assert_eq!(list.items[0].id, "bob");
        assert_eq!(list.items[0].url, "");
    }

    #[test]
    fn missing_items_is_empty() {
        let list: FollowRequestList = serde_json::from_str("{}").unwrap();
        assert!(list.items.is_empty());
    }
}
