//! 대기 요청 목록 저장소.
//!
//! 서버 순서를 유지하는 `Vec` 기반 목록. 변경은 `refresh`와 `remove`로만 일어난다.
//! 모든 변경이 `&mut self`를 거치므로 새로고침 중에는 다른 제거가 끼어들 수 없다.

use chrono::{DateTime, Utc};
use sociocon_core::error::CoreError;
use sociocon_core::models::follow::{FollowRequest, RequestState};
use sociocon_core::ports::follow_api::FollowRequestApi;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// 대기 중인 수신 요청 목록
#[derive(Debug, Default)]
pub struct RequestListStore {
    items: Vec<FollowRequest>,
    /// 마지막으로 본 이후 제거된 ID
    removed: HashSet<String>,
    last_refreshed: Option<DateTime<Utc>>,
}

impl RequestListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 원격 목록으로 전체 교체
    ///
    /// 실패 시 기존 목록은 그대로 두고 에러를 반환한다.
    pub async fn refresh(&mut self, api: &dyn FollowRequestApi) -> Result<usize, CoreError> {
        debug!("요청 목록 새로고침");

        match api.incoming_requests().await {
            Ok(items) => {
                self.replace_all(items);
                self.last_refreshed = Some(Utc::now());
                info!("요청 목록 새로고침 완료: {}건", self.items.len());
                Ok(self.items.len())
            }
            Err(e) => {
                warn!("요청 목록 새로고침 실패, 기존 {}건 유지: {e}", self.items.len());
                Err(e)
            }
        }
    }

    /// 목록 전체 교체 (중복 ID는 첫 항목만 유지)
    pub fn replace_all(&mut self, items: Vec<FollowRequest>) {
        let mut seen = HashSet::with_capacity(items.len());
        let mut unique = Vec::with_capacity(items.len());

        for item in items {
            if seen.insert(item.id.clone()) {
                unique.push(item);
            } else {
                warn!("중복 요청 ID 무시: {}", item.id);
            }
        }

        // 다시 내려온 ID는 Pending으로 복귀
        self.removed.retain(|id| !seen.contains(id));
        self.items = unique;
    }

    /// ID가 일치하는 항목 제거. 없으면 no-op
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|req| req.id != id);

        let removed = self.items.len() != before;
        if removed {
            self.removed.insert(id.to_string());
            debug!("요청 제거: {id}");
        }
        removed
    }

    /// 서버 순서대로 현재 항목
    pub fn items(&self) -> &[FollowRequest] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&FollowRequest> {
        self.items.iter().find(|req| req.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// 요청 상태 — 본 적 없는 ID는 `None`
    pub fn state(&self, id: &str) -> Option<RequestState> {
        if self.contains(id) {
            Some(RequestState::Pending)
        } else if self.removed.contains(id) {
            Some(RequestState::Removed)
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 마지막 성공한 새로고침 시각
    pub fn last_refreshed(&self) -> Option<DateTime<Utc>> {
        self.last_refreshed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MockFollowApi;

    fn bob_and_tim() -> Vec<FollowRequest> {
        vec![
            FollowRequest::new("bob", "bobs_url"),
            FollowRequest::new("tim", "tims_url"),
        ]
    }

    fn ids(store: &RequestListStore) -> Vec<&str> {
        store.items().iter().map(|r| r.id.as_str()).collect()
    }

    #[tokio::test]
    async fn refresh_keeps_server_order() {
        let api = MockFollowApi::with_incoming(bob_and_tim());
        let mut store = RequestListStore::new();

        let count = store.refresh(&api).await.unwrap();
        assert_eq!(count, 2);
        assert_eq!(ids(&store), vec!["bob", "tim"]);
        assert!(store.last_refreshed().is_some());
    }

    #[tokio::test]
    async fn refresh_replaces_previous_items() {
        let mut store = RequestListStore::new();
        store.replace_all(vec![FollowRequest::new("old", "")]);

        let api = MockFollowApi::with_incoming(bob_and_tim());
        store.refresh(&api).await.unwrap();
        assert_eq!(ids(&store), vec!["bob", "tim"]);
    }

    #[tokio::test]
    async fn failed_refresh_keeps_items() {
        let mut store = RequestListStore::new();
        store.replace_all(bob_and_tim());

        let api = MockFollowApi::failing();
        let err = store.refresh(&api).await.unwrap_err();
        assert!(matches!(err, CoreError::Network(_)));
        assert_eq!(ids(&store), vec!["bob", "tim"]);
        assert!(store.last_refreshed().is_none());
    }

    #[test]
    fn remove_filters_by_id() {
        let mut store = RequestListStore::new();
        store.replace_all(bob_and_tim());

        assert!(store.remove("bob"));
        assert_eq!(ids(&store), vec!["tim"]);
    }

    #[test]
    fn remove_missing_is_noop() {
        let mut store = RequestListStore::new();
        store.replace_all(bob_and_tim());

        assert!(!store.remove("x"));
        assert_eq!(ids(&store), vec!["bob", "tim"]);
        assert_eq!(store.state("x"), None);
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let mut store = RequestListStore::new();
        store.replace_all(vec![
            FollowRequest::new("bob", "first"),
            FollowRequest::new("tim", ""),
            FollowRequest::new("bob", "second"),
        ]);

        assert_eq!(ids(&store), vec!["bob", "tim"]);
        assert_eq!(store.get("bob").unwrap().url, "first");
    }

    #[test]
    fn state_transitions() {
        let mut store = RequestListStore::new();
        store.replace_all(bob_and_tim());
        assert_eq!(store.state("bob"), Some(RequestState::Pending));

        store.remove("bob");
        assert_eq!(store.state("bob"), Some(RequestState::Removed));

        // 서버가 다시 내려주면 Pending 복귀
        store.replace_all(bob_and_tim());
        assert_eq!(store.state("bob"), Some(RequestState::Pending));
    }

    #[test]
    fn empty_store() {
        let store = RequestListStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.get("bob").is_none());
    }
}
