//! 수락/거절 액션 디스패처.
//!
//! 액션을 로컬 목록 제거로 변환한다. write-back이 켜져 있으면
//! 서버 반영이 성공한 뒤에만 제거한다. 서버에 이미 없는 요청의
//! 거절(404)은 성공으로 본다.

use sociocon_core::error::CoreError;
use sociocon_core::models::follow::RequestAction;
use sociocon_core::ports::follow_api::FollowRequestApi;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::store::RequestListStore;

/// 액션 디스패처
pub struct ActionDispatcher {
    /// 서버 반영용 포트 (None이면 로컬 전용)
    write_back: Option<Arc<dyn FollowRequestApi>>,
}

impl ActionDispatcher {
    /// 로컬 목록에서만 제거하는 디스패처
    pub fn local() -> Self {
        Self { write_back: None }
    }

    /// 서버에도 수락/거절을 반영하는 디스패처
    pub fn with_write_back(api: Arc<dyn FollowRequestApi>) -> Self {
        Self {
            write_back: Some(api),
        }
    }

    pub fn writes_back(&self) -> bool {
        self.write_back.is_some()
    }

    /// 요청 수락
    pub async fn accept(&self, store: &mut RequestListStore, id: &str) -> Result<bool, CoreError> {
        self.dispatch(store, RequestAction::Accept, id).await
    }

    /// 요청 거절
    pub async fn decline(
        &self,
        store: &mut RequestListStore,
        id: &str,
    ) -> Result<bool, CoreError> {
        self.dispatch(store, RequestAction::Decline, id).await
    }

    /// 액션 처리 공통 로직 — 실제로 제거됐으면 `true`
    pub async fn dispatch(
        &self,
        store: &mut RequestListStore,
        action: RequestAction,
        id: &str,
    ) -> Result<bool, CoreError> {
        if !store.contains(id) {
            debug!("목록에 없는 요청, 무시: {id} ({action:?})");
            return Ok(false);
        }

        if let Some(api) = &self.write_back {
            let result = match action {
                RequestAction::Accept => api.accept_request(id).await,
                RequestAction::Decline => api.decline_request(id).await,
            };
            match (result, action) {
                (Ok(()), _) => {}
                // 서버에 이미 없는 요청을 거절 → 결과는 동일하므로 로컬에서도 제거
                (Err(CoreError::NotFound { .. }), RequestAction::Decline) => {
                    debug!("서버에 없는 요청 거절, 로컬 제거: {id}");
                }
                (Err(e), _) => {
                    warn!("서버 반영 실패, 목록 유지: {id} ({action:?}): {e}");
                    return Err(e);
                }
            }
        }

        debug!("요청 처리: {id} → {action:?}");
        Ok(store.remove(id))
    }
}
