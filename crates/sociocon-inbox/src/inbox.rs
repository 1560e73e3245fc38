//! 인박스 컨테이너.
//!
//! 탭 선택 상태, 요청 목록, 액션 디스패처를 한 곳에서 소유한다.

use sociocon_core::config::InboxConfig;
use sociocon_core::error::CoreError;
use sociocon_core::models::follow::RequestAction;
use sociocon_core::models::tab::InboxTab;
use sociocon_core::ports::follow_api::FollowRequestApi;
use std::sync::Arc;

use crate::dispatcher::ActionDispatcher;
use crate::presenter::{present_all, RequestView};
use crate::store::RequestListStore;
use crate::tabs::TabSelection;

/// 인박스
pub struct Inbox {
    api: Arc<dyn FollowRequestApi>,
    tabs: TabSelection,
    requests: RequestListStore,
    dispatcher: ActionDispatcher,
}

impl Inbox {
    /// 설정에 따라 인박스 구성
    pub fn new(api: Arc<dyn FollowRequestApi>, config: &InboxConfig) -> Self {
        let dispatcher = if config.write_back {
            ActionDispatcher::with_write_back(api.clone())
        } else {
            ActionDispatcher::local()
        };

        Self {
            api,
            tabs: TabSelection::starting_at(config.initial_tab),
            requests: RequestListStore::new(),
            dispatcher,
        }
    }

    pub async fn refresh(&mut self) -> Result<usize, CoreError> {
        self.requests.refresh(self.api.as_ref()).await
    }

    pub async fn accept(&mut self, id: &str) -> Result<bool, CoreError> {
        self.dispatcher.accept(&mut self.requests, id).await
    }

    pub async fn decline(&mut self, id: &str) -> Result<bool, CoreError> {
        self.dispatcher.decline(&mut self.requests, id).await
    }

    pub async fn dispatch(&mut self, action: RequestAction, id: &str) -> Result<bool, CoreError> {
        self.dispatcher.dispatch(&mut self.requests, action, id).await
    }

    pub fn select_tab(&mut self, tab: InboxTab) {
        self.tabs.select(tab);
    }

    pub fn tabs(&self) -> &TabSelection {
        &self.tabs
    }

    pub fn requests(&self) -> &RequestListStore {
        &self.requests
    }

    /// 현재 요청 목록의 표시용 행
    pub fn request_views(&self) -> Vec<RequestView> {
        present_all(self.requests.items())
    }
}
