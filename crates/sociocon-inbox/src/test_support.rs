//! 단위 테스트용 `FollowRequestApi` 모의 구현.

use async_trait::async_trait;
use sociocon_core::error::CoreError;
use sociocon_core::models::follow::{FollowRequest, RequestAction};
use sociocon_core::ports::follow_api::FollowRequestApi;
use std::sync::Mutex;

#[derive(Default)]
pub(crate) struct MockFollowApi {
    incoming: Vec<FollowRequest>,
    fail: bool,
    missing: bool,
    pub(crate) calls: Mutex<Vec<(RequestAction, String)>>,
}

impl MockFollowApi {
    pub(crate) fn with_incoming(incoming: Vec<FollowRequest>) -> Self {
        Self {
            incoming,
            ..Self::default()
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// 목록 조회는 성공, 수락/거절은 404
    pub(crate) fn missing_on_server() -> Self {
        Self {
            missing: true,
            ..Self::default()
        }
    }

    pub(crate) fn recorded(&self) -> Vec<(RequestAction, String)> {
        self.calls.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), CoreError> {
        if self.fail {
            Err(CoreError::Network("connection refused".to_string()))
        } else {
            Ok(())
        }
    }

    fn check_exists(&self, id: &str) -> Result<(), CoreError> {
        self.check()?;
        if self.missing {
            return Err(CoreError::NotFound {
                resource_type: "FollowRequest".to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl FollowRequestApi for MockFollowApi {
    async fn incoming_requests(&self) -> Result<Vec<FollowRequest>, CoreError> {
        self.check()?;
        Ok(self.incoming.clone())
    }

    async fn outgoing_requests(&self) -> Result<Vec<FollowRequest>, CoreError> {
        self.check()?;
        Ok(Vec::new())
    }

    async fn accept_request(&self, id: &str) -> Result<(), CoreError> {
        self.check_exists(id)?;
        self.calls
            .lock()
            .unwrap()
            .push((RequestAction::Accept, id.to_string()));
        Ok(())
    }

    async fn decline_request(&self, id: &str) -> Result<(), CoreError> {
        self.check_exists(id)?;
        self.calls
            .lock()
            .unwrap()
            .push((RequestAction::Decline, id.to_string()));
        Ok(())
    }
}
