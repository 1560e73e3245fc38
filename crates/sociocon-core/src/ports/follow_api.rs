//! 팔로우 요청 API 포트.
//!
//! 구현: `sociocon-network` crate (reqwest)

use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::follow::FollowRequest;

/// 팔로우 요청 원격 API
#[async_trait]
pub trait FollowRequestApi: Send + Sync {
    /// 수신 대기 중인 요청 목록 (서버 순서 유지)
    async fn incoming_requests(&self) -> Result<Vec<FollowRequest>, CoreError>;

    /// 내가 보낸, 아직 수락되지 않은 요청 목록
    async fn outgoing_requests(&self) -> Result<Vec<FollowRequest>, CoreError>;

    /// 요청 수락 (write-back)
    async fn accept_request(&self, id: &str) -> Result<(), CoreError>;

    /// 요청 거절/삭제 (write-back)
    async fn decline_request(&self, id: &str) -> Result<(), CoreError>;
}
