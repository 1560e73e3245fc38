//! 요청 프레젠터.
//!
//! FollowRequest → 표시용 행 변환.

use sociocon_core::models::follow::FollowRequest;

/// 표시용 요청 데이터
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestView {
    pub id: String,
    pub url: String,
    /// 안내 문구
    pub message: String,
}

/// FollowRequest → RequestView 변환
pub fn present(request: &FollowRequest) -> RequestView {
    RequestView {
        id: request.id.clone(),
        url: request.url.clone(),
        message: format!("{} has sent you a friend request", request.id),
    }
}

/// 여러 요청 일괄 변환 (순서 유지)
pub fn present_all(requests: &[FollowRequest]) -> Vec<RequestView> {
    requests.iter().map(present).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_requester() {
        let view = present(&FollowRequest::new("bob", "bobs_url"));
        assert_eq!(view.message, "bob has sent you a friend request");
        assert_eq!(view.url, "bobs_url");
    }

    #[test]
    fn present_all_keeps_order() {
        let views = present_all(&[
            FollowRequest::new("bob", ""),
            FollowRequest::new("tim", ""),
        ]);
        let ids: Vec<_> = views.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["bob", "tim"]);
    }
}
