//! # sociocon-inbox
//!
//! 인박스 파이프라인.
//! 서버에서 대기 중인 팔로우 요청을 받아 로컬 목록으로 유지하고,
//! 수락/거절 액션을 목록 제거(및 선택적 서버 반영)로 처리한다.
//! 탭 선택 상태와 표시용 변환도 여기서 관리한다.

pub mod dispatcher;
pub mod inbox;
pub mod presenter;
pub mod store;
pub mod tabs;

#[cfg(test)]
mod test_support;
