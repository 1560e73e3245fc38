//! 인박스 탭 식별자.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// 인박스 컨테이너의 상호 배타적 뷰
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InboxTab {
    Activity,
    /// 첫 진입 시 선택되는 탭
    #[default]
    Requests,
    #[serde(rename = "authorlist")]
    AuthorList,
    #[serde(rename = "remposts")]
    RemPosts,
}

impl InboxTab {
    /// 표시 순서대로 전체 탭
    pub const ALL: [InboxTab; 4] = [
        InboxTab::Activity,
        InboxTab::Requests,
        InboxTab::AuthorList,
        InboxTab::RemPosts,
    ];

    /// 탭 ID (`"requests"` 등)
    pub fn id(&self) -> &'static str {
        match self {
            InboxTab::Activity => "activity",
            InboxTab::Requests => "requests",
            InboxTab::AuthorList => "authorlist",
            InboxTab::RemPosts => "remposts",
        }
    }

    /// 탭 제목
    pub fn title(&self) -> &'static str {
        match self {
            InboxTab::Activity => "Activity",
            InboxTab::Requests => "Friend Requests",
            InboxTab::AuthorList => "AuthorList",
            InboxTab::RemPosts => "RemPosts",
        }
    }
}

impl fmt::Display for InboxTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for InboxTab {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        InboxTab::ALL
            .into_iter()
            .find(|tab| tab.id() == normalized)
            .ok_or_else(|| CoreError::Validation {
                field: "tab".to_string(),
                message: format!("알 수 없는 탭: {s}"),
            })
    }
}
