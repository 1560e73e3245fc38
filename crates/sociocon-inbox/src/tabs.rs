//! 인박스 탭 선택 상태.

use sociocon_core::models::tab::InboxTab;
use tracing::debug;

/// 컨테이너가 소유하는 현재 탭
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabSelection {
    current: InboxTab,
}

impl TabSelection {
    /// `requests` 탭에서 시작
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(tab: InboxTab) -> Self {
        Self { current: tab }
    }

    pub fn current(&self) -> InboxTab {
        self.current
    }

    pub fn select(&mut self, tab: InboxTab) {
        if self.current != tab {
            debug!("탭 전환: {} → {}", self.current, tab);
            self.current = tab;
        }
    }

    pub fn is_active(&self, tab: InboxTab) -> bool {
        self.current == tab
    }

    /// 표시 순서대로 (탭, 활성 여부)
    pub fn tabs(&self) -> impl Iterator<Item = (InboxTab, bool)> + '_ {
        InboxTab::ALL
            .into_iter()
            .map(move |tab| (tab, self.is_active(tab)))
    }
}
