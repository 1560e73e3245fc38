//! CLI 텍스트 출력.

use sociocon_core::config::AppConfig;
use sociocon_inbox::presenter::RequestView;
use sociocon_inbox::tabs::TabSelection;
use std::fmt::Write;
use std::path::Path;

/// 요청 목록 출력
pub fn render_requests(views: &[RequestView]) -> String {
    if views.is_empty() {
        return "대기 중인 요청 없음\n".to_string();
    }

    let mut out = String::new();
    for view in views {
        let _ = writeln!(out, "{}  [{}]", view.message, view.url);
    }
    out
}

/// 탭 목록 출력 (활성 탭은 `*`)
pub fn render_tabs(tabs: &TabSelection) -> String {
    let mut out = String::new();
    for (tab, active) in tabs.tabs() {
        let marker = if active { '*' } else { ' ' };
        let _ = writeln!(out, "{marker} {:<11} {}", tab.id(), tab.title());
    }
    out
}

/// 설정 출력 (토큰 마스킹)
pub fn render_config(config: &AppConfig, path: &Path) -> Result<String, serde_json::Error> {
    let mut value = serde_json::to_value(config)?;
    if let Some(token) = value.pointer_mut("/auth/token") {
        if !token.is_null() {
            *token = serde_json::Value::String("***".to_string());
        }
    }

    Ok(format!(
        "설정 파일: {}\n{}\n",
        path.display(),
        serde_json::to_string_pretty(&value)?
    ))
}
