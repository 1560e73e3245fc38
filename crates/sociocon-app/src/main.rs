//! # sociocon-app
//!
//! Sociocon 인박스 CLI 바이너리 진입점.
//! 설정 로드, 어댑터 와이어링, 명령 처리.

mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sociocon_core::config::AppConfig;
use sociocon_core::config_manager::ConfigManager;
use sociocon_core::models::follow::RequestAction;
use sociocon_core::models::tab::InboxTab;
use sociocon_core::ports::follow_api::FollowRequestApi;
use sociocon_inbox::inbox::Inbox;
use sociocon_inbox::presenter::present_all;
use sociocon_network::auth::ApiCredentials;
use sociocon_network::http_client::HttpFollowClient;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Sociocon 인박스 클라이언트
#[derive(Parser, Debug)]
#[command(name = "sociocon")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// 설정 파일 경로 (기본: 플랫폼 설정 디렉토리의 config.json)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    /// 서버 URL 지정 (설정값 덮어쓰기)
    #[arg(long, short = 's', global = true)]
    server: Option<String>,

    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, short = 'l', default_value = "info", global = true)]
    log_level: String,

    /// 활성 탭 (activity, requests, authorlist, remposts)
    #[arg(long, short = 't', global = true)]
    tab: Option<InboxTab>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 대기 중인 요청 목록
    Requests {
        /// 내가 보낸 요청 목록
        #[arg(long)]
        outgoing: bool,
    },
    /// 요청 수락
    Accept { id: String },
    /// 요청 거절
    Decline { id: String },
    /// 탭 목록
    Tabs,
    /// 유효 설정 출력
    Config,
}

/// 설정 로드 + CLI 덮어쓰기
fn load_config(args: &Args) -> Result<(AppConfig, PathBuf)> {
    let manager = match &args.config {
        Some(path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    }
    .context("설정 로드 실패")?;

    let mut config = manager.get().clone();
    if let Some(server) = &args.server {
        config.server.base_url = server.clone();
        config.validate().context("--server 값 오류")?;
    }

    Ok((config, manager.config_path().to_path_buf()))
}

/// HTTP 어댑터 생성
fn build_api(config: &AppConfig) -> Result<Arc<dyn FollowRequestApi>> {
    let credentials = ApiCredentials::from_config(&config.auth)?;
    let client = HttpFollowClient::new(
        &config.server.base_url,
        credentials,
        config.server.request_timeout(),
    )?
    .with_max_retries(config.server.max_retries);

    Ok(Arc::new(client))
}

/// 요청 탭이 아니면 안내 후 false
fn ensure_requests_tab(inbox: &Inbox) -> bool {
    let tab = inbox.tabs().current();
    if tab == InboxTab::Requests {
        return true;
    }
    println!("'{}' 탭은 클라이언트 데이터 소스가 없습니다. --tab requests 로 전환하세요.", tab.title());
    false
}

async fn run_action(inbox: &mut Inbox, action: RequestAction, id: &str) -> Result<()> {
    inbox.refresh().await.context("요청 목록 조회 실패")?;

    let removed = inbox
        .dispatch(action, id)
        .await
        .with_context(|| format!("{id} 처리 실패"))?;

    match (removed, action) {
        (true, RequestAction::Accept) => println!("✅ {id} 수락"),
        (true, RequestAction::Decline) => println!("❌ {id} 거절"),
        (false, _) => println!("{id}: 대기 중인 요청이 아님"),
    }
    print!("{}", render::render_requests(&inbox.request_views()));
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    let (config, config_path) = load_config(&args)?;
    debug!("설정 파일: {}", config_path.display());

    if let Command::Config = args.command {
        print!("{}", render::render_config(&config, &config_path)?);
        return Ok(());
    }

    let api = build_api(&config)?;
    let mut inbox = Inbox::new(api.clone(), &config.inbox);
    if let Some(tab) = args.tab {
        inbox.select_tab(tab);
    }
    info!(
        "서버: {}, write-back: {}",
        config.server.base_url, config.inbox.write_back
    );

    match &args.command {
        Command::Tabs => print!("{}", render::render_tabs(inbox.tabs())),
        Command::Requests { outgoing: true } => {
            let items = api
                .outgoing_requests()
                .await
                .context("보낸 요청 목록 조회 실패")?;
            print!("{}", render::render_requests(&present_all(&items)));
        }
        Command::Requests { outgoing: false } => {
            if ensure_requests_tab(&inbox) {
                inbox.refresh().await.context("요청 목록 조회 실패")?;
                print!("{}", render::render_requests(&inbox.request_views()));
            }
        }
        Command::Accept { id } => {
            if ensure_requests_tab(&inbox) {
                run_action(&mut inbox, RequestAction::Accept, id).await?;
            }
        }
        Command::Decline { id } => {
            if ensure_requests_tab(&inbox) {
                run_action(&mut inbox, RequestAction::Decline, id).await?;
            }
        }
        Command::Config => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parse_accept_with_tab() {
        let args = Args::try_parse_from(["sociocon", "--tab", "requests", "accept", "bob"]).unwrap();
        assert_eq!(args.tab, Some(InboxTab::Requests));
        assert!(matches!(args.command, Command::Accept { ref id } if id == "bob"));
    }

    #[test]
    fn unknown_tab_rejected() {
        assert!(Args::try_parse_from(["sociocon", "--tab", "messages", "tabs"]).is_err());
    }

    #[test]
    fn server_flag_overrides_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        let args = Args::try_parse_from([
            "sociocon",
            "--config",
            path.to_str().unwrap(),
            "--server",
            "https://social.example.com",
            "requests",
        ])
        .unwrap();

        let (config, config_path) = load_config(&args).unwrap();
        assert_eq!(config.server.base_url, "https://social.example.com");
        assert_eq!(config_path, path);
    }

    #[test]
    fn invalid_server_flag_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        let args = Args::try_parse_from([
            "sociocon",
            "-c",
            path.to_str().unwrap(),
            "-s",
            "not-a-url",
            "tabs",
        ])
        .unwrap();
        assert!(load_config(&args).is_err());
    }

    #[test]
    fn build_api_requires_token() {
        let config = AppConfig::default_config();
        assert!(build_api(&config).is_err());

        let mut config = AppConfig::default_config();
        config.auth.token = Some("k".to_string());
        assert!(build_api(&config).is_ok());
    }
}
