//! 설정 파일 관리.
//!
//! 플랫폼별 설정 디렉토리의 JSON 파일을 `SOCIOCON__*` 환경변수와 합쳐 로드한다.
//! 저장은 파일에 있던 값만 대상으로 하므로 환경변수로 주입한 토큰은 디스크에 남지 않는다.

use crate::config::AppConfig;
use crate::error::CoreError;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 설정 파일 이름
const CONFIG_FILE_NAME: &str = "config.json";

/// 환경변수 접두사 (`SOCIOCON__SERVER__BASE_URL` → `server.base_url`)
const ENV_PREFIX: &str = "SOCIOCON";

/// 환경변수 키 구분자
const ENV_SEPARATOR: &str = "__";

/// 설정 관리자
///
/// 설정 파일의 로드/저장과 환경변수 오버레이를 관리한다.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// 파일 + 환경변수를 합친 유효 설정
    effective: AppConfig,
    /// 파일에 저장된 설정
    file_config: AppConfig,
    /// 설정 파일 경로
    config_path: PathBuf,
    /// 테스트용 환경변수 대체 소스 (None이면 프로세스 환경 사용)
    env_override: Option<config::Map<String, String>>,
}

impl ConfigManager {
    /// 플랫폼 기본 경로로 설정 관리자 생성
    ///
    /// 설정 파일이 없으면 기본 설정을 생성하고 저장한다.
    pub fn new() -> Result<Self, CoreError> {
        let config_path = Self::default_config_path()?;
        Self::with_path(config_path)
    }

    /// 지정된 경로로 설정 관리자 생성
    pub fn with_path(config_path: PathBuf) -> Result<Self, CoreError> {
        Self::build(config_path, None)
    }

    /// 환경변수 대신 주어진 맵을 오버레이로 사용 (테스트용)
    pub fn with_path_and_env(
        config_path: PathBuf,
        env: config::Map<String, String>,
    ) -> Result<Self, CoreError> {
        Self::build(config_path, Some(env))
    }

    fn build(
        config_path: PathBuf,
        env_override: Option<config::Map<String, String>>,
    ) -> Result<Self, CoreError> {
        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    CoreError::Config(format!(
                        "설정 디렉토리 생성 실패: {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
                info!("설정 디렉토리 생성: {}", parent.display());
            }
        }

        if !config_path.exists() {
            Self::save_to_file(&config_path, &AppConfig::default_config())?;
            info!("기본 설정 파일 생성: {}", config_path.display());
        }

        let mut manager = Self {
            effective: AppConfig::default_config(),
            file_config: AppConfig::default_config(),
            config_path,
            env_override,
        };
        manager.reload()?;
        Ok(manager)
    }

    /// 현재 유효 설정
    pub fn get(&self) -> &AppConfig {
        &self.effective
    }

    /// 파일 설정만 수정하여 저장한 뒤 다시 로드
    pub fn update_with<F>(&mut self, updater: F) -> Result<&AppConfig, CoreError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut file_config = self.file_config.clone();
        updater(&mut file_config);
        file_config.validate()?;

        Self::save_to_file(&self.config_path, &file_config)?;
        debug!("설정 저장 완료: {}", self.config_path.display());

        self.reload()?;
        Ok(&self.effective)
    }

    /// 설정 파일 경로 반환
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// 파일과 환경변수에서 설정 다시 로드
    pub fn reload(&mut self) -> Result<(), CoreError> {
        let file_config = Self::load_from_file(&self.config_path)?;
        let effective = self.load_layered()?;
        effective.validate()?;

        self.file_config = file_config;
        self.effective = effective;
        debug!("설정 로드 완료: {}", self.config_path.display());
        Ok(())
    }

    /// 플랫폼별 설정 디렉토리 경로
    ///
    /// - Linux: `~/.config/sociocon/`
    /// - macOS: `~/Library/Application Support/org.sociocon.sociocon/`
    /// - Windows: `%APPDATA%\sociocon\sociocon\config\`
    pub fn config_dir() -> Result<PathBuf, CoreError> {
        ProjectDirs::from("org", "sociocon", "sociocon")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| CoreError::Config("홈 디렉토리를 찾을 수 없습니다".to_string()))
    }

    /// 플랫폼별 기본 설정 파일 경로
    pub fn default_config_path() -> Result<PathBuf, CoreError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// 파일 + 환경변수 레이어 로드
    fn load_layered(&self) -> Result<AppConfig, CoreError> {
        let file = config::File::from(self.config_path.as_path())
            .format(config::FileFormat::Json)
            .required(false);
        let env = config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator(ENV_SEPARATOR)
            .separator(ENV_SEPARATOR)
            .source(self.env_override.clone());

        config::Config::builder()
            .add_source(file)
            .add_source(env)
            .build()
            .and_then(|c| c.try_deserialize::<AppConfig>())
            .map_err(|e| {
                CoreError::Config(format!(
                    "설정 로드 실패: {}: {}",
                    self.config_path.display(),
                    e
                ))
            })
    }

    /// 파일에서 설정 로드
    fn load_from_file(path: &Path) -> Result<AppConfig, CoreError> {
        let content = fs::read_to_string(path).map_err(|e| {
            CoreError::Config(format!("설정 파일 읽기 실패: {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            CoreError::Config(format!("설정 파일 파싱 실패: {}: {}", path.display(), e))
        })
    }

    /// 파일에 설정 저장
    fn save_to_file(path: &Path, config: &AppConfig) -> Result<(), CoreError> {
        let content = serde_json::to_string_pretty(config)
            .map_err(|e| CoreError::Config(format!("설정 직렬화 실패: {}", e)))?;

        fs::write(path, content).map_err(|e| {
            CoreError::Config(format!("설정 파일 저장 실패: {}: {}", path.display(), e))
        })?;

        Ok(())
    }
}
