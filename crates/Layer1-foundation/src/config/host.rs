//! Host Config - 호스트 런타임 설정
//!
//! 확장 모듈은 이 설정을 읽지 않습니다. 호스트(CLI)가 부팅할 때만 사용합니다.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 설정 폴더 이름
pub const HOST_CONFIG_DIR: &str = ".mcengine";

/// 설정 파일명
pub const HOST_CONFIG_FILE: &str = "host.toml";

/// 호스트 설정
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// 호스트 플러그인 이름 (커맨드 네임스페이스의 원본)
    pub plugin_name: String,

    /// 기본 로그 레벨 (RUST_LOG가 없을 때)
    pub log_level: String,

    /// 이벤트 히스토리 보관 개수
    pub event_history_size: usize,

    /// 이벤트 브로드캐스트 채널 용량
    pub event_channel_capacity: usize,

    /// 확장 로드 실패 시 계속 진행
    pub continue_on_error: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            plugin_name: "MCEngineArtificialIntelligence".to_string(),
            log_level: "info".to_string(),
            event_history_size: 100,
            event_channel_capacity: 256,
            continue_on_error: true,
        }
    }
}

impl HostConfig {
    // ========================================================================
    // Load / Save
    // ========================================================================

    /// 기본 설정 파일 경로 (`~/.mcengine/host.toml`)
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(HOST_CONFIG_DIR)
            .join(HOST_CONFIG_FILE)
    }

    /// 파일에서 로드 (파일이 없으면 에러)
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded host config from: {}", path.display());
        Ok(config)
    }

    /// 파일이 없으면 기본값
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No host config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// 파일로 저장
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    // ========================================================================
    // 검증
    // ========================================================================

    pub fn validate(&self) -> Result<()> {
        if self.plugin_name.trim().is_empty() {
            return Err(Error::Config("plugin_name must not be empty".into()));
        }
        if self.plugin_name.contains(':') || self.plugin_name.chars().any(char::is_whitespace) {
            return Err(Error::Config(format!(
                "plugin_name '{}' must not contain ':' or whitespace",
                self.plugin_name
            )));
        }
        if self.event_history_size == 0 || self.event_channel_capacity == 0 {
            return Err(Error::Config(
                "event_history_size and event_channel_capacity must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
