//! Event types - 호스트 이벤트 정의

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 이벤트 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    // 확장 모듈 이벤트
    ExtensionLoaded,
    ExtensionUnloaded,

    // 커맨드 이벤트
    CommandDispatched,

    // 플레이어 이벤트
    PlayerJoin,
    PlayerQuit,

    // 서버 이벤트
    ServerTick,

    // 사용자 정의 이벤트
    Custom,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExtensionLoaded => write!(f, "extension_loaded"),
            Self::ExtensionUnloaded => write!(f, "extension_unloaded"),
            Self::CommandDispatched => write!(f, "command_dispatched"),
            Self::PlayerJoin => write!(f, "player_join"),
            Self::PlayerQuit => write!(f, "player_quit"),
            Self::ServerTick => write!(f, "server_tick"),
            Self::Custom => write!(f, "custom"),
        }
    }
}

/// 호스트 이벤트
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostEvent {
    /// 이벤트 종류
    pub kind: EventKind,

    /// 이벤트 데이터
    pub data: Value,

    /// 타임스탬프
    pub timestamp: DateTime<Utc>,

    /// 소스 (이벤트 발생 위치)
    pub source: String,
}

impl HostEvent {
    /// 새 이벤트 생성
    pub fn new(kind: EventKind, data: Value, source: impl Into<String>) -> Self {
        Self {
            kind,
            data,
            timestamp: Utc::now(),
            source: source.into(),
        }
    }

    /// 데이터 없는 이벤트
    pub fn simple(kind: EventKind) -> Self {
        Self::new(kind, Value::Null, "host")
    }
}

// ============================================================================
// 헬퍼 함수
// ============================================================================

/// 확장 로드 이벤트
pub fn extension_loaded_event(extension: &str, outcome: &str) -> HostEvent {
    HostEvent::new(
        EventKind::ExtensionLoaded,
        serde_json::json!({
            "extension": extension,
            "outcome": outcome,
        }),
        "extension_manager",
    )
}

/// 확장 언로드 이벤트
pub fn extension_unloaded_event(extension: &str) -> HostEvent {
    HostEvent::new(
        EventKind::ExtensionUnloaded,
        serde_json::json!({ "extension": extension }),
        "extension_manager",
    )
}

/// 커맨드 실행 이벤트
pub fn command_dispatched_event(command: &str, sender: &str, success: bool) -> HostEvent {
    HostEvent::new(
        EventKind::CommandDispatched,
        serde_json::json!({
            "command": command,
            "sender": sender,
            "success": success,
        }),
        "command_registry",
    )
}
