//! Error types for MCEngine
//!
//! 호스트 런타임과 확장 모듈의 모든 에러를 중앙에서 관리

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// MCEngine 에러 타입
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // 설정 관련
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // 권한 관련
    // ========================================================================
    /// 호스트가 커맨드 레지스트리를 노출하지 않거나 접근이 거부됨
    #[error("Privileged access denied: {0}")]
    PrivilegedAccess(String),

    // ========================================================================
    // 커맨드 관련
    // ========================================================================
    #[error("Command already registered: {0}")]
    DuplicateCommand(String),

    #[error("Unknown command: {0}")]
    CommandNotFound(String),

    #[error("Invalid command registration: {0}")]
    InvalidRegistration(String),

    // ========================================================================
    // 이벤트 관련
    // ========================================================================
    #[error("Event bus is closed")]
    EventBusClosed,

    // ========================================================================
    // 확장 모듈 관련
    // ========================================================================
    #[error("Extension error: {0}")]
    Extension(String),

    #[error("Extension not found: {0}")]
    ExtensionNotFound(String),

    #[error("Extension already loaded: {0}")]
    ExtensionAlreadyLoaded(String),

    // ========================================================================
    // 일반
    // ========================================================================
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ========================================================================
    // 외부 에러 변환
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

impl Error {
    /// 명령을 입력한 사용자에게 그대로 보여줄 수 있는 에러인지 확인
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Error::CommandNotFound(_) | Error::InvalidInput(_) | Error::PrivilegedAccess(_)
        )
    }

    /// 권한 에러 생성 헬퍼
    pub fn privileged_access(message: impl Into<String>) -> Self {
        Error::PrivilegedAccess(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing() {
        assert!(Error::CommandNotFound("foo".into()).is_user_facing());
        assert!(!Error::EventBusClosed.is_user_facing());
        assert!(!Error::DuplicateCommand("lobby:hello".into()).is_user_facing());
    }

    #[test]
    fn test_display_includes_reason() {
        let err = Error::privileged_access("commandMap field is missing");
        assert_eq!(
            err.to_string(),
            "Privileged access denied: commandMap field is missing"
        );
    }
}
