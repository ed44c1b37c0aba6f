//! # mcengine-foundation
//!
//! Foundation layer for MCEngine:
//! - Error: 공통 에러 타입 (`Error`, `Result`)
//! - Logger: 확장 모듈용 컨텍스트 로거 (`ExtensionLogger`, `LogSink`)
//! - Config: 호스트 설정 (`HostConfig`)

pub mod config;
pub mod error;
pub mod logger;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Logger (확장 로거)
// ============================================================================
pub use logger::{
    ExtensionLogger, LogLevel, LogRecord, LogSink, LoggerContext, MemorySink, TracingSink,
};

// ============================================================================
// Config (설정)
// ============================================================================
pub use config::{HostConfig, HOST_CONFIG_DIR, HOST_CONFIG_FILE};
