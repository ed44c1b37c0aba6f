//! Extension Logger - 확장 모듈용 컨텍스트 로거
//!
//! 모든 로그 출력에 (plugin, category, subcategory) 접두어를 붙입니다.
//! 실제 출력은 `LogSink`가 담당하며, 기본 구현은 `tracing`으로 전달합니다.
//!
//! ```ignore
//! let logger = ExtensionLogger::new(
//!     LoggerContext::new("MCEngineArtificialIntelligence", "Agent", "ExampleAgent"),
//!     Arc::new(TracingSink),
//! );
//! logger.info("Enabled successfully.");
//! ```

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// LogLevel
// ============================================================================

/// 로그 레벨
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

// ============================================================================
// LoggerContext
// ============================================================================

/// 로거 컨텍스트 - 생성 후 변경되지 않는 (plugin, category, subcategory)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggerContext {
    plugin: String,
    category: String,
    subcategory: String,
}

impl LoggerContext {
    pub fn new(
        plugin: impl Into<String>,
        category: impl Into<String>,
        subcategory: impl Into<String>,
    ) -> Self {
        Self {
            plugin: plugin.into(),
            category: category.into(),
            subcategory: subcategory.into(),
        }
    }

    pub fn plugin(&self) -> &str {
        &self.plugin
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn subcategory(&self) -> &str {
        &self.subcategory
    }
}

// ============================================================================
// LogRecord / LogSink
// ============================================================================

/// 한 줄의 로그 기록
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: LogLevel,
    pub plugin: String,
    pub category: String,
    pub subcategory: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl LogRecord {
    /// 접두어가 포함된 출력용 문자열
    pub fn formatted(&self) -> String {
        format!("[{}] [{}] {}", self.category, self.subcategory, self.message)
    }
}

/// 로그 출력 기능 (호스트가 제공)
pub trait LogSink: Send + Sync {
    fn log(&self, record: &LogRecord);
}

/// `tracing` 이벤트로 전달하는 기본 Sink
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, record: &LogRecord) {
        let line = record.formatted();
        match record.level {
            LogLevel::Debug => tracing::debug!(
                target: "mcengine::extension",
                plugin = %record.plugin,
                category = %record.category,
                subcategory = %record.subcategory,
                "{}",
                line
            ),
            LogLevel::Info => tracing::info!(
                target: "mcengine::extension",
                plugin = %record.plugin,
                category = %record.category,
                subcategory = %record.subcategory,
                "{}",
                line
            ),
            LogLevel::Warning => tracing::warn!(
                target: "mcengine::extension",
                plugin = %record.plugin,
                category = %record.category,
                subcategory = %record.subcategory,
                "{}",
                line
            ),
            LogLevel::Error => tracing::error!(
                target: "mcengine::extension",
                plugin = %record.plugin,
                category = %record.category,
                subcategory = %record.subcategory,
                "{}",
                line
            ),
        }
    }
}

/// 메모리에 기록을 보관하는 Sink (진단/테스트용)
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<LogRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// 지금까지의 기록 복사본
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// 특정 레벨의 메시지만
    pub fn messages_at(&self, level: LogLevel) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.level == level)
            .map(|r| r.message.clone())
            .collect()
    }

    /// 메시지 중 하나라도 `needle`을 포함하는지
    pub fn contains(&self, level: LogLevel, needle: &str) -> bool {
        self.records
            .lock()
            .iter()
            .any(|r| r.level == level && r.message.contains(needle))
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl LogSink for MemorySink {
    fn log(&self, record: &LogRecord) {
        self.records.lock().push(record.clone());
    }
}

// ============================================================================
// ExtensionLogger
// ============================================================================

/// 확장 모듈 로거
#[derive(Clone)]
pub struct ExtensionLogger {
    context: LoggerContext,
    sink: Arc<dyn LogSink>,
}

impl ExtensionLogger {
    pub fn new(context: LoggerContext, sink: Arc<dyn LogSink>) -> Self {
        Self { context, sink }
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        let record = LogRecord {
            level,
            plugin: self.context.plugin.clone(),
            category: self.context.category.clone(),
            subcategory: self.context.subcategory.clone(),
            message: message.into(),
            timestamp: Utc::now(),
        };
        self.sink.log(&record);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }
}

impl fmt::Debug for ExtensionLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtensionLogger")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}
