//! Host Handle - 확장 모듈에 전달되는 호스트 접근점

use super::ids::ExtensionIdRegistry;
use crate::event::EventBus;
use crate::registry::CommandRegistrar;
use mcengine_foundation::{Error, LogSink, Result, TracingSink};
use std::fmt;
use std::sync::Arc;

/// 호스트 핸들
///
/// 커맨드 등록 기능은 호스트가 명시적으로 공개한 경우에만 사용할 수 있습니다.
#[derive(Clone)]
pub struct HostHandle {
    plugin_name: String,
    event_bus: Arc<EventBus>,
    registrar: Option<Arc<dyn CommandRegistrar>>,
    extension_ids: Arc<ExtensionIdRegistry>,
    log_sink: Arc<dyn LogSink>,
}

impl HostHandle {
    /// 새 핸들 (커맨드 등록 기능 없음, `tracing` 로그)
    pub fn new(plugin_name: impl Into<String>) -> Self {
        Self {
            plugin_name: plugin_name.into(),
            event_bus: Arc::new(EventBus::new()),
            registrar: None,
            extension_ids: Arc::new(ExtensionIdRegistry::new()),
            log_sink: Arc::new(TracingSink),
        }
    }

    pub fn with_event_bus(mut self, event_bus: Arc<EventBus>) -> Self {
        self.event_bus = event_bus;
        self
    }

    pub fn with_command_registrar(mut self, registrar: Arc<dyn CommandRegistrar>) -> Self {
        self.registrar = Some(registrar);
        self
    }

    /// 커맨드 등록 기능 회수
    pub fn without_command_registrar(mut self) -> Self {
        self.registrar = None;
        self
    }

    pub fn with_extension_ids(mut self, extension_ids: Arc<ExtensionIdRegistry>) -> Self {
        self.extension_ids = extension_ids;
        self
    }

    pub fn with_log_sink(mut self, log_sink: Arc<dyn LogSink>) -> Self {
        self.log_sink = log_sink;
        self
    }

    // ========================================================================
    // 접근자
    // ========================================================================

    pub fn plugin_name(&self) -> &str {
        &self.plugin_name
    }

    /// 커맨드 네임스페이스 (플러그인 이름 소문자)
    pub fn namespace(&self) -> String {
        self.plugin_name.to_lowercase()
    }

    pub fn event_bus(&self) -> &Arc<EventBus> {
        &self.event_bus
    }

    /// 커맨드 등록 기능
    ///
    /// 호스트가 공개하지 않았으면 `Error::PrivilegedAccess`.
    pub fn command_registrar(&self) -> Result<Arc<dyn CommandRegistrar>> {
        self.registrar.clone().ok_or_else(|| {
            Error::privileged_access(format!(
                "host '{}' does not expose its command registry",
                self.plugin_name
            ))
        })
    }

    pub fn extension_ids(&self) -> &Arc<ExtensionIdRegistry> {
        &self.extension_ids
    }

    pub fn log_sink(&self) -> Arc<dyn LogSink> {
        Arc::clone(&self.log_sink)
    }
}

impl fmt::Debug for HostHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostHandle")
            .field("plugin_name", &self.plugin_name)
            .field("has_registrar", &self.registrar.is_some())
            .finish_non_exhaustive()
    }
}
