//! 이벤트 리스너

use async_trait::async_trait;
use mcengine_core::{EventKind, EventListener, HostEvent};
use mcengine_foundation::ExtensionLogger;

/// AI Agent 예제 리스너
///
/// 구독만 하고 아무 이벤트도 받지 않습니다. 처리할 이벤트가 생기면
/// `interests`에 종류를 추가하고 `on_event`를 채우면 됩니다.
#[derive(Debug, Clone)]
pub struct AiAgentListener {
    plugin_name: String,
    logger: ExtensionLogger,
}

impl AiAgentListener {
    pub fn new(plugin_name: impl Into<String>, logger: ExtensionLogger) -> Self {
        Self {
            plugin_name: plugin_name.into(),
            logger,
        }
    }

    pub fn plugin_name(&self) -> &str {
        &self.plugin_name
    }

    pub fn logger(&self) -> &ExtensionLogger {
        &self.logger
    }
}

#[async_trait]
impl EventListener for AiAgentListener {
    fn name(&self) -> &str {
        "ai-agent-example-listener"
    }

    fn interests(&self) -> Option<Vec<EventKind>> {
        Some(Vec::new())
    }

    async fn on_event(&self, _event: &HostEvent) {}
}
