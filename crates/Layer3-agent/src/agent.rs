//! Extension entry point - AI Agent 예제 모듈
//!
//! 로드 시 리스너를 이벤트 버스에 등록하고 `/aiagentexample` 커맨드를
//! 호스트의 커맨드 레지스트리에 등록합니다. 두 단계는 서로 독립적이라
//! 한쪽이 실패해도 다른 쪽은 계속 진행합니다.

use crate::command::AiAgentCommand;
use crate::listener::AiAgentListener;
use crate::tab_completer::AiAgentTabCompleter;
use async_trait::async_trait;
use mcengine_core::{
    Command, Extension, HostHandle, ListenerId, LoadIssue, LoadOutcome, LoadStep,
    RegistrationHandle,
};
use mcengine_foundation::{ExtensionLogger, LoggerContext};
use std::sync::Arc;
use tracing::debug;

/// 호스트에 등록되는 고정 확장 ID (재설치해도 동일)
pub const EXTENSION_ID: &str = "mcengine-artificialintelligence-agent-example";

pub const COMMAND_NAME: &str = "aiagentexample";
pub const COMMAND_DESCRIPTION: &str = "Artificial Intelligence Agent example command.";
pub const COMMAND_USAGE: &str = "/aiagentexample";

pub const LOGGER_CATEGORY: &str = "Agent";
pub const LOGGER_SUBCATEGORY: &str = "ArtificialIntelligenceExampleAgent";

/// `/aiagentexample` 등록 레코드
pub fn build_command() -> Command {
    Command::new(COMMAND_NAME, Arc::new(AiAgentCommand))
        .with_description(COMMAND_DESCRIPTION)
        .with_usage(COMMAND_USAGE)
        .with_completer(Arc::new(AiAgentTabCompleter))
}

/// AI Agent 예제 확장
#[derive(Debug, Default)]
pub struct ExampleAiAgent {
    logger: Option<ExtensionLogger>,
    registration: Option<RegistrationHandle>,
    listeners: Vec<ListenerId>,
}

impl ExampleAiAgent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn logger(&self) -> Option<&ExtensionLogger> {
        self.logger.as_ref()
    }

    /// 현재 유지 중인 커맨드 등록
    pub fn registration(&self) -> Option<&RegistrationHandle> {
        self.registration.as_ref()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    async fn register_listener(
        &mut self,
        host: &HostHandle,
        logger: &ExtensionLogger,
    ) -> Result<(), LoadIssue> {
        let listener = AiAgentListener::new(host.plugin_name(), logger.clone());
        let id = host
            .event_bus()
            .subscribe(Arc::new(listener))
            .await
            .map_err(|e| LoadIssue::new(LoadStep::Listener, e))?;
        self.listeners.push(id);
        Ok(())
    }

    async fn register_command(&mut self, host: &HostHandle) -> Result<(), LoadIssue> {
        let registrar = host
            .command_registrar()
            .map_err(|e| LoadIssue::new(LoadStep::CommandRegistrar, e))?;
        let handle = registrar
            .register(&host.namespace(), build_command())
            .await
            .map_err(|e| LoadIssue::new(LoadStep::CommandRegistration, e))?;
        self.registration = Some(handle);
        Ok(())
    }
}

#[async_trait]
impl Extension for ExampleAiAgent {
    /// 전달받은 ID는 무시하고 항상 `EXTENSION_ID`를 지정
    fn set_id(&mut self, host: &HostHandle, id: &str) {
        if id != EXTENSION_ID {
            debug!("Ignoring requested extension id '{}', using {}", id, EXTENSION_ID);
        }
        host.extension_ids().assign(EXTENSION_ID);
    }

    async fn on_load(&mut self, host: &HostHandle) -> LoadOutcome {
        let logger = ExtensionLogger::new(
            LoggerContext::new(host.plugin_name(), LOGGER_CATEGORY, LOGGER_SUBCATEGORY),
            host.log_sink(),
        );
        self.logger = Some(logger.clone());

        let mut issues = Vec::new();
        let listener_ok = match self.register_listener(host, &logger).await {
            Ok(()) => true,
            Err(issue) => {
                issues.push(issue);
                false
            }
        };
        let command_ok = match self.register_command(host).await {
            Ok(()) => true,
            Err(issue) => {
                issues.push(issue);
                false
            }
        };

        if issues.is_empty() {
            logger.info("Enabled successfully.");
        }
        for issue in &issues {
            logger.warning(format!(
                "Failed to initialize ExampleArtificialIntelligenceAgent: {}",
                issue.reason
            ));
        }

        LoadOutcome::from_issues(issues, listener_ok || command_ok)
    }

    async fn on_disload(&mut self, host: &HostHandle) {
        let Some(logger) = self.logger.take() else {
            return;
        };

        if let Some(handle) = self.registration.take() {
            let result = match host.command_registrar() {
                Ok(registrar) => registrar.unregister(&handle).await,
                Err(e) => Err(e),
            };
            if let Err(e) = result {
                logger.warning(format!("Failed to unregister /{}: {}", handle.key(), e));
            }
        }

        for id in self.listeners.drain(..) {
            host.event_bus().unsubscribe(id).await;
        }

        logger.info("Disabled.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcengine_core::CommandRegistry;
    use mcengine_foundation::{LogLevel, MemorySink};

    fn host(sink: &Arc<MemorySink>) -> (HostHandle, Arc<CommandRegistry>) {
        let registry = Arc::new(CommandRegistry::new());
        let handle = HostHandle::new("MCEngineArtificialIntelligence")
            .with_command_registrar(registry.clone())
            .with_log_sink(sink.clone());
        (handle, registry)
    }

    #[test]
    fn test_command_record_metadata() {
        let command = build_command();
        assert_eq!(command.name(), "aiagentexample");
        assert_eq!(command.description(), "Artificial Intelligence Agent example command.");
        assert_eq!(command.usage(), "/aiagentexample");
    }

    #[test]
    fn test_set_id_ignores_caller_id() {
        let sink = Arc::new(MemorySink::new());
        let (host, _) = host(&sink);
        let mut agent = ExampleAiAgent::new();

        agent.set_id(&host, "first-choice");
        let first = host.extension_ids().current();
        agent.set_id(&host, "something-else");
        let second = host.extension_ids().current();

        assert_eq!(first.as_deref(), Some(EXTENSION_ID));
        assert_eq!(first, second);
        assert!(!host.extension_ids().contains("first-choice"));
        assert_eq!(host.extension_ids().assigned().len(), 1);
    }

    #[tokio::test]
    async fn test_load_logs_enabled_with_context() {
        let sink = Arc::new(MemorySink::new());
        let (host, registry) = host(&sink);
        let mut agent = ExampleAiAgent::new();

        assert!(agent.on_load(&host).await.is_ready());
        assert!(registry.contains("mcengineartificialintelligence:aiagentexample").await);

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, LogLevel::Info);
        assert_eq!(records[0].message, "Enabled successfully.");
        assert_eq!(records[0].category, LOGGER_CATEGORY);
        assert_eq!(records[0].subcategory, LOGGER_SUBCATEGORY);
    }

    #[tokio::test]
    async fn test_disload_without_load_is_silent() {
        let sink = Arc::new(MemorySink::new());
        let (host, _) = host(&sink);
        let mut agent = ExampleAiAgent::new();

        agent.on_disload(&host).await;
        assert!(sink.records().is_empty());
    }
}
