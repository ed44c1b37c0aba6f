//! Extension Manager - 확장 모듈 라이프사이클 관리
//!
//! 호스트 자원(커맨드 레지스트리, 이벤트 버스, 확장 ID 레지스트리)을 소유하고
//! 확장 모듈의 로드/언로드를 직렬화합니다.

use super::host::HostHandle;
use super::ids::ExtensionIdRegistry;
use super::traits::{Extension, LoadOutcome};
use crate::event::{
    command_dispatched_event, extension_loaded_event, extension_unloaded_event, EventBus,
    EventBusConfig,
};
use crate::registry::{CommandRegistry, DispatchOutcome};
use crate::sender::CommandSender;
use mcengine_foundation::{Error, HostConfig, Result};
use std::sync::Arc;
use tracing::{error, info, warn};

struct LoadedExtension {
    key: String,
    extension: Box<dyn Extension>,
    outcome: LoadOutcome,
}

/// 확장 매니저
pub struct ExtensionManager {
    commands: Arc<CommandRegistry>,
    handle: HostHandle,
    extensions: Vec<LoadedExtension>,
    continue_on_error: bool,
}

impl ExtensionManager {
    /// 설정으로 생성 (커맨드 등록 기능 공개)
    pub fn new(config: &HostConfig) -> Self {
        let commands = Arc::new(CommandRegistry::new());
        let event_bus = Arc::new(EventBus::with_config(EventBusConfig {
            channel_capacity: config.event_channel_capacity,
            history_size: config.event_history_size,
        }));
        let handle = HostHandle::new(config.plugin_name.clone())
            .with_event_bus(event_bus)
            .with_command_registrar(commands.clone())
            .with_extension_ids(Arc::new(ExtensionIdRegistry::new()));

        Self {
            commands,
            handle,
            extensions: Vec::new(),
            continue_on_error: config.continue_on_error,
        }
    }

    /// 직접 구성한 핸들로 생성
    ///
    /// `commands`는 호스트 쪽 실행/자동완성에 쓰이며, 핸들에 등록 기능이
    /// 없으면 확장 모듈은 여기에 커맨드를 넣을 수 없습니다.
    pub fn with_handle(
        commands: Arc<CommandRegistry>,
        handle: HostHandle,
        continue_on_error: bool,
    ) -> Self {
        Self {
            commands,
            handle,
            extensions: Vec::new(),
            continue_on_error,
        }
    }

    // ========================================================================
    // 로드/언로드
    // ========================================================================

    /// 확장 로드
    pub async fn load(&mut self, key: &str, mut extension: Box<dyn Extension>) -> Result<LoadOutcome> {
        if self.is_loaded(key) {
            return Err(Error::ExtensionAlreadyLoaded(key.to_string()));
        }

        info!("Loading extension: {}", key);
        extension.set_id(&self.handle, key);
        let outcome = extension.on_load(&self.handle).await;

        match &outcome {
            LoadOutcome::Ready => info!("Extension {} loaded successfully", key),
            LoadOutcome::Degraded { issues } => {
                for issue in issues {
                    warn!("Extension {} degraded: {}", key, issue);
                }
            }
            LoadOutcome::Fatal { issues } => {
                for issue in issues {
                    error!("Extension {} failed: {}", key, issue);
                }
            }
        }

        if outcome.is_fatal() && !self.continue_on_error {
            extension.on_disload(&self.handle).await;
            return Err(Error::Extension(format!(
                "Extension {} failed to load: {}",
                key, outcome
            )));
        }

        self.extensions.push(LoadedExtension {
            key: key.to_string(),
            extension,
            outcome: outcome.clone(),
        });

        self.handle
            .event_bus()
            .publish(extension_loaded_event(key, outcome.label()))
            .await;

        Ok(outcome)
    }

    /// 확장 언로드
    pub async fn unload(&mut self, key: &str) -> Result<()> {
        let index = self
            .extensions
            .iter()
            .position(|loaded| loaded.key == key)
            .ok_or_else(|| Error::ExtensionNotFound(key.to_string()))?;

        let mut loaded = self.extensions.remove(index);
        info!("Unloading extension: {}", key);
        loaded.extension.on_disload(&self.handle).await;

        self.handle
            .event_bus()
            .publish(extension_unloaded_event(key))
            .await;

        info!("Extension {} unloaded", key);
        Ok(())
    }

    /// 모든 확장을 역순으로 언로드하고 이벤트 버스 종료
    pub async fn shutdown(&mut self) {
        while let Some(mut loaded) = self.extensions.pop() {
            info!("Unloading extension: {}", loaded.key);
            loaded.extension.on_disload(&self.handle).await;
            self.handle
                .event_bus()
                .publish(extension_unloaded_event(&loaded.key))
                .await;
        }
        self.handle.event_bus().close().await;
        info!("Host shut down");
    }

    // ========================================================================
    // 커맨드
    // ========================================================================

    /// 커맨드 실행
    pub async fn dispatch(&self, sender: &dyn CommandSender, line: &str) -> Result<DispatchOutcome> {
        let outcome = self.commands.dispatch(sender, line).await?;
        self.handle
            .event_bus()
            .publish(command_dispatched_event(&outcome.key, sender.name(), outcome.success))
            .await;
        Ok(outcome)
    }

    /// 자동완성
    pub async fn complete(&self, sender: &dyn CommandSender, line: &str) -> Vec<String> {
        self.commands.complete(sender, line).await
    }

    // ========================================================================
    // 접근자
    // ========================================================================

    pub fn is_loaded(&self, key: &str) -> bool {
        self.extensions.iter().any(|loaded| loaded.key == key)
    }

    /// 로드된 확장 목록 (로드 순)
    pub fn loaded(&self) -> Vec<(String, LoadOutcome)> {
        self.extensions
            .iter()
            .map(|loaded| (loaded.key.clone(), loaded.outcome.clone()))
            .collect()
    }

    pub fn handle(&self) -> &HostHandle {
        &self.handle
    }

    pub fn commands(&self) -> &Arc<CommandRegistry> {
        &self.commands
    }

    pub fn event_bus(&self) -> &Arc<EventBus> {
        self.handle.event_bus()
    }

    pub fn extension_ids(&self) -> &Arc<ExtensionIdRegistry> {
        self.handle.extension_ids()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Command, CommandExecutor};
    use crate::event::EventKind;
    use crate::extension::traits::{LoadIssue, LoadStep};
    use crate::registry::RegistrationHandle;
    use crate::sender::CapturingSender;
    use async_trait::async_trait;

    struct Pong;

    impl CommandExecutor for Pong {
        fn execute(&self, sender: &dyn CommandSender, _label: &str, _args: &[String]) -> bool {
            sender.send_message("pong");
            true
        }
    }

    #[derive(Default)]
    struct PingExtension {
        handle: Option<RegistrationHandle>,
    }

    #[async_trait]
    impl Extension for PingExtension {
        fn set_id(&mut self, host: &HostHandle, id: &str) {
            host.extension_ids().assign(id);
        }

        async fn on_load(&mut self, host: &HostHandle) -> LoadOutcome {
            let result = match host.command_registrar() {
                Ok(registrar) => {
                    registrar
                        .register(&host.namespace(), Command::new("ping", Arc::new(Pong)))
                        .await
                }
                Err(e) => Err(e),
            };
            match result {
                Ok(handle) => {
                    self.handle = Some(handle);
                    LoadOutcome::Ready
                }
                Err(e) => LoadOutcome::from_issues(
                    vec![LoadIssue::new(LoadStep::CommandRegistration, e)],
                    false,
                ),
            }
        }

        async fn on_disload(&mut self, host: &HostHandle) {
            if let (Some(handle), Ok(registrar)) = (self.handle.take(), host.command_registrar()) {
                let _ = registrar.unregister(&handle).await;
            }
        }
    }

    fn config() -> HostConfig {
        HostConfig {
            plugin_name: "Lobby".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_load_dispatch_unload() {
        let mut manager = ExtensionManager::new(&config());
        let outcome = manager
            .load("ping", Box::new(PingExtension::default()))
            .await
            .unwrap();

        assert!(outcome.is_ready());
        assert!(manager.is_loaded("ping"));
        assert!(manager.extension_ids().contains("ping"));

        let sender = CapturingSender::new("tester");
        let dispatched = manager.dispatch(&sender, "/lobby:ping").await.unwrap();
        assert!(dispatched.success);
        assert_eq!(sender.messages(), vec!["pong"]);

        let history = manager.event_bus().history_by_kind(EventKind::CommandDispatched).await;
        assert_eq!(history.len(), 1);

        manager.unload("ping").await.unwrap();
        assert!(!manager.commands().contains("lobby:ping").await);
        assert!(matches!(
            manager.unload("ping").await,
            Err(Error::ExtensionNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_duplicate_key_rejected() {
        let mut manager = ExtensionManager::new(&config());
        manager
            .load("ping", Box::new(PingExtension::default()))
            .await
            .unwrap();

        let err = manager
            .load("ping", Box::new(PingExtension::default()))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ExtensionAlreadyLoaded(_)));
    }

    #[tokio::test]
    async fn test_fatal_load_respects_continue_on_error() {
        let commands = Arc::new(CommandRegistry::new());
        let handle = HostHandle::new("Lobby");

        let mut lenient = ExtensionManager::with_handle(commands.clone(), handle.clone(), true);
        let outcome = lenient
            .load("ping", Box::new(PingExtension::default()))
            .await
            .unwrap();
        assert!(outcome.is_fatal());
        assert!(lenient.is_loaded("ping"));

        let mut strict = ExtensionManager::with_handle(commands, handle, false);
        let err = strict
            .load("ping", Box::new(PingExtension::default()))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Extension(_)));
        assert!(!strict.is_loaded("ping"));
    }

    #[tokio::test]
    async fn test_shutdown_unloads_everything() {
        let mut manager = ExtensionManager::new(&config());
        manager
            .load("ping", Box::new(PingExtension::default()))
            .await
            .unwrap();

        manager.shutdown().await;

        assert!(manager.loaded().is_empty());
        assert!(manager.commands().is_empty().await);
        assert!(manager.event_bus().is_closed());
    }
}
