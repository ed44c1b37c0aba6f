//! Command Registry - 호스트의 라이브 커맨드 테이블

use super::entry::{CommandEntry, RegistrationHandle};
use super::traits::CommandRegistrar;
use crate::command::Command;
use crate::sender::CommandSender;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mcengine_foundation::{Error, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// 커맨드 실행 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// 실행된 커맨드의 레지스트리 키
    pub key: String,

    /// 사용자가 입력한 label
    pub label: String,

    /// 실행 전략의 반환값
    pub success: bool,
}

/// 등록된 커맨드 요약
#[derive(Debug, Clone)]
pub struct CommandInfo {
    pub key: String,
    pub name: String,
    pub description: String,
    pub usage: String,
    /// bare label이 이 커맨드를 가리키는지
    pub owns_label: bool,
    pub registered_at: DateTime<Utc>,
}

#[derive(Default)]
struct Tables {
    /// `namespace:name` -> 항목
    commands: HashMap<String, CommandEntry>,

    /// bare label -> `namespace:name`
    labels: HashMap<String, String>,
}

/// 커맨드 레지스트리
///
/// 모든 커맨드는 `namespace:name` 키로 저장됩니다. bare label은 먼저 등록한
/// 커맨드가 차지하고, 그 커맨드가 해제될 때만 풀립니다.
#[derive(Default)]
pub struct CommandRegistry {
    tables: RwLock<Tables>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // 조회
    // ========================================================================

    /// label 또는 `namespace:name`으로 조회 (대소문자 무시)
    pub async fn lookup(&self, label: &str) -> Option<Arc<Command>> {
        self.resolve(label).await.map(|(_, command)| command)
    }

    /// 키 존재 여부 (`namespace:name` 또는 bare label)
    pub async fn contains(&self, key: &str) -> bool {
        self.lookup(key).await.is_some()
    }

    /// 입력 가능한 모든 label (bare + namespaced), 정렬됨
    pub async fn labels(&self) -> Vec<String> {
        let tables = self.tables.read().await;
        let mut labels: Vec<String> = tables
            .commands
            .keys()
            .chain(tables.labels.keys())
            .cloned()
            .collect();
        labels.sort();
        labels
    }

    /// 등록된 커맨드 목록 (키 순)
    pub async fn list(&self) -> Vec<CommandInfo> {
        let tables = self.tables.read().await;
        let mut infos: Vec<CommandInfo> = tables
            .commands
            .iter()
            .map(|(key, entry)| CommandInfo {
                key: key.clone(),
                name: entry.command.name().to_string(),
                description: entry.command.description().to_string(),
                usage: entry.command.usage().to_string(),
                owns_label: tables.labels.get(entry.handle.name()) == Some(key),
                registered_at: entry.registered_at,
            })
            .collect();
        infos.sort_by(|a, b| a.key.cmp(&b.key));
        infos
    }

    /// `/label - description` 형식의 도움말
    pub async fn help_lines(&self) -> Vec<String> {
        self.list()
            .await
            .into_iter()
            .map(|info| {
                let label = if info.owns_label {
                    info.name.to_lowercase()
                } else {
                    info.key
                };
                if info.description.is_empty() {
                    format!("/{}", label)
                } else {
                    format!("/{} - {}", label, info.description)
                }
            })
            .collect()
    }

    pub async fn len(&self) -> usize {
        self.tables.read().await.commands.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tables.read().await.commands.is_empty()
    }

    // ========================================================================
    // 실행 / 자동완성
    // ========================================================================

    /// 입력 줄 실행 (`/label arg1 arg2`)
    ///
    /// 인자는 공백으로만 나누며 내용은 검사하지 않습니다.
    pub async fn dispatch(&self, sender: &dyn CommandSender, line: &str) -> Result<DispatchOutcome> {
        let body = strip_slash(line.trim());
        let (label, args) = split_line(body)
            .ok_or_else(|| Error::InvalidInput("empty command line".into()))?;

        let (key, command) = self
            .resolve(label)
            .await
            .ok_or_else(|| Error::CommandNotFound(label.to_string()))?;

        debug!("{} issued command: /{}", sender.name(), body);
        let success = command.execute(sender, label, &args);
        if !success && !command.usage().is_empty() {
            sender.send_message(command.usage());
        }

        Ok(DispatchOutcome {
            key,
            label: label.to_string(),
            success,
        })
    }

    /// 입력 줄 자동완성
    ///
    /// label 입력 중이면 일치하는 label 목록, 그 뒤라면 커맨드의 자동완성 전략에 위임.
    pub async fn complete(&self, sender: &dyn CommandSender, line: &str) -> Vec<String> {
        let body = strip_slash(line.trim_start());

        let Some(split) = body.find(char::is_whitespace) else {
            let prefix = body.to_lowercase();
            return self
                .labels()
                .await
                .into_iter()
                .filter(|label| label.starts_with(&prefix))
                .collect();
        };

        let (label, rest) = body.split_at(split);
        let Some(command) = self.lookup(label).await else {
            return Vec::new();
        };

        // 끝 공백은 다음 인자를 입력 중이라는 뜻
        let mut args = split_args(rest);
        if rest.ends_with(char::is_whitespace) {
            args.push(String::new());
        }
        command.complete(sender, label, &args)
    }

    /// label을 (키, 커맨드)로 해석 - 한 번의 잠금 안에서
    async fn resolve(&self, label: &str) -> Option<(String, Arc<Command>)> {
        let label = label.to_lowercase();
        let tables = self.tables.read().await;
        let key = if label.contains(':') {
            label
        } else {
            tables.labels.get(&label)?.clone()
        };
        let command = Arc::clone(&tables.commands.get(&key)?.command);
        Some((key, command))
    }
}

#[async_trait]
impl CommandRegistrar for CommandRegistry {
    async fn register(&self, namespace: &str, command: Command) -> Result<RegistrationHandle> {
        validate_segment("namespace", namespace)?;
        validate_segment("command name", command.name())?;

        let handle = RegistrationHandle::new(namespace, command.name());
        let key = handle.key();

        let mut guard = self.tables.write().await;
        let tables = &mut *guard;
        if tables.commands.contains_key(&key) {
            warn!("Command {} is already registered", key);
            return Err(Error::DuplicateCommand(key));
        }

        let label = handle.name().to_string();
        match tables.labels.get(&label) {
            Some(owner) => debug!("Label /{} is held by {}, only /{} is bound", label, owner, key),
            None => {
                tables.labels.insert(label, key.clone());
            }
        }
        tables
            .commands
            .insert(key.clone(), CommandEntry::new(command, handle.clone()));

        info!("Registered command: /{}", key);
        Ok(handle)
    }

    async fn unregister(&self, handle: &RegistrationHandle) -> Result<()> {
        let key = handle.key();
        let mut tables = self.tables.write().await;

        match tables.commands.get(&key) {
            Some(entry) if entry.handle.id() == handle.id() => {}
            _ => return Err(Error::CommandNotFound(key)),
        }
        tables.commands.remove(&key);

        if tables.labels.get(handle.name()) == Some(&key) {
            tables.labels.remove(handle.name());
        }

        info!("Unregistered command: /{}", key);
        Ok(())
    }
}

fn strip_slash(line: &str) -> &str {
    line.strip_prefix('/').unwrap_or(line)
}

fn split_args(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// `label arg1 arg2` -> (label, args)
fn split_line(body: &str) -> Option<(&str, Vec<String>)> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match body.split_once(char::is_whitespace) {
        Some((label, rest)) => Some((label, split_args(rest))),
        None => Some((body, Vec::new())),
    }
}

fn validate_segment(what: &str, value: &str) -> Result<()> {
    if value.is_empty() || value.contains(':') || value.chars().any(char::is_whitespace) {
        return Err(Error::InvalidRegistration(format!(
            "{} '{}' must be non-empty without ':' or whitespace",
            what, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CommandExecutor, TabCompleter};
    use crate::sender::CapturingSender;

    struct Reply(&'static str);

    impl CommandExecutor for Reply {
        fn execute(&self, sender: &dyn CommandSender, _label: &str, _args: &[String]) -> bool {
            sender.send_message(self.0);
            true
        }
    }

    struct ArgsEcho;

    impl CommandExecutor for ArgsEcho {
        fn execute(&self, sender: &dyn CommandSender, label: &str, args: &[String]) -> bool {
            sender.send_message(&format!("{}:{}", label, args.join("|")));
            !args.is_empty()
        }
    }

    struct Colors;

    impl TabCompleter for Colors {
        fn complete(&self, _sender: &dyn CommandSender, _alias: &str, args: &[String]) -> Vec<String> {
            let partial = args.last().map(String::as_str).unwrap_or("");
            ["red", "green", "blue"]
                .iter()
                .filter(|c| c.starts_with(partial))
                .map(|c| c.to_string())
                .collect()
        }
    }

    fn reply(name: &str, text: &'static str) -> Command {
        Command::new(name, Arc::new(Reply(text)))
    }

    #[tokio::test]
    async fn test_register_binds_namespaced_and_bare_label() {
        let registry = CommandRegistry::new();
        let handle = registry.register("Lobby", reply("hello", "hi")).await.unwrap();

        assert_eq!(handle.key(), "lobby:hello");
        assert!(registry.contains("lobby:hello").await);
        assert!(registry.contains("hello").await);
        assert!(registry.contains("HELLO").await);
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn test_duplicate_registration_rejected() {
        let registry = CommandRegistry::new();
        registry.register("lobby", reply("hello", "a")).await.unwrap();

        let err = registry.register("LOBBY", reply("hello", "b")).await.unwrap_err();
        assert!(matches!(err, Error::DuplicateCommand(ref k) if k == "lobby:hello"));
        assert_eq!(registry.len().await, 1);
    }

    #[tokio::test]
    async fn test_bare_label_stays_with_first_owner() {
        let registry = CommandRegistry::new();
        let first = registry.register("alpha", reply("hello", "from alpha")).await.unwrap();
        registry.register("beta", reply("hello", "from beta")).await.unwrap();

        let sender = CapturingSender::new("tester");
        registry.dispatch(&sender, "/hello").await.unwrap();
        registry.dispatch(&sender, "/beta:hello").await.unwrap();
        assert_eq!(sender.take_messages(), vec!["from alpha", "from beta"]);

        // 첫 번째 소유자가 해제되면 bare label도 풀림
        registry.unregister(&first).await.unwrap();
        assert!(!registry.contains("hello").await);
        assert!(registry.contains("beta:hello").await);
    }

    #[tokio::test]
    async fn test_unregister_with_stale_handle() {
        let registry = CommandRegistry::new();
        let handle = registry.register("lobby", reply("hello", "hi")).await.unwrap();

        registry.unregister(&handle).await.unwrap();
        assert!(registry.is_empty().await);

        let err = registry.unregister(&handle).await.unwrap_err();
        assert!(matches!(err, Error::CommandNotFound(_)));

        // 같은 키로 다시 등록해도 예전 핸들로는 해제 불가
        registry.register("lobby", reply("hello", "again")).await.unwrap();
        assert!(registry.unregister(&handle).await.is_err());
        assert!(registry.contains("lobby:hello").await);
    }

    #[tokio::test]
    async fn test_invalid_registration() {
        let registry = CommandRegistry::new();
        assert!(matches!(
            registry.register("", reply("hello", "x")).await,
            Err(Error::InvalidRegistration(_))
        ));
        assert!(matches!(
            registry.register("lobby", reply("two words", "x")).await,
            Err(Error::InvalidRegistration(_))
        ));
        assert!(matches!(
            registry.register("lobby", reply("a:b", "x")).await,
            Err(Error::InvalidRegistration(_))
        ));
    }

    #[tokio::test]
    async fn test_dispatch_splits_args_on_whitespace() {
        let registry = CommandRegistry::new();
        registry
            .register("lobby", Command::new("echo", Arc::new(ArgsEcho)))
            .await
            .unwrap();

        let sender = CapturingSender::new("tester");
        let outcome = registry
            .dispatch(&sender, "/echo  don't \"stop   now")
            .await
            .unwrap();

        assert_eq!(outcome.key, "lobby:echo");
        assert_eq!(outcome.label, "echo");
        assert!(outcome.success);
        assert_eq!(sender.messages(), vec!["echo:don't|\"stop|now"]);
    }

    #[tokio::test]
    async fn test_dispatch_reports_key_of_executed_command() {
        let registry = CommandRegistry::new();
        registry.register("alpha", reply("hello", "from alpha")).await.unwrap();
        registry.register("beta", reply("hello", "from beta")).await.unwrap();

        let sender = CapturingSender::new("tester");
        let bare = registry.dispatch(&sender, "/HELLO").await.unwrap();
        let namespaced = registry.dispatch(&sender, "/Beta:Hello").await.unwrap();

        assert_eq!(bare.key, "alpha:hello");
        assert_eq!(bare.label, "HELLO");
        assert_eq!(namespaced.key, "beta:hello");
        assert_eq!(sender.messages(), vec!["from alpha", "from beta"]);
    }

    #[tokio::test]
    async fn test_dispatch_failure_sends_usage() {
        let registry = CommandRegistry::new();
        registry
            .register(
                "lobby",
                Command::new("echo", Arc::new(ArgsEcho)).with_usage("/echo <text>"),
            )
            .await
            .unwrap();

        let sender = CapturingSender::new("tester");
        let outcome = registry.dispatch(&sender, "echo").await.unwrap();

        assert!(!outcome.success);
        assert_eq!(sender.messages(), vec!["echo:", "/echo <text>"]);
    }

    #[tokio::test]
    async fn test_dispatch_errors() {
        let registry = CommandRegistry::new();
        let sender = CapturingSender::new("tester");

        assert!(matches!(
            registry.dispatch(&sender, "   ").await,
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            registry.dispatch(&sender, "/").await,
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            registry.dispatch(&sender, "/missing").await,
            Err(Error::CommandNotFound(ref l)) if l == "missing"
        ));
        assert!(matches!(
            registry.dispatch(&sender, "/say \"open").await,
            Err(Error::CommandNotFound(ref l)) if l == "say"
        ));
    }

    #[tokio::test]
    async fn test_complete_labels_and_args() {
        let registry = CommandRegistry::new();
        registry
            .register(
                "lobby",
                Command::new("paint", Arc::new(ArgsEcho)).with_completer(Arc::new(Colors)),
            )
            .await
            .unwrap();
        registry.register("lobby", reply("ping", "pong")).await.unwrap();

        let sender = CapturingSender::new("tester");
        assert_eq!(registry.complete(&sender, "/p").await, vec!["paint", "ping"]);
        assert_eq!(
            registry.complete(&sender, "/lobby:pa").await,
            vec!["lobby:paint"]
        );
        assert_eq!(
            registry.complete(&sender, "/paint ").await,
            vec!["red", "green", "blue"]
        );
        assert_eq!(registry.complete(&sender, "/paint g").await, vec!["green"]);
        assert!(registry.complete(&sender, "/missing ").await.is_empty());
    }

    #[tokio::test]
    async fn test_help_lines() {
        let registry = CommandRegistry::new();
        registry
            .register("alpha", reply("hello", "a").with_description("Say hello"))
            .await
            .unwrap();
        registry.register("beta", reply("hello", "b")).await.unwrap();

        assert_eq!(
            registry.help_lines().await,
            vec!["/hello - Say hello", "/beta:hello"]
        );
    }
}
