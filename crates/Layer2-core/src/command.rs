//! Command - 커맨드 등록 레코드와 실행/자동완성 전략
//!
//! 하나의 `Command`는 두 개의 독립적인 전략 값을 가집니다:
//! - `CommandExecutor`: 실행
//! - `TabCompleter`: 탭 자동완성
//!
//! 각 전략은 따로 교체하고 따로 테스트할 수 있습니다.

use crate::sender::CommandSender;
use std::fmt;
use std::sync::Arc;

// ============================================================================
// 전략 트레이트
// ============================================================================

/// 커맨드 실행 전략
pub trait CommandExecutor: Send + Sync {
    /// 커맨드 실행
    ///
    /// 정상적으로 처리했으면 `true`. `false`면 호스트가 사용법을 안내합니다.
    fn execute(&self, sender: &dyn CommandSender, label: &str, args: &[String]) -> bool;
}

/// 탭 자동완성 전략
pub trait TabCompleter: Send + Sync {
    /// 자동완성 후보 목록
    fn complete(&self, sender: &dyn CommandSender, alias: &str, args: &[String]) -> Vec<String>;
}

/// 후보를 내지 않는 자동완성
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCompletions;

impl TabCompleter for NoCompletions {
    fn complete(&self, _sender: &dyn CommandSender, _alias: &str, _args: &[String]) -> Vec<String> {
        Vec::new()
    }
}

// ============================================================================
// Command - 등록 레코드
// ============================================================================

/// 커맨드 등록 레코드
#[derive(Clone)]
pub struct Command {
    name: String,
    description: String,
    usage: String,
    executor: Arc<dyn CommandExecutor>,
    completer: Arc<dyn TabCompleter>,
}

impl Command {
    /// 새 커맨드 생성 (사용법 기본값: `/<name>`)
    pub fn new(name: impl Into<String>, executor: Arc<dyn CommandExecutor>) -> Self {
        let name = name.into();
        let usage = format!("/{}", name);
        Self {
            name,
            description: String::new(),
            usage,
            executor,
            completer: Arc::new(NoCompletions),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    pub fn with_completer(mut self, completer: Arc<dyn TabCompleter>) -> Self {
        self.completer = completer;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn usage(&self) -> &str {
        &self.usage
    }

    pub fn execute(&self, sender: &dyn CommandSender, label: &str, args: &[String]) -> bool {
        self.executor.execute(sender, label, args)
    }

    pub fn complete(&self, sender: &dyn CommandSender, alias: &str, args: &[String]) -> Vec<String> {
        self.completer.complete(sender, alias, args)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("usage", &self.usage)
            .finish_non_exhaustive()
    }
}
