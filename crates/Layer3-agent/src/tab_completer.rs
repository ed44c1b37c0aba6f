//! `/aiagentexample` 자동완성

use mcengine_core::{CommandSender, TabCompleter};

/// `/aiagentexample` 자동완성 전략
///
/// 아직 인자가 없는 커맨드라서 후보를 내지 않습니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct AiAgentTabCompleter;

impl TabCompleter for AiAgentTabCompleter {
    fn complete(&self, _sender: &dyn CommandSender, _alias: &str, _args: &[String]) -> Vec<String> {
        Vec::new()
    }
}
