//! `/aiagentexample` 커맨드 실행

use mcengine_core::{CommandExecutor, CommandSender};

/// 실행 시 발신자에게 보내는 확인 메시지
pub const ACK_MESSAGE: &str = "§aAIAgent example command executed!";

/// `/aiagentexample` 실행 전략
#[derive(Debug, Clone, Copy, Default)]
pub struct AiAgentCommand;

impl CommandExecutor for AiAgentCommand {
    /// 인자와 무관하게 확인 메시지를 한 번 보내고 성공
    fn execute(&self, sender: &dyn CommandSender, _label: &str, _args: &[String]) -> bool {
        sender.send_message(ACK_MESSAGE);
        true
    }
}
