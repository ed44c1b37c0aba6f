//! # mcengine-agent-example
//!
//! Artificial Intelligence **Agent** 예제 확장 모듈
//!
//! `/aiagentexample` 커맨드와 이벤트 리스너를 호스트에 등록하면서
//! 확장 라이프사이클(`set_id` / `on_load` / `on_disload`)을 보여줍니다.
//!
//! ```ignore
//! let mut manager = ExtensionManager::new(&HostConfig::default());
//! manager.load(EXTENSION_ID, Box::new(ExampleAiAgent::new())).await?;
//! manager.dispatch(&ConsoleSender, "/aiagentexample").await?;
//! ```

mod agent;
mod command;
mod listener;
mod tab_completer;

pub use agent::{
    build_command, ExampleAiAgent, COMMAND_DESCRIPTION, COMMAND_NAME, COMMAND_USAGE, EXTENSION_ID,
    LOGGER_CATEGORY, LOGGER_SUBCATEGORY,
};
pub use command::{AiAgentCommand, ACK_MESSAGE};
pub use listener::AiAgentListener;
pub use tab_completer::AiAgentTabCompleter;
