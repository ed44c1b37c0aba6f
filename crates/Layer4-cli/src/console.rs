//! Console mode - 표준 입력으로 커맨드 실행

use mcengine_core::{ConsoleSender, EventBus, ExtensionManager};
use mcengine_foundation::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// 콘솔 입력 한 줄의 해석 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleInput {
    Empty,
    Help,
    Quit,
    /// `tab <partial>` - 자동완성 후보 출력
    Tab(String),
    /// 그 외 입력은 커맨드로 실행
    Dispatch(String),
}

impl ConsoleInput {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_start();
        if line.trim_end().is_empty() {
            return Self::Empty;
        }

        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest),
            None => (line.trim_end(), ""),
        };

        match head {
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            // 뒤쪽 공백은 "다음 인자 입력 중"을 뜻하므로 보존
            "tab" => Self::Tab(rest.trim_start().to_string()),
            _ => Self::Dispatch(line.trim_end().to_string()),
        }
    }
}

/// 입력 한 줄 처리. 종료 요청이면 false
pub async fn handle_line(manager: &ExtensionManager, line: &str) -> bool {
    match ConsoleInput::parse(line) {
        ConsoleInput::Empty => {}
        ConsoleInput::Quit => return false,
        ConsoleInput::Help => {
            let lines = manager.commands().help_lines().await;
            if lines.is_empty() {
                println!("No commands registered.");
            }
            for line in lines {
                println!("{}", line);
            }
        }
        ConsoleInput::Tab(partial) => {
            let candidates = manager.complete(&ConsoleSender, &partial).await;
            if candidates.is_empty() {
                println!("(no completions)");
            } else {
                println!("{}", candidates.join("  "));
            }
        }
        ConsoleInput::Dispatch(command) => {
            if let Err(e) = manager.dispatch(&ConsoleSender, &command).await {
                print_dispatch_error(&e);
            }
        }
    }
    true
}

fn print_dispatch_error(error: &Error) {
    if error.is_user_facing() {
        eprintln!("{}", error);
        if matches!(error, Error::CommandNotFound(_)) {
            eprintln!("Type \"help\" for a list of commands.");
        }
    } else {
        tracing::error!("Command failed: {}", error);
    }
}

/// 호스트 이벤트를 debug 로그로 출력
///
/// 버스가 해제될 때까지 실행되며, 출력한 이벤트 수를 반환합니다.
pub fn spawn_event_echo(bus: &EventBus) -> JoinHandle<usize> {
    let mut events = bus.receiver();
    tokio::spawn(async move {
        let mut seen = 0;
        loop {
            match events.recv().await {
                Ok(event) => {
                    seen += 1;
                    debug!(
                        kind = %event.kind,
                        source = %event.source,
                        data = %event.data,
                        "Host event"
                    );
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Event echo fell behind, {} events skipped", skipped);
                }
                Err(RecvError::Closed) => break,
            }
        }
        seen
    })
}

/// 대화형 콘솔 (EOF 또는 quit까지)
pub async fn run_interactive(manager: &ExtensionManager) -> anyhow::Result<()> {
    println!("MCEngine console ready. Type \"help\" for commands, \"quit\" to exit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if !handle_line(manager, &line).await {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcengine_agent_example::{ExampleAiAgent, EXTENSION_ID};
    use mcengine_core::{EventBusConfig, EventKind, HostEvent};
    use mcengine_foundation::HostConfig;

    #[test]
    fn test_parse_console_input() {
        assert_eq!(ConsoleInput::parse("   "), ConsoleInput::Empty);
        assert_eq!(ConsoleInput::parse("help"), ConsoleInput::Help);
        assert_eq!(ConsoleInput::parse("exit"), ConsoleInput::Quit);
        assert_eq!(ConsoleInput::parse("tab /aiag"), ConsoleInput::Tab("/aiag".into()));
        assert_eq!(
            ConsoleInput::parse("tab /aiagentexample "),
            ConsoleInput::Tab("/aiagentexample ".into())
        );
        assert_eq!(
            ConsoleInput::parse(" /aiagentexample foo "),
            ConsoleInput::Dispatch("/aiagentexample foo".into())
        );
    }

    #[tokio::test]
    async fn test_handle_line_dispatches_and_quits() {
        let mut manager = ExtensionManager::new(&HostConfig::default());
        manager
            .load(EXTENSION_ID, Box::new(ExampleAiAgent::new()))
            .await
            .unwrap();

        assert!(handle_line(&manager, "/aiagentexample").await);
        assert!(handle_line(&manager, "/nope").await);
        assert!(!handle_line(&manager, "quit").await);

        let dispatched = manager
            .event_bus()
            .history_by_kind(EventKind::CommandDispatched)
            .await;
        assert_eq!(dispatched.len(), 1);
    }

    #[tokio::test]
    async fn test_event_echo_drains_until_bus_dropped() {
        let bus = EventBus::new();
        let echo = spawn_event_echo(&bus);

        bus.publish(HostEvent::simple(EventKind::PlayerJoin)).await;
        bus.publish(HostEvent::simple(EventKind::PlayerQuit)).await;
        drop(bus);

        assert_eq!(echo.await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_event_echo_survives_lag() {
        let bus = EventBus::with_config(EventBusConfig {
            channel_capacity: 2,
            history_size: 10,
        });
        let echo = spawn_event_echo(&bus);

        for _ in 0..5 {
            bus.publish(HostEvent::simple(EventKind::ServerTick)).await;
        }
        drop(bus);

        // 용량을 넘긴 이벤트는 건너뛰고 남은 것만 출력
        assert_eq!(echo.await.unwrap(), 2);
    }
}
