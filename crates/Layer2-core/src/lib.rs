//! mcengine-core: Host Runtime for MCEngine extensions
//!
//! Layer2 - 확장 모듈이 의존하는 호스트 레이어
//!
//! # 주요 모듈
//!
//! - `sender`: 커맨드 발신자 (콘솔, 캡처)
//! - `command`: 커맨드 등록 레코드와 실행/자동완성 전략
//! - `registry`: 라이브 커맨드 테이블과 `CommandRegistrar`
//! - `event`: 이벤트 버스
//! - `extension`: 확장 라이프사이클, 호스트 핸들, 매니저
//!
//! # 사용 예시
//!
//! ```ignore
//! use mcengine_core::{ConsoleSender, ExtensionManager};
//!
//! let mut manager = ExtensionManager::new(&config);
//! manager.load("example", Box::new(MyExtension::default())).await?;
//!
//! manager.dispatch(&ConsoleSender, "/example").await?;
//! manager.shutdown().await;
//! ```

pub mod command;
pub mod event;
pub mod extension;
pub mod registry;
pub mod sender;

// Re-exports: Command
pub use command::{Command, CommandExecutor, NoCompletions, TabCompleter};

// Re-exports: Event
pub use event::{EventBus, EventBusConfig, EventKind, EventListener, HostEvent, ListenerId};

// Re-exports: Extension
pub use extension::{
    Extension, ExtensionIdRegistry, ExtensionManager, HostHandle, LoadIssue, LoadOutcome,
    LoadStep,
};

// Re-exports: Registry
pub use registry::{
    CommandInfo, CommandRegistrar, CommandRegistry, DispatchOutcome, RegistrationHandle,
};

// Re-exports: Sender
pub use sender::{strip_color_codes, CapturingSender, CommandSender, ConsoleSender};
