//! # Command Registry
//!
//! 호스트의 라이브 커맨드 테이블과, 확장 모듈에 공개되는 등록 기능
//!
//! ## 구성
//!
//! - `CommandRegistrar`: 확장 모듈이 의존하는 등록/해제 인터페이스
//! - `RegistrationHandle`: 등록 1회를 나타내는 토큰 (해제에 사용)
//! - `CommandRegistry`: `namespace:name` 키 기반 테이블 + 실행/자동완성
//!
//! ## 사용 예시
//!
//! ```ignore
//! let registry = Arc::new(CommandRegistry::new());
//!
//! let handle = registry.register("lobby", Command::new("hello", Arc::new(Hello))).await?;
//! registry.dispatch(&ConsoleSender, "/hello").await?;
//!
//! registry.unregister(&handle).await?;
//! ```

mod commands;
mod entry;
mod traits;

pub use commands::{CommandInfo, CommandRegistry, DispatchOutcome};
pub use entry::RegistrationHandle;
pub use traits::CommandRegistrar;
