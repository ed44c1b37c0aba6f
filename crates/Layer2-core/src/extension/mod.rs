//! # Extension System
//!
//! 호스트가 확장 모듈을 로드하고 관리하는 시스템
//!
//! ## 라이프사이클
//!
//! ```text
//! ExtensionManager::load(key, ext)
//!   ├── ext.set_id(host, key)
//!   ├── ext.on_load(host)  ──►  EventBus::subscribe(listener)
//!   │                     └──►  host.command_registrar()?.register(ns, command)
//!   └── publish(ExtensionLoaded)
//!
//! ExtensionManager::unload(key)
//!   ├── ext.on_disload(host) ──► registrar.unregister(&handle)
//!   └── publish(ExtensionUnloaded)
//! ```
//!
//! ## 예시
//!
//! ```ignore
//! let mut manager = ExtensionManager::new(&HostConfig::default());
//! let outcome = manager.load("my-extension", Box::new(MyExtension::default())).await?;
//! if !outcome.is_ready() {
//!     warn!("loaded with issues: {}", outcome);
//! }
//! ```

mod host;
mod ids;
mod manager;
mod traits;

pub use host::HostHandle;
pub use ids::ExtensionIdRegistry;
pub use manager::ExtensionManager;
pub use traits::{Extension, LoadIssue, LoadOutcome, LoadStep};
