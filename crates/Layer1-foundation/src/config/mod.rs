//! Config - 호스트 설정 관리
//!
//! - `host.rs` - HostConfig (TOML)

mod host;

pub use host::{HostConfig, HOST_CONFIG_DIR, HOST_CONFIG_FILE};
