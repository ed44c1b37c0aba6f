//! Event System - 호스트 이벤트 버스
//!
//! 확장 모듈은 `EventListener`를 구현해 버스에 등록합니다.

mod bus;
mod types;

pub use bus::{EventBus, EventBusConfig, EventListener, ListenerId};
pub use types::{
    command_dispatched_event, extension_loaded_event, extension_unloaded_event, EventKind,
    HostEvent,
};
