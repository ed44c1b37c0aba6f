//! Event Bus - 이벤트 발행/구독

use super::types::{EventKind, HostEvent};
use async_trait::async_trait;
use mcengine_foundation::{Error, Result};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, trace};

// ============================================================================
// EventListener Trait
// ============================================================================

/// 이벤트 리스너 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

/// 이벤트 리스너
#[async_trait]
pub trait EventListener: Send + Sync {
    /// 리스너 이름 (디버깅용)
    fn name(&self) -> &str;

    /// 관심 있는 이벤트 종류 (None이면 모든 이벤트, 빈 목록이면 아무것도 받지 않음)
    fn interests(&self) -> Option<Vec<EventKind>> {
        None
    }

    /// 이벤트 처리
    async fn on_event(&self, event: &HostEvent);
}

// ============================================================================
// EventBus
// ============================================================================

/// 이벤트 버스 설정
#[derive(Debug, Clone)]
pub struct EventBusConfig {
    /// 브로드캐스트 채널 용량
    pub channel_capacity: usize,

    /// 이벤트 히스토리 보관 개수
    pub history_size: usize,
}

impl Default for EventBusConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 256,
            history_size: 100,
        }
    }
}

/// 이벤트 버스
pub struct EventBus {
    sender: broadcast::Sender<HostEvent>,
    listeners: RwLock<HashMap<ListenerId, Arc<dyn EventListener>>>,
    history: RwLock<VecDeque<HostEvent>>,
    history_size: usize,
    next_id: AtomicU64,
    closed: AtomicBool,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_config(EventBusConfig::default())
    }

    pub fn with_config(config: EventBusConfig) -> Self {
        let (sender, _) = broadcast::channel(config.channel_capacity.max(1));
        Self {
            sender,
            listeners: RwLock::new(HashMap::new()),
            history: RwLock::new(VecDeque::with_capacity(config.history_size)),
            history_size: config.history_size,
            next_id: AtomicU64::new(1),
            closed: AtomicBool::new(false),
        }
    }

    // ========================================================================
    // 구독
    // ========================================================================

    /// 리스너 등록
    pub async fn subscribe(&self, listener: Arc<dyn EventListener>) -> Result<ListenerId> {
        if self.is_closed() {
            return Err(Error::EventBusClosed);
        }

        let id = ListenerId(self.next_id.fetch_add(1, Ordering::SeqCst));
        debug!("Subscribed listener {} ({})", listener.name(), id);
        self.listeners.write().await.insert(id, listener);
        Ok(id)
    }

    /// 리스너 해제 (등록돼 있었으면 true)
    pub async fn unsubscribe(&self, id: ListenerId) -> bool {
        let removed = self.listeners.write().await.remove(&id);
        if let Some(listener) = &removed {
            debug!("Unsubscribed listener {} ({})", listener.name(), id);
        }
        removed.is_some()
    }

    /// 원시 이벤트 스트림 (채널 용량을 넘게 밀리면 `Lagged`)
    pub fn receiver(&self) -> broadcast::Receiver<HostEvent> {
        self.sender.subscribe()
    }

    // ========================================================================
    // 발행
    // ========================================================================

    /// 이벤트 발행
    pub async fn publish(&self, event: HostEvent) {
        if self.is_closed() {
            trace!("Dropping {} event, bus is closed", event.kind);
            return;
        }
        trace!("Publishing event: {}", event.kind);

        {
            let mut history = self.history.write().await;
            if history.len() >= self.history_size {
                history.pop_front();
            }
            if self.history_size > 0 {
                history.push_back(event.clone());
            }
        }

        // 구독자가 없어도 OK
        let _ = self.sender.send(event.clone());

        // 잠금을 놓은 뒤 호출 (리스너가 구독/해제할 수 있도록)
        let listeners: Vec<Arc<dyn EventListener>> =
            self.listeners.read().await.values().cloned().collect();
        for listener in listeners {
            let interested = match listener.interests() {
                None => true,
                Some(kinds) => kinds.contains(&event.kind),
            };
            if interested {
                listener.on_event(&event).await;
            }
        }
    }

    // ========================================================================
    // 상태
    // ========================================================================

    /// 종류별 이벤트 히스토리 (오래된 순)
    pub async fn history_by_kind(&self, kind: EventKind) -> Vec<HostEvent> {
        self.history
            .read()
            .await
            .iter()
            .filter(|e| e.kind == kind)
            .cloned()
            .collect()
    }

    pub async fn listener_count(&self) -> usize {
        self.listeners.read().await.len()
    }

    /// 버스 종료 - 이후 구독은 `Error::EventBusClosed`
    pub async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.listeners.write().await.clear();
        debug!("Event bus closed");
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
