//! Extension Id Registry - 호스트 전역 확장 ID 목록

use parking_lot::RwLock;
use tracing::debug;

/// 확장 ID 레지스트리
#[derive(Debug, Default)]
pub struct ExtensionIdRegistry {
    ids: RwLock<Vec<String>>,
}

impl ExtensionIdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// ID 지정 (이미 있으면 가장 최근 항목으로 이동)
    pub fn assign(&self, id: impl Into<String>) {
        let id = id.into();
        let mut ids = self.ids.write();
        ids.retain(|existing| existing != &id);
        debug!("Assigned extension id: {}", id);
        ids.push(id);
    }

    /// 가장 최근에 지정된 ID
    pub fn current(&self) -> Option<String> {
        self.ids.read().last().cloned()
    }

    /// 지정된 모든 ID (지정 순)
    pub fn assigned(&self) -> Vec<String> {
        self.ids.read().clone()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.read().iter().any(|existing| existing == id)
    }
}
