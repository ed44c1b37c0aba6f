//! Registry Entry - 등록 핸들과 레지스트리 항목

use crate::command::Command;
use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// 등록 핸들 - 한 번의 성공적인 등록을 나타내는 토큰
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegistrationHandle {
    id: Uuid,
    namespace: String,
    name: String,
}

impl RegistrationHandle {
    pub(crate) fn new(namespace: &str, name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            namespace: namespace.to_lowercase(),
            name: name.to_lowercase(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// 커맨드 이름 (bare label)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 레지스트리 키 (`namespace:name`)
    pub fn key(&self) -> String {
        format!("{}:{}", self.namespace, self.name)
    }
}

impl fmt::Display for RegistrationHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.key(), self.id)
    }
}

/// 레지스트리 항목
#[derive(Debug, Clone)]
pub(crate) struct CommandEntry {
    pub command: Arc<Command>,
    pub handle: RegistrationHandle,
    pub registered_at: DateTime<Utc>,
}

impl CommandEntry {
    pub fn new(command: Command, handle: RegistrationHandle) -> Self {
        Self {
            command: Arc::new(command),
            handle,
            registered_at: Utc::now(),
        }
    }
}
