//! Registry traits - 커맨드 등록 기능 인터페이스

use super::entry::RegistrationHandle;
use crate::command::Command;
use async_trait::async_trait;
use mcengine_foundation::Result;

/// 커맨드 등록 기능
///
/// 호스트가 확장 모듈에게 공개하는 정식 API입니다. 확장 모듈은 이 트레이트에만
/// 의존하며, 등록 시 받은 `RegistrationHandle`로 대칭적으로 해제합니다.
#[async_trait]
pub trait CommandRegistrar: Send + Sync {
    /// 커맨드 등록
    ///
    /// `namespace:name` 키가 이미 존재하면 `Error::DuplicateCommand`.
    async fn register(&self, namespace: &str, command: Command) -> Result<RegistrationHandle>;

    /// 등록 해제
    ///
    /// 이미 해제됐거나 다른 등록으로 교체된 핸들이면 `Error::CommandNotFound`.
    async fn unregister(&self, handle: &RegistrationHandle) -> Result<()>;
}
