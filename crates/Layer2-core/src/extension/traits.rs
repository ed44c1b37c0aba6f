//! Extension traits - 확장 모듈 라이프사이클 인터페이스

use super::host::HostHandle;
use async_trait::async_trait;
use std::fmt;

// ============================================================================
// LoadOutcome - 로드 결과
// ============================================================================

/// 로드 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadStep {
    /// 이벤트 리스너 등록
    Listener,

    /// 커맨드 등록 기능 획득
    CommandRegistrar,

    /// 커맨드 등록
    CommandRegistration,
}

impl fmt::Display for LoadStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Listener => write!(f, "listener"),
            Self::CommandRegistrar => write!(f, "command_registrar"),
            Self::CommandRegistration => write!(f, "command_registration"),
        }
    }
}

/// 로드 중 실패한 단계와 원인
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadIssue {
    pub step: LoadStep,
    pub reason: String,
}

impl LoadIssue {
    pub fn new(step: LoadStep, reason: impl ToString) -> Self {
        Self {
            step,
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for LoadIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.step, self.reason)
    }
}

/// 확장 로드 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// 모든 단계 성공
    Ready,

    /// 일부 단계 실패 (등록된 것이 하나 이상 있음)
    Degraded { issues: Vec<LoadIssue> },

    /// 아무것도 등록하지 못함
    Fatal { issues: Vec<LoadIssue> },
}

impl LoadOutcome {
    /// 실패 목록과 등록 성공 여부로부터 결과 결정
    pub fn from_issues(issues: Vec<LoadIssue>, registered_anything: bool) -> Self {
        if issues.is_empty() {
            Self::Ready
        } else if registered_anything {
            Self::Degraded { issues }
        } else {
            Self::Fatal { issues }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal { .. })
    }

    pub fn issues(&self) -> &[LoadIssue] {
        match self {
            Self::Ready => &[],
            Self::Degraded { issues } | Self::Fatal { issues } => issues,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Degraded { .. } => "degraded",
            Self::Fatal { .. } => "fatal",
        }
    }
}

impl fmt::Display for LoadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())?;
        let issues = self.issues();
        if !issues.is_empty() {
            let joined: Vec<String> = issues.iter().map(LoadIssue::to_string).collect();
            write!(f, " ({})", joined.join("; "))?;
        }
        Ok(())
    }
}

// ============================================================================
// Extension Trait
// ============================================================================

/// 확장 모듈 트레이트
///
/// 호스트는 `set_id` → `on_load` 순서로 한 번씩 호출하고, 언로드 시
/// `on_disload`를 호출합니다. 모든 호출은 호스트가 직렬화합니다.
#[async_trait]
pub trait Extension: Send + Sync {
    /// 확장 ID 지정
    fn set_id(&mut self, host: &HostHandle, id: &str);

    /// 로드 - 리스너/커맨드 등록
    ///
    /// 실패는 호스트로 전파하지 않고 `LoadOutcome`으로 보고합니다.
    async fn on_load(&mut self, host: &HostHandle) -> LoadOutcome;

    /// 언로드 - 등록 해제
    async fn on_disload(&mut self, host: &HostHandle);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_issues() {
        assert!(LoadOutcome::from_issues(vec![], false).is_ready());

        let issue = LoadIssue::new(LoadStep::CommandRegistrar, "denied");
        let degraded = LoadOutcome::from_issues(vec![issue.clone()], true);
        assert!(degraded.is_degraded());
        assert_eq!(degraded.issues(), &[issue.clone()]);

        let fatal = LoadOutcome::from_issues(vec![issue], false);
        assert!(fatal.is_fatal());
    }

    #[test]
    fn test_outcome_display() {
        let outcome = LoadOutcome::Degraded {
            issues: vec![LoadIssue::new(LoadStep::Listener, "Event bus is closed")],
        };
        assert_eq!(outcome.to_string(), "degraded (listener: Event bus is closed)");
        assert_eq!(LoadOutcome::Ready.to_string(), "ready");
    }
}
