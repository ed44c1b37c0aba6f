//! Command Sender - 커맨드를 실행한 주체

use parking_lot::Mutex;

/// 레거시 색상 코드 접두 문자 (`§a` 등)
pub const COLOR_CODE_PREFIX: char = '§';

/// 커맨드 발신자
///
/// 플레이어, 콘솔 등 메시지를 받을 수 있는 모든 주체가 구현합니다.
pub trait CommandSender: Send + Sync {
    /// 발신자 이름
    fn name(&self) -> &str;

    /// 발신자에게 메시지 전송
    fn send_message(&self, message: &str);
}

/// `§x` 색상 코드 제거
pub fn strip_color_codes(message: &str) -> String {
    let mut out = String::with_capacity(message.len());
    let mut chars = message.chars();
    while let Some(c) = chars.next() {
        if c == COLOR_CODE_PREFIX {
            chars.next();
        } else {
            out.push(c);
        }
    }
    out
}

// ============================================================================
// ConsoleSender
// ============================================================================

/// 서버 콘솔 - stdout으로 출력
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSender;

impl CommandSender for ConsoleSender {
    fn name(&self) -> &str {
        "CONSOLE"
    }

    fn send_message(&self, message: &str) {
        println!("{}", strip_color_codes(message));
    }
}

// ============================================================================
// CapturingSender
// ============================================================================

/// 받은 메시지를 그대로 보관하는 발신자
#[derive(Debug, Default)]
pub struct CapturingSender {
    name: String,
    messages: Mutex<Vec<String>>,
}

impl CapturingSender {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: Mutex::new(Vec::new()),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    pub fn take_messages(&self) -> Vec<String> {
        std::mem::take(&mut *self.messages.lock())
    }

    pub fn last_message(&self) -> Option<String> {
        self.messages.lock().last().cloned()
    }
}

impl CommandSender for CapturingSender {
    fn name(&self) -> &str {
        &self.name
    }

    fn send_message(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}
