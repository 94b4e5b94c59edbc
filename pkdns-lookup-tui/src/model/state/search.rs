//! 搜索页状态

use std::time::{Duration, Instant};

use pkdns_lookup_core::services::is_valid_public_key;

/// 校验提示自动消失的时间
pub const ALERT_TIMEOUT: Duration = Duration::from_secs(5);

/// 输入框上方的校验提示
#[derive(Debug, Clone)]
pub struct Alert {
    pub message: String,
    pub shown_at: Instant,
}

/// 输入框配色状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputTone {
    /// 空或尚不是合法公钥（灰色）
    Pending,
    /// 合法公钥（白色）
    Valid,
    /// 提交失败（红色）
    Error,
}

/// 搜索页状态
#[derive(Debug, Default)]
pub struct SearchState {
    /// 输入内容
    pub input: String,
    /// 最近一次提交的错误，编辑后清除
    pub error: Option<String>,
    /// 校验提示
    pub alert: Option<Alert>,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
        self.error = None;
    }

    pub fn backspace(&mut self) {
        self.input.pop();
        self.error = None;
    }

    /// 追加粘贴的文本（去掉换行等控制字符）
    pub fn paste(&mut self, text: &str) {
        self.input.extend(text.chars().filter(|c| !c.is_control()));
        self.error = None;
    }

    /// 用剪贴板内容替换输入
    pub fn replace_input(&mut self, text: &str) {
        self.input.clear();
        self.paste(text.trim());
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.error = None;
    }

    /// 显示校验错误
    pub fn show_error(&mut self, message: String, now: Instant) {
        self.error = Some(message.clone());
        self.alert = Some(Alert {
            message,
            shown_at: now,
        });
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// 提示是否已超时
    pub fn alert_expired(&self, now: Instant) -> bool {
        self.alert
            .as_ref()
            .is_some_and(|alert| now.saturating_duration_since(alert.shown_at) >= ALERT_TIMEOUT)
    }

    pub fn tone(&self) -> InputTone {
        if self.error.is_some() {
            InputTone::Error
        } else if is_valid_public_key(&self.input) {
            InputTone::Valid
        } else {
            InputTone::Pending
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "c6en34wj5dk3zi834ff494jf3wk59nnk3kke393jx6bf6j5kbjwp";

    #[test]
    fn test_tone_follows_validity_and_error() {
        let mut state = SearchState::new();
        assert_eq!(state.tone(), InputTone::Pending);

        state.paste(KEY);
        assert_eq!(state.tone(), InputTone::Valid);

        state.show_error("bad".to_string(), Instant::now());
        assert_eq!(state.tone(), InputTone::Error);

        state.backspace();
        assert_eq!(state.tone(), InputTone::Pending);
        assert!(state.alert.is_some(), "editing keeps the alert until it times out");
    }

    #[test]
    fn test_paste_strips_control_characters() {
        let mut state = SearchState::new();
        state.paste("ab\ncd\r\t");
        assert_eq!(state.input, "abcd");

        state.replace_input("  xyz \n");
        assert_eq!(state.input, "xyz");
    }

    #[test]
    fn test_alert_expiry() {
        let mut state = SearchState::new();
        let shown = Instant::now();
        state.show_error("Please enter a public key".to_string(), shown);

        assert!(!state.alert_expired(shown + Duration::from_secs(4)));
        assert!(state.alert_expired(shown + ALERT_TIMEOUT));
    }
}
