//! 校验表单状态

use key_validator_provider::AccountSummary;

/// 空输入时的错误消息
pub const MSG_KEY_REQUIRED: &str = "API Key is required";
/// 服务端拒绝（非 2xx）时的错误消息
pub const MSG_INVALID_KEY: &str = "Invalid API Key";
/// 底层错误没有消息时的兜底文字
pub const MSG_GENERIC_FAILURE: &str = "An error occurred";

/// 由字段推导出的视图阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    /// 尚未提交过
    Idle,
    /// 请求进行中
    Loading,
    /// 最近一次结果为成功
    Success,
    /// 存在错误消息
    Failure,
}

/// 校验表单状态
///
/// 各字段相互独立：`error` 与 `account` 可以同时存在。
#[derive(Debug, Default)]
pub struct ValidatorState {
    /// 当前输入的 API Key
    pub credential: String,
    /// 光标位置（字符索引）
    pub cursor: usize,
    /// 最近一次成功获取的账户信息
    pub account: Option<AccountSummary>,
    /// 最近一次错误消息
    pub error: Option<String>,
    /// 是否有请求在进行中
    pub busy: bool,
    /// 是否以掩码显示输入
    pub mask_input: bool,
    /// 进行中请求的编号
    pub in_flight: Option<u64>,
    /// 下一个请求编号
    next_request_id: u64,
}

impl ValidatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 替换输入内容，光标移到末尾
    ///
    /// 不清除 `account` 和 `error`。
    pub fn update_credential(&mut self, value: impl Into<String>) {
        self.credential = value.into();
        self.cursor = self.char_count();
    }

    /// 在光标处插入字符
    pub fn insert_char(&mut self, ch: char) {
        let mut value = self.credential.clone();
        value.insert(self.byte_index(), ch);
        let cursor = self.cursor + 1;
        self.update_credential(value);
        self.cursor = cursor;
    }

    /// 在光标处插入一段文本（粘贴），换行符会被丢弃
    pub fn insert_str(&mut self, text: &str) {
        let cleaned: String = text.chars().filter(|c| *c != '\r' && *c != '\n').collect();
        if cleaned.is_empty() {
            return;
        }
        let mut value = self.credential.clone();
        value.insert_str(self.byte_index(), &cleaned);
        let cursor = self.cursor + cleaned.chars().count();
        self.update_credential(value);
        self.cursor = cursor;
    }

    /// 删除光标前的字符
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let mut value = self.credential.clone();
        value.remove(self.byte_index());
        let cursor = self.cursor;
        self.update_credential(value);
        self.cursor = cursor;
    }

    /// 删除光标处的字符
    pub fn delete(&mut self) {
        if self.cursor >= self.char_count() {
            return;
        }
        let mut value = self.credential.clone();
        value.remove(self.byte_index());
        let cursor = self.cursor;
        self.update_credential(value);
        self.cursor = cursor;
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// 开始一次请求：置忙、清除错误，返回请求编号
    ///
    /// 保留之前的 `account`，直到新结果到达。
    pub fn begin_request(&mut self) -> u64 {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.in_flight = Some(request_id);
        self.busy = true;
        self.error = None;
        request_id
    }

    /// 结束一次请求（无论成功与否），返回该编号是否为当前进行中的请求
    pub fn end_request(&mut self, request_id: u64) -> bool {
        if self.in_flight != Some(request_id) {
            return false;
        }
        self.in_flight = None;
        self.busy = false;
        true
    }

    /// 触发按钮是否禁用
    pub fn trigger_disabled(&self) -> bool {
        self.busy
    }

    /// 推导当前视图阶段
    pub fn phase(&self) -> ViewPhase {
        if self.busy {
            ViewPhase::Loading
        } else if self.error.is_some() {
            ViewPhase::Failure
        } else if self.account.is_some() {
            ViewPhase::Success
        } else {
            ViewPhase::Idle
        }
    }

    fn char_count(&self) -> usize {
        self.credential.chars().count()
    }

    fn byte_index(&self) -> usize {
        self.credential
            .char_indices()
            .nth(self.cursor)
            .map_or(self.credential.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_appends_at_cursor() {
        let mut state = ValidatorState::new();
        for ch in "sk-abc".chars() {
            state.insert_char(ch);
        }
        assert_eq!(state.credential, "sk-abc");
        assert_eq!(state.cursor, 6);

        state.cursor_home();
        state.insert_char('x');
        assert_eq!(state.credential, "xsk-abc");
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn backspace_and_delete() {
        let mut state = ValidatorState::new();
        state.update_credential("abcd");
        state.backspace();
        assert_eq!(state.credential, "abc");

        state.cursor_home();
        state.backspace();
        assert_eq!(state.credential, "abc", "光标在开头时退格无效果");

        state.delete();
        assert_eq!(state.credential, "bc");

        state.cursor_end();
        state.delete();
        assert_eq!(state.credential, "bc", "光标在末尾时删除无效果");
    }

    #[test]
    fn multibyte_editing() {
        let mut state = ValidatorState::new();
        state.update_credential("密钥");
        state.cursor_left();
        state.insert_char('-');
        assert_eq!(state.credential, "密-钥");
        state.backspace();
        assert_eq!(state.credential, "密钥");
    }

    #[test]
    fn paste_strips_newlines() {
        let mut state = ValidatorState::new();
        state.insert_str("sk-123\r\n");
        assert_eq!(state.credential, "sk-123");
        assert_eq!(state.cursor, 6);
    }

    #[test]
    fn cursor_is_clamped() {
        let mut state = ValidatorState::new();
        state.update_credential("ab");
        state.cursor_right();
        state.cursor_right();
        assert_eq!(state.cursor, 2);
        state.cursor_home();
        state.cursor_left();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn editing_keeps_results() {
        let mut state = ValidatorState::new();
        state.error = Some(MSG_INVALID_KEY.to_string());
        state.account = Some(AccountSummary {
            id: "1".into(),
            name: "n".into(),
            email: "e".into(),
            created_at: "c".into(),
            total_balance: "1.00".into(),
        });

        state.update_credential("sk-new");
        state.insert_char('x');
        state.backspace();

        assert!(state.error.is_some());
        assert!(state.account.is_some());
    }

    #[test]
    fn request_lifecycle() {
        let mut state = ValidatorState::new();
        state.error = Some("old".to_string());
        assert_eq!(state.phase(), ViewPhase::Failure);

        let id = state.begin_request();
        assert!(state.busy);
        assert!(state.trigger_disabled());
        assert_eq!(state.error, None);
        assert_eq!(state.phase(), ViewPhase::Loading);

        assert!(!state.end_request(id + 1), "编号不匹配时不结束");
        assert!(state.busy);

        assert!(state.end_request(id));
        assert!(!state.busy);
        assert_eq!(state.in_flight, None);
        assert_eq!(state.phase(), ViewPhase::Idle);
    }

    #[test]
    fn request_ids_increase() {
        let mut state = ValidatorState::new();
        let first = state.begin_request();
        state.end_request(first);
        let second = state.begin_request();
        assert!(second > first);
    }
}
