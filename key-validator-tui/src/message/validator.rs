//! 校验表单消息

use key_validator_provider::{AccountSummary, ProviderError};

/// 一次校验请求的结果
pub type ValidationOutcome = Result<AccountSummary, ProviderError>;

/// 校验表单消息
#[derive(Debug, Clone)]
pub enum ValidatorMessage {
    /// 输入字符
    Input(char),
    /// 粘贴文本
    Paste(String),
    /// 删除光标前字符
    Backspace,
    /// 删除光标处字符
    Delete,
    /// 清空输入
    Clear,
    /// 光标左移
    CursorLeft,
    /// 光标右移
    CursorRight,
    /// 光标移到开头
    CursorHome,
    /// 光标移到末尾
    CursorEnd,
    /// 提交校验
    Submit,
    /// 切换输入掩码
    ToggleMask,
    /// 后台请求结束
    Finished {
        request_id: u64,
        outcome: ValidationOutcome,
    },
}
