//! 应用主消息枚举

use super::ValidatorMessage;

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 校验表单相关消息
    Validator(ValidatorMessage),

    /// 切换界面语言
    ToggleLanguage,

    /// 切换主题
    ToggleTheme,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
