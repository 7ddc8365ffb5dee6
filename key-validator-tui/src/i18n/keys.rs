//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **表单内容归 `validator.*`**
//! 3. **键盘提示归 `hints.*`**：按键名称和操作提示
//! 4. **状态栏消息归 `status.*`**
//!
//! 三条错误消息（"API Key is required" 等）属于对外行为的一部分，不参与翻译。

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本
    pub common: CommonTexts,
    /// 校验表单文本
    pub validator: ValidatorTexts,
    /// 键盘提示
    pub hints: HintTexts,
    /// 状态栏消息
    pub status: StatusTexts,
}

/// 通用文本
pub struct CommonTexts {
    pub app_name: &'static str,
}

/// 校验表单文本
pub struct ValidatorTexts {
    /// 页面标题
    pub title: &'static str,
    /// 输入框标签
    pub key_label: &'static str,
    /// 输入框占位符
    pub placeholder: &'static str,
    /// 按钮文字（空闲）
    pub validate: &'static str,
    /// 按钮文字（请求中）
    pub validating: &'static str,
    /// 错误区域标题
    pub error_title: &'static str,
    /// 成功区域标题
    pub result_title: &'static str,
    /// 余额标签
    pub balance: &'static str,
}

/// 键盘提示
pub struct HintTexts {
    pub validate: &'static str,
    pub clear: &'static str,
    pub mask: &'static str,
    pub language: &'static str,
    pub theme: &'static str,
    pub quit: &'static str,
}

/// 状态栏消息
pub struct StatusTexts {
    pub key_masked: &'static str,
    pub key_visible: &'static str,
    pub theme_switched: &'static str,
}
