//! 应用主状态结构

use crate::backend::AppConfig;
use crate::i18n::Language;
use crate::view::theme::Theme;

use super::ValidatorState;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 界面语言
    pub language: Language,

    /// 界面主题
    pub theme: Theme,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 校验表单状态
    pub validator: ValidatorState,
}

impl App {
    /// 创建新的应用实例
    pub fn new() -> Self {
        Self {
            should_quit: false,
            language: Language::default(),
            theme: Theme::default(),
            status_message: None,
            validator: ValidatorState::new(),
        }
    }

    /// 按配置创建应用实例
    pub fn from_config(config: &AppConfig) -> Self {
        let mut app = Self::new();
        app.language = Language::from_code(&config.language).unwrap_or_default();
        app.theme = config.theme;
        app
    }

    /// 把当前界面偏好写回配置（不包含 API Key）
    pub fn apply_to_config(&self, config: &mut AppConfig) {
        config.language = self.language.code().to_string();
        config.theme = self.theme;
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_reads_preferences() {
        let config = AppConfig {
            language: "zh-CN".to_string(),
            theme: Theme::Light,
            endpoint: None,
        };
        let app = App::from_config(&config);
        assert_eq!(app.language, Language::ZhCn);
        assert_eq!(app.theme, Theme::Light);
        assert!(app.validator.credential.is_empty());
    }

    #[test]
    fn unknown_language_falls_back() {
        let config = AppConfig {
            language: "xx".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(App::from_config(&config).language, Language::EnUs);
    }

    #[test]
    fn apply_to_config_keeps_endpoint() {
        let mut app = App::new();
        app.language = Language::ZhCn;
        app.theme = Theme::Light;
        app.validator.update_credential("sk-secret");

        let mut config = AppConfig {
            endpoint: Some("http://localhost:8080/v1/user/info".to_string()),
            ..AppConfig::default()
        };
        app.apply_to_config(&mut config);

        assert_eq!(config.language, "zh-CN");
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(
            config.endpoint.as_deref(),
            Some("http://localhost:8080/v1/user/info")
        );
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("sk-secret"));
    }
}
