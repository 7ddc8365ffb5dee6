//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod validator;          // 校验表单子消息处理
//!
//!         pub fn update(app: &mut App, msg: AppMessage, backend: &dyn ValidationBackend) {...}
//!
//!
//!     主更新函数使用 match 穷举 AppMessage，
//!     表单相关的子消息委托给 validator 模块。
//!
//!     backend 以 trait 对象传入：
//!         - 运行时是 ValidationService（tokio 任务 + 结果通道）
//!         - 测试中是记录调用的 mock，不发起真实请求
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 表单更新（validator.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Submit:
//!         输入为空          → error = "API Key is required"，不发请求
//!         已有请求进行中    → 忽略
//!         否则              → begin_request()，backend.dispatch(id, key)
//!
//!     Finished { request_id, outcome }:
//!         编号不是当前请求  → 丢弃
//!         否则              → end_request()，再写入 account 或 error
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod validator;

use crate::backend::ValidationBackend;
use crate::i18n;
use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage, backend: &dyn ValidationBackend) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::Validator(validator_msg) => {
            validator::update(app, validator_msg, backend);
        }

        AppMessage::ToggleLanguage => {
            app.language = app.language.next();
            log::debug!("language switched to {}", app.language.code());
            app.set_status(app.language.display_name());
        }

        AppMessage::ToggleTheme => {
            app.theme = app.theme.next();
            app.set_status(i18n::t(app.language).status.theme_switched);
        }

        AppMessage::Noop => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::i18n::Language;
    use crate::view::theme::Theme;

    struct NoBackend;

    impl ValidationBackend for NoBackend {
        fn dispatch(&self, _request_id: u64, _credential: String) {
            panic!("no request expected");
        }
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = App::new();
        update(&mut app, AppMessage::Quit, &NoBackend);
        assert!(app.should_quit);
    }

    #[test]
    fn toggle_language_cycles() {
        let mut app = App::new();
        update(&mut app, AppMessage::ToggleLanguage, &NoBackend);
        assert_eq!(app.language, Language::ZhCn);
        assert_eq!(app.status_message.as_deref(), Some("简体中文"));

        update(&mut app, AppMessage::ToggleLanguage, &NoBackend);
        assert_eq!(app.language, Language::EnUs);
    }

    #[test]
    fn toggle_theme_cycles() {
        let mut app = App::new();
        update(&mut app, AppMessage::ToggleTheme, &NoBackend);
        assert_eq!(app.theme, Theme::Light);
        assert_eq!(app.status_message.as_deref(), Some("Theme switched"));
    }

    #[test]
    fn noop_changes_nothing() {
        let mut app = App::new();
        update(&mut app, AppMessage::Noop, &NoBackend);
        assert!(!app.should_quit);
        assert_eq!(app.status_message, None);
    }
}
