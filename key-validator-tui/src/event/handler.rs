//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ValidatorMessage};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event),
        Event::Paste(text) => AppMessage::Validator(ValidatorMessage::Paste(text)),
        // 终端窗口大小改变，下一轮自动重绘
        Event::Resize(_, _) => AppMessage::Noop,
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // 全局快捷键
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::TOGGLE_LANGUAGE.matches(&key) {
        return AppMessage::ToggleLanguage;
    }

    if DefaultKeymap::TOGGLE_THEME.matches(&key) {
        return AppMessage::ToggleTheme;
    }

    handle_form_keys(key)
}

/// 表单按键
fn handle_form_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Validator(ValidatorMessage::Submit);
    }

    if DefaultKeymap::CLEAR_INPUT.matches(&key) {
        return AppMessage::Validator(ValidatorMessage::Clear);
    }

    if DefaultKeymap::TOGGLE_MASK.matches(&key) {
        return AppMessage::Validator(ValidatorMessage::ToggleMask);
    }

    let msg = match key.code {
        KeyCode::Backspace => ValidatorMessage::Backspace,
        KeyCode::Delete => ValidatorMessage::Delete,
        KeyCode::Left => ValidatorMessage::CursorLeft,
        KeyCode::Right => ValidatorMessage::CursorRight,
        KeyCode::Home => ValidatorMessage::CursorHome,
        KeyCode::End => ValidatorMessage::CursorEnd,
        // Shift 组合产生大写字母，照常输入
        KeyCode::Char(c) if matches!(key.modifiers, KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            ValidatorMessage::Input(c)
        }
        _ => return AppMessage::Noop,
    };

    AppMessage::Validator(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn enter_submits() {
        let msg = handle_event(press(KeyCode::Enter, KeyModifiers::NONE));
        assert!(matches!(msg, AppMessage::Validator(ValidatorMessage::Submit)));
    }

    #[test]
    fn characters_are_input() {
        let msg = handle_event(press(KeyCode::Char('k'), KeyModifiers::NONE));
        assert!(matches!(msg, AppMessage::Validator(ValidatorMessage::Input('k'))));

        let msg = handle_event(press(KeyCode::Char('K'), KeyModifiers::SHIFT));
        assert!(matches!(msg, AppMessage::Validator(ValidatorMessage::Input('K'))));
    }

    #[test]
    fn release_is_ignored() {
        let event = Event::Key(KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert!(matches!(handle_event(event), AppMessage::Noop));
    }

    #[test]
    fn paste_becomes_paste_message() {
        let msg = handle_event(Event::Paste("sk-pasted".to_string()));
        match msg {
            AppMessage::Validator(ValidatorMessage::Paste(text)) => assert_eq!(text, "sk-pasted"),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn global_shortcuts() {
        assert!(matches!(
            handle_event(press(KeyCode::Esc, KeyModifiers::NONE)),
            AppMessage::Quit
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            AppMessage::Quit
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('l'), KeyModifiers::ALT)),
            AppMessage::ToggleLanguage
        ));
        assert!(matches!(
            handle_event(press(KeyCode::Char('t'), KeyModifiers::ALT)),
            AppMessage::ToggleTheme
        ));
    }

    #[test]
    fn unbound_control_chords_are_ignored() {
        assert!(matches!(
            handle_event(press(KeyCode::Char('x'), KeyModifiers::CONTROL)),
            AppMessage::Noop
        ));
    }
}
