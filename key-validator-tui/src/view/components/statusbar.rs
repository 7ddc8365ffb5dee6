//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::event::DefaultKeymap;
use crate::i18n::t;
use crate::model::App;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = app.theme.colors();
    let separator = || Span::styled(" │ ", Style::default().fg(c.muted));

    let mut spans = vec![Span::raw(" ")];

    for (i, (key, desc)) in get_hints(app).into_iter().enumerate() {
        if i > 0 {
            spans.push(separator());
        }
        spans.push(Span::styled(key, c.hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(desc, c.hint_desc()));
    }

    // 如果有状态消息，显示在最后
    if let Some(ref msg) = app.status_message {
        spans.push(separator());
        spans.push(Span::styled(msg.clone(), Style::default().fg(c.warning)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(c.statusbar());
    frame.render_widget(paragraph, area);
}

/// 生成快捷键提示
fn get_hints(app: &App) -> Vec<(String, &'static str)> {
    let hints = &t(app.language).hints;

    vec![
        (DefaultKeymap::SUBMIT.label(), hints.validate),
        (DefaultKeymap::CLEAR_INPUT.label(), hints.clear),
        (DefaultKeymap::TOGGLE_MASK.label(), hints.mask),
        (DefaultKeymap::TOGGLE_LANGUAGE.label(), hints.language),
        (DefaultKeymap::TOGGLE_THEME.label(), hints.theme),
        (DefaultKeymap::QUIT.label(), hints.quit),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::i18n::Language;

    #[test]
    fn hints_follow_language() {
        let mut app = App::new();
        let english = get_hints(&app);
        assert_eq!(english[0], ("Enter".to_string(), "Validate"));

        app.language = Language::ZhCn;
        let chinese = get_hints(&app);
        assert_eq!(chinese[0].0, "Enter");
        assert_ne!(chinese[0].1, english[0].1);
    }
}
