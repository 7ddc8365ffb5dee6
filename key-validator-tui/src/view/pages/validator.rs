//! 校验表单视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::i18n::t;
use crate::model::{App, ViewPhase};

/// 掩码字符
const MASK_CHAR: char = '•';

/// 渲染校验表单
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let state = &app.validator;
    let texts = &t(app.language).validator;
    let c = app.theme.colors();

    let error_height = if state.error.is_some() { 3 } else { 0 };
    let result_height = if state.account.is_some() { 3 } else { 0 };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // 标签
            Constraint::Length(3),             // 输入框
            Constraint::Length(1),             // 按钮
            Constraint::Length(1),             // 间隔
            Constraint::Length(error_height),  // 错误区域
            Constraint::Length(result_height), // 结果区域
            Constraint::Min(0),
        ])
        .split(area);

    // === 标签 ===
    let label = Paragraph::new(Line::from(Span::styled(
        format!(" {}", texts.key_label),
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(label, layout[0]);

    // === 输入框 ===
    // 边框颜色跟随当前阶段
    let input_border = match state.phase() {
        ViewPhase::Idle => c.border_focused,
        ViewPhase::Loading => c.warning,
        ViewPhase::Success => c.success,
        ViewPhase::Failure => c.error,
    };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(input_border))
        .style(Style::default().bg(c.input_bg));
    let input_inner = input_block.inner(layout[1]);
    frame.render_widget(input_block, layout[1]);

    let width = usize::from(input_inner.width);
    if state.credential.is_empty() {
        let placeholder = Paragraph::new(Span::styled(texts.placeholder, Style::default().fg(c.muted)));
        frame.render_widget(placeholder, input_inner);
        frame.set_cursor_position(Position::new(input_inner.x, input_inner.y));
    } else {
        let display = display_value(&state.credential, state.mask_input);
        let (visible, cursor_x) = visible_window(&display, state.cursor, width);
        frame.render_widget(
            Paragraph::new(Span::styled(visible, Style::default().fg(c.fg))),
            input_inner,
        );
        frame.set_cursor_position(Position::new(input_inner.x + cursor_x, input_inner.y));
    }

    // === 按钮 ===
    let button_label = if state.busy {
        texts.validating
    } else {
        texts.validate
    };
    let button = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!(" {button_label} "),
            c.button(state.trigger_disabled()),
        ),
    ]));
    frame.render_widget(button, layout[2]);

    // === 错误区域 ===
    if let Some(ref error) = state.error {
        let block = Block::default()
            .title(format!(" {} ", texts.error_title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(c.error));
        let paragraph = Paragraph::new(Span::styled(error.as_str(), Style::default().fg(c.error)))
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, layout[4]);
    }

    // === 结果区域（只展示余额）===
    if let Some(ref account) = state.account {
        let block = Block::default()
            .title(format!(" {} ", texts.result_title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(c.success));
        let line = Line::from(vec![
            Span::styled(texts.balance, Style::default().fg(c.muted)),
            Span::raw(" "),
            Span::styled(
                account.total_balance.as_str(),
                Style::default().fg(c.success).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(line).block(block), layout[5]);
    }
}

/// 输入框中显示的文本，掩码时每个字符替换为 `•`
fn display_value(credential: &str, masked: bool) -> String {
    if masked {
        credential.chars().map(|_| MASK_CHAR).collect()
    } else {
        credential.to_string()
    }
}

/// 计算输入框可见窗口
///
/// 返回可见文本和光标的显示列。窗口向右滚动以保证光标可见。
fn visible_window(text: &str, cursor: usize, width: usize) -> (String, u16) {
    if width == 0 {
        return (String::new(), 0);
    }

    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());
    let char_width = |ch: &char| ch.width().unwrap_or(0);

    // 光标本身占一列
    let mut start = cursor;
    let mut used = 1;
    while start > 0 {
        let w = char_width(&chars[start - 1]);
        if used + w > width {
            break;
        }
        used += w;
        start -= 1;
    }

    let cursor_x: usize = chars[start..cursor].iter().map(char_width).sum();

    let mut visible = String::new();
    let mut total = 0;
    for ch in &chars[start..] {
        let w = char_width(ch);
        if total + w > width {
            break;
        }
        total += w;
        visible.push(*ch);
    }

    (visible, u16::try_from(cursor_x).unwrap_or(u16::MAX))
}
