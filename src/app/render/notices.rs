use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::kernel::AppState;

use super::super::theme::UiTheme;
use super::HitRegions;

const MAX_WIDTH: u16 = 44;

/// Stacked transient notices in the top-right corner, newest on top. Each is
/// one row: severity tag, message, and a close affordance.
pub(super) fn render(
    state: &AppState,
    theme: &UiTheme,
    frame: &mut Frame,
    area: Rect,
    regions: &mut HitRegions,
) {
    if state.notices.is_empty() || area.width < 10 {
        return;
    }

    let width = MAX_WIDTH.min(area.width.saturating_sub(2));
    let x = area.x + area.width - width - 1;
    let mut y = area.y + 1;

    for notice in state.notices.iter().rev() {
        if y >= area.y + area.height.saturating_sub(1) {
            break;
        }

        let notice_area = Rect::new(x, y, width, 1);
        frame.render_widget(Clear, notice_area);

        let style = Style::default()
            .bg(theme.notice_bg(notice.severity))
            .fg(theme.notice_fg(notice.severity));

        let tag = format!(" {:<5} ", notice.severity.label());
        let close = " ✕ ";
        let available = (width as usize).saturating_sub(tag.width() + close.width());
        let message = clip(&notice.message, available);
        let pad = available.saturating_sub(message.width());

        let line = Line::from(vec![
            Span::raw(tag),
            Span::raw(message),
            Span::raw(" ".repeat(pad)),
            Span::raw(close),
        ]);
        frame.render_widget(Paragraph::new(line).style(style), notice_area);

        let close_area = Rect::new(x + width.saturating_sub(3), y, 3, 1);
        regions.notice_close.push((close_area, notice.id));

        y += 2;
    }
}

fn clip(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
