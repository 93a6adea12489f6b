use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::kernel::{util, AppState};

use super::super::theme::UiTheme;

pub(super) fn render(state: &AppState, theme: &UiTheme, frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }

    let mut left = format!(
        " {} file(s) · {}",
        state.registry.len(),
        util::format_file_size(state.registry.total_size())
    );
    if state.pending_reads > 0 {
        left.push_str(&format!(" · reading {}…", state.pending_reads));
    }

    let right = "Ctrl+O browse · Enter view · d delete · q quit ";
    let pad = (area.width as usize).saturating_sub(left.width() + right.width());

    let line = Line::from(vec![
        Span::raw(left),
        Span::raw(" ".repeat(pad)),
        Span::styled(right, Style::default().fg(theme.muted_fg)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
