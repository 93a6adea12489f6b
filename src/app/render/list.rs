use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::kernel::{AppState, FocusTarget, RecordId, Registry};

use super::super::theme::UiTheme;
use super::HitRegions;

pub const EMPTY_STATE_TEXT: &str =
    "No files staged yet. Drop HTML files above to get started.";

const VIEW_LABEL: &str = "[View]";
const DELETE_LABEL: &str = "[Delete]";

/// Pure projection of the registry into display rows, in registry order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub id: RecordId,
    pub name: String,
    pub meta: String,
}

pub fn project_rows(registry: &Registry) -> Vec<ListRow> {
    registry
        .iter()
        .map(|record| ListRow {
            id: record.id,
            name: record.name.clone(),
            meta: format!(
                "{} • {}",
                crate::kernel::util::format_file_size(record.size),
                record.uploaded_at
            ),
        })
        .collect()
}

pub(super) fn render(
    state: &AppState,
    theme: &UiTheme,
    frame: &mut Frame,
    area: Rect,
    regions: &mut HitRegions,
) {
    let focused = state.focus == FocusTarget::List && !state.modal_open();
    let border_style = if focused {
        Style::default().fg(theme.focus_border)
    } else {
        Style::default().fg(theme.inactive_border)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" Staged Files ({}) ", state.registry.len()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }
    regions.list_area = Some(inner);
    regions.list_view_height = inner.height as usize;

    let rows = project_rows(&state.registry);
    if rows.is_empty() {
        let placeholder = Paragraph::new(EMPTY_STATE_TEXT)
            .style(Style::default().fg(theme.muted_fg))
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(placeholder, inner);
        return;
    }

    let height = inner.height as usize;
    let scroll = state.list.scroll.min(rows.len().saturating_sub(1));
    for (offset, (index, row)) in rows.iter().enumerate().skip(scroll).take(height).enumerate()
    {
        let y = inner.y + offset as u16;
        let row_area = Rect::new(inner.x, y, inner.width, 1);
        regions.list_rows.push((row_area, row.id));

        let selected = index == state.list.selected;
        let base = if selected {
            Style::default().bg(theme.selected_bg).fg(theme.selected_fg)
        } else {
            Style::default()
        };

        frame.render_widget(Paragraph::new(row_line(row, selected, inner.width, theme)).style(base), row_area);

        // Button hit zones sit at the right edge of each row.
        let buttons_width = (VIEW_LABEL.len() + 1 + DELETE_LABEL.len()) as u16;
        if inner.width > buttons_width {
            let delete_x = inner.x + inner.width - DELETE_LABEL.len() as u16;
            let view_x = delete_x - 1 - VIEW_LABEL.len() as u16;
            regions
                .view_buttons
                .push((Rect::new(view_x, y, VIEW_LABEL.len() as u16, 1), row.id));
            regions
                .delete_buttons
                .push((Rect::new(delete_x, y, DELETE_LABEL.len() as u16, 1), row.id));
        }
    }
}

fn row_line<'a>(row: &'a ListRow, selected: bool, width: u16, theme: &UiTheme) -> Line<'a> {
    let buttons_width = VIEW_LABEL.len() + 1 + DELETE_LABEL.len();
    let available = (width as usize).saturating_sub(buttons_width + 1);

    let marker = if selected { "▸ " } else { "  " };
    let marker_width = 2usize;
    let name_width = row.name.width();
    let meta_width = row.meta.width() + 2;

    let mut text = String::new();
    text.push_str(marker);
    if marker_width + name_width + meta_width <= available {
        text.push_str(&row.name);
        let pad = available - marker_width - name_width - meta_width;
        text.push_str(&" ".repeat(pad + 2));
        text.push_str(&row.meta);
    } else {
        text.push_str(&truncate_to_width(&row.name, available.saturating_sub(2)));
    }

    let fill = (width as usize).saturating_sub(text.width() + buttons_width);
    text.push_str(&" ".repeat(fill));

    Line::from(vec![
        Span::raw(text),
        Span::styled(VIEW_LABEL, Style::default().fg(theme.accent_fg)),
        Span::raw(" "),
        Span::styled(
            DELETE_LABEL,
            Style::default().fg(theme.error_bg).add_modifier(Modifier::DIM),
        ),
    ])
}

fn truncate_to_width(text: &str, max: usize) -> String {
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

#[cfg(test)]
#[path = "../../../tests/unit/app/render/list.rs"]
mod tests;
