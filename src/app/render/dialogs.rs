use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::kernel::AppState;

use super::super::theme::UiTheme;
use super::{centered_rect, HitRegions};

pub(super) fn render_picker(
    state: &AppState,
    theme: &UiTheme,
    frame: &mut Frame,
    area: Rect,
    regions: &mut HitRegions,
) {
    let picker = &state.picker;
    if !picker.visible {
        return;
    }

    let width = (area.width * 3 / 4).clamp(30.min(area.width), 80);
    let height = (area.height * 3 / 4).max(8).min(area.height);
    let dialog = centered_rect(area, width, height);
    frame.render_widget(Clear, dialog);

    let base = Style::default().bg(theme.dialog_bg).fg(theme.dialog_fg);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.focus_border))
        .style(base)
        .title(format!(" Open HTML file — {} ", picker.cwd.display()));
    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);
    if inner.height < 2 || inner.width < 10 {
        return;
    }

    // One footer row of key hints; the rest lists entries.
    let list_area = Rect::new(inner.x, inner.y, inner.width, inner.height - 1);
    let footer_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
    regions.picker_area = Some(list_area);
    regions.picker_view_height = list_area.height as usize;

    if picker.loading {
        frame.render_widget(
            Paragraph::new("Loading…").style(Style::default().fg(theme.muted_fg)),
            list_area,
        );
    } else if let Some(error) = &picker.error {
        frame.render_widget(
            Paragraph::new(error.as_str())
                .style(Style::default().fg(theme.error_bg))
                .wrap(Wrap { trim: true }),
            list_area,
        );
    } else if picker.entries.is_empty() {
        frame.render_widget(
            Paragraph::new("(empty directory)").style(Style::default().fg(theme.muted_fg)),
            list_area,
        );
    } else {
        let height = list_area.height as usize;
        let scroll = picker.scroll.min(picker.entries.len().saturating_sub(1));
        for (offset, (index, entry)) in picker
            .entries
            .iter()
            .enumerate()
            .skip(scroll)
            .take(height)
            .enumerate()
        {
            let y = list_area.y + offset as u16;
            let row_area = Rect::new(list_area.x, y, list_area.width, 1);
            regions.picker_rows.push((row_area, offset));

            let marked = !entry.is_dir && picker.marked.contains(&entry.name);
            let prefix = match (entry.is_dir, marked) {
                (true, _) => "▸ ",
                (false, true) => "● ",
                (false, false) => "  ",
            };
            let suffix = if entry.is_dir { "/" } else { "" };
            let text = format!("{prefix}{}{suffix}", entry.name);

            let mut style = base;
            if index == picker.selected {
                style = Style::default().bg(theme.selected_bg).fg(theme.selected_fg);
            } else if marked {
                style = style.fg(theme.accent_fg);
            }
            frame.render_widget(Paragraph::new(text).style(style), row_area);
        }
    }

    let footer = Line::from(vec![
        Span::styled("Enter", Style::default().fg(theme.accent_fg)),
        Span::raw(" open · "),
        Span::styled("Space", Style::default().fg(theme.accent_fg)),
        Span::raw(" mark · "),
        Span::styled("Backspace", Style::default().fg(theme.accent_fg)),
        Span::raw(" up · "),
        Span::styled("Esc", Style::default().fg(theme.accent_fg)),
        Span::raw(" cancel"),
    ]);
    frame.render_widget(
        Paragraph::new(footer).style(Style::default().fg(theme.muted_fg)),
        footer_area,
    );
}

pub(super) fn render_confirm(
    state: &AppState,
    theme: &UiTheme,
    frame: &mut Frame,
    area: Rect,
    regions: &mut HitRegions,
) {
    let confirm = &state.confirm;
    if !confirm.visible {
        return;
    }

    let width = 50.min(area.width.saturating_sub(4));
    let height = 5.min(area.height.saturating_sub(2));
    if width < 20 || height < 4 {
        return;
    }
    let dialog = centered_rect(area, width, height);
    frame.render_widget(Clear, dialog);

    let base = Style::default().bg(theme.dialog_bg).fg(theme.dialog_fg);
    frame.render_widget(Block::default().style(base), dialog);

    let inner = Rect::new(
        dialog.x.saturating_add(1),
        dialog.y.saturating_add(1),
        dialog.width.saturating_sub(2),
        dialog.height.saturating_sub(2),
    );
    if inner.height < 3 || inner.width < 10 {
        return;
    }

    let title_line = Line::from(Span::styled(
        "Confirm",
        Style::default()
            .fg(theme.heading_fg)
            .add_modifier(Modifier::BOLD),
    ));
    let msg_line = Line::from(confirm.message.as_str());
    let yes = "[Enter] Delete";
    let no = "[Esc] Cancel";
    let hint_line = Line::from(vec![
        Span::styled(yes, Style::default().fg(theme.accent_fg)),
        Span::raw("  "),
        Span::styled(no, Style::default().fg(theme.muted_fg)),
    ]);

    let content = Paragraph::new(vec![title_line, msg_line, hint_line])
        .style(base)
        .wrap(Wrap { trim: true });
    frame.render_widget(content, inner);

    // Hint spans double as click targets on the last content row.
    let hint_y = inner.y + 2;
    regions.confirm_yes = Some(Rect::new(inner.x, hint_y, yes.width() as u16, 1));
    regions.confirm_no = Some(Rect::new(
        inner.x + yes.width() as u16 + 2,
        hint_y,
        no.width() as u16,
        1,
    ));
}
