use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::kernel::{AppState, BlockKind, FocusTarget};

use super::super::theme::UiTheme;
use super::HitRegions;

pub(super) fn render(
    state: &AppState,
    theme: &UiTheme,
    frame: &mut Frame,
    area: Rect,
    regions: &mut HitRegions,
) {
    let Some(pane) = state.viewer.pane() else {
        return;
    };
    if area.width < 5 || area.height < 3 {
        return;
    }

    let focused = state.focus == FocusTarget::Viewer && !state.modal_open();
    let border_style = if focused {
        Style::default().fg(theme.focus_border)
    } else {
        Style::default().fg(theme.inactive_border)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", pane.title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Close affordance on the top border, mirrored by the Esc key.
    let close = Rect::new(area.x + area.width.saturating_sub(4), area.y, 3, 1);
    frame.render_widget(
        Paragraph::new("[✕]").style(Style::default().fg(theme.muted_fg)),
        close,
    );
    regions.viewer_close = Some(close);
    regions.viewer_area = Some(inner);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    if pane.doc.lines.is_empty() {
        let placeholder = Paragraph::new("(empty document)")
            .style(Style::default().fg(theme.muted_fg))
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(placeholder, inner);
        return;
    }

    let lines: Vec<Line> = pane
        .doc
        .lines
        .iter()
        .map(|line| styled_line(line.kind, &line.text, inner.width, theme))
        .collect();

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((pane.scroll as u16, 0));
    frame.render_widget(content, inner);
}

fn styled_line<'a>(
    kind: BlockKind,
    text: &'a str,
    width: u16,
    theme: &UiTheme,
) -> Line<'a> {
    match kind {
        BlockKind::Heading(level) => {
            let style = if level <= 2 {
                Style::default()
                    .fg(theme.heading_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            Line::from(Span::styled(text, style))
        }
        BlockKind::Pre => Line::from(Span::styled(text, Style::default().fg(theme.pre_fg))),
        BlockKind::Rule => Line::from(Span::styled(
            "─".repeat(width as usize),
            Style::default().fg(theme.muted_fg),
        )),
        BlockKind::Paragraph | BlockKind::ListItem => Line::from(Span::raw(text)),
    }
}
