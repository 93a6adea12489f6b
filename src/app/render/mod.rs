//! Frame rendering: a wholesale projection of [`AppState`] every draw.
//!
//! Rendering also produces the frame's [`HitRegions`], the mouse hit-testing
//! table for everything clickable in the frame just drawn.

mod dialogs;
mod list;
mod notices;
mod status;
mod viewer;

pub use list::{project_rows, ListRow, EMPTY_STATE_TEXT};

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::kernel::{AppState, RecordId};

use super::theme::UiTheme;

const HEADER_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 1;

/// Clickable regions recorded while drawing one frame.
#[derive(Debug, Default, Clone)]
pub struct HitRegions {
    pub drop_hint: Option<Rect>,
    pub list_area: Option<Rect>,
    pub list_rows: Vec<(Rect, RecordId)>,
    pub view_buttons: Vec<(Rect, RecordId)>,
    pub delete_buttons: Vec<(Rect, RecordId)>,
    pub viewer_area: Option<Rect>,
    pub viewer_close: Option<Rect>,
    pub notice_close: Vec<(Rect, u64)>,
    pub picker_area: Option<Rect>,
    pub picker_rows: Vec<(Rect, usize)>,
    pub confirm_yes: Option<Rect>,
    pub confirm_no: Option<Rect>,
    pub list_view_height: usize,
    pub picker_view_height: usize,
}

pub fn draw(state: &AppState, theme: &UiTheme, frame: &mut Frame) -> HitRegions {
    let mut regions = HitRegions::default();
    let area = frame.area();
    if area.width == 0 || area.height == 0 {
        return regions;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);

    render_drop_hint(state, theme, frame, chunks[0], &mut regions);

    let body = chunks[1];
    if state.viewer.is_showing() {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(body);
        list::render(state, theme, frame, panes[0], &mut regions);
        viewer::render(state, theme, frame, panes[1], &mut regions);
    } else {
        list::render(state, theme, frame, body, &mut regions);
    }

    status::render(state, theme, frame, chunks[2]);

    // Overlays paint over the panes; hit-testing checks them first.
    dialogs::render_picker(state, theme, frame, area, &mut regions);
    dialogs::render_confirm(state, theme, frame, area, &mut regions);
    notices::render(state, theme, frame, area, &mut regions);

    regions
}

/// The designated drop target. Terminals deliver drops as pastes, so this is
/// a standing hint rather than a hover-highlighted zone.
fn render_drop_hint(
    state: &AppState,
    theme: &UiTheme,
    frame: &mut Frame,
    area: Rect,
    regions: &mut HitRegions,
) {
    if area.height == 0 {
        return;
    }
    regions.drop_hint = Some(area);

    let border_style = if state.pending_reads > 0 {
        Style::default().fg(theme.accent_fg)
    } else {
        Style::default().fg(theme.inactive_border)
    };

    let text = if state.pending_reads > 0 {
        format!("Reading {} file(s)…", state.pending_reads)
    } else {
        "Drop HTML files onto this window, or press Ctrl+O to browse (click here)".to_string()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" hview ");
    let hint = Paragraph::new(Line::from(text))
        .style(Style::default().add_modifier(Modifier::DIM))
        .block(block)
        .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(hint, area);
}

pub(super) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
