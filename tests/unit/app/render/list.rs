use super::*;
use crate::app::render;
use crate::kernel::{AppState, FileRecord};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;

fn record(name: &str, size: u64) -> FileRecord {
    FileRecord::new(
        name.to_string(),
        size,
        Arc::from("<p>x</p>"),
        "2026-08-06 10:00:00".to_string(),
    )
}

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let area = *buffer.area();
    let mut out = String::new();
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            out.push_str(buffer.get(x, y).symbol());
        }
        out.push('\n');
    }
    out
}

fn draw_state(state: &AppState) -> (String, render::HitRegions) {
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    let theme = UiTheme::default();
    let mut regions = render::HitRegions::default();
    terminal
        .draw(|frame| regions = render::draw(state, &theme, frame))
        .unwrap();
    (buffer_text(&terminal), regions)
}

#[test]
fn project_rows_keeps_registry_order_and_formats_meta() {
    let mut state = AppState::default();
    state.registry.append(record("report.html", 2048));
    state.registry.append(record("chart.html", 1_536_000));

    let rows = project_rows(&state.registry);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "report.html");
    assert_eq!(rows[0].meta, "2 KB • 2026-08-06 10:00:00");
    assert_eq!(rows[1].meta, "1.46 MB • 2026-08-06 10:00:00");
}

#[test]
fn empty_registry_renders_fixed_placeholder() {
    let state = AppState::default();
    let (text, regions) = draw_state(&state);

    assert!(text.contains("No files staged yet"));
    assert!(regions.list_rows.is_empty());
    assert!(regions.view_buttons.is_empty());
}

#[test]
fn each_record_renders_one_row_with_actions() {
    let mut state = AppState::default();
    state.registry.append(record("a.html", 10));
    state.registry.append(record("b.html", 20));

    let (text, regions) = draw_state(&state);

    assert!(text.contains("a.html"));
    assert!(text.contains("b.html"));
    assert!(text.contains("[View]"));
    assert!(text.contains("[Delete]"));
    assert_eq!(regions.list_rows.len(), 2);
    assert_eq!(regions.view_buttons.len(), 2);
    assert_eq!(regions.delete_buttons.len(), 2);
    // Rows appear in registry order, top to bottom.
    assert!(regions.list_rows[0].0.y < regions.list_rows[1].0.y);
    assert_eq!(regions.list_rows[0].1, state.registry.iter().next().unwrap().id);
}

#[test]
fn long_names_are_truncated_not_wrapped() {
    let mut state = AppState::default();
    let long = "x".repeat(200);
    state.registry.append(record(&format!("{long}.html"), 10));

    let (text, regions) = draw_state(&state);
    assert_eq!(regions.list_rows.len(), 1);
    assert!(text.contains('…'));
}

#[test]
fn scrolled_list_skips_rows_above_viewport() {
    let mut state = AppState::default();
    for i in 0..40 {
        state.registry.append(record(&format!("f{i:02}.html"), 10));
    }
    state.list.selected = 39;
    state.list.view_height = 18;
    state.list.scroll_into_view();

    let (text, _) = draw_state(&state);
    assert!(!text.contains("f00.html"));
    assert!(text.contains("f39.html"));
}
