use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::kernel::Action;

use super::App;

fn hit(area: Option<Rect>, x: u16, y: u16) -> bool {
    area.is_some_and(|rect| contains(rect, x, y))
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

impl App {
    /// Routes clicks through the hit regions recorded at render time.
    /// Overlays win over panes, matching paint order.
    pub(super) fn handle_mouse(&mut self, event: &MouseEvent) -> bool {
        let (x, y) = (event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_left_click(x, y),
            MouseEventKind::ScrollUp => self.handle_scroll(x, y, -1),
            MouseEventKind::ScrollDown => self.handle_scroll(x, y, 1),
            _ => false,
        }
    }

    fn handle_left_click(&mut self, x: u16, y: u16) -> bool {
        let regions = self.regions.clone();

        for (area, id) in &regions.notice_close {
            if contains(*area, x, y) {
                return self.dispatch(Action::DismissNotice { id: *id });
            }
        }

        if self.state().confirm.visible {
            if hit(regions.confirm_yes, x, y) {
                return self.dispatch(Action::ConfirmAccept);
            }
            if hit(regions.confirm_no, x, y) {
                return self.dispatch(Action::ConfirmCancel);
            }
            return false;
        }

        if self.state().picker.visible {
            for (area, offset) in &regions.picker_rows {
                if contains(*area, x, y) {
                    let index = self.state().picker.scroll + offset;
                    // Second click on the selection activates it.
                    if index == self.state().picker.selected {
                        return self.dispatch(Action::PickerActivate);
                    }
                    return self.dispatch(Action::PickerClickRow { row: *offset });
                }
            }
            return false;
        }

        if hit(regions.viewer_close, x, y) {
            return self.dispatch(Action::CloseViewer);
        }

        for (area, id) in &regions.view_buttons {
            if contains(*area, x, y) {
                return self.dispatch(Action::ViewRecord { id: *id });
            }
        }
        for (area, id) in &regions.delete_buttons {
            if contains(*area, x, y) {
                return self.dispatch(Action::RequestDelete { id: *id });
            }
        }

        if hit(regions.list_area, x, y) {
            if let Some(list_area) = regions.list_area {
                let row = (y - list_area.y) as usize;
                return self.dispatch(Action::ListClickRow { row });
            }
        }

        // Clicking the drop hint opens the picker, like clicking the
        // upload area in a browser.
        if hit(regions.drop_hint, x, y) {
            return self.dispatch(Action::OpenPicker);
        }

        false
    }

    fn handle_scroll(&mut self, x: u16, y: u16, delta: isize) -> bool {
        if self.state().picker.visible {
            if hit(self.regions.picker_area, x, y) {
                return self.dispatch(Action::PickerMoveSelection { delta });
            }
            return false;
        }
        if hit(self.regions.viewer_area, x, y) {
            return self.dispatch(Action::ViewerScroll { delta, page: 3 });
        }
        if hit(self.regions.list_area, x, y) {
            return self.dispatch(Action::ListMoveSelection { delta });
        }
        false
    }
}
