use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::kernel::{Action, FocusTarget};
use crate::tui::event::{is_press, Key};

use super::App;

impl App {
    pub(super) fn handle_key(&mut self, event: &KeyEvent) -> bool {
        if !is_press(event) {
            return false;
        }
        let key = Key::from(event);

        // Global chords, live regardless of focus.
        if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.request_quit();
            return false;
        }
        if key.code == KeyCode::Char('o') && key.has_platform_modifier() {
            return self.dispatch(Action::OpenPicker);
        }

        if self.state().confirm.visible {
            return self.handle_confirm_key(key);
        }
        if self.state().picker.visible {
            return self.handle_picker_key(key);
        }

        match key.code {
            KeyCode::Esc => self.dispatch(Action::CloseViewer),
            KeyCode::Tab => self.dispatch(Action::FocusNext),
            KeyCode::Char('q') if key.modifiers.is_empty() => {
                self.request_quit();
                false
            }
            KeyCode::Char('x') => self.dispatch(Action::DismissNewestNotice),
            _ => match self.state().focus {
                FocusTarget::List => self.handle_list_key(key),
                FocusTarget::Viewer => self.handle_viewer_key(key),
            },
        }
    }

    fn handle_confirm_key(&mut self, key: Key) -> bool {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') => self.dispatch(Action::ConfirmAccept),
            KeyCode::Esc | KeyCode::Char('n') => self.dispatch(Action::ConfirmCancel),
            _ => false,
        }
    }

    fn handle_picker_key(&mut self, key: Key) -> bool {
        match key.code {
            KeyCode::Esc => self.dispatch(Action::PickerCancel),
            KeyCode::Up | KeyCode::Char('k') => {
                self.dispatch(Action::PickerMoveSelection { delta: -1 })
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.dispatch(Action::PickerMoveSelection { delta: 1 })
            }
            KeyCode::PageUp => self.dispatch(Action::PickerMoveSelection { delta: -10 }),
            KeyCode::PageDown => self.dispatch(Action::PickerMoveSelection { delta: 10 }),
            KeyCode::Enter => self.dispatch(Action::PickerActivate),
            KeyCode::Backspace => self.dispatch(Action::PickerParent),
            KeyCode::Char(' ') => self.dispatch(Action::PickerToggleMark),
            _ => false,
        }
    }

    fn handle_list_key(&mut self, key: Key) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.dispatch(Action::ListMoveSelection { delta: -1 })
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.dispatch(Action::ListMoveSelection { delta: 1 })
            }
            KeyCode::Enter => self.dispatch(Action::ViewSelected),
            KeyCode::Char('d') | KeyCode::Delete => self.dispatch(Action::RequestDeleteSelected),
            _ => false,
        }
    }

    fn handle_viewer_key(&mut self, key: Key) -> bool {
        let page = self
            .regions
            .viewer_area
            .map(|area| area.height.max(1) as usize)
            .unwrap_or(10);

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.dispatch(Action::ViewerScroll { delta: -1, page: 1 })
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.dispatch(Action::ViewerScroll { delta: 1, page: 1 })
            }
            KeyCode::PageUp => self.dispatch(Action::ViewerScroll { delta: -1, page }),
            KeyCode::PageDown => self.dispatch(Action::ViewerScroll { delta: 1, page }),
            KeyCode::Home => {
                let changed = self.dispatch(Action::ViewerScroll {
                    delta: -1,
                    page: usize::MAX / 2,
                });
                changed
            }
            _ => false,
        }
    }
}
