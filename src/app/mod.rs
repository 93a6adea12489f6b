//! 应用层：事件循环、输入分发、效果执行

mod input;
mod mouse;
pub mod render;
pub mod theme;

use std::io;
use std::path::PathBuf;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::{Duration, Instant};

use ratatui::backend::Backend;
use ratatui::Terminal;

use crate::kernel::{Action, AppState, Effect, KernelConfig, Store};
use crate::runtime::{AppMessage, AsyncRuntime};
use crate::settings::Settings;
use crate::tui::InputEvent;

use render::HitRegions;
use theme::UiTheme;

const MAX_MESSAGE_DRAIN_PER_TICK: usize = 256;

pub struct App {
    store: Store,
    runtime: AsyncRuntime,
    msg_rx: Receiver<AppMessage>,
    regions: HitRegions,
    theme: UiTheme,
    tick_rate: Duration,
    should_quit: bool,
}

impl App {
    pub fn new(
        settings: &Settings,
        start_dir: PathBuf,
        runtime: AsyncRuntime,
        msg_rx: Receiver<AppMessage>,
    ) -> Self {
        let config: KernelConfig = settings.kernel_config();
        Self {
            store: Store::new(config, start_dir),
            runtime,
            msg_rx,
            regions: HitRegions::default(),
            theme: UiTheme::default(),
            tick_rate: settings.tick_rate(),
            should_quit: false,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// Stages paths handed over on the command line.
    pub fn submit_startup_paths(&mut self, paths: Vec<PathBuf>) {
        if !paths.is_empty() {
            self.dispatch(Action::SubmitPaths(paths));
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let mut dirty = true;
        while !self.should_quit {
            if dirty {
                let regions = {
                    let state = self.store.state();
                    let theme = &self.theme;
                    let mut regions = HitRegions::default();
                    terminal.draw(|frame| {
                        regions = render::draw(state, theme, frame);
                    })?;
                    regions
                };
                self.regions = regions;
                dirty = false;
                dirty |= self.sync_view_heights();
            }

            if crossterm::event::poll(self.tick_rate)? {
                let event = crossterm::event::read()?;
                dirty |= self.handle_input(event.into());
            }

            dirty |= self.drain_messages();
            dirty |= self.dispatch(Action::Tick {
                now: Instant::now(),
            });
        }
        Ok(())
    }

    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Key(key) => self.handle_key(&key),
            InputEvent::Mouse(mouse) => self.handle_mouse(&mouse),
            InputEvent::Paste(payload) => self.handle_paste(&payload),
            InputEvent::Resize(_, _) => true,
            InputEvent::FocusGained | InputEvent::FocusLost => false,
        }
    }

    /// A drop onto the terminal arrives as one pasted payload of paths.
    fn handle_paste(&mut self, payload: &str) -> bool {
        let paths = crate::kernel::intake::parse_drop_payload(payload);
        if paths.is_empty() {
            return false;
        }
        tracing::info!(count = paths.len(), "drop payload received");
        self.dispatch(Action::SubmitPaths(paths))
    }

    pub fn drain_messages(&mut self) -> bool {
        let mut changed = false;
        let mut drained = 0usize;
        loop {
            if drained >= MAX_MESSAGE_DRAIN_PER_TICK {
                break;
            }
            match self.msg_rx.try_recv() {
                Ok(message) => {
                    drained += 1;
                    changed |= self.dispatch(action_for_message(message));
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        changed
    }

    pub fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.run_effect(effect);
        }
        result.state_changed
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::ReadFile { name, path } => self.runtime.read_file(name, path),
            Effect::LoadDir(path) => self.runtime.load_dir(path),
        }
    }

    /// Viewport heights come from the last frame's layout; the kernel needs
    /// them to keep selections scrolled into view.
    fn sync_view_heights(&mut self) -> bool {
        let mut changed = false;

        let list_height = self.regions.list_view_height;
        if list_height > 0 && list_height != self.store.state().list.view_height {
            changed |= self.dispatch(Action::ListSetViewHeight {
                height: list_height,
            });
        }

        let picker_height = self.regions.picker_view_height;
        if picker_height > 0 && picker_height != self.store.state().picker.view_height {
            changed |= self.dispatch(Action::PickerSetViewHeight {
                height: picker_height,
            });
        }

        changed
    }

    fn request_quit(&mut self) {
        self.should_quit = true;
    }
}

fn action_for_message(message: AppMessage) -> Action {
    match message {
        AppMessage::FileRead {
            name,
            size,
            content,
            ..
        } => Action::FileRead {
            name,
            size,
            content,
        },
        AppMessage::FileReadError { name, error, .. } => Action::FileReadFailed { name, error },
        AppMessage::DirLoaded { path, entries } => Action::PickerDirLoaded {
            path,
            entries,
        },
        AppMessage::DirLoadError { path, error } => Action::PickerDirError { path, error },
    }
}
