pub mod event;
pub mod terminal_guard;

pub use event::{InputEvent, Key};
pub use terminal_guard::{TerminalGuard, TerminalOps, TerminalRestorer, TerminationSignal};
