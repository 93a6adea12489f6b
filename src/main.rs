use std::io;
use std::path::PathBuf;
use std::sync::mpsc;

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use hview::app::App;
use hview::runtime::AsyncRuntime;
use hview::settings;
use hview::tui::TerminalGuard;

fn main() -> io::Result<()> {
    let startup_paths: Vec<PathBuf> = std::env::args().skip(1).map(PathBuf::from).collect();

    let _logging = hview::logging::init();

    let _ = settings::ensure_settings_file();
    let settings = settings::load_settings().unwrap_or_default();

    let start_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/"));

    let (msg_tx, msg_rx) = mpsc::channel();
    let runtime = AsyncRuntime::new(msg_tx)?;

    let guard = TerminalGuard::new(settings.mouse_capture)?;

    #[cfg(unix)]
    let signal_rx = {
        let (signal_tx, signal_rx) = mpsc::channel();
        let _ = hview::tui::terminal_guard::install_termination_signals(
            guard.restorer(),
            signal_tx,
        )?;
        signal_rx
    };

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(&settings, start_dir, runtime, msg_rx);
    app.submit_startup_paths(startup_paths);

    let result = app.run(&mut terminal);

    let restorer = guard.restorer();
    drop(guard);

    #[cfg(unix)]
    if let Ok(signal) = signal_rx.try_recv() {
        let _ = restorer.restore();
        std::process::exit(signal.exit_code());
    }
    let _ = restorer;

    result
}
