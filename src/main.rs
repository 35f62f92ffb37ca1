use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use listita::app::{self, App};
use listita::config::load_config;
use listita::remote::{HttpBackend, OfflineBackend};
use listita::store::storage;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Lista de bebé compartida: listas de la compra con autocompletado de
/// artículos guardados.
#[derive(Debug, Parser)]
#[command(name = "listita", version, about)]
struct Args {
    /// Ruta a un fichero de configuración alternativo
    #[arg(long)]
    config: Option<PathBuf>,

    /// No conectar con el servidor; las operaciones remotas fallan al instante
    #[arg(long)]
    offline: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    env_logger::init();

    let config = load_config(args.config.as_deref());
    let backend: Box<dyn listita::remote::Backend> = if args.offline {
        Box::new(OfflineBackend)
    } else if config.backend.is_configured() {
        Box::new(HttpBackend::new(&config.backend))
    } else {
        log::warn!("Backend sin configurar; arrancando en modo offline");
        Box::new(OfflineBackend)
    };
    let store = storage::load_cache();

    let mut app = App::new(config, backend, store);
    app.refresh_lists();

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;

    let result = run(terminal, &mut app);

    // Restore terminal (automatic cleanup)
    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app::render(app, frame))?;

        app::handle_events(app, EVENT_POLL_TIMEOUT)?;
        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
