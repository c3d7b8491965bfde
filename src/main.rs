mod app;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton, MouseEvent,
    MouseEventKind,
};
use crossterm::execute;
use flyover::data::{load_catalog, GameRegion};
use flyover::map::AltitudeMode;
use flyover::{EngineConfig, GeoCatalog};
use ratatui::DefaultTerminal;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Fly over a globe in the terminal.
#[derive(Parser, Debug)]
#[command(name = "flyover", version, about)]
struct Args {
    /// Directory holding Natural Earth GeoJSON files
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// TOML file overriding engine settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Starting region (world, us-states, uk-counties, ireland, canadian-provinces)
    #[arg(long, default_value = "world")]
    region: GameRegion,

    /// Seed for target selection (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs here; the terminal itself is owned by the UI
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// The requested seed, or a fresh one from the thread RNG.
fn seed_or_random(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_tracing(path)?;
    }

    let config = match &args.config {
        Some(path) => EngineConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let catalog = Arc::new(load_catalog(&args.data_dir).context("building geographic catalog")?);
    let seed = seed_or_random(args.seed);
    tracing::info!(seed, region = args.region.key(), "starting flyover");

    // Initialize terminal
    let mut terminal = ratatui::init();
    terminal.clear()?;

    // Enable mouse capture
    execute!(std::io::stdout(), EnableMouseCapture)?;

    let result = run(&mut terminal, catalog, config, args.region, seed);

    // Disable mouse capture and restore terminal
    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    // Always track mouse position for cursor marker
    app.set_mouse_pos(mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.tap(mouse.column, mouse.row),
        MouseEventKind::ScrollUp => app.engine.set_altitude_mode(AltitudeMode::Low),
        MouseEventKind::ScrollDown => app.engine.set_altitude_mode(AltitudeMode::High),
        _ => {}
    }
}

fn run(
    terminal: &mut DefaultTerminal,
    catalog: Arc<GeoCatalog>,
    config: EngineConfig,
    region: GameRegion,
    seed: u64,
) -> Result<()> {
    let size = terminal.size()?;
    let mut app = App::new(catalog, config, region, seed, size.width, size.height);
    let mut last = Instant::now();

    // Main loop: update, then draw
    loop {
        let now = Instant::now();
        app.update(now.duration_since(last).as_secs_f64());
        last = now;

        terminal.draw(|frame| ui::render(frame, &app))?;

        // Handle events with ~60fps target
        if event::poll(Duration::from_millis(16))? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events (not release)
                    if key.kind == KeyEventKind::Press {
                        match key.code {
                            KeyCode::Char('q') | KeyCode::Esc => app.quit(),

                            // Steer
                            KeyCode::Left | KeyCode::Char('h') => app.steer(-1),
                            KeyCode::Right | KeyCode::Char('l') => app.steer(1),

                            KeyCode::Char(' ') => app.toggle_altitude(),
                            KeyCode::Char('p') => app.toggle_pause(),
                            KeyCode::Char('[') => app.cycle_region(false),
                            KeyCode::Char(']') => app.cycle_region(true),

                            _ => {}
                        }
                    }
                }
                Event::Mouse(mouse) => {
                    handle_mouse(&mut app, mouse);
                }
                Event::Resize(width, height) => {
                    app.resize(width, height);
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_defaults_to_random() {
        assert_eq!(seed_or_random(Some(42)), 42);
        assert_ne!(seed_or_random(None), seed_or_random(None));
    }
}
