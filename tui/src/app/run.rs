use std::{
    env,
    fs::OpenOptions,
    io,
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::{Context as _, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use env_logger::{Env, Target};
use ratatui::{backend::CrosstermBackend, Terminal};
use showcase::ShowcaseConfig;

use crate::{
    state::Context,
    ui::screens::{menu, Action, Screen},
};

/// Environment variable naming the log file.
pub const LOG_ENV: &str = "SHOWCASE_LOG";
const DEFAULT_LOG_FILE: &str = "ml-showcase.log";
const POLL_INTERVAL: Duration = Duration::from_millis(120);

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Sends log output to a file, the terminal belongs to the UI.
///
/// # Errors
/// Returns an error if the log file can't be opened.
pub fn init_logging() -> Result<()> {
    let path = env::var_os(LOG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();

    Ok(())
}

/// Runs the TUI application.
///
/// # Errors
/// Returns an error if the config is invalid or terminal setup or rendering
/// fails.
pub fn run(config: ShowcaseConfig) -> Result<()> {
    let mut ctx = Context::new(&config)?;
    log::info!("starting showcase, delay={} jitter={}", config.delay, config.jitter);

    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut screen = Screen::Menu(menu::MenuState::new());

    loop {
        let now = Instant::now();
        ctx.tick(now);
        terminal.draw(|f| screen.draw(f, &ctx, now))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(k) = event::read()? {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                if k.code == KeyCode::Char('c') && k.modifiers.contains(KeyModifiers::CONTROL) {
                    break;
                }
                match screen.handle_key(k.code, &mut ctx, Instant::now()) {
                    Action::Quit => break,
                    Action::Transition(next) => screen = next,
                    Action::None => {}
                }
            }
        }
    }

    terminal.show_cursor()?;
    log::info!("bye");
    Ok(())
}
