mod ui;

use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin, Write},
    panic,
    time::Duration,
};

use sporting::{
    app::{App, COUNTDOWN_INTERVAL},
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore},
    logging,
    plan::SessionPlan,
    runtime::{CrosstermEventSource, EventSource, FixedTicker, Runner, Ticker},
    settings::SettingsCollector,
};

const FRAME_RATE_MS: u64 = 100;

/// interval training timer: exercise and rest phases over configurable rounds
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "An interval training timer for the terminal. Set exercise time, rest time and rounds, then follow the countdown through alternating exercise and rest phases."
)]
pub struct Cli {
    /// seconds of exercise per round (minimum 5, defaults to the last used value)
    #[clap(short = 'e', long = "exercise")]
    exercise_secs: Option<u32>,

    /// seconds of rest between rounds (minimum 5, defaults to the last used value)
    #[clap(short = 'r', long = "rest")]
    rest_secs: Option<u32>,

    /// number of rounds (minimum 1, defaults to the last used value)
    #[clap(short = 'n', long)]
    rounds: Option<u32>,

    /// open straight on the timer screen
    #[clap(long)]
    start: bool,

    /// print the session schedule and exit
    #[clap(long)]
    plan: bool,

    /// do not remember the chosen settings
    #[clap(long)]
    no_save: bool,

    /// countdown cadence in milliseconds
    #[clap(long, hide = true)]
    tick_ms: Option<u64>,
}

impl Cli {
    /// Merge command line values over the stored config
    fn to_settings(&self, stored: &Config) -> SettingsCollector {
        SettingsCollector::new(
            self.exercise_secs.unwrap_or(stored.exercise_secs),
            self.rest_secs.unwrap_or(stored.rest_secs),
            self.rounds.unwrap_or(stored.rounds),
        )
    }

    fn countdown(&self) -> Duration {
        self.tick_ms
            .map(|ms| Duration::from_millis(ms.max(1)))
            .unwrap_or(COUNTDOWN_INTERVAL)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(path) = AppDirs::log_path() {
        if let Err(err) = logging::init(&path) {
            eprintln!("sporting: logging disabled: {err}");
        }
    }

    let store = FileConfigStore::new();
    log::debug!("config at {}", store.path().display());
    let settings = cli.to_settings(&store.load());

    if cli.plan {
        let plan = SessionPlan::new(settings.session_config());
        let mut out = io::stdout().lock();
        for line in plan.render_lines() {
            writeln!(out, "{line}")?;
        }
        return Ok(());
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    install_panic_hook();
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(FRAME_RATE_MS)),
    );
    let mut app = App::new(settings, runner.sender(), cli.countdown());
    if !cli.no_save {
        app = app.with_store(Box::new(store));
    }
    if let Ok(size) = terminal.size() {
        app.viewport = (size.width, size.height);
    }
    if cli.start {
        app.start_session();
    }

    let result = start_tui(&mut terminal, &mut app, &runner);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Restore the terminal before the default hook prints the panic
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        original_hook(panic_info);
    }));
}

fn start_tui<B: Backend, E: EventSource, T: Ticker>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<E, T>,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| ui(app, f))?;

    while !app.should_quit {
        app.handle(runner.step());
        terminal.draw(|f| ui(app, f))?;
    }

    Ok(())
}

fn ui(app: &App, f: &mut Frame) {
    ui::screen::current_screen(&app.screen).render(app, f);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use sporting::runtime::{AppEvent, TestEventSource};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui(app, f)).unwrap();
        buffer_text(&terminal)
    }

    fn test_app() -> App {
        let (tx, _rx) = std::sync::mpsc::channel();
        App::new(SettingsCollector::default(), tx, Duration::from_secs(3600))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle(AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["sporting"]);

        assert_eq!(cli.exercise_secs, None);
        assert_eq!(cli.rest_secs, None);
        assert_eq!(cli.rounds, None);
        assert!(!cli.start);
        assert!(!cli.plan);
        assert!(!cli.no_save);
        assert_eq!(cli.tick_ms, None);
        assert_eq!(cli.countdown(), COUNTDOWN_INTERVAL);
    }

    #[test]
    fn test_cli_overrides_stored_config() {
        let cli = Cli::parse_from(["sporting", "-e", "45", "--rounds", "6"]);
        let stored = Config {
            exercise_secs: 20,
            rest_secs: 25,
            rounds: 2,
        };
        let settings = cli.to_settings(&stored);
        assert_eq!(settings.exercise_secs(), 45);
        assert_eq!(settings.rest_secs(), 25);
        assert_eq!(settings.rounds(), 6);
    }

    #[test]
    fn test_cli_values_below_floor_are_raised() {
        let cli = Cli::parse_from(["sporting", "-e", "1", "-r", "0", "-n", "0"]);
        let settings = cli.to_settings(&Config::default());
        assert_eq!(
            (settings.exercise_secs(), settings.rest_secs(), settings.rounds()),
            (5, 5, 1)
        );
    }

    #[test]
    fn test_cli_rejects_non_numeric() {
        assert!(Cli::try_parse_from(["sporting", "-e", "ten"]).is_err());
    }

    #[test]
    fn test_cli_countdown_never_zero() {
        let cli = Cli::parse_from(["sporting", "--tick-ms", "0"]);
        assert_eq!(cli.countdown(), Duration::from_millis(1));
    }

    #[test]
    fn test_ui_home() {
        let app = test_app();
        let content = draw(&app);
        assert!(content.contains("Sporting"));
        assert!(content.contains("start training"));
    }

    #[test]
    fn test_ui_every_screen_renders() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('e'));
        assert!(draw(&app).contains("Push up"));
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Char('w'));
        assert!(draw(&app).contains("Stopwatch"));
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Enter);
        assert!(draw(&app).contains("Timer settings"));

        press(&mut app, KeyCode::Enter);
        let content = draw(&app);
        assert!(content.contains("Round 1/3"));
    }

    #[test]
    fn test_start_tui_quits_on_q() {
        let es = TestEventSource::new();
        let tx = es.sender();
        let runner = Runner::new(es, FixedTicker::new(Duration::from_millis(5)));
        let mut app = App::new(
            SettingsCollector::default(),
            runner.sender(),
            Duration::from_secs(3600),
        );
        tx.send(AppEvent::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)))
            .unwrap();
        tx.send(AppEvent::Key(KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
        )))
        .unwrap();

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        start_tui(&mut terminal, &mut app, &runner).unwrap();
        assert!(app.should_quit);
        assert_eq!(app.screen.name(), "settings");
        assert!(buffer_text(&terminal).contains("Timer settings"));
    }
}
