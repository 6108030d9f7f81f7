use std::sync::mpsc::Sender;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{info, warn};

use crate::config::{Config, ConfigStore};
use crate::exercises::{Catalog, CatalogCursor};
use crate::metronome::CountdownClock;
use crate::params::RouteParams;
use crate::plan::SessionPlan;
use crate::runtime::{AppEvent, FixedTicker};
use crate::settings::SettingsCollector;
use crate::stopwatch::Stopwatch;
use crate::timer::TimerScreen;

pub const COUNTDOWN_INTERVAL: Duration = Duration::from_secs(1);

/// The screen currently shown, with the state that lives only as long as it does
#[derive(Debug)]
pub enum Screen {
    Home,
    Exercises(CatalogCursor),
    Settings,
    Timer(TimerScreen),
    Stopwatch(Stopwatch),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::Exercises(_) => "exercises",
            Screen::Settings => "settings",
            Screen::Timer(_) => "timer",
            Screen::Stopwatch(_) => "stopwatch",
        }
    }
}

pub struct App {
    pub screen: Screen,
    pub settings: SettingsCollector,
    pub catalog: Option<Catalog>,
    pub viewport: (u16, u16),
    pub should_quit: bool,
    clock: CountdownClock<FixedTicker>,
    store: Option<Box<dyn ConfigStore>>,
}

impl App {
    pub fn new(settings: SettingsCollector, events: Sender<AppEvent>, countdown: Duration) -> Self {
        let catalog = Catalog::builtin()
            .map_err(|err| warn!("exercise catalog unavailable: {err}"))
            .ok();
        Self {
            screen: Screen::Home,
            settings,
            catalog,
            viewport: (80, 24),
            should_quit: false,
            clock: CountdownClock::new(events, FixedTicker::new(countdown)),
            store: None,
        }
    }

    /// Persist settings through `store` whenever a session is started
    pub fn with_store(mut self, store: Box<dyn ConfigStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn timer(&self) -> Option<&TimerScreen> {
        match &self.screen {
            Screen::Timer(timer) => Some(timer),
            _ => None,
        }
    }

    pub fn stopwatch(&self) -> Option<&Stopwatch> {
        match &self.screen {
            Screen::Stopwatch(sw) => Some(sw),
            _ => None,
        }
    }

    fn navigate(&mut self, screen: Screen) {
        info!("{} -> {}", self.screen.name(), screen.name());
        // the previous screen, and any metronome it holds, is dropped here
        self.screen = screen;
    }

    /// Open the timer with the collector's values, as the start button does
    pub fn start_session(&mut self) {
        if let Some(store) = &self.store {
            if let Err(err) = store.save(&Config::from(&self.settings)) {
                warn!("could not save settings: {err}");
            }
        }
        info!(
            "starting session {}",
            SessionPlan::new(self.settings.session_config()).compact()
        );
        let params = self.settings.to_params();
        self.open_timer(&params);
    }

    pub fn open_timer(&mut self, params: &RouteParams) {
        self.navigate(Screen::Timer(TimerScreen::from_params(params)));
    }

    pub fn back(&mut self) {
        let parent = match self.screen {
            Screen::Home => return,
            Screen::Exercises(_) | Screen::Settings | Screen::Stopwatch(_) => Screen::Home,
            Screen::Timer(_) => Screen::Settings,
        };
        self.navigate(parent);
    }

    pub fn handle(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.on_key(key),
            AppEvent::Resize(w, h) => self.viewport = (w, h),
            AppEvent::Tick => {
                if let Screen::Timer(timer) = &mut self.screen {
                    timer.on_frame();
                }
            }
            AppEvent::Second(generation) => self.on_second(generation),
        }
    }

    fn on_second(&mut self, generation: u64) {
        let viewport = self.viewport;
        match &mut self.screen {
            Screen::Timer(timer) => {
                timer.on_second(generation, &mut self.clock, viewport);
            }
            Screen::Stopwatch(sw) => {
                sw.on_second(generation);
            }
            _ => {}
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }
        if matches!(key.code, KeyCode::Esc | KeyCode::Backspace) {
            self.back();
            return;
        }

        match &mut self.screen {
            Screen::Home => match key.code {
                KeyCode::Enter => self.navigate(Screen::Settings),
                KeyCode::Char('e') => self.navigate(Screen::Exercises(CatalogCursor::default())),
                KeyCode::Char('w') => self.navigate(Screen::Stopwatch(Stopwatch::new())),
                _ => {}
            },
            Screen::Exercises(cursor) => {
                let len = self.catalog.as_ref().map_or(0, |c| c.exercises.len());
                match key.code {
                    KeyCode::Up | KeyCode::Char('k') => cursor.up(),
                    KeyCode::Down | KeyCode::Char('j') => cursor.down(len),
                    _ => {}
                }
            }
            Screen::Settings => match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.settings.focus_prev(),
                KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.settings.focus_next(),
                KeyCode::Left | KeyCode::Char('-') => self.settings.adjust_focused(false),
                KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
                    self.settings.adjust_focused(true)
                }
                KeyCode::Enter => self.start_session(),
                _ => {}
            },
            Screen::Timer(timer) => {
                if timer.show_completion() {
                    if key.code == KeyCode::Enter && timer.acknowledge(&mut self.clock) {
                        self.navigate(Screen::Settings);
                    }
                    return;
                }
                match key.code {
                    KeyCode::Char(' ') | KeyCode::Enter => timer.start_stop(&mut self.clock),
                    KeyCode::Char('p') => timer.toggle_pause(&mut self.clock),
                    _ => {}
                }
            }
            Screen::Stopwatch(sw) => match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => sw.start_stop(&mut self.clock),
                KeyCode::Char('p') => sw.toggle_pause(&mut self.clock),
                _ => {}
            },
        }
    }
}
