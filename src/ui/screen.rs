use ratatui::Frame;

use sporting::app::{App, Screen};

use super::{
    exercises::render_exercises, home::render_home, settings::render_settings,
    stopwatch::render_stopwatch, timer::render_timer,
};

/// A UI screen boundary: responsible for rendering one `Screen` variant
pub trait ScreenView {
    fn render(&self, app: &App, f: &mut Frame);
}

pub struct HomeView;

impl ScreenView for HomeView {
    fn render(&self, app: &App, f: &mut Frame) {
        render_home(app, f);
    }
}

pub struct ExercisesView;

impl ScreenView for ExercisesView {
    fn render(&self, app: &App, f: &mut Frame) {
        render_exercises(app, f);
    }
}

pub struct SettingsView;

impl ScreenView for SettingsView {
    fn render(&self, app: &App, f: &mut Frame) {
        render_settings(&app.settings, f);
    }
}

pub struct TimerView;

impl ScreenView for TimerView {
    fn render(&self, app: &App, f: &mut Frame) {
        if let Some(timer) = app.timer() {
            render_timer(timer, f);
        }
    }
}

pub struct StopwatchView;

impl ScreenView for StopwatchView {
    fn render(&self, app: &App, f: &mut Frame) {
        if let Some(sw) = app.stopwatch() {
            render_stopwatch(sw, f);
        }
    }
}

/// Helper to construct the appropriate view for the current screen
pub fn current_screen(screen: &Screen) -> Box<dyn ScreenView> {
    match screen {
        Screen::Home => Box::new(HomeView),
        Screen::Exercises(_) => Box::new(ExercisesView),
        Screen::Settings => Box::new(SettingsView),
        Screen::Timer(_) => Box::new(TimerView),
        Screen::Stopwatch(_) => Box::new(StopwatchView),
    }
}
