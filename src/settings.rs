use crate::params::RouteParams;
use crate::session::{SessionConfig, DEFAULT_EXERCISE_SECS, DEFAULT_REST_SECS, DEFAULT_ROUNDS};
use crate::util::format_total;

pub const SECS_STEP: u32 = 5;
pub const SECS_FLOOR: u32 = 5;
pub const ROUNDS_STEP: u32 = 1;
pub const ROUNDS_FLOOR: u32 = 1;

/// One adjustable value on the settings screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Field {
    #[strum(serialize = "Exercise time")]
    Exercise,
    #[strum(serialize = "Rest time")]
    Rest,
    #[strum(serialize = "Rounds")]
    Rounds,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Exercise, Field::Rest, Field::Rounds];

    pub fn next(self) -> Self {
        match self {
            Field::Exercise => Field::Rest,
            Field::Rest => Field::Rounds,
            Field::Rounds => Field::Exercise,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Field::Exercise => Field::Rounds,
            Field::Rest => Field::Exercise,
            Field::Rounds => Field::Rest,
        }
    }

    fn step_and_floor(self) -> (u32, u32) {
        match self {
            Field::Exercise | Field::Rest => (SECS_STEP, SECS_FLOOR),
            Field::Rounds => (ROUNDS_STEP, ROUNDS_FLOOR),
        }
    }
}

/// Collects exercise time, rest time and round count before a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsCollector {
    exercise_secs: u32,
    rest_secs: u32,
    rounds: u32,
    pub focus: Field,
}

impl SettingsCollector {
    /// Values below their floor are raised to it.
    pub fn new(exercise_secs: u32, rest_secs: u32, rounds: u32) -> Self {
        Self {
            exercise_secs: exercise_secs.max(SECS_FLOOR),
            rest_secs: rest_secs.max(SECS_FLOOR),
            rounds: rounds.max(ROUNDS_FLOOR),
            focus: Field::Exercise,
        }
    }

    pub fn exercise_secs(&self) -> u32 {
        self.exercise_secs
    }

    pub fn rest_secs(&self) -> u32 {
        self.rest_secs
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn value(&self, field: Field) -> u32 {
        match field {
            Field::Exercise => self.exercise_secs,
            Field::Rest => self.rest_secs,
            Field::Rounds => self.rounds,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut u32 {
        match field {
            Field::Exercise => &mut self.exercise_secs,
            Field::Rest => &mut self.rest_secs,
            Field::Rounds => &mut self.rounds,
        }
    }

    pub fn adjust(&mut self, field: Field, increment: bool) {
        let (step, floor) = field.step_and_floor();
        let value = self.value_mut(field);
        *value = if increment {
            value.saturating_add(step)
        } else {
            value.saturating_sub(step).max(floor)
        };
    }

    pub fn adjust_focused(&mut self, increment: bool) {
        self.adjust(self.focus, increment);
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Session length without the rest after the final round
    pub fn total_duration(&self) -> u64 {
        self.session_config().total_secs()
    }

    pub fn session_config(&self) -> SessionConfig {
        // floors keep every value >= 1
        SessionConfig::new(self.exercise_secs, self.rest_secs, self.rounds).unwrap_or_default()
    }

    pub fn to_params(&self) -> RouteParams {
        self.session_config().to_params()
    }

    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("Total duration: {}", format_total(self.total_duration())),
            format!(
                "{} rounds of {}s exercise",
                self.rounds, self.exercise_secs
            ),
            format!("{}s rest between rounds", self.rest_secs),
        ]
    }
}

impl Default for SettingsCollector {
    fn default() -> Self {
        Self::new(DEFAULT_EXERCISE_SECS, DEFAULT_REST_SECS, DEFAULT_ROUNDS)
    }
}
