use log::{debug, info};

/// Fallbacks used when a navigation parameter is missing or malformed
pub const DEFAULT_EXERCISE_SECS: u32 = 30;
pub const DEFAULT_REST_SECS: u32 = 15;
pub const DEFAULT_ROUNDS: u32 = 3;

/// Immutable input of a session. Every field is at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    exercise_secs: u32,
    rest_secs: u32,
    rounds: u32,
}

impl SessionConfig {
    /// Returns `None` when any value is zero.
    pub fn new(exercise_secs: u32, rest_secs: u32, rounds: u32) -> Option<Self> {
        if exercise_secs == 0 || rest_secs == 0 || rounds == 0 {
            return None;
        }
        Some(Self {
            exercise_secs,
            rest_secs,
            rounds,
        })
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

    pub fn phase_secs(&self, phase: Phase) -> u32 {
        match phase {
            Phase::Exercise => self.exercise_secs,
            Phase::Rest => self.rest_secs,
        }
    }

    /// Whole session length in seconds, without the rest after the last round
    pub fn total_secs(&self) -> u64 {
        (u64::from(self.exercise_secs) + u64::from(self.rest_secs))
            .saturating_mul(u64::from(self.rounds))
            .saturating_sub(u64::from(self.rest_secs))
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            exercise_secs: DEFAULT_EXERCISE_SECS,
            rest_secs: DEFAULT_REST_SECS,
            rounds: DEFAULT_ROUNDS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum Phase {
    Exercise,
    Rest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Status {
    Idle,
    Running,
    Paused,
    Completed,
}

/// What a single tick did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The runner was not counting (idle, paused or completed)
    Ignored,
    /// One second elapsed inside the current phase
    Counting,
    /// A new phase began
    PhaseChanged { phase: Phase, round: u32 },
    /// The final exercise phase ended
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub current_round: u32,
    pub phase: Phase,
    pub time_left: u32,
    pub status: Status,
}

impl SessionState {
    fn fresh(config: &SessionConfig) -> Self {
        Self {
            current_round: 1,
            phase: Phase::Exercise,
            time_left: config.exercise_secs,
            status: Status::Idle,
        }
    }
}

/// Drives one interval session: exercise and rest phases over a number of rounds.
#[derive(Debug, Clone)]
pub struct SessionRunner {
    config: SessionConfig,
    state: SessionState,
    completion_pending: bool,
}

impl SessionRunner {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            state: SessionState::fresh(&config),
            config,
            completion_pending: false,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn status(&self) -> Status {
        self.state.status
    }

    pub fn current_round(&self) -> u32 {
        self.state.current_round
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn time_left(&self) -> u32 {
        self.state.time_left
    }

    /// True while running or paused
    pub fn is_running(&self) -> bool {
        matches!(self.state.status, Status::Running | Status::Paused)
    }

    pub fn is_paused(&self) -> bool {
        self.state.status == Status::Paused
    }

    pub fn is_completed(&self) -> bool {
        self.state.status == Status::Completed
    }

    /// Whether the countdown clock should currently be delivering ticks
    pub fn wants_ticks(&self) -> bool {
        self.state.status == Status::Running
    }

    pub fn start(&mut self) -> bool {
        if self.state.status != Status::Idle {
            debug!("start ignored while {}", self.state.status);
            return false;
        }
        self.state = SessionState::fresh(&self.config);
        self.state.status = Status::Running;
        info!(
            "session started: {}s exercise, {}s rest, {} rounds",
            self.config.exercise_secs, self.config.rest_secs, self.config.rounds
        );
        true
    }

    /// Stop is destructive: progress is discarded, not kept for later.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            debug!("stop ignored while {}", self.state.status);
            return false;
        }
        info!(
            "session stopped in round {} ({}, {}s left)",
            self.state.current_round, self.state.phase, self.state.time_left
        );
        self.state = SessionState::fresh(&self.config);
        true
    }

    /// Start when idle, stop when running or paused.
    pub fn toggle_start_stop(&mut self) -> bool {
        if self.is_running() {
            self.stop()
        } else {
            self.start()
        }
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.state.status = match self.state.status {
            Status::Running => Status::Paused,
            Status::Paused => Status::Running,
            other => {
                debug!("pause ignored while {other}");
                return false;
            }
        };
        debug!("session {}", self.state.status);
        true
    }

    /// Advance the clock by one second.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.status != Status::Running {
            return TickOutcome::Ignored;
        }

        self.state.time_left = self.state.time_left.saturating_sub(1);
        if self.state.time_left > 0 {
            return TickOutcome::Counting;
        }

        match self.state.phase {
            Phase::Exercise if self.state.current_round >= self.config.rounds => {
                self.state.status = Status::Completed;
                self.completion_pending = true;
                info!("session completed after {} rounds", self.config.rounds);
                TickOutcome::Completed
            }
            Phase::Exercise => {
                self.state.phase = Phase::Rest;
                self.state.time_left = self.config.rest_secs;
                TickOutcome::PhaseChanged {
                    phase: Phase::Rest,
                    round: self.state.current_round,
                }
            }
            Phase::Rest => {
                self.state.current_round += 1;
                self.state.phase = Phase::Exercise;
                self.state.time_left = self.config.exercise_secs;
                TickOutcome::PhaseChanged {
                    phase: Phase::Exercise,
                    round: self.state.current_round,
                }
            }
        }
    }

    /// One-shot completion signal. Returns true exactly once per completed session.
    pub fn take_completion(&mut self) -> bool {
        std::mem::take(&mut self.completion_pending)
    }

    /// Dismiss the completion prompt and return to idle.
    pub fn acknowledge(&mut self) -> bool {
        if self.state.status != Status::Completed {
            debug!("acknowledge ignored while {}", self.state.status);
            return false;
        }
        self.state = SessionState::fresh(&self.config);
        self.completion_pending = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn runner(exercise: u32, rest: u32, rounds: u32) -> SessionRunner {
        SessionRunner::new(SessionConfig::new(exercise, rest, rounds).unwrap())
    }

    fn tick_n(runner: &mut SessionRunner, n: u32) -> TickOutcome {
        let mut last = TickOutcome::Ignored;
        for _ in 0..n {
            last = runner.tick();
        }
        last
    }

    #[test]
    fn new_runner_is_idle_on_first_exercise() {
        let r = runner(30, 15, 3);
        assert_eq!(r.status(), Status::Idle);
        assert_eq!(r.current_round(), 1);
        assert_eq!(r.phase(), Phase::Exercise);
        assert_eq!(r.time_left(), 30);
        assert!(!r.is_running());
    }

    #[test]
    fn config_rejects_zero_values() {
        assert!(SessionConfig::new(0, 15, 3).is_none());
        assert!(SessionConfig::new(30, 0, 3).is_none());
        assert!(SessionConfig::new(30, 15, 0).is_none());
        assert!(SessionConfig::new(1, 1, 1).is_some());
    }

    #[test]
    fn total_secs_drops_trailing_rest() {
        assert_eq!(SessionConfig::new(30, 15, 3).unwrap().total_secs(), 120);
        assert_eq!(SessionConfig::new(20, 10, 1).unwrap().total_secs(), 20);
        assert_eq!(SessionConfig::default().total_secs(), 120);
    }

    #[test]
    fn idle_runner_ignores_ticks() {
        let mut r = runner(5, 5, 2);
        assert_eq!(r.tick(), TickOutcome::Ignored);
        assert_eq!(r.time_left(), 5);
    }

    #[test]
    fn exercise_phase_flows_into_rest() {
        let mut r = runner(30, 15, 3);
        r.start();
        assert_eq!(tick_n(&mut r, 29), TickOutcome::Counting);
        assert_eq!(r.time_left(), 1);
        assert_matches!(
            r.tick(),
            TickOutcome::PhaseChanged {
                phase: Phase::Rest,
                round: 1
            }
        );
        assert_eq!(r.phase(), Phase::Rest);
        assert_eq!(r.time_left(), 15);
        assert_eq!(r.current_round(), 1);
    }

    #[test]
    fn rest_phase_flows_into_next_round() {
        let mut r = runner(30, 15, 3);
        r.start();
        tick_n(&mut r, 30);
        assert_matches!(
            tick_n(&mut r, 15),
            TickOutcome::PhaseChanged {
                phase: Phase::Exercise,
                round: 2
            }
        );
        assert_eq!(r.time_left(), 30);
    }

    #[test]
    fn final_exercise_completes_without_trailing_rest() {
        let mut r = runner(20, 10, 1);
        r.start();
        assert_eq!(tick_n(&mut r, 20), TickOutcome::Completed);
        assert!(r.is_completed());
        assert!(!r.is_running());
        assert_eq!(r.phase(), Phase::Exercise);
        // terminal: further ticks change nothing
        assert_eq!(r.tick(), TickOutcome::Ignored);
    }

    #[test]
    fn full_run_alternates_phases() {
        for rounds in 1..=6 {
            let mut r = runner(2, 1, rounds);
            r.start();
            let mut phases = vec![Phase::Exercise];
            let mut ticks = 0u64;
            loop {
                ticks += 1;
                match r.tick() {
                    TickOutcome::PhaseChanged { phase, .. } => phases.push(phase),
                    TickOutcome::Completed => break,
                    TickOutcome::Counting => {}
                    TickOutcome::Ignored => panic!("runner stopped counting early"),
                }
            }
            let exercises = phases.iter().filter(|p| **p == Phase::Exercise).count();
            let rests = phases.iter().filter(|p| **p == Phase::Rest).count();
            assert_eq!(exercises as u32, rounds);
            assert_eq!(rests as u32, rounds - 1);
            assert_eq!(phases.first(), Some(&Phase::Exercise));
            assert_eq!(phases.last(), Some(&Phase::Exercise));
            assert!(phases.windows(2).all(|w| w[0] != w[1]));
            assert_eq!(ticks, r.config().total_secs());
        }
    }

    #[test]
    fn pause_freezes_the_clock() {
        let mut r = runner(10, 5, 2);
        r.start();
        tick_n(&mut r, 3);
        assert!(r.toggle_pause());
        assert!(r.is_paused());
        assert!(r.is_running());
        let before = r.state().clone();
        for _ in 0..50 {
            assert_eq!(r.tick(), TickOutcome::Ignored);
        }
        assert_eq!(r.time_left(), before.time_left);
        assert_eq!(r.phase(), before.phase);
        assert_eq!(r.current_round(), before.current_round);

        assert!(r.toggle_pause());
        assert_eq!(r.tick(), TickOutcome::Counting);
        assert_eq!(r.time_left(), 6);
    }

    #[test]
    fn pause_requires_a_running_session() {
        let mut r = runner(5, 5, 1);
        assert!(!r.toggle_pause());
        r.start();
        tick_n(&mut r, 5);
        assert!(r.is_completed());
        assert!(!r.toggle_pause());
    }

    #[test]
    fn completion_is_independent_of_pause_history() {
        let mut r = runner(3, 2, 2);
        r.start();
        for _ in 0..4 {
            r.toggle_pause();
            r.tick();
            r.toggle_pause();
            r.tick();
        }
        // 4 counting ticks so far, 4 to go
        assert_eq!(tick_n(&mut r, 4), TickOutcome::Completed);
        assert!(r.is_completed());
        assert!(!r.is_running());
    }

    #[test]
    fn stop_resets_from_running_and_paused() {
        let mut r = runner(10, 5, 3);
        r.start();
        tick_n(&mut r, 12);
        assert!(r.stop());
        assert_eq!(
            r.state(),
            &SessionState {
                current_round: 1,
                phase: Phase::Exercise,
                time_left: 10,
                status: Status::Idle,
            }
        );

        r.start();
        tick_n(&mut r, 16);
        r.toggle_pause();
        assert!(r.stop());
        assert_eq!(r.status(), Status::Idle);
        assert_eq!(r.current_round(), 1);
        assert_eq!(r.time_left(), 10);
    }

    #[test]
    fn stop_is_a_no_op_when_idle() {
        let mut r = runner(10, 5, 3);
        assert!(!r.stop());
        assert_eq!(r.status(), Status::Idle);
    }

    #[test]
    fn toggle_start_stop_mirrors_single_button() {
        let mut r = runner(10, 5, 3);
        assert!(r.toggle_start_stop());
        assert_eq!(r.status(), Status::Running);
        r.tick();
        assert!(r.toggle_start_stop());
        assert_eq!(r.status(), Status::Idle);
        assert_eq!(r.time_left(), 10);
    }

    #[test]
    fn start_only_from_idle() {
        let mut r = runner(5, 5, 1);
        assert!(r.start());
        r.tick();
        assert!(!r.start());
        assert_eq!(r.time_left(), 4);
        tick_n(&mut r, 4);
        assert!(!r.start());
        assert!(r.is_completed());
    }

    #[test]
    fn completion_signal_fires_once() {
        let mut r = runner(1, 1, 1);
        r.start();
        assert!(!r.take_completion());
        r.tick();
        assert!(r.take_completion());
        assert!(!r.take_completion());
    }

    #[test]
    fn acknowledge_returns_to_idle() {
        let mut r = runner(2, 1, 2);
        assert!(!r.acknowledge());
        r.start();
        tick_n(&mut r, 5);
        assert!(r.is_completed());
        assert!(r.acknowledge());
        assert_eq!(r.status(), Status::Idle);
        assert_eq!(r.current_round(), 1);
        assert_eq!(r.time_left(), 2);
        assert!(r.start());
    }

    #[test]
    fn acknowledge_ignored_outside_completion() {
        let mut r = runner(10, 5, 2);
        r.start();
        tick_n(&mut r, 3);
        let running = r.state().clone();
        assert!(!r.acknowledge());
        assert_eq!(r.state(), &running);

        r.toggle_pause();
        let paused = r.state().clone();
        assert!(!r.acknowledge());
        assert_eq!(r.state(), &paused);
    }

    #[test]
    fn time_left_never_exceeds_longest_phase() {
        let mut r = runner(3, 7, 3);
        r.start();
        while !r.is_completed() {
            assert!(r.time_left() <= 7);
            assert!(r.time_left() >= 1);
            r.tick();
        }
    }
}
