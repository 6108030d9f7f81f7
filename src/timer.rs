use std::time::Instant;

use chrono::{DateTime, Local};
use log::{debug, info};

use crate::celebration::Confetti;
use crate::metronome::{is_current, CountdownClock, Metronome};
use crate::params::RouteParams;
use crate::progress::{phase_progress, PhaseClock};
use crate::runtime::Ticker;
use crate::session::{SessionConfig, SessionRunner, TickOutcome};

/// State behind the interval-timer screen.
///
/// Owns the session runner and, while the session is counting, the
/// metronome feeding it. Dropping the screen releases the metronome.
#[derive(Debug)]
pub struct TimerScreen {
    runner: SessionRunner,
    metronome: Option<Metronome>,
    clock: PhaseClock,
    pub confetti: Confetti,
    completed_at: Option<DateTime<Local>>,
}

impl TimerScreen {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            runner: SessionRunner::new(config),
            metronome: None,
            clock: PhaseClock::default(),
            confetti: Confetti::default(),
            completed_at: None,
        }
    }

    pub fn from_params(params: &RouteParams) -> Self {
        Self::new(SessionConfig::from_params(params))
    }

    pub fn runner(&self) -> &SessionRunner {
        &self.runner
    }

    pub fn is_ticking(&self) -> bool {
        self.metronome.is_some()
    }

    pub fn completed_at(&self) -> Option<DateTime<Local>> {
        self.completed_at
    }

    pub fn show_completion(&self) -> bool {
        self.runner.is_completed()
    }

    pub fn progress(&self, now: Instant) -> f64 {
        phase_progress(&self.runner, self.clock.since_second(now))
    }

    pub fn is_pulsing(&self, now: Instant) -> bool {
        self.clock.is_pulsing(now)
    }

    pub fn start_stop<T: Ticker>(&mut self, clock: &mut CountdownClock<T>) {
        self.runner.toggle_start_stop();
        self.sync(clock);
    }

    pub fn toggle_pause<T: Ticker>(&mut self, clock: &mut CountdownClock<T>) {
        self.runner.toggle_pause();
        self.sync(clock);
    }

    /// Returns false when the completion prompt was not showing.
    pub fn acknowledge<T: Ticker>(&mut self, clock: &mut CountdownClock<T>) -> bool {
        let acknowledged = self.runner.acknowledge();
        if acknowledged {
            self.completed_at = None;
            self.confetti.stop();
        }
        self.sync(clock);
        acknowledged
    }

    /// Feed one countdown second. Seconds from a released metronome are dropped.
    pub fn on_second<T: Ticker>(
        &mut self,
        generation: u64,
        clock: &mut CountdownClock<T>,
        viewport: (u16, u16),
    ) -> TickOutcome {
        if !is_current(&self.metronome, generation) {
            debug!("dropping stale second from metronome {generation}");
            return TickOutcome::Ignored;
        }

        let now = Instant::now();
        let outcome = self.runner.tick();
        self.clock.mark_second(now);
        match outcome {
            TickOutcome::PhaseChanged { phase, round } => {
                info!("round {round}: {phase}");
                self.clock.pulse(now);
            }
            TickOutcome::Completed => self.clock.pulse(now),
            TickOutcome::Counting | TickOutcome::Ignored => {}
        }

        if self.runner.take_completion() {
            self.completed_at = Some(Local::now());
            self.confetti.start(viewport.0, viewport.1);
        }

        self.sync(clock);
        outcome
    }

    pub fn on_frame(&mut self) {
        self.confetti.update();
    }

    /// Hold a metronome exactly while the runner wants ticks.
    fn sync<T: Ticker>(&mut self, clock: &mut CountdownClock<T>) {
        match (self.runner.wants_ticks(), self.metronome.is_some()) {
            (true, false) => {
                self.metronome = Some(clock.acquire());
                self.clock.mark_second(Instant::now());
            }
            (false, true) => {
                self.metronome = None;
                self.clock.clear();
            }
            _ => {}
        }
    }
}
