use log::debug;

use crate::metronome::{is_current, CountdownClock, Metronome};
use crate::runtime::Ticker;

/// Free-running count-up timer.
///
/// Stop resets the count, pause keeps it. Like the interval timer, the
/// metronome is held only while counting.
#[derive(Debug, Default)]
pub struct Stopwatch {
    elapsed: u64,
    active: bool,
    paused: bool,
    metronome: Option<Metronome>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_ticking(&self) -> bool {
        self.metronome.is_some()
    }

    pub fn start_stop<T: Ticker>(&mut self, clock: &mut CountdownClock<T>) {
        if self.active {
            self.active = false;
            self.paused = false;
            self.elapsed = 0;
        } else {
            self.active = true;
            self.paused = false;
        }
        self.sync(clock);
    }

    pub fn toggle_pause<T: Ticker>(&mut self, clock: &mut CountdownClock<T>) {
        if !self.active {
            debug!("stopwatch pause ignored while stopped");
            return;
        }
        self.paused = !self.paused;
        self.sync(clock);
    }

    pub fn on_second(&mut self, generation: u64) -> bool {
        if !is_current(&self.metronome, generation) {
            return false;
        }
        self.elapsed += 1;
        true
    }

    fn sync<T: Ticker>(&mut self, clock: &mut CountdownClock<T>) {
        let wants = self.active && !self.paused;
        if wants && self.metronome.is_none() {
            self.metronome = Some(clock.acquire());
        } else if !wants {
            self.metronome = None;
        }
    }
}
