//! Scoped countdown tick source.
//!
//! A [`Metronome`] delivers [`AppEvent::Second`] into the main event queue
//! for as long as it is alive. Dropping it stops and joins the helper
//! thread before returning, so no tick can be produced for an owner that
//! has gone away.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::runtime::{AppEvent, Ticker};

#[derive(Debug)]
pub struct Metronome {
    generation: u64,
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Metronome {
    pub fn start(events: Sender<AppEvent>, interval: Duration, generation: u64) -> Self {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            let mut next = Instant::now() + interval;
            loop {
                let wait = next.saturating_duration_since(Instant::now());
                match stop_rx.recv_timeout(wait) {
                    Err(RecvTimeoutError::Timeout) => {
                        if events.send(AppEvent::Second(generation)).is_err() {
                            break;
                        }
                        next = next_deadline(next, interval, Instant::now());
                    }
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        debug!("metronome {generation} started ({interval:?})");
        Self {
            generation,
            stop: Some(stop_tx),
            handle: Some(handle),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for Metronome {
    fn drop(&mut self) {
        // disconnecting the stop channel wakes the thread immediately
        self.stop.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("metronome {} thread panicked", self.generation);
            }
        }
        debug!("metronome {} released", self.generation);
    }
}

/// Deadline after `previous`, scheduled from the previous deadline so the
/// cadence does not drift. Deadlines already missed (the host stalled) are
/// dropped rather than replayed back to back.
fn next_deadline(previous: Instant, interval: Duration, now: Instant) -> Instant {
    let next = previous + interval;
    if next < now {
        now + interval
    } else {
        next
    }
}

/// Hands out metronomes with increasing generation numbers.
///
/// Seconds already queued by a released metronome carry a stale generation
/// and are recognised by [`is_current`].
#[derive(Debug)]
pub struct CountdownClock<T: Ticker> {
    events: Sender<AppEvent>,
    ticker: T,
    issued: u64,
}

impl<T: Ticker> CountdownClock<T> {
    pub fn new(events: Sender<AppEvent>, ticker: T) -> Self {
        Self {
            events,
            ticker,
            issued: 0,
        }
    }

    pub fn acquire(&mut self) -> Metronome {
        self.issued += 1;
        Metronome::start(self.events.clone(), self.ticker.interval(), self.issued)
    }
}

/// Whether `second` came from the metronome currently held in `slot`
pub fn is_current(slot: &Option<Metronome>, second: u64) -> bool {
    slot.as_ref().is_some_and(|m| m.generation() == second)
}
