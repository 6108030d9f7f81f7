use std::iter;

use itertools::Itertools;

use crate::session::{Phase, SessionConfig};
use crate::util::{format_clock, format_total};

/// Phases shown by [`SessionPlan::compact`] before it elides the rest
pub const COMPACT_PHASES: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedPhase {
    pub round: u32,
    pub phase: Phase,
    pub secs: u32,
    /// Offset from session start, in seconds
    pub starts_at: u64,
}

/// The schedule a session will follow.
///
/// Phases are computed on demand from the config, so a plan costs the same
/// for any number of rounds.
#[derive(Debug, Clone, Copy)]
pub struct SessionPlan {
    config: SessionConfig,
}

impl SessionPlan {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Exercise and rest phases in order, without a rest after the last round
    pub fn phases(&self) -> impl Iterator<Item = PlannedPhase> + '_ {
        let rounds = self.config.rounds();
        (1..=rounds).flat_map(move |round| {
            let rest = (round < rounds).then_some(Phase::Rest);
            iter::once(Phase::Exercise)
                .chain(rest)
                .map(move |phase| self.planned(round, phase))
        })
    }

    fn planned(&self, round: u32, phase: Phase) -> PlannedPhase {
        let exercise = u64::from(self.config.exercise_secs());
        let cycle = exercise + u64::from(self.config.rest_secs());
        let round_start = u64::from(round - 1).saturating_mul(cycle);
        let starts_at = match phase {
            Phase::Exercise => round_start,
            Phase::Rest => round_start.saturating_add(exercise),
        };
        PlannedPhase {
            round,
            phase,
            secs: self.config.phase_secs(phase),
            starts_at,
        }
    }

    pub fn total_secs(&self) -> u64 {
        self.config.total_secs()
    }

    /// One line per phase and a closing total, for printing outside the TUI
    pub fn render_lines(&self) -> impl Iterator<Item = String> + '_ {
        let rounds = self.config.rounds();
        let width = rounds.to_string().len();
        self.phases()
            .map(move |p| {
                format!(
                    "{}  round {:>width$}/{}  {:<8} {:>4}s",
                    format_clock(p.starts_at),
                    p.round,
                    rounds,
                    p.phase.to_string(),
                    p.secs,
                )
            })
            .chain(iter::once(format!(
                "total {}",
                format_total(self.total_secs())
            )))
    }

    /// Compact one-liner such as `E30 R15 E30 R15 E30`, elided after
    /// [`COMPACT_PHASES`] phases
    pub fn compact(&self) -> String {
        let mut phases = self.phases();
        let head = phases
            .by_ref()
            .take(COMPACT_PHASES)
            .map(|p| match p.phase {
                Phase::Exercise => format!("E{}", p.secs),
                Phase::Rest => format!("R{}", p.secs),
            })
            .join(" ");
        if phases.next().is_some() {
            format!("{head} …")
        } else {
            head
        }
    }
}
