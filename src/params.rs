//! Screen-to-screen navigation parameters.
//!
//! Values travel as plain strings with no schema. The receiving side is
//! responsible for turning them back into a usable [`SessionConfig`].

use std::collections::BTreeMap;

use log::warn;

use crate::session::{
    SessionConfig, DEFAULT_EXERCISE_SECS, DEFAULT_REST_SECS, DEFAULT_ROUNDS,
};

pub const EXERCISE_TIME: &str = "exerciseTime";
pub const REST_TIME: &str = "restTime";
pub const ROUNDS: &str = "rounds";
pub const TOTAL_DURATION: &str = "totalDuration";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.0.insert(key.to_string(), value.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RouteParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Parse a strictly positive integer, tolerating surrounding whitespace.
fn positive(raw: Option<&str>) -> Option<u32> {
    raw?.trim().parse::<u32>().ok().filter(|v| *v >= 1)
}

fn param_or(params: &RouteParams, key: &str, fallback: u32) -> u32 {
    positive(params.get(key)).unwrap_or_else(|| {
        if let Some(raw) = params.get(key) {
            warn!("ignoring invalid {key}={raw:?}, using {fallback}");
        }
        fallback
    })
}

impl SessionConfig {
    /// Build a config from navigation parameters.
    ///
    /// Absent, non-numeric, fractional or non-positive values fall back to
    /// 30s exercise, 15s rest and 3 rounds, each field independently.
    pub fn from_params(params: &RouteParams) -> Self {
        let exercise = param_or(params, EXERCISE_TIME, DEFAULT_EXERCISE_SECS);
        let rest = param_or(params, REST_TIME, DEFAULT_REST_SECS);
        let rounds = param_or(params, ROUNDS, DEFAULT_ROUNDS);
        // all three are >= 1 at this point
        SessionConfig::new(exercise, rest, rounds).unwrap_or_default()
    }

    pub fn to_params(&self) -> RouteParams {
        RouteParams::new()
            .with(EXERCISE_TIME, self.exercise_secs())
            .with(REST_TIME, self.rest_secs())
            .with(ROUNDS, self.rounds())
            .with(TOTAL_DURATION, self.total_secs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_use_fallbacks() {
        let cfg = SessionConfig::from_params(&RouteParams::new());
        assert_eq!(cfg, SessionConfig::new(30, 15, 3).unwrap());
    }

    #[test]
    fn valid_params_pass_through() {
        let params: RouteParams = [(EXERCISE_TIME, "45"), (REST_TIME, "20"), (ROUNDS, "8")]
            .into_iter()
            .collect();
        let cfg = SessionConfig::from_params(&params);
        assert_eq!(cfg.exercise_secs(), 45);
        assert_eq!(cfg.rest_secs(), 20);
        assert_eq!(cfg.rounds(), 8);
    }

    #[test]
    fn malformed_values_fall_back_per_field() {
        let params: RouteParams = [
            (EXERCISE_TIME, "abc"),
            (REST_TIME, "0"),
            (ROUNDS, "2.5"),
        ]
        .into_iter()
        .collect();
        assert_eq!(SessionConfig::from_params(&params), SessionConfig::default());

        let params: RouteParams = [(EXERCISE_TIME, "-5"), (REST_TIME, " 12 "), (ROUNDS, "")]
            .into_iter()
            .collect();
        let cfg = SessionConfig::from_params(&params);
        assert_eq!(cfg.exercise_secs(), 30);
        assert_eq!(cfg.rest_secs(), 12);
        assert_eq!(cfg.rounds(), 3);
    }

    #[test]
    fn runner_tolerates_values_below_ui_floors() {
        let params: RouteParams = [(EXERCISE_TIME, "1"), (REST_TIME, "1"), (ROUNDS, "1")]
            .into_iter()
            .collect();
        assert_eq!(
            SessionConfig::from_params(&params),
            SessionConfig::new(1, 1, 1).unwrap()
        );
    }

    #[test]
    fn to_params_carries_total_duration() {
        let params = SessionConfig::new(30, 15, 3).unwrap().to_params();
        assert_eq!(params.get(TOTAL_DURATION), Some("120"));
        assert_eq!(
            SessionConfig::from_params(&params),
            SessionConfig::new(30, 15, 3).unwrap()
        );
    }
}
