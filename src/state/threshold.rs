//! Minimum-spectra threshold shared by the log slider and the linear input

use crate::constants::threshold::*;

/// The threshold as both controls display it.
///
/// Always satisfies `round(10^log) == linear`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdPair {
    pub log: f64,
    pub linear: u64,
}

impl ThresholdPair {
    fn from_log(log: f64) -> Self {
        let log = log.clamp(LOG_MIN, LOG_MAX);
        Self {
            log,
            linear: 10f64.powf(log).round() as u64,
        }
    }

    fn from_linear(linear: u64) -> Self {
        let linear = linear.clamp(LINEAR_MIN, LINEAR_MAX);
        Self {
            log: (linear as f64).log10(),
            linear,
        }
    }
}

impl Default for ThresholdPair {
    fn default() -> Self {
        Self::from_log(DEFAULT_LOG)
    }
}

/// A user edit of one of the two threshold controls, tagged with its source
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThresholdEvent {
    /// Log slider moved
    LogEdited(f64),
    /// Linear input edited; `None` when the field holds no number
    LinearEdited(Option<i64>),
}

/// Reconciles the two threshold controls.
///
/// Each event is applied in a single step and yields a consistent pair. The
/// widget that did not originate the event is only written to, never read
/// back, so no follow-up event is produced.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThresholdSync {
    pair: ThresholdPair,
}

impl ThresholdSync {
    pub fn pair(&self) -> ThresholdPair {
        self.pair
    }

    /// Current minimum number of spectra
    pub fn min_nspec(&self) -> u64 {
        self.pair.linear
    }

    pub fn apply(&mut self, event: ThresholdEvent) -> ThresholdPair {
        match event {
            ThresholdEvent::LogEdited(log) => self.on_log_changed(log),
            ThresholdEvent::LinearEdited(linear) => self.on_linear_changed(linear),
        }
    }

    pub fn on_log_changed(&mut self, log: f64) -> ThresholdPair {
        if log.is_finite() {
            self.pair = ThresholdPair::from_log(log);
        }
        self.pair
    }

    /// Absent, zero and negative input leave the pair untouched
    pub fn on_linear_changed(&mut self, linear: Option<i64>) -> ThresholdPair {
        if let Some(value) = linear.filter(|v| *v > 0) {
            self.pair = ThresholdPair::from_linear(value as u64);
        }
        self.pair
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn consistent(pair: ThresholdPair) -> bool {
        10f64.powf(pair.log).round() as u64 == pair.linear
    }

    #[test]
    fn test_default_is_ten_thousand() {
        let sync = ThresholdSync::default();
        assert_eq!(sync.pair().linear, 10_000);
        assert_eq!(sync.pair().log, 4.0);
    }

    #[test]
    fn test_log_edit_clamps() {
        let mut sync = ThresholdSync::default();
        let pair = sync.on_log_changed(9.5);
        assert_eq!(pair.log, 8.0);
        assert_eq!(pair.linear, 100_000_000);

        let pair = sync.on_log_changed(1.0);
        assert_eq!(pair.log, 3.0);
        assert_eq!(pair.linear, 1_000);

        let pair = sync.on_log_changed(5.5);
        assert_eq!(pair.linear, 316_228);
        assert!(consistent(pair));
    }

    #[test]
    fn test_non_finite_log_ignored() {
        let mut sync = ThresholdSync::default();
        let before = sync.pair();
        assert_eq!(sync.on_log_changed(f64::NAN), before);
    }

    #[test]
    fn test_linear_edit_clamps() {
        let mut sync = ThresholdSync::default();
        let pair = sync.on_linear_changed(Some(50));
        assert_eq!(pair.linear, 1_000);
        assert_eq!(pair.log, 3.0);

        let pair = sync.on_linear_changed(Some(5_000_000_000));
        assert_eq!(pair.linear, 100_000_000);
        assert_eq!(pair.log, 8.0);

        let pair = sync.on_linear_changed(Some(123_456));
        assert_eq!(pair.linear, 123_456);
        assert!(consistent(pair));
    }

    #[test]
    fn test_invalid_linear_is_noop() {
        let mut sync = ThresholdSync::default();
        sync.on_log_changed(6.0);
        let before = sync.pair();

        assert_eq!(sync.on_linear_changed(None), before);
        assert_eq!(sync.on_linear_changed(Some(0)), before);
        assert_eq!(sync.on_linear_changed(Some(-42)), before);
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        let mut x = 3.0;
        while x <= 8.0 {
            let mut sync = ThresholdSync::default();
            let first = sync.apply(ThresholdEvent::LogEdited(x));
            let back = sync.apply(ThresholdEvent::LinearEdited(Some(first.linear as i64)));
            let again = sync.apply(ThresholdEvent::LogEdited(back.log));

            // Rounding to an integer moves log10 by at most 0.5/linear/ln(10)
            assert!((again.log - first.log).abs() < 1e-3, "x = {}", x);
            assert_eq!(again.linear, first.linear);
            x += 0.05;
        }
    }

    #[test]
    fn test_every_transition_is_consistent() {
        let mut sync = ThresholdSync::default();
        let events = [
            ThresholdEvent::LogEdited(3.3),
            ThresholdEvent::LinearEdited(Some(77_777)),
            ThresholdEvent::LinearEdited(None),
            ThresholdEvent::LogEdited(7.99),
            ThresholdEvent::LinearEdited(Some(-1)),
            ThresholdEvent::LinearEdited(Some(999_999_999)),
        ];
        for event in events {
            assert!(consistent(sync.apply(event)), "{:?}", event);
        }
    }
}
