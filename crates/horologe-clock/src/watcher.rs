use crate::time::TimeSample;

/// Edge detector on the integer seconds value.
///
/// Reports a boundary whenever the observed seconds differ from the previous
/// observation, including the 59 → 0 rollover. Several seconds skipped between
/// observations still count as a single boundary; the display drifts by the
/// missed steps until it is re-initialized.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct SecondWatcher {
    last: Option<u32>,
}

impl SecondWatcher {
    /// A watcher with no reference yet; its first observation only primes it.
    pub fn new() -> Self {
        Self::default()
    }

    /// A watcher whose reference is `sample`.
    pub fn primed(sample: TimeSample) -> Self {
        Self { last: Some(sample.seconds) }
    }

    /// Returns `true` exactly once per change of the seconds value.
    pub fn observe(&mut self, sample: TimeSample) -> bool {
        match self.last.replace(sample.seconds) {
            Some(prev) => prev != sample.seconds,
            None => false,
        }
    }

    pub fn last_seconds(&self) -> Option<u32> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(seconds: u32) -> TimeSample {
        TimeSample::new(10, 20, seconds)
    }

    #[test]
    fn first_observation_primes() {
        let mut w = SecondWatcher::new();
        assert!(!w.observe(at(5)));
        assert_eq!(w.last_seconds(), Some(5));
    }

    #[test]
    fn repeated_sample_is_not_a_boundary() {
        let mut w = SecondWatcher::primed(at(5));
        assert!(!w.observe(at(5)));
        assert!(!w.observe(at(5)));
    }

    #[test]
    fn each_change_fires_once() {
        let mut w = SecondWatcher::primed(at(5));
        assert!(w.observe(at(6)));
        assert!(!w.observe(at(6)));
        assert!(w.observe(at(7)));
    }

    #[test]
    fn rollover_is_one_boundary() {
        let mut w = SecondWatcher::primed(at(59));
        assert!(w.observe(TimeSample::new(10, 21, 0)));
        assert!(!w.observe(TimeSample::new(10, 21, 0)));
    }

    #[test]
    fn skipped_seconds_collapse_to_one() {
        let mut w = SecondWatcher::primed(at(5));
        assert!(w.observe(at(9)));
    }
}
