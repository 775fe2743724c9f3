use std::f32::consts::{PI, TAU};

use crate::time::TimeSample;

/// Second hand travel per second.
pub const SECOND_STEP: f32 = PI / 30.0;
/// Minute hand travel per second (1/60 of the second hand).
pub const MINUTE_STEP: f32 = PI / 1800.0;
/// Hour hand travel per second (1/12 of the minute hand).
pub const HOUR_STEP: f32 = PI / 21600.0;

// Same steps at full precision, seconds/minutes/hours.
const STEPS_F64: [f64; 3] = [
    std::f64::consts::PI / 30.0,
    std::f64::consts::PI / 1800.0,
    std::f64::consts::PI / 21600.0,
];

/// Which face of the dial a hand belongs to.
///
/// The front face is viewed from +Z and turns clockwise there, which is a
/// negative rotation about +Z. The back face turns the other way so it
/// reads clockwise from -Z.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    Front,
    Back,
}

impl Direction {
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Front => -1.0,
            Direction::Back => 1.0,
        }
    }
}

/// Rotation of each hand about the dial axis, in radians from twelve o'clock.
///
/// [`from_time`](Self::from_time) and [`advance_one_second`](Self::advance_one_second)
/// do not wrap. A long-running display should use
/// [`advance_seconds`](Self::advance_seconds), which stays within one turn.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct HandAngles {
    pub seconds: f32,
    pub minutes: f32,
    pub hours: f32,
}

impl HandAngles {
    pub const ZERO: HandAngles = HandAngles { seconds: 0.0, minutes: 0.0, hours: 0.0 };

    /// Absolute hand angles for `sample` on the given face.
    ///
    /// `hours` may be 24-hour; the hour hand lands on the same place modulo 2π.
    pub fn from_time(sample: TimeSample, direction: Direction) -> Self {
        let s = direction.sign();
        let (h, m, sec) = (sample.hours as f32, sample.minutes as f32, sample.seconds as f32);

        Self {
            seconds: s * sec * SECOND_STEP,
            minutes: s * (m * SECOND_STEP + sec * MINUTE_STEP),
            hours: s * (5.0 * (h * SECOND_STEP + m * MINUTE_STEP) + sec * HOUR_STEP),
        }
    }

    /// Per-second increment on the given face.
    pub fn step(direction: Direction) -> Self {
        let s = direction.sign();
        Self {
            seconds: s * SECOND_STEP,
            minutes: s * MINUTE_STEP,
            hours: s * HOUR_STEP,
        }
    }

    /// Angles one second later.
    #[must_use]
    pub fn advance_one_second(self, direction: Direction) -> Self {
        let d = Self::step(direction);
        Self {
            seconds: self.seconds + d.seconds,
            minutes: self.minutes + d.minutes,
            hours: self.hours + d.hours,
        }
    }

    /// Angles `n` seconds later, each reduced modulo 2π.
    ///
    /// The travel is summed in `f64`, so the result after a day of seconds
    /// is as accurate as after one.
    #[must_use]
    pub fn advance_seconds(self, n: u64, direction: Direction) -> Self {
        let travel = f64::from(direction.sign()) * n as f64;
        let go = |start: f32, step: f64| {
            (f64::from(start) + travel * step).rem_euclid(std::f64::consts::TAU) as f32
        };
        Self {
            seconds: go(self.seconds, STEPS_F64[0]),
            minutes: go(self.minutes, STEPS_F64[1]),
            hours: go(self.hours, STEPS_F64[2]),
        }
    }

    /// Each angle reduced into `[0, 2π)`.
    #[must_use]
    pub fn wrapped(self) -> Self {
        Self {
            seconds: self.seconds.rem_euclid(TAU),
            minutes: self.minutes.rem_euclid(TAU),
            hours: self.hours.rem_euclid(TAU),
        }
    }

    /// `[seconds, minutes, hours]`.
    pub fn to_array(self) -> [f32; 3] {
        [self.seconds, self.minutes, self.hours]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    /// Equal modulo a full turn.
    fn same_place(a: f32, b: f32) -> bool {
        let d = (a - b).rem_euclid(TAU);
        d < 1e-4 || TAU - d < 1e-4
    }

    // ── absolute angles ───────────────────────────────────────────────────

    #[test]
    fn midnight_is_all_zero() {
        let a = HandAngles::from_time(TimeSample::MIDNIGHT, Direction::Front);
        assert_eq!(a.to_array().map(f32::abs), [0.0; 3]);
    }

    #[test]
    fn quarter_past_three_and_a_half() {
        let a = HandAngles::from_time(TimeSample::new(3, 15, 30), Direction::Front);
        assert!(approx_eq(a.seconds, -PI));
        assert!(approx_eq(a.minutes, -(FRAC_PI_2 + PI / 60.0)));
        // Three o'clock plus a quarter hour of travel.
        assert!(approx_eq(a.hours, -(FRAC_PI_2 + PI / 24.0 + 30.0 * HOUR_STEP)));
    }

    #[test]
    fn twenty_four_hour_input_wraps_to_twelve() {
        let pm = HandAngles::from_time(TimeSample::new(15, 10, 0), Direction::Front);
        let am = HandAngles::from_time(TimeSample::new(3, 10, 0), Direction::Front);
        assert!(same_place(pm.hours, am.hours));
    }

    #[test]
    fn faces_mirror_each_other() {
        let t = TimeSample::new(17, 42, 9);
        let front = HandAngles::from_time(t, Direction::Front);
        let back = HandAngles::from_time(t, Direction::Back);
        assert_eq!(front.seconds, -back.seconds);
        assert_eq!(front.minutes, -back.minutes);
        assert_eq!(front.hours, -back.hours);
    }

    // ── gearing ───────────────────────────────────────────────────────────

    #[test]
    fn hour_to_minute_to_second_ratios() {
        assert!(approx_eq(MINUTE_STEP * 60.0, SECOND_STEP));
        assert!(approx_eq(HOUR_STEP * 12.0, MINUTE_STEP));
    }

    #[test]
    fn elapsed_seconds_drive_proportional_travel() {
        let start = TimeSample::new(8, 0, 0);
        let a0 = HandAngles::from_time(start, Direction::Front);
        let a1 = HandAngles::from_time(start.plus_seconds(59), Direction::Front);

        let minute_travel = a1.minutes - a0.minutes;
        let hour_travel = a1.hours - a0.hours;
        assert!(approx_eq(minute_travel, -59.0 * MINUTE_STEP));
        assert!(approx_eq(hour_travel * 12.0, minute_travel));
    }

    // ── incremental ───────────────────────────────────────────────────────

    #[test]
    fn one_step_adds_signed_deltas() {
        let a = HandAngles::ZERO.advance_one_second(Direction::Back);
        assert_eq!(a, HandAngles::step(Direction::Back));
        assert!(a.seconds > 0.0);

        let f = HandAngles::ZERO.advance_one_second(Direction::Front);
        assert!(f.seconds < 0.0);
    }

    #[test]
    fn sixty_steps_match_absolute_minute_later() {
        let start = TimeSample::new(11, 59, 45);
        for dir in [Direction::Front, Direction::Back] {
            let mut a = HandAngles::from_time(start, dir);
            for _ in 0..60 {
                a = a.advance_one_second(dir);
            }
            let expected = HandAngles::from_time(start.plus_seconds(60), dir);
            assert!(same_place(a.seconds, expected.seconds));
            assert!(same_place(a.minutes, expected.minutes));
            assert!(same_place(a.hours, expected.hours));
        }
    }

    #[test]
    fn a_day_of_seconds_matches_the_clock() {
        let start = TimeSample::new(4, 20, 13);
        for dir in [Direction::Front, Direction::Back] {
            let base = HandAngles::from_time(start, dir).wrapped();
            for days in [1_u64, 7, 30] {
                let n = days * 86_400 + 17;
                let a = base.advance_seconds(n, dir);
                let expected = HandAngles::from_time(start.plus_seconds(n as i64), dir);
                assert!(same_place(a.seconds, expected.seconds));
                assert!(same_place(a.minutes, expected.minutes));
                assert!(same_place(a.hours, expected.hours));
                assert!(a.seconds.abs() <= TAU);
            }
        }
    }

    #[test]
    fn advance_seconds_agrees_with_single_steps() {
        let start = HandAngles::from_time(TimeSample::new(1, 2, 3), Direction::Front);
        let mut stepped = start;
        for _ in 0..45 {
            stepped = stepped.advance_one_second(Direction::Front);
        }
        let jumped = start.advance_seconds(45, Direction::Front);
        for (a, b) in stepped.to_array().into_iter().zip(jumped.to_array()) {
            assert!(same_place(a, b));
        }
    }

    #[test]
    fn wrapped_stays_in_range() {
        let a = HandAngles { seconds: -0.5, minutes: 7.0, hours: TAU }.wrapped();
        for v in a.to_array() {
            assert!((0.0..TAU).contains(&v));
        }
    }
}
