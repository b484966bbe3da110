use bytemuck::{Pod, Zeroable};
use std::convert::TryFrom;
use std::ops::{Add, Sub};
use std::time::Duration;

/// A point on the monotonic system clock (`CLOCK_MONOTONIC` on Android).
///
/// Time points are only comparable with others taken in the same session.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Pod, Zeroable)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct ClockTimePoint {
    pub monotonic_system_time_nanos: i64,
}

impl ClockTimePoint {
    pub fn from_nanos(nanos: i64) -> Self {
        Self {
            monotonic_system_time_nanos: nanos,
        }
    }

    pub fn nanos(&self) -> i64 {
        self.monotonic_system_time_nanos
    }

    /// Time elapsed since `earlier`, or `None` if `earlier` is later than `self`.
    pub fn duration_since(&self, earlier: ClockTimePoint) -> Option<Duration> {
        if *self < earlier {
            return None;
        }
        // Non-negative spans always fit in a u64.
        let delta = self.monotonic_system_time_nanos.wrapping_sub(earlier.monotonic_system_time_nanos);
        Some(Duration::from_nanos(delta as u64))
    }

    /// `self + d`, or `None` if the result does not fit in an `i64`.
    pub fn checked_add(&self, d: Duration) -> Option<ClockTimePoint> {
        let nanos = self.monotonic_system_time_nanos.checked_add(duration_nanos(d)?)?;
        Some(ClockTimePoint::from_nanos(nanos))
    }

    /// `self - d`, or `None` if the result does not fit in an `i64`.
    pub fn checked_sub(&self, d: Duration) -> Option<ClockTimePoint> {
        let nanos = self.monotonic_system_time_nanos.checked_sub(duration_nanos(d)?)?;
        Some(ClockTimePoint::from_nanos(nanos))
    }
}

fn duration_nanos(d: Duration) -> Option<i64> {
    i64::try_from(d.as_secs())
        .ok()?
        .checked_mul(1_000_000_000)?
        .checked_add(i64::from(d.subsec_nanos()))
}

/// Saturates at the latest representable time point.
impl Add<Duration> for ClockTimePoint {
    type Output = ClockTimePoint;

    fn add(self, rhs: Duration) -> ClockTimePoint {
        self.checked_add(rhs).unwrap_or(ClockTimePoint::from_nanos(i64::MAX))
    }
}

/// Saturates at the earliest representable time point.
impl Sub<Duration> for ClockTimePoint {
    type Output = ClockTimePoint;

    fn sub(self, rhs: Duration) -> ClockTimePoint {
        self.checked_sub(rhs).unwrap_or(ClockTimePoint::from_nanos(i64::MIN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prediction_offset() {
        let now = ClockTimePoint::from_nanos(1_000);
        let predicted = now + Duration::from_millis(50);
        assert_eq!(predicted.nanos(), 50_001_000);
        assert!(predicted > now);
        assert_eq!(predicted - Duration::from_millis(50), now);
    }

    #[test]
    fn elapsed_time() {
        let a = ClockTimePoint::from_nanos(5_000);
        let b = ClockTimePoint::from_nanos(7_500);
        assert_eq!(b.duration_since(a), Some(Duration::from_nanos(2_500)));
        assert_eq!(a.duration_since(b), None);
    }

    #[test]
    fn arithmetic_at_the_ends_of_the_clock() {
        let late = ClockTimePoint::from_nanos(i64::MAX - 10);
        assert_eq!(late.checked_add(Duration::from_nanos(100)), None);
        assert_eq!(late.checked_add(Duration::from_nanos(10)),
                   Some(ClockTimePoint::from_nanos(i64::MAX)));
        assert_eq!((late + Duration::from_nanos(100)).nanos(), i64::MAX);

        let early = ClockTimePoint::from_nanos(i64::MIN + 10);
        assert_eq!(early.checked_sub(Duration::from_nanos(100)), None);
        assert_eq!((early - Duration::from_nanos(100)).nanos(), i64::MIN);

        let now = ClockTimePoint::from_nanos(0);
        let huge = Duration::from_secs(u64::MAX / 2);
        assert_eq!(now.checked_add(huge), None);
        assert_eq!(now.checked_sub(Duration::from_secs(u64::MAX)), None);
        assert_eq!((now + huge).nanos(), i64::MAX);
        assert_eq!((now - huge).nanos(), i64::MIN);
    }

    #[test]
    fn full_i64_span_is_measurable() {
        let first = ClockTimePoint::from_nanos(i64::MIN);
        let last = ClockTimePoint::from_nanos(i64::MAX);
        assert_eq!(last.duration_since(first), Some(Duration::from_nanos(u64::MAX)));
        assert_eq!(first.duration_since(last), None);
        assert_eq!(last.duration_since(ClockTimePoint::from_nanos(0)),
                   Some(Duration::from_nanos(i64::MAX as u64)));
    }

    #[test]
    fn layout() {
        assert_eq!(std::mem::size_of::<ClockTimePoint>(), 8);
        assert_eq!(ClockTimePoint::default().nanos(), 0);
    }
}
