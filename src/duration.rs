use crate::Unit;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A span of time, stored as a (possibly fractional) number of milliseconds
///
/// Durations are plain `Copy` values: arithmetic always produces a new
/// duration and never fails, following regular `f64` semantics.
///
/// ```
/// use durlit::Duration;
///
/// let timeout: Duration = "1.5h".parse()?;
///
/// assert_eq!(90.0, timeout.as_minutes());
/// assert_eq!("1.5h", timeout.to_string());
///
/// let remaining = timeout - Duration::minutes(100.0);
/// assert_eq!("-600000ms", remaining.to_string());
///
/// assert!(Duration::weeks(1.0) > Duration::days(6.0));
/// assert_eq!(Duration::seconds(0.5), Duration::hours(1.0) / 7_200.0);
/// #
/// # Ok::<(), durlit::Error>(())
/// ```
#[derive(Clone, Copy, Default, PartialEq, PartialOrd, Debug)]
pub struct Duration(f64);

impl Duration {
    /// The empty duration.
    pub const ZERO: Self = Self(0.0);

    /// Creates a duration from a raw number of milliseconds.
    #[must_use]
    pub const fn new(millis: f64) -> Self {
        Self(millis)
    }

    /// Creates a duration of `n` of the given unit.
    #[must_use]
    pub fn of(n: f64, unit: Unit) -> Self {
        Self(n * unit.factor())
    }

    /// Creates a duration of N years (365 days each).
    #[must_use]
    pub fn years(n: f64) -> Self {
        Self::of(n, Unit::Year)
    }

    /// Creates a duration of N weeks.
    #[must_use]
    pub fn weeks(n: f64) -> Self {
        Self::of(n, Unit::Week)
    }

    /// Creates a duration of N days.
    #[must_use]
    pub fn days(n: f64) -> Self {
        Self::of(n, Unit::Day)
    }

    /// Creates a duration of N hours.
    #[must_use]
    pub fn hours(n: f64) -> Self {
        Self::of(n, Unit::Hour)
    }

    /// Creates a duration of N minutes.
    #[must_use]
    pub fn minutes(n: f64) -> Self {
        Self::of(n, Unit::Minute)
    }

    /// Creates a duration of N seconds.
    #[must_use]
    pub fn seconds(n: f64) -> Self {
        Self::of(n, Unit::Second)
    }

    /// Creates a duration of N milliseconds.
    #[must_use]
    pub const fn millis(n: f64) -> Self {
        Self::new(n)
    }

    /// Expresses the duration in the given unit.
    #[must_use]
    pub fn as_unit(self, unit: Unit) -> f64 {
        self.0 / unit.factor()
    }

    /// Raw magnitude in milliseconds.
    #[must_use]
    pub const fn as_millis(self) -> f64 {
        self.0
    }

    /// Duration in seconds.
    #[must_use]
    pub fn as_seconds(self) -> f64 {
        self.as_unit(Unit::Second)
    }

    /// Duration in minutes.
    #[must_use]
    pub fn as_minutes(self) -> f64 {
        self.as_unit(Unit::Minute)
    }

    /// Duration in hours.
    #[must_use]
    pub fn as_hours(self) -> f64 {
        self.as_unit(Unit::Hour)
    }

    /// Duration in days.
    #[must_use]
    pub fn as_days(self) -> f64 {
        self.as_unit(Unit::Day)
    }

    /// Duration in weeks.
    #[must_use]
    pub fn as_weeks(self) -> f64 {
        self.as_unit(Unit::Week)
    }

    /// Duration in years.
    #[must_use]
    pub fn as_years(self) -> f64 {
        self.as_unit(Unit::Year)
    }

    /// Returns `true` if the duration is strictly below zero.
    #[must_use]
    pub fn is_negative(self) -> bool {
        self.0 < 0.0
    }

    /// Absolute value of the duration.
    #[must_use]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Converts to a [`std::time::Duration`].
    ///
    /// Returns `None` if the duration is negative, NaN or too large.
    #[must_use]
    pub fn to_std(self) -> Option<std::time::Duration> {
        std::time::Duration::try_from_secs_f64(self.as_seconds()).ok()
    }

    /// Unit the duration is rendered in by its [`std::fmt::Display`] impl.
    #[must_use]
    pub fn canonical_unit(self) -> Unit {
        Unit::canonical_for(self.0)
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let unit = self.canonical_unit();

        // NOTE: Adding 0.0 turns -0.0 into 0.0
        let value = self.as_unit(unit) + 0.0;

        write!(f, "{value}{unit}")
    }
}

impl From<Duration> for f64 {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl From<std::time::Duration> for Duration {
    fn from(value: std::time::Duration) -> Self {
        Self::seconds(value.as_secs_f64())
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f64> for Duration {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Mul<Duration> for f64 {
    type Output = Duration;

    fn mul(self, rhs: Duration) -> Self::Output {
        rhs * self
    }
}

impl Div<f64> for Duration {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}

/// Ratio between two durations.
impl Div for Duration {
    type Output = f64;

    fn div(self, rhs: Self) -> Self::Output {
        self.0 / rhs.0
    }
}

impl Neg for Duration {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl std::iter::Sum for Duration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> std::iter::Sum<&'a Duration> for Duration {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use std::cmp::Ordering;
    use test_log::test;

    #[test]
    fn duration_constructors() {
        assert_eq!(500.0, Duration::millis(500.0).as_millis());
        assert_eq!(30_000.0, Duration::seconds(30.0).as_millis());
        assert_eq!(300_000.0, Duration::minutes(5.0).as_millis());
        assert_eq!(7_200_000.0, Duration::hours(2.0).as_millis());
        assert_eq!(86_400_000.0, Duration::days(1.0).as_millis());
        assert_eq!(604_800_000.0, Duration::weeks(1.0).as_millis());
        assert_eq!(31_536_000_000.0, Duration::years(1.0).as_millis());
        assert_eq!(Duration::new(42.0), Duration::of(42.0, Unit::Millisecond));
        assert_eq!(Duration::ZERO, Duration::default());
    }

    #[test]
    fn duration_accessors() {
        let d = Duration::hours(1.0);

        assert_eq!(3_600_000.0, d.as_millis());
        assert_eq!(3_600.0, d.as_seconds());
        assert_eq!(60.0, d.as_minutes());
        assert_eq!(1.0, d.as_hours());
        assert_eq!(1.0 / 24.0, d.as_days());
        assert_eq!(1.0 / (24.0 * 7.0), d.as_weeks());
        assert_eq!(1.0 / (24.0 * 365.0), d.as_years());
        assert_eq!(60.0, d.as_unit(Unit::Minute));
        assert_eq!(3_600_000.0, f64::from(d));
    }

    #[test]
    fn duration_add_sub() {
        let a = Duration::seconds(30.0);
        let b = Duration::millis(250.0);

        assert_eq!(a.as_millis() + b.as_millis(), (a + b).as_millis());
        assert_eq!(Duration::millis(29_750.0), a - b);

        let negative = Duration::hours(1.0) - Duration::minutes(90.0);
        assert_eq!(-1_800_000.0, negative.as_millis());
        assert!(negative.is_negative());
        assert_eq!(Duration::minutes(30.0), negative.abs());
        assert_eq!(Duration::minutes(30.0), -negative);

        // operands are untouched
        assert_eq!(30_000.0, a.as_millis());
        assert_eq!(250.0, b.as_millis());
    }

    #[test]
    fn duration_mul_div() {
        let d = Duration::minutes(10.0);

        assert_eq!(Duration::minutes(25.0), d * 2.5);
        assert_eq!(Duration::minutes(25.0), 2.5 * d);
        assert_eq!(Duration::minutes(2.0), d / 5.0);
        assert_eq!(4.0, Duration::hours(1.0) / Duration::minutes(15.0));
    }

    #[test]
    fn duration_div_by_zero() {
        assert_eq!(f64::INFINITY, (Duration::seconds(1.0) / 0.0).as_millis());
        assert_eq!(
            f64::NEG_INFINITY,
            (Duration::seconds(-1.0) / 0.0).as_millis()
        );
        assert!((Duration::ZERO / 0.0).as_millis().is_nan());
    }

    #[test]
    fn duration_comparison() {
        let hour = Duration::hours(1.0);

        assert_eq!(hour, Duration::minutes(60.0));
        assert_ne!(hour, Duration::minutes(61.0));
        assert!(hour > Duration::minutes(59.0));
        assert!(hour < Duration::minutes(61.0));
        assert_eq!(
            Some(Ordering::Equal),
            hour.partial_cmp(&Duration::seconds(3_600.0))
        );

        let nan = Duration::ZERO / 0.0;
        assert_ne!(nan, Duration::ZERO / 0.0);
        assert_eq!(None, nan.partial_cmp(&hour));
    }

    #[test]
    fn duration_sum() {
        let parts = [
            Duration::minutes(1.0),
            Duration::seconds(30.0),
            Duration::millis(500.0),
        ];

        assert_eq!(Duration::millis(90_500.0), parts.iter().sum());
        assert_eq!(Duration::millis(90_500.0), parts.into_iter().sum());
        assert_eq!(Duration::ZERO, std::iter::empty::<Duration>().sum());
    }

    #[test]
    fn duration_display() {
        assert_eq!("500ms", Duration::millis(500.0).to_string());
        assert_eq!("30s", Duration::seconds(30.0).to_string());
        assert_eq!("5m", Duration::minutes(5.0).to_string());
        assert_eq!("2h", Duration::hours(2.0).to_string());
        assert_eq!("3d", Duration::days(3.0).to_string());
        assert_eq!("2w", Duration::weeks(2.0).to_string());
        assert_eq!("1y", Duration::years(1.0).to_string());
    }

    #[test]
    fn duration_display_fractional() {
        assert_eq!("1.5h", Duration::minutes(90.0).to_string());
        assert_eq!("1.5s", Duration::millis(1_500.0).to_string());
        assert_eq!("0.5ms", Duration::millis(0.5).to_string());
        assert_eq!("2.5y", Duration::years(2.5).to_string());
    }

    #[test]
    fn duration_display_boundaries() {
        assert_eq!("999ms", Duration::millis(999.0).to_string());
        assert_eq!("1s", Duration::millis(1_000.0).to_string());
        assert_eq!("1m", Duration::seconds(60.0).to_string());
        assert_eq!("1h", Duration::minutes(60.0).to_string());
        assert_eq!("1d", Duration::hours(24.0).to_string());
        assert_eq!("1w", Duration::days(7.0).to_string());
        assert_eq!("52w", Duration::weeks(52.0).to_string());
        assert_eq!("1y", Duration::days(365.0).to_string());
    }

    #[test]
    fn duration_display_odd_values() {
        assert_eq!("0ms", Duration::ZERO.to_string());
        assert_eq!("0ms", Duration::millis(-0.0).to_string());
        assert_eq!("-5000ms", Duration::seconds(-5.0).to_string());
        assert_eq!("NaNy", (Duration::ZERO / 0.0).to_string());
        assert_eq!("infy", (Duration::seconds(1.0) / 0.0).to_string());
    }

    #[test]
    fn duration_std_interop() {
        let d = Duration::from(std::time::Duration::from_millis(1_500));
        assert_eq!(Duration::millis(1_500.0), d);

        assert_eq!(
            Some(std::time::Duration::from_secs(90)),
            Duration::minutes(1.5).to_std()
        );
        assert_eq!(None, Duration::seconds(-1.0).to_std());
        assert_eq!(None, (Duration::ZERO / 0.0).to_std());
        assert_eq!(None, (Duration::seconds(1.0) / 0.0).to_std());
    }
}
