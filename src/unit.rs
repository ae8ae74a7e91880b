use crate::Error;

const MS_PER_SECOND: f64 = 1_000.0;
const MS_PER_MINUTE: f64 = MS_PER_SECOND * 60.0;
const MS_PER_HOUR: f64 = MS_PER_MINUTE * 60.0;
const MS_PER_DAY: f64 = MS_PER_HOUR * 24.0;
const MS_PER_WEEK: f64 = MS_PER_DAY * 7.0;

// No leap years
const MS_PER_YEAR: f64 = MS_PER_DAY * 365.0;

/// A unit of time a [`crate::Duration`] can be expressed in.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, std::hash::Hash, Debug)]
pub enum Unit {
    /// `ms`
    Millisecond,

    /// `s`
    Second,

    /// `m`
    Minute,

    /// `h`
    Hour,

    /// `d`
    Day,

    /// `w`
    Week,

    /// `y`, a fixed 365-day year
    Year,
}

impl Unit {
    /// All units, smallest first.
    pub const ALL: [Self; 7] = [
        Self::Millisecond,
        Self::Second,
        Self::Minute,
        Self::Hour,
        Self::Day,
        Self::Week,
        Self::Year,
    ];

    /// How many milliseconds one of this unit spans.
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::Millisecond => 1.0,
            Self::Second => MS_PER_SECOND,
            Self::Minute => MS_PER_MINUTE,
            Self::Hour => MS_PER_HOUR,
            Self::Day => MS_PER_DAY,
            Self::Week => MS_PER_WEEK,
            Self::Year => MS_PER_YEAR,
        }
    }

    /// Short suffix used in duration literals.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Millisecond => "ms",
            Self::Second => "s",
            Self::Minute => "m",
            Self::Hour => "h",
            Self::Day => "d",
            Self::Week => "w",
            Self::Year => "y",
        }
    }

    /// Looks up a unit by its exact suffix.
    #[must_use]
    pub fn from_suffix(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|unit| unit.suffix() == s)
    }

    /// Picks the unit a magnitude (in milliseconds) is rendered in.
    ///
    /// The first unit whose successor's factor is still larger than the
    /// magnitude wins; anything at or above one year (and NaN) is in years.
    ///
    /// ```
    /// use durlit::Unit;
    ///
    /// assert_eq!(Unit::Millisecond, Unit::canonical_for(999.0));
    /// assert_eq!(Unit::Second, Unit::canonical_for(1_000.0));
    /// assert_eq!(Unit::Week, Unit::canonical_for(604_800_000.0));
    /// ```
    #[must_use]
    pub fn canonical_for(millis: f64) -> Self {
        Self::ALL
            .windows(2)
            .find_map(|pair| match pair {
                [unit, next] if millis < next.factor() => Some(*unit),
                _ => None,
            })
            .unwrap_or(Self::Year)
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

impl std::str::FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_suffix(s).ok_or_else(|| Error::InvalidFormat(s.to_owned()))
    }
}
