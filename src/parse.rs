use crate::{Duration, Error, Result, Unit};
use regex::Regex;
use std::sync::OnceLock;

// ASCII digits only, `\d` would also match other Unicode digits
const DURATION_PATTERN: &str = r"^([0-9]+(?:\.[0-9]+)?)(ms|s|m|h|d|w|y)$";

fn duration_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();

    #[allow(clippy::expect_used)]
    REGEX.get_or_init(|| {
        Regex::new(DURATION_PATTERN).expect("duration pattern should compile")
    })
}

/// Parses a duration literal such as `500ms`, `1.5h` or `2w`.
///
/// A literal is a non-negative decimal number immediately followed by one of
/// the unit suffixes `ms`, `s`, `m`, `h`, `d`, `w` or `y`. Surrounding
/// whitespace is ignored. Signs, exponents and compound literals (`1h30m`)
/// are rejected.
///
/// # Examples
///
/// ```
/// use durlit::{parse, Error};
///
/// assert_eq!(500.0, parse("500ms")?.as_millis());
/// assert_eq!(90.0, parse(" 1.5h ")?.as_minutes());
///
/// assert_eq!(Err(Error::EmptyInput), parse("   "));
/// assert!(matches!(parse("1h30m"), Err(Error::InvalidFormat(_))));
/// #
/// # Ok::<(), durlit::Error>(())
/// ```
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for blank input and
/// [`Error::InvalidFormat`] if the input is not a duration literal.
pub fn parse(text: &str) -> Result<Duration> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        log::debug!("rejecting empty duration literal");
        return Err(Error::EmptyInput);
    }

    let Some(caps) = duration_regex().captures(trimmed) else {
        log::debug!("rejecting malformed duration literal {text:?}");
        return Err(Error::InvalidFormat(text.to_owned()));
    };

    let (Some(number), Some(suffix)) = (caps.get(1), caps.get(2)) else {
        return Err(Error::InvalidFormat(text.to_owned()));
    };
    let number = number.as_str();

    let Some(unit) = Unit::from_suffix(suffix.as_str()) else {
        return Err(Error::InvalidFormat(text.to_owned()));
    };

    let value = match number.parse::<f64>() {
        Ok(value) if !value.is_nan() && value >= 0.0 => value,
        _ => {
            log::debug!("rejecting duration value {number:?}");
            return Err(Error::InvalidValue(number.to_owned()));
        }
    };

    let duration = Duration::of(value, unit);
    log::trace!(
        "parsed {trimmed:?} as {value} {unit:?} ({} ms)",
        duration.as_millis()
    );

    Ok(duration)
}

impl std::str::FromStr for Duration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

impl TryFrom<&str> for Duration {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        parse(value)
    }
}
