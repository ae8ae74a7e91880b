//! Compact duration literals as a plain value type.
//!
//! A [`Duration`] is a single `f64` number of milliseconds. It can be built
//! from a number in one of seven units, or parsed from a literal like `500ms`,
//! `1.5h` or `2w`. When printed, a duration picks the largest unit that fits,
//! so `parse("90m")` prints as `1.5h`.
//!
//! Supported units: `ms`, `s`, `m`, `h`, `d`, `w` and `y` (a fixed 365-day year).
//!
//! ```
//! use durlit::{parse, Duration};
//!
//! let retention = parse("2w")?;
//! let grace = Duration::days(3.5);
//!
//! let total = retention + grace;
//! assert_eq!(17.5, total.as_days());
//! assert_eq!("2.5w", total.to_string());
//!
//! assert!(total > retention);
//! assert_eq!(1_512_000_000.0, f64::from(total));
//!
//! # Ok::<(), durlit::Error>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, missing_docs, clippy::cargo)]
#![deny(clippy::unwrap_used)]
#![warn(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]
#![warn(clippy::multiple_crate_versions)]
#![warn(clippy::result_unit_err)]

mod duration;
mod error;
mod parse;
mod unit;

pub use duration::Duration;
pub use error::{Error, Result};
pub use parse::parse;
pub use unit::Unit;
