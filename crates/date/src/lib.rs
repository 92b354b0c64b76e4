//! # cylenian-date
//!
//! A single [`Date`] type tying the calendars of `cylenian-calendar` and
//! the ephemeris of `cylenian-moon` to one Julian Day Number.
//!
//! ```mermaid
//! graph LR
//!     A["Date::from_gregorian()"] --> D["Date (Jdn)"]
//!     B["Date::from_cylenian()"] --> D
//!     C["Date::from_season()"] --> D
//!     E["Date::today(&clock)"] --> D
//!     D --> F[".gregorian()"]
//!     D --> G[".cylenian()?"]
//!     D --> H[".season()"]
//!     D --> I[".moon()"]
//! ```
//!
//! The wall clock only enters through the [`Clock`] trait, so everything
//! else is deterministic.
//!
//! ```
//! use cylenian_date::{Date, FixedClock};
//!
//! let today = Date::today(&FixedClock::new(2017, 12, 22)).unwrap();
//! assert_eq!(today.cylenian().unwrap().to_string(), "Elsy'ondleð 7, 331E2");
//! assert_eq!(today.season().format_short(), "2017.winter.2");
//! ```

mod clock;
mod date;

pub use clock::{Clock, FixedClock, SystemClock};
pub use date::Date;
