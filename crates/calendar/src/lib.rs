//! # cylenian-calendar
//!
//! Pure date arithmetic for three calendars that meet on one Julian Day
//! Number axis.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     G["GregorianDate"] -->|".to_jdn()"| J["Jdn"]
//!     J -->|"GregorianDate::from_jdn()"| G
//!     C["CylenianDate"] -->|".to_jdn()"| J
//!     J -->|"CylenianDate::from_jdn()"| C
//!     S["SeasonDate"] -->|".to_jdn()"| J
//!     J -->|"SeasonDate::from_jdn()"| S
//! ```
//!
//! Every conversion between two calendars passes through [`Jdn`]; there is
//! no direct path from one calendar to another.
//!
//! ## Quick Start
//!
//! ```
//! use cylenian_calendar::{CylenianDate, GregorianDate, Season, SeasonDate};
//!
//! // The Cylenian epoch
//! let epoch = GregorianDate::new(-1944, 12, 21).unwrap();
//! let cylenian = CylenianDate::from_jdn(epoch.to_jdn()).unwrap();
//! assert_eq!(cylenian.format_short(), "1.1.1.1");
//!
//! // Winter belongs to the year it starts in
//! let march_20 = GregorianDate::new(2017, 3, 20).unwrap();
//! let season = SeasonDate::from_gregorian(march_20);
//! assert_eq!((season.year(), season.season()), (2016, Season::Winter));
//! assert_eq!(season.to_gregorian(), march_20);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `jdn` | Julian Day Number newtype |
//! | `gregorian` | Proleptic Gregorian calendar |
//! | `cylenian` | Cylenian calendar, leap tables and month names |
//! | `season` | Solstice and equinox anchored seasons |
//! | `error` | Error types |

pub mod cylenian;
mod error;
pub mod gregorian;
mod jdn;
pub mod season;

pub use cylenian::CylenianDate;
pub use error::{CalendarError, ErrorKind, Field};
pub use gregorian::GregorianDate;
pub use jdn::Jdn;
pub use season::{Season, SeasonDate};
