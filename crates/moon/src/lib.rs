//! # cylenian-moon
//!
//! Moon phase, illumination and Sun/Moon distances from a simplified
//! orbital model (Duffett-Smith's method, epoch 1980 January 0.0).
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["julian date"] -->|"- EPOCH"| B["day"]
//!     B --> C["SunPosition::at(day)"]
//!     C -->|"solve_kepler()"| C
//!     B --> D["mean longitude / anomaly"]
//!     C --> E["perturbations"]
//!     D --> E
//!     E --> F["MoonState"]
//!     F -->|"Phase::from_fraction()"| G["Phase"]
//! ```
//!
//! All angles are carried in degrees. [`dsin`] and [`dcos`] convert to
//! radians at the call boundary; [`solve_kepler`] works in radians.
//!
//! ## Quick Start
//!
//! ```
//! use cylenian_calendar::Jdn;
//! use cylenian_moon::{Phase, moon_state};
//!
//! // 2000-01-21, the night of a total lunar eclipse
//! let state = moon_state(Jdn::new(2_451_565));
//! assert_eq!(state.phase, Phase::Full);
//! assert!(state.illumination > 0.99);
//! ```

mod angle;
pub mod constants;
mod kepler;
mod phase;
mod state;
mod sun;

pub use angle::{dcos, dsin, fix_angle};
pub use kepler::{MAX_ITERATIONS, TOLERANCE, solve_kepler};
pub use phase::{PHASE_TOLERANCE, Phase};
pub use state::{MoonState, moon_state};
pub use sun::SunPosition;
