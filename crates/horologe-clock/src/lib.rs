//! Horologe clock — a double-faced analog clock on top of `horologe-engine`.
//!
//! The time model (angles, ticks, second watcher) is pure and GPU-free;
//! [`compose`] writes it into an engine scene and [`ClockApplication`] runs
//! the whole thing in a window.
//!
//! ```rust,ignore
//! use horologe_clock::ClockApplication;
//!
//! ClockApplication::new()
//!     .title("horologe")
//!     .front_utc_offset(1)
//!     .back_zone_offset(1)
//!     .run()?;
//! ```

pub mod angles;
pub mod app;
pub mod compose;
pub mod config;
pub mod error;
pub mod stop;
pub mod ticks;
pub mod time;
pub mod watcher;

pub use app::ClockApplication;
pub use config::ClockConfig;
pub use error::ConfigError;
pub use stop::StopHandle;
