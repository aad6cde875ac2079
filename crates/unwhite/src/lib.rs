//! Near-white background removal for images.
//!
//! Loads an image, makes every pixel whose red, green, and blue channels all
//! reach a threshold fully transparent, and writes the result back out as a
//! PNG. Color channels are left untouched, so running the filter twice is the
//! same as running it once.
//!
//! ## Quickstart
//!
//! ```no_run
//! use unwhite::KnockoutConfig;
//!
//! # fn main() -> Result<(), unwhite::KnockoutError> {
//! let mut cfg = KnockoutConfig::new("logo.png");
//! cfg.output_path = Some("logo-transparent.png".into());
//! let report = unwhite::knock_out_file(&cfg)?;
//! println!("cleared {} of {} pixels", report.cleared_pixels, report.total_pixels);
//! # Ok(())
//! # }
//! ```
//!
//! Omitting `output_path` overwrites the input file, which is what the
//! `unwhite` binary does by default.

mod config;
mod error;
mod filter;
mod io;
mod logger;
mod pipeline;
mod report;

pub use config::{ConfigIoError, KnockoutConfig};
pub use error::KnockoutError;
pub use filter::{is_background, knock_out_background, KnockoutParams, DEFAULT_THRESHOLD};
pub use io::{load_rgba, save_png};
pub use pipeline::knock_out_file;
pub use report::{KnockoutReport, TimingsMs};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;
pub use logger::{init_from_verbosity, init_with_level};
