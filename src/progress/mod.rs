//! Progress module containing the waiting spinner.
//!
//! A watch can last minutes, so an `indicatif` spinner names the file being
//! awaited and shows the time spent so far.
//!
//! - `style` - Spinner styling options
//! - `display` - Spinner lifecycle for one watch
//!
//! # Examples
//!
//! ```rust
//! use download_kpi::progress::{ProgressBarOpts, ProgressDisplay};
//!
//! let display = ProgressDisplay::new(ProgressBarOpts::hidden(), "file.zip");
//! display.poll();
//! display.finish("file.zip found");
//! ```

pub(crate) mod display;
pub(crate) mod style;

pub use display::ProgressDisplay;
pub use style::ProgressBarOpts;
