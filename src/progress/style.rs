//! Spinner styling options.
//!
//! # Examples
//!
//! ```rust
//! use download_kpi::progress::ProgressBarOpts;
//!
//! // Default spinner, cleared once the file shows up.
//! let opts = ProgressBarOpts::default();
//! assert!(opts.is_enabled());
//!
//! // No output at all.
//! let hidden = ProgressBarOpts::hidden();
//! assert!(!hidden.is_enabled());
//! ```

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Define the options for the waiting spinner.
#[derive(Debug, Clone)]
pub struct ProgressBarOpts {
    /// Spinner template string.
    template: Option<String>,
    /// Spinner animation frames.
    tick_chars: Option<String>,
    /// Enable or disable the spinner.
    pub(crate) enabled: bool,
    /// Clear the spinner once completed.
    pub(crate) clear: bool,
}

impl Default for ProgressBarOpts {
    fn default() -> Self {
        Self {
            template: Some(ProgressBarOpts::TEMPLATE_SPINNER.into()),
            tick_chars: Some(ProgressBarOpts::CHARS_BRAILLE.into()),
            enabled: true,
            clear: true,
        }
    }
}

impl ProgressBarOpts {
    /// Spinner with the elapsed time and a message.
    ///
    /// `⠹ [00:00:07] Waiting for SpeedTest_16MB.dat`
    pub const TEMPLATE_SPINNER: &'static str = "{spinner:.green} [{elapsed_precise}] {msg}";
    /// Braille dots: `"⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ "`.
    pub const CHARS_BRAILLE: &'static str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ";
    /// Rotating line: `"-\\|/ "`.
    pub const CHARS_LINE: &'static str = "-\\|/ ";

    /// Redraw cadence of an enabled spinner.
    const STEADY_TICK: Duration = Duration::from_millis(120);

    /// Create a new [`ProgressBarOpts`].
    pub fn new(
        template: Option<String>,
        tick_chars: Option<String>,
        enabled: bool,
        clear: bool,
    ) -> Self {
        Self {
            template,
            tick_chars,
            enabled,
            clear,
        }
    }

    /// Create a [`ProgressStyle`] based on the provided options.
    ///
    /// An invalid template falls back to the default spinner template.
    pub fn to_progress_style(self) -> ProgressStyle {
        let mut style = ProgressStyle::default_spinner();
        if let Some(template) = self.template {
            style = match ProgressStyle::default_spinner().template(&template) {
                Ok(style) => style,
                Err(e) => {
                    tracing::debug!("Invalid spinner template {:?}: {}", template, e);
                    style
                }
            };
        }
        if let Some(tick_chars) = self.tick_chars {
            style = style.tick_chars(&tick_chars);
        }
        style
    }

    /// Create a spinner [`ProgressBar`] based on the provided options.
    pub fn to_spinner(self) -> ProgressBar {
        // Return a hidden spinner if we disabled it.
        if !self.enabled {
            return ProgressBar::hidden();
        }

        let style = self.to_progress_style();
        let pb = ProgressBar::new_spinner().with_style(style);
        pb.enable_steady_tick(Self::STEADY_TICK);
        pb
    }

    /// Return whether the spinner is drawn.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Return whether the spinner is cleared on completion.
    pub fn clear(&self) -> bool {
        self.clear
    }

    /// Set to `true` to clear the spinner upon completion.
    pub fn set_clear(&mut self, clear: bool) {
        self.clear = clear;
    }

    /// Create a new [`ProgressBarOpts`] which hides the spinner.
    pub fn hidden() -> Self {
        Self {
            enabled: false,
            ..ProgressBarOpts::default()
        }
    }
}
