//! Spinner shown while a watch waits for its file.

use crate::progress::ProgressBarOpts;
use indicatif::ProgressBar;

/// Wraps the spinner of one watch operation.
pub struct ProgressDisplay {
    spinner: ProgressBar,
    opts: ProgressBarOpts,
}

impl ProgressDisplay {
    /// Start a spinner announcing the file being awaited.
    pub fn new(opts: ProgressBarOpts, file_name: &str) -> Self {
        let spinner = opts.clone().to_spinner();
        spinner.set_message(format!("Waiting for {}", file_name));
        Self { spinner, opts }
    }

    /// Get the underlying spinner.
    pub fn spinner(&self) -> &ProgressBar {
        &self.spinner
    }

    /// Record one more poll.
    pub fn poll(&self) {
        self.spinner.inc(1);
    }

    /// Finish the spinner with a final message, clearing it if configured.
    pub fn finish(self, message: impl Into<String>) {
        if self.opts.clear {
            self.spinner.finish_and_clear();
        } else {
            self.spinner.finish_with_message(message.into());
        }
    }
}
