//! Spinner-based progress reporting for fallback attempts

use colored::Colorize;
use fortune_application::ports::progress::AttemptObserver;
use fortune_domain::Model;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Shows which candidate model is being consulted while the fallback
/// chain runs
pub struct AttemptReporter {
    spinner: ProgressBar,
}

impl AttemptReporter {
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(Self::spinner_style());
        spinner.enable_steady_tick(Duration::from_millis(100));
        Self { spinner }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Clear the spinner, e.g. after a terminal failure
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}

impl Default for AttemptReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl AttemptObserver for AttemptReporter {
    fn on_attempt_start(&self, model: &Model, index: usize, total: usize) {
        self.spinner
            .set_message(format!("Consulting {} ({}/{})...", model, index + 1, total));
    }

    fn on_attempt_failed(&self, model: &Model, reason: &str) {
        self.spinner
            .println(format!("{} {}: {}", "x".red(), model, reason));
    }

    fn on_accepted(&self, model: &Model, attempts: usize) {
        self.spinner.finish_and_clear();
        let tries = if attempts == 1 {
            "on the first try".to_string()
        } else {
            format!("after {} attempts", attempts)
        };
        println!("{} {} answered {}", "v".green(), model, tries);
    }
}
