use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::{Mutex, MutexGuard};

const BAR_TEMPLATE: &str =
    "   {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) - {msg}";

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes everything to stderr so a report sent to stdout stays clean.
/// One `indicatif` bar is shown per counted phase; a phase with a different
/// total replaces the current bar. Lines printed while a bar is active are
/// printed above it.
pub struct StderrProgressReporter {
    progress_bar: Mutex<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            progress_bar: Mutex::new(None),
        }
    }

    fn lock_bar(&self) -> MutexGuard<'_, Option<ProgressBar>> {
        // A panic while holding the lock cannot leave the bar half-updated
        self.progress_bar
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn new_bar(total: usize) -> ProgressBar {
        let style = ProgressStyle::default_bar()
            .template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        let bar = ProgressBar::new(total as u64);
        bar.set_style(style);
        bar
    }

    fn print_line(&self, message: &str) {
        match self.lock_bar().as_ref() {
            Some(bar) if !bar.is_finished() => bar.suspend(|| eprintln!("{}", message)),
            _ => eprintln!("{}", message),
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.print_line(message);
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let mut guard = self.lock_bar();
        let reuse = matches!(
            guard.as_ref(),
            Some(bar) if !bar.is_finished() && bar.length() == Some(total as u64)
        );
        if !reuse {
            if let Some(old) = guard.take() {
                old.finish_and_clear();
            }
            *guard = Some(Self::new_bar(total));
        }

        if let Some(bar) = guard.as_ref() {
            bar.set_position(current as u64);
            if let Some(msg) = message {
                bar.set_message(msg.to_string());
            }
            if current >= total {
                bar.finish_and_clear();
            }
        }
    }

    fn report_error(&self, message: &str) {
        self.print_line(message);
    }

    fn report_completion(&self, message: &str) {
        if let Some(bar) = self.lock_bar().take() {
            bar.finish_and_clear();
        }
        eprintln!("{}", message);
    }
}
