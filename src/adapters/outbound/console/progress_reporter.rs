use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use std::cell::RefCell;
use std::time::Duration;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Messages go to stderr so they never mix with a report written to stdout.
/// While an activity is running an indicatif spinner is shown; indicatif
/// hides it when stderr is not a terminal.
pub struct StderrProgressReporter {
    spinner: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: RefCell::new(None),
        }
    }

    fn finish_spinner(&self) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
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
        match self.spinner.borrow().as_ref() {
            Some(spinner) => spinner.println(message),
            None => eprintln!("{}", message),
        }
    }

    fn report_warning(&self, message: &str) {
        self.finish_spinner();
        eprintln!("{}", message);
    }

    fn begin_activity(&self, message: &str) {
        self.finish_spinner();

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("   {spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        *self.spinner.borrow_mut() = Some(spinner);
    }

    fn report_completion(&self, message: &str) {
        self.finish_spinner();
        eprintln!("{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_lifecycle() {
        let reporter = StderrProgressReporter::new();
        reporter.begin_activity("Loading");
        assert!(reporter.spinner.borrow().is_some());

        reporter.report("halfway");
        reporter.report_completion("done");
        assert!(reporter.spinner.borrow().is_none());
    }

    #[test]
    fn test_warning_stops_spinner() {
        let reporter = StderrProgressReporter::default();
        reporter.begin_activity("Loading");
        reporter.begin_activity("Loading again");
        reporter.report_warning("failed");
        assert!(reporter.spinner.borrow().is_none());
    }
}
