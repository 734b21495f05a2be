//! cliclack-backed progress reporting

use crate::generator::Reporter;
use cliclack::ProgressBar;

/// Reports generator progress with cliclack spinners and log lines
#[derive(Default)]
pub struct CliReporter {
    spinner: Option<ProgressBar>,
}

impl CliReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reporter for CliReporter {
    fn start(&mut self, message: &str) {
        // A step that never resolved is closed before the next one opens
        if let Some(previous) = self.spinner.take() {
            previous.cancel("Interrupted");
        }
        let spinner = cliclack::spinner();
        spinner.start(message);
        self.spinner = Some(spinner);
    }

    fn succeed(&mut self, message: &str) {
        match self.spinner.take() {
            Some(spinner) => spinner.stop(message),
            None => {
                let _ = cliclack::log::success(message);
            }
        }
    }

    fn fail(&mut self, message: &str) {
        match self.spinner.take() {
            Some(spinner) => spinner.error(message),
            None => {
                let _ = cliclack::log::error(message);
            }
        }
    }

    fn info(&mut self, message: &str) {
        let _ = cliclack::log::info(message);
    }

    fn warn(&mut self, message: &str) {
        let _ = cliclack::log::warning(message);
    }
}
