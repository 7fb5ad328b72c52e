use crate::ports::outbound::ProgressReporter;
use std::io::{self, Write};

/// StdoutProgressReporter adapter for reporting progress to stdout
///
/// Progress lines, failure diagnostics and the final report all go to
/// stdout. Each line is flushed as soon as it is written.
pub struct StdoutProgressReporter;

impl StdoutProgressReporter {
    pub fn new() -> Self {
        Self
    }

    fn write_line(&self, message: &str) {
        let mut stdout = io::stdout().lock();
        // A closed stdout (e.g. piped into `head`) is ignored
        let _ = writeln!(stdout, "{}", message);
        let _ = stdout.flush();
    }
}

impl Default for StdoutProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StdoutProgressReporter {
    fn report(&self, message: &str) {
        self.write_line(message);
    }

    fn report_error(&self, message: &str) {
        self.write_line(message.trim_end_matches('\n'));
    }

    fn report_completion(&self, message: &str) {
        self.write_line(message);
    }
}
