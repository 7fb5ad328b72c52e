/// Console adapters for user-facing output
mod progress_reporter;

pub use progress_reporter::StdoutProgressReporter;
