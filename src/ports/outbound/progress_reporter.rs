/// ProgressReporter port for reporting progress during a verification run
///
/// This port abstracts where progress lines and failure diagnostics go
/// so the verifier loop can be tested without capturing stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    ///
    /// # Arguments
    /// * `message` - The progress message to report
    fn report(&self, message: &str);

    /// Reports a failure diagnostic (failure header, captured stderr)
    ///
    /// # Arguments
    /// * `message` - The diagnostic text
    fn report_error(&self, message: &str);

    /// Reports completion of the run
    ///
    /// # Arguments
    /// * `message` - Completion message
    fn report_completion(&self, message: &str);
}
