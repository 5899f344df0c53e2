/// ProgressReporter port for reporting what a session is doing
///
/// Messages are user-facing and go to stderr in the CLI so they never mix
/// with the report written to stdout.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports a recoverable problem (failed fetch, discarded response, ...)
    fn report_warning(&self, message: &str);

    /// Marks the start of a long-running activity such as a network fetch
    ///
    /// Implementations may show a spinner until the next `report_completion`
    /// or `report_warning`.
    fn begin_activity(&self, message: &str);

    /// Reports completion of an activity
    fn report_completion(&self, message: &str);
}
