/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts progress reporting (e.g., to stderr) to provide
/// user feedback while a scan runs. Diagnostics for scoped failures are
/// surfaced through `report_error`, one line each.
///
/// Implementations must be `Send + Sync`: progress is advanced from
/// concurrently running lookups.
pub trait ProgressReporter: Send + Sync {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress of a counted phase
    ///
    /// # Arguments
    /// * `current` - Items completed so far
    /// * `total` - Items in the phase
    /// * `message` - Optional phase label
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
