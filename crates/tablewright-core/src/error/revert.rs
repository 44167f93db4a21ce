/// Error when the corrective reversion after a failed alteration itself
/// failed.
///
/// Always reported alongside the original store error, never in its
/// place.
#[derive(Debug, Clone)]
pub struct RevertExecutionError {
    /// The corrective statement the store rejected.
    pub statement: String,

    /// The store's error message, verbatim.
    pub message: String,
}

impl std::error::Error for RevertExecutionError {}

impl core::fmt::Display for RevertExecutionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "reversion failed: {}; statement={}",
            self.message, self.statement
        )
    }
}
