use super::RevertExecutionError;

/// Error when the store rejected a statement.
#[derive(Debug)]
pub struct StoreExecutionError {
    /// The statement the store rejected.
    pub statement: String,

    /// The store's error message, verbatim.
    pub message: String,

    /// Outcome of the corrective reversion, when pre-steps had run and
    /// the reversion itself failed. `None` means no reversion was needed
    /// or it succeeded.
    pub revert: Option<RevertExecutionError>,
}

impl std::error::Error for StoreExecutionError {}

impl core::fmt::Display for StoreExecutionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "statement failed: {}; statement={}",
            self.message, self.statement
        )?;
        if let Some(revert) = &self.revert {
            write!(f, "; additionally, {revert}")?;
        }
        Ok(())
    }
}
