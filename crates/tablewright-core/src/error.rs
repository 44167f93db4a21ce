mod no_change;
mod parse;
mod revert;
mod store_execution;
mod validation;

pub use no_change::NoChangeError;
pub use parse::ParseError;
pub use revert::RevertExecutionError;
pub use store_execution::StoreExecutionError;
pub use validation::ValidationError;

use std::fmt;

/// An error produced while planning or executing a table mutation.
///
/// Every engine operation returns a structured result; no path aborts a
/// request irrecoverably. [`Error::NoChange`] is a non-fatal signal and
/// callers are expected to branch on [`Error::is_no_change`] rather than
/// treat it as a failure.
#[derive(Debug)]
pub enum Error {
    /// The desired state is malformed: duplicate column names, a target
    /// order that is not a permutation of the current order, an unknown
    /// original column name.
    Validation(ValidationError),

    /// The diff or plan produced nothing to execute.
    NoChange(NoChangeError),

    /// The store rejected a statement. Carries the statement text, the
    /// store's message, and the outcome of the corrective reversion when
    /// one was attempted.
    StoreExecution(StoreExecutionError),

    /// Definition text could not be decomposed.
    Parse(ParseError),

    /// Ad-hoc error from collaborator code.
    Other(anyhow::Error),
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(ValidationError::new(message))
    }

    pub fn no_change(message: impl Into<String>) -> Self {
        Error::NoChange(NoChangeError::new(message))
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Error::Parse(ParseError::new(message))
    }

    /// True when the error is the non-fatal nothing-to-do signal.
    pub fn is_no_change(&self) -> bool {
        matches!(self, Error::NoChange(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(err) => fmt::Display::fmt(err, f),
            Error::NoChange(err) => fmt::Display::fmt(err, f),
            Error::StoreExecution(err) => fmt::Display::fmt(err, f),
            Error::Parse(err) => fmt::Display::fmt(err, f),
            Error::Other(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Other(err) => err.source(),
            _ => None,
        }
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Validation(err)
    }
}

impl From<NoChangeError> for Error {
    fn from(err: NoChangeError) -> Self {
        Error::NoChange(err)
    }
}

impl From<StoreExecutionError> for Error {
    fn from(err: StoreExecutionError) -> Self {
        Error::StoreExecution(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err)
    }
}
