pub mod driver;
pub use driver::{Store, StoreError};

mod error;
pub use error::{
    Error, NoChangeError, ParseError, RevertExecutionError, StoreExecutionError, ValidationError,
};

pub mod schema;

/// A Result type alias that uses Tablewright's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
