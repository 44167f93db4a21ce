use crate::{schema::ColumnDescriptor, Result};

use async_trait::async_trait;
use std::fmt;

/// A failure reported by the backing store for a statement it rejected.
///
/// The message is surfaced verbatim to callers; the engine never
/// interprets it.
#[derive(Debug, Clone)]
pub struct StoreError {
    pub message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for StoreError {}

/// The store collaborator a mutation request is executed against.
///
/// One request drives one sequential pipeline of calls over one store
/// handle; the engine awaits each call to completion before issuing the
/// next and never retries a statement.
#[async_trait]
pub trait Store {
    /// Full column metadata for `table`, in physical column order.
    async fn describe_columns(&mut self, table: &str) -> Result<Vec<ColumnDescriptor>>;

    /// The generation expression of a single column, when the column is
    /// generated. Plain column metadata omits the expression, so moved
    /// generated columns are resolved through this lookup.
    async fn generation_expression(&mut self, table: &str, column: &str)
        -> Result<Option<String>>;

    /// The current physical column order of `table`.
    async fn current_column_order(&mut self, table: &str) -> Result<Vec<String>>;

    /// Executes one statement. A rejection carries the store's error
    /// detail; once the store accepts a statement it runs to completion.
    async fn execute(&mut self, statement: &str) -> core::result::Result<(), StoreError>;

    /// The literal definition text of `table`, when the store can render
    /// one.
    async fn render_definition_text(&mut self, table: &str) -> Result<Option<String>>;
}
