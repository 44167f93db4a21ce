mod executor;
pub use executor::{ExecuteOptions, Executor, MutationOutcome, MutationRequest};

pub use tablewright_core::{
    async_trait, schema, Error, NoChangeError, ParseError, Result, RevertExecutionError, Store,
    StoreError, StoreExecutionError, ValidationError,
};
pub use tablewright_sql::{extract_partitions, CollationGuard, Serializer, Statement};
