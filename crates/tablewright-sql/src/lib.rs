pub mod collation;
pub use collation::CollationGuard;

pub mod diff;

pub mod extract;
pub use extract::extract_partitions;

pub mod reorder;

pub mod serializer;
pub use serializer::Serializer;

pub mod stmt;
pub use stmt::Statement;
