mod alter_table;
pub use alter_table::AlterTable;

mod change_column;
pub use change_column::ChangeColumn;

mod name;
pub use name::Name;

mod partition;
pub use partition::{PartitionBy, RemovePartitioning};

/// A schema-alteration statement the engine can emit.
#[derive(Debug, Clone)]
pub enum Statement {
    AlterTable(AlterTable),
    PartitionBy(PartitionBy),
    RemovePartitioning(RemovePartitioning),
}
