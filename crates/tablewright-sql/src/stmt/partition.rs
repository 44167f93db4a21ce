use super::{Name, Statement};

use tablewright_core::schema::PartitionDescriptor;

/// A statement rewriting a table's partitioning to a new descriptor.
#[derive(Debug, Clone)]
pub struct PartitionBy {
    /// Current name of the table.
    pub name: Name,

    /// The desired partitioning state.
    pub descriptor: PartitionDescriptor,
}

/// A statement dropping all partitioning from a table.
#[derive(Debug, Clone)]
pub struct RemovePartitioning {
    /// Current name of the table.
    pub name: Name,
}

impl Statement {
    /// Repartitions a table to the given descriptor.
    pub fn partition_by(table: &str, descriptor: PartitionDescriptor) -> Self {
        PartitionBy {
            name: Name::from(table),
            descriptor,
        }
        .into()
    }

    /// Drops a table's partitioning.
    pub fn remove_partitioning(table: &str) -> Self {
        RemovePartitioning {
            name: Name::from(table),
        }
        .into()
    }
}

impl From<PartitionBy> for Statement {
    fn from(value: PartitionBy) -> Self {
        Self::PartitionBy(value)
    }
}

impl From<RemovePartitioning> for Statement {
    fn from(value: RemovePartitioning) -> Self {
        Self::RemovePartitioning(value)
    }
}
