mod column;
pub use column::{
    is_numeric_type, is_temporal_type, ColumnDefault, ColumnDescriptor, ColumnSet, Generated,
    MoveTarget, Virtuality, NOW_MARKER,
};

mod index;
pub use index::IndexMembership;

mod partition;
pub use partition::{
    PartitionDescriptor, PartitionScheme, PartitionSlot, SlotOptions, SubpartitionSlot,
};
