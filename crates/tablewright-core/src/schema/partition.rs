/// One level of a partitioning definition: the method, its expression,
/// and how many segments it declares.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionScheme {
    /// Method token (e.g. `RANGE`, `LIST COLUMNS`, `LINEAR HASH`, `KEY`).
    pub method: String,

    /// The parenthesized expression or column list, without parentheses.
    pub expression: String,

    /// Declared segment count. When the source declares no explicit
    /// count, this is the number of enumerated slots.
    pub count: usize,
}

/// The complete partitioning state of a table.
///
/// A default-constructed descriptor (empty method, zero count, no slots)
/// means the table is not partitioned; that is a normal state, not an
/// error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionDescriptor {
    pub scheme: PartitionScheme,

    /// The subpartition level, when one is declared.
    pub subscheme: Option<PartitionScheme>,

    /// Partition slots, one per declared position. The list length
    /// equals `scheme.count`; undeclared positions hold synthesized
    /// defaults.
    pub partitions: Vec<PartitionSlot>,
}

impl PartitionDescriptor {
    /// True when the table carries no partitioning at all.
    pub fn is_empty(&self) -> bool {
        self.scheme.method.is_empty() && self.scheme.count == 0 && self.partitions.is_empty()
    }

    /// True iff the partition count exceeds one and the method admits
    /// per-partition boundary values.
    pub fn can_have_subpartitions(&self) -> bool {
        self.scheme.count > 1 && method_admits_values(&self.scheme.method)
    }

    /// True iff the method admits per-partition boundary values,
    /// independent of count.
    pub fn values_enabled(&self) -> bool {
        method_admits_values(&self.scheme.method)
    }
}

fn method_admits_values(method: &str) -> bool {
    matches!(
        method.to_ascii_uppercase().as_str(),
        "RANGE" | "RANGE COLUMNS" | "LIST" | "LIST COLUMNS"
    )
}

/// One named physical storage segment of a partitioned table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionSlot {
    pub name: String,

    /// The boundary token between `VALUES` and the boundary expression
    /// (e.g. `LESS THAN`, `IN`). Carries the literal suffix ` MAXVALUE`
    /// when the raw boundary is the catch-all marker.
    pub value_type: String,

    /// The boundary expression. Empty for the catch-all marker and for
    /// methods without boundary values.
    pub value: String,

    pub options: SlotOptions,

    /// Subpartition slots, present when the table declares a
    /// subpartition level with count > 1.
    pub subpartitions: Vec<SubpartitionSlot>,
}

impl PartitionSlot {
    /// The synthesized slot for an undeclared position `i`.
    pub fn default_at(i: usize) -> Self {
        Self {
            name: format!("p{i}"),
            ..Self::default()
        }
    }
}

/// One subpartition segment within a partition slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubpartitionSlot {
    pub name: String,
    pub options: SlotOptions,
}

impl SubpartitionSlot {
    /// The synthesized slot for undeclared subpartition `j` of `parent`.
    pub fn default_at(parent: &str, j: usize) -> Self {
        Self {
            name: format!("{parent}_s{j}"),
            options: SlotOptions::default(),
        }
    }
}

/// Storage options of a partition or subpartition slot. An empty string
/// means the option was not specified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotOptions {
    pub engine: String,
    pub comment: String,
    pub data_directory: String,
    pub index_directory: String,
    pub min_rows: String,
    pub max_rows: String,
    pub tablespace: String,
    pub node_group: String,
}

impl SlotOptions {
    pub fn is_empty(&self) -> bool {
        self.engine.is_empty()
            && self.comment.is_empty()
            && self.data_directory.is_empty()
            && self.index_directory.is_empty()
            && self.min_rows.is_empty()
            && self.max_rows.is_empty()
            && self.tablespace.is_empty()
            && self.node_group.is_empty()
    }
}
