use tablewright_core::schema::ColumnDescriptor;

/// One `CHANGE` clause: rewrites a column's full definition, optionally
/// renaming and repositioning it in the same clause.
#[derive(Debug, Clone)]
pub struct ChangeColumn {
    /// The name the column currently has in the store.
    pub orig_name: String,

    /// The complete desired definition.
    pub def: ColumnDescriptor,
}

impl ChangeColumn {
    /// Builds a clause from a desired descriptor; the descriptor's
    /// `orig_name` addresses the existing column.
    pub fn new(def: ColumnDescriptor) -> Self {
        Self {
            orig_name: def.orig_name.clone(),
            def,
        }
    }
}
