use std::collections::HashSet;

/// Which index class each column of a table participates in.
///
/// Read-only input to mutation planning. The engine consults membership
/// (the collation-safety wrapper skips primary/unique members) but never
/// mutates it; index changes are issued by callers as independent
/// statements.
#[derive(Debug, Clone, Default)]
pub struct IndexMembership {
    primary: HashSet<String>,
    unique: HashSet<String>,
    other: HashSet<String>,
}

impl IndexMembership {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_primary(&mut self, column: impl Into<String>) {
        self.primary.insert(column.into());
    }

    pub fn add_unique(&mut self, column: impl Into<String>) {
        self.unique.insert(column.into());
    }

    pub fn add_other(&mut self, column: impl Into<String>) {
        self.other.insert(column.into());
    }

    /// True when the column is covered by a primary or unique index.
    pub fn is_primary_or_unique(&self, column: &str) -> bool {
        self.primary.contains(column) || self.unique.contains(column)
    }

    /// True when the column is covered by any index class.
    pub fn contains(&self, column: &str) -> bool {
        self.is_primary_or_unique(column) || self.other.contains(column)
    }
}
