use crate::stmt::{ChangeColumn, Statement};

use tablewright_core::schema::{ColumnDefault, ColumnDescriptor, ColumnSet, IndexMembership};

/// The two-phase workaround for unsafe collation changes.
///
/// Some stores reject or corrupt an in-place collation change between
/// certain text encodings. Every column whose desired collation differs
/// from its original one and which is outside any primary/unique index
/// is first retyped to a generic large-binary type; the real alteration
/// follows. If the real alteration fails, one corrective statement
/// restores every pre-converted column from its pre-mutation capture.
/// Columns inside a primary/unique index skip the intermediate step and
/// are altered directly, accepting the store's native behavior.
#[derive(Debug, Clone)]
pub struct CollationGuard {
    table: String,

    /// Pre-mutation captures of every guarded column, in plan order.
    /// Reverts are derived from these captures only, never re-derived
    /// from live metadata.
    captured: Vec<ColumnDescriptor>,
}

impl CollationGuard {
    /// Selects the columns needing the intermediate step and captures
    /// their original state.
    pub fn plan(
        table: &str,
        originals: &ColumnSet,
        desired: &ColumnSet,
        indexes: &IndexMembership,
    ) -> Self {
        let mut captured = Vec::new();

        for column in desired.iter() {
            let Some(original) = originals.get(&column.orig_name) else {
                continue;
            };
            // A collation change needs a target collation; a column
            // dropping its collation (e.g. a retype to a numeric type)
            // has nothing to protect.
            if column.collation.is_empty() || column.collation == original.collation {
                continue;
            }
            if indexes.is_primary_or_unique(&original.name) {
                continue;
            }
            captured.push(original.clone());
        }

        Self {
            table: table.into(),
            captured,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.captured.is_empty()
    }

    /// Names of the guarded columns, in plan order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.captured.iter().map(|column| column.name.as_str())
    }

    /// The intermediate statements, one per guarded column.
    pub fn intermediate_statements(&self) -> Vec<Statement> {
        self.captured
            .iter()
            .map(|original| {
                let clause = ChangeColumn::new(binary_intermediate(original));
                Statement::alter_table(&self.table, vec![clause], false)
            })
            .collect()
    }

    /// The single corrective statement restoring every captured column.
    pub fn revert_statement(&self) -> Option<Statement> {
        self.revert_first(self.captured.len())
    }

    /// A corrective statement restoring only the first `converted`
    /// captures, for when the intermediate steps themselves failed
    /// midway.
    pub fn revert_first(&self, converted: usize) -> Option<Statement> {
        let converted = converted.min(self.captured.len());
        if converted == 0 {
            return None;
        }

        let clauses = self.captured[..converted]
            .iter()
            .map(|original| ChangeColumn::new(original.clone()))
            .collect();

        Some(Statement::alter_table(&self.table, clauses, false))
    }
}

/// The generic large-binary intermediate for `original`, preserving
/// name, nullability, and the generation clause.
fn binary_intermediate(original: &ColumnDescriptor) -> ColumnDescriptor {
    ColumnDescriptor {
        name: original.name.clone(),
        orig_name: original.name.clone(),
        ty: "BLOB".into(),
        spec: String::new(),
        attribute: String::new(),
        collation: String::new(),
        nullable: original.nullable,
        default: ColumnDefault::None,
        extra: String::new(),
        comment: String::new(),
        generated: original.generated.clone(),
        position: None,
    }
}
