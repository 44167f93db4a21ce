use crate::stmt::ChangeColumn;

use tablewright_core::{
    schema::{ColumnDescriptor, ColumnSet},
    Error, Result,
};

/// Computes the per-column difference between the reflected and the
/// desired state. A clause is emitted iff any tracked field differs:
/// name, type, length/spec, attribute, collation, nullability, default,
/// extra, comment, virtuality/expression, or a requested move target.
///
/// Index-membership changes are never part of the clause; callers issue
/// them as independent statements.
pub fn build_clause(
    original: &ColumnDescriptor,
    desired: &ColumnDescriptor,
) -> Option<ChangeColumn> {
    if !desired.differs_from(original) {
        return None;
    }

    Some(ChangeColumn {
        orig_name: original.name.clone(),
        def: desired.clone(),
    })
}

/// Builds the clause list for a whole desired set, matching each desired
/// column to the reflected set by its original name.
pub fn build_clauses(originals: &ColumnSet, desired: &ColumnSet) -> Result<Vec<ChangeColumn>> {
    let mut clauses = Vec::new();

    for column in desired.iter() {
        let Some(original) = originals.get(&column.orig_name) else {
            return Err(Error::validation(format!(
                "unknown original column `{}`",
                column.orig_name
            )));
        };

        if let Some(clause) = build_clause(original, column) {
            clauses.push(clause);
        }
    }

    Ok(clauses)
}
