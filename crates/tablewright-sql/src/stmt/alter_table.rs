use super::{ChangeColumn, Name, Statement};

/// A statement applying one or more column-change clauses to a table.
#[derive(Debug, Clone)]
pub struct AlterTable {
    /// Current name of the table.
    pub name: Name,

    /// The clauses, applied together as one statement.
    pub clauses: Vec<ChangeColumn>,

    /// Annotate the statement with the online algorithm / lock-mode
    /// hint.
    pub online_hint: bool,
}

impl Statement {
    /// Combines column-change clauses into one ALTER TABLE statement.
    pub fn alter_table(table: &str, clauses: Vec<ChangeColumn>, online_hint: bool) -> Self {
        AlterTable {
            name: Name::from(table),
            clauses,
            online_hint,
        }
        .into()
    }
}

impl From<AlterTable> for Statement {
    fn from(value: AlterTable) -> Self {
        Self::AlterTable(value)
    }
}
