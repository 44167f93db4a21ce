use super::{Comma, Formatter, ToSql};

use crate::stmt;

impl ToSql for &stmt::Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            stmt::Statement::AlterTable(stmt) => stmt.to_sql(f),
            stmt::Statement::PartitionBy(stmt) => stmt.to_sql(f),
            stmt::Statement::RemovePartitioning(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::AlterTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let clauses = Comma(&self.clauses);
        let hint = self.online_hint.then_some(", ALGORITHM=INPLACE, LOCK=NONE");

        fmt!(f, "ALTER TABLE ", &self.name, " ", clauses, hint);
    }
}

impl ToSql for &stmt::PartitionBy {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "ALTER TABLE ", &self.name, " ", &self.descriptor);
    }
}

impl ToSql for &stmt::RemovePartitioning {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "ALTER TABLE ", &self.name, " REMOVE PARTITIONING");
    }
}
