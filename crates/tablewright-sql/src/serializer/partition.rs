use super::{Comma, Formatter, Ident, Literal, ToSql};

use tablewright_core::schema::{PartitionDescriptor, PartitionSlot, SlotOptions, SubpartitionSlot};

impl ToSql for &PartitionDescriptor {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "PARTITION BY ", &self.scheme.method, " (", &self.scheme.expression, ")");

        if let Some(sub) = &self.subscheme {
            fmt!(f, " SUBPARTITION BY ", &sub.method, " (", &sub.expression, ")");
            if sub.count > 0 {
                fmt!(f, " SUBPARTITIONS ", sub.count);
            }
        }

        // Methods with boundary values require the slot list; the others
        // only need the count.
        if self.values_enabled() && !self.partitions.is_empty() {
            fmt!(f, " (", Comma(&self.partitions), ")");
        } else if self.scheme.count > 0 {
            fmt!(f, " PARTITIONS ", self.scheme.count);
        }
    }
}

impl ToSql for &PartitionSlot {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "PARTITION ", Ident(&self.name));

        if !self.value_type.is_empty() {
            fmt!(f, " VALUES ", &self.value_type);
            if !self.value.is_empty() {
                fmt!(f, " (", &self.value, ")");
            }
        }

        self.options.to_sql(f);

        if !self.subpartitions.is_empty() {
            fmt!(f, " (", Comma(&self.subpartitions), ")");
        }
    }
}

impl ToSql for &SubpartitionSlot {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "SUBPARTITION ", Ident(&self.name));
        self.options.to_sql(f);
    }
}

impl ToSql for &SlotOptions {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if !self.engine.is_empty() {
            fmt!(f, " ENGINE = ", &self.engine);
        }
        if !self.comment.is_empty() {
            fmt!(f, " COMMENT = ", Literal(&self.comment));
        }
        if !self.data_directory.is_empty() {
            fmt!(f, " DATA DIRECTORY = ", Literal(&self.data_directory));
        }
        if !self.index_directory.is_empty() {
            fmt!(f, " INDEX DIRECTORY = ", Literal(&self.index_directory));
        }
        if !self.min_rows.is_empty() {
            fmt!(f, " MIN_ROWS = ", &self.min_rows);
        }
        if !self.max_rows.is_empty() {
            fmt!(f, " MAX_ROWS = ", &self.max_rows);
        }
        if !self.tablespace.is_empty() {
            fmt!(f, " TABLESPACE = ", &self.tablespace);
        }
        if !self.node_group.is_empty() {
            fmt!(f, " NODEGROUP = ", &self.node_group);
        }
    }
}
