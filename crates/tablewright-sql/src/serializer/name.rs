use super::{Formatter, Ident, ToSql};

use crate::stmt;

impl ToSql for &stmt::Name {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let mut s = "";
        for part in &self.0 {
            fmt!(f, s, Ident(part));
            s = ".";
        }
    }
}
