#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Comma;

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

mod literal;
use literal::Literal;

// Fragment serializers
mod column;
mod name;
mod partition;
mod statement;

use crate::stmt::Statement;

/// Serialize a statement to a SQL string.
#[derive(Debug)]
pub struct Serializer {
    /// The store flavor handles the differences between dialects that
    /// matter here (the keyword for stored generated columns).
    flavor: Flavor,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        stmt.to_sql(&mut fmt);

        ret.push(';');
        ret
    }
}
