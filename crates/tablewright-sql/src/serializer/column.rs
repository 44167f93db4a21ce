use super::{Formatter, Ident, Literal, ToSql};

use crate::stmt;

use tablewright_core::schema::{is_numeric_type, ColumnDefault, MoveTarget, Virtuality};

impl ToSql for &stmt::ChangeColumn {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let def = &self.def;

        fmt!(f, "CHANGE ", Ident(&self.orig_name), " ", Ident(&def.name), " ", &def.ty);

        if !def.spec.is_empty() {
            fmt!(f, "(", &def.spec, ")");
        }

        if !def.attribute.is_empty() {
            fmt!(f, " ", &def.attribute);
        }

        if !def.collation.is_empty() {
            let charset = match def.collation.split_once('_') {
                Some((charset, _)) => charset,
                None => def.collation.as_str(),
            };
            fmt!(f, " CHARACTER SET ", charset, " COLLATE ", &def.collation);
        }

        // The generation clause sits between collation and nullability so
        // the emitted SQL parses on both flavors.
        if let Some(generated) = &def.generated {
            let keyword = match generated.virtuality {
                Virtuality::Virtual => "VIRTUAL",
                Virtuality::Stored if f.serializer.is_mariadb() => "PERSISTENT",
                Virtuality::Stored => "STORED",
            };
            fmt!(f, " AS (", &generated.expression, ") ", keyword);
        }

        let null = if def.nullable { " NULL" } else { " NOT NULL" };
        fmt!(f, null);

        // Generated columns never carry a DEFAULT.
        if def.generated.is_none() {
            match &def.default {
                ColumnDefault::None => {}
                ColumnDefault::Null => {
                    if def.nullable {
                        fmt!(f, " DEFAULT NULL");
                    }
                }
                ColumnDefault::CurrentTimestamp => fmt!(f, " DEFAULT CURRENT_TIMESTAMP"),
                ColumnDefault::UserDefined(value) => {
                    if is_numeric_type(&def.ty) {
                        fmt!(f, " DEFAULT ", value);
                    } else {
                        fmt!(f, " DEFAULT ", Literal(value));
                    }
                }
            }
        }

        if !def.extra.is_empty() {
            fmt!(f, " ", &def.extra);
        }

        if !def.comment.is_empty() {
            fmt!(f, " COMMENT ", Literal(&def.comment));
        }

        match &def.position {
            Some(MoveTarget::First) => fmt!(f, " FIRST"),
            Some(MoveTarget::After(column)) => fmt!(f, " AFTER ", Ident(column)),
            None => {}
        }
    }
}
