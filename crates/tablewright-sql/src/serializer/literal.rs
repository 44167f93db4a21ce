use super::{Formatter, ToSql};

/// A single-quoted string literal. Quotes and backslashes are escaped
/// with a backslash.
pub(super) struct Literal<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Literal<S> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push('\'');
        for c in self.0.as_ref().chars() {
            match c {
                '\'' | '\\' => {
                    f.dst.push('\\');
                    f.dst.push(c);
                }
                _ => f.dst.push(c),
            }
        }
        f.dst.push('\'');
    }
}
