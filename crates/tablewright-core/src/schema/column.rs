use crate::{Error, Result};

use indexmap::IndexMap;

/// The marker the store reports as the captured default of a temporal
/// column that defaults to the current time.
pub const NOW_MARKER: &str = "CURRENT_TIMESTAMP";

/// A single table column, either as reflected from the store or as the
/// desired state of a mutation request.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDescriptor {
    /// The name the column should have once the mutation applies.
    pub name: String,

    /// The name the column currently has in the store. Differs from
    /// `name` when the request renames the column.
    pub orig_name: String,

    /// The storage type token, uppercase (e.g. `VARCHAR`, `INT`).
    pub ty: String,

    /// Length/values text inside the type's parentheses (e.g. `255`,
    /// `10,2`, `'a','b'`). Empty when the type takes none.
    pub spec: String,

    /// Type attribute (e.g. `UNSIGNED`, `UNSIGNED ZEROFILL`, `BINARY`,
    /// `on update CURRENT_TIMESTAMP`). Empty when absent.
    pub attribute: String,

    /// Collation bound to the column. Empty for types that carry none.
    pub collation: String,

    /// Whether the column accepts NULL.
    pub nullable: bool,

    /// The column default, classified by kind.
    pub default: ColumnDefault,

    /// Extra flags reported by the store (e.g. `AUTO_INCREMENT`).
    pub extra: String,

    /// Column comment.
    pub comment: String,

    /// Present when the column value is computed from an expression.
    pub generated: Option<Generated>,

    /// Requested repositioning of the column within the table, if any.
    pub position: Option<MoveTarget>,
}

impl ColumnDescriptor {
    /// Creates a descriptor for a column named `name`, with every other
    /// field at its empty/neutral value.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            orig_name: name.clone(),
            name,
            ty: String::new(),
            spec: String::new(),
            attribute: String::new(),
            collation: String::new(),
            nullable: false,
            default: ColumnDefault::None,
            extra: String::new(),
            comment: String::new(),
            generated: None,
            position: None,
        }
    }

    /// True when any tracked field of `self` differs from `original`, i.e.
    /// when applying `self` over `original` would change the column.
    ///
    /// A requested move target always counts as a difference: the
    /// reflected state never carries one.
    pub fn differs_from(&self, original: &ColumnDescriptor) -> bool {
        self.name != original.name
            || self.ty != original.ty
            || self.spec != original.spec
            || self.attribute != original.attribute
            || self.collation != original.collation
            || self.nullable != original.nullable
            || self.default != original.default
            || self.extra != original.extra
            || self.comment != original.comment
            || self.generated != original.generated
            || self.position.is_some()
    }
}

/// Classification of a column's default source.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ColumnDefault {
    /// No default; the fragment is omitted.
    #[default]
    None,

    /// An explicit `DEFAULT NULL`. Only meaningful for nullable columns.
    Null,

    /// The store's now-marker (`DEFAULT CURRENT_TIMESTAMP`).
    CurrentTimestamp,

    /// A user-supplied literal, rendered quoted per the column type.
    UserDefined(String),
}

impl ColumnDefault {
    /// Classifies a captured raw default as reported by the store.
    ///
    /// The now-marker only classifies as [`ColumnDefault::CurrentTimestamp`]
    /// for temporal types; on any other type the same text is a plain
    /// literal. An absent default on a nullable column is an implicit
    /// `DEFAULT NULL`.
    pub fn classify(raw: Option<&str>, ty: &str, nullable: bool) -> Self {
        match raw {
            None => {
                if nullable {
                    ColumnDefault::Null
                } else {
                    ColumnDefault::None
                }
            }
            Some(value) => {
                if is_temporal_type(ty) && is_now_marker(value) {
                    ColumnDefault::CurrentTimestamp
                } else if value.eq_ignore_ascii_case("NULL") && nullable {
                    ColumnDefault::Null
                } else {
                    ColumnDefault::UserDefined(value.to_string())
                }
            }
        }
    }
}

fn is_now_marker(value: &str) -> bool {
    // MySQL 8 reflects the marker as `CURRENT_TIMESTAMP`, MariaDB as
    // `current_timestamp()`.
    let value = value.trim_end_matches("()");
    value.eq_ignore_ascii_case(NOW_MARKER) || value.eq_ignore_ascii_case("now")
}

/// Whether a column's value is physically stored or computed on access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Virtuality {
    /// Computed on read, not stored.
    Virtual,
    /// Computed on write and stored.
    Stored,
}

/// The generation clause of a generated column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub virtuality: Virtuality,

    /// The generation expression, without surrounding parentheses.
    pub expression: String,
}

/// Where a column should be repositioned within its table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveTarget {
    /// Move to the first position.
    First,
    /// Move directly after the named column.
    After(String),
}

/// True for type tokens whose values are stored as points or spans in time.
pub fn is_temporal_type(ty: &str) -> bool {
    matches!(
        ty.to_ascii_uppercase().as_str(),
        "TIMESTAMP" | "DATETIME" | "DATE" | "TIME" | "YEAR"
    )
}

/// True for type tokens whose literals render unquoted.
pub fn is_numeric_type(ty: &str) -> bool {
    matches!(
        ty.to_ascii_uppercase().as_str(),
        "TINYINT"
            | "SMALLINT"
            | "MEDIUMINT"
            | "INT"
            | "INTEGER"
            | "BIGINT"
            | "DECIMAL"
            | "NUMERIC"
            | "FLOAT"
            | "DOUBLE"
            | "REAL"
            | "BIT"
            | "SERIAL"
    )
}

/// An ordered, name-unique sequence of [`ColumnDescriptor`].
///
/// Insertion order is semantically meaningful: it is the physical column
/// order of the table (current or desired).
#[derive(Debug, Clone, Default)]
pub struct ColumnSet {
    columns: IndexMap<String, ColumnDescriptor>,
}

impl ColumnSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column. Rejects a duplicate name with a validation
    /// error, leaving the set unchanged.
    pub fn insert(&mut self, column: ColumnDescriptor) -> Result<()> {
        if self.columns.contains_key(&column.name) {
            return Err(Error::validation(format!(
                "duplicate column name `{}`",
                column.name
            )));
        }
        self.columns.insert(column.name.clone(), column);
        Ok(())
    }

    /// Builds a set from descriptors in order, enforcing name uniqueness.
    pub fn from_columns(columns: impl IntoIterator<Item = ColumnDescriptor>) -> Result<Self> {
        let mut set = Self::new();
        for column in columns {
            set.insert(column)?;
        }
        Ok(set)
    }

    pub fn get(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Columns in physical order.
    pub fn iter(&self) -> impl Iterator<Item = &ColumnDescriptor> {
        self.columns.values()
    }

    /// Column names in physical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
