use serde::{Deserialize, Serialize};

/// A single declared field on the target class.
///
/// Fields arrive already resolved and filtered; the name follows the
/// instance-field convention (starts with a lowercase letter) and the type
/// is kept as the declared type name text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field name
    pub name: String,

    /// Declared type name, as written in the source
    pub ty: String,
}

/// How a field is represented in the attribute map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Stored as a numeric attribute (`n`)
    Numeric,
    /// Stored as a string attribute (`s`)
    Text,
    /// Handled by the nested type's own marshall/unmarshall pair
    Nested,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// Classifies this field by its declared type name.
    pub fn kind(&self) -> FieldKind {
        FieldKind::of(&self.ty)
    }
}

impl FieldKind {
    /// Maps a declared type name to its attribute representation.
    ///
    /// The match is exact and case-sensitive. Classification is total: any
    /// type name not on the scalar whitelist falls through to `Nested`.
    pub fn of(ty: &str) -> FieldKind {
        match ty {
            "Double" | "double" | "Float" | "float" | "Integer" | "int" => FieldKind::Numeric,
            "String" => FieldKind::Text,
            _ => FieldKind::Nested,
        }
    }
}
