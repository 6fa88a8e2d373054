use super::Field;

use serde::{Deserialize, Serialize};

/// The target class a marshall/unmarshall pair is generated for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    /// Class name
    pub name: String,

    /// Declared fields, in source order. Generated statements preserve
    /// this order.
    pub fields: Vec<Field>,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: vec![],
        }
    }

    /// Appends a field, preserving insertion order.
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push(Field::new(name, ty));
        self
    }
}
