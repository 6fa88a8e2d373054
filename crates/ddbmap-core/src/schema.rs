mod field;
pub use field::{Field, FieldKind};

mod model;
pub use model::Model;
