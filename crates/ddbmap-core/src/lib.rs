pub mod method;
pub use method::{MethodDef, Param};

pub mod options;
pub use options::{GenOption, OptionSet};

pub mod schema;
pub use schema::{Field, FieldKind, Model};

pub mod str;
