mod marshall;
mod unmarshall;

use ddbmap_core::{Model, OptionSet};

/// Type of the attribute container both methods operate on.
pub(crate) const ATTRIBUTE_MAP_TY: &str = "Map<String, AttributeValue>";

pub(crate) struct Expand<'a> {
    /// The model being expanded
    pub(crate) model: &'a Model,

    /// Active generation options
    pub(crate) options: &'a OptionSet,
}
