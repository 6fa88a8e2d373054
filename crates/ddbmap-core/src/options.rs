use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// The set of generation options active for one invocation.
///
/// Unordered set semantics with deterministic iteration order.
pub type OptionSet = IndexSet<GenOption>;

/// Toggles affecting the shape of the generated methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenOption {
    /// Construct unmarshalled instances through the class's fluent inner
    /// builder instead of a no-arg constructor plus setters.
    UseInnerBuilder,
}

impl GenOption {
    /// All known options, in display order.
    pub const ALL: &'static [GenOption] = &[GenOption::UseInnerBuilder];

    /// Stable identifier used in config files and on the command line.
    pub fn property(self) -> &'static str {
        match self {
            GenOption::UseInnerBuilder => "use_inner_builder",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GenOption::UseInnerBuilder => "Unmarshall with inner builder",
        }
    }

    pub fn tooltip(self) -> &'static str {
        match self {
            GenOption::UseInnerBuilder => "Use fluent builder pattern in un-marshalling operation.",
        }
    }

    /// Looks up an option by its identifier.
    ///
    /// Unrecognized identifiers map to `None`; callers treat them as
    /// no-ops rather than errors.
    pub fn from_property(property: &str) -> Option<GenOption> {
        GenOption::ALL
            .iter()
            .copied()
            .find(|opt| opt.property() == property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_round_trip() {
        for opt in GenOption::ALL {
            assert_eq!(GenOption::from_property(opt.property()), Some(*opt));
        }
    }

    #[test]
    fn unrecognized_property_is_none() {
        assert_eq!(GenOption::from_property("use_outer_builder"), None);
        assert_eq!(GenOption::from_property(""), None);
    }

    #[test]
    fn option_set_deduplicates() {
        let mut options = OptionSet::new();
        options.insert(GenOption::UseInnerBuilder);
        options.insert(GenOption::UseInnerBuilder);
        assert_eq!(options.len(), 1);
    }
}
