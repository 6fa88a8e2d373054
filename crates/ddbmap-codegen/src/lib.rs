mod expand;

use ddbmap_core::{MethodDef, Model, OptionSet};

/// The marshall/unmarshall pair produced by one generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMethods {
    pub marshall: MethodDef,
    pub unmarshall: MethodDef,
}

/// Generates both mapping methods for a model.
///
/// Generation is a pure function of its inputs. The two methods are
/// independent of one another; neither pass reads the other's output.
pub fn generate(model: &Model, options: &OptionSet) -> GeneratedMethods {
    let expand = expand::Expand { model, options };

    GeneratedMethods {
        marshall: expand.expand_marshall(),
        unmarshall: expand.expand_unmarshall(),
    }
}
