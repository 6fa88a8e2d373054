pub use ddbmap_codegen::{generate, GeneratedMethods};
pub use ddbmap_core::{Field, FieldKind, GenOption, MethodDef, Model, OptionSet, Param};
pub use ddbmap_java::{JavaSource, RenderedMethod, Serializer};

pub use anyhow::{Error, Result};

/// Indentation of members inside a class body, in spaces.
const MEMBER_INDENT: usize = 4;

/// Generates both mapping methods for the class in `source` and splices
/// them into its body, replacing any previously generated pair.
///
/// The model is taken from the source itself: every candidate field, in
/// declaration order. Use [`apply_model`] to generate for an explicit
/// field selection.
pub fn apply(source: &mut JavaSource, options: &OptionSet) -> Result<()> {
    let mut model = Model::new(source.class_name());
    model.fields = source.fields();

    apply_model(source, &model, options)
}

/// Generates both mapping methods for `model` and splices them into the
/// class body of `source` as one update.
pub fn apply_model(source: &mut JavaSource, model: &Model, options: &OptionSet) -> Result<()> {
    let methods = generate(model, options);
    source.apply(&render(&methods))
}

/// Renders a generated pair for splicing into a class body.
pub fn render(methods: &GeneratedMethods) -> Vec<RenderedMethod> {
    let serializer = Serializer::with_base_indent(MEMBER_INDENT);

    [&methods.marshall, &methods.unmarshall]
        .into_iter()
        .map(|method| RenderedMethod {
            name: method.name.clone(),
            text: serializer.serialize(method),
        })
        .collect()
}
