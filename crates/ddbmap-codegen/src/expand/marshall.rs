use super::{Expand, ATTRIBUTE_MAP_TY};

use ddbmap_core::str::capitalize;
use ddbmap_core::{Field, FieldKind, MethodDef, Param};

impl Expand<'_> {
    /// Builds `marshall`: instance in, attribute map out.
    pub(crate) fn expand_marshall(&self) -> MethodDef {
        let mut method = MethodDef::new(
            "marshall",
            ATTRIBUTE_MAP_TY,
            Param::new(&self.model.name, "obj"),
        );

        method
            .body
            .push(format!("{ATTRIBUTE_MAP_TY} item = new HashMap<>();"));

        for field in &self.model.fields {
            method.body.push(format!(
                "item.put(\"{}\", {});",
                field.name,
                self.marshall_expr(field)
            ));
        }

        method.body.push("return item;".to_string());

        method
    }

    /// Value expression stored under the field's key.
    fn marshall_expr(&self, field: &Field) -> String {
        let name = capitalize(&field.name);

        match field.kind() {
            FieldKind::Numeric => format!("AttributeValue.builder().n(obj.get{name}()).build()"),
            FieldKind::Text => format!("AttributeValue.builder().s(obj.get{name}()).build()"),
            FieldKind::Nested => format!("{name}.marshall(obj.get{name}())"),
        }
    }
}
