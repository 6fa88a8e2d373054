use super::{Expand, ATTRIBUTE_MAP_TY};

use ddbmap_core::str::capitalize;
use ddbmap_core::{Field, FieldKind, GenOption, MethodDef, Param};

impl Expand<'_> {
    /// Builds `unmarshall`: attribute map in, instance out.
    ///
    /// The body style depends on whether the inner-builder option is
    /// active: a single fluent chain through the class's builder, or a
    /// no-arg constructor followed by one setter call per field.
    pub(crate) fn expand_unmarshall(&self) -> MethodDef {
        let mut method = MethodDef::new(
            "unmarshall",
            &self.model.name,
            Param::new(ATTRIBUTE_MAP_TY, "item"),
        );

        if self.options.contains(&GenOption::UseInnerBuilder) {
            method.body.push(self.builder_stmt());
        } else {
            let name = &self.model.name;
            method.body.push(format!("{name} obj = new {name}();"));

            for field in &self.model.fields {
                method.body.push(format!(
                    "obj.set{}({});",
                    capitalize(&field.name),
                    self.unmarshall_expr(field)
                ));
            }

            method.body.push("return obj;".to_string());
        }

        method
    }

    /// Single fluent chain through the class's inner builder, one
    /// `withX` line per field.
    fn builder_stmt(&self) -> String {
        let mut stmt = format!("return {}.builder()", self.model.name);

        for field in &self.model.fields {
            stmt.push('\n');
            stmt.push_str(&format!(
                ".with{}({})",
                capitalize(&field.name),
                self.unmarshall_expr(field)
            ));
        }

        stmt.push('\n');
        stmt.push(';');
        stmt
    }

    /// Value expression read back for a field.
    ///
    /// Nested fields delegate to the nested type's own `unmarshall`,
    /// passing the whole map: attribute keys live in a single flat
    /// namespace shared with the parent.
    fn unmarshall_expr(&self, field: &Field) -> String {
        match field.kind() {
            FieldKind::Numeric => format!("item.get(\"{}\").n()", field.name),
            FieldKind::Text => format!("item.get(\"{}\").s()", field.name),
            FieldKind::Nested => format!("{}.unmarshall(item)", capitalize(&field.name)),
        }
    }
}
