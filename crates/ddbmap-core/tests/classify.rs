use ddbmap_core::{Field, FieldKind};

// ---------------------------------------------------------------------------
// Scalar whitelist
// ---------------------------------------------------------------------------

#[test]
fn numeric_whitelist() {
    for ty in ["Double", "double", "Float", "float", "Integer", "int"] {
        assert_eq!(FieldKind::of(ty), FieldKind::Numeric, "ty={ty}");
    }
}

#[test]
fn string_is_text() {
    assert_eq!(FieldKind::of("String"), FieldKind::Text);
}

// ---------------------------------------------------------------------------
// Everything else delegates
// ---------------------------------------------------------------------------

#[test]
fn unknown_types_are_nested() {
    for ty in ["Address", "List", "Long", "boolean", "BigDecimal", ""] {
        assert_eq!(FieldKind::of(ty), FieldKind::Nested, "ty={ty}");
    }
}

#[test]
fn match_is_case_sensitive() {
    assert_eq!(FieldKind::of("integer"), FieldKind::Nested);
    assert_eq!(FieldKind::of("DOUBLE"), FieldKind::Nested);
    assert_eq!(FieldKind::of("string"), FieldKind::Nested);
}

#[test]
fn field_kind_uses_declared_type() {
    assert_eq!(Field::new("id", "Integer").kind(), FieldKind::Numeric);
    assert_eq!(Field::new("name", "String").kind(), FieldKind::Text);
    assert_eq!(Field::new("address", "Address").kind(), FieldKind::Nested);
}
