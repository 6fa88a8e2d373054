use ddbmap_core::{MethodDef, Param};
use ddbmap_java::Serializer;
use pretty_assertions::assert_eq;

fn marshall_method() -> MethodDef {
    let mut method = MethodDef::new(
        "marshall",
        "Map<String, AttributeValue>",
        Param::new("Person", "obj"),
    );
    method
        .body
        .push("Map<String, AttributeValue> item = new HashMap<>();".to_string());
    method
        .body
        .push("item.put(\"id\", AttributeValue.builder().n(obj.getId()).build());".to_string());
    method.body.push("return item;".to_string());
    method
}

#[test]
fn renders_signature_and_body() {
    let text = Serializer::new().serialize(&marshall_method());

    assert_eq!(
        text,
        "public static Map<String, AttributeValue> marshall(Person obj) {\n\
         \x20   Map<String, AttributeValue> item = new HashMap<>();\n\
         \x20   item.put(\"id\", AttributeValue.builder().n(obj.getId()).build());\n\
         \x20   return item;\n\
         }"
    );
}

#[test]
fn base_indent_prefixes_every_line() {
    let text = Serializer::with_base_indent(4).serialize(&marshall_method());

    for line in text.lines() {
        assert!(line.starts_with("    "), "line not indented: {line:?}");
    }
    assert!(text.starts_with("    public static"));
    assert!(text.ends_with("\n    }"));
}

#[test]
fn chained_statement_continuations_sit_one_level_deeper() {
    let mut method = MethodDef::new("unmarshall", "Person", Param::new("Map<String, AttributeValue>", "item"));
    method.body.push(
        "return Person.builder()\n.withId(item.get(\"id\").n())\n;".to_string(),
    );

    let text = Serializer::new().serialize(&method);

    assert_eq!(
        text,
        "public static Person unmarshall(Map<String, AttributeValue> item) {\n\
         \x20   return Person.builder()\n\
         \x20       .withId(item.get(\"id\").n())\n\
         \x20       ;\n\
         }"
    );
}

#[test]
fn empty_body_renders_signature_only() {
    let method = MethodDef::new("unmarshall", "Person", Param::new("Map<String, AttributeValue>", "item"));
    let text = Serializer::new().serialize(&method);

    assert_eq!(
        text,
        "public static Person unmarshall(Map<String, AttributeValue> item) {\n}"
    );
}
