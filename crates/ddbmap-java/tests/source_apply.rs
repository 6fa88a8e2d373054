use ddbmap_java::{JavaSource, RenderedMethod};
use pretty_assertions::assert_eq;

fn marshall_stub(body: &str) -> RenderedMethod {
    RenderedMethod {
        name: "marshall".to_string(),
        text: format!(
            "    public static Map<String, AttributeValue> marshall(Person obj) {{\n\
             \x20       {body}\n\
             \x20   }}"
        ),
    }
}

#[test]
fn appends_when_no_method_exists() {
    let mut source = JavaSource::parse(
        "public class Person {\n    private Integer id;\n}\n",
    )
    .unwrap();

    source.apply(&[marshall_stub("return null;")]).unwrap();

    assert_eq!(
        source.text(),
        "public class Person {\n\
         \x20   private Integer id;\n\
         \n\
         \x20   public static Map<String, AttributeValue> marshall(Person obj) {\n\
         \x20       return null;\n\
         \x20   }\n\
         }\n"
    );
}

#[test]
fn replaces_an_existing_method_in_place() {
    let mut source = JavaSource::parse(
        "public class Person {\n\
         \x20   private Integer id;\n\
         \n\
         \x20   public static Map<String, AttributeValue> marshall(Person obj) {\n\
         \x20       return old;\n\
         \x20   }\n\
         \n\
         \x20   public Integer getId() {\n\
         \x20       return id;\n\
         \x20   }\n\
         }\n",
    )
    .unwrap();

    source.apply(&[marshall_stub("return fresh;")]).unwrap();

    assert!(source.text().contains("return fresh;"));
    assert!(!source.text().contains("return old;"));
    // surrounding members are untouched
    assert!(source.text().contains("public Integer getId()"));
    assert!(source.text().contains("private Integer id;"));
}

#[test]
fn replacement_matches_by_name_only() {
    // a different parameter list still counts as the same method
    let mut source = JavaSource::parse(
        "class Person {\n\
         \x20   public static Person unmarshall(Map<String, AttributeValue> item, int depth) {\n\
         \x20       return null;\n\
         \x20   }\n\
         }",
    )
    .unwrap();

    let replacement = RenderedMethod {
        name: "unmarshall".to_string(),
        text: "    public static Person unmarshall(Map<String, AttributeValue> item) {\n\
               \x20       return fresh;\n\
               \x20   }"
            .to_string(),
    };
    source.apply(&[replacement]).unwrap();

    assert!(source.text().contains("return fresh;"));
    assert!(!source.text().contains("int depth"));
}

#[test]
fn applying_the_same_batch_twice_converges() {
    let original = "public class Person {\n    private Integer id;\n}\n";

    let batch = [
        marshall_stub("return null;"),
        RenderedMethod {
            name: "unmarshall".to_string(),
            text: "    public static Person unmarshall(Map<String, AttributeValue> item) {\n\
                   \x20       return null;\n\
                   \x20   }"
                .to_string(),
        },
    ];

    let mut once = JavaSource::parse(original).unwrap();
    once.apply(&batch).unwrap();

    let mut twice = JavaSource::parse(original).unwrap();
    twice.apply(&batch).unwrap();
    twice.apply(&batch).unwrap();

    assert_eq!(once.text(), twice.text());
}

#[test]
fn calls_to_a_same_named_method_are_not_replaced() {
    let mut source = JavaSource::parse(
        "class Person {\n\
         \x20   private Item cached = other.marshall(this);\n\
         }",
    )
    .unwrap();

    source.apply(&[marshall_stub("return null;")]).unwrap();

    // the field initializer survives; the method is appended
    assert!(source.text().contains("other.marshall(this)"));
    assert!(source
        .text()
        .contains("public static Map<String, AttributeValue> marshall(Person obj)"));
}
