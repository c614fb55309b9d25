use std::path::PathBuf;

use expect_test::expect;

use super::*;
use crate::config::ExportSettings;

fn fixture_model() -> SymbolModel {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/basic");
    SymbolModel::open(&ExportSettings::new(root)).expect("fixture export loads")
}

#[test]
fn text_outline_lists_namespaces_classes_and_functions() {
    let model = fixture_model();
    let text = render_text(&model, &OutlineSettings::default()).expect("outline renders");
    expect![[r#"
        namespace A
          namespace A::B
          class A::Widget
            Widget()
            void resize(int width, int height)
            B::Point origin(bool _)
        namespace A::B
          struct A::B::Point
    "#]]
    .assert_eq(&text);
}

#[test]
fn text_outline_with_locations_and_no_functions() {
    let model = fixture_model();
    let settings = OutlineSettings {
        functions: false,
        locations: true,
        ..OutlineSettings::default()
    };
    let text = render_text(&model, &settings).expect("outline renders");
    expect![[r#"
        namespace A (include/a/widget.h:3:1)
          namespace A::B (include/a/point.h:5:1)
          class A::Widget (include/a/widget.h:6:1)
        namespace A::B (include/a/point.h:5:1)
          struct A::B::Point (include/a/point.h:7:1)
    "#]]
    .assert_eq(&text);
}

#[test]
fn json_outline_carries_ids_and_signatures() {
    let model = fixture_model();
    let settings = OutlineSettings {
        format: OutlineFormat::Json,
        ..OutlineSettings::default()
    };
    let json: serde_json::Value =
        serde_json::from_str(&render(&model, &settings).expect("outline renders")).expect("valid JSON");

    let namespaces = json.as_array().expect("top level is a list");
    assert_eq!(namespaces.len(), 2);
    assert_eq!(namespaces[0]["id"], "namespace_a");
    assert_eq!(namespaces[0]["name"], "/A");
    assert_eq!(namespaces[0]["namespaces"][0], "/A/B");
    assert!(namespaces[0].get("location").is_none());

    let widget = &namespaces[0]["classes"][0];
    assert_eq!(widget["kind"], "class");
    let functions = widget["functions"].as_array().expect("functions list");
    assert_eq!(functions.len(), 3);
    assert_eq!(functions[1]["name"], "resize");
    assert_eq!(functions[1]["params"][0]["name"], "width");
    assert_eq!(functions[1]["params"][0]["type"]["display"], "int");
    assert_eq!(functions[2]["return_type"], "B::Point");
    assert_eq!(functions[2]["params"][0]["name"], serde_json::Value::Null);
    assert_eq!(functions[0]["return_type"], serde_json::Value::Null);

    let point = &namespaces[1]["classes"][0];
    assert_eq!(point["kind"], "struct");
    assert!(point.get("functions").is_none(), "empty function lists are omitted");
}

#[test]
fn signature_omits_missing_return_type() {
    let model = fixture_model();
    let widget = model.resolve(&RefId::new("class_a_1_1_widget")).expect("widget is known");
    let functions = widget.as_class().expect("class").member_functions().expect("members build");
    let signatures: Vec<_> = functions.iter().map(signature).collect();
    assert_eq!(signatures, ["Widget()", "void resize(int width, int height)", "B::Point origin(bool _)"]);
}
