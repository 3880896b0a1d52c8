//! End-to-end reconstruction scenarios over real trace XML.
//!
//! Each test feeds a complete `--xml-ui` document through the trace parser
//! and the assembler and checks the reconstructed value trees, exercising
//! the full pipeline the driver binary runs.

use jbmc_cex::value::PrimitiveKind;
use jbmc_cex::{CexError, Value, assemble};
use jbmc_cex_trace::parse_trace_doc;

fn assignment(base: &str, lhs: &str, value: &str, ty: &str) -> String {
    format!(
        "<assignment base_name=\"{base}\">\
           <full_lhs>{lhs}</full_lhs>\
           <full_lhs_value>{value}</full_lhs_value>\
           <full_lhs_type>{ty}</full_lhs_type>\
         </assignment>"
    )
}

fn failure_doc(steps: &[String], reason: &str) -> String {
    format!(
        "<cprover><result status=\"FAILURE\"><goto_trace>\
           {}<failure reason=\"{reason}\"/>\
         </goto_trace></result></cprover>",
        steps.concat()
    )
}

#[test]
fn array_argument_with_length_and_patch() {
    // arg0: int[] with .length=2, initial literal {1,2,3}, index 1 patched
    // to 9 -> reconstructed value [1, 9]
    let doc = failure_doc(
        &[
            assignment(
                "arg0",
                "arg0",
                "&amp;dynamic_object1",
                "struct java::array[int]",
            ),
            assignment("dynamic_object1", "dynamic_object1.length", "2", "int"),
            assignment(
                "dynamic_object1",
                "dynamic_object1.data",
                "&amp;dynamic_object2",
                "int *",
            ),
            assignment("dynamic_object2", "dynamic_object2", "{1, 2, 3}", "int [3]"),
            assignment("dynamic_object2", "dynamic_object2[1L]", "9", "int"),
        ],
        "array index out of bounds",
    );
    let cexs = assemble(&parse_trace_doc(&doc).unwrap());
    assert_eq!(cexs.len(), 1);
    assert_eq!(cexs[0].reason, "array index out of bounds");

    let input = &cexs[0].inputs["arg0"];
    assert_eq!(input.type_name, "int[]");
    assert_eq!(
        input.value,
        Value::Array {
            elem_type: "int".to_string(),
            length: 2,
            elements: vec![
                Value::Primitive {
                    kind: PrimitiveKind::Integral,
                    text: "1".to_string()
                },
                Value::Primitive {
                    kind: PrimitiveKind::Integral,
                    text: "9".to_string()
                },
            ],
        }
    );
}

#[test]
fn object_argument_with_class_tag() {
    // arg0: Point with runtime class tag "MyApp::Point" and fields x=1, y=2
    let doc = failure_doc(
        &[
            assignment("arg0", "arg0", "&amp;dynamic_object1", "struct Point { int x; int y; }"),
            assignment(
                "dynamic_object1",
                "dynamic_object1.@java.lang.Object.@class_identifier",
                "\"MyApp::Point\"",
                "struct java.lang.Class *",
            ),
            assignment(
                "dynamic_object1",
                "dynamic_object1.@java.lang.Object.cproverMonitorCount",
                "0",
                "int",
            ),
            assignment("dynamic_object1", "dynamic_object1.x", "1", "int"),
            assignment("dynamic_object1", "dynamic_object1.y", "2", "int"),
        ],
        "assertion failure",
    );
    let cexs = assemble(&parse_trace_doc(&doc).unwrap());
    let input = &cexs[0].inputs["arg0"];
    assert_eq!(input.type_name, "Point");

    let Value::Object { class, fields } = &input.value else {
        panic!("expected object, got {:?}", input.value);
    };
    assert_eq!(class.as_deref(), Some("Point"));
    assert_eq!(fields.len(), 2);
    assert_eq!(input.value.to_json(), serde_json::json!({
        "__class": "Point",
        "x": 1,
        "y": 2,
    }));
}

#[test]
fn string_argument_round_trips() {
    let doc = failure_doc(
        &[
            assignment(
                "arg0",
                "arg0",
                "&amp;dynamic_object1",
                "struct java.lang.String",
            ),
            assignment("dynamic_object1", "dynamic_object1.length", "3", "int"),
            assignment(
                "dynamic_object1",
                "dynamic_object1.data",
                "&amp;((void *)dynamic_object2)",
                "char *",
            ),
            assignment(
                "dynamic_object2",
                "dynamic_object2",
                "{'a', 'b', 'c'}",
                "char [3]",
            ),
        ],
        "assertion failure",
    );
    let cexs = assemble(&parse_trace_doc(&doc).unwrap());
    let input = &cexs[0].inputs["arg0"];
    assert_eq!(input.type_name, "String");
    assert_eq!(
        input.value,
        Value::Str {
            text: "abc".to_string(),
            length: 3
        }
    );
}

#[test]
fn unsupported_argument_among_three_reports_one_error() {
    let doc = failure_doc(
        &[
            assignment("arg0", "arg0", "1", "int"),
            assignment("arg1", "arg1", "2", "some_vendor_type"),
            assignment("arg2", "arg2", "3.5", "double"),
        ],
        "assertion failure",
    );
    let cexs = assemble(&parse_trace_doc(&doc).unwrap());
    assert_eq!(cexs[0].inputs.len(), 2);
    assert!(cexs[0].inputs.contains_key("arg0"));
    assert!(cexs[0].inputs.contains_key("arg2"));
    assert_eq!(cexs[0].skipped.len(), 1);
    assert_eq!(cexs[0].skipped[0].name, "arg1");
    assert_eq!(
        cexs[0].skipped[0].error,
        CexError::UnsupportedType("some_vendor_type".to_string())
    );
}

#[test]
fn assembly_is_idempotent() {
    let doc = failure_doc(
        &[
            assignment(
                "arg0",
                "arg0",
                "&amp;dynamic_object1",
                "struct java::array[int]",
            ),
            assignment("dynamic_object1", "dynamic_object1.length", "2", "int"),
            assignment(
                "dynamic_object1",
                "dynamic_object1.data",
                "&amp;dynamic_object2",
                "int *",
            ),
            assignment("dynamic_object2", "dynamic_object2", "{4, 5}", "int [2]"),
        ],
        "r",
    );
    let traces = parse_trace_doc(&doc).unwrap();
    assert_eq!(assemble(&traces), assemble(&traces));
}

#[test]
fn null_argument_regardless_of_declared_type() {
    let doc = failure_doc(
        &[
            assignment("arg0", "arg0", "null", "struct java.lang.String"),
            assignment("arg1", "arg1", "null", "struct Point { int x; }"),
        ],
        "r",
    );
    let cexs = assemble(&parse_trace_doc(&doc).unwrap());
    assert_eq!(cexs[0].inputs["arg0"].value, Value::Null);
    assert_eq!(cexs[0].inputs["arg1"].value, Value::Null);
}
