use amped_core::error::CoreError;
use amped_core::models::trade::Trade;
use amped_core::submission::{normalize_field, FieldValue, InputLimits, Submission};
use serde_json::json;

fn form(pairs: &[(&str, &str)]) -> Submission {
    Submission::from_form_pairs(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string())),
    )
}

#[test]
fn missing_fields_equal_empty_arrays() {
    let limits = InputLimits::default();
    let missing = form(&[]).normalize(&limits).unwrap();
    let empty = form(&[("routes", "[]"), ("devices", "[]"), ("conduit", "[]")])
        .normalize(&limits)
        .unwrap();

    assert_eq!(missing.input, empty.input);
    assert_eq!(missing.input.counts().total(), 0);
}

#[test]
fn text_and_structured_arrays_normalize_identically() {
    let limits = InputLimits::default();
    let array = json!([{"type": "EMT", "length": "100", "conduit": "3/4"}, {"type": "PVC", "length": 40}]);

    let from_text =
        normalize_field("routes", Some(FieldValue::Text(array.to_string())), &limits).unwrap();
    let from_value = normalize_field("routes", Some(FieldValue::Structured(array)), &limits).unwrap();

    assert_eq!(from_text, from_value);
    assert_eq!(from_text.len(), 2);
}

#[test]
fn record_order_is_preserved() {
    let records = normalize_field(
        "devices",
        Some(FieldValue::Text(
            r#"[{"type":"Breaker"},{"type":"Outlet"},{"type":"Switch"}]"#.to_string(),
        )),
        &InputLimits::default(),
    )
    .unwrap();

    let types: Vec<_> = records.iter().map(|r| r.cell("type").unwrap()).collect();
    assert_eq!(types, ["Breaker", "Outlet", "Switch"]);
}

#[test]
fn malformed_json_names_the_field() {
    let err = form(&[("routes", "not json")])
        .normalize(&InputLimits::default())
        .unwrap_err();

    assert_eq!(err.field(), "routes");
    assert!(err.to_string().contains("malformed JSON"));
}

#[test]
fn non_array_json_is_rejected() {
    for text in [r#"{"type":"EMT"}"#, "42", "\"EMT\"", "null"] {
        let err = form(&[("conduit", text)])
            .normalize(&InputLimits::default())
            .unwrap_err();
        assert_eq!(err.field(), "conduit", "input {text}");
    }
}

#[test]
fn non_object_elements_are_rejected() {
    let err = normalize_field(
        "devices",
        Some(FieldValue::Text(r#"[{"type":"Breaker"}, 7]"#.to_string())),
        &InputLimits::default(),
    )
    .unwrap_err();

    let CoreError::InvalidInput { field, reason } = err;
    assert_eq!(field, "devices");
    assert!(reason.contains("element 1"));
}

#[test]
fn first_invalid_field_aborts_the_submission() {
    let err = form(&[("routes", "[]"), ("devices", "[1"), ("conduit", "oops")])
        .normalize(&InputLimits::default())
        .unwrap_err();
    assert_eq!(err.field(), "devices");
}

#[test]
fn blank_text_counts_as_absent() {
    let records =
        normalize_field("routes", Some(FieldValue::Text("   ".to_string())), &InputLimits::default())
            .unwrap();
    assert!(records.is_empty());
}

#[test]
fn record_cap_is_enforced() {
    let limits = InputLimits {
        max_records_per_field: 2,
    };
    let err = normalize_field(
        "routes",
        Some(FieldValue::Structured(json!([{}, {}, {}]))),
        &limits,
    )
    .unwrap_err();
    assert!(err.to_string().contains("too many records"));
}

#[test]
fn json_body_accepts_structured_and_text_fields() {
    let body = json!({
        "routes": [{"type": "EMT"}],
        "devices": "[{\"type\":\"Breaker\"}]",
        "trade_type": "plumbing",
        "project_name": "Warehouse",
    });

    let request = Submission::from_json(body)
        .unwrap()
        .normalize(&InputLimits::default())
        .unwrap();

    assert_eq!(request.input.counts().routes, 1);
    assert_eq!(request.input.counts().devices, 1);
    assert_eq!(request.input.counts().conduit, 0);
    assert_eq!(request.branding.trade, Trade::Plumbing);
    assert_eq!(request.branding.project_name, "Warehouse");
    assert_eq!(request.branding.company_name, "AMPED");
}

#[test]
fn json_body_must_be_an_object() {
    let err = Submission::from_json(json!([1, 2])).unwrap_err();
    assert_eq!(err.field(), "body");
}

#[test]
fn blank_branding_falls_back_to_defaults() {
    let request = form(&[("project_name", "  "), ("trade_type", "carpentry")])
        .normalize(&InputLimits::default())
        .unwrap();
    assert_eq!(request.branding.project_name, "Project");
    assert_eq!(request.branding.trade, Trade::Electrical);
}
