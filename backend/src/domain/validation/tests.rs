//! Regression coverage for the shared field validation primitives.

use rstest::rstest;
use serde_json::json;

use super::*;
use crate::domain::ErrorCode;

const NON_EMPTY: Rule<str> = Rule::new(
    FieldErrorKind::FormatInvalid,
    "blank",
    "This field may not be blank.",
    |value: &str| !value.trim().is_empty(),
);

const SHORT: Rule<str> = Rule::new(
    FieldErrorKind::FormatInvalid,
    "max_length",
    "Too long.",
    |value: &str| value.len() <= 3,
);

fn payload(value: serde_json::Value) -> InputPayload {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[rstest]
fn rules_are_evaluated_independently() {
    let failures = check_rules(&[NON_EMPTY, SHORT], "     ");
    let codes: Vec<_> = failures.iter().map(FieldError::code).collect();
    assert_eq!(codes, vec!["blank", "max_length"]);
}

#[rstest]
fn missing_field_is_required_when_reading_all() {
    let input = payload(json!({}));
    let mut reader = FieldReader::new(&input, true);

    assert!(reader.string("name", &[NON_EMPTY]).is_none());
    let errors = reader.finish();
    assert_eq!(errors.kinds("name"), vec![FieldErrorKind::Required]);
}

#[rstest]
fn missing_field_is_ignored_for_partial_reads() {
    let input = payload(json!({}));
    let mut reader = FieldReader::new(&input, false);

    assert!(reader.string("name", &[NON_EMPTY]).is_none());
    assert!(reader.finish().is_empty());
}

#[rstest]
fn null_is_rejected_even_for_partial_reads() {
    let input = payload(json!({ "name": null }));
    let mut reader = FieldReader::new(&input, false);

    assert!(reader.string("name", &[]).is_none());
    let errors = reader.finish();
    assert_eq!(errors.get("name")[0].code(), "null");
}

#[rstest]
#[case(json!(12))]
#[case(json!(true))]
#[case(json!(["a"]))]
fn non_string_values_are_format_errors(#[case] value: serde_json::Value) {
    let input = payload(json!({ "name": value }));
    let mut reader = FieldReader::new(&input, true);

    assert!(reader.string("name", &[]).is_none());
    assert_eq!(
        reader.finish().kinds("name"),
        vec![FieldErrorKind::FormatInvalid]
    );
}

#[rstest]
#[case(json!(1.5))]
#[case(json!("10"))]
fn integers_reject_floats_and_strings(#[case] value: serde_json::Value) {
    let input = payload(json!({ "capacity": value }));
    let mut reader = FieldReader::new(&input, true);

    assert!(reader.integer("capacity", &[]).is_none());
    assert_eq!(reader.finish().get("capacity")[0].code(), "invalid_integer");
}

#[rstest]
#[case(json!(0))]
#[case(json!(-4))]
#[case(json!("7"))]
fn references_must_be_positive_integers(#[case] value: serde_json::Value) {
    let input = payload(json!({ "companyId": value }));
    let mut reader = FieldReader::new(&input, true);

    assert!(reader.reference("companyId").is_none());
    assert_eq!(
        reader.finish().get("companyId")[0].code(),
        "invalid_reference"
    );
}

#[rstest]
fn booleans_reject_strings() {
    let input = payload(json!({ "active": "Activo" }));
    let mut reader = FieldReader::new(&input, true);

    assert!(reader.boolean("active").is_none());
    assert_eq!(reader.finish().get("active")[0].code(), "invalid_boolean");
}

#[rstest]
fn booleans_reject_explicit_null() {
    let input = payload(json!({ "active": null }));
    let mut reader = FieldReader::new(&input, false);

    assert!(reader.boolean("active").is_none());
    let errors = reader.finish();
    assert_eq!(errors.get("active")[0].code(), "null");
    assert_eq!(errors.kinds("active"), vec![FieldErrorKind::Required]);
}

#[rstest]
fn integers_beyond_i64_reach_the_range_rules() {
    const AT_MOST_TEN: Rule<i64> = Rule::new(
        FieldErrorKind::ValueInvalid,
        "max_value",
        "Too large.",
        |value: &i64| *value <= 10,
    );
    let input = payload(json!({ "capacity": u64::MAX }));
    let mut reader = FieldReader::new(&input, true);

    assert!(reader.integer("capacity", &[AT_MOST_TEN]).is_none());
    assert_eq!(reader.finish().get("capacity")[0].code(), "max_value");
}

#[rstest]
fn booleans_are_optional() {
    let input = payload(json!({}));
    let mut reader = FieldReader::new(&input, true);

    assert!(reader.boolean("active").is_none());
    assert!(reader.finish().is_empty());
}

#[rstest]
fn timestamps_parse_rfc3339_into_utc() {
    let input = payload(json!({ "enteredAt": "2026-03-01T10:00:00+02:00" }));
    let mut reader = FieldReader::new(&input, true);

    let parsed = reader.timestamp("enteredAt").expect("timestamp");
    assert_eq!(parsed.to_rfc3339(), "2026-03-01T08:00:00+00:00");
}

#[rstest]
#[case(json!({}), None)]
#[case(json!({ "exitedAt": null }), Some(None))]
fn nullable_timestamps_distinguish_absent_from_null(
    #[case] body: serde_json::Value,
    #[case] expected: Option<Option<DateTime<Utc>>>,
) {
    let input = payload(body);
    let mut reader = FieldReader::new(&input, true);

    assert_eq!(reader.nullable_timestamp("exitedAt"), expected);
    assert!(reader.finish().is_empty());
}

#[rstest]
fn malformed_timestamps_are_format_errors() {
    let input = payload(json!({ "enteredAt": "10:00:00" }));
    let mut reader = FieldReader::new(&input, true);

    assert!(reader.timestamp("enteredAt").is_none());
    assert_eq!(reader.finish().get("enteredAt")[0].code(), "invalid_datetime");
}

#[rstest]
fn error_set_converts_into_invalid_request() {
    let mut errors = ErrorSet::default();
    errors.push("email", FieldError::required());

    let error = Error::from(errors);
    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    let details = error.details().expect("details");
    assert_eq!(details["fields"]["email"][0]["code"], "required");
    assert_eq!(details["fields"]["email"][0]["kind"], "required");
}

#[rstest]
fn into_result_passes_value_through_when_empty() {
    assert_eq!(ErrorSet::default().into_result(5), Ok(5));
}

#[rstest]
fn strings_are_trimmed_before_rules_run() {
    let input = payload(json!({ "name": "  abc  " }));
    let mut reader = FieldReader::new(&input, true);

    assert_eq!(reader.string("name", &[SHORT]).as_deref(), Some("abc"));
}

#[rstest]
fn raw_strings_keep_surrounding_whitespace() {
    let input = payload(json!({ "secret": " s3 " }));
    let mut reader = FieldReader::new(&input, true);

    assert_eq!(reader.raw_string("secret", &[NON_EMPTY]).as_deref(), Some(" s3 "));
}

#[rstest]
#[case(UpdateMode::Replace, false)]
#[case(UpdateMode::Partial, true)]
fn update_mode_reports_partiality(#[case] mode: UpdateMode, #[case] expected: bool) {
    assert_eq!(mode.is_partial(), expected);
}
