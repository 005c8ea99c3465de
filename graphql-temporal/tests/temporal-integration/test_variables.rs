use graphql_temporal::juniper::{InputValue, Variables};
use pretty_assertions::assert_eq;
use serde_json::json;
use test_log::test;

use crate::exec;

fn variables(value: InputValue) -> Variables {
    let mut variables = Variables::new();
    variables.insert("value".to_owned(), value);
    variables
}

fn string(value: &str) -> Variables {
    variables(InputValue::scalar(value.to_owned()))
}

#[test]
fn duration_variable() {
    assert_eq!(
        exec(
            "query ($value: Duration!) { duration(value: $value) durationMonths(value: $value) }",
            string("P2M")
        )
        .unwrap(),
        json!({ "duration": "P2M", "durationMonths": 2 })
    );
}

#[test]
fn duration_variable_requires_designator() {
    assert!(exec("query ($value: Duration!) { duration(value: $value) }", string("2M")).is_err());
}

#[test]
fn instant_variable_requires_time_and_offset() {
    let query = "query ($value: Instant!) { instant(value: $value) }";

    assert_eq!(
        exec(query, string("2020-01-01T00:00:00Z")).unwrap(),
        json!({ "instant": "2020-01-01T00:00:00Z" })
    );
    assert!(exec(query, string("2020-01-01")).is_err());
}

#[test]
fn zoned_variable_requires_region() {
    let query = "query ($value: ZonedDateTime!) { zonedDateTime(value: $value) timeZone(value: $value) }";

    assert_eq!(
        exec(query, string("2020-01-01T00:00:00+10:00[Australia/Brisbane]")).unwrap(),
        json!({
            "zonedDateTime": "2020-01-01T00:00:00+10:00[Australia/Brisbane]",
            "timeZone": "Australia/Brisbane",
        })
    );
    assert!(exec(query, string("2020-01-01T00:00:00+10:00")).is_err());
}

#[test]
fn non_string_variables_are_rejected() {
    let query = "query ($value: PlainDate!) { plainDate(value: $value) }";

    assert!(exec(query, variables(InputValue::scalar(1))).is_err());
    assert!(exec(query, variables(InputValue::scalar(false))).is_err());
    assert!(exec(query, variables(InputValue::null())).is_err());
}

#[test]
fn optional_variable_may_be_null() {
    assert_eq!(
        exec(
            "query ($value: PlainDate) { maybePlainDate(value: $value) }",
            variables(InputValue::null())
        )
        .unwrap(),
        json!({ "maybePlainDate": null })
    );
}
