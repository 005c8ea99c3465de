use graphql_temporal::juniper::Variables;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_log::test;

use crate::{TestError, exec};

#[test]
fn duration_literal() {
    assert_eq!(
        exec(
            r#"{ duration(value: "P2M") durationMonths(value: "P2M") }"#,
            Variables::new()
        )
        .unwrap(),
        json!({ "duration": "P2M", "durationMonths": 2 })
    );
}

#[test]
fn literals_of_every_kind() {
    let query = r#"{
        instant(value: "2020-01-01T00:00:00Z")
        plainDate(value: "2020-01-01")
        plainTime(value: "01:02:03")
        plainDateTime(value: "2020-01-01T12:30:00")
        zonedDateTime(value: "2020-01-01T00:00:00+10:00[Australia/Brisbane]")
        timeZone(value: "2020-01-01T00:00:00+10:00[Australia/Brisbane]")
    }"#;

    assert_eq!(
        exec(query, Variables::new()).unwrap(),
        json!({
            "instant": "2020-01-01T00:00:00Z",
            "plainDate": "2020-01-01",
            "plainTime": "01:02:03",
            "plainDateTime": "2020-01-01T12:30:00",
            "zonedDateTime": "2020-01-01T00:00:00+10:00[Australia/Brisbane]",
            "timeZone": "Australia/Brisbane",
        })
    );
}

#[test]
fn output_only_field() {
    assert_eq!(
        exec("{ epoch }", Variables::new()).unwrap(),
        json!({ "epoch": "1970-01-01T00:00:00Z" })
    );
}

#[test]
fn null_literal_for_optional_argument() {
    assert_eq!(
        exec("{ maybePlainDate(value: null) }", Variables::new()).unwrap(),
        json!({ "maybePlainDate": null })
    );
}

#[test]
fn malformed_string_literals_are_rejected() {
    for query in [
        r#"{ duration(value: "2M") }"#,
        r#"{ instant(value: "2020-01-01") }"#,
        r#"{ plainDate(value: "2020-01") }"#,
        r#"{ zonedDateTime(value: "2020-01-01T00:00:00+10:00") }"#,
    ] {
        assert!(exec(query, Variables::new()).is_err(), "{query}");
    }
}

#[test]
fn non_string_literals_are_rejected() {
    for query in [
        "{ duration(value: 1) }",
        "{ instant(value: 1.5) }",
        "{ plainDate(value: true) }",
        "{ plainTime(value: null) }",
        "{ plainDateTime(value: { year: 2020 }) }",
        "{ zonedDateTime(value: [\"2020-01-01T00:00:00+10:00[Australia/Brisbane]\"]) }",
    ] {
        assert!(exec(query, Variables::new()).is_err(), "{query}");
    }
}

#[test]
fn escaped_string_literals_are_decoded() {
    let query = r#"{
        duration(value: "P\u0032M")
        zonedDateTime(value: "2020-01-01T00:00:00+10:00[Australia\/Brisbane]")
        timeZone(value: "2020-01-01T00:00:00+10:00[Australia\/Brisbane]")
    }"#;

    assert_eq!(
        exec(query, Variables::new()).unwrap(),
        json!({
            "duration": "P2M",
            "zonedDateTime": "2020-01-01T00:00:00+10:00[Australia/Brisbane]",
            "timeZone": "Australia/Brisbane",
        })
    );
}

#[test]
fn scalar_errors_become_field_errors() {
    assert_eq!(
        exec(
            r#"{ parsedDuration(text: "P2M") serializedDuration(value: "P2M") }"#,
            Variables::new()
        )
        .unwrap(),
        json!({ "parsedDuration": "P2M", "serializedDuration": "P2M" })
    );

    match exec("{ serializedDuration }", Variables::new()) {
        Err(TestError::Execution(messages)) => assert_eq!(
            messages,
            ["Duration must be serialized from a Temporal.Duration."]
        ),
        other => panic!("unexpected result: {other:?}"),
    }

    match exec(r#"{ parsedDuration(text: "2M") }"#, Variables::new()) {
        Err(TestError::Execution(messages)) => assert_eq!(messages.len(), 1),
        other => panic!("unexpected result: {other:?}"),
    }
}
