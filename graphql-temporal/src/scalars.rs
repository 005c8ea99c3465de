//! juniper scalar types for the temporal kinds.
//!
//! juniper hands both inline literals and variables to `from_input`, so input is
//! checked against the variable rules. Non-string literals are already rejected
//! by `parse_token` when the document is parsed.

use juniper::{GraphQLScalar, InputValue, ParseScalarResult, ScalarToken, ScalarValue, Value};

use crate::{
    adapter::{DURATION, INSTANT, PLAIN_DATE, PLAIN_DATE_TIME, PLAIN_TIME, ZONED_DATE_TIME},
    value::TemporalValue,
};

#[derive(Clone, Debug, GraphQLScalar)]
#[graphql(
    description = "A `Duration` represents a duration of time which can be used in date/time arithmetic.",
    to_output_with = Duration::to_output,
    from_input_with = Duration::from_input,
    parse_token_with = Duration::parse_token,
)]
pub struct Duration(pub jiff::Span);

#[derive(Clone, Debug, GraphQLScalar)]
#[graphql(
    description = "An `Instant` represents a fixed point in time (called \"exact time\"), without regard to calendar or location.",
    to_output_with = Instant::to_output,
    from_input_with = Instant::from_input,
    parse_token_with = Instant::parse_token,
)]
pub struct Instant(pub jiff::Timestamp);

#[derive(Clone, Debug, GraphQLScalar)]
#[graphql(
    description = "A `PlainDate` object represents a calendar date that is not associated with a particular time or time zone.",
    to_output_with = PlainDate::to_output,
    from_input_with = PlainDate::from_input,
    parse_token_with = PlainDate::parse_token,
)]
pub struct PlainDate(pub jiff::civil::Date);

#[derive(Clone, Debug, GraphQLScalar)]
#[graphql(
    description = "A `PlainTime` represents a wall-clock time, with a precision in nanoseconds, and without any time zone.",
    to_output_with = PlainTime::to_output,
    from_input_with = PlainTime::from_input,
    parse_token_with = PlainTime::parse_token,
)]
pub struct PlainTime(pub jiff::civil::Time);

#[derive(Clone, Debug, GraphQLScalar)]
#[graphql(
    description = "A `PlainDateTime` represents a calendar date and wall-clock time that does not carry time zone information.",
    to_output_with = PlainDateTime::to_output,
    from_input_with = PlainDateTime::from_input,
    parse_token_with = PlainDateTime::parse_token,
)]
pub struct PlainDateTime(pub jiff::civil::DateTime);

#[derive(Clone, Debug, GraphQLScalar)]
#[graphql(
    description = "A `ZonedDateTime` is a timezone-aware, calendar-aware date/time object that represents a real event that has happened (or will happen) at a particular exact time from the perspective of a particular region on Earth.",
    to_output_with = ZonedDateTime::to_output,
    from_input_with = ZonedDateTime::from_input,
    parse_token_with = ZonedDateTime::parse_token,
)]
pub struct ZonedDateTime(pub jiff::Zoned);

macro_rules! temporal_scalar {
    ($scalar:ident($inner:ty), $adapter:ident) => {
        impl $scalar {
            pub fn into_inner(self) -> $inner {
                self.0
            }

            fn to_output<S: ScalarValue>(v: &Self) -> Value<S> {
                Value::scalar($adapter.serialize_temporal(&v.0))
            }

            fn from_input<S: ScalarValue>(input: &InputValue<S>) -> Result<Self, String> {
                $adapter
                    .parse_input(input)
                    .map(Self)
                    .map_err(|error| error.to_string())
            }

            fn parse_token<S: ScalarValue>(token: ScalarToken<'_>) -> ParseScalarResult<S> {
                $adapter.parse_token(token)
            }
        }

        impl std::ops::Deref for $scalar {
            type Target = $inner;

            fn deref(&self) -> &$inner {
                &self.0
            }
        }

        impl From<$inner> for $scalar {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl From<$scalar> for $inner {
            fn from(value: $scalar) -> Self {
                value.0
            }
        }

        impl From<$scalar> for TemporalValue {
            fn from(value: $scalar) -> Self {
                value.0.into()
            }
        }
    };
}

temporal_scalar!(Duration(jiff::Span), DURATION);
temporal_scalar!(Instant(jiff::Timestamp), INSTANT);
temporal_scalar!(PlainDate(jiff::civil::Date), PLAIN_DATE);
temporal_scalar!(PlainTime(jiff::civil::Time), PLAIN_TIME);
temporal_scalar!(PlainDateTime(jiff::civil::DateTime), PLAIN_DATE_TIME);
temporal_scalar!(ZonedDateTime(jiff::Zoned), ZONED_DATE_TIME);
