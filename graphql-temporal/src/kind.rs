use std::fmt::{Debug, Display};

use jiff::{
    Span, Timestamp, Zoned,
    civil::{Date, DateTime, Time},
    fmt::temporal::{DateTimeParser, SpanParser},
};

use crate::{env::TemporalEnv, value::TemporalValue};

static DATE_TIME_PARSER: DateTimeParser = DateTimeParser::new();
static SPAN_PARSER: SpanParser = SpanParser::new();

macro_rules! kind_table {
    ($($(#[$meta:meta])* $variant:ident => $description:literal,)*) => {
        /// The closed set of temporal kinds that can be exposed as GraphQL scalars.
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        pub enum Kind {
            $($(#[$meta])* $variant,)*
        }

        impl Kind {
            /// All kinds, in declaration order.
            pub const ALL: &'static [Kind] = &[$(Self::$variant),*];

            /// The GraphQL scalar name, which is also the Temporal class name.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)*
                }
            }

            pub const fn description(self) -> &'static str {
                match self {
                    $(Self::$variant => $description,)*
                }
            }

            /// Used where the host needs a `'static` message, i.e. lexer errors.
            pub(crate) const fn not_a_string_message(self) -> &'static str {
                match self {
                    $(Self::$variant => concat!(stringify!($variant), " must be represented as a string."),)*
                }
            }
        }
    };
}

kind_table! {
    /// [jiff::Span]
    Duration => "A `Duration` represents a duration of time which can be used in date/time arithmetic.",
    /// [jiff::Timestamp]
    Instant => "An `Instant` represents a fixed point in time (called \"exact time\"), without regard to calendar or location.",
    /// [jiff::civil::Date]
    PlainDate => "A `PlainDate` object represents a calendar date that is not associated with a particular time or time zone.",
    /// [jiff::civil::Time]
    PlainTime => "A `PlainTime` represents a wall-clock time, with a precision in nanoseconds, and without any time zone.",
    /// [jiff::civil::DateTime]
    PlainDateTime => "A `PlainDateTime` represents a calendar date and wall-clock time that does not carry time zone information.",
    /// [jiff::Zoned]
    ZonedDateTime => "A `ZonedDateTime` is a timezone-aware, calendar-aware date/time object that represents a real event that has happened (or will happen) at a particular exact time from the perspective of a particular region on Earth.",
}

impl Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A temporal value type that a [crate::ScalarAdapter] can be built for.
///
/// The grammar and canonical form belong to jiff; implementors only pick the
/// right jiff parser and printer for their kind.
pub trait Temporal: Clone + Debug + Send + Sync + Sized + 'static {
    const KIND: Kind;

    /// Parse the canonical textual form of this kind.
    fn parse_temporal(input: &str, env: &TemporalEnv) -> Result<Self, jiff::Error>;

    /// The canonical textual form of this kind.
    fn to_temporal_string(&self) -> String;

    /// Extract a value of this kind, handing back the value if it is another kind.
    fn from_temporal_value(value: TemporalValue) -> Result<Self, TemporalValue>;

    fn as_temporal_value(value: &TemporalValue) -> Option<&Self>;

    fn into_temporal_value(self) -> TemporalValue;
}

macro_rules! impl_temporal {
    ($ty:ty, $variant:ident, |$input:ident, $env:pat_param| $parse:expr) => {
        impl Temporal for $ty {
            const KIND: Kind = Kind::$variant;

            fn parse_temporal($input: &str, $env: &TemporalEnv) -> Result<Self, jiff::Error> {
                $parse
            }

            fn to_temporal_string(&self) -> String {
                self.to_string()
            }

            fn from_temporal_value(value: TemporalValue) -> Result<Self, TemporalValue> {
                match value {
                    TemporalValue::$variant(value) => Ok(value),
                    other => Err(other),
                }
            }

            fn as_temporal_value(value: &TemporalValue) -> Option<&Self> {
                match value {
                    TemporalValue::$variant(value) => Some(value),
                    _ => None,
                }
            }

            fn into_temporal_value(self) -> TemporalValue {
                TemporalValue::$variant(self)
            }
        }
    };
}

// SpanParser only accepts ISO 8601 durations, not jiff's "friendly" format.
impl_temporal!(Span, Duration, |input, _| SPAN_PARSER.parse_span(input));
impl_temporal!(Timestamp, Instant, |input, _| DATE_TIME_PARSER
    .parse_timestamp(input));
impl_temporal!(Date, PlainDate, |input, _| DATE_TIME_PARSER.parse_date(input));
impl_temporal!(Time, PlainTime, |input, _| DATE_TIME_PARSER.parse_time(input));
impl_temporal!(DateTime, PlainDateTime, |input, _| DATE_TIME_PARSER
    .parse_datetime(input));
impl_temporal!(Zoned, ZonedDateTime, |input, env| DATE_TIME_PARSER
    .parse_zoned_with(env.tzdb(), input));
