use std::marker::PhantomData;

use jiff::{
    Span, Timestamp, Zoned,
    civil::{Date, DateTime, Time},
};
use juniper::{
    DefaultScalarValue, InputValue, ParseError, ParseScalarResult, ParseScalarValue, ScalarToken,
    ScalarValue,
};
use tracing::{debug, trace};

use crate::{
    env::TemporalEnv,
    error::ScalarError,
    kind::{Kind, Temporal},
    value::{BoundaryValue, TemporalValue, input_shape},
};

pub static DURATION: ScalarAdapter<'static, Span> = ScalarAdapter::new();
pub static INSTANT: ScalarAdapter<'static, Timestamp> = ScalarAdapter::new();
pub static PLAIN_DATE: ScalarAdapter<'static, Date> = ScalarAdapter::new();
pub static PLAIN_TIME: ScalarAdapter<'static, Time> = ScalarAdapter::new();
pub static PLAIN_DATE_TIME: ScalarAdapter<'static, DateTime> = ScalarAdapter::new();
pub static ZONED_DATE_TIME: ScalarAdapter<'static, Zoned> = ScalarAdapter::new();

/// GraphQL scalar descriptor for one temporal kind.
///
/// Every operation is a pure function of its input. Grammar and canonical
/// formatting are jiff's; the adapter only decides which inputs reach jiff
/// and turns rejections into [ScalarError]s.
pub struct ScalarAdapter<'e, T> {
    env: Option<&'e TemporalEnv>,
    temporal: PhantomData<fn() -> T>,
}

impl<T> Clone for ScalarAdapter<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ScalarAdapter<'_, T> {}

impl<T: Temporal> ScalarAdapter<'static, T> {
    /// An adapter that uses [TemporalEnv::global].
    pub const fn new() -> Self {
        Self {
            env: None,
            temporal: PhantomData,
        }
    }
}

impl<T: Temporal> Default for ScalarAdapter<'static, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'e, T: Temporal> ScalarAdapter<'e, T> {
    pub const fn with_env(env: &'e TemporalEnv) -> Self {
        Self {
            env: Some(env),
            temporal: PhantomData,
        }
    }

    pub const fn kind(&self) -> Kind {
        T::KIND
    }

    pub const fn name(&self) -> &'static str {
        T::KIND.name()
    }

    pub const fn description(&self) -> &'static str {
        T::KIND.description()
    }

    /// Output a value of unchecked type to the wire.
    pub fn serialize(&self, value: &BoundaryValue) -> Result<String, ScalarError> {
        if let BoundaryValue::Temporal(temporal) = value {
            if let Some(value) = T::as_temporal_value(temporal) {
                return Ok(self.serialize_temporal(value));
            }
        }

        let error = ScalarError::NotSerializable { kind: T::KIND };
        Err(self.rejected(error, value.shape()))
    }

    pub fn serialize_temporal(&self, value: &T) -> String {
        value.to_temporal_string()
    }

    /// Parse an inline literal from a query document.
    pub fn parse_literal<S: ScalarValue>(&self, node: &InputValue<S>) -> Result<T, ScalarError> {
        let string = match node {
            InputValue::Scalar(scalar) => scalar.as_str(),
            _ => None,
        };

        let Some(input) = string else {
            let error = ScalarError::NotAString { kind: T::KIND };
            return Err(self.rejected(error, input_shape(node)));
        };

        self.parse_str(input)
    }

    /// Lexer stage of literal parsing: only string tokens are let through.
    ///
    /// String tokens are raw source text, so escape sequences are decoded the
    /// way juniper's built-in `String` scalar decodes them.
    pub fn parse_token<S: ScalarValue>(&self, token: ScalarToken<'_>) -> ParseScalarResult<S> {
        if let ScalarToken::String(_) = token {
            <String as ParseScalarValue<S>>::from_str(token)
        } else {
            debug!(kind = %T::KIND, "rejected non-string token");
            let message = T::KIND.not_a_string_message();
            Err(ParseError::ExpectedScalarError(message))
        }
    }

    /// Parse a variable value.
    ///
    /// A value that already has the right kind is returned as is.
    pub fn parse_value(&self, value: BoundaryValue) -> Result<T, ScalarError> {
        let error = ScalarError::InvalidValue { kind: T::KIND };
        match value {
            BoundaryValue::Temporal(temporal) => match T::from_temporal_value(temporal) {
                Ok(value) => Ok(value),
                Err(other) => Err(self.rejected(error, other.kind().name())),
            },
            BoundaryValue::String(input) => self.parse_str(&input),
            other => Err(self.rejected(error, other.shape())),
        }
    }

    /// [Self::parse_value] for a host input value.
    pub fn parse_input<S: ScalarValue>(&self, input: &InputValue<S>) -> Result<T, ScalarError> {
        self.parse_value(BoundaryValue::from(input))
    }

    pub fn parse_str(&self, input: &str) -> Result<T, ScalarError> {
        match T::parse_temporal(input, self.env()) {
            Ok(value) => {
                trace!(kind = %T::KIND, input, "parsed");
                Ok(value)
            }
            Err(source) => {
                debug!(kind = %T::KIND, input, %source, "unparseable");
                Err(ScalarError::Parse {
                    kind: T::KIND,
                    source,
                })
            }
        }
    }

    fn env(&self) -> &TemporalEnv {
        match self.env {
            Some(env) => env,
            None => TemporalEnv::global(),
        }
    }

    fn rejected(&self, error: ScalarError, shape: &str) -> ScalarError {
        debug!(kind = %T::KIND, shape, "{error}");
        error
    }
}

/// A [ScalarAdapter] with its kind erased.
pub trait DynAdapter: Send + Sync {
    fn kind(&self) -> Kind;

    fn name(&self) -> &'static str {
        self.kind().name()
    }

    fn description(&self) -> &'static str {
        self.kind().description()
    }

    fn serialize(&self, value: &BoundaryValue) -> Result<String, ScalarError>;

    fn parse_literal(
        &self,
        node: &InputValue<DefaultScalarValue>,
    ) -> Result<TemporalValue, ScalarError>;

    fn parse_value(&self, value: BoundaryValue) -> Result<TemporalValue, ScalarError>;
}

impl<T: Temporal> DynAdapter for ScalarAdapter<'_, T> {
    fn kind(&self) -> Kind {
        T::KIND
    }

    fn serialize(&self, value: &BoundaryValue) -> Result<String, ScalarError> {
        ScalarAdapter::serialize(self, value)
    }

    fn parse_literal(
        &self,
        node: &InputValue<DefaultScalarValue>,
    ) -> Result<TemporalValue, ScalarError> {
        ScalarAdapter::parse_literal(self, node).map(T::into_temporal_value)
    }

    fn parse_value(&self, value: BoundaryValue) -> Result<TemporalValue, ScalarError> {
        ScalarAdapter::parse_value(self, value).map(T::into_temporal_value)
    }
}

impl Kind {
    /// The static adapter of this kind.
    pub fn adapter(self) -> &'static dyn DynAdapter {
        match self {
            Self::Duration => &DURATION,
            Self::Instant => &INSTANT,
            Self::PlainDate => &PLAIN_DATE,
            Self::PlainTime => &PLAIN_TIME,
            Self::PlainDateTime => &PLAIN_DATE_TIME,
            Self::ZonedDateTime => &ZONED_DATE_TIME,
        }
    }
}
