use juniper::{FieldError, IntoFieldError};
use thiserror::Error;

use crate::kind::Kind;

/// Rejection of a single input by a scalar adapter.
#[derive(Debug, Error)]
pub enum ScalarError {
    #[error("{kind} must be serialized from a Temporal.{kind}.")]
    NotSerializable { kind: Kind },
    #[error("{kind} must be represented as a string.")]
    NotAString { kind: Kind },
    #[error("{kind} must be represented as a Temporal.{kind} or string.")]
    InvalidValue { kind: Kind },
    /// The string did not match the kind's grammar. The message is jiff's.
    #[error("{source}")]
    Parse {
        kind: Kind,
        #[source]
        source: jiff::Error,
    },
}

impl ScalarError {
    pub fn kind(&self) -> Kind {
        match self {
            Self::NotSerializable { kind }
            | Self::NotAString { kind }
            | Self::InvalidValue { kind }
            | Self::Parse { kind, .. } => *kind,
        }
    }
}

impl<S> IntoFieldError<S> for ScalarError {
    fn into_field_error(self) -> FieldError<S> {
        FieldError::new(self, juniper::Value::null())
    }
}

#[derive(Debug, Error)]
pub enum EnvError {
    #[error("time zone database is empty, zoned date-times cannot be resolved")]
    EmptyTimeZoneDatabase,
    #[error("temporal environment is already installed")]
    AlreadyInstalled,
}
