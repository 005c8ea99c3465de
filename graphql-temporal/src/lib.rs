#![forbid(unsafe_code)]

//! GraphQL scalars for jiff temporal values.
//!
//! Each of the six temporal kinds has a static [ScalarAdapter] (for hosts
//! that drive serialization themselves) and a juniper scalar type (for
//! juniper schemas). Both delegate all grammar to jiff.

use tracing::info;

pub mod adapter;
pub mod env;
pub mod error;
pub mod kind;
pub mod scalars;
pub mod sdl;
pub mod value;

pub use adapter::{
    DURATION, DynAdapter, INSTANT, PLAIN_DATE, PLAIN_DATE_TIME, PLAIN_TIME, ScalarAdapter,
    ZONED_DATE_TIME,
};
pub use env::TemporalEnv;
pub use error::{EnvError, ScalarError};
pub use kind::{Kind, Temporal};
pub use scalars::{Duration, Instant, PlainDate, PlainDateTime, PlainTime, ZonedDateTime};
pub use value::{BoundaryValue, TemporalValue};

pub mod juniper {
    pub use ::juniper::*;
}

pub use ::jiff;

/// Resolve the system time zone database and install it for all adapters.
///
/// Intended to be called once at startup, so that a missing database is
/// reported before the first request.
pub fn init() -> Result<&'static TemporalEnv, EnvError> {
    let env = TemporalEnv::from_system()?.install()?;
    info!("temporal scalars initialized");
    Ok(env)
}
