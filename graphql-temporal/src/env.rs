use std::sync::{LazyLock, OnceLock};

use jiff::tz::TimeZoneDatabase;
use tracing::{debug, warn};

use crate::error::EnvError;

static INSTALLED: OnceLock<TemporalEnv> = OnceLock::new();

// Used by adapters when no environment was installed.
static FALLBACK: LazyLock<TemporalEnv> = LazyLock::new(|| TemporalEnv {
    tzdb: jiff::tz::db().clone(),
});

/// Runtime dependencies of the temporal value library.
///
/// Parsing every kind except `ZonedDateTime` is self-contained. Zoned values
/// resolve their bracketed region through the time zone database held here.
#[derive(Clone, Debug)]
pub struct TemporalEnv {
    tzdb: TimeZoneDatabase,
}

impl TemporalEnv {
    pub fn new(tzdb: TimeZoneDatabase) -> Result<Self, EnvError> {
        if tzdb.is_definitively_empty() {
            warn!("rejected empty time zone database");
            return Err(EnvError::EmptyTimeZoneDatabase);
        }

        Ok(Self { tzdb })
    }

    /// The database jiff discovers on its own (bundled or system zoneinfo).
    pub fn from_system() -> Result<Self, EnvError> {
        Self::new(jiff::tz::db().clone())
    }

    pub fn tzdb(&self) -> &TimeZoneDatabase {
        &self.tzdb
    }

    /// Make this the process-wide environment. Can only succeed once.
    pub fn install(self) -> Result<&'static TemporalEnv, EnvError> {
        let mut installed = false;
        let env = INSTALLED.get_or_init(|| {
            installed = true;
            self
        });

        if installed {
            debug!(tzdb = ?env.tzdb, "installed temporal environment");
            Ok(env)
        } else {
            Err(EnvError::AlreadyInstalled)
        }
    }

    /// The installed environment, or jiff's default database if none was installed.
    pub fn global() -> &'static TemporalEnv {
        match INSTALLED.get() {
            Some(env) => env,
            None => &FALLBACK,
        }
    }
}
