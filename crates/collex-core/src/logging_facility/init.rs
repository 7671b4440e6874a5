//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility. The
//! profile selects the output format; the standard `RUST_LOG` variable, when
//! set, overrides the profile's default filter.

use std::str::FromStr;
use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Environment variable read by [`Profile::from_env`]
pub const PROFILE_ENV_VAR: &str = "COLLEX_LOG_PROFILE";

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// Human-readable output, `collex=debug`
    #[default]
    Development,
    /// JSON structured output, `collex=info`
    Production,
    /// Bare registry; tests install their own capture layer
    Test,
}

impl Profile {
    /// Read the profile from `COLLEX_LOG_PROFILE`, falling back to
    /// `Development` when unset or unrecognised
    pub fn from_env() -> Self {
        std::env::var(PROFILE_ENV_VAR)
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    fn default_directive(self) -> &'static str {
        match self {
            Profile::Development => "collex=debug",
            Profile::Production => "collex=info",
            Profile::Test => "collex=trace",
        }
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Profile::Development),
            "production" | "prod" => Ok(Profile::Production),
            "test" => Ok(Profile::Test),
            other => Err(format!("unknown logging profile: {}", other)),
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Only the first call has an effect; later calls are no-ops.
///
/// ```
/// use collex_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(profile.default_directive()));
        match profile {
            Profile::Development => {
                tracing_subscriber::fmt().with_env_filter(filter).init();
            }
            Profile::Production => {
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter)
                    .init();
            }
            Profile::Test => {
                // Test capture is installed separately via init_test_capture()
                tracing_subscriber::registry().init();
            }
        }
    });
}
