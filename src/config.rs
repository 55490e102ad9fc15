//! Runtime configuration flags
//!
//! A handful of boolean switches, resolved once per process from the
//! environment (or installed programmatically before first use) and read-only
//! afterwards.
//!
//! # Environment Variables
//!
//! | Variable | Default | Effect |
//! |----------|---------|--------|
//! | `TABMATH_USE_PLATFORM_LIBRARY` | off | every function delegates to `std` |
//! | `TABMATH_USE_REDEFINED_LOG` | off | `log`/`log10` use the lookup tables |
//! | `TABMATH_USE_REDEFINED_SQRT` | off | `sqrt` uses the lookup tables |
//!
//! Accepted values are `1`/`true`/`yes`/`on` and `0`/`false`/`no`/`off`
//! (case-insensitive). Anything else is ignored with a warning.

use std::fmt;
use std::sync::OnceLock;

use crate::error::{Error, Result};

/// Environment variable selecting full delegation to the platform library.
pub const ENV_USE_PLATFORM_LIBRARY: &str = "TABMATH_USE_PLATFORM_LIBRARY";
/// Environment variable enabling the table-driven `log`.
pub const ENV_USE_REDEFINED_LOG: &str = "TABMATH_USE_REDEFINED_LOG";
/// Environment variable enabling the table-driven `sqrt`.
pub const ENV_USE_REDEFINED_SQRT: &str = "TABMATH_USE_REDEFINED_SQRT";

/// Process-wide behavior switches.
///
/// The platform `log` and `sqrt` are usually hardware-backed and hard to beat,
/// so their table-driven versions are opt-in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MathConfig {
    /// Bypass the tables entirely and delegate every function, exact and
    /// quick variants alike, to the platform library.
    pub use_platform_library: bool,
    /// Use the table-driven `log` instead of the platform one.
    pub use_redefined_log: bool,
    /// Use the table-driven `sqrt` instead of the platform one.
    pub use_redefined_sqrt: bool,
}

impl MathConfig {
    /// Configuration with every table-driven implementation enabled.
    pub const fn all_redefined() -> Self {
        Self {
            use_platform_library: false,
            use_redefined_log: true,
            use_redefined_sqrt: true,
        }
    }

    /// Configuration delegating everything to the platform library.
    pub const fn platform() -> Self {
        Self {
            use_platform_library: true,
            use_redefined_log: false,
            use_redefined_sqrt: false,
        }
    }

    /// Read the configuration from the environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Unset or unparsable keys keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let flag = |key: &str, default: bool| match lookup(key) {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                tracing::warn!(key, value = %raw, "ignoring unrecognized boolean value");
                default
            }),
            None => default,
        };
        Self {
            use_platform_library: flag(ENV_USE_PLATFORM_LIBRARY, defaults.use_platform_library),
            use_redefined_log: flag(ENV_USE_REDEFINED_LOG, defaults.use_redefined_log),
            use_redefined_sqrt: flag(ENV_USE_REDEFINED_SQRT, defaults.use_redefined_sqrt),
        }
    }

    /// Install this configuration for the process.
    ///
    /// Must happen before the first call of any function reading the
    /// configuration. Installing a value equal to the one already in effect
    /// is a no-op; a different value is rejected.
    pub fn install(self) -> Result<()> {
        let current = *CONFIG.get_or_init(|| self);
        if current == self {
            Ok(())
        } else {
            Err(Error::ConfigConflict {
                current: current.to_string(),
                requested: self.to_string(),
            })
        }
    }
}

impl fmt::Display for MathConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "platform_library={} redefined_log={} redefined_sqrt={}",
            self.use_platform_library, self.use_redefined_log, self.use_redefined_sqrt
        )
    }
}

/// Resolved configuration
static CONFIG: OnceLock<MathConfig> = OnceLock::new();

/// Configuration in effect for this process.
///
/// Resolved from the environment on first call unless
/// [`MathConfig::install`] ran before.
#[inline]
pub fn config() -> &'static MathConfig {
    CONFIG.get_or_init(resolve_from_env)
}

#[cold]
fn resolve_from_env() -> MathConfig {
    let config = MathConfig::from_env();
    tracing::debug!(%config, "resolved math configuration");
    config
}

/// `true` when every function must delegate to the platform library.
#[inline]
pub(crate) fn use_platform() -> bool {
    config().use_platform_library
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
