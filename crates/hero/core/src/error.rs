//! Common error infrastructure for hero-core.
//!
//! Resolvers never fail: a missing ability, item, or table row is reported as
//! a neutral value (zero bonus, `false`, `None`). Errors exist only at the
//! edges, when a required oracle was not wired into the [`crate::Env`] or a
//! configuration is unusable. Each of those error enums implements
//! [`HeroError`] so hosts can classify them uniformly.

/// Severity level of an error, used for categorization and logging priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input supplied by the host, should not retry without changes.
    ///
    /// Examples: zero TTL in a config file, zero actor capacity
    Validation,

    /// Host wiring is incomplete and queries depending on it cannot run.
    ///
    /// Examples: unit statistics oracle absent from the environment
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the error indicates broken host wiring.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all hero-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who must act (host config vs host wiring)
/// - Return stable, upper-case codes from `error_code` for log filtering
pub trait HeroError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
