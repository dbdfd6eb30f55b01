//! Error types for the XPCS driver
//!
//! Errors are organized by domain for better diagnostics:
//! - [`ConfigError`]: Probe-time and programming-request failures
//! - [`IoError`]: Register transport and runtime sequencing failures
//!
//! The unified [`Error`] enum wraps both domain errors and is returned
//! by most driver methods.

// =============================================================================
// Configuration Errors
// =============================================================================

/// Probe and programming errors
///
/// These errors are raised before any hardware state is changed, or mark
/// the device as unusable with the requested configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Device identifier matches no catalog entry
    UnsupportedDevice,
    /// Device does not allow the requested interface mode
    UnsupportedInterface,
    /// Speed has no USXGMII speed-select code
    InvalidSpeed,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConfigError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConfigError::UnsupportedDevice => "unsupported device",
            ConfigError::UnsupportedInterface => "unsupported interface",
            ConfigError::InvalidSpeed => "invalid speed",
        }
    }
}

// =============================================================================
// I/O Errors
// =============================================================================

/// Register transport and sequencing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IoError {
    /// Register read or write failed on the bus
    Transport,
    /// Reset bit did not self-clear within the poll budget
    ResetTimeout,
    /// Invalid state for operation (e.g., not probed)
    InvalidState,
}

impl core::fmt::Display for IoError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl IoError {
    /// Returns a human-readable description of the error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            IoError::Transport => "register transport error",
            IoError::ResetTimeout => "reset timed out",
            IoError::InvalidState => "invalid state for operation",
        }
    }
}

// =============================================================================
// Unified Error Type
// =============================================================================

/// This enum wraps all domain-specific errors for unified error handling.
///
/// Match on the inner domain error for specific handling:
/// ```ignore
/// match result {
///     Err(Error::Config(ConfigError::UnsupportedDevice)) => { /* ... */ }
///     Err(Error::Io(IoError::ResetTimeout)) => { /* ... */ }
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration error
    Config(ConfigError),
    /// I/O error
    Io(IoError),
}

impl Error {
    /// Returns a human-readable description of the inner error
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Error::Config(e) => e.as_str(),
            Error::Io(e) => e.as_str(),
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Config(e) => write!(f, "config: {}", e.as_str()),
            Error::Io(e) => write!(f, "io: {}", e.as_str()),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::Io(e)
    }
}

/// Result type alias for XPCS operations
pub type Result<T> = core::result::Result<T, Error>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = core::result::Result<T, ConfigError>;

/// Result type alias for I/O operations
pub type IoResult<T> = core::result::Result<T, IoError>;

// =============================================================================
// Unit Tests
// =============================================================================
