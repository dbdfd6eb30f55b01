//! Core driver components shared by the PCS layer.
//!
//! - [`config`] - Link configuration types and builder patterns
//! - [`error`] - Error types and result aliases
//!
//! # Example
//!
//! ```ignore
//! use ph_xpcs::driver::{LinkConfig, Pause};
//!
//! let config = LinkConfig::new()
//!     .with_autoneg(true)
//!     .with_pause(Pause::SYM);
//! ```

// Submodules
pub mod config;
pub mod error;

// Re-exports for convenience
pub use crate::pcs::modes::Pause;
pub use config::{Duplex, LinkConfig, PcsState, PhyInterface, Speed};
pub use error::{ConfigError, ConfigResult, Error, IoError, IoResult, Result};
