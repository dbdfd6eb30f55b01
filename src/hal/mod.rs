//! Hardware Abstraction Layer
//!
//! Register transport and timing helpers the PCS layer is built on.
//!
//! # Modules
//!
//! - [`mdio`]: Clause 45 MDIO bus trait and address helpers
//! - [`reset`]: MMD soft reset with bounded polling
//!
//! # Delay Integration
//!
//! All types that require delays use `embedded_hal::delay::DelayNs` directly.
//! Pass any delay implementation from your HAL.

pub mod mdio;
pub mod reset;

// Re-export commonly used types
pub use mdio::{MdioBus, c45_address, vendor};
pub use reset::{poll_reset, soft_reset};
