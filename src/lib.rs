//! DesignWare XPCS Driver
//!
//! A `no_std`, `no_alloc` Rust driver for link management of the Synopsys
//! DesignWare XPCS (10G Physical Coding Sublayer) in USXGMII mode.
//!
//! The driver probes the device, runs IEEE 802.3 Clause 73 auto-negotiation,
//! watches for fault conditions and recovers from them with a reset and
//! renegotiation, and programs the negotiated rate into the USXGMII
//! replicator.
//!
//! # Architecture
//!
//! The driver is organized into three layers:
//!
//! 1. **PCS Layer** ([`pcs`]): The [`Xpcs`] controller behind the [`PcsOps`]
//!    operation set, plus the catalog, fault monitor, Clause 73 engine and
//!    USXGMII speed programming it is built from
//! 2. **Driver Layer** ([`driver`]): Configuration and error types
//! 3. **HAL Layer** ([`hal`]): Clause 45 MDIO bus trait and MMD soft reset
//!
//! ## Standard Compliance
//!
//! - **IEEE 802.3 Clause 45**: MMD register addressing and status layout
//! - **IEEE 802.3 Clause 73**: Base page advertisement and selector field
//! - **Synopsys DWC XPCS**: Vendor register bank, USXGMII speed select
//!
//! # Supported Devices
//!
//! - DesignWare XPCS USXGMII (`0x7996_CED0`)
//!
//! Further variants can be described with [`XpcsId`] entries and handed to
//! [`Xpcs::with_catalog`].
//!
//! # Features
//!
//! - `defmt`: Enable defmt formatting for public types and debug logging
//!
//! # Example
//!
//! ```ignore
//! use ph_xpcs::{LinkConfig, PcsOps, PhyInterface, Xpcs};
//! use ph_xpcs::hal::MdioBus;
//! use embedded_hal::delay::DelayNs;
//!
//! // Your MDIO bus and delay implementations
//! let mut mdio = /* your MdioBus implementation */;
//! let delay = /* your DelayNs implementation */;
//!
//! let mut xpcs = Xpcs::with_reporter(0, delay, |severity, msg: &str| {
//!     log_line(severity, msg);
//! });
//!
//! xpcs.probe(&mut mdio, PhyInterface::Usxgmii)?;
//! xpcs.configure(&mut mdio, &LinkConfig::new())?;
//!
//! loop {
//!     let state = xpcs.get_state(&mut mdio);
//!     if state.is_resolved() {
//!         xpcs.link_up(&mut mdio, state.speed)?;
//!         break;
//!     }
//!     delay_ms(100);
//! }
//! ```
//!
//! # Blocking
//!
//! Every operation is synchronous. The only sleep is the fault-recovery
//! reset poll: 12 polls at 50 ms, so at most 600 ms inside one
//! [`PcsOps::get_state`] call.

#![no_std]
#![deny(missing_docs)]
#![deny(unsafe_code)]
// Clippy lint levels live here and in Cargo.toml [lints].
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::mod_module_files,
    clippy::self_named_module_files,
    clippy::similar_names,
    clippy::too_many_arguments,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    clippy::type_complexity,
    clippy::must_use_candidate,
    clippy::assertions_on_constants,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    clippy::cast_lossless,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::items_after_statements
)]

// =============================================================================
// Modules
// =============================================================================

pub mod driver;
pub mod hal;
pub mod pcs;
pub mod report;

// Internal implementation details (pub(crate) only)
mod internal;

// Short path used throughout the crate
pub(crate) use driver::error;

// Test utilities (only available during testing)
#[cfg(test)]
pub mod test_utils;

// =============================================================================
// Re-exports
// =============================================================================

pub use driver::config::{Duplex, LinkConfig, PcsState, PhyInterface, Speed};
pub use driver::error::{ConfigError, ConfigResult, Error, IoError, IoResult, Result};
pub use pcs::{
    Advisory, Fault, FaultResult, LinkModes, LinkState, Pause, PcsOps, Resolution, XpcsId, Xpcs,
};
pub use report::{NoopReporter, Reporter, Severity};

/// Shared driver constants.
///
/// These are grouped into a dedicated module to keep the top-level facade
/// focused on driver types.
pub mod constants {
    pub use crate::internal::constants::{
        // Timing
        RESET_POLL_INTERVAL_MS,
        RESET_POLL_RETRIES,
        RESET_TIMEOUT_MS,
        // Device identification
        SYNOPSYS_XPCS_USXGMII_ID,
        SYNOPSYS_XPCS_USXGMII_MASK,
    };
}
