//! Physical Coding Sublayer
//!
//! Link management for the Synopsys DesignWare XPCS.
//!
//! # Components
//!
//! - [`catalog`]: Known device variants and their capabilities
//! - [`modes`]: Link mode and pause flag sets
//! - [`fault`]: Link status and fault monitor
//! - [`c73`]: Clause 73 advertisement, completion and resolution
//! - [`usxgmii`]: USXGMII speed programming
//! - [`generic`]: [`PcsOps`] trait and [`LinkState`]
//! - [`xpcs`]: The [`Xpcs`] controller
//!
//! # Poll Order
//!
//! Each [`PcsOps::get_state`] call samples link status first, then checks
//! for faults. Only a healthy device with link (and, when enabled, completed
//! negotiation) has its partner abilities read and resolved.

pub mod c73;
pub mod catalog;
pub mod fault;
pub mod generic;
pub mod modes;
pub mod usxgmii;
pub mod xpcs;

pub use c73::{C73Pages, Resolution, max_usxgmii_speed};
pub use catalog::{XPCS_CATALOG, XpcsId};
pub use fault::{Advisory, Fault, FaultResult};
pub use generic::{LinkState, PcsOps, validate};
pub use modes::{LinkModes, Pause};
pub use xpcs::Xpcs;
