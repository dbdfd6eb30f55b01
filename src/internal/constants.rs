//! Centralized Constants
//!
//! Single source of truth for identifiers and timing used throughout the
//! XPCS driver.
//!
//! # Note
//!
//! Register bit definitions live in [`xpcs_regs`](super::xpcs_regs).

// =============================================================================
// Device Identification
// =============================================================================

/// DesignWare XPCS USXGMII device identifier (`DEVID1 << 16 | DEVID2`)
pub const SYNOPSYS_XPCS_USXGMII_ID: u32 = 0x7996_CED0;

/// DesignWare XPCS USXGMII identifier mask (exact match)
pub const SYNOPSYS_XPCS_USXGMII_MASK: u32 = 0xFFFF_FFFF;

// =============================================================================
// Timing Constants
// =============================================================================

/// Number of reset polls before giving up
pub const RESET_POLL_RETRIES: u32 = 12;

/// Sleep before each reset poll in milliseconds
pub const RESET_POLL_INTERVAL_MS: u32 = 50;

/// Worst-case reset latency in milliseconds (12 x 50 ms)
pub const RESET_TIMEOUT_MS: u32 = RESET_POLL_RETRIES * RESET_POLL_INTERVAL_MS;
