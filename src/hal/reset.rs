//! Reset Controller HAL
//!
//! Soft reset of a Clause 45 MMD. The reset bit in CTRL1 self-clears once
//! the device has finished; this module polls for that with a fixed budget
//! of [`RESET_POLL_RETRIES`] polls spaced [`RESET_POLL_INTERVAL_MS`] apart.

use embedded_hal::delay::DelayNs;

use crate::error::{IoError, Result};
use crate::hal::mdio::{MdioBus, read_mmd, write_mmd};
use crate::internal::constants::{RESET_POLL_INTERVAL_MS, RESET_POLL_RETRIES};
use crate::internal::xpcs_regs::{ctrl1, reg};

/// Start a soft reset of device `mmd` and wait for it to complete
///
/// Returns [`IoError::ResetTimeout`] if the reset bit is still set after
/// the last poll.
pub fn soft_reset<M: MdioBus, D: DelayNs>(
    mdio: &mut M,
    delay: &mut D,
    addr: u8,
    mmd: u8,
) -> Result<()> {
    write_mmd(mdio, addr, mmd, reg::CTRL1, ctrl1::RESET)?;
    poll_reset(mdio, delay, addr, mmd)
}

/// Wait for the CTRL1 reset bit of device `mmd` to self-clear
///
/// Each poll sleeps first and then reads, so a device that clears the bit
/// on the n-th read costs n × 50 ms.
pub fn poll_reset<M: MdioBus, D: DelayNs>(
    mdio: &mut M,
    delay: &mut D,
    addr: u8,
    mmd: u8,
) -> Result<()> {
    for _ in 0..RESET_POLL_RETRIES {
        delay.delay_ms(RESET_POLL_INTERVAL_MS);
        let ctrl = read_mmd(mdio, addr, mmd, reg::CTRL1)?;
        if ctrl & ctrl1::RESET == 0 {
            return Ok(());
        }
    }

    Err(IoError::ResetTimeout.into())
}

// =============================================================================
// Unit Tests
// =============================================================================
