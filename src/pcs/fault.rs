//! Fault Monitor
//!
//! Link status sampling and fault classification. The status registers are
//! read in a fixed order; once a fault bit is seen the remaining registers
//! are not consulted since their contents are unreliable.

use crate::error::Result;
use crate::hal::mdio::{MdioBus, read_mmd, read_vendor};
use crate::internal::xpcs_regs::{brt_stat1, brt_stat2, mmd, reg, stat1, stat2, vr_xs_pcs};
use crate::report::{Reporter, Severity};

// =============================================================================
// Fault Classification
// =============================================================================

/// A fault that requires reset and renegotiation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Fault {
    /// PCS STAT1 fault bit
    Link,
    /// Receive fault in PCS STAT2
    Receiver,
    /// Transmit fault in PCS STAT2
    Transmitter,
    /// RX FIFO over/underflow in the vendor digital status
    Fifo,
}

impl Fault {
    /// Returns a human-readable description of the fault
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Fault::Link => "link fault detected",
            Fault::Receiver => "receiver fault detected",
            Fault::Transmitter => "transmitter fault detected",
            Fault::Fifo => "fifo fault detected",
        }
    }
}

impl core::fmt::Display for Fault {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a fault check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultResult {
    /// No fault
    #[default]
    Healthy,
    /// See [`Fault::Link`]
    LinkFault,
    /// See [`Fault::Receiver`]
    ReceiverFault,
    /// See [`Fault::Transmitter`]
    TransmitterFault,
    /// See [`Fault::Fifo`]
    FifoFault,
}

impl FaultResult {
    /// The fault, if any
    #[must_use]
    pub const fn fault(self) -> Option<Fault> {
        match self {
            FaultResult::Healthy => None,
            FaultResult::LinkFault => Some(Fault::Link),
            FaultResult::ReceiverFault => Some(Fault::Receiver),
            FaultResult::TransmitterFault => Some(Fault::Transmitter),
            FaultResult::FifoFault => Some(Fault::Fifo),
        }
    }

    /// True for anything but [`FaultResult::Healthy`]
    #[must_use]
    pub const fn is_fault(self) -> bool {
        !matches!(self, FaultResult::Healthy)
    }
}

/// Non-fatal conditions seen after the fault checks pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Advisory {
    /// 10GBASE-R block lock not achieved
    BlockLockMissing,
    /// 10GBASE-R errored block counter non-zero
    LinkErrors,
}

impl Advisory {
    /// Returns a human-readable description
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Advisory::BlockLockMissing => "link is not locked",
            Advisory::LinkErrors => "link has errors",
        }
    }
}

// =============================================================================
// Status Reads
// =============================================================================

/// Sample link status
///
/// Both the PCS and the AN status registers must report link. Both are
/// always read.
pub fn read_link<M: MdioBus>(mdio: &mut M, addr: u8) -> Result<bool> {
    let pcs = read_mmd(mdio, addr, mmd::PCS, reg::STAT1)?;
    let an = read_mmd(mdio, addr, mmd::AN, reg::STAT1)?;

    Ok((pcs & stat1::LSTATUS != 0) && (an & stat1::LSTATUS != 0))
}

/// Classify the current fault state
///
/// Advisories are passed to `reporter` as warnings, and only when `link` is
/// true. Any read failure aborts the check.
pub fn check_fault<M: MdioBus, R: Reporter>(
    mdio: &mut M,
    addr: u8,
    link: bool,
    reporter: &mut R,
) -> Result<FaultResult> {
    let stat = read_mmd(mdio, addr, mmd::PCS, reg::STAT1)?;
    if stat & stat1::FAULT != 0 {
        return Ok(FaultResult::LinkFault);
    }

    let stat = read_mmd(mdio, addr, mmd::PCS, reg::STAT2)?;
    if stat & stat2::RXFAULT != 0 {
        return Ok(FaultResult::ReceiverFault);
    }
    if stat & stat2::TXFAULT != 0 {
        return Ok(FaultResult::TransmitterFault);
    }

    let stat = read_vendor(mdio, addr, mmd::PCS, vr_xs_pcs::DIG_STS)?;
    if stat & vr_xs_pcs::RXFIFO_ERR != 0 {
        return Ok(FaultResult::FifoFault);
    }

    let stat = read_mmd(mdio, addr, mmd::PCS, reg::PCS_10GBRT_STAT1)?;
    if stat & brt_stat1::BLKLK == 0 {
        advise(reporter, link, Advisory::BlockLockMissing);
    }

    let stat = read_mmd(mdio, addr, mmd::PCS, reg::PCS_10GBRT_STAT2)?;
    if stat & brt_stat2::ERR != 0 {
        advise(reporter, link, Advisory::LinkErrors);
    }

    Ok(FaultResult::Healthy)
}

fn advise<R: Reporter>(reporter: &mut R, link: bool, advisory: Advisory) {
    if !link {
        return;
    }

    #[cfg(feature = "defmt")]
    defmt::warn!("xpcs: {}", advisory);

    reporter.report(Severity::Warning, advisory.as_str());
}

// =============================================================================
// Unit Tests
// =============================================================================
