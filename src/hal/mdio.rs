//! MDIO (Management Data Input/Output) HAL
//!
//! Clause 45 register access used by the PCS layer. The bus itself is
//! provided by the host (MAC SMI block, bit-banged MDIO, I²C bridge, ...)
//! through the [`MdioBus`] trait.
//!
//! # Register Addressing
//!
//! Registers are addressed with a composite 32-bit word:
//!
//! ```text
//! 31  30   29..21  20..16   15       14..0
//! 0   C45  0       MMD      VENDOR   offset
//! ```
//!
//! Use [`c45_address`] to build it and [`vendor`] to select the
//! DesignWare vendor register bank.

use crate::error::Result;
use crate::internal::xpcs_regs::{DW_VENDOR, MII_ADDR_C45, MMD_MASK, MMD_SHIFT, reg};

// =============================================================================
// MDIO Bus Trait
// =============================================================================

/// Trait for Clause 45 MDIO bus operations
///
/// This trait can be implemented by different backends, allowing the PCS
/// driver to work with various transports. Implementations should report
/// bus failures as [`IoError::Transport`](crate::IoError::Transport) and
/// must not retry internally on behalf of the driver.
pub trait MdioBus {
    /// Read a register
    ///
    /// `addr` is the device address on the bus, `reg` a composite address
    /// built with [`c45_address`].
    fn read(&mut self, addr: u8, reg: u32) -> Result<u16>;

    /// Write a register
    fn write(&mut self, addr: u8, reg: u32, value: u16) -> Result<()>;
}

impl<M: MdioBus + ?Sized> MdioBus for &mut M {
    fn read(&mut self, addr: u8, reg: u32) -> Result<u16> {
        (**self).read(addr, reg)
    }

    fn write(&mut self, addr: u8, reg: u32, value: u16) -> Result<()> {
        (**self).write(addr, reg, value)
    }
}

// =============================================================================
// Address Composition
// =============================================================================

/// Build the composite Clause 45 address for `reg` in device `mmd`
#[must_use]
pub const fn c45_address(mmd: u8, reg: u16) -> u32 {
    MII_ADDR_C45 | (((mmd as u32) & MMD_MASK) << MMD_SHIFT) | reg as u32
}

/// Select the vendor-specific bank for a register offset
#[must_use]
pub const fn vendor(reg: u16) -> u16 {
    DW_VENDOR | reg
}

/// Extract the MMD number from a composite address
#[must_use]
pub const fn mmd_of(address: u32) -> u8 {
    ((address >> MMD_SHIFT) & MMD_MASK) as u8
}

/// Extract the register offset from a composite address
#[must_use]
pub const fn reg_of(address: u32) -> u16 {
    (address & 0xFFFF) as u16
}

// =============================================================================
// Register Helpers
// =============================================================================

/// Read `reg` of device `mmd`
pub fn read_mmd<M: MdioBus>(mdio: &mut M, addr: u8, mmd: u8, reg: u16) -> Result<u16> {
    mdio.read(addr, c45_address(mmd, reg))
}

/// Write `reg` of device `mmd`
pub fn write_mmd<M: MdioBus>(mdio: &mut M, addr: u8, mmd: u8, reg: u16, value: u16) -> Result<()> {
    mdio.write(addr, c45_address(mmd, reg), value)
}

/// Read a vendor-bank register of device `mmd`
pub fn read_vendor<M: MdioBus>(mdio: &mut M, addr: u8, mmd: u8, reg: u16) -> Result<u16> {
    read_mmd(mdio, addr, mmd, vendor(reg))
}

/// Write a vendor-bank register of device `mmd`
pub fn write_vendor<M: MdioBus>(
    mdio: &mut M,
    addr: u8,
    mmd: u8,
    reg: u16,
    value: u16,
) -> Result<()> {
    write_mmd(mdio, addr, mmd, vendor(reg), value)
}

/// Read-modify-write: OR `set` into `reg` of device `mmd`
pub fn set_bits_mmd<M: MdioBus>(mdio: &mut M, addr: u8, mmd: u8, reg: u16, set: u16) -> Result<()> {
    let value = read_mmd(mdio, addr, mmd, reg)?;
    write_mmd(mdio, addr, mmd, reg, value | set)
}

/// Read the 32-bit device identifier (`DEVID1 << 16 | DEVID2`) of device `mmd`
pub fn read_device_id<M: MdioBus>(mdio: &mut M, addr: u8, mmd: u8) -> Result<u32> {
    let id1 = read_mmd(mdio, addr, mmd, reg::DEVID1)? as u32;
    let id2 = read_mmd(mdio, addr, mmd, reg::DEVID2)? as u32;
    Ok((id1 << 16) | id2)
}

// =============================================================================
// Unit Tests
// =============================================================================
