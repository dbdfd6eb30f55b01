//! Testing utilities and mock implementations
//!
//! This module provides mock implementations for testing the XPCS driver
//! on the host without hardware access.
//!
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::string::{String, ToString};
use std::vec::Vec;

use crate::error::{IoError, Result};
use crate::hal::mdio::{MdioBus, c45_address};
use crate::internal::xpcs_regs::{an_ctrl1, an_stat1, brt_stat1, ctrl1, mmd, reg, sr_an, stat1};
use crate::report::{Reporter, Severity};

// =============================================================================
// Mock MDIO Bus
// =============================================================================

/// Mock Clause 45 MDIO bus for testing without hardware
///
/// Registers are keyed by `(device address, composite register address)`.
/// Unset registers read as zero.
///
/// # Example
///
/// ```ignore
/// let mut mdio = MockMdioBus::new();
/// mdio.setup_usxgmii(0);
/// mdio.simulate_link_up_10g(0);
///
/// let mut xpcs = Xpcs::new(0, MockDelay::new());
/// xpcs.probe(&mut mdio, PhyInterface::Usxgmii).unwrap();
/// assert!(xpcs.get_state(&mut mdio).link);
/// ```
#[derive(Debug, Default)]
pub struct MockMdioBus {
    /// Register values: (addr, reg) -> value
    registers: RefCell<HashMap<(u8, u32), u16>>,
    /// Scripted values returned ahead of the register map
    read_queues: RefCell<HashMap<(u8, u32), VecDeque<u16>>>,
    /// Bits cleared as soon as they are written
    self_clearing: RefCell<HashMap<(u8, u32), u16>>,
    /// Registers whose reads fail
    failing_reads: RefCell<HashSet<(u8, u32)>>,
    /// Registers whose writes fail
    failing_writes: RefCell<HashSet<(u8, u32)>>,
    /// Record of read attempts: (addr, reg)
    read_log: RefCell<Vec<(u8, u32)>>,
    /// Record of successful writes: (addr, reg, value)
    write_log: RefCell<Vec<(u8, u32, u16)>>,
}

impl MockMdioBus {
    /// Create a new mock MDIO bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a register value
    pub fn set_register(&self, addr: u8, reg: u32, value: u16) {
        self.registers.borrow_mut().insert((addr, reg), value);
    }

    /// Get the current value of a register (for test verification)
    pub fn get_register(&self, addr: u8, reg: u32) -> Option<u16> {
        self.registers.borrow().get(&(addr, reg)).copied()
    }

    /// Set a register by MMD and offset
    pub fn set_mmd(&self, addr: u8, mmd: u8, reg: u16, value: u16) {
        self.set_register(addr, c45_address(mmd, reg), value);
    }

    /// Get a register by MMD and offset
    pub fn get_mmd(&self, addr: u8, mmd: u8, reg: u16) -> Option<u16> {
        self.get_register(addr, c45_address(mmd, reg))
    }

    /// Return `values` from the next reads of a register, in order
    pub fn queue_reads(&self, addr: u8, reg: u32, values: &[u16]) {
        self.read_queues
            .borrow_mut()
            .entry((addr, reg))
            .or_default()
            .extend(values.iter().copied());
    }

    /// Make `mask` bits of a register clear themselves on write
    pub fn set_self_clearing(&self, addr: u8, reg: u32, mask: u16) {
        self.self_clearing.borrow_mut().insert((addr, reg), mask);
    }

    /// Make written bits of a register stick
    pub fn clear_self_clearing(&self, addr: u8, reg: u32) {
        self.self_clearing.borrow_mut().remove(&(addr, reg));
    }

    /// Fail every read of a register
    pub fn fail_read(&self, addr: u8, reg: u32) {
        self.failing_reads.borrow_mut().insert((addr, reg));
    }

    /// Fail every write of a register
    pub fn fail_write(&self, addr: u8, reg: u32) {
        self.failing_writes.borrow_mut().insert((addr, reg));
    }

    /// Get all successful writes
    pub fn get_writes(&self) -> Vec<(u8, u32, u16)> {
        self.write_log.borrow().clone()
    }

    /// Get all read attempts
    pub fn get_reads(&self) -> Vec<(u8, u32)> {
        self.read_log.borrow().clone()
    }

    /// Number of read attempts on one register
    pub fn read_count(&self, addr: u8, reg: u32) -> usize {
        self.read_log
            .borrow()
            .iter()
            .filter(|&&r| r == (addr, reg))
            .count()
    }

    /// Clear the write log
    pub fn clear_writes(&self) {
        self.write_log.borrow_mut().clear();
    }

    /// Clear the read log
    pub fn clear_reads(&self) {
        self.read_log.borrow_mut().clear();
    }

    /// Setup for a DesignWare XPCS in USXGMII mode, link down
    pub fn setup_usxgmii(&self, addr: u8) {
        // Device identifier 0x7996_CED0
        self.set_mmd(addr, mmd::PCS, reg::DEVID1, 0x7996);
        self.set_mmd(addr, mmd::PCS, reg::DEVID2, 0xCED0);

        // Block lock held so polls are quiet
        self.set_mmd(addr, mmd::PCS, reg::PCS_10GBRT_STAT1, brt_stat1::BLKLK);

        // Reset and AN restart complete immediately
        self.set_self_clearing(addr, c45_address(mmd::PCS, reg::CTRL1), ctrl1::RESET);
        self.set_self_clearing(addr, c45_address(mmd::AN, reg::CTRL1), an_ctrl1::RESTART);
    }

    /// Simulate negotiation completing with a partner advertising every mode
    pub fn simulate_link_up_10g(&self, addr: u8) {
        let pcs = self.get_mmd(addr, mmd::PCS, reg::STAT1).unwrap_or(0);
        self.set_mmd(addr, mmd::PCS, reg::STAT1, pcs | stat1::LSTATUS);
        self.set_mmd(
            addr,
            mmd::AN,
            reg::STAT1,
            stat1::LSTATUS | an_stat1::COMPLETE | an_stat1::LPABLE,
        );

        // Selector + pause, KX/KX4/KR, 2500
        self.set_mmd(addr, mmd::AN, sr_an::LP_ABL1, 0x0C01);
        self.set_mmd(addr, mmd::AN, sr_an::LP_ABL2, 0x00E0);
        self.set_mmd(addr, mmd::AN, sr_an::LP_ABL3, 0x0001);
    }

    /// Simulate link going down
    pub fn simulate_link_down(&self, addr: u8) {
        let pcs = self.get_mmd(addr, mmd::PCS, reg::STAT1).unwrap_or(0);
        self.set_mmd(addr, mmd::PCS, reg::STAT1, pcs & !stat1::LSTATUS);
        self.set_mmd(addr, mmd::AN, reg::STAT1, 0);
        self.set_mmd(addr, mmd::AN, sr_an::LP_ABL1, 0);
        self.set_mmd(addr, mmd::AN, sr_an::LP_ABL2, 0);
        self.set_mmd(addr, mmd::AN, sr_an::LP_ABL3, 0);
    }
}

impl MdioBus for MockMdioBus {
    fn read(&mut self, addr: u8, reg: u32) -> Result<u16> {
        self.read_log.borrow_mut().push((addr, reg));

        if self.failing_reads.borrow().contains(&(addr, reg)) {
            return Err(IoError::Transport.into());
        }

        if let Some(value) = self
            .read_queues
            .borrow_mut()
            .get_mut(&(addr, reg))
            .and_then(VecDeque::pop_front)
        {
            return Ok(value);
        }

        // Return from register map (default 0 if not set)
        Ok(self.get_register(addr, reg).unwrap_or(0))
    }

    fn write(&mut self, addr: u8, reg: u32, value: u16) -> Result<()> {
        if self.failing_writes.borrow().contains(&(addr, reg)) {
            return Err(IoError::Transport.into());
        }

        // Log the write
        self.write_log.borrow_mut().push((addr, reg, value));

        let clearing = self
            .self_clearing
            .borrow()
            .get(&(addr, reg))
            .copied()
            .unwrap_or(0);
        self.set_register(addr, reg, value & !clearing);

        Ok(())
    }
}

// =============================================================================
// Mock Delay
// =============================================================================

/// Mock delay for testing without actual timing
///
/// Records delays for verification without actually waiting.
#[derive(Debug, Default)]
pub struct MockDelay {
    /// Total nanoseconds delayed
    total_ns: RefCell<u64>,
}

impl MockDelay {
    /// Create a new mock delay
    pub fn new() -> Self {
        Self::default()
    }

    /// Get total nanoseconds that were "delayed"
    pub fn total_ns(&self) -> u64 {
        *self.total_ns.borrow()
    }

    /// Get total milliseconds that were "delayed"
    pub fn total_ms(&self) -> u64 {
        self.total_ns() / 1_000_000
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        *self.total_ns.borrow_mut() += u64::from(ns);
    }
}

// =============================================================================
// Mock Reporter
// =============================================================================

/// Reporter that records every message
#[derive(Debug, Default)]
pub struct MockReporter {
    messages: Vec<(Severity, String)>,
}

impl MockReporter {
    /// Create an empty reporter
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True if nothing was reported
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// First recorded message
    pub fn first(&self) -> Option<(Severity, &str)> {
        self.messages
            .first()
            .map(|(severity, message)| (*severity, message.as_str()))
    }

    /// True if any message equals `message`
    pub fn contains(&self, message: &str) -> bool {
        self.messages.iter().any(|(_, m)| m == message)
    }
}

impl Reporter for MockReporter {
    fn report(&mut self, severity: Severity, message: &str) {
        self.messages.push((severity, message.to_string()));
    }
}

// =============================================================================
// Test Assertions
// =============================================================================

/// Assert that a register was written with a specific value
#[macro_export]
macro_rules! assert_reg_written {
    ($mdio:expr, $addr:expr, $reg:expr, $value:expr) => {
        let writes = $mdio.get_writes();
        assert!(
            writes
                .iter()
                .any(|w| w.0 == $addr && w.1 == $reg && w.2 == $value),
            "Expected write to device {} reg {:#010X} with value 0x{:04X}, but got: {:?}",
            $addr,
            $reg,
            $value,
            writes
        );
    };
}
