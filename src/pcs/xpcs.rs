//! DesignWare XPCS Controller
//!
//! Driver for the Synopsys DesignWare XPCS in USXGMII mode with Clause 73
//! auto-negotiation.
//!
//! # Lifecycle
//!
//! ```text
//! Uninitialized --probe--> Probed --get_state--> PollingDown <--> PollingUp
//!                                                     ^               |
//!                                                     |    fault      v
//!                                                     +-- FaultRecovery
//! ```
//!
//! Any fault seen while polling resets the PCS, restarts negotiation and
//! drops back to `PollingDown`. A failed reset leaves the controller in
//! `FaultRecovery` until the next poll tries again.
//!
//! # Example
//!
//! ```ignore
//! use ph_xpcs::{LinkConfig, PcsOps, PhyInterface, Xpcs};
//!
//! let mut xpcs = Xpcs::new(0, delay);
//! xpcs.probe(&mut mdio, PhyInterface::Usxgmii)?;
//! xpcs.configure(&mut mdio, &LinkConfig::new())?;
//!
//! let state = xpcs.get_state(&mut mdio);
//! if state.is_resolved() {
//!     xpcs.link_up(&mut mdio, state.speed)?;
//! }
//! ```

use embedded_hal::delay::DelayNs;

use crate::driver::config::{LinkConfig, PcsState, PhyInterface, Speed};
use crate::error::{ConfigError, IoError, Result};
use crate::hal::mdio::{MdioBus, read_device_id};
use crate::hal::reset::soft_reset;
use crate::internal::xpcs_regs::mmd;
use crate::report::{NoopReporter, Reporter, Severity};

use super::c73;
use super::catalog::{self, XPCS_CATALOG, XpcsId};
use super::fault::{self, Fault};
use super::generic::{self, LinkState, PcsOps};
use super::modes::LinkModes;
use super::usxgmii;

/// DesignWare XPCS driver
///
/// Owns the delay used by the reset poll and the reporter that receives
/// diagnostics. The MDIO bus is passed to each operation.
pub struct Xpcs<D: DelayNs, R: Reporter = NoopReporter> {
    addr: u8,
    delay: D,
    reporter: R,
    catalog: &'static [XpcsId],
    state: PcsState,
    device_id: Option<u32>,
    descriptor: Option<&'static XpcsId>,
    interface: Option<PhyInterface>,
    supported: LinkModes,
    advertising: LinkModes,
    an_enabled: bool,
}

impl<D: DelayNs> Xpcs<D, NoopReporter> {
    /// Create a driver for the device at `addr` that discards diagnostics
    pub fn new(addr: u8, delay: D) -> Self {
        Self::with_reporter(addr, delay, NoopReporter)
    }
}

impl<D: DelayNs, R: Reporter> Xpcs<D, R> {
    /// Create a driver for the device at `addr` reporting through `reporter`
    pub fn with_reporter(addr: u8, delay: D, reporter: R) -> Self {
        Self {
            addr,
            delay,
            reporter,
            catalog: XPCS_CATALOG,
            state: PcsState::Uninitialized,
            device_id: None,
            descriptor: None,
            interface: None,
            supported: LinkModes::empty(),
            advertising: LinkModes::empty(),
            an_enabled: false,
        }
    }

    /// Use a different capability catalog for probing
    #[must_use]
    pub fn with_catalog(mut self, catalog: &'static [XpcsId]) -> Self {
        self.catalog = catalog;
        self
    }

    /// Current controller phase
    pub fn state(&self) -> PcsState {
        self.state
    }

    /// Identifier read by the last probe, if it got that far
    pub fn device_id(&self) -> Option<u32> {
        self.device_id
    }

    /// Catalog entry matched at probe
    pub fn descriptor(&self) -> Option<&'static XpcsId> {
        self.descriptor
    }

    /// Interface accepted at probe
    pub fn interface(&self) -> Option<PhyInterface> {
        self.interface
    }

    /// Link modes the device supports (empty before probe)
    pub fn supported(&self) -> LinkModes {
        self.supported
    }

    /// Current local advertisement
    pub fn advertising(&self) -> LinkModes {
        self.advertising
    }

    /// Whether auto-negotiation is enabled
    pub fn an_enabled(&self) -> bool {
        self.an_enabled
    }

    /// Borrow the reporter
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Release the delay and reporter
    pub fn release(self) -> (D, R) {
        (self.delay, self.reporter)
    }

    fn require_probed(&self) -> Result<()> {
        if self.state.is_probed() {
            Ok(())
        } else {
            Err(IoError::InvalidState.into())
        }
    }

    fn identify<M: MdioBus>(
        &mut self,
        mdio: &mut M,
        interface: PhyInterface,
    ) -> Result<&'static XpcsId> {
        let id = read_device_id(mdio, self.addr, mmd::PCS)?;
        self.device_id = Some(id);

        let entry = catalog::lookup(self.catalog, id).ok_or(ConfigError::UnsupportedDevice)?;
        if !entry.allows(interface) {
            return Err(ConfigError::UnsupportedInterface.into());
        }

        Ok(entry)
    }

    /// One poll. Errors are turned into reports by the caller.
    fn poll<M: MdioBus>(&mut self, mdio: &mut M, state: &mut LinkState) -> Result<()> {
        let link = fault::read_link(mdio, self.addr)?;

        let result = fault::check_fault(mdio, self.addr, link, &mut self.reporter)?;
        if let Some(fault) = result.fault() {
            state.fault = Some(fault);
            return self.recover(mdio, link, fault);
        }

        if !link {
            self.enter(PcsState::PollingDown);
            return Ok(());
        }

        if !self.an_enabled {
            state.link = true;
            self.enter(PcsState::PollingUp);
            return Ok(());
        }

        // Link without a resolved outcome: report it, keep waiting
        if !c73::is_complete(mdio, self.addr)? {
            state.link = true;
            self.enter(PcsState::PollingDown);
            return Ok(());
        }

        let lp_advertising = c73::read_partner_advertising(mdio, self.addr, self.advertising)?;
        let resolution = c73::resolve(lp_advertising);

        state.link = true;
        state.an_complete = true;
        state.lp_advertising = lp_advertising;
        state.speed = resolution.speed;
        state.duplex = resolution.duplex;
        state.pause = resolution.pause;
        self.enter(PcsState::PollingUp);

        Ok(())
    }

    /// Reset the PCS and restart negotiation after a fault
    fn recover<M: MdioBus>(&mut self, mdio: &mut M, link: bool, fault: Fault) -> Result<()> {
        self.enter(PcsState::FaultRecovery);

        if link {
            self.reporter.report(Severity::Warning, fault.as_str());
        }

        soft_reset(mdio, &mut self.delay, self.addr, mmd::PCS)?;
        c73::start_or_restart(mdio, self.addr, self.advertising, self.advertising.pause())?;

        self.enter(PcsState::PollingDown);
        Ok(())
    }

    fn enter(&mut self, next: PcsState) {
        if self.state != next {
            #[cfg(feature = "defmt")]
            defmt::debug!("xpcs {}: {} -> {}", self.addr, self.state, next);

            self.state = next;
        }
    }
}

impl<D: DelayNs, R: Reporter> PcsOps for Xpcs<D, R> {
    fn address(&self) -> u8 {
        self.addr
    }

    fn probe<M: MdioBus>(&mut self, mdio: &mut M, interface: PhyInterface) -> Result<LinkModes> {
        self.state = PcsState::Uninitialized;
        self.device_id = None;
        self.descriptor = None;
        self.interface = None;
        self.supported = LinkModes::empty();
        self.advertising = LinkModes::empty();
        self.an_enabled = false;

        let entry = match self.identify(mdio, interface) {
            Ok(entry) => entry,
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("xpcs {}: probe failed: {}", self.addr, e);
                return Err(e);
            }
        };

        self.descriptor = Some(entry);
        self.interface = Some(interface);
        self.supported = entry.supported;
        self.advertising = entry.supported;
        self.an_enabled = true;
        self.state = PcsState::Probed;

        #[cfg(feature = "defmt")]
        defmt::debug!("xpcs {}: probed {=u32:#x}", self.addr, entry.id);

        Ok(entry.supported)
    }

    fn validate(&self, requested: LinkModes, advertising: LinkModes) -> (LinkModes, LinkModes) {
        generic::validate(requested, advertising, self.supported)
    }

    fn get_state<M: MdioBus>(&mut self, mdio: &mut M) -> LinkState {
        let mut state = LinkState {
            an_enabled: self.an_enabled,
            advertising: self.advertising,
            ..LinkState::default()
        };

        if !self.state.is_probed() {
            return state;
        }

        if let Err(e) = self.poll(mdio, &mut state) {
            #[cfg(feature = "defmt")]
            defmt::warn!("xpcs {}: poll failed: {}", self.addr, e);

            self.reporter.report(Severity::Error, e.as_str());

            if self.state != PcsState::FaultRecovery {
                self.enter(PcsState::PollingDown);
            }

            state = LinkState {
                fault: state.fault,
                an_enabled: self.an_enabled,
                advertising: self.advertising,
                ..LinkState::default()
            };
        }

        state
    }

    fn configure<M: MdioBus>(&mut self, mdio: &mut M, config: &LinkConfig) -> Result<()> {
        self.require_probed()?;

        self.an_enabled = config.an_enabled;
        self.advertising = config.local_advertising().intersection(self.supported);

        if self.an_enabled {
            c73::start_or_restart(mdio, self.addr, self.advertising, self.advertising.pause())?;
        }

        Ok(())
    }

    fn link_up<M: MdioBus>(&mut self, mdio: &mut M, speed: Speed) -> Result<()> {
        self.require_probed()?;
        usxgmii::apply_speed(mdio, self.addr, speed)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
