//! Configuration types for the XPCS driver

use crate::pcs::modes::{LinkModes, Pause};

/// Ethernet link speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Speed {
    /// 10 Mbps
    Mbps10,
    /// 100 Mbps
    Mbps100,
    /// 1 Gbps
    Mbps1000,
    /// 2.5 Gbps
    Mbps2500,
    /// 5 Gbps
    Mbps5000,
    /// 10 Gbps
    Mbps10000,
    /// Not resolved
    #[default]
    Unknown,
}

impl Speed {
    /// Convert a rate in Mbps; rates without a variant map to [`Speed::Unknown`]
    #[must_use]
    pub const fn from_mbps(mbps: u32) -> Self {
        match mbps {
            10 => Speed::Mbps10,
            100 => Speed::Mbps100,
            1_000 => Speed::Mbps1000,
            2_500 => Speed::Mbps2500,
            5_000 => Speed::Mbps5000,
            10_000 => Speed::Mbps10000,
            _ => Speed::Unknown,
        }
    }

    /// Rate in Mbps, or `None` for [`Speed::Unknown`]
    #[must_use]
    pub const fn to_mbps(self) -> Option<u32> {
        match self {
            Speed::Mbps10 => Some(10),
            Speed::Mbps100 => Some(100),
            Speed::Mbps1000 => Some(1_000),
            Speed::Mbps2500 => Some(2_500),
            Speed::Mbps5000 => Some(5_000),
            Speed::Mbps10000 => Some(10_000),
            Speed::Unknown => None,
        }
    }
}

/// Ethernet duplex mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Duplex {
    /// Half duplex
    Half,
    /// Full duplex
    #[default]
    Full,
}

/// MAC-side interface mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhyInterface {
    /// Serial Gigabit Media Independent Interface
    Sgmii,
    /// 10 Gigabit Media Independent Interface
    Xgmii,
    /// 10GBASE-R serial
    TenGbaseR,
    /// 10GBASE-KR backplane
    TenGbaseKr,
    /// Universal Serial 10GE Media Independent Interface
    #[default]
    Usxgmii,
}

/// Link configuration requested by the host
///
/// Passed to [`PcsOps::configure`](crate::pcs::PcsOps::configure). The
/// advertising set is capped to what the probed device supports before it is
/// written to the advertisement registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkConfig {
    /// Run Clause 73 auto-negotiation
    pub an_enabled: bool,
    /// Modes to advertise
    pub advertising: LinkModes,
    /// Pause capabilities to advertise (merged with pause bits in `advertising`)
    pub pause: Pause,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LinkConfig {
    /// Auto-negotiation on, advertising every Clause 73 mode and both pause kinds
    #[must_use]
    pub const fn new() -> Self {
        Self {
            an_enabled: true,
            advertising: LinkModes::C73_MODES.union(LinkModes::AUTONEG),
            pause: Pause::all(),
        }
    }

    /// Enable or disable auto-negotiation
    #[must_use]
    pub const fn with_autoneg(mut self, enabled: bool) -> Self {
        self.an_enabled = enabled;
        self
    }

    /// Set the advertised modes
    #[must_use]
    pub const fn with_advertising(mut self, advertising: LinkModes) -> Self {
        self.advertising = advertising;
        self
    }

    /// Set the advertised pause capabilities
    #[must_use]
    pub const fn with_pause(mut self, pause: Pause) -> Self {
        self.pause = pause;
        self
    }

    /// Modes written to the advertisement registers
    #[must_use]
    pub const fn local_advertising(&self) -> LinkModes {
        self.advertising.union(self.pause.to_link_modes())
    }
}

/// Controller phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PcsState {
    /// Not probed, or the last probe failed
    #[default]
    Uninitialized,
    /// Probed, not yet polled
    Probed,
    /// Polling with link down or negotiation pending
    PollingDown,
    /// Polling with link up and resolved
    PollingUp,
    /// Fault seen; reset and restart in progress or failed
    FaultRecovery,
}

impl PcsState {
    /// True once a probe has succeeded
    #[must_use]
    pub const fn is_probed(self) -> bool {
        !matches!(self, PcsState::Uninitialized)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
