//! Generic PCS Operations
//!
//! The operation set a host link framework drives a PCS through, and the
//! per-poll link state it gets back.

use crate::driver::config::{Duplex, LinkConfig, PhyInterface, Speed};
use crate::error::Result;
use crate::hal::mdio::MdioBus;

use super::fault::Fault;
use super::modes::{LinkModes, Pause};

// =============================================================================
// Link State
// =============================================================================

/// Snapshot of the link, rebuilt on every poll
///
/// `speed`, `duplex` and `pause` are only meaningful when `an_complete` is
/// set. `lp_advertising` is always a subset of `advertising`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkState {
    /// PCS and AN report link, whether or not negotiation has resolved
    pub link: bool,
    /// Fault found during this poll
    pub fault: Option<Fault>,
    /// Auto-negotiation is enabled
    pub an_enabled: bool,
    /// Auto-negotiation completed with a valid outcome
    pub an_complete: bool,
    /// Local advertisement
    pub advertising: LinkModes,
    /// Partner abilities shared with the local advertisement
    pub lp_advertising: LinkModes,
    /// Resolved speed
    pub speed: Speed,
    /// Resolved duplex
    pub duplex: Duplex,
    /// Resolved pause
    pub pause: Pause,
}

impl LinkState {
    /// True if this poll found a fault
    #[must_use]
    pub const fn fault_detected(&self) -> bool {
        self.fault.is_some()
    }

    /// True if the link is up and auto-negotiation resolved a speed
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.link && self.an_complete && !matches!(self.speed, Speed::Unknown)
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Cap a requested capability set and an advertisement to what the device
/// supports
///
/// Unsupported bits are dropped, never rejected.
#[must_use]
pub const fn validate(
    requested: LinkModes,
    advertising: LinkModes,
    supported: LinkModes,
) -> (LinkModes, LinkModes) {
    (
        requested.intersection(supported),
        advertising.intersection(supported),
    )
}

// =============================================================================
// PCS Operations Trait
// =============================================================================

/// Trait for PCS drivers managed by a host link framework
///
/// The MDIO bus is borrowed per call so several devices can share it. The
/// host serializes calls for one device.
///
/// # Example
///
/// ```ignore
/// let mut xpcs = Xpcs::new(0, delay);
/// xpcs.probe(&mut mdio, PhyInterface::Usxgmii)?;
/// xpcs.configure(&mut mdio, &LinkConfig::new())?;
///
/// loop {
///     let state = xpcs.get_state(&mut mdio);
///     if state.is_resolved() {
///         xpcs.link_up(&mut mdio, state.speed)?;
///         break;
///     }
/// }
/// ```
pub trait PcsOps {
    /// Bus address of the device
    fn address(&self) -> u8;

    /// Identify the device and check it can run `interface`
    ///
    /// Returns the supported link modes, which cap every later
    /// advertisement.
    fn probe<M: MdioBus>(&mut self, mdio: &mut M, interface: PhyInterface) -> Result<LinkModes>;

    /// Cap `requested` and `advertising` to the probed capabilities
    fn validate(&self, requested: LinkModes, advertising: LinkModes) -> (LinkModes, LinkModes);

    /// Poll the device
    ///
    /// Never fails. Errors degrade to a link-down state and are reported
    /// through the driver's reporter.
    fn get_state<M: MdioBus>(&mut self, mdio: &mut M) -> LinkState;

    /// Apply a link configuration and (re)start auto-negotiation if enabled
    fn configure<M: MdioBus>(&mut self, mdio: &mut M, config: &LinkConfig) -> Result<()>;

    /// Program the speed the host committed to
    fn link_up<M: MdioBus>(&mut self, mdio: &mut M, speed: Speed) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    const D: LinkModes = LinkModes::AUTONEG
        .union(LinkModes::BASE_1000_KX_FULL)
        .union(LinkModes::BASE_10000_KR_FULL);

    #[test]
    fn validate_same_set_gives_intersection_twice() {
        let s = LinkModes::BASE_10000_KR_FULL | LinkModes::BASE_2500_X_FULL | LinkModes::PAUSE;
        let expected = LinkModes::BASE_10000_KR_FULL;
        assert_eq!(validate(s, s, D), (expected, expected));
    }

    #[test]
    fn validate_results_are_subsets_of_supported() {
        let all = LinkModes::all();
        for bits in 0..=all.bits() {
            let s = LinkModes::from_bits_truncate(bits);
            let (requested, advertising) = validate(s, all, D);
            assert!(D.contains(requested));
            assert!(D.contains(advertising));
        }
    }

    #[test]
    fn validate_empty_supported_clears_everything() {
        let (requested, advertising) =
            validate(LinkModes::all(), LinkModes::all(), LinkModes::empty());
        assert!(requested.is_empty());
        assert!(advertising.is_empty());
    }

    #[test]
    fn default_state_is_link_down() {
        let state = LinkState::default();
        assert!(!state.link);
        assert!(!state.fault_detected());
        assert!(!state.is_resolved());
        assert_eq!(state.speed, Speed::Unknown);
    }

    #[test]
    fn resolved_needs_link_and_speed() {
        let state = LinkState {
            link: true,
            an_complete: true,
            speed: Speed::Mbps10000,
            ..LinkState::default()
        };
        assert!(state.is_resolved());

        let unknown = LinkState {
            speed: Speed::Unknown,
            ..state
        };
        assert!(!unknown.is_resolved());
    }
}
