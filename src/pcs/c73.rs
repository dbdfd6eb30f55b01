//! Clause 73 Auto-Negotiation
//!
//! Encoding of local abilities into the SR_AN advertisement registers,
//! decoding of the link partner ability registers, completion checks and
//! resolution of the negotiated outcome.
//!
//! # Register Layout
//!
//! | Register       | Bits                                          |
//! |----------------|-----------------------------------------------|
//! | ADV1 / LP_ABL1 | selector 4:0, pause 10, asym pause 11         |
//! | ADV2 / LP_ABL2 | 1000BASE-KX 5, 10GBASE-KX4 6, 10GBASE-KR 7     |
//! | ADV3 / LP_ABL3 | 2500BASE-X 0                                  |

use crate::driver::config::{Duplex, Speed};
use crate::error::Result;
use crate::hal::mdio::{MdioBus, read_mmd, set_bits_mmd, write_mmd};
use crate::internal::xpcs_regs::{an_ctrl1, an_stat1, c73, mmd, reg, sr_an};

use super::modes::{LinkModes, Pause};

// =============================================================================
// Base Page Encoding
// =============================================================================

/// The three base page words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct C73Pages {
    /// ADV1 / LP_ABL1
    pub adv1: u16,
    /// ADV2 / LP_ABL2
    pub adv2: u16,
    /// ADV3 / LP_ABL3
    pub adv3: u16,
}

impl C73Pages {
    /// Encode an advertisement. The selector field is always set.
    #[must_use]
    pub const fn encode(modes: LinkModes) -> Self {
        let mut adv1 = c73::AN_ADV_SF;
        let mut adv2 = 0;
        let mut adv3 = 0;

        if modes.contains(LinkModes::BASE_2500_X_FULL) {
            adv3 |= c73::KX_2500;
        }

        if modes.contains(LinkModes::BASE_1000_KX_FULL) {
            adv2 |= c73::KX_1000;
        }
        if modes.contains(LinkModes::BASE_10000_KX4_FULL) {
            adv2 |= c73::KX4_10000;
        }
        if modes.contains(LinkModes::BASE_10000_KR_FULL) {
            adv2 |= c73::KR_10000;
        }

        if modes.contains(LinkModes::PAUSE) {
            adv1 |= c73::PAUSE;
        }
        if modes.contains(LinkModes::ASYM_PAUSE) {
            adv1 |= c73::ASYM_PAUSE;
        }

        Self { adv1, adv2, adv3 }
    }

    /// Decode the ability bits. Selector and unknown bits are ignored.
    #[must_use]
    pub const fn decode(&self) -> LinkModes {
        let mut modes = LinkModes::empty();

        if self.adv3 & c73::KX_2500 != 0 {
            modes = modes.union(LinkModes::BASE_2500_X_FULL);
        }

        if self.adv2 & c73::KX_1000 != 0 {
            modes = modes.union(LinkModes::BASE_1000_KX_FULL);
        }
        if self.adv2 & c73::KX4_10000 != 0 {
            modes = modes.union(LinkModes::BASE_10000_KX4_FULL);
        }
        if self.adv2 & c73::KR_10000 != 0 {
            modes = modes.union(LinkModes::BASE_10000_KR_FULL);
        }

        if self.adv1 & c73::PAUSE != 0 {
            modes = modes.union(LinkModes::PAUSE);
        }
        if self.adv1 & c73::ASYM_PAUSE != 0 {
            modes = modes.union(LinkModes::ASYM_PAUSE);
        }

        modes
    }

    /// Check the selector field of the first word
    #[must_use]
    pub const fn selector_valid(&self) -> bool {
        (self.adv1 & c73::SELECTOR_MASK) == c73::AN_ADV_SF
    }
}

// =============================================================================
// Register Operations
// =============================================================================

/// Write the advertisement and (re)start auto-negotiation
///
/// `pause` is merged into `advertising` before encoding. Writes ADV3, ADV2,
/// ADV1, then sets enable and restart in AN CTRL1. A failure part way
/// leaves the advertisement indeterminate; call again to retry.
pub fn start_or_restart<M: MdioBus>(
    mdio: &mut M,
    addr: u8,
    advertising: LinkModes,
    pause: Pause,
) -> Result<()> {
    let pages = C73Pages::encode(advertising | pause.to_link_modes());

    write_mmd(mdio, addr, mmd::AN, sr_an::ADV3, pages.adv3)?;
    write_mmd(mdio, addr, mmd::AN, sr_an::ADV2, pages.adv2)?;
    write_mmd(mdio, addr, mmd::AN, sr_an::ADV1, pages.adv1)?;

    set_bits_mmd(
        mdio,
        addr,
        mmd::AN,
        reg::CTRL1,
        an_ctrl1::ENABLE | an_ctrl1::RESTART,
    )
}

/// Check whether negotiation finished with a valid outcome
///
/// A completed session whose partner selector is not IEEE 802.3 is treated
/// as not yet resolved.
pub fn is_complete<M: MdioBus>(mdio: &mut M, addr: u8) -> Result<bool> {
    let stat = read_mmd(mdio, addr, mmd::AN, reg::STAT1)?;
    if stat & an_stat1::COMPLETE == 0 {
        return Ok(false);
    }

    let lp_abl1 = read_mmd(mdio, addr, mmd::AN, sr_an::LP_ABL1)?;
    Ok(C73Pages {
        adv1: lp_abl1,
        ..C73Pages::default()
    }
    .selector_valid())
}

/// Read the partner abilities shared with `local`
///
/// Returns an empty set when the partner is not auto-negotiation able.
/// Otherwise the decoded abilities plus `AUTONEG`, masked by `local`.
pub fn read_partner_advertising<M: MdioBus>(
    mdio: &mut M,
    addr: u8,
    local: LinkModes,
) -> Result<LinkModes> {
    let stat = read_mmd(mdio, addr, mmd::AN, reg::STAT1)?;
    if stat & an_stat1::LPABLE == 0 {
        return Ok(LinkModes::empty());
    }

    let adv3 = read_mmd(mdio, addr, mmd::AN, sr_an::LP_ABL3)?;
    let adv2 = read_mmd(mdio, addr, mmd::AN, sr_an::LP_ABL2)?;
    let adv1 = read_mmd(mdio, addr, mmd::AN, sr_an::LP_ABL1)?;
    let partner = C73Pages { adv1, adv2, adv3 }.decode() | LinkModes::AUTONEG;

    Ok(partner & local)
}

// =============================================================================
// Resolution
// =============================================================================

/// Negotiated operating point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Resolution {
    /// Resolved speed
    pub speed: Speed,
    /// Resolved duplex
    pub duplex: Duplex,
    /// Resolved pause
    pub pause: Pause,
}

/// Highest USXGMII speed present in `modes`
///
/// 1000BASE-KX, then 2500BASE-X, then either 10G mode; later entries
/// override earlier ones.
#[must_use]
pub const fn max_usxgmii_speed(modes: LinkModes) -> Speed {
    let mut speed = Speed::Unknown;

    if modes.contains(LinkModes::BASE_1000_KX_FULL) {
        speed = Speed::Mbps1000;
    }
    if modes.contains(LinkModes::BASE_2500_X_FULL) {
        speed = Speed::Mbps2500;
    }
    if modes.contains(LinkModes::BASE_10000_KX4_FULL) {
        speed = Speed::Mbps10000;
    }
    if modes.contains(LinkModes::BASE_10000_KR_FULL) {
        speed = Speed::Mbps10000;
    }

    speed
}

/// Resolve the negotiated outcome from the shared abilities
///
/// Duplex is always full. Pause is reported as symmetric and asymmetric
/// whatever the partner advertised.
#[must_use]
pub const fn resolve(partner: LinkModes) -> Resolution {
    Resolution {
        speed: max_usxgmii_speed(partner),
        duplex: Duplex::Full,
        pause: Pause::all(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
