//! Capability Catalog
//!
//! Static table of known XPCS variants. Each entry maps a masked device
//! identifier to the link modes the variant supports and the MAC-side
//! interface modes it can run.
//!
//! Lookup is a linear scan and the first matching entry wins, so more
//! specific entries must come before broader masks.

use crate::driver::config::PhyInterface;
use crate::internal::constants::{SYNOPSYS_XPCS_USXGMII_ID, SYNOPSYS_XPCS_USXGMII_MASK};

use super::modes::LinkModes;

/// One catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct XpcsId {
    /// Identifier value after masking
    pub id: u32,
    /// Bits of the device identifier that take part in the match
    pub mask: u32,
    /// Link modes the variant supports
    pub supported: LinkModes,
    /// Interface modes the variant can run, in preference order
    pub interfaces: &'static [PhyInterface],
}

impl XpcsId {
    /// Check whether a device identifier belongs to this entry
    #[must_use]
    pub const fn matches(&self, device_id: u32) -> bool {
        (device_id & self.mask) == self.id
    }

    /// Check whether the variant can run `interface`
    #[must_use]
    pub fn allows(&self, interface: PhyInterface) -> bool {
        self.interfaces.contains(&interface)
    }
}

/// Link modes of the USXGMII variant
pub const XPCS_USXGMII_FEATURES: LinkModes = LinkModes::PAUSE
    .union(LinkModes::ASYM_PAUSE)
    .union(LinkModes::AUTONEG)
    .union(LinkModes::BASE_1000_KX_FULL)
    .union(LinkModes::BASE_2500_X_FULL)
    .union(LinkModes::BASE_10000_KX4_FULL)
    .union(LinkModes::BASE_10000_KR_FULL);

/// Interface modes of the USXGMII variant
pub const XPCS_USXGMII_INTERFACES: &[PhyInterface] = &[PhyInterface::Usxgmii];

/// Built-in catalog
pub const XPCS_CATALOG: &[XpcsId] = &[XpcsId {
    id: SYNOPSYS_XPCS_USXGMII_ID,
    mask: SYNOPSYS_XPCS_USXGMII_MASK,
    supported: XPCS_USXGMII_FEATURES,
    interfaces: XPCS_USXGMII_INTERFACES,
}];

/// Find the first entry matching `device_id`
#[must_use]
pub fn lookup(catalog: &'static [XpcsId], device_id: u32) -> Option<&'static XpcsId> {
    catalog.iter().find(|entry| entry.matches(device_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usxgmii_id_matches() {
        let entry = lookup(XPCS_CATALOG, 0x7996_CED0).unwrap();
        assert_eq!(entry.supported, XPCS_USXGMII_FEATURES);
        assert!(entry.allows(PhyInterface::Usxgmii));
    }

    #[test]
    fn mismatched_lsb_does_not_match() {
        assert!(lookup(XPCS_CATALOG, 0x7996_CED1).is_none());
    }

    #[test]
    fn usxgmii_entry_rejects_other_interfaces() {
        let entry = lookup(XPCS_CATALOG, 0x7996_CED0).unwrap();
        assert!(!entry.allows(PhyInterface::Sgmii));
        assert!(!entry.allows(PhyInterface::TenGbaseKr));
    }

    #[test]
    fn supported_set_includes_autoneg_and_pause() {
        assert!(XPCS_USXGMII_FEATURES.contains(LinkModes::AUTONEG));
        assert!(XPCS_USXGMII_FEATURES.contains(LinkModes::PAUSE_MODES));
        assert_eq!(XPCS_USXGMII_FEATURES, LinkModes::all());
    }

    static OVERLAPPING: &[XpcsId] = &[
        XpcsId {
            id: 0x7996_CE00,
            mask: 0xFFFF_FF00,
            supported: LinkModes::BASE_1000_KX_FULL,
            interfaces: &[PhyInterface::Sgmii],
        },
        XpcsId {
            id: 0x7996_CED0,
            mask: 0xFFFF_FFFF,
            supported: XPCS_USXGMII_FEATURES,
            interfaces: XPCS_USXGMII_INTERFACES,
        },
    ];

    #[test]
    fn first_match_wins() {
        let entry = lookup(OVERLAPPING, 0x7996_CED0).unwrap();
        assert_eq!(entry.supported, LinkModes::BASE_1000_KX_FULL);
    }

    #[test]
    fn masked_entry_ignores_low_bits() {
        let entry = XPCS_CATALOG[0];
        let loose = XpcsId {
            mask: 0xFFFF_FFF0,
            ..entry
        };
        assert!(loose.matches(0x7996_CED7));
        assert!(!entry.matches(0x7996_CED7));
    }
}
