//! Link Mode Sets
//!
//! Link modes and pause capabilities are carried as fixed-size flag sets.
//! Raw register bits only appear at the Clause 73 encode/decode boundary
//! in [`c73`](super::c73).

use bitflags::bitflags;

bitflags! {
    /// Set of link modes a device supports, advertises, or shares with its partner
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LinkModes: u32 {
        /// Symmetric pause
        const PAUSE = 1 << 0;
        /// Asymmetric pause
        const ASYM_PAUSE = 1 << 1;
        /// Auto-negotiation
        const AUTONEG = 1 << 2;
        /// 1000BASE-KX full duplex
        const BASE_1000_KX_FULL = 1 << 3;
        /// 2500BASE-X full duplex
        const BASE_2500_X_FULL = 1 << 4;
        /// 10GBASE-KX4 full duplex
        const BASE_10000_KX4_FULL = 1 << 5;
        /// 10GBASE-KR full duplex
        const BASE_10000_KR_FULL = 1 << 6;
    }
}

impl LinkModes {
    /// Both pause bits
    pub const PAUSE_MODES: Self = Self::PAUSE.union(Self::ASYM_PAUSE);

    /// Every speed/technology bit
    pub const SPEED_MODES: Self = Self::BASE_1000_KX_FULL
        .union(Self::BASE_2500_X_FULL)
        .union(Self::BASE_10000_KX4_FULL)
        .union(Self::BASE_10000_KR_FULL);

    /// Bits carried by the Clause 73 advertisement registers
    pub const C73_MODES: Self = Self::SPEED_MODES.union(Self::PAUSE_MODES);

    /// Pause capabilities contained in this set
    #[must_use]
    pub const fn pause(self) -> Pause {
        let mut pause = Pause::empty();
        if self.contains(Self::PAUSE) {
            pause = pause.union(Pause::SYM);
        }
        if self.contains(Self::ASYM_PAUSE) {
            pause = pause.union(Pause::ASYM);
        }
        pause
    }
}

impl Default for LinkModes {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LinkModes {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "LinkModes({=u32:#x})", self.bits());
    }
}

bitflags! {
    /// Pause (flow control) capabilities
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Pause: u8 {
        /// Symmetric pause
        const SYM = 1 << 0;
        /// Asymmetric pause
        const ASYM = 1 << 1;
    }
}

impl Pause {
    /// Link mode bits advertising these pause capabilities
    #[must_use]
    pub const fn to_link_modes(self) -> LinkModes {
        let mut modes = LinkModes::empty();
        if self.contains(Self::SYM) {
            modes = modes.union(LinkModes::PAUSE);
        }
        if self.contains(Self::ASYM) {
            modes = modes.union(LinkModes::ASYM_PAUSE);
        }
        modes
    }
}

impl Default for Pause {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Pause {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Pause({=u8:#x})", self.bits());
    }
}
