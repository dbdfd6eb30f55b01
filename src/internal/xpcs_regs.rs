//! XPCS Register Definitions
//!
//! Clause 45 register addresses and bit definitions used by the DesignWare
//! XPCS. Standard IEEE 802.3 MMD registers come first, followed by the
//! Synopsys vendor-specific (`VR_*`/`SR_*`) registers.
//!
//! # Address Layout
//!
//! | Bits  | Field | Description |
//! |-------|-------|-------------|
//! | 30    | C45   | Clause 45 access flag |
//! | 20:16 | MMD   | MDIO Manageable Device |
//! | 15:0  | REG   | Register offset (bit 15 = vendor bank) |

// Allow unused constants - these are complete register definitions for reference
#![allow(dead_code)]

// =============================================================================
// Address Composition
// =============================================================================

/// Clause 45 access flag in the composite register address
pub const MII_ADDR_C45: u32 = 1 << 30;

/// MMD field shift in the composite register address
pub const MMD_SHIFT: u32 = 16;

/// MMD field mask (5 bits)
pub const MMD_MASK: u32 = 0x1F;

/// Vendor-specific register bank overlay
pub const DW_VENDOR: u16 = 1 << 15;

// =============================================================================
// MDIO Manageable Devices
// =============================================================================

/// MDIO Manageable Device numbers
pub mod mmd {
    /// Physical Coding Sublayer
    pub const PCS: u8 = 3;
    /// Auto-Negotiation
    pub const AN: u8 = 7;
    /// Vendor specific 2
    pub const VEND2: u8 = 31;
}

// =============================================================================
// Standard MMD Registers
// =============================================================================

/// Generic MMD register offsets (IEEE 802.3 Clause 45)
pub mod reg {
    /// Control 1
    pub const CTRL1: u16 = 0x00;
    /// Status 1
    pub const STAT1: u16 = 0x01;
    /// Device identifier 1
    pub const DEVID1: u16 = 0x02;
    /// Device identifier 2
    pub const DEVID2: u16 = 0x03;
    /// Status 2
    pub const STAT2: u16 = 0x08;
    /// 10GBASE-R/-T PCS status 1
    pub const PCS_10GBRT_STAT1: u16 = 0x20;
    /// 10GBASE-R/-T PCS status 2
    pub const PCS_10GBRT_STAT2: u16 = 0x21;
}

/// CTRL1 bits shared by all MMDs
pub mod ctrl1 {
    /// Soft reset - self-clearing
    pub const RESET: u16 = 1 << 15;
}

/// STAT1 bits shared by all MMDs
pub mod stat1 {
    /// Fault condition detected
    pub const FAULT: u16 = 1 << 7;
    /// Link status (latched low)
    pub const LSTATUS: u16 = 1 << 2;
}

/// STAT2 bits
pub mod stat2 {
    /// Transmit fault
    pub const TXFAULT: u16 = 1 << 11;
    /// Receive fault
    pub const RXFAULT: u16 = 1 << 10;
}

/// 10GBASE-R PCS status 1 bits
pub mod brt_stat1 {
    /// Block lock achieved
    pub const BLKLK: u16 = 1 << 0;
}

/// 10GBASE-R PCS status 2 bits
pub mod brt_stat2 {
    /// Errored block counter
    pub const ERR: u16 = 0x00FF;
}

/// AN MMD CTRL1 bits
pub mod an_ctrl1 {
    /// Auto-negotiation enable
    pub const ENABLE: u16 = 1 << 12;
    /// Restart auto-negotiation - self-clearing
    pub const RESTART: u16 = 1 << 9;
}

/// AN MMD STAT1 bits
pub mod an_stat1 {
    /// Auto-negotiation complete
    pub const COMPLETE: u16 = 1 << 5;
    /// Link partner is auto-negotiation able
    pub const LPABLE: u16 = 1 << 0;
}

// =============================================================================
// DesignWare Vendor Registers
// =============================================================================

/// VR_XS_PCS registers (vendor bank of the PCS MMD)
pub mod vr_xs_pcs {
    /// Digital status
    pub const DIG_STS: u16 = 0x0010;
    /// USXGMII reset (latches the new rate into the replicator)
    pub const USXGMII_RST: u16 = 1 << 10;
    /// USXGMII enable
    pub const USXGMII_EN: u16 = 1 << 9;
    /// RX FIFO error bits in DIG_STS
    pub const RXFIFO_ERR: u16 = (1 << 6) | (1 << 5);
}

/// SR_MII control bits (VEND2 MMD CTRL1)
pub mod sr_mii {
    /// Full duplex
    pub const USXGMII_FULL: u16 = 1 << 8;
    /// Speed select field mask
    pub const USXGMII_SS_MASK: u16 = (1 << 13) | (1 << 6) | (1 << 5);
    /// 10 Gbps
    pub const USXGMII_10000: u16 = (1 << 13) | (1 << 6);
    /// 5 Gbps
    pub const USXGMII_5000: u16 = (1 << 13) | (1 << 5);
    /// 2.5 Gbps
    pub const USXGMII_2500: u16 = 1 << 5;
    /// 1 Gbps
    pub const USXGMII_1000: u16 = 1 << 6;
    /// 100 Mbps
    pub const USXGMII_100: u16 = 1 << 13;
    /// 10 Mbps
    pub const USXGMII_10: u16 = 0;
}

/// SR_AN advertisement and link partner ability registers (AN MMD)
pub mod sr_an {
    /// Advertisement 1 (selector, pause)
    pub const ADV1: u16 = 0x10;
    /// Advertisement 2 (technology ability A)
    pub const ADV2: u16 = 0x11;
    /// Advertisement 3 (technology ability B)
    pub const ADV3: u16 = 0x12;
    /// Link partner ability 1
    pub const LP_ABL1: u16 = 0x13;
    /// Link partner ability 2
    pub const LP_ABL2: u16 = 0x14;
    /// Link partner ability 3
    pub const LP_ABL3: u16 = 0x15;
}

/// Clause 73 base page bits
///
/// The advertisement and link partner ability registers share one layout.
pub mod c73 {
    /// ADV1/LP_ABL1: symmetric pause
    pub const PAUSE: u16 = 1 << 10;
    /// ADV1/LP_ABL1: asymmetric pause
    pub const ASYM_PAUSE: u16 = 1 << 11;
    /// ADV1/LP_ABL1: selector field mask
    pub const SELECTOR_MASK: u16 = 0x001F;
    /// ADV1/LP_ABL1: IEEE 802.3 selector value
    pub const AN_ADV_SF: u16 = 0x0001;
    /// ADV2/LP_ABL2: 1000BASE-KX
    pub const KX_1000: u16 = 1 << 5;
    /// ADV2/LP_ABL2: 10GBASE-KX4
    pub const KX4_10000: u16 = 1 << 6;
    /// ADV2/LP_ABL2: 10GBASE-KR
    pub const KR_10000: u16 = 1 << 7;
    /// ADV3/LP_ABL3: 2.5GBASE-KX
    pub const KX_2500: u16 = 1 << 0;
    /// ADV3/LP_ABL3: 5GBASE-KR (not advertised)
    pub const KR_5000: u16 = 1 << 1;
}
