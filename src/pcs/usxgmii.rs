//! USXGMII Speed Programming
//!
//! USXGMII always runs the serial line at 10.3125 GBd. Lower rates are
//! presented to the MAC by replicating data, selected through the SR_MII
//! speed-select field. The new rate takes effect after a USXGMII reset.

use crate::driver::config::Speed;
use crate::error::{ConfigError, ConfigResult, Result};
use crate::hal::mdio::{MdioBus, read_mmd, read_vendor, write_mmd, write_vendor};
use crate::internal::xpcs_regs::{mmd, reg, sr_mii, vr_xs_pcs};

/// Speed-select code for `speed`
///
/// Fails with [`ConfigError::InvalidSpeed`] for [`Speed::Unknown`].
pub const fn speed_select(speed: Speed) -> ConfigResult<u16> {
    match speed {
        Speed::Mbps10 => Ok(sr_mii::USXGMII_10),
        Speed::Mbps100 => Ok(sr_mii::USXGMII_100),
        Speed::Mbps1000 => Ok(sr_mii::USXGMII_1000),
        Speed::Mbps2500 => Ok(sr_mii::USXGMII_2500),
        Speed::Mbps5000 => Ok(sr_mii::USXGMII_5000),
        Speed::Mbps10000 => Ok(sr_mii::USXGMII_10000),
        Speed::Unknown => Err(ConfigError::InvalidSpeed),
    }
}

/// Program the USXGMII rate
///
/// The speed is validated before the first register access. Each step's
/// failure aborts the rest:
///
/// 1. Enable USXGMII in the vendor PCS control register
/// 2. Write speed select and full duplex into VEND2 CTRL1
/// 3. Pulse the USXGMII reset to latch the new rate
pub fn apply_speed<M: MdioBus>(mdio: &mut M, addr: u8, speed: Speed) -> Result<()> {
    let code = speed_select(speed)?;

    let ctrl = read_vendor(mdio, addr, mmd::PCS, reg::CTRL1)?;
    write_vendor(mdio, addr, mmd::PCS, reg::CTRL1, ctrl | vr_xs_pcs::USXGMII_EN)?;

    let ctrl = read_mmd(mdio, addr, mmd::VEND2, reg::CTRL1)?;
    let ctrl = (ctrl & !sr_mii::USXGMII_SS_MASK) | code | sr_mii::USXGMII_FULL;
    write_mmd(mdio, addr, mmd::VEND2, reg::CTRL1, ctrl)?;

    let ctrl = read_vendor(mdio, addr, mmd::PCS, reg::CTRL1)?;
    write_vendor(mdio, addr, mmd::PCS, reg::CTRL1, ctrl | vr_xs_pcs::USXGMII_RST)
}
