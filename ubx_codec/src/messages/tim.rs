//! TIM: timing

use super::UtcStandard;
use crate::{ubx_bitfield, ubx_enum, ubx_message, Reserved};

/// Time pulse time data
#[ubx_message]
#[ubx(class = 0x0d, id = 0x01, fixed_payload_len = 16)]
pub struct TimTp {
    /// Time pulse time of week according to time base
    #[ubx(unit = "ms")]
    tow_ms: u32,
    /// Submillisecond part of towMS
    #[ubx(map_type = f64, scale = 2.3283064365386963e-10, alias = tow_sub_ms_fraction, unit = "ms")]
    tow_sub_ms: u32,
    /// Quantization error of time pulse
    #[ubx(unit = "ps")]
    q_err: i32,
    /// Time pulse week number according to time base
    week: u16,
    flags: TimTpFlags,
    /// Time reference information
    ref_info: TimTpRefInfo,
}

#[ubx_bitfield(u8)]
pub struct TimTpFlags {
    #[ubx(bits = 1, map_type = TimTpTimeBase)]
    time_base: u8,
    /// UTC availability
    #[ubx(bits = 1)]
    utc: bool,
    /// (T)RAIM state
    #[ubx(bits = 2, map_type = RaimState)]
    raim: u8,
    /// Quantization error invalid
    #[ubx(bits = 1)]
    q_err_invalid: bool,
    #[ubx(bits = 3, reserved)]
    reserved: u8,
}

#[ubx_enum]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimTpTimeBase {
    Gnss = 0,
    Utc = 1,
}

#[ubx_enum]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaimState {
    Unavailable = 0,
    NotActive = 1,
    Active = 2,
}

#[ubx_bitfield(u8)]
pub struct TimTpRefInfo {
    /// GNSS reference information. Only valid if time base is GNSS.
    #[ubx(bits = 4, map_type = TimeRefGnss)]
    time_ref_gnss: u8,
    /// UTC standard identifier. Only valid if time base is UTC.
    #[ubx(bits = 4, map_type = UtcStandard)]
    utc_standard: u8,
}

#[ubx_enum]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRefGnss {
    Gps = 0,
    Glonass = 1,
    Beidou = 2,
    Galileo = 3,
    NavIc = 4,
    Unknown = 15,
}

/// Time mode survey-in status
#[ubx_message]
#[ubx(class = 0x0d, id = 0x04, fixed_payload_len = 28)]
pub struct TimSvin {
    /// Passed survey-in minimum duration
    #[ubx(unit = "s")]
    dur: u32,
    /// Current survey-in mean position ECEF X coordinate
    #[ubx(unit = "cm")]
    mean_x: i32,
    /// Current survey-in mean position ECEF Y coordinate
    #[ubx(unit = "cm")]
    mean_y: i32,
    /// Current survey-in mean position ECEF Z coordinate
    #[ubx(unit = "cm")]
    mean_z: i32,
    /// Current survey-in mean position 3D variance
    #[ubx(unit = "mm^2")]
    mean_v: u32,
    /// Number of position observations used during survey-in
    obs: u32,
    /// Survey-in position validity flag, 1 = valid, otherwise 0
    #[ubx(valid_max = 1)]
    valid: u8,
    /// Survey-in in progress flag, 1 = in-progress, otherwise 0
    #[ubx(valid_max = 1)]
    active: u8,
    reserved: Reserved<2>,
}
