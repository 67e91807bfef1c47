//! RXM: receiver manager output

use super::GnssId;
use crate::{ubx_bitfield, ubx_bundle, ubx_flags_field, ubx_message, List, Reserved};

/// Multi-GNSS Raw Measurement Data
#[ubx_message]
#[ubx(class = 0x02, id = 0x15, max_payload_len = 8176)] // 16 + 255 * 32
pub struct RxmRawx {
    /// Measurement time of week in receiver local time approximately aligned to the GPS time system.
    #[ubx(unit = "s")]
    rcv_tow: f64,
    /// GPS week number in receiver local time.
    week: u16,
    /// GPS leap seconds (GPS-UTC)
    leap_s: i8,
    /// Number of measurements to follow
    num_meas: u8,
    /// Receiver tracking status bitfield
    rec_stat: RecStat,
    reserved1: Reserved<3>,
    #[ubx(count = num_meas)]
    measurements: List<RxmRawxMeas>,
}

bitflags::bitflags! {
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct RecStat: u8 {
        /// Leap seconds have been determined
        const LEAP_SEC = 0x1;
        /// Clock reset applied.
        const CLK_RESET = 0x2;
    }
}
ubx_flags_field!(RecStat: u8);

#[ubx_bundle]
pub struct RxmRawxMeas {
    /// Pseudorange measurement
    #[ubx(unit = "m")]
    pr_mes: f64,
    /// Carrier phase measurement
    #[ubx(unit = "cycles")]
    cp_mes: f64,
    /// Doppler measurement (positive sign for approaching satellites)
    #[ubx(unit = "Hz")]
    do_mes: f32,
    #[ubx(map_type = GnssId)]
    gnss_id: u8,
    sv_id: u8,
    reserved2: Reserved<1>,
    /// Only used for GLONASS: This is the frequency slot + 7 (range from 0 to 13)
    freq_id: u8,
    /// Carrier phase locktime counter (maximum 64500ms)
    #[ubx(unit = "ms")]
    lock_time: u16,
    /// Carrier-to-noise density ratio
    #[ubx(unit = "dBHz")]
    cno: u8,
    /// Estimated pseudorange measurement standard deviation, 0.01 * 2^n m
    pr_stdev: RawxStdev,
    /// Estimated carrier phase measurement standard deviation, 0.004 cycles per step
    cp_stdev: RawxStdev,
    /// Estimated Doppler measurement standard deviation, 0.002 * 2^n Hz
    do_stdev: RawxStdev,
    /// Tracking status bitfield
    trk_stat: TrkStat,
    reserved3: Reserved<1>,
}

/// Standard deviation index in the low nibble
#[ubx_bitfield(u8)]
pub struct RawxStdev {
    #[ubx(bits = 4)]
    index: u8,
    #[ubx(bits = 4, reserved)]
    reserved: u8,
}

bitflags::bitflags! {
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct TrkStat: u8 {
        /// Pseudorange valid
        const PR_VALID = 0x1;
        /// Carrier phase valid
        const CP_VALID = 0x2;
        /// Half cycle valid
        const HALF_CYC = 0x4;
        /// Half cycle subtracted from phase
        const SUB_HALF_CYC = 0x8;
    }
}
ubx_flags_field!(TrkStat: u8);

/// SV Status Info
#[ubx_message]
#[ubx(class = 0x02, id = 0x20, max_payload_len = 1538)] // 8 + 255 * 6
pub struct RxmSvsi {
    /// GPS time of week of the navigation epoch
    itow: u32,
    /// GPS week number of the navigation epoch
    week: i16,
    /// Number of visible satellites
    num_vis: u8,
    /// Number of per-SV data blocks following
    num_sv: u8,
    #[ubx(count = num_sv)]
    svs: List<RxmSvsiSv>,
}

#[ubx_bundle]
pub struct RxmSvsiSv {
    /// Satellite ID
    svid: u8,
    /// Information Flags
    sv_flag: RxmSvsiFlag,
    /// Azimuth
    #[ubx(unit = "deg")]
    azim: i16,
    /// Elevation
    #[ubx(unit = "deg")]
    elev: i8,
    /// Age of Almanac and Ephemeris
    age: RxmSvsiAge,
}

#[ubx_bitfield(u8)]
pub struct RxmSvsiFlag {
    /// Figure of Merit (URA) range 0..15
    #[ubx(bits = 4)]
    ura: u8,
    /// SV healthy flag
    #[ubx(bits = 1)]
    healthy: bool,
    /// Ephemeris valid
    #[ubx(bits = 1)]
    eph_val: bool,
    /// Almanac valid
    #[ubx(bits = 1)]
    alm_val: bool,
    /// SV not available
    #[ubx(bits = 1)]
    not_avail: bool,
}

/// Ages are stored with an offset of 4, so 0 means -4
#[ubx_bitfield(u8)]
pub struct RxmSvsiAge {
    #[ubx(bits = 4)]
    alm_age: u8,
    #[ubx(bits = 4)]
    eph_age: u8,
}

impl RxmSvsiAge {
    /// Age of almanac in days
    pub fn alm_age_days(self) -> i8 {
        self.alm_age() as i8 - 4
    }

    /// Age of ephemeris in hours
    pub fn eph_age_hours(self) -> i8 {
        self.eph_age() as i8 - 4
    }
}
