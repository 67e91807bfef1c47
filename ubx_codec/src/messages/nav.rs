//! NAV: navigation results

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};

use super::{GnssId, SvHealth, UtcStandard};
use crate::{
    error::DateTimeError, ubx_bitfield, ubx_bundle, ubx_enum, ubx_flags_field, ubx_message, List,
    Reserved,
};

/// Position solution in ECEF
#[ubx_message]
#[ubx(class = 0x01, id = 0x01, fixed_payload_len = 20)]
pub struct NavPosEcef {
    /// GPS Millisecond Time of Week
    itow: u32,

    /// ECEF X coordinate
    #[ubx(map_type = f64, scale = 1e-2, alias = ecef_x_meters, unit = "m")]
    ecef_x: i32,

    /// ECEF Y coordinate
    #[ubx(map_type = f64, scale = 1e-2, alias = ecef_y_meters, unit = "m")]
    ecef_y: i32,

    /// ECEF Z coordinate
    #[ubx(map_type = f64, scale = 1e-2, alias = ecef_z_meters, unit = "m")]
    ecef_z: i32,

    /// Position Accuracy Estimate
    #[ubx(map_type = f64, scale = 1e-2, alias = p_acc_meters, unit = "m")]
    p_acc: u32,
}

/// Geodetic Position Solution
#[ubx_message]
#[ubx(class = 0x01, id = 0x02, fixed_payload_len = 28)]
pub struct NavPosLlh {
    /// GPS Millisecond Time of Week
    itow: u32,

    /// Longitude
    #[ubx(map_type = f64, scale = 1e-7, alias = lon_degrees, unit = "deg")]
    lon: i32,

    /// Latitude
    #[ubx(map_type = f64, scale = 1e-7, alias = lat_degrees, unit = "deg")]
    lat: i32,

    /// Height above Ellipsoid
    #[ubx(map_type = f64, scale = 1e-3, alias = height_meters, unit = "m")]
    height: i32,

    /// Height above mean sea level
    #[ubx(map_type = f64, scale = 1e-3, alias = height_msl_meters, unit = "m")]
    height_msl: i32,

    /// Horizontal Accuracy Estimate
    #[ubx(map_type = f64, scale = 1e-3, alias = h_acc_meters, unit = "m")]
    h_acc: u32,

    /// Vertical Accuracy Estimate
    #[ubx(map_type = f64, scale = 1e-3, alias = v_acc_meters, unit = "m")]
    v_acc: u32,
}

/// Receiver Navigation Status
#[ubx_message]
#[ubx(class = 0x01, id = 0x03, fixed_payload_len = 16)]
pub struct NavStatus {
    /// GPS Millisecond Time of Week
    itow: u32,

    /// GPS fix Type, this value does not qualify a fix as valid and within
    /// the limits
    #[ubx(map_type = GpsFix)]
    gps_fix: u8,

    /// Navigation Status Flags
    flags: NavStatusFlags,

    /// Fix Status Information
    fix_stat: NavFixStatus,

    /// Further information about navigation output
    flags2: NavStatusFlags2,

    /// Time to first fix (millisecond time tag)
    ttff: u32,

    /// Milliseconds since Startup / Reset
    msss: u32,
}

/// GPS fix Type
#[ubx_enum]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpsFix {
    NoFix = 0,
    DeadReckoningOnly = 1,
    Fix2D = 2,
    Fix3D = 3,
    GpsPlusDeadReckoning = 4,
    TimeOnlyFix = 5,
}

bitflags::bitflags! {
    /// Navigation Status Flags
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct NavStatusFlags: u8 {
        /// position and velocity valid and within DOP and ACC Masks
        const GPS_FIX_OK = 1;
        /// DGPS used
        const DIFF_SOLN = 2;
        /// Week Number valid
        const WKN_SET = 4;
        /// Time of Week valid
        const TOW_SET = 8;
    }
}
ubx_flags_field!(NavStatusFlags: u8);

#[ubx_bitfield(u8)]
pub struct NavFixStatus {
    /// Differential corrections available
    #[ubx(bits = 1)]
    diff_corr: bool,
    /// Valid carrier phase range solution
    #[ubx(bits = 1)]
    carr_sol_valid: bool,
    #[ubx(bits = 4, reserved)]
    reserved: u8,
    #[ubx(bits = 2, map_type = MapMatchingStatus)]
    map_matching: u8,
}

#[ubx_enum]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapMatchingStatus {
    None = 0,
    /// valid, i.e. map matching data was received, but was too old
    Valid = 1,
    /// used, map matching data was applied
    Used = 2,
    /// map matching was the reason to enable the dead reckoning
    /// gpsFix type instead of publishing no fix
    Dr = 3,
}

#[ubx_bitfield(u8)]
pub struct NavStatusFlags2 {
    #[ubx(bits = 2, map_type = PowerSaveState)]
    psm_state: u8,
    #[ubx(bits = 1, reserved)]
    reserved1: u8,
    #[ubx(bits = 2, map_type = SpoofingState)]
    spoof_det_state: u8,
    #[ubx(bits = 1, reserved)]
    reserved2: u8,
    #[ubx(bits = 2, map_type = CarrierSolution)]
    carr_soln: u8,
}

/// Power save mode state, only for FW version >= 7.01
#[ubx_enum]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerSaveState {
    Acquisition = 0,
    Tracking = 1,
    PowerOptimizedTracking = 2,
    Inactive = 3,
}

#[ubx_enum]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpoofingState {
    Unknown = 0,
    NoSpoofing = 1,
    Spoofing = 2,
    MultipleSpoofing = 3,
}

#[ubx_enum]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarrierSolution {
    NoCarrier = 0,
    Float = 1,
    Fixed = 2,
}

/// Dilution of precision
#[ubx_message]
#[ubx(class = 0x01, id = 0x04, fixed_payload_len = 18)]
pub struct NavDop {
    /// GPS Millisecond Time of Week
    itow: u32,
    #[ubx(map_type = f32, scale = 1e-2)]
    geometric_dop: u16,
    #[ubx(map_type = f32, scale = 1e-2)]
    position_dop: u16,
    #[ubx(map_type = f32, scale = 1e-2)]
    time_dop: u16,
    #[ubx(map_type = f32, scale = 1e-2)]
    vertical_dop: u16,
    #[ubx(map_type = f32, scale = 1e-2)]
    horizontal_dop: u16,
    #[ubx(map_type = f32, scale = 1e-2)]
    northing_dop: u16,
    #[ubx(map_type = f32, scale = 1e-2)]
    easting_dop: u16,
}

/// Velocity Solution in NED
#[ubx_message]
#[ubx(class = 0x01, id = 0x12, fixed_payload_len = 36)]
pub struct NavVelNed {
    /// GPS Millisecond Time of Week
    itow: u32,

    /// north velocity
    #[ubx(map_type = f64, scale = 1e-2, unit = "m/s")]
    vel_north: i32,

    /// east velocity
    #[ubx(map_type = f64, scale = 1e-2, unit = "m/s")]
    vel_east: i32,

    /// down velocity
    #[ubx(map_type = f64, scale = 1e-2, unit = "m/s")]
    vel_down: i32,

    /// Speed 3-D
    #[ubx(map_type = f64, scale = 1e-2, unit = "m/s")]
    speed_3d: u32,

    /// Ground speed (2-D)
    #[ubx(map_type = f64, scale = 1e-2, unit = "m/s")]
    ground_speed: u32,

    /// Heading of motion 2-D
    #[ubx(map_type = f64, scale = 1e-5, alias = heading_degrees, unit = "deg")]
    heading: i32,

    /// Speed accuracy Estimate
    #[ubx(map_type = f64, scale = 1e-2, unit = "m/s")]
    speed_accuracy_estimate: u32,

    /// Course / Heading accuracy estimate
    #[ubx(map_type = f64, scale = 1e-5, unit = "deg")]
    course_heading_accuracy_estimate: u32,
}

/// GPS Time Solution
#[ubx_message]
#[ubx(class = 0x01, id = 0x20, fixed_payload_len = 16)]
pub struct NavTimeGps {
    /// GPS time of week of the navigation epoch.
    itow: u32,

    /// Fractional part of iTOW (range: +/-500000).
    #[ubx(unit = "ns", valid_min = -500_000, valid_max = 500_000)]
    ftow: i32,

    /// GPS week number of the navigation epoch
    week: i16,

    /// GPS leap seconds (GPS-UTC)
    leap_s: i8,

    /// Validity Flags
    valid: NavTimeGpsValid,

    /// Time Accuracy Estimate
    #[ubx(unit = "ns")]
    t_acc: u32,
}

bitflags::bitflags! {
    /// Validity flags of `NavTimeGps`
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct NavTimeGpsValid: u8 {
        /// Valid GPS time of week (iTOW & fTOW)
        const TOW_VALID = 1;
        /// Valid GPS week number
        const WEEK_VALID = 2;
        /// Valid GPS leap seconds
        const LEAP_S_VALID = 4;
    }
}
ubx_flags_field!(NavTimeGpsValid: u8);

/// UTC Time Solution
#[ubx_message]
#[ubx(class = 0x01, id = 0x21, fixed_payload_len = 20)]
pub struct NavTimeUtc {
    /// GPS Millisecond Time of Week
    itow: u32,

    /// Time Accuracy Estimate
    #[ubx(unit = "ns")]
    time_accuracy_estimate_ns: u32,

    /// Nanoseconds of second, range -1e9 .. 1e9
    nanos: i32,

    /// Year, range 1999..2099
    year: u16,

    /// Month, range 1..12
    month: u8,

    /// Day of Month, range 1..31
    day: u8,

    /// Hour of Day, range 0..23
    hour: u8,

    /// Minute of Hour, range 0..59
    min: u8,

    /// Seconds of Minute, range 0..59
    sec: u8,

    /// Validity Flags
    valid: NavTimeUtcValid,
}

#[ubx_bitfield(u8)]
pub struct NavTimeUtcValid {
    /// Valid Time of Week
    #[ubx(bits = 1)]
    valid_tow: bool,
    /// Valid Week Number
    #[ubx(bits = 1)]
    valid_wkn: bool,
    /// Valid UTC (Leap Seconds already known)
    #[ubx(bits = 1)]
    valid_utc: bool,
    #[ubx(bits = 1, reserved)]
    reserved: u8,
    #[ubx(bits = 4, map_type = UtcStandard)]
    utc_standard: u8,
}

impl TryFrom<&NavTimeUtc> for DateTime<Utc> {
    type Error = DateTimeError;

    fn try_from(sol: &NavTimeUtc) -> Result<Self, Self::Error> {
        let date = NaiveDate::from_ymd_opt(
            i32::from(sol.year),
            u32::from(sol.month),
            u32::from(sol.day),
        )
        .ok_or(DateTimeError::InvalidDate)?;
        let time = NaiveTime::from_hms_opt(
            u32::from(sol.hour),
            u32::from(sol.min),
            u32::from(sol.sec),
        )
        .ok_or(DateTimeError::InvalidTime)?;
        const NANOS_LIM: u32 = 1_000_000_000;
        if sol.nanos.unsigned_abs() >= NANOS_LIM {
            return Err(DateTimeError::InvalidNanoseconds);
        }

        let dt = NaiveDateTime::new(date, time) + TimeDelta::nanoseconds(i64::from(sol.nanos));
        Ok(dt.and_utc())
    }
}

/// Clock Solution
#[ubx_message]
#[ubx(class = 0x01, id = 0x22, fixed_payload_len = 20)]
pub struct NavClock {
    /// GPS Millisecond Time of Week
    itow: u32,

    /// Clock bias
    #[ubx(map_type = f64, scale = 1e-9, alias = clk_bias_seconds, unit = "s")]
    clk_bias: i32,

    /// Clock drift
    #[ubx(map_type = f64, scale = 1e-9, unit = "s/s")]
    clk_drift: i32,

    /// Time accuracy estimate
    #[ubx(map_type = f64, scale = 1e-9, unit = "s")]
    time_acc: u32,

    /// Frequency accuracy estimate
    #[ubx(map_type = f64, scale = 1e-12, unit = "s/s")]
    freq_acc: u32,
}

/// Space Vehicle Information
#[ubx_message]
#[ubx(class = 0x01, id = 0x30, max_payload_len = 3068)] // 8 + 255 * 12
pub struct NavSvinfo {
    /// GPS Millisecond Time of Week
    itow: u32,

    /// Number of channels
    num_ch: u8,

    global_flags: NavSvinfoGlobalFlags,

    reserved: Reserved<2>,

    #[ubx(count = num_ch)]
    channels: List<NavSvinfoCh>,
}

#[ubx_bitfield(u8)]
pub struct NavSvinfoGlobalFlags {
    #[ubx(bits = 3, map_type = ChipGeneration)]
    chip_gen: u8,
    #[ubx(bits = 5, reserved)]
    reserved: u8,
}

#[ubx_enum]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipGeneration {
    Antaris = 0,
    Ublox5 = 1,
    Ublox6 = 2,
    Ublox7 = 3,
    Ublox8 = 4,
}

#[ubx_bundle]
pub struct NavSvinfoCh {
    /// Channel number, 255 for SVs not assigned to a channel
    chn: u8,
    /// Satellite ID
    svid: u8,
    flags: NavSvinfoChFlags,
    quality: NavSvinfoQuality,
    /// Carrier to Noise Ratio (Signal Strength)
    #[ubx(unit = "dBHz")]
    cno: u8,
    /// Elevation in integer degrees
    #[ubx(unit = "deg")]
    elev: i8,
    /// Azimuth in integer degrees
    #[ubx(unit = "deg")]
    azim: i16,
    /// Pseudo range residual
    #[ubx(map_type = f64, scale = 1e-2, unit = "m")]
    pr_res: i32,
}

bitflags::bitflags! {
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct NavSvinfoChFlags: u8 {
        /// SV is used for navigation
        const SV_USED = 0x01;
        /// Differential correction data is available for this SV
        const DIFF_CORR = 0x02;
        /// Orbit information is available for this SV (Ephemeris or Almanac)
        const ORBIT_AVAIL = 0x04;
        /// Orbit information is Ephemeris
        const ORBIT_EPH = 0x08;
        /// SV is unhealthy / shall not be used
        const UNHEALTHY = 0x10;
        /// Orbit information is Almanac Plus
        const ORBIT_ALM = 0x20;
        /// Orbit information is AssistNow Autonomous
        const ORBIT_AOP = 0x40;
        /// Carrier smoothed pseudorange used
        const SMOOTHED = 0x80;
    }
}
ubx_flags_field!(NavSvinfoChFlags: u8);

#[ubx_bitfield(u8)]
pub struct NavSvinfoQuality {
    #[ubx(bits = 4, map_type = SignalQuality)]
    quality_ind: u8,
    #[ubx(bits = 4, reserved)]
    reserved: u8,
}

/// Signal quality indicator
#[ubx_enum]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalQuality {
    NoSignal = 0,
    Searching = 1,
    SignalAcquired = 2,
    SignalDetected = 3,
    CodeLock = 4,
    CodeAndCarrierLock = 5,
    CodeAndCarrierLock2 = 6,
    CodeAndCarrierLock3 = 7,
}

/// DGPS Data Used for NAV
#[ubx_message]
#[ubx(class = 0x01, id = 0x31, max_payload_len = 3076)] // 16 + 255 * 12
pub struct NavDgps {
    /// GPS Millisecond Time of Week
    itow: u32,

    /// Age of newest correction data
    #[ubx(unit = "ms")]
    age: i32,

    /// DGPS base station identifier
    base_id: i16,

    /// DGPS base station health status
    base_health: i16,

    /// Number of channels for which correction data is following
    num_ch: u8,

    /// DGPS correction type status
    #[ubx(map_type = DgpsCorrection)]
    status: u8,

    reserved: Reserved<2>,

    #[ubx(count = num_ch)]
    data: List<NavDgpsCh>,
}

#[ubx_enum]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DgpsCorrection {
    None = 0,
    PrPrr = 1,
}

#[ubx_bundle]
pub struct NavDgpsCh {
    /// Satellite ID
    svid: i8,
    flags: NavDgpsFlags,
    /// Age of the latest correction data
    #[ubx(unit = "ms")]
    age_c: u16,
    /// Pseudorange correction
    #[ubx(unit = "m")]
    prc: f32,
    /// Pseudorange rate correction
    #[ubx(unit = "m/s")]
    prrc: f32,
}

#[ubx_bitfield(u8)]
pub struct NavDgpsFlags {
    /// GPS channel number this SV is on
    #[ubx(bits = 4)]
    channel: u8,
    /// DGPS used for this SV
    #[ubx(bits = 1)]
    dgps_used: bool,
    #[ubx(bits = 3, reserved)]
    reserved: u8,
}

/// SBAS Status Data
#[ubx_message]
#[ubx(class = 0x01, id = 0x32, max_payload_len = 3072)] // 12 + 255 * 12
pub struct NavSbas {
    /// GPS Millisecond Time of Week
    itow: u32,

    /// PRN Number of the GEO where correction and integrity data is used from
    geo: u8,

    /// SBAS Mode
    #[ubx(map_type = SbasMode)]
    mode: u8,

    /// SBAS System (WAAS/EGNOS/...), -1 unknown
    sys: i8,

    /// SBAS Services available
    service: SbasService,

    /// Number of SV data following
    cnt: u8,

    reserved: Reserved<3>,

    #[ubx(count = cnt)]
    data: List<NavSbasSv>,
}

#[ubx_enum]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SbasMode {
    Disabled = 0,
    EnabledIntegrity = 1,
    EnabledTestMode = 3,
}

bitflags::bitflags! {
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct SbasService: u8 {
        const RANGING = 0x01;
        const CORRECTIONS = 0x02;
        const INTEGRITY = 0x04;
        const TEST_MODE = 0x08;
        const BAD = 0x10;
    }
}
ubx_flags_field!(SbasService: u8);

#[ubx_bundle]
pub struct NavSbasSv {
    /// SV ID
    svid: u8,
    /// Flags for this SV
    flags: u8,
    /// Monitoring status
    udre: u8,
    /// System (WAAS/EGNOS/...), same as `sys`
    sv_sys: i8,
    /// Services available, same as `service`
    sv_service: SbasService,
    reserved1: Reserved<1>,
    /// Pseudo Range correction
    #[ubx(unit = "cm")]
    prc: i16,
    reserved2: Reserved<2>,
    /// Ionosphere correction
    #[ubx(unit = "cm")]
    ic: i16,
}

/// GNSS Orbit Database Info
#[ubx_message]
#[ubx(class = 0x01, id = 0x34, max_payload_len = 1538)] // 8 + 255 * 6
pub struct NavOrb {
    /// GPS Millisecond Time of Week
    itow: u32,

    /// Message version (0)
    version: u8,

    /// Number of SVs in the database
    num_sv: u8,

    reserved: Reserved<2>,

    #[ubx(count = num_sv)]
    svs: List<NavOrbSv>,
}

#[ubx_bundle]
pub struct NavOrbSv {
    #[ubx(map_type = GnssId)]
    gnss_id: u8,
    sv_id: u8,
    sv_flag: NavOrbSvFlag,
    /// Ephemeris data
    eph: NavOrbInfo,
    /// Almanac data
    alm: NavOrbInfo,
    /// Other orbit data available
    other_orb: NavOrbInfo,
}

#[ubx_bitfield(u8)]
pub struct NavOrbSvFlag {
    #[ubx(bits = 2, map_type = SvHealth)]
    health: u8,
    #[ubx(bits = 2, map_type = SvVisibility)]
    visibility: u8,
    #[ubx(bits = 4, reserved)]
    reserved: u8,
}

#[ubx_enum]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SvVisibility {
    Unknown = 0,
    BelowHorizon = 1,
    AboveHorizon = 2,
    AboveElevationMask = 3,
}

/// Usability and source of one kind of orbit data
#[ubx_bitfield(u8)]
pub struct NavOrbInfo {
    /// 0: unusable, 31: unknown, otherwise usable for (n - 1) * 15 minutes
    #[ubx(bits = 5)]
    usability: u8,
    /// 0: not available, otherwise the source type
    #[ubx(bits = 3)]
    source: u8,
}

/// Satellite Information
#[ubx_message]
#[ubx(class = 0x01, id = 0x35, max_payload_len = 3068)] // 8 + 255 * 12
pub struct NavSat {
    /// GPS time of week in ms
    itow: u32,

    /// Message version, should be 1
    version: u8,

    num_svs: u8,

    reserved: Reserved<2>,

    #[ubx(count = num_svs)]
    svs: List<NavSatSvInfo>,
}

#[ubx_bundle]
pub struct NavSatSvInfo {
    #[ubx(map_type = GnssId)]
    gnss_id: u8,
    sv_id: u8,
    /// Carrier to noise ratio
    #[ubx(unit = "dBHz")]
    cno: u8,
    /// Elevation, range +/-90, unknown if out of range
    #[ubx(unit = "deg")]
    elev: i8,
    /// Azimuth, range 0..360, unknown if elevation is out of range
    #[ubx(unit = "deg")]
    azim: i16,
    /// Pseudorange residual
    #[ubx(map_type = f32, scale = 1e-1, unit = "m")]
    pr_res: i16,
    flags: NavSatSvFlags,
}

#[ubx_bitfield(u32)]
pub struct NavSatSvFlags {
    #[ubx(bits = 3, map_type = SignalQuality)]
    quality_ind: u8,
    #[ubx(bits = 1)]
    sv_used: bool,
    #[ubx(bits = 2, map_type = SvHealth)]
    health: u8,
    #[ubx(bits = 1)]
    diff_corr: bool,
    #[ubx(bits = 1)]
    smoothed: bool,
    /// 0: none, 1: ephemeris, 2: almanac, 3: AssistNow Offline,
    /// 4: AssistNow Autonomous, 5..7: other
    #[ubx(bits = 3)]
    orbit_source: u8,
    #[ubx(bits = 1)]
    eph_avail: bool,
    #[ubx(bits = 1)]
    alm_avail: bool,
    #[ubx(bits = 1)]
    ano_avail: bool,
    #[ubx(bits = 1)]
    aop_avail: bool,
    #[ubx(bits = 1, reserved)]
    reserved1: u8,
    #[ubx(bits = 1)]
    sbas_corr_used: bool,
    #[ubx(bits = 1)]
    rtcm_corr_used: bool,
    #[ubx(bits = 1)]
    slas_corr_used: bool,
    #[ubx(bits = 1)]
    spartn_corr_used: bool,
    #[ubx(bits = 1)]
    pr_corr_used: bool,
    #[ubx(bits = 1)]
    cr_corr_used: bool,
    #[ubx(bits = 1)]
    do_corr_used: bool,
    #[ubx(bits = 9, reserved)]
    reserved2: u16,
}

/// Geofencing status
#[ubx_message]
#[ubx(class = 0x01, id = 0x39, max_payload_len = 518)] // 8 + 255 * 2
pub struct NavGeofence {
    /// GPS Millisecond Time of Week
    itow: u32,

    /// Message version (0x00 for this version)
    version: u8,

    /// Geofencing status
    #[ubx(map_type = GeofencingStatus)]
    status: u8,

    /// Number of geofences
    num_fences: u8,

    /// Combined (logical OR) state of all geofences
    #[ubx(map_type = GeofenceState)]
    comb_state: u8,

    #[ubx(count = num_fences)]
    fences: List<NavGeofenceState>,
}

#[ubx_enum]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeofencingStatus {
    NotAvailable = 0,
    Active = 1,
}

#[ubx_enum]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeofenceState {
    Unknown = 0,
    Inside = 1,
    Outside = 2,
}

#[ubx_bundle]
pub struct NavGeofenceState {
    #[ubx(map_type = GeofenceState)]
    state: u8,
    reserved: Reserved<1>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CodecError, UbxRead, UbxRefresh, UbxValid, UbxWrite};

    #[test]
    fn nav_pos_llh_scaling() {
        let mut msg = NavPosLlh::default();
        msg.set_lat_degrees(52.123_456_7);
        msg.set_lon_degrees(-4.5);
        msg.set_height_msl_meters(12.345);
        assert_eq!(msg.lat, 521_234_567);
        assert_eq!(msg.lon, -45_000_000);
        assert_eq!(msg.height_msl, 12_345);
        assert!((msg.lat_degrees() - 52.123_456_7).abs() < 1e-9);
    }

    #[test]
    fn nav_status_enum_and_bits() {
        let payload = [
            0x10, 0x27, 0, 0, // itow
            0x03, // gps_fix
            0x0d, // flags
            0x81, // fix_stat
            0x41, // flags2
            0xe8, 0x03, 0, 0, // ttff
            0x20, 0x4e, 0, 0, // msss
        ];
        let msg = NavStatus::from_payload(&payload).unwrap();
        assert_eq!(msg.gps_fix(), Some(GpsFix::Fix3D));
        assert!(msg
            .flags
            .contains(NavStatusFlags::GPS_FIX_OK | NavStatusFlags::WKN_SET | NavStatusFlags::TOW_SET));
        assert!(msg.fix_stat.diff_corr());
        assert!(!msg.fix_stat.carr_sol_valid());
        assert_eq!(msg.fix_stat.map_matching(), Some(MapMatchingStatus::Used));
        assert_eq!(msg.flags2.psm_state(), Some(PowerSaveState::Tracking));
        assert_eq!(msg.flags2.carr_soln(), Some(CarrierSolution::Float));
        assert_eq!(msg.ttff, 1000);
        assert!(msg.valid());

        let mut bad = payload;
        bad[4] = 9;
        let msg = NavStatus::from_payload(&bad).unwrap();
        assert_eq!(msg.gps_fix(), None);
        assert_eq!(msg.invalid_field(), Some("gps_fix"));
    }

    #[test]
    fn nav_time_utc_to_datetime() {
        let msg = NavTimeUtc {
            year: 2023,
            month: 6,
            day: 30,
            hour: 23,
            min: 59,
            sec: 59,
            nanos: -250_000_000,
            valid: NavTimeUtcValid::default()
                .with_valid_utc(true)
                .with_utc_standard(UtcStandard::Usno),
            ..Default::default()
        };
        let expected = NaiveDate::from_ymd_opt(2023, 6, 30)
            .and_then(|d| d.and_hms_milli_opt(23, 59, 58, 750))
            .unwrap()
            .and_utc();
        assert_eq!(DateTime::<Utc>::try_from(&msg), Ok(expected));
        assert_eq!(msg.valid.raw(), 0x34);

        let bad = NavTimeUtc {
            month: 13,
            ..msg.clone()
        };
        assert_eq!(
            DateTime::<Utc>::try_from(&bad),
            Err(DateTimeError::InvalidDate)
        );
        let bad = NavTimeUtc {
            nanos: 1_000_000_000,
            ..msg
        };
        assert_eq!(
            DateTime::<Utc>::try_from(&bad),
            Err(DateTimeError::InvalidNanoseconds)
        );
    }

    #[test]
    fn nav_sat_flags_layout() {
        let flags = NavSatSvFlags::default()
            .with_quality_ind(SignalQuality::CodeAndCarrierLock)
            .with_sv_used(true)
            .with_health(SvHealth::Healthy)
            .with_orbit_source(1)
            .with_eph_avail(true)
            .with_do_corr_used(true);
        assert_eq!(flags.raw(), 0x0040_091d);
        assert!(!flags.has_reserved_bits());
        assert_eq!(NavSatSvFlags::RESERVED_MASK, 0xff80_8000);
    }

    #[test]
    fn nav_sat_list_follows_count() {
        let mut msg = NavSat {
            itow: 1,
            version: 1,
            ..Default::default()
        };
        for sv_id in 1..=3 {
            msg.svs.push(NavSatSvInfo {
                sv_id,
                cno: 40,
                ..Default::default()
            });
        }
        assert!(msg.refresh());
        assert_eq!(msg.num_svs, 3);
        let payload = msg.to_payload().unwrap();
        assert_eq!(payload.len(), 8 + 3 * 12);

        let back = NavSat::from_payload(&payload).unwrap();
        assert_eq!(back, msg);

        // count claims one more element than the payload holds
        let mut short = payload.clone();
        short[5] = 4;
        assert!(matches!(
            NavSat::from_payload(&short),
            Err(CodecError::NotEnoughData { need: 48, got: 36 })
        ));
    }

    #[test]
    fn nav_geofence_states() {
        let payload = [0, 0, 0, 0, 0, 1, 2, 2, 1, 0, 2, 0];
        let msg = NavGeofence::from_payload(&payload).unwrap();
        assert_eq!(msg.status(), Some(GeofencingStatus::Active));
        assert_eq!(msg.comb_state(), Some(GeofenceState::Outside));
        let states: Vec<_> = msg.fences.iter().map(|f| f.state()).collect();
        assert_eq!(
            states,
            [Some(GeofenceState::Inside), Some(GeofenceState::Outside)]
        );
    }
}
