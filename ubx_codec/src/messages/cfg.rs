//! CFG: configuration input

use super::GnssId;
use crate::{ubx_bitfield, ubx_bundle, ubx_enum, ubx_flags_field, ubx_message, List, Reserved};

/// Port Configuration for UART
#[ubx_message]
#[ubx(class = 0x06, id = 0x00, fixed_payload_len = 20)]
pub struct CfgPrtUart {
    #[ubx(map_type = UartPortId, default = 1)]
    port_id: u8,
    reserved0: Reserved<1>,
    tx_ready: TxReady,
    mode: UartMode,
    #[ubx(default = 9600, unit = "bit/s")]
    baud_rate: u32,
    in_proto_mask: InProtoMask,
    out_proto_mask: OutProtoMask,
    flags: CfgPrtFlags,
    reserved5: Reserved<2>,
}

#[ubx_enum]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UartPortId {
    Uart1 = 1,
    Uart2 = 2,
}

/// TX ready PIN configuration
#[ubx_bitfield(u16)]
pub struct TxReady {
    /// Enable TX ready feature for this port
    #[ubx(bits = 1)]
    en: bool,
    /// Polarity, false: high-active, true: low-active
    #[ubx(bits = 1)]
    pol: bool,
    /// PIO to be used (must not be in use by another function)
    #[ubx(bits = 5)]
    pin: u8,
    /// Threshold, in units of 8 bytes
    #[ubx(bits = 9)]
    thres: u16,
}

#[ubx_bitfield(u32)]
pub struct UartMode {
    /// Bit 4 is set by older receivers for compatibility
    #[ubx(bits = 6)]
    compat: u8,
    #[ubx(bits = 2, map_type = DataBits)]
    char_len: u8,
    #[ubx(bits = 1, reserved)]
    reserved1: u8,
    #[ubx(bits = 3, map_type = Parity)]
    parity: u8,
    #[ubx(bits = 2, map_type = StopBits)]
    n_stop_bits: u8,
    #[ubx(bits = 18, reserved)]
    reserved2: u32,
}

impl UartMode {
    pub fn new(data_bits: DataBits, parity: Parity, stop_bits: StopBits) -> Self {
        Self::default()
            .with_char_len(data_bits)
            .with_parity(parity)
            .with_n_stop_bits(stop_bits)
    }
}

#[ubx_enum]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataBits {
    Five = 0,
    Six = 1,
    Seven = 2,
    Eight = 3,
}

#[ubx_enum]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even = 0,
    Odd = 1,
    None = 4,
}

#[ubx_enum]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopBits {
    One = 0,
    OneHalf = 1,
    Two = 2,
    Half = 3,
}

bitflags::bitflags! {
    /// A mask describing which input protocols are active
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct InProtoMask: u16 {
        const UBLOX = 1;
        const NMEA = 2;
        const RTCM = 4;
        /// The bitfield inRtcm3 is not supported in protocol
        /// versions less than 20
        const RTCM3 = 0x20;
    }
}
ubx_flags_field!(InProtoMask: u16);

bitflags::bitflags! {
    /// A mask describing which output protocols are active
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct OutProtoMask: u16 {
        const UBLOX = 1;
        const NMEA = 2;
        /// The bitfield outRtcm3 is not supported in protocol
        /// versions less than 20
        const RTCM3 = 0x20;
    }
}
ubx_flags_field!(OutProtoMask: u16);

bitflags::bitflags! {
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct CfgPrtFlags: u16 {
        /// Extended TX timeout: if set, the port will time out if
        /// allocated TX memory >=4 kB and no activity for 1.5 s
        const EXTENDED_TX_TIMEOUT = 0x2;
    }
}
ubx_flags_field!(CfgPrtFlags: u16);

/// Set Message Rate configuration on all ports
///
/// Send rate is relative to the event a message is registered on. For
/// example, if the rate of a navigation message is set to 2, the message
/// is sent every second navigation solution.
#[ubx_message]
#[ubx(class = 0x06, id = 0x01, fixed_payload_len = 8)]
pub struct CfgMsg {
    msg_class: u8,
    msg_id: u8,
    /// Rate on I2C, UART1, UART2, USB, SPI and the reserved sixth port
    rates: [u8; 6],
}

impl CfgMsg {
    /// Same rate for the message `T` on every port
    pub fn for_message<T: crate::UbxMessageMeta>(rate: u8) -> Self {
        Self {
            msg_class: T::CLASS,
            msg_id: T::ID,
            rates: [rate; 6],
        }
    }
}

/// Reset Receiver / Clear Backup Data Structures
#[ubx_message]
#[ubx(class = 0x06, id = 0x04, fixed_payload_len = 4)]
pub struct CfgRst {
    /// Battery backed RAM sections to clear
    nav_bbr_mask: NavBbrMask,

    /// Reset Type
    #[ubx(map_type = ResetMode)]
    reset_mode: u8,

    reserved1: Reserved<1>,
}

bitflags::bitflags! {
    /// Battery backed RAM sections to clear
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct NavBbrMask: u16 {
        const EPHEMERIS = 1;
        const ALMANAC = 2;
        const HEALTH = 4;
        const KLOBUCHARD = 8;
        const POSITION = 16;
        const CLOCK_DRIFT = 32;
        const OSCILATOR_PARAMETER = 64;
        const UTC_CORRECTION_PARAMETERS = 0x80;
        const RTC = 0x100;
        const SFDR_PARAMETERS = 0x800;
        const SFDR_VEHICLE_MONITORING_PARAMETERS = 0x1000;
        const TCT_PARAMETERS = 0x2000;
        const AUTONOMOUS_ORBIT_PARAMETERS = 0x8000;
    }
}
ubx_flags_field!(NavBbrMask: u16);

impl NavBbrMask {
    pub const HOT_START: Self = Self::empty();
    pub const WARM_START: Self = Self::EPHEMERIS;
    pub const COLD_START: Self = Self::all();
}

#[ubx_enum]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetMode {
    /// Hardware reset (Watchdog) immediately
    HardwareResetImmediately = 0,
    ControlledSoftwareReset = 0x1,
    ControlledSoftwareResetGpsOnly = 0x02,
    /// Hardware reset (Watchdog) after shutdown (>=FW6.0)
    HardwareResetAfterShutdown = 0x04,
    ControlledGpsStop = 0x08,
    ControlledGpsStart = 0x09,
}

/// Navigation/Measurement Rate Settings
#[ubx_message]
#[ubx(class = 0x06, id = 0x08, fixed_payload_len = 6)]
pub struct CfgRate {
    /// Measurement Rate, GPS measurements are taken every `measure_rate_ms` milliseconds
    #[ubx(default = 1000, valid_min = 25, unit = "ms")]
    measure_rate_ms: u16,

    /// Navigation Rate, in number of measurement cycles.
    #[ubx(default = 1, valid_min = 1, valid_max = 127)]
    nav_rate: u16,

    /// Alignment to reference time
    #[ubx(map_type = AlignmentToReferenceTime, default = 1)]
    time_ref: u16,
}

/// Alignment to reference time
#[ubx_enum]
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentToReferenceTime {
    Utc = 0,
    Gps = 1,
    Glo = 2,
    Bds = 3,
    Gal = 4,
}

/// GNSS system configuration
#[ubx_message]
#[ubx(class = 0x06, id = 0x3e, max_payload_len = 2044)] // 4 + 255 * 8
pub struct CfgGnss {
    /// Message version
    msg_ver: u8,
    /// Number of tracking channels available in hardware (read only)
    num_trk_ch_hw: u8,
    /// Number of tracking channels to use
    num_trk_ch_use: u8,
    /// Number of configuration blocks following
    num_config_blocks: u8,
    #[ubx(count = num_config_blocks)]
    blocks: List<CfgGnssBlock>,
}

#[ubx_bundle]
pub struct CfgGnssBlock {
    #[ubx(map_type = GnssId)]
    gnss_id: u8,
    /// Number of reserved (minimum) tracking channels for this GNSS system
    res_trk_ch: u8,
    /// Maximum number of tracking channels used for this GNSS system
    max_trk_ch: u8,
    reserved1: Reserved<1>,
    flags: CfgGnssFlags,
}

#[ubx_bitfield(u32)]
pub struct CfgGnssFlags {
    #[ubx(bits = 1)]
    enable: bool,
    #[ubx(bits = 15, reserved)]
    reserved1: u16,
    /// Signal configuration mask, depends on the GNSS
    #[ubx(bits = 8)]
    sig_cfg_mask: u8,
    #[ubx(bits = 8, reserved)]
    reserved2: u8,
}

/// External synchronization source configuration
#[ubx_message]
#[ubx(class = 0x06, id = 0x60, max_payload_len = 9184)] // 4 + 255 * 36
pub struct CfgEsrc {
    /// Message version (0 for this version)
    version: u8,
    /// Number of sources
    num_sources: u8,
    reserved1: Reserved<2>,
    #[ubx(count = num_sources)]
    sources: List<CfgEsrcSource>,
}

#[ubx_bundle]
pub struct CfgEsrcSource {
    /// EXTINT index of this source (0 for EXTINT0 and 1 for EXTINT1)
    ext_int: u8,
    #[ubx(map_type = EsrcSourceType)]
    source_type: u8,
    flags: EsrcFlags,
    /// Frequency of the source
    #[ubx(map_type = f64, scale = 0.25, alias = freq_hz, unit = "Hz")]
    freq: u32,
    reserved2: Reserved<4>,
    /// Oscillator stability limit over temperature
    #[ubx(map_type = f64, scale = 0.00390625, unit = "ppb")]
    with_temp: u32,
    /// Oscillator stability limit over age
    #[ubx(map_type = f64, scale = 0.00390625, unit = "ppb/year")]
    with_age: u32,
    /// Expected time to stabilize over the full temperature range
    #[ubx(unit = "s")]
    timeto_temp: u16,
    /// Maximum time over which the deviation is tracked
    #[ubx(unit = "s")]
    max_dev_lifetime: u16,
    /// Offset of this source versus UTC
    #[ubx(unit = "ns")]
    offset: i32,
    /// Uncertainty of `offset`
    #[ubx(unit = "ns")]
    offset_uncertainty: u32,
    /// Phase accuracy in the time source
    #[ubx(unit = "ns")]
    jitter: u32,
}

#[ubx_enum]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EsrcSourceType {
    None = 0,
    FrequencySource = 1,
    TimeSource = 2,
    TimeAndFrequencySource = 3,
}

#[ubx_bitfield(u16)]
pub struct EsrcFlags {
    /// Polarity of the signal, false: rising edge, true: falling edge
    #[ubx(bits = 1)]
    polarity: bool,
    /// Time base, false: GNSS, true: UTC
    #[ubx(bits = 1)]
    gnss_utc: bool,
    #[ubx(bits = 14, reserved)]
    reserved: u16,
}

/// Geofencing configuration
#[ubx_message]
#[ubx(class = 0x06, id = 0x69, max_payload_len = 3068)] // 8 + 255 * 12
pub struct CfgGeofence {
    /// Message version (0x00 for this version)
    version: u8,
    /// Number of geofences contained in this message
    num_fences: u8,
    /// Required confidence level for state evaluation
    #[ubx(map_type = GeofenceConfidence)]
    conf_lvl: u8,
    reserved1: Reserved<1>,
    /// 1 = Enable PIO combined fence state output, 0 = disable
    pio_enabled: u8,
    /// PIO pin polarity. 0 = Low means inside, 1 = Low means outside.
    pin_polarity: u8,
    /// PIO pin number
    pin: u8,
    reserved2: Reserved<1>,
    #[ubx(count = num_fences)]
    fences: List<CfgGeofenceFence>,
}

#[ubx_enum]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeofenceConfidence {
    NoConfidence = 0,
    /// 68%
    Sigma1 = 1,
    /// 95%
    Sigma2 = 2,
    /// 99.7%
    Sigma3 = 3,
    /// 99.99%
    Sigma4 = 4,
    /// 99.9999%
    Sigma5 = 5,
}

#[ubx_bundle]
pub struct CfgGeofenceFence {
    #[ubx(map_type = f64, scale = 1e-7, alias = lat_degrees, unit = "deg")]
    lat: i32,
    #[ubx(map_type = f64, scale = 1e-7, alias = lon_degrees, unit = "deg")]
    lon: i32,
    #[ubx(map_type = f64, scale = 1e-2, alias = radius_meters, unit = "m")]
    radius: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{UbxRead, UbxValid, UbxWrite};

    #[test]
    fn cfg_prt_uart_layout() {
        let msg = CfgPrtUart {
            port_id: 1,
            reserved0: Reserved::default(),
            tx_ready: TxReady::default(),
            mode: UartMode::new(DataBits::Eight, Parity::None, StopBits::One),
            baud_rate: 115_200,
            in_proto_mask: InProtoMask::UBLOX | InProtoMask::NMEA,
            out_proto_mask: OutProtoMask::UBLOX,
            flags: CfgPrtFlags::empty(),
            reserved5: Reserved::default(),
        };
        let payload = msg.to_payload().unwrap();
        assert_eq!(
            payload,
            [
                0x01, 0x00, 0x00, 0x00, 0xc0, 0x08, 0x00, 0x00, 0x00, 0xc2, 0x01, 0x00, 0x03, 0x00,
                0x01, 0x00, 0x00, 0x00, 0x00, 0x00
            ]
        );
        let back = CfgPrtUart::from_payload(&payload).unwrap();
        assert_eq!(back.port_id(), Some(UartPortId::Uart1));
        assert_eq!(back.mode.char_len(), Some(DataBits::Eight));
        assert_eq!(back.mode.parity(), Some(Parity::None));
        assert_eq!(back.mode.n_stop_bits(), Some(StopBits::One));
        assert!(back.valid());
    }

    #[test]
    fn cfg_rate_defaults_and_range() {
        let mut msg = CfgRate::default();
        assert_eq!(msg.measure_rate_ms, 1000);
        assert_eq!(msg.time_ref(), Some(AlignmentToReferenceTime::Gps));
        assert_eq!(msg.to_payload().unwrap(), [0xe8, 0x03, 0x01, 0x00, 0x01, 0x00]);

        msg.measure_rate_ms = 10;
        assert_eq!(msg.invalid_field(), Some("measure_rate_ms"));
    }

    #[test]
    fn cfg_rst_cold_start() {
        let msg = CfgRst {
            nav_bbr_mask: NavBbrMask::COLD_START,
            reset_mode: ResetMode::ControlledSoftwareReset as u8,
            reserved1: Reserved::default(),
        };
        assert_eq!(msg.to_payload().unwrap(), [0xff, 0xb9, 0x01, 0x00]);
    }

    #[test]
    fn cfg_msg_for_message() {
        let msg = CfgMsg::for_message::<crate::NavPosLlh>(1);
        assert_eq!(
            msg.to_payload().unwrap(),
            [0x01, 0x02, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01]
        );
    }
}
