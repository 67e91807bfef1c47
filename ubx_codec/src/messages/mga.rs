//! MGA: multiple GNSS assistance

use crate::{ubx_bitfield, ubx_enum, ubx_message, Reserved};

/// GNSS Assistance ACK UBX-MGA-ACK
#[ubx_message]
#[ubx(class = 0x13, id = 0x60, fixed_payload_len = 8)]
pub struct MgaAck {
    /// Type of acknowledgment
    #[ubx(map_type = MgaAckType)]
    ack_type: u8,
    /// Version 0
    version: u8,
    /// What the receiver chose to do with the message contents
    #[ubx(map_type = MsgAckInfoCode)]
    info_code: u8,
    /// UBX message ID of the acknowledged message
    msg_id: u8,
    /// The first 4 bytes of the acknowledged message's payload
    msg_payload_start: [u8; 4],
}

#[ubx_enum]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MgaAckType {
    /// The message was not used by the receiver
    NotUsed = 0,
    Accepted = 1,
}

#[ubx_enum]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MsgAckInfoCode {
    Accepted = 0,
    RejectedNoTime = 1,
    RejectedBadVersion = 2,
    RejectedBadSize = 3,
    RejectedDbStoreFailed = 4,
    RejectedNotReady = 5,
    RejectedUnknownType = 6,
}

/// Initial time assistance, UTC
#[ubx_message]
#[ubx(class = 0x13, id = 0x40, fixed_payload_len = 24)]
pub struct MgaIniTimeUtc {
    /// Message type, 0x10 for this type
    #[ubx(default = 0x10, valid_min = 0x10, valid_max = 0x10, fail_on_invalid)]
    msg_type: u8,
    /// Message version (0x00 for this version)
    version: u8,
    /// Reference to be used to set time
    time_ref: MgaIniTimeRef,
    /// Number of leap seconds since 1980, 0x80 if unknown
    leap_secs: i8,
    year: u16,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    reserved1: Reserved<1>,
    /// Nanoseconds
    #[ubx(valid_max = 999_999_999)]
    ns: u32,
    /// Seconds part of time accuracy
    #[ubx(unit = "s")]
    t_acc_s: u16,
    reserved2: Reserved<2>,
    /// Nanoseconds part of time accuracy
    #[ubx(unit = "ns")]
    t_acc_ns: u32,
}

#[ubx_bitfield(u8)]
pub struct MgaIniTimeRef {
    /// 0: none, time of message receipt.
    /// 1: relative to pulse on EXTINT0, 2: EXTINT1
    #[ubx(bits = 4)]
    source: u8,
    /// Use falling edge of EXTINT pulse
    #[ubx(bits = 1)]
    fall: bool,
    /// Use the last EXTINT pulse, the next one otherwise
    #[ubx(bits = 1)]
    last: bool,
    #[ubx(bits = 2, reserved)]
    reserved: u8,
}

/// Galileo Ephemeris Assistance
#[ubx_message]
#[ubx(class = 0x13, id = 0x02, fixed_payload_len = 76)]
pub struct MgaGalEph {
    /// Message type, 0x01 for this type
    #[ubx(default = 0x01, valid_min = 0x01, valid_max = 0x01, fail_on_invalid)]
    msg_type: u8,
    /// Message version (0x00 for this version)
    version: u8,
    /// Galileo Satellite identifier
    sv_id: u8,
    reserved1: Reserved<1>,
    /// Ephemeris and clock correction issue of Data
    iod_nav: u16,
    /// Mean motion difference from computed value
    #[ubx(map_type = f64, scale = 1.1368683772161603e-13, unit = "semi-circles/s")]
    delta_n: i16,
    /// Mean anomaly at reference time
    #[ubx(map_type = f64, scale = 4.656612873077393e-10, unit = "semi-circles")]
    m0: i32,
    /// Eccentricity
    #[ubx(map_type = f64, scale = 1.1641532182693481e-10)]
    e: u32,
    /// Square root of the semi-major axis
    #[ubx(map_type = f64, scale = 1.9073486328125e-6, unit = "m^0.5")]
    sqrt_a: u32,
    /// Longitude of ascending node of orbital plane at weekly epoch
    #[ubx(map_type = f64, scale = 4.656612873077393e-10, unit = "semi-circles")]
    omega0: i32,
    /// Inclination angle at reference time
    #[ubx(map_type = f64, scale = 4.656612873077393e-10, unit = "semi-circles")]
    i0: i32,
    /// Argument of perigee
    #[ubx(map_type = f64, scale = 4.656612873077393e-10, unit = "semi-circles")]
    omega: i32,
    /// Rate of change of right ascension
    #[ubx(map_type = f64, scale = 1.1368683772161603e-13, unit = "semi-circles/s")]
    omega_dot: i32,
    /// Rate of change of inclination angle
    #[ubx(map_type = f64, scale = 1.1368683772161603e-13, unit = "semi-circles/s")]
    i_dot: i16,
    /// Amplitude of the cosine harmonic correction term to the argument of latitude
    #[ubx(map_type = f64, scale = 1.862645149230957e-9, unit = "radians")]
    cuc: i16,
    /// Amplitude of the sine harmonic correction term to the argument of latitude
    #[ubx(map_type = f64, scale = 1.862645149230957e-9, unit = "radians")]
    cus: i16,
    /// Amplitude of the cosine harmonic correction term to the orbit radius
    #[ubx(map_type = f64, scale = 0.03125, unit = "m")]
    crc: i16,
    /// Amplitude of the sine harmonic correction term to the orbit radius
    #[ubx(map_type = f64, scale = 0.03125, unit = "m")]
    crs: i16,
    /// Amplitude of the cosine harmonic correction term to the angle of inclination
    #[ubx(map_type = f64, scale = 1.862645149230957e-9, unit = "radians")]
    cic: i16,
    /// Amplitude of the sine harmonic correction term to the angle of inclination
    #[ubx(map_type = f64, scale = 1.862645149230957e-9, unit = "radians")]
    cis: i16,
    /// Ephemeris reference time
    #[ubx(map_type = f64, scale = 60.0, unit = "s")]
    toe: u16,
    /// SV clock bias correction coefficient
    #[ubx(map_type = f64, scale = 5.820766091346741e-11, unit = "s")]
    af0: i32,
    /// SV clock drift correction coefficient
    #[ubx(map_type = f64, scale = 1.4210854715202004e-14, unit = "s/s")]
    af1: i32,
    /// SV clock drift rate correction coefficient
    #[ubx(map_type = f64, scale = 1.734723475976807e-18, unit = "s/s^2")]
    af2: i8,
    /// Signal-In-Space Accuracy index for dual frequency E1-E5b
    sisa_index_e1e5b: u8,
    /// Clock correction data reference Time of Week
    #[ubx(map_type = f64, scale = 60.0, unit = "s")]
    toc: u16,
    /// E1-E5b broadcast group delay
    #[ubx(map_type = f64, scale = 2.3283064365386963e-10, unit = "s")]
    bgd_e1e5b: i16,
    reserved2: Reserved<2>,
    /// E1-B Signal Health Status
    health_e1b: u8,
    /// E1-B Data Validity Status
    data_validity_e1b: u8,
    /// E5b Signal Health Status
    health_e5b: u8,
    /// E5b Data Validity Status
    data_validity_e5b: u8,
    reserved3: Reserved<4>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CodecError, UbxLength, UbxMessageMeta, UbxRead, UbxWrite};

    #[test]
    fn mga_ini_time_utc_type_is_checked() {
        let msg = MgaIniTimeUtc {
            year: 2024,
            month: 2,
            day: 29,
            t_acc_s: 2,
            ..Default::default()
        };
        let mut payload = msg.to_payload().unwrap();
        assert_eq!(payload[0], 0x10);
        assert_eq!(MgaIniTimeUtc::from_payload(&payload).unwrap(), msg);

        // MGA-INI-POS_XYZ shares class and id
        payload[0] = 0x00;
        assert_eq!(
            MgaIniTimeUtc::from_payload(&payload),
            Err(CodecError::InvalidContent {
                message: "MgaIniTimeUtc",
                field: "msg_type",
            })
        );
    }

    #[test]
    fn mga_gal_eph_layout() {
        assert_eq!(MgaGalEph::FIXED_PAYLOAD_LEN, Some(76));
        let mut msg = MgaGalEph {
            sv_id: 11,
            ..Default::default()
        };
        msg.set_sqrt_a_scaled(5440.588_203_43);
        msg.set_toe_scaled(345_600.0);
        assert_eq!(msg.toe, 5760);
        assert_eq!(msg.length(), 76);
        let payload = msg.to_payload().unwrap();
        assert_eq!(MgaGalEph::field_index("toe"), Some(20));
        assert_eq!(&payload[50..52], 5760u16.to_le_bytes());
        let back = MgaGalEph::from_payload(&payload).unwrap();
        assert!((back.sqrt_a_scaled() - 5440.588_203_43).abs() < 2e-6);
    }

    #[test]
    fn mga_ack_codes() {
        let msg = MgaAck::from_payload(&[1, 0, 0, 0x40, 0x10, 0, 0xe8, 0x07]).unwrap();
        assert_eq!(msg.ack_type(), Some(MgaAckType::Accepted));
        assert_eq!(msg.info_code(), Some(MsgAckInfoCode::Accepted));
        assert_eq!(msg.msg_payload_start, [0x10, 0, 0xe8, 0x07]);
    }
}
