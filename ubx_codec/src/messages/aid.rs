//! AID: legacy AssistNow aiding

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::{error::DateTimeError, ubx_flags_field, ubx_message, ScaleBack};

/// Aiding position, time, frequency, clock drift
#[ubx_message]
#[ubx(class = 0x0b, id = 0x01, fixed_payload_len = 48)]
pub struct AidIni {
    /// WGS84 ECEF x coordinate or latitude, depending on `flags`
    ecef_x_or_lat: i32,
    /// WGS84 ECEF y coordinate or longitude, depending on `flags`
    ecef_y_or_lon: i32,
    /// WGS84 ECEF z coordinate or altitude, depending on `flags`
    ecef_z_or_alt: i32,
    /// Position accuracy (stddev)
    #[ubx(unit = "cm")]
    pos_accuracy: u32,
    /// Time mark configuration
    time_cfg: AidIniTimeCfg,
    /// Actual week number or yearSince2000 * 100 + month (UTC time)
    week_or_ym: u16,
    /// Actual time of week or DDHHMMSS (UTC time)
    tow_or_hms: u32,
    /// Fractional part of time of week
    #[ubx(unit = "ns")]
    tow_ns: i32,
    /// Milliseconds part of time accuracy
    #[ubx(unit = "ms")]
    tm_accuracy_ms: u32,
    /// Nanoseconds part of time accuracy
    #[ubx(unit = "ns")]
    tm_accuracy_ns: u32,
    /// Clock drift or frequency
    clk_drift_or_freq: i32,
    /// Accuracy of clock drift or frequency
    clk_drift_or_freq_accuracy: u32,
    flags: AidIniFlags,
}

bitflags::bitflags! {
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct AidIniTimeCfg: u16 {
        /// Use falling edge (default rising)
        const FEDGE = 0x2;
        /// Time mark on extint 1 (default extint 0)
        const TM1 = 0x10;
        /// Frequency on extint 1 (default extint 0)
        const F1 = 0x40;
    }
}
ubx_flags_field!(AidIniTimeCfg: u16);

bitflags::bitflags! {
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct AidIniFlags: u32 {
        /// Position valid
        const POS = 0x1;
        /// Time valid
        const TIME = 0x2;
        /// Clock drift data contains valid clock drift
        const CLOCK_D = 0x4;
        /// Use time pulse
        const TP = 0x8;
        /// Clock drift data contains valid frequency
        const CLOCK_F = 0x10;
        /// Position is given in lat/long/alt (default is ECEF)
        const LLA = 0x20;
        /// Altitude is not valid, in case lla was set
        const ALT_INV = 0x40;
        /// Use time mark received before AID-INI message
        const PREV_TM = 0x80;
        /// Time is given as UTC date/time (default is GPS wno/tow)
        const UTC = 0x400;
    }
}
ubx_flags_field!(AidIniFlags: u32);

impl AidIni {
    /// Position as latitude and longitude in degrees, altitude in meters
    pub fn set_position(&mut self, lat: f64, lon: f64, alt: f64) {
        self.ecef_x_or_lat = ScaleBack::<f64>(1e7).as_i32(lat);
        self.ecef_y_or_lon = ScaleBack::<f64>(1e7).as_i32(lon);
        self.ecef_z_or_alt = ScaleBack::<f64>(1e2).as_i32(alt);
        self.flags |= AidIniFlags::POS | AidIniFlags::LLA;
    }

    /// UTC date and time, the year has to be in 2000..2099
    pub fn set_time(&mut self, tm: DateTime<Utc>) -> Result<(), DateTimeError> {
        let year = tm.year();
        if !(2000..2100).contains(&year) {
            return Err(DateTimeError::InvalidDate);
        }
        self.week_or_ym = ((year - 2000) as u32 * 100 + tm.month()) as u16;
        self.tow_or_hms =
            tm.day() * 1_000_000 + tm.hour() * 10_000 + tm.minute() * 100 + tm.second();
        self.tow_ns = (tm.nanosecond() % 1_000_000_000) as i32;
        self.flags |= AidIniFlags::TIME | AidIniFlags::UTC;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{UbxRead, UbxWrite};
    use chrono::NaiveDate;

    #[test]
    fn aid_ini_position_and_time() {
        let mut msg = AidIni::default();
        msg.set_position(47.285_496_1, 8.565_417_8, 412.3);
        let tm = NaiveDate::from_ymd_opt(2021, 3, 14)
            .and_then(|d| d.and_hms_nano_opt(15, 9, 26, 535_000_000))
            .unwrap()
            .and_utc();
        msg.set_time(tm).unwrap();

        assert_eq!(msg.ecef_x_or_lat, 472_854_961);
        assert_eq!(msg.ecef_y_or_lon, 85_654_178);
        assert_eq!(msg.ecef_z_or_alt, 41_230);
        assert_eq!(msg.week_or_ym, 2103);
        assert_eq!(msg.tow_or_hms, 14_150_926);
        assert_eq!(msg.tow_ns, 535_000_000);
        assert_eq!(
            msg.flags,
            AidIniFlags::POS | AidIniFlags::LLA | AidIniFlags::TIME | AidIniFlags::UTC
        );

        let payload = msg.to_payload().unwrap();
        assert_eq!(payload.len(), 48);
        assert_eq!(&payload[44..], [0x23, 0x04, 0, 0]);
        assert_eq!(AidIni::from_payload(&payload).unwrap(), msg);
    }

    #[test]
    fn aid_ini_rejects_old_dates() {
        let tm = NaiveDate::from_ymd_opt(1999, 12, 31)
            .and_then(|d| d.and_hms_opt(23, 59, 59))
            .unwrap()
            .and_utc();
        assert_eq!(
            AidIni::default().set_time(tm),
            Err(DateTimeError::InvalidDate)
        );
    }
}
