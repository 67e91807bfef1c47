//! ESF: external sensor fusion

use crate::{ubx_bitfield, ubx_bundle, ubx_enum, ubx_flags_field, ubx_message, List, Reserved};

/// External Sensor Fusion (ESF) status information
#[ubx_message]
#[ubx(class = 0x10, id = 0x10, max_payload_len = 1036)] // 16 + 255 * 4
pub struct EsfStatus {
    /// GPS time of week of the navigation epoch
    itow: u32,
    /// Message version (2 for this version)
    version: u8,
    init_status1: EsfInitStatus1,
    init_status2: EsfInitStatus2,
    reserved1: Reserved<5>,
    /// Fusion mode
    #[ubx(map_type = EsfFusionMode)]
    fusion_mode: u8,
    reserved2: Reserved<2>,
    /// Number of sensors
    num_sens: u8,
    #[ubx(count = num_sens)]
    sensors: List<EsfSensorStatus>,
}

#[ubx_bitfield(u8)]
pub struct EsfInitStatus1 {
    /// Wheel-tick initialization status
    #[ubx(bits = 2, map_type = EsfInitState)]
    wt_init_status: u8,
    /// Automatic IMU-mount alignment status, 2 and 3 both mean initialized
    #[ubx(bits = 3)]
    mnt_alg_status: u8,
    /// INS initialization status
    #[ubx(bits = 2, map_type = EsfInitState)]
    ins_init_status: u8,
    #[ubx(bits = 1, reserved)]
    reserved: u8,
}

#[ubx_bitfield(u8)]
pub struct EsfInitStatus2 {
    /// IMU initialization status
    #[ubx(bits = 2, map_type = EsfInitState)]
    imu_init_status: u8,
    #[ubx(bits = 6, reserved)]
    reserved: u8,
}

#[ubx_enum]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EsfInitState {
    Off = 0,
    Initializing = 1,
    Initialized = 2,
}

#[ubx_enum]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EsfFusionMode {
    Initializing = 0,
    Fusion = 1,
    Suspended = 2,
    Disabled = 3,
}

#[ubx_bundle]
pub struct EsfSensorStatus {
    sens_status1: EsfSensStatus1,
    sens_status2: EsfSensStatus2,
    /// Observation frequency
    #[ubx(unit = "Hz")]
    freq: u8,
    faults: EsfSensorFaults,
}

#[ubx_bitfield(u8)]
pub struct EsfSensStatus1 {
    /// Sensor data type
    #[ubx(bits = 6)]
    sensor_type: u8,
    /// Sensor data is used for the current sensor fusion solution
    #[ubx(bits = 1)]
    used: bool,
    /// Sensor is set up (configuration is available or not required)
    #[ubx(bits = 1)]
    ready: bool,
}

#[ubx_bitfield(u8)]
pub struct EsfSensStatus2 {
    /// 0: not calibrated, 1: calibrating, 2 and 3: calibrated
    #[ubx(bits = 2)]
    calib_status: u8,
    #[ubx(bits = 2, map_type = EsfTimeStatus)]
    time_status: u8,
    #[ubx(bits = 4, reserved)]
    reserved: u8,
}

#[ubx_enum]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EsfTimeStatus {
    NoData = 0,
    /// Reception of the first byte used to tag the measurement
    FirstByte = 1,
    /// Event input used to tag the measurement
    EventInput = 2,
    /// Time tag provided with the data
    TimeTagProvided = 3,
}

bitflags::bitflags! {
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct EsfSensorFaults: u8 {
        const BAD_MEASUREMENT = 1;
        const BAD_TIME_TAG = 2;
        const MISSING_MEASUREMENT = 4;
        const NOISY_MEASUREMENT = 8;
    }
}
ubx_flags_field!(EsfSensorFaults: u8);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{UbxRead, UbxValid};

    #[test]
    fn esf_status_sensors() {
        let payload = [
            0xe8, 0x03, 0x00, 0x00, // itow
            0x02, // version
            0x49, // init_status1
            0x02, // init_status2
            0x00, 0x00, 0x00, 0x00, 0x00, // reserved1
            0x01, // fusion_mode
            0x00, 0x00, // reserved2
            0x02, // num_sens
            0xce, 0x0b, 0x64, 0x00, // gyro
            0x4b, 0x02, 0x0a, 0x04, // wheel ticks
        ];
        let msg = EsfStatus::from_payload(&payload).unwrap();
        assert_eq!(msg.init_status1.wt_init_status(), Some(EsfInitState::Initializing));
        assert_eq!(msg.init_status1.mnt_alg_status(), 2);
        assert_eq!(msg.init_status1.ins_init_status(), Some(EsfInitState::Initialized));
        assert_eq!(msg.init_status2.imu_init_status(), Some(EsfInitState::Initialized));
        assert_eq!(msg.fusion_mode(), Some(EsfFusionMode::Fusion));
        assert_eq!(msg.sensors.len(), 2);

        let gyro = &msg.sensors[0];
        assert_eq!(gyro.sens_status1.sensor_type(), 14);
        assert!(gyro.sens_status1.used());
        assert!(gyro.sens_status1.ready());
        assert_eq!(gyro.sens_status2.calib_status(), 3);
        assert_eq!(gyro.sens_status2.time_status(), Some(EsfTimeStatus::EventInput));
        assert_eq!(gyro.freq, 100);

        let ticks = &msg.sensors[1];
        assert_eq!(ticks.sens_status1.sensor_type(), 11);
        assert!(!ticks.sens_status1.ready());
        assert_eq!(ticks.faults, EsfSensorFaults::MISSING_MEASUREMENT);
        assert!(msg.valid());
    }
}
