//! LOG: data logging

use crate::{ubx_flags_field, ubx_message, Reserved};

/// Log information
#[ubx_message]
#[ubx(class = 0x21, id = 0x08, fixed_payload_len = 48)]
pub struct LogInfo {
    /// The version of this message. Set to 1
    version: u8,
    reserved1: Reserved<3>,
    /// Maximum filestore capacity
    #[ubx(unit = "bytes")]
    filestore_capacity: u32,
    reserved2: Reserved<8>,
    /// Maximum size the current log is allowed to grow to
    #[ubx(unit = "bytes")]
    current_max_log_size: u32,
    /// Approximate amount of space in log currently occupied
    #[ubx(unit = "bytes")]
    current_log_size: u32,
    /// Number of entries in the log.
    entry_count: u32,
    oldest_year: u16,
    oldest_month: u8,
    oldest_day: u8,
    oldest_hour: u8,
    oldest_minute: u8,
    oldest_second: u8,
    reserved3: Reserved<1>,
    newest_year: u16,
    newest_month: u8,
    newest_day: u8,
    newest_hour: u8,
    newest_minute: u8,
    newest_second: u8,
    reserved4: Reserved<1>,
    status: LogStatus,
    reserved5: Reserved<3>,
}

bitflags::bitflags! {
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct LogStatus: u8 {
        /// Log entry recording is currently turned on
        const RECORDING = 0x08;
        /// Logging system not active - no log present
        const INACTIVE = 0x10;
        /// The current log is circular
        const CIRCULAR = 0x20;
    }
}
ubx_flags_field!(LogStatus: u8);
