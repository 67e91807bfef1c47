//! UPD: firmware update and backup

use crate::{ubx_enum, ubx_message, Reserved};

/// Backup File Creation Acknowledge / System Restored from Backup
///
/// Receiver output form of UPD-SOS, the 4 byte poll/create/clear
/// commands share the same id.
#[ubx_message]
#[ubx(class = 0x09, id = 0x14, fixed_payload_len = 8)]
pub struct UpdSos {
    #[ubx(map_type = SosCmd, default = 2)]
    cmd: u8,
    reserved1: Reserved<3>,
    /// For `Ack`: 0 not acknowledged, 1 acknowledged.
    /// For `Restored`: 0 unknown, 1 failed restoring, 2 restored, 3 not restored (no backup)
    response: u8,
    reserved2: Reserved<3>,
}

#[ubx_enum]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SosCmd {
    Create = 0,
    Clear = 1,
    Ack = 2,
    Restored = 3,
}
