//! ACK: acknowledge and reject of CFG input

use crate::{ubx_message, UbxMessageMeta};

/// Messages in this class are sent as a result of a CFG message being
/// received, decoded and processed by the receiver.
#[ubx_message]
#[ubx(class = 0x05, id = 0x01, fixed_payload_len = 2)]
pub struct AckAck {
    /// Class ID of the Acknowledged Message
    class: u8,

    /// Message ID of the Acknowledged Message
    msg_id: u8,
}

impl AckAck {
    pub fn is_ack_for<T: UbxMessageMeta>(&self) -> bool {
        self.class == T::CLASS && self.msg_id == T::ID
    }
}

/// Message Not-Acknowledge
#[ubx_message]
#[ubx(class = 0x05, id = 0x00, fixed_payload_len = 2)]
pub struct AckNak {
    /// Class ID of the Acknowledged Message
    class: u8,

    /// Message ID of the Acknowledged Message
    msg_id: u8,
}

impl AckNak {
    pub fn is_nak_for<T: UbxMessageMeta>(&self) -> bool {
        self.class == T::CLASS && self.msg_id == T::ID
    }
}
