//! INF: ASCII output with origin in the receiver

use crate::{ubx_message, TrailingString};

/// ASCII output with error contents
#[ubx_message]
#[ubx(class = 0x04, id = 0x00, max_payload_len = 1240)]
pub struct InfError {
    message: TrailingString,
}

/// ASCII output with warning contents
#[ubx_message]
#[ubx(class = 0x04, id = 0x01, max_payload_len = 1240)]
pub struct InfWarning {
    message: TrailingString,
}

/// ASCII output with informational contents
#[ubx_message]
#[ubx(class = 0x04, id = 0x02, max_payload_len = 1240)]
pub struct InfNotice {
    message: TrailingString,
}

/// ASCII output with test contents
#[ubx_message]
#[ubx(class = 0x04, id = 0x03, max_payload_len = 1240)]
pub struct InfTest {
    message: TrailingString,
}

/// ASCII output with debug contents
#[ubx_message]
#[ubx(class = 0x04, id = 0x04, max_payload_len = 1240)]
pub struct InfDebug {
    message: TrailingString,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{UbxRead, UbxValid, UbxWrite};

    #[test]
    fn inf_text_runs_to_payload_end() {
        let msg = InfNotice::from_payload(b"ANTSUPERV=AC SD PDoS SR").unwrap();
        assert_eq!(msg.message.as_str(), Some("ANTSUPERV=AC SD PDoS SR"));

        let msg = InfDebug {
            message: TrailingString::new("hello"),
        };
        assert_eq!(msg.to_payload().unwrap(), b"hello");

        let msg = InfError::from_payload(&[0x66, 0xff, 0x6f]).unwrap();
        assert_eq!(msg.message.as_str(), None);
        assert_eq!(msg.invalid_field(), Some("message"));
    }
}
