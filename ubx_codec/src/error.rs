use core::fmt;

/// Error that is possible while reading or writing a message body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// Input ended before the field (or message) currently read was complete
    NotEnoughData { need: usize, got: usize },
    /// A field value violates its value range, value set or reserved mask
    InvalidContent {
        message: &'static str,
        field: &'static str,
    },
    /// Payload length does not match what the message layout consumed
    InvalidPacketLen {
        message: &'static str,
        expect: usize,
        got: usize,
    },
    /// Output can not take the whole encoded message
    BufferOverflow { need: usize, capacity: usize },
    /// Passed through from the framing layer: length/checksum need an update pass
    UpdateRequired,
}

/// Coarse classification of [`CodecError`], see [`CodecError::kind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Recoverable by retrying the same read with more bytes
    NotEnoughData,
    /// A decoded value is not acceptable, the frame must be dropped
    InvalidContent,
    /// Payload is inconsistent with the message layout, the frame must be dropped
    ProtocolError,
    /// Output buffer is too small
    BufferOverflow,
    /// Framing layer has to patch its own fields after the write
    UpdateRequired,
}

impl CodecError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            CodecError::NotEnoughData { .. } => ErrorKind::NotEnoughData,
            CodecError::InvalidContent { .. } => ErrorKind::InvalidContent,
            CodecError::InvalidPacketLen { .. } => ErrorKind::ProtocolError,
            CodecError::BufferOverflow { .. } => ErrorKind::BufferOverflow,
            CodecError::UpdateRequired => ErrorKind::UpdateRequired,
        }
    }

    /// `true` when the read may succeed once more bytes arrive
    pub const fn is_incomplete(&self) -> bool {
        matches!(self, CodecError::NotEnoughData { .. })
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::NotEnoughData { need, got } => {
                write!(f, "Not enough data, need {} bytes, got {}", need, got)
            },
            CodecError::InvalidContent { message, field } => {
                write!(f, "Invalid field {} of message {}", field, message)
            },
            CodecError::InvalidPacketLen {
                message,
                expect,
                got,
            } => write!(
                f,
                "Invalid message({}) length, expect {}, got {}",
                message, expect, got
            ),
            CodecError::BufferOverflow { need, capacity } => write!(
                f,
                "Output buffer overflow, need {} bytes, capacity {}",
                need, capacity
            ),
            CodecError::UpdateRequired => f.write_str("Update of framing fields required"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CodecError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeError {
    InvalidDate,
    InvalidTime,
    InvalidNanoseconds,
}

impl fmt::Display for DateTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateTimeError::InvalidDate => f.write_str("invalid date"),
            DateTimeError::InvalidTime => f.write_str("invalid time"),
            DateTimeError::InvalidNanoseconds => f.write_str("invalid nanoseconds"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DateTimeError {}
