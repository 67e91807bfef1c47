//! Message capabilities.
//!
//! A message type implements one trait per thing a consumer may want from
//! it: identification ([`UbxMessageMeta`]), decoding ([`UbxRead`]), encoding
//! ([`UbxWrite`], [`UbxLength`]), count resynchronization ([`UbxRefresh`])
//! and validity inspection ([`UbxValid`]). All of them are generated by
//! `#[ubx_message]`.

use alloc::vec::Vec;
use core::fmt;
use log::debug;

use crate::{error::CodecError, field::FieldInfo, writer::MemWriter};

/// `(class, id)` pair identifying a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MsgId {
    pub class: u8,
    pub id: u8,
}

impl MsgId {
    pub const fn new(class: u8, id: u8) -> Self {
        Self { class, id }
    }

    /// Class in the high byte, id in the low byte
    pub const fn as_u16(self) -> u16 {
        ((self.class as u16) << 8) | self.id as u16
    }
}

impl fmt::Display for MsgId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:02X}/0x{:02X}", self.class, self.id)
    }
}

impl From<(u8, u8)> for MsgId {
    fn from((class, id): (u8, u8)) -> Self {
        Self::new(class, id)
    }
}

/// Information about a concrete message type, known at compile time
pub trait UbxMessageMeta {
    const CLASS: u8;
    const ID: u8;
    const NAME: &'static str;
    const MSG_ID: MsgId = MsgId::new(Self::CLASS, Self::ID);
    /// `Some` when every field has a fixed width
    const FIXED_PAYLOAD_LEN: Option<u16>;
    /// Declared `max_payload_len`, a buffer size hint. Not enforced on read,
    /// a list with a `u16` count may go past it.
    const MAX_PAYLOAD_LEN: u16;
    /// Fields in wire order
    const FIELDS: &'static [FieldInfo];

    fn msg_id(&self) -> MsgId {
        Self::MSG_ID
    }

    /// Position of the field called `name` in [`UbxMessageMeta::FIELDS`]
    fn field_index(name: &str) -> Option<usize> {
        Self::FIELDS.iter().position(|f| f.name == name)
    }
}

pub trait UbxRead: UbxMessageMeta + Default {
    /// Overwrite all fields from the front of `input`.
    ///
    /// Lists with an external count are read after their count. On failure
    /// `input` is not advanced, the message content is unspecified and the
    /// message should be dropped.
    fn read(&mut self, input: &mut &[u8]) -> Result<(), CodecError>;

    /// Decode a whole payload, trailing bytes are an error
    fn from_payload(payload: &[u8]) -> Result<Self, CodecError> {
        let mut msg = Self::default();
        let mut cursor = payload;
        msg.read(&mut cursor)?;
        if !cursor.is_empty() {
            return Err(CodecError::InvalidPacketLen {
                message: Self::NAME,
                expect: payload.len() - cursor.len(),
                got: payload.len(),
            });
        }
        Ok(msg)
    }
}

pub trait UbxLength {
    /// Exact number of bytes the payload occupies when written
    fn length(&self) -> usize;
}

pub trait UbxWrite: UbxLength {
    /// Emit all fields in order.
    ///
    /// The space for the whole payload is reserved first, so a writer
    /// without enough room fails before anything is written. Counts are
    /// written as they are, call [`UbxRefresh::refresh`] after editing lists.
    fn write<W: MemWriter + ?Sized>(&self, out: &mut W) -> Result<(), CodecError>;

    fn to_payload(&self) -> Result<Vec<u8>, CodecError> {
        let mut out = Vec::with_capacity(self.length());
        self.write(&mut out)?;
        Ok(out)
    }
}

pub trait UbxRefresh {
    /// Bring count fields in line with their lists.
    /// Returns `true` if any field was changed.
    fn refresh(&mut self) -> bool;
}

pub trait UbxValid {
    /// Name of the first field whose value the protocol does not allow
    fn invalid_field(&self) -> Option<&'static str>;

    fn valid(&self) -> bool {
        self.invalid_field().is_none()
    }
}

/// Every capability at once
pub trait UbxMessage: UbxMessageMeta + UbxRead + UbxWrite + UbxRefresh + UbxValid {}

impl<T> UbxMessage for T where T: UbxMessageMeta + UbxRead + UbxWrite + UbxRefresh + UbxValid {}

/// Message of a set with an id the set does not know about
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UnknownMessage {
    pub id: MsgId,
    pub payload: Vec<u8>,
}

impl UnknownMessage {
    pub fn new(id: MsgId, payload: &[u8]) -> Self {
        debug!("unknown message {}, {} bytes payload", id, payload.len());
        Self {
            id,
            payload: payload.to_vec(),
        }
    }

    pub fn length(&self) -> usize {
        self.payload.len()
    }

    pub fn write<W: MemWriter + ?Sized>(&self, out: &mut W) -> Result<(), CodecError> {
        out.reserve_allocate(self.payload.len())?;
        out.write(&self.payload)
    }
}

/// Decode `payload` as `M`, used by message set dispatch
pub fn decode_as<M: UbxRead>(payload: &[u8]) -> Result<M, CodecError> {
    M::from_payload(payload).map_err(|err| {
        debug!(
            "{} ({}) decode failed: {}",
            M::NAME,
            MsgId::new(M::CLASS, M::ID),
            err
        );
        err
    })
}
