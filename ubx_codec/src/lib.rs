//! # ubx_codec
//!
//! Message body codec for the u-blox UBX protocol.
//!
//! Every message is a plain struct of typed fields, declared with
//! `#[ubx_message]`. Reading fills the fields in wire order from a payload,
//! writing emits them again. Framing (sync chars, length, checksum) is left
//! to the transport layer.
//!
//! Reading and Writing Messages
//! ============================
//!
//! ```
//! use ubx_codec::{NavPosEcef, UbxRead, UbxWrite};
//!
//! let msg = NavPosEcef {
//!     itow: 1000,
//!     ecef_x: 100,
//!     ecef_y: -200,
//!     ecef_z: 300,
//!     p_acc: 5,
//! };
//! let payload = msg.to_payload().unwrap();
//! assert_eq!(payload.len(), 20);
//! assert_eq!(NavPosEcef::from_payload(&payload).unwrap(), msg);
//! ```
//!
//! Lists with External Count
//! =========================
//!
//! Several messages carry a list whose length is stored in an earlier field,
//! e.g. `num_ch` of [`NavDgps`]. Reading forces the list to that many
//! elements. After editing a list, [`UbxRefresh::refresh`] writes the list
//! length back into its count field:
//! ```
//! use ubx_codec::{NavDgps, NavDgpsCh, UbxRefresh, UbxWrite};
//!
//! let mut msg = NavDgps::default();
//! msg.data.push(NavDgpsCh::default());
//! assert!(msg.refresh());
//! assert_eq!(msg.num_ch, 1);
//! assert!(!msg.refresh());
//! assert_eq!(msg.to_payload().unwrap().len(), 16 + 12);
//! ```
//!
//! Message Sets
//! ============
//!
//! A message set maps a `(class, id)` pair to its message type:
//! ```
//! # #[cfg(feature = "ubx_ublox8")] {
//! use ubx_codec::message_sets::Ublox8;
//!
//! let msg = Ublox8::read_message(0x05, 0x01, &[0x06, 0x01]).unwrap();
//! assert_eq!(msg.name(), "AckAck");
//! # }
//! ```
//!
//! no_std Support
//! ==============
//!
//! Without the `std` feature the crate is `no_std`, it still needs `alloc`
//! for lists and strings.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
extern crate self as ubx_codec;

pub use crate::{
    error::{CodecError, DateTimeError, ErrorKind},
    field::{
        count_matches, force_from_count, sync_count, take, CountField, FieldInfo, FixedLength,
        FixedString, List, Reserved, ScaleBack, TrailingString, UbxEnum, UbxField,
    },
    message::{
        decode_as, MsgId, UbxLength, UbxMessage, UbxMessageMeta, UbxRead, UbxRefresh, UbxValid,
        UbxWrite, UnknownMessage,
    },
    messages::*,
    writer::{MemWriter, SliceWriter},
};
pub use ubx_codec_derive::{define_message_set, ubx_bitfield, ubx_bundle, ubx_enum, ubx_message};

mod error;
mod field;
mod message;
pub mod message_sets;
mod messages;
mod writer;
