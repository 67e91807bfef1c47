//! Wire field primitives.
//!
//! Every field a message is built from implements [`UbxField`]: it knows its
//! width on the wire, reads itself from the front of a byte cursor and writes
//! itself little-endian. Fields with a width known at compile time also
//! implement [`FixedLength`], which lets message declarations check their
//! payload length while compiling.

use crate::{error::CodecError, writer::MemWriter};

mod enums;
mod flags;
mod list;
mod reserved;
mod scale;
mod string;

pub use enums::UbxEnum;
pub use list::{count_matches, force_from_count, sync_count, CountField, List};
pub use reserved::Reserved;
pub use scale::ScaleBack;
pub use string::{FixedString, TrailingString};

/// A single wire field
pub trait UbxField {
    /// Number of bytes [`UbxField::write`] emits for the current value
    fn length(&self) -> usize;

    /// Replace the value with the one at the front of `input`.
    ///
    /// On success the cursor is advanced past the consumed bytes, on failure
    /// it is left where it was.
    fn read(&mut self, input: &mut &[u8]) -> Result<(), CodecError>;

    fn write<W: MemWriter + ?Sized>(&self, out: &mut W) -> Result<(), CodecError>;

    /// `false` if the value is outside of what the protocol allows
    /// (reserved bits set, undeclared enumeration value, ...)
    fn valid(&self) -> bool {
        true
    }

    /// `false` if there is data where the protocol reserves zeros
    fn reserved_clear(&self) -> bool {
        true
    }

    /// Recompute derived state, returns `true` if something changed
    fn refresh(&mut self) -> bool {
        false
    }
}

/// Field with a wire width independent of its value
pub trait FixedLength {
    const LENGTH: usize;
}

/// Split `N` bytes off the front of `input`
#[inline]
pub fn take<const N: usize>(input: &mut &[u8]) -> Result<[u8; N], CodecError> {
    if input.len() < N {
        return Err(CodecError::NotEnoughData {
            need: N,
            got: input.len(),
        });
    }
    let (head, rest) = input.split_at(N);
    let mut bytes = [0u8; N];
    bytes.copy_from_slice(head);
    *input = rest;
    Ok(bytes)
}

macro_rules! impl_primitive_field {
    ($($ty:ty),*) => {
        $(
            impl FixedLength for $ty {
                const LENGTH: usize = core::mem::size_of::<$ty>();
            }

            impl UbxField for $ty {
                #[inline]
                fn length(&self) -> usize {
                    <$ty as FixedLength>::LENGTH
                }

                #[inline]
                fn read(&mut self, input: &mut &[u8]) -> Result<(), CodecError> {
                    *self = <$ty>::from_le_bytes(take(input)?);
                    Ok(())
                }

                #[inline]
                fn write<W: MemWriter + ?Sized>(&self, out: &mut W) -> Result<(), CodecError> {
                    out.write(&self.to_le_bytes())
                }
            }
        )*
    };
}

impl_primitive_field!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64);

impl<const N: usize> FixedLength for [u8; N] {
    const LENGTH: usize = N;
}

impl<const N: usize> UbxField for [u8; N] {
    fn length(&self) -> usize {
        N
    }

    fn read(&mut self, input: &mut &[u8]) -> Result<(), CodecError> {
        *self = take(input)?;
        Ok(())
    }

    fn write<W: MemWriter + ?Sized>(&self, out: &mut W) -> Result<(), CodecError> {
        out.write(self)
    }
}

/// Static description of one field of a message or bundle, in declaration order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldInfo {
    pub name: &'static str,
    /// Wire width, `None` for strings and lists
    pub length: Option<usize>,
    /// Ratio from the raw wire integer to the physical unit
    pub scale: Option<f64>,
    pub unit: Option<&'static str>,
}

impl FieldInfo {
    pub const fn is_variable(&self) -> bool {
        self.length.is_none()
    }

    /// Raw wire value converted to the physical unit
    pub fn scaled_value(&self, raw: f64) -> f64 {
        match self.scale {
            Some(scale) => raw * scale,
            None => raw,
        }
    }
}
