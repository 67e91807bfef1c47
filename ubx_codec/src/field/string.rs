use alloc::vec::Vec;
use core::fmt;

use crate::{
    error::CodecError,
    field::{take, FixedLength, UbxField},
    writer::MemWriter,
};

/// NUL padded string occupying exactly `N` bytes
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FixedString<const N: usize>([u8; N]);

impl<const N: usize> FixedString<N> {
    pub fn new(s: &str) -> Self {
        let mut ret = Self::default();
        ret.set(s);
        ret
    }

    /// Replace the content, cutting `s` at the last char boundary that fits
    pub fn set(&mut self, s: &str) {
        let mut len = s.len().min(N);
        while !s.is_char_boundary(len) {
            len -= 1;
        }
        self.0 = [0; N];
        self.0[..len].copy_from_slice(&s.as_bytes()[..len]);
    }

    /// Content up to the first NUL, `None` if it is not UTF-8
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.0[..self.content_len()]).ok()
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    fn content_len(&self) -> usize {
        self.0.iter().position(|b| *b == 0).unwrap_or(N)
    }
}

impl<const N: usize> Default for FixedString<N> {
    fn default() -> Self {
        Self([0; N])
    }
}

impl<const N: usize> fmt::Debug for FixedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(s) => fmt::Debug::fmt(s, f),
            None => f.debug_tuple("FixedString").field(&self.0).finish(),
        }
    }
}

impl<const N: usize> FixedLength for FixedString<N> {
    const LENGTH: usize = N;
}

impl<const N: usize> UbxField for FixedString<N> {
    fn length(&self) -> usize {
        N
    }

    fn read(&mut self, input: &mut &[u8]) -> Result<(), CodecError> {
        self.0 = take(input)?;
        Ok(())
    }

    fn write<W: MemWriter + ?Sized>(&self, out: &mut W) -> Result<(), CodecError> {
        out.write(&self.0)
    }

    fn valid(&self) -> bool {
        self.as_str().is_some()
    }
}

/// String taking up the rest of the payload
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TrailingString(Vec<u8>);

impl TrailingString {
    pub fn new(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }

    pub fn set(&mut self, s: &str) {
        self.0.clear();
        self.0.extend_from_slice(s.as_bytes());
    }

    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.0).ok()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for TrailingString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(s) => fmt::Debug::fmt(s, f),
            None => f.debug_tuple("TrailingString").field(&self.0).finish(),
        }
    }
}

impl UbxField for TrailingString {
    fn length(&self) -> usize {
        self.0.len()
    }

    fn read(&mut self, input: &mut &[u8]) -> Result<(), CodecError> {
        self.0 = input.to_vec();
        *input = &[];
        Ok(())
    }

    fn write<W: MemWriter + ?Sized>(&self, out: &mut W) -> Result<(), CodecError> {
        out.write(&self.0)
    }

    fn valid(&self) -> bool {
        self.as_str().is_some()
    }
}

#[cfg(feature = "serde")]
impl<const N: usize> serde::Serialize for FixedString<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_str() {
            Some(s) => serializer.serialize_str(s),
            None => serializer.serialize_bytes(&self.0),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TrailingString {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_str() {
            Some(s) => serializer.serialize_str(s),
            None => serializer.serialize_bytes(&self.0),
        }
    }
}
