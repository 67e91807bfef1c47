use crate::error::CodecError;
use alloc::vec::Vec;

/// Output sink for encoded message bodies
pub trait MemWriter {
    /// Make sure `len` more bytes fit, before anything is written
    fn reserve_allocate(&mut self, len: usize) -> Result<(), CodecError>;
    /// Append `buf`
    fn write(&mut self, buf: &[u8]) -> Result<(), CodecError>;
}

impl MemWriter for Vec<u8> {
    fn reserve_allocate(&mut self, len: usize) -> Result<(), CodecError> {
        self.reserve(len);
        Ok(())
    }

    fn write(&mut self, buf: &[u8]) -> Result<(), CodecError> {
        self.extend_from_slice(buf);
        Ok(())
    }
}

/// [`MemWriter`] over a caller provided buffer of fixed size
pub struct SliceWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> SliceWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Number of bytes written so far
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Bytes written so far
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }
}

impl MemWriter for SliceWriter<'_> {
    fn reserve_allocate(&mut self, len: usize) -> Result<(), CodecError> {
        if self.remaining() < len {
            return Err(CodecError::BufferOverflow {
                need: len,
                capacity: self.remaining(),
            });
        }
        Ok(())
    }

    fn write(&mut self, buf: &[u8]) -> Result<(), CodecError> {
        self.reserve_allocate(buf.len())?;
        self.buf[self.pos..self.pos + buf.len()].copy_from_slice(buf);
        self.pos += buf.len();
        Ok(())
    }
}
