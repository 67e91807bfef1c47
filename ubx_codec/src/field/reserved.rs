use crate::{
    error::CodecError,
    field::{take, FixedLength, UbxField},
    writer::MemWriter,
};

/// Zero filled padding of `N` bytes.
///
/// Non-zero content fails the read of the enclosing message, unless the
/// field is declared `ignore_reserved`. It is then kept as read and only
/// makes the field invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reserved<const N: usize>(pub [u8; N]);

impl<const N: usize> Reserved<N> {
    pub const fn zeroed() -> Self {
        Self([0; N])
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

impl<const N: usize> Default for Reserved<N> {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<const N: usize> FixedLength for Reserved<N> {
    const LENGTH: usize = N;
}

impl<const N: usize> UbxField for Reserved<N> {
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
        self.is_zero()
    }

    fn reserved_clear(&self) -> bool {
        self.is_zero()
    }
}

#[cfg(feature = "serde")]
impl<const N: usize> serde::Serialize for Reserved<N> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonzero_is_invalid() {
        let mut r = Reserved::<3>::default();
        r.read(&mut &[0u8, 0, 0][..]).unwrap();
        assert!(r.valid());
        assert!(r.reserved_clear());
        r.read(&mut &[0u8, 4, 0][..]).unwrap();
        assert!(!r.valid());
        assert!(!r.reserved_clear());
        assert_eq!(r.0, [0, 4, 0]);
    }
}
