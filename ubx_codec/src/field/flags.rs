/// Make a `bitflags` type usable as a message field.
///
/// Unknown bits are retained on read and make the field invalid.
///
/// ```
/// use ubx_codec::{ubx_flags_field, UbxField};
///
/// bitflags::bitflags! {
///     #[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
///     pub struct Mask: u8 {
///         const A = 1;
///         const B = 2;
///     }
/// }
/// ubx_flags_field!(Mask: u8);
///
/// let mut mask = Mask::default();
/// mask.read(&mut &[0x83u8][..]).unwrap();
/// assert!(mask.contains(Mask::A | Mask::B));
/// assert!(!mask.valid());
/// ```
#[macro_export]
macro_rules! ubx_flags_field {
    ($name:ident : $repr:ty) => {
        impl $crate::FixedLength for $name {
            const LENGTH: usize = <$repr as $crate::FixedLength>::LENGTH;
        }

        impl $crate::UbxField for $name {
            fn length(&self) -> usize {
                <$repr as $crate::FixedLength>::LENGTH
            }

            fn read(&mut self, input: &mut &[u8]) -> Result<(), $crate::CodecError> {
                let mut raw: $repr = 0;
                $crate::UbxField::read(&mut raw, input)?;
                *self = Self::from_bits_retain(raw);
                Ok(())
            }

            fn write<W: $crate::MemWriter + ?Sized>(
                &self,
                out: &mut W,
            ) -> Result<(), $crate::CodecError> {
                $crate::UbxField::write(&self.bits(), out)
            }

            fn valid(&self) -> bool {
                Self::from_bits(self.bits()).is_some()
            }
        }
    };
}
