/// Enumerated value set of a raw integer field.
///
/// Implemented by `#[ubx_enum]`. The raw value stays in the message, so a
/// value outside of [`UbxEnum::VALUES`] is kept and reported as invalid.
pub trait UbxEnum: Copy + Sized + 'static {
    type Repr: Copy;

    /// All declared values, in declaration order
    const VALUES: &'static [Self];

    fn from_repr(raw: Self::Repr) -> Option<Self>;
    fn into_repr(self) -> Self::Repr;

    /// Same as [`UbxEnum::from_repr`] for a bit range of a bitfield
    fn from_bits(bits: u64) -> Option<Self>;
    fn into_bits(self) -> u64;
}
