//! Lists whose element count is carried by a sibling field.
//!
//! Reading such a message is done in two phases: the fields up to the count
//! are read normally, then the list is forced to expect exactly that many
//! elements ([`force_from_count`]) before it is read itself. After a list has
//! been edited, [`sync_count`] writes its length back into the count field.

use alloc::vec::Vec;
use core::{
    fmt,
    ops::{Deref, DerefMut},
};
use log::trace;

use crate::{
    error::CodecError,
    field::{FixedLength, UbxField},
    writer::MemWriter,
};

/// Sequence of fixed width elements.
///
/// Without a forced count a list consumes elements until its input is
/// exhausted, which only works for a list at the very end of a payload.
pub struct List<T> {
    elements: Vec<T>,
    forced_count: Option<usize>,
}

impl<T> List<T> {
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
            forced_count: None,
        }
    }

    /// The next [`UbxField::read`] reads exactly `count` elements.
    /// Consumed by that read, whatever its outcome.
    pub fn force_read_count(&mut self, count: usize) {
        self.forced_count = Some(count);
    }

    pub fn clear_read_count(&mut self) {
        self.forced_count = None;
    }

    pub fn forced_read_count(&self) -> Option<usize> {
        self.forced_count
    }

    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            forced_count: self.forced_count,
        }
    }
}

/// Only the elements take part in comparison
impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elements.iter()).finish()
    }
}

impl<T> Deref for List<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Vec<T> {
        &self.elements
    }
}

impl<T> DerefMut for List<T> {
    fn deref_mut(&mut self) -> &mut Vec<T> {
        &mut self.elements
    }
}

impl<T> From<Vec<T>> for List<T> {
    fn from(elements: Vec<T>) -> Self {
        Self {
            elements,
            forced_count: None,
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vec::from_iter(iter).into()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<T: UbxField + FixedLength + Default> UbxField for List<T> {
    fn length(&self) -> usize {
        self.elements.len() * T::LENGTH
    }

    fn read(&mut self, input: &mut &[u8]) -> Result<(), CodecError> {
        let count = match self.forced_count.take() {
            Some(count) => {
                trace!("forced read of {} list elements", count);
                count
            },
            None if T::LENGTH == 0 => 0,
            None => {
                let rest = input.len() % T::LENGTH;
                if rest != 0 {
                    return Err(CodecError::NotEnoughData {
                        need: input.len() - rest + T::LENGTH,
                        got: input.len(),
                    });
                }
                input.len() / T::LENGTH
            },
        };

        let need = count.saturating_mul(T::LENGTH);
        if input.len() < need {
            return Err(CodecError::NotEnoughData {
                need,
                got: input.len(),
            });
        }

        let mut cursor = *input;
        let mut elements = Vec::with_capacity(count);
        for _ in 0..count {
            let mut element = T::default();
            element.read(&mut cursor)?;
            elements.push(element);
        }
        self.elements = elements;
        *input = cursor;
        Ok(())
    }

    fn write<W: MemWriter + ?Sized>(&self, out: &mut W) -> Result<(), CodecError> {
        for element in &self.elements {
            element.write(&mut *out)?;
        }
        Ok(())
    }

    fn valid(&self) -> bool {
        self.elements.iter().all(UbxField::valid)
    }

    fn reserved_clear(&self) -> bool {
        self.elements.iter().all(UbxField::reserved_clear)
    }

    fn refresh(&mut self) -> bool {
        self.elements
            .iter_mut()
            .fold(false, |changed, element| element.refresh() | changed)
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for List<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.elements.iter())
    }
}

/// Integer field holding the element count of a [`List`]
pub trait CountField: Copy {
    /// Largest count the field can represent
    const MAX_COUNT: usize;

    fn count(&self) -> usize;

    /// Store `count`, saturating at [`CountField::MAX_COUNT`]
    fn set_count(&mut self, count: usize);
}

macro_rules! impl_count_field {
    ($($ty:ty),*) => {
        $(
            impl CountField for $ty {
                const MAX_COUNT: usize = <$ty>::MAX as usize;

                #[inline]
                fn count(&self) -> usize {
                    *self as usize
                }

                #[inline]
                fn set_count(&mut self, count: usize) {
                    *self = <$ty>::try_from(count).unwrap_or(<$ty>::MAX);
                }
            }
        )*
    };
}

impl_count_field!(u8, u16, u32);

/// First phase of a two-phase read: tell `list` how many elements follow
#[inline]
pub fn force_from_count<C: CountField, T>(count: &C, list: &mut List<T>) {
    list.force_read_count(count.count());
}

/// Resynchronize `count` with the length of `list`.
///
/// Returns `false` and leaves `count` untouched when they already agree,
/// otherwise stores the length and returns whether the stored value changed.
/// A second call right after the first always returns `false`.
pub fn sync_count<C: CountField, T>(count: &mut C, list: &List<T>) -> bool {
    let before = count.count();
    if before == list.len() {
        return false;
    }
    count.set_count(list.len());
    let changed = count.count() != before;
    if changed {
        trace!("list count refreshed from {} to {}", before, count.count());
    }
    changed
}

/// Invariant of a consistent message: `count` describes `list`
#[inline]
pub fn count_matches<C: CountField, T>(count: &C, list: &List<T>) -> bool {
    count.count() == list.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn forced_read_takes_exactly_count() {
        let data = [1u8, 0, 2, 0, 3, 0];
        let mut cursor = &data[..];
        let mut list = List::<u16>::new();
        list.force_read_count(2);
        list.read(&mut cursor).unwrap();
        assert_eq!(*list, vec![1, 2]);
        assert_eq!(cursor, &[3, 0]);
        assert_eq!(list.forced_read_count(), None);
    }

    #[test]
    fn forced_read_short_input() {
        let data = [1u8, 0, 2];
        let mut cursor = &data[..];
        let mut list = List::<u16>::new();
        list.force_read_count(2);
        assert_eq!(
            list.read(&mut cursor),
            Err(CodecError::NotEnoughData { need: 4, got: 3 })
        );
        assert_eq!(cursor.len(), 3);
        assert!(list.is_empty());
    }

    #[test]
    fn unforced_read_consumes_input() {
        let data = [1u8, 0, 0, 0, 2, 0, 0, 0];
        let mut cursor = &data[..];
        let mut list = List::<u32>::new();
        list.read(&mut cursor).unwrap();
        assert_eq!(*list, vec![1, 2]);
        assert!(cursor.is_empty());

        let mut cursor = &data[..7];
        assert_eq!(
            list.read(&mut cursor),
            Err(CodecError::NotEnoughData { need: 8, got: 7 })
        );
    }

    #[test]
    fn sync_is_idempotent() {
        let mut count = 0u8;
        let list: List<u32> = vec![1, 2, 3].into();
        assert!(!count_matches(&count, &list));
        assert!(sync_count(&mut count, &list));
        assert_eq!(count, 3);
        assert!(!sync_count(&mut count, &list));
        assert!(count_matches(&count, &list));
    }

    #[test]
    fn sync_saturates() {
        let mut count = 0u8;
        let list: List<u8> = (0..300).map(|x| x as u8).collect();
        assert!(sync_count(&mut count, &list));
        assert_eq!(count, u8::MAX);
        assert!(!sync_count(&mut count, &list));
        assert!(!count_matches(&count, &list));
    }

    #[test]
    fn compare_ignores_forced_count() {
        let mut a: List<u8> = vec![1].into();
        let b: List<u8> = vec![1].into();
        a.force_read_count(5);
        assert_eq!(a, b);
    }
}
