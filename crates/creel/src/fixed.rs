//! Fixed-length arrays with bounds-checked access.
//!
//! A [`FixedArray`] owns a contiguous buffer whose length is chosen at
//! construction and never changes. Each slot holds an `Option<T>`: `None`
//! marks a slot that was never written (or was cleared), so "empty" is
//! distinguishable from any real value of `T`.

use std::fmt;

use creel_core::ArrayError;

/// A fixed-capacity array of optional slots.
///
/// The capacity is immutable and always at least 1. All public access is
/// bounds-checked and reports [`ArrayError::IndexOutOfRange`] rather than
/// panicking; a failed access leaves the array untouched.
#[derive(Clone, Debug)]
pub struct FixedArray<T> {
    /// Backing storage. Allocated to full capacity at creation.
    slots: Box<[Option<T>]>,
}

impl<T> FixedArray<T> {
    /// Create an array with `size` slots, all initially empty.
    ///
    /// Fails with [`ArrayError::InvalidSize`] when `size` is zero.
    pub fn new(size: usize) -> Result<Self, ArrayError> {
        if size == 0 {
            return Err(ArrayError::InvalidSize { requested: size });
        }
        let mut slots = Vec::with_capacity(size);
        slots.resize_with(size, || None);
        Ok(Self {
            slots: slots.into_boxed_slice(),
        })
    }

    /// Number of slots in the array.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Always `false`: a `FixedArray` has at least one slot.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Read the slot at `index`.
    ///
    /// Returns `Ok(None)` for an empty slot, `Ok(Some(&value))` for an
    /// occupied one, and [`ArrayError::IndexOutOfRange`] past the capacity.
    pub fn get(&self, index: usize) -> Result<Option<&T>, ArrayError> {
        match self.slots.get(index) {
            Some(slot) => Ok(slot.as_ref()),
            None => Err(ArrayError::IndexOutOfRange {
                index,
                bound: self.slots.len(),
            }),
        }
    }

    /// Overwrite the slot at `index` with `value`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        let bound = self.slots.len();
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = Some(value);
                Ok(())
            }
            None => Err(ArrayError::IndexOutOfRange { index, bound }),
        }
    }

    /// Move the value out of the slot at `index`, leaving it empty.
    ///
    /// Returns `Ok(None)` when the slot was already empty.
    pub fn take(&mut self, index: usize) -> Result<Option<T>, ArrayError> {
        let bound = self.slots.len();
        match self.slots.get_mut(index) {
            Some(slot) => Ok(slot.take()),
            None => Err(ArrayError::IndexOutOfRange { index, bound }),
        }
    }

    /// Overwrite every slot with `value`.
    ///
    /// `clear(None)` empties the array; `clear(Some(v))` fills it.
    pub fn clear(&mut self, value: Option<T>)
    where
        T: Clone,
    {
        for slot in self.slots.iter_mut() {
            *slot = value.clone();
        }
    }

    /// A fresh forward cursor over all slots in index order.
    ///
    /// Each call returns an independent iterator; traversal state is never
    /// shared. Empty slots are yielded as `None`.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            cursor: 0,
        }
    }

    /// Unchecked slot access for in-crate callers that maintain their own
    /// bound invariant.
    ///
    /// Panics on an out-of-range index, so it stays crate-internal; the
    /// public API is the checked [`get`](Self::get)/[`set`](Self::set).
    pub(crate) fn slot(&self, index: usize) -> &Option<T> {
        &self.slots[index]
    }

    pub(crate) fn slot_mut(&mut self, index: usize) -> &mut Option<T> {
        &mut self.slots[index]
    }
}

/// A forward iterator over the slots of a [`FixedArray`].
///
/// Created by [`FixedArray::iter`]. Yields one item per slot in index
/// order; an empty slot is yielded as `None`.
pub struct Iter<'a, T> {
    slots: &'a [Option<T>],
    cursor: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = Option<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor < self.slots.len() {
            let entry = self.slots[self.cursor].as_ref();
            self.cursor += 1;
            Some(entry)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.slots.len() - self.cursor;
        (remaining, Some(remaining))
    }
}

impl<'a, T> IntoIterator for &'a FixedArray<T> {
    type Item = Option<&'a T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders as a parenthesized, comma-separated list, e.g. `(1,2,3)`.
/// Empty slots render as `_`.
impl<T: fmt::Display> fmt::Display for FixedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            match slot {
                Some(value) => write!(f, "{value}")?,
                None => f.write_str("_")?,
            }
        }
        f.write_str(")")
    }
}
