//! Resizable arrays with amortized O(1) append.
//!
//! A [`DynamicArray`] tracks its logical length separately from the capacity
//! of its backing [`FixedArray`]. When an append or insert finds the buffer
//! full, a new buffer of twice the capacity is allocated and all elements
//! are moved across. Capacity never shrinks: `remove` clears the vacated
//! trailing slot but keeps the buffer, so capacity is monotonically
//! non-decreasing for the lifetime of the array.

use std::fmt;

use creel_core::ArrayError;

use crate::fixed::FixedArray;

/// A resizable array backed by a doubling [`FixedArray`] buffer.
///
/// Invariants: `len <= capacity`, every slot below `len` is occupied, and
/// every slot at or above `len` is empty. Indexed access is checked against
/// the logical length, not the capacity.
#[derive(Clone, Debug)]
pub struct DynamicArray<T> {
    /// Backing buffer; its length is the current capacity.
    storage: FixedArray<T>,
    /// Number of logically present elements.
    len: usize,
}

impl<T> DynamicArray<T> {
    /// Create an empty array with capacity 1.
    pub fn new() -> Self {
        Self {
            storage: FixedArray::new(1).expect("capacity 1 is always a valid size"),
            len: 0,
        }
    }

    /// Create an empty array with a caller-chosen starting capacity.
    ///
    /// Fails with [`ArrayError::InvalidSize`] when `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, ArrayError> {
        Ok(Self {
            storage: FixedArray::new(capacity)?,
            len: 0,
        })
    }

    /// Number of logically present elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` when no elements are present.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current capacity of the backing buffer, including unused slots.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Read the element at `index`.
    ///
    /// Checked against the logical length: `get(len())` fails with
    /// [`ArrayError::IndexOutOfRange`] even while unused capacity remains.
    pub fn get(&self, index: usize) -> Result<&T, ArrayError> {
        if index >= self.len {
            return Err(ArrayError::IndexOutOfRange {
                index,
                bound: self.len,
            });
        }
        Ok(self
            .storage
            .slot(index)
            .as_ref()
            .expect("slots below len are always occupied"))
    }

    /// Overwrite the element at `index`, which must already be present.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        if index >= self.len {
            return Err(ArrayError::IndexOutOfRange {
                index,
                bound: self.len,
            });
        }
        *self.storage.slot_mut(index) = Some(value);
        Ok(())
    }

    /// Append `value` at the end, doubling the capacity first if the buffer
    /// is full.
    ///
    /// Amortized O(1); a growth step costs O(len).
    pub fn append(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow_to(self.capacity() * 2);
        }
        *self.storage.slot_mut(self.len) = Some(value);
        self.len += 1;
    }

    /// Insert `value` at `index`, shifting `[index, len)` one slot rightward.
    ///
    /// `index == len()` is valid and equivalent to [`append`](Self::append);
    /// anything past that fails with [`ArrayError::IndexOutOfRange`]. Costs
    /// O(len − index) plus a possible growth step.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        if index > self.len {
            return Err(ArrayError::IndexOutOfRange {
                index,
                bound: self.len,
            });
        }
        if self.len == self.capacity() {
            self.grow_to(self.capacity() * 2);
        }
        // Shift highest index first so nothing is overwritten.
        let mut i = self.len;
        while i > index {
            let shifted = self.storage.slot_mut(i - 1).take();
            *self.storage.slot_mut(i) = shifted;
            i -= 1;
        }
        *self.storage.slot_mut(index) = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Remove the first element equal to `value`.
    ///
    /// Elements after the match shift one slot leftward and the vacated
    /// trailing slot is reset to empty; the capacity is kept. Fails with
    /// [`ArrayError::ValueNotFound`] — and changes nothing — when no element
    /// in `[0, len)` matches. Costs O(len).
    pub fn remove(&mut self, value: &T) -> Result<(), ArrayError>
    where
        T: PartialEq,
    {
        let found = (0..self.len).find(|&i| {
            self.storage
                .slot(i)
                .as_ref()
                .expect("slots below len are always occupied")
                == value
        });
        let Some(found) = found else {
            return Err(ArrayError::ValueNotFound);
        };
        for i in found..self.len - 1 {
            let shifted = self.storage.slot_mut(i + 1).take();
            *self.storage.slot_mut(i) = shifted;
        }
        *self.storage.slot_mut(self.len - 1) = None;
        self.len -= 1;
        Ok(())
    }

    /// A fresh forward cursor over the logical elements in index order.
    ///
    /// The iterator borrows the array, so the backing buffer cannot be
    /// replaced by a growth step while a cursor is live.
    pub fn iter(&self) -> Elements<'_, T> {
        Elements {
            array: self,
            cursor: 0,
        }
    }

    /// Replace the backing buffer with one of `new_capacity` slots, moving
    /// all `len` elements across positionally.
    fn grow_to(&mut self, new_capacity: usize) {
        let mut next =
            FixedArray::new(new_capacity).expect("doubled capacity is always greater than zero");
        for i in 0..self.len {
            let moved = self.storage.slot_mut(i).take();
            *next.slot_mut(i) = moved;
        }
        self.storage = next;
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A forward iterator over the logical elements of a [`DynamicArray`].
///
/// Created by [`DynamicArray::iter`]. Each call produces an independent
/// cursor starting at index 0.
pub struct Elements<'a, T> {
    array: &'a DynamicArray<T>,
    cursor: usize,
}

impl<'a, T> Iterator for Elements<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor < self.array.len {
            let entry = self
                .array
                .storage
                .slot(self.cursor)
                .as_ref()
                .expect("slots below len are always occupied");
            self.cursor += 1;
            Some(entry)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.array.len - self.cursor;
        (remaining, Some(remaining))
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Elements<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders the logical elements as a parenthesized, comma-separated list,
/// e.g. `(10,20,30)`; an empty array renders as `()`.
impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str(")")
    }
}
