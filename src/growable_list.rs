//! GrowableList: contiguous sequence usable as list, stack and cursor.

use crate::error::{Error, Result};
use core::fmt;
use log::{debug, trace, warn};

/// Logical capacity of a freshly created list.
pub const INITIAL_CAPACITY: usize = 8;

/// Free slots kept ahead of `len` before a write: growth triggers when
/// `len + HEADROOM > capacity`.
const HEADROOM: usize = 2;

/// Growable array with index access, tail stack operations and a stored
/// cursor for single-pass iteration.
///
/// `capacity` doubles from 8 and is always a power of two; the backing
/// `Vec` is reserved at least that large, so writes between growth steps
/// never reallocate.
pub struct GrowableList<T> {
    items: Vec<T>,
    capacity: usize,
    cursor: usize,
}

impl<T> GrowableList<T> {
    /// Empty list with `INITIAL_CAPACITY` reserved.
    pub fn new() -> Self {
        Self {
            items: Vec::with_capacity(INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
            cursor: 0,
        }
    }

    /// Number of elements written.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Logical capacity; a power of two.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Double the capacity if the next write would leave fewer than
    /// `HEADROOM` free slots. On allocation failure nothing changes.
    fn reserve_for_write(&mut self) -> Result<()> {
        if self.items.len() + HEADROOM <= self.capacity {
            return Ok(());
        }
        let new_cap = self.capacity << 1;
        if let Err(e) = self.items.try_reserve_exact(new_cap - self.items.len()) {
            warn!("cannot grow list from {} to {} items", self.capacity, new_cap);
            return Err(e.into());
        }
        debug!(
            "list grew from {} to {} items (len {})",
            self.capacity,
            new_cap,
            self.items.len()
        );
        self.capacity = new_cap;
        Ok(())
    }

    /// Write `value` at index `len()`, doubling first if needed.
    pub fn append(&mut self, value: T) -> Result<()> {
        self.reserve_for_write()?;
        self.items.push(value);
        Ok(())
    }

    /// Insert `value` before position `index`, shifting the tail right.
    ///
    /// If `index >= len()` the value is appended at the end and
    /// `Error::IndexPastEnd` is returned anyway: the list HAS been modified
    /// when this error is seen.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        self.reserve_for_write()?;
        if index < self.items.len() {
            self.items.insert(index, value);
            Ok(())
        } else {
            trace!(
                "insert at {} past end {}, appending",
                index,
                self.items.len()
            );
            self.items.push(value);
            Err(Error::IndexPastEnd)
        }
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        self.items.get(index).ok_or(Error::IndexOutOfRange)
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    /// Element at the cursor, advancing it; `None` at the end, repeatedly.
    pub fn next_item(&mut self) -> Option<&T> {
        let item = self.items.get(self.cursor)?;
        self.cursor += 1;
        Some(item)
    }

    #[inline]
    pub fn push(&mut self, value: T) -> Result<()> {
        self.append(value)
    }

    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(Error::Underflow)
    }

    /// The backing storage, limited to the `len()` initialized elements.
    /// Any mutation may reallocate it.
    pub fn raw_view(&self) -> &[T] {
        &self.items
    }

    /// Iterate in index order without touching the cursor.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for GrowableList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowableList<T> {
    fn clone(&self) -> Self {
        // Vec::clone would shrink the reservation below `capacity`.
        let mut items = Vec::with_capacity(self.capacity);
        items.extend_from_slice(&self.items);
        Self {
            items,
            capacity: self.capacity,
            cursor: self.cursor,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a GrowableList<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
