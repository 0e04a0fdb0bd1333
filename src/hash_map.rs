//! HashMap: text-keyed open-addressing table with linear probing.

use crate::error::{Error, Result};
use crate::fnv::Fnv1aBuildHasher;
use core::fmt;
use core::hash::{BuildHasher, Hasher};
use log::{debug, trace, warn};

/// Number of slots in a freshly created table.
pub const INITIAL_CAPACITY: usize = 8;

/// Accounting count of an empty table. The reserved unit is not an entry
/// but takes part in the load check.
const RESERVED_COUNT: usize = 1;

#[derive(Clone, Debug)]
struct Slot<V> {
    key: Box<str>,
    value: V,
    hash: u64,
}

/// Text-keyed map that owns a copy of every key it accepts.
///
/// Keys are never removed and inserts never overwrite. Not synchronized;
/// share across threads only behind external locking.
#[derive(Clone)]
pub struct HashMap<V, S = Fnv1aBuildHasher> {
    hasher: S,
    slots: Vec<Option<Slot<V>>>,
    count: usize,
    cursor: usize,
}

impl<V> HashMap<V> {
    /// Empty table with `INITIAL_CAPACITY` slots hashed with FNV-1a.
    pub fn new() -> Self {
        Self::with_hasher(Fnv1aBuildHasher)
    }
}

impl<V, S: Default> Default for HashMap<V, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

/// Iterator over occupied slots in slot order. Independent of the cursor.
pub struct Iter<'a, V> {
    it: core::slice::Iter<'a, Option<Slot<V>>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it
            .by_ref()
            .find_map(|s| s.as_ref().map(|s| (&*s.key, &s.value)))
    }
}

impl<V, S> HashMap<V, S> {
    /// Empty table using `hasher` to place keys.
    ///
    /// Only `Hasher::write` is fed (with the key's UTF-8 bytes) and the low
    /// bits of `Hasher::finish` select the home slot.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            hasher,
            slots: (0..INITIAL_CAPACITY).map(|_| None).collect(),
            count: RESERVED_COUNT,
            cursor: 0,
        }
    }

    /// Number of slots; always a power of two.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Accounting count: live entries plus the reserved unit. Drives growth.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of entries, `count() - 1`.
    pub fn len(&self) -> usize {
        self.count - RESERVED_COUNT
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rewind the cursor to slot 0.
    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    /// Next occupied slot at or after the cursor; the cursor moves past it.
    ///
    /// Returns `None` once the cursor reaches the capacity, and keeps
    /// returning `None` until `reset_cursor`. Growth re-places entries, so a
    /// cursor walk spanning an insert must be restarted.
    pub fn next_entry(&mut self) -> Option<(&str, &V)> {
        let found = self
            .slots
            .iter()
            .enumerate()
            .skip(self.cursor)
            .find_map(|(i, s)| s.as_ref().map(|s| (i, s)));
        match found {
            Some((i, s)) => {
                self.cursor = i + 1;
                Some((&*s.key, &s.value))
            }
            None => {
                self.cursor = self.slots.len();
                None
            }
        }
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            it: self.slots.iter(),
        }
    }

    fn needs_growth(&self) -> bool {
        // count + 2 > capacity * 0.75, kept in integers.
        (self.count + 2) * 4 > self.slots.len() * 3
    }

    /// Double the slot array and re-place every entry by its stored hash.
    /// On allocation failure the table is left untouched.
    fn grow(&mut self) -> Result<()> {
        let old_cap = self.slots.len();
        let new_cap = old_cap << 1;
        let mut slots: Vec<Option<Slot<V>>> = Vec::new();
        if let Err(e) = slots.try_reserve_exact(new_cap) {
            warn!("cannot grow hash table from {} to {} slots", old_cap, new_cap);
            return Err(e.into());
        }
        slots.resize_with(new_cap, || None);

        for slot in core::mem::take(&mut self.slots).into_iter().flatten() {
            let i = vacant_index(&slots, slot.hash);
            slots[i] = Some(slot);
        }
        self.slots = slots;
        debug!(
            "hash table grew from {} to {} slots (count {})",
            old_cap, new_cap, self.count
        );
        Ok(())
    }
}

impl<V, S> HashMap<V, S>
where
    S: BuildHasher,
{
    fn make_hash(&self, key: &str) -> u64 {
        let mut h = self.hasher.build_hasher();
        h.write(key.as_bytes());
        h.finish()
    }

    /// Insert a copy of `key` bound to `value`. Never overwrites.
    ///
    /// The load check runs before probing, so an insert rejected with
    /// `Error::AlreadyExists` may still have doubled the table. On
    /// `AlreadyExists` the stored value is untouched and `value` is dropped.
    pub fn insert(&mut self, key: &str, value: V) -> Result<()> {
        if self.needs_growth() {
            self.grow()?;
        }
        let hash = self.make_hash(key);
        let i = probe(&self.slots, hash, key);
        if self.slots[i].is_some() {
            trace!("rejecting duplicate key {:?}", key);
            return Err(Error::AlreadyExists);
        }
        let key = copy_key(key)?;
        self.slots[i] = Some(Slot { key, value, hash });
        self.count += 1;
        Ok(())
    }

    /// Value bound to `key`; `Error::NotFound` when the probe ends on a free slot.
    pub fn find(&self, key: &str) -> Result<&V> {
        let hash = self.make_hash(key);
        match &self.slots[probe(&self.slots, hash, key)] {
            Some(s) => Ok(&s.value),
            None => Err(Error::NotFound),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find(key).is_ok()
    }
}

/// Linear probe from the home slot of `hash` to the first slot that is
/// free or holds `key`. Terminates because the load check keeps at least
/// one slot free.
fn probe<V>(slots: &[Option<Slot<V>>], hash: u64, key: &str) -> usize {
    let mask = slots.len() - 1;
    let mut i = (hash as usize) & mask;
    loop {
        match &slots[i] {
            Some(s) if s.hash != hash || &*s.key != key => i = (i + 1) & mask,
            _ => return i,
        }
    }
}

// Keys being re-placed are distinct, so only a free slot can stop the probe.
fn vacant_index<V>(slots: &[Option<Slot<V>>], hash: u64) -> usize {
    let mask = slots.len() - 1;
    let mut i = (hash as usize) & mask;
    while slots[i].is_some() {
        i = (i + 1) & mask;
    }
    i
}

fn copy_key(key: &str) -> Result<Box<str>> {
    let mut owned = String::new();
    if let Err(e) = owned.try_reserve_exact(key.len()) {
        warn!("cannot allocate {} bytes for hash table key", key.len());
        return Err(e.into());
    }
    owned.push_str(key);
    Ok(owned.into_boxed_str())
}

impl<V: fmt::Debug, S> fmt::Debug for HashMap<V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, V, S> IntoIterator for &'a HashMap<V, S> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
