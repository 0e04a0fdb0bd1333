//! strmap: a text-keyed open-addressing hash map and a growable list,
//! both generic over their payload type.
//!
//! Internal Design:
//!
//! Summary
//! - `HashMap<V, S>`: keys are always text and owned by the map; values
//!   are any `V`. Slots live directly in one power-of-two array and
//!   collisions are resolved by linear probing (step +1, wrapping).
//! - `GrowableList<T>`: contiguous array addressable by index, usable as
//!   a stack at its tail, with a stored cursor for single-pass walks.
//! - The two containers are independent of each other.
//!
//! Constraints
//! - Single-threaded: no locking, no atomics. Both types are `Send` when
//!   their payload is, so callers that need sharing wrap them in their
//!   own lock.
//! - No deletion from the map; inserts never overwrite and duplicates
//!   fail with `Error::AlreadyExists`.
//! - Capacities start at 8 and only ever double.
//!
//! Growth timing
//! - The map keeps an accounting `count` that starts at 1, one more than
//!   the number of entries. Before every insert attempt it checks
//!   `count + 2 > capacity * 3/4` and doubles if so. The check runs before
//!   the duplicate probe, so a rejected insert may still grow the table.
//! - The list doubles before a write once `len + 2 > capacity`.
//!
//! Hashing
//! - The default hasher is 32-bit FNV-1a (`fnv::Fnv1aBuildHasher`). The map
//!   feeds only the key's bytes through `Hasher::write`, so the default
//!   reproduces FNV-1a exactly; any `BuildHasher` can be plugged in via
//!   `HashMap::with_hasher`.
//! - Each slot stores its key's hash; regrowth re-places entries by the
//!   stored hash and never calls the hasher again.
//!
//! Cursors
//! - Each container carries one cursor, advanced by `next_entry` /
//!   `next_item` and rewound by `reset_cursor`. Exhaustion is reported as
//!   `None`, repeatedly. `iter()` is a separate borrowing iterator that
//!   leaves the cursor alone.
//!
//! Errors and allocation
//! - All recoverable failures are `Error` values. Growth and key copies
//!   reserve with `try_reserve_exact` and surface `Error::OutOfMemory`,
//!   leaving the container unchanged. Allocating a new, empty container
//!   goes through the global allocator and aborts on failure.
//! - `GrowableList::insert` past the end appends and still returns
//!   `Error::IndexPastEnd`; callers must treat that error as "written".
//!
//! Logging
//! - Growth events are logged at `debug`, rejected duplicates and past-end
//!   inserts at `trace`, allocation failures at `warn`, through the `log`
//!   facade.

pub mod error;
pub mod fnv;
pub mod growable_list;
mod growable_list_proptest;
pub mod hash_map;
mod hash_map_proptest;

// Public surface
pub use error::{Error, Result};
pub use fnv::{fnv1a32, Fnv1aBuildHasher, Fnv1aHasher};
pub use growable_list::GrowableList;
pub use hash_map::HashMap;
