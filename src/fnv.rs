//! 32-bit FNV-1a hashing, the default hash function of `HashMap`.

use core::hash::{BuildHasher, Hasher};

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// Hash `bytes` with 32-bit FNV-1a.
#[inline]
pub fn fnv1a32(bytes: &[u8]) -> u32 {
    let mut h = Fnv1aHasher::default();
    h.write(bytes);
    h.state
}

/// Streaming FNV-1a state. `finish` zero-extends the 32-bit state.
#[derive(Copy, Clone, Debug)]
pub struct Fnv1aHasher {
    state: u32,
}

impl Default for Fnv1aHasher {
    #[inline]
    fn default() -> Self {
        Self {
            state: FNV_OFFSET_BASIS,
        }
    }
}

impl Hasher for Fnv1aHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= u32::from(b);
            self.state = self.state.wrapping_mul(FNV_PRIME);
        }
    }

    #[inline]
    fn finish(&self) -> u64 {
        u64::from(self.state)
    }
}

/// `BuildHasher` producing fresh `Fnv1aHasher`s.
#[derive(Copy, Clone, Debug, Default)]
pub struct Fnv1aBuildHasher;

impl BuildHasher for Fnv1aBuildHasher {
    type Hasher = Fnv1aHasher;

    #[inline]
    fn build_hasher(&self) -> Self::Hasher {
        Fnv1aHasher::default()
    }
}
