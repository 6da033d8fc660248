//! MurmurHash3 x86_32
//!
//! Gram hashes end up in persisted keys, so the function has to produce the
//! same value on every build and platform. Seeded hashers such as ahash don't.

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;

#[inline]
fn scramble(k: u32) -> u32 {
    k.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2)
}

/// Hash `data` with MurmurHash3 (x86, 32-bit variant).
pub fn murmur3_32(data: &[u8], seed: u32) -> u32 {
    let mut h = seed;

    let mut blocks = data.chunks_exact(4);
    for block in &mut blocks {
        let k = u32::from_le_bytes([block[0], block[1], block[2], block[3]]);
        h ^= scramble(k);
        h = h.rotate_left(13).wrapping_mul(5).wrapping_add(0xe654_6b64);
    }

    let tail = blocks.remainder();
    if !tail.is_empty() {
        let k = tail
            .iter()
            .enumerate()
            .fold(0u32, |acc, (i, b)| acc | (u32::from(*b) << (8 * i)));
        h ^= scramble(k);
    }

    h ^= data.len() as u32;

    // fmix32
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}
