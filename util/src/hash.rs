//! Reproducible string hashing.
//!
//! `std`'s `DefaultHasher` is randomly seeded per process, so it cannot name
//! things that must stay stable across restarts. FNV-1a is tiny, fixed and
//! good enough to tell identifier-like strings apart. Not cryptographic.

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// 32-bit FNV-1a over the UTF-8 bytes of `text`.
pub fn hash(text: &str) -> u32 {
    text.bytes().fold(FNV_OFFSET_BASIS, |acc, byte| {
        (acc ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// [`hash`] rendered as 8 lower-case hex digits.
pub fn hash_hex(text: &str) -> String {
    format!("{:08x}", hash(text))
}
