use crate::error::KmerError;

/// Bit-packed k-mer: 2 bits per base, first base in the most significant field.
pub type KmerKey = u64;

/// Longest k-mer that fits in a [`KmerKey`].
pub const MAX_K: usize = 32;

const BASES: [char; 4] = ['A', 'C', 'G', 'T'];

#[inline]
fn base_to_bits(base: u8) -> Option<KmerKey> {
    match base {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        _ => None,
    }
}

/// Encodes a DNA k-mer of exactly `k` uppercase bases (A=0, C=1, G=2, T=3).
///
/// The result lies in `[0, 4^k - 1]`. Lowercase and ambiguity codes are
/// rejected with [`KmerError::InvalidBase`]; callers are expected to
/// upper-case their input.
pub fn encode_kmer(kmer: &str, k: usize) -> Result<KmerKey, KmerError> {
    encode_bytes(kmer.as_bytes(), k)
}

/// Byte-slice variant of [`encode_kmer`], used by the index build loop.
pub fn encode_bytes(kmer: &[u8], k: usize) -> Result<KmerKey, KmerError> {
    if kmer.len() != k {
        return Err(KmerError::LengthMismatch { expected: k, actual: kmer.len() });
    }
    let mut key: KmerKey = 0;
    for (position, &b) in kmer.iter().enumerate() {
        let bits = base_to_bits(b).ok_or(KmerError::InvalidBase { base: b as char, position })?;
        key = (key << 2) | bits;
    }
    Ok(key)
}

/// Outcome of encoding one sliding window during an index build.
#[derive(Debug)]
pub enum WindowResult {
    Valid(KmerKey),
    Skipped(KmerError),
}

/// Encodes a single window, turning encoder failures into an ordinary value
/// the build loop can match on.
#[inline]
pub fn encode_window(window: &[u8], k: usize) -> WindowResult {
    match encode_bytes(window, k) {
        Ok(key) => WindowResult::Valid(key),
        Err(e) => WindowResult::Skipped(e),
    }
}

/// Decodes a key back to its k-mer string.
pub fn decode_kmer(key: KmerKey, k: usize) -> String {
    (0..k)
        .rev()
        .map(|i| BASES[((key >> (2 * i)) & 0b11) as usize])
        .collect()
}

/// Key of the k-mer read backwards (`ACG` -> `GCA`).
pub fn reverse_kmer(key: KmerKey, k: usize) -> KmerKey {
    let mut rev: KmerKey = 0;
    for i in 0..k {
        rev = (rev << 2) | ((key >> (2 * i)) & 0b11);
    }
    rev
}

/// Key of the reverse complement (`ACG` -> `CGT`).
pub fn reverse_complement_kmer(key: KmerKey, k: usize) -> KmerKey {
    let mut rc: KmerKey = 0;
    for i in 0..k {
        rc = (rc << 2) | (((key >> (2 * i)) & 0b11) ^ 0b11);
    }
    rc
}

/// True when the k-mer reads the same in both directions.
#[inline]
pub fn is_palindrome(key: KmerKey, k: usize) -> bool {
    reverse_kmer(key, k) == key
}
