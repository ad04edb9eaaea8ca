// src/kmer/index.rs
//! Open-addressing k-mer index.
//!
//! Keys are bit-packed k-mers ([`KmerKey`]); each slot owns the ascending list
//! of 0-based start offsets where its k-mer occurs. Collisions are resolved
//! by linear probing from `key % capacity`. Before a new key is stored the
//! table doubles if the occupancy would exceed [`MAX_OCCUPANCY`], and every
//! existing entry is moved into the new table with its position list intact.
//!
//! Slots carry an explicit empty/occupied tag instead of reserving a sentinel
//! key, so every key a valid k-mer can encode to (including `u64::MAX` at
//! K = 32) is storable.

use std::collections::BTreeMap;
use tracing::debug;

use crate::error::KmerError;
use crate::kmer::kmer::{encode_bytes, encode_window, KmerKey, WindowResult, MAX_K};

/// Occupancy ratio (distinct keys / capacity) the table never exceeds.
pub const MAX_OCCUPANCY: f64 = 0.70;

/// Capacity floor used when sizing an index from a sequence length.
pub const DEFAULT_MIN_CAPACITY: usize = 512;

#[derive(Debug, Clone)]
enum Slot {
    Empty,
    Occupied { key: KmerKey, positions: Vec<usize> },
}

/// Outcome of probing for a key.
enum Probe {
    /// Slot already holding the key.
    Found(usize),
    /// First empty slot on the probe path.
    Vacant(usize),
}

/// Hash table from k-mer key to occurrence positions.
#[derive(Debug, Clone)]
pub struct KmerIndex {
    table: Vec<Slot>,
    k: usize,
    unique_keys: usize,
}

impl KmerIndex {
    /// Create an empty index for k-mers of length `k`.
    ///
    /// # Errors
    /// [`KmerError::Construction`] if `k` is outside `1..=32` or the capacity is zero.
    pub fn new(initial_capacity: usize, k: usize) -> Result<Self, KmerError> {
        if k == 0 || k > MAX_K {
            return Err(KmerError::Construction(format!(
                "K must be between 1 and {}, got {}",
                MAX_K, k
            )));
        }
        if initial_capacity == 0 {
            return Err(KmerError::Construction("capacity must be at least 1".into()));
        }
        Ok(Self {
            table: vec![Slot::Empty; initial_capacity],
            k,
            unique_keys: 0,
        })
    }

    /// Create an index sized for `sequence`: `max(min_capacity, len / 2)` slots.
    pub fn for_sequence(sequence: &str, k: usize, min_capacity: usize) -> Result<Self, KmerError> {
        let capacity = min_capacity.max(sequence.len() / 2);
        Self::new(capacity, k)
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn capacity(&self) -> usize {
        self.table.len()
    }

    /// Number of distinct k-mers stored.
    pub fn unique_count(&self) -> usize {
        self.unique_keys
    }

    pub fn is_empty(&self) -> bool {
        self.unique_keys == 0
    }

    pub fn load_factor(&self) -> f64 {
        self.unique_keys as f64 / self.capacity() as f64
    }

    /// Rebuild the index from scratch over every K-length window of `sequence`.
    ///
    /// Windows containing a base outside `{A, C, G, T}` are skipped. A sequence
    /// shorter than K leaves the index empty.
    ///
    /// # Errors
    /// Only [`KmerError::TableFull`], which signals a broken capacity invariant.
    pub fn build_index(&mut self, sequence: &str) -> Result<(), KmerError> {
        self.table.iter_mut().for_each(|slot| *slot = Slot::Empty);
        self.unique_keys = 0;

        let bytes = sequence.as_bytes();
        if bytes.len() < self.k {
            return Ok(());
        }

        let mut skipped = 0usize;
        for (pos, window) in bytes.windows(self.k).enumerate() {
            match encode_window(window, self.k) {
                WindowResult::Valid(key) => self.insert(key, pos)?,
                WindowResult::Skipped(e) => {
                    debug_assert!(e.is_window_error());
                    skipped += 1;
                }
            }
        }

        debug!(
            "Indexed {} distinct {}-mers ({} windows skipped), capacity {}",
            self.unique_keys,
            self.k,
            skipped,
            self.capacity()
        );
        Ok(())
    }

    /// Positions where `kmer` starts, ascending. Empty if the k-mer is absent,
    /// has the wrong length, or contains a base outside the alphabet.
    pub fn query(&self, kmer: &str) -> &[usize] {
        if kmer.len() != self.k {
            return &[];
        }
        match encode_bytes(kmer.as_bytes(), self.k) {
            Ok(key) => self.positions(key),
            Err(_) => &[],
        }
    }

    /// Positions stored for an already encoded key.
    pub fn positions(&self, key: KmerKey) -> &[usize] {
        match self.probe(key) {
            Some(Probe::Found(idx)) => match &self.table[idx] {
                Slot::Occupied { positions, .. } => positions.as_slice(),
                Slot::Empty => &[],
            },
            _ => &[],
        }
    }

    /// Whether `kmer` has at least one occurrence.
    pub fn contains(&self, kmer: &str) -> bool {
        !self.query(kmer).is_empty()
    }

    /// Occurrence count for every distinct key.
    pub fn get_counts(&self) -> KmerCounts {
        let counts = self
            .table
            .iter()
            .filter_map(|slot| match slot {
                Slot::Occupied { key, positions } => Some((*key, positions.len())),
                Slot::Empty => None,
            })
            .collect();
        KmerCounts { k: self.k, counts }
    }

    #[inline]
    fn home_slot(&self, key: KmerKey) -> usize {
        (key % self.capacity() as KmerKey) as usize
    }

    /// Linear probe from the home slot. `None` when the table wrapped without
    /// meeting the key or an empty slot.
    fn probe(&self, key: KmerKey) -> Option<Probe> {
        let capacity = self.capacity();
        let start = self.home_slot(key);
        let mut idx = start;
        loop {
            match &self.table[idx] {
                Slot::Empty => return Some(Probe::Vacant(idx)),
                Slot::Occupied { key: k, .. } if *k == key => return Some(Probe::Found(idx)),
                Slot::Occupied { .. } => {}
            }
            idx = (idx + 1) % capacity;
            if idx == start {
                return None;
            }
        }
    }

    fn insert(&mut self, key: KmerKey, pos: usize) -> Result<(), KmerError> {
        let idx = match self.probe(key) {
            Some(Probe::Found(idx)) => idx,
            _ => {
                while (self.unique_keys + 1) as f64 / self.capacity() as f64 > MAX_OCCUPANCY {
                    self.rehash(self.capacity() * 2)?;
                }
                match self.probe(key) {
                    Some(Probe::Vacant(idx)) => {
                        self.table[idx] = Slot::Occupied { key, positions: Vec::new() };
                        self.unique_keys += 1;
                        idx
                    }
                    Some(Probe::Found(idx)) => idx,
                    None => return Err(KmerError::TableFull { capacity: self.capacity() }),
                }
            }
        };
        if let Slot::Occupied { positions, .. } = &mut self.table[idx] {
            positions.push(pos);
        }
        Ok(())
    }

    /// Reallocate to `new_capacity` slots and move every entry across.
    fn rehash(&mut self, new_capacity: usize) -> Result<(), KmerError> {
        let old = std::mem::replace(&mut self.table, vec![Slot::Empty; new_capacity]);
        debug!(
            "Rehashing k-mer table: {} -> {} slots ({} keys)",
            old.len(),
            new_capacity,
            self.unique_keys
        );
        for slot in old {
            if let Slot::Occupied { key, positions } = slot {
                match self.probe(key) {
                    Some(Probe::Vacant(idx)) => self.table[idx] = Slot::Occupied { key, positions },
                    _ => return Err(KmerError::TableFull { capacity: new_capacity }),
                }
            }
        }
        Ok(())
    }
}

/// Aggregated occurrence counts, keyed by k-mer, with the K they were built at.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KmerCounts {
    k: usize,
    counts: BTreeMap<KmerKey, usize>,
}

impl KmerCounts {
    pub fn new(k: usize, counts: BTreeMap<KmerKey, usize>) -> Self {
        Self { k, counts }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn get(&self, key: KmerKey) -> Option<usize> {
        self.counts.get(&key).copied()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of indexed windows.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (KmerKey, usize)> + '_ {
        self.counts.iter().map(|(&key, &count)| (key, count))
    }
}
