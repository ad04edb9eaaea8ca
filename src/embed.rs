//! Fixed-length sequence embedding built from k-mer counts and base composition.
//!
//! The five dimensions, in order:
//!
//! | idx | feature |
//! | --- | ------- |
//! | 0 | GC fraction of the whole sequence |
//! | 1 | fraction of indexed windows whose k-mer occurs only once |
//! | 2 | AT fraction of the whole sequence |
//! | 3 | entropy term over distinct k-mers, divided by the number of distinct k-mers |
//! | 4 | fraction of indexed windows whose k-mer is a palindrome |
//!
//! The vector is L2-normalized; an all-zero feature vector stays all-zero.

use serde::Serialize;

use crate::kmer::index::KmerCounts;
use crate::kmer::kmer::is_palindrome;
use crate::stats::{base_counts, ratio};

pub const EMBEDDING_DIM: usize = 5;

/// Raw features before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KmerFeatures {
    pub gc_fraction: f64,
    pub rare_fraction: f64,
    pub at_fraction: f64,
    pub entropy: f64,
    pub palindromic_fraction: f64,
}

impl KmerFeatures {
    pub fn compute(counts: &KmerCounts, sequence: &str) -> Self {
        let (gc, at) = base_counts(sequence);
        let total = counts.total();
        let k = counts.k();

        let mut rare = 0usize;
        let mut palindromic = 0usize;
        for (key, count) in counts.iter() {
            if count < 2 {
                rare += count;
            }
            if is_palindrome(key, k) {
                palindromic += count;
            }
        }

        Self {
            gc_fraction: ratio(gc, sequence.len()),
            rare_fraction: ratio(rare, total),
            at_fraction: ratio(at, sequence.len()),
            entropy: normalized_entropy(counts),
            palindromic_fraction: ratio(palindromic, total),
        }
    }

    pub fn to_array(&self) -> [f64; EMBEDDING_DIM] {
        [
            self.gc_fraction,
            self.rare_fraction,
            self.at_fraction,
            self.entropy,
            self.palindromic_fraction,
        ]
    }
}

/// `-sum(f * log2 f) / n` with `f = count / n` over the `n` distinct keys.
///
/// Frequencies are taken relative to the number of distinct keys, not the
/// number of occurrences. A single distinct key (or none) is a one-outcome
/// distribution and scores 0.
fn normalized_entropy(counts: &KmerCounts) -> f64 {
    let distinct = counts.len();
    if distinct <= 1 {
        return 0.0;
    }
    let n = distinct as f64;
    let entropy: f64 = counts
        .iter()
        .map(|(_, count)| count as f64 / n)
        .filter(|&f| f > 0.0)
        .map(|f| -f * f.log2())
        .sum();
    entropy / n
}

/// Unit-length (or all-zero) 5-dimensional embedding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SequenceEmbedding {
    vector: [f64; EMBEDDING_DIM],
}

impl SequenceEmbedding {
    /// L2-normalize `vector`. A zero-magnitude vector is kept as is.
    pub fn from_raw(mut vector: [f64; EMBEDDING_DIM]) -> Self {
        let magnitude = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
        if magnitude > 0.0 {
            vector.iter_mut().for_each(|v| *v /= magnitude);
        }
        Self { vector }
    }

    pub fn from_features(features: &KmerFeatures) -> Self {
        Self::from_raw(features.to_array())
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.vector
    }

    pub fn norm(&self) -> f64 {
        self.vector.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.vector.iter().all(|&v| v == 0.0)
    }
}

/// Build the normalized embedding for `sequence` from its k-mer counts.
pub fn get_sequence_embedding(counts: &KmerCounts, sequence: &str) -> SequenceEmbedding {
    SequenceEmbedding::from_features(&KmerFeatures::compute(counts, sequence))
}
