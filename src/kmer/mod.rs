//! K-mer encoding and the open-addressing occurrence index.

pub mod index;
pub mod kmer;

pub use index::{KmerCounts, KmerIndex};
pub use kmer::{decode_kmer, encode_kmer, KmerKey};
