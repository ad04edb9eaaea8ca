//! K-mer indexing and composition-based function prediction for nucleotide sequences.
//!
//! A [`KmerIndex`] maps every K-length window of a sequence to the positions
//! where it occurs. Its aggregated counts, together with base composition,
//! feed a 5-dimensional [`SequenceEmbedding`] that is scored against three
//! reference profiles by [`classify::classify`].

pub mod analysis;
pub mod classify;
pub mod config;
pub mod embed;
pub mod error;
pub mod io;
pub mod kmer;
pub mod stats;

pub use analysis::{composition, predict_function, search_kmer, Prediction, SearchResult};
pub use classify::{ClassificationResult, FunctionCategory, Verdict};
pub use config::AnalyzerConfig;
pub use embed::{get_sequence_embedding, KmerFeatures, SequenceEmbedding};
pub use error::KmerError;
pub use kmer::{KmerCounts, KmerIndex, KmerKey};
pub use stats::Composition;
