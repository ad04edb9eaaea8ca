//! The three analyses offered on a loaded sequence: k-mer search, function
//! prediction and base composition. Each call builds its own index.

use serde::Serialize;
use std::fmt;
use tracing::info;

use crate::classify::{predict_function_from_embedding, ClassificationResult};
use crate::config::AnalyzerConfig;
use crate::embed::{KmerFeatures, SequenceEmbedding};
use crate::error::KmerError;
use crate::kmer::index::KmerIndex;
use crate::stats::{calculate_composition, gc_content, Composition};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub kmer: String,
    pub positions: Vec<usize>,
    pub count: usize,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        self.count > 0
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.positions.is_empty() {
            return write!(f, "K-mer '{}' not found in the sequence.", self.kmer);
        }
        writeln!(f, "K-mer '{}' found {} times:", self.kmer, self.count)?;
        for p in &self.positions {
            writeln!(f, "{}", p)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub k: usize,
    pub distinct_kmers: usize,
    pub features: KmerFeatures,
    pub embedding: SequenceEmbedding,
    pub classification: ClassificationResult,
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.classification)
    }
}

fn require_sequence(sequence: &str) -> Result<(), KmerError> {
    if sequence.is_empty() {
        Err(KmerError::EmptySequence)
    } else {
        Ok(())
    }
}

/// Find every occurrence of `kmer` in `sequence`. K is the query length.
pub fn search_kmer(sequence: &str, kmer: &str, cfg: &AnalyzerConfig) -> Result<SearchResult, KmerError> {
    require_sequence(sequence)?;
    let kmer = kmer.to_ascii_uppercase();

    let mut index = KmerIndex::for_sequence(sequence, kmer.len(), cfg.min_capacity)?;
    index.build_index(sequence)?;
    let positions = index.query(&kmer).to_vec();

    info!("K-mer {} found {} times", kmer, positions.len());
    Ok(SearchResult {
        count: positions.len(),
        kmer,
        positions,
    })
}

/// Embed `sequence` at `cfg.embedding_k` and classify it.
pub fn predict_function(sequence: &str, cfg: &AnalyzerConfig) -> Result<Prediction, KmerError> {
    require_sequence(sequence)?;
    let k = cfg.embedding_k;

    let mut index = KmerIndex::for_sequence(sequence, k, cfg.min_capacity)?;
    index.build_index(sequence)?;
    let counts = index.get_counts();

    let features = KmerFeatures::compute(&counts, sequence);
    let embedding = SequenceEmbedding::from_features(&features);
    let classification = predict_function_from_embedding(&embedding, gc_content(sequence));

    info!(
        "Classified {} bp over {} distinct {}-mers: {}",
        sequence.len(),
        counts.len(),
        k,
        classification.verdict
    );
    Ok(Prediction {
        k,
        distinct_kmers: counts.len(),
        features,
        embedding,
        classification,
    })
}

/// Base composition, computed straight from the sequence.
pub fn composition(sequence: &str) -> Result<Composition, KmerError> {
    require_sequence(sequence)?;
    Ok(calculate_composition(sequence))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Verdict;

    #[test]
    fn test_search_kmer() {
        let cfg = AnalyzerConfig::default();
        let result = search_kmer("GCGCGCGCAT", "gc", &cfg).unwrap();
        assert_eq!(result.kmer, "GC");
        assert_eq!(result.positions, vec![0, 2, 4, 6]);
        assert_eq!(result.count, 4);
        assert_eq!(result.to_string(), "K-mer 'GC' found 4 times:\n0\n2\n4\n6\n");
    }

    #[test]
    fn test_search_not_found() {
        let result = search_kmer("GCGCGCGCAT", "TTT", &AnalyzerConfig::default()).unwrap();
        assert!(!result.is_found());
        assert_eq!(result.to_string(), "K-mer 'TTT' not found in the sequence.");
    }

    #[test]
    fn test_search_rejects_bad_k() {
        let long = "A".repeat(33);
        assert!(matches!(
            search_kmer("ACGT", &long, &AnalyzerConfig::default()),
            Err(KmerError::Construction(_))
        ));
        assert!(matches!(
            search_kmer("ACGT", "", &AnalyzerConfig::default()),
            Err(KmerError::Construction(_))
        ));
    }

    #[test]
    fn test_empty_sequence_is_rejected() {
        let cfg = AnalyzerConfig::default();
        assert!(matches!(search_kmer("", "A", &cfg), Err(KmerError::EmptySequence)));
        assert!(matches!(predict_function("", &cfg), Err(KmerError::EmptySequence)));
        assert!(matches!(composition(""), Err(KmerError::EmptySequence)));
    }

    #[test]
    fn test_predict_short_sequence() {
        // Shorter than K: no k-mers, but GC/AT still contribute.
        let prediction = predict_function("GCA", &AnalyzerConfig::default()).unwrap();
        assert_eq!(prediction.distinct_kmers, 0);
        assert!((prediction.embedding.norm() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_predict_ambiguous_only_is_unknown() {
        let prediction = predict_function("NNNNNNNNNN", &AnalyzerConfig::default()).unwrap();
        assert!(prediction.embedding.is_zero());
        assert_eq!(prediction.classification.verdict, Verdict::Unknown);
    }

    #[test]
    fn test_composition() {
        let comp = composition("GCGCGCGCAT").unwrap();
        assert_eq!(comp.to_string(), "GC Content: 80.00%");
    }
}
