use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::KmerError;
use crate::kmer::index::DEFAULT_MIN_CAPACITY;
use crate::kmer::kmer::MAX_K;

/// K used for embeddings when none is configured.
pub const DEFAULT_EMBEDDING_K: usize = 5;

/// Tunables shared by the analysis operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Smallest table an index is created with; larger sequences get `len / 2` slots.
    pub min_capacity: usize,
    /// K used by function prediction.
    pub embedding_k: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_capacity: DEFAULT_MIN_CAPACITY,
            embedding_k: DEFAULT_EMBEDDING_K,
        }
    }
}

impl AnalyzerConfig {
    /// Load a JSON config. Missing fields fall back to their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, KmerError> {
        let file = File::open(path)?;
        let cfg: AnalyzerConfig = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| KmerError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn with_embedding_k(mut self, k: usize) -> Self {
        self.embedding_k = k;
        self
    }

    pub fn with_min_capacity(mut self, capacity: usize) -> Self {
        self.min_capacity = capacity;
        self
    }

    pub fn validate(&self) -> Result<(), KmerError> {
        if self.min_capacity == 0 {
            return Err(KmerError::Config("min_capacity must be at least 1".into()));
        }
        if self.embedding_k == 0 || self.embedding_k > MAX_K {
            return Err(KmerError::Config(format!(
                "embedding_k must be between 1 and {}, got {}",
                MAX_K, self.embedding_k
            )));
        }
        Ok(())
    }
}
