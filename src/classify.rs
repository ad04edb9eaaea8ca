//! Prototype-based function prediction from a [`SequenceEmbedding`].

use ndarray::{arr2, Array1, Array2, ArrayView1};
use serde::Serialize;
use std::fmt;

use crate::embed::{SequenceEmbedding, EMBEDDING_DIM};

/// Fraction above which a single category dominates.
pub const DOMINANT_THRESHOLD: f64 = 0.60;
/// Fraction above which the strongest category is reported as a mixed signature.
pub const MIXED_THRESHOLD: f64 = 0.40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FunctionCategory {
    Ribosomal,
    Mobile,
    Metabolic,
}

impl FunctionCategory {
    pub const ALL: [FunctionCategory; 3] = [
        FunctionCategory::Ribosomal,
        FunctionCategory::Mobile,
        FunctionCategory::Metabolic,
    ];
}

/// Reference vectors, one row per category in [`FunctionCategory::ALL`] order.
///
/// Ribosomal: high GC, high entropy. Mobile elements: rare and palindromic
/// k-mers. Metabolic: balanced GC/AT, moderate entropy.
pub fn prototypes() -> Array2<f64> {
    arr2(&[
        [0.9, 0.1, 0.1, 0.9, 0.2],
        [0.1, 0.9, 0.1, 0.1, 0.9],
        [0.5, 0.2, 0.6, 0.7, 0.1],
    ])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    /// One category holds more than 60% of the total score.
    Dominant(FunctionCategory),
    /// The strongest category holds more than 40% and beats both others.
    Mixed(FunctionCategory),
    Unknown,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Dominant(FunctionCategory::Ribosomal) => write!(f, "Ribosomal / Structural (dominant)"),
            Verdict::Dominant(FunctionCategory::Mobile) => write!(f, "Mobile Element / Repeats (dominant)"),
            Verdict::Dominant(FunctionCategory::Metabolic) => write!(f, "Metabolic / Housekeeping (dominant)"),
            Verdict::Mixed(FunctionCategory::Ribosomal) => write!(f, "Ribosomal (mixed signatures)"),
            Verdict::Mixed(FunctionCategory::Mobile) => write!(f, "Mobile Element (mixed signatures)"),
            Verdict::Mixed(FunctionCategory::Metabolic) => write!(f, "Metabolic (mixed signatures)"),
            Verdict::Unknown => write!(f, "No single function dominant, potential mosaic or unknown function."),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    /// Raw dot products in [`FunctionCategory::ALL`] order.
    pub scores: [f64; 3],
    /// Share of the total score; all zero when the total is zero.
    pub fractions: [f64; 3],
    pub verdict: Verdict,
    /// GC percentage of the classified sequence, reported alongside the verdict.
    pub gc_percent: Option<f64>,
}

impl ClassificationResult {
    pub fn total_score(&self) -> f64 {
        self.scores.iter().sum()
    }

    pub fn score(&self, category: FunctionCategory) -> f64 {
        self.scores[category as usize]
    }

    pub fn fraction(&self, category: FunctionCategory) -> f64 {
        self.fractions[category as usize]
    }
}

impl fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, t, m] = self.scores;
        let [rf, tf, mf] = self.fractions;
        writeln!(f, "Scores: [Ribosomal: {:.4}, Mobile: {:.4}, Metabolic: {:.4}]", r, t, m)?;
        writeln!(f, "Fractions: [Ribosomal: {:.4}, Mobile: {:.4}, Metabolic: {:.4}]", rf, tf, mf)?;
        write!(f, "PREDICTION: {}", self.verdict)
    }
}

/// Score `embedding` against every prototype and pick a verdict.
pub fn classify(embedding: &SequenceEmbedding) -> ClassificationResult {
    let v: ArrayView1<f64> = ArrayView1::from(embedding.as_slice());
    debug_assert_eq!(v.len(), EMBEDDING_DIM);
    let raw: Array1<f64> = prototypes().dot(&v);
    let scores = [raw[0], raw[1], raw[2]];

    let total: f64 = scores.iter().sum();
    if total == 0.0 || !total.is_finite() {
        return ClassificationResult {
            scores,
            fractions: [0.0; 3],
            verdict: Verdict::Unknown,
            gc_percent: None,
        };
    }

    let fractions = scores.map(|s| s / total);
    ClassificationResult {
        scores,
        fractions,
        verdict: decide(&fractions),
        gc_percent: None,
    }
}

/// Same as [`classify`], with the sequence GC percentage attached to the result.
pub fn predict_function_from_embedding(embedding: &SequenceEmbedding, gc_percent: f64) -> ClassificationResult {
    ClassificationResult {
        gc_percent: Some(gc_percent),
        ..classify(embedding)
    }
}

fn decide(fractions: &[f64; 3]) -> Verdict {
    let categories = FunctionCategory::ALL;
    if let Some(i) = (0..3).find(|&i| fractions[i] > DOMINANT_THRESHOLD) {
        return Verdict::Dominant(categories[i]);
    }
    let mixed = (0..3).find(|&i| {
        fractions[i] > MIXED_THRESHOLD && (0..3).filter(|&j| j != i).all(|j| fractions[i] > fractions[j])
    });
    match mixed {
        Some(i) => Verdict::Mixed(categories[i]),
        None => Verdict::Unknown,
    }
}
