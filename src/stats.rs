use serde::Serialize;

/// Base composition of a sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Composition {
    pub length: usize,
    pub gc_count: usize,
    pub at_count: usize,
    /// Characters outside `{A, C, G, T}` (ambiguity codes, gaps).
    pub other_count: usize,
    pub gc_percent: f64,
    pub at_percent: f64,
}

/// Count `(G|C, A|T)` over the whole sequence.
pub fn base_counts(sequence: &str) -> (usize, usize) {
    sequence.bytes().fold((0, 0), |(gc, at), b| match b {
        b'G' | b'C' => (gc + 1, at),
        b'A' | b'T' => (gc, at + 1),
        _ => (gc, at),
    })
}

/// `part / whole`, or 0 when there is nothing to divide by.
#[inline]
pub(crate) fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// GC content as a percentage of the full sequence length (0 for an empty sequence).
pub fn gc_content(sequence: &str) -> f64 {
    let (gc, _) = base_counts(sequence);
    100.0 * ratio(gc, sequence.len())
}

/// AT content as a percentage of the full sequence length (0 for an empty sequence).
pub fn at_content(sequence: &str) -> f64 {
    let (_, at) = base_counts(sequence);
    100.0 * ratio(at, sequence.len())
}

pub fn calculate_composition(sequence: &str) -> Composition {
    let length = sequence.len();
    let (gc_count, at_count) = base_counts(sequence);
    Composition {
        length,
        gc_count,
        at_count,
        other_count: length - gc_count - at_count,
        gc_percent: 100.0 * ratio(gc_count, length),
        at_percent: 100.0 * ratio(at_count, length),
    }
}

impl std::fmt::Display for Composition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GC Content: {:.2}%", self.gc_percent)
    }
}
