use kmerscope::embed::KmerFeatures;
use kmerscope::kmer::index::MAX_OCCUPANCY;
use kmerscope::{composition, get_sequence_embedding, search_kmer, AnalyzerConfig, KmerIndex};

#[test]
fn test_gc_repeat_search_and_content() {
    let seq = "GCGCGCGCAT";
    let mut index = KmerIndex::new(512, 2).unwrap();
    index.build_index(seq).unwrap();
    assert_eq!(index.query("GC"), &[0, 2, 4, 6]);

    let result = search_kmer(seq, "GC", &AnalyzerConfig::default()).unwrap();
    assert_eq!(result.count, 4);

    let comp = composition(seq).unwrap();
    assert_eq!(format!("{:.2}", comp.gc_percent), "80.00");
}

#[test]
fn test_sequence_shorter_than_k() {
    let mut index = KmerIndex::new(512, 5).unwrap();
    index.build_index("ACG").unwrap();
    assert_eq!(index.unique_count(), 0);
    assert!(index.get_counts().is_empty());
    for q in ["ACGTA", "AAAAA", "ACG", ""] {
        assert!(index.query(q).is_empty());
    }
}

#[test]
fn test_uniform_sequence() {
    let seq = "AAAAAAAAAA";
    let mut index = KmerIndex::new(512, 3).unwrap();
    index.build_index(seq).unwrap();

    let counts = index.get_counts();
    assert_eq!(counts.len(), 1);
    assert_eq!(counts.iter().next().map(|(_, c)| c), Some(8));

    let features = KmerFeatures::compute(&counts, seq);
    assert_eq!(features.rare_fraction, 0.0);
    assert_eq!(features.entropy, 0.0);

    let emb = get_sequence_embedding(&counts, seq);
    assert!((emb.norm() - 1.0).abs() < 1e-9);
}

#[test]
fn test_small_table_grows_under_load_cap() {
    let seq = "ACGTTGCAAGCTTCGAACCGGTTAAGGCCTTATATCGCGNNACGGT";
    let mut index = KmerIndex::new(2, 6).unwrap();
    index.build_index(seq).unwrap();
    assert!(index.load_factor() <= MAX_OCCUPANCY);
    assert_eq!(index.query("ACGTTG"), &[0]);
}

#[test]
fn test_k_32_window_with_all_bits_set() {
    // The key for 32 T's equals u64::MAX; it is stored like any other key.
    let tail = "T".repeat(32);
    let seq = format!("A{}", tail);
    let mut index = KmerIndex::new(8, 32).unwrap();
    index.build_index(&seq).unwrap();
    assert_eq!(index.query(&tail), &[1]);
    assert_eq!(index.unique_count(), 2);
}
