use kmerscope::io::fasta::read_sequence;
use kmerscope::{predict_function, search_kmer, AnalyzerConfig, FunctionCategory, Verdict};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_fasta_to_search() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, ">chr_test").unwrap();
    writeln!(file, "gcgcgc").unwrap();
    writeln!(file, "gcat").unwrap();

    let seq = read_sequence(file.path().to_str().unwrap()).unwrap();
    assert_eq!(seq, "GCGCGCGCAT");

    let result = search_kmer(&seq, "GC", &AnalyzerConfig::default()).unwrap();
    assert_eq!(result.positions, vec![0, 2, 4, 6]);
}

#[test]
fn test_fasta_to_prediction() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, ">gc_rich").unwrap();
    writeln!(file, "GCGCGGCCGCGCGGCGCCGCGGCGCGCCGGCGCGCGGCGCC").unwrap();

    let seq = read_sequence(file.path().to_str().unwrap()).unwrap();
    let prediction = predict_function(&seq, &AnalyzerConfig::default()).unwrap();
    let sum: f64 = prediction.classification.fractions.iter().sum();
    assert!((sum - 1.0).abs() < 1e-9);
    // GC-heavy and fairly diverse: closest to the ribosomal profile without dominating
    assert_eq!(
        prediction.classification.verdict,
        Verdict::Mixed(FunctionCategory::Ribosomal)
    );
    assert!(prediction.to_string().contains("PREDICTION:"));
}
