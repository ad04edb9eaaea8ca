use kmerscope::classify::classify;
use kmerscope::kmer::index::MAX_OCCUPANCY;
use kmerscope::kmer::kmer::{decode_kmer, encode_kmer};
use kmerscope::{get_sequence_embedding, KmerIndex, SequenceEmbedding, Verdict};
use proptest::prelude::*;

fn dna(min: usize, max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(b"ACGTN".to_vec()), min..max)
        .prop_map(|v| String::from_utf8(v).unwrap())
}

fn acgt(k: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(b"ACGT".to_vec()), k)
        .prop_map(|v| String::from_utf8(v).unwrap())
}

proptest! {
    #[test]
    fn prop_every_valid_window_is_found(seq in dna(0, 200), k in 1usize..=8) {
        let mut index = KmerIndex::new(1, k).unwrap();
        index.build_index(&seq).unwrap();
        if seq.len() >= k {
            for i in 0..=seq.len() - k {
                let window = &seq[i..i + k];
                if window.bytes().all(|b| b != b'N') {
                    let positions = index.query(window);
                    prop_assert!(positions.contains(&i));
                    prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
                }
            }
        }
    }

    #[test]
    fn prop_load_factor_capped(seq in dna(0, 120), k in 1usize..=6, cap in 1usize..64) {
        // Every prefix ends one window later, so the cap is checked after each insert.
        for end in 0..=seq.len() {
            let mut index = KmerIndex::new(cap, k).unwrap();
            index.build_index(&seq[..end]).unwrap();
            prop_assert!(index.load_factor() <= MAX_OCCUPANCY);
            let counts = index.get_counts();
            prop_assert_eq!(counts.len(), index.unique_count());
        }
    }

    #[test]
    fn prop_encode_injective((a, b) in (1usize..=32).prop_flat_map(|k| (acgt(k), acgt(k)))) {
        let k = a.len();
        let ka = encode_kmer(&a, k).unwrap();
        let kb = encode_kmer(&b, k).unwrap();
        prop_assert_eq!(ka == kb, a == b);
        prop_assert_eq!(decode_kmer(ka, k), a);
    }

    #[test]
    fn prop_wrong_length_query_is_empty(seq in dna(0, 100), k in 1usize..=6, q in "[ACGT]{0,12}") {
        prop_assume!(q.len() != k);
        let mut index = KmerIndex::new(16, k).unwrap();
        index.build_index(&seq).unwrap();
        prop_assert!(index.query(&q).is_empty());
    }

    #[test]
    fn prop_embedding_unit_or_zero(seq in dna(0, 200), k in 1usize..=6) {
        let mut index = KmerIndex::new(16, k).unwrap();
        index.build_index(&seq).unwrap();
        let emb = get_sequence_embedding(&index.get_counts(), &seq);
        prop_assert!(emb.is_zero() || (emb.norm() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn prop_fractions_sum_to_one(v in prop::array::uniform5(0.0f64..1.0)) {
        let result = classify(&SequenceEmbedding::from_raw(v));
        if result.total_score() != 0.0 {
            let sum: f64 = result.fractions.iter().sum();
            prop_assert!((sum - 1.0).abs() < 1e-9);
        } else {
            prop_assert_eq!(result.verdict, Verdict::Unknown);
        }
    }
}
