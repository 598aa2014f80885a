//! Property-based tests for tune-evo
//!
//! Uses proptest to verify invariants and properties of the library.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tune_evo::prelude::*;

use proptest::prelude::*;

fn bit_string(length: usize) -> impl Strategy<Value = BitString> {
    prop::collection::vec(any::<bool>(), length).prop_map(BitString::new)
}

fn record(id: u64, genome: BitString, score: Score) -> FitnessRecord {
    FitnessRecord::new(Individual::new(IndividualId(id), genome), score, id as usize)
}

proptest! {
    // ==================== BitString Properties ====================

    #[test]
    fn bit_string_generate_has_requested_length(length in 0usize..200, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let genome = BitString::generate(length, &mut rng);
        prop_assert_eq!(genome.len(), length);
        prop_assert!(genome.genes().all(|g| g == 0 || g == 1));
    }

    #[test]
    fn bit_string_display_parse_roundtrip(bits in prop::collection::vec(any::<bool>(), 0..64)) {
        let genome = BitString::new(bits);
        let parsed: BitString = genome.to_string().parse().unwrap();
        prop_assert_eq!(parsed, genome);
    }

    #[test]
    fn bit_string_hamming_symmetric((a, b) in (1usize..64).prop_flat_map(|n| (bit_string(n), bit_string(n)))) {
        prop_assert_eq!(a.hamming_distance(&b), b.hamming_distance(&a));
        prop_assert_eq!(a.hamming_distance(&a.complement()), a.len());
    }

    // ==================== Crossover Properties ====================

    #[test]
    fn crossover_children_are_prefix_suffix_splices(
        (a, b) in (2usize..64).prop_flat_map(|n| (bit_string(n), bit_string(n))),
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let (c1, c2) = OnePointCrossover::new().crossover(&a, &b, &mut rng).unwrap();
        let n = a.len();
        prop_assert_eq!(c1.len(), n);
        prop_assert_eq!(c2.len(), n);

        // Some split point in [1, n-1] explains both children
        let explained = (1..n).any(|p| {
            c1.bits()[..p] == a.bits()[..p]
                && c1.bits()[p..] == b.bits()[p..]
                && c2.bits()[..p] == b.bits()[..p]
                && c2.bits()[p..] == a.bits()[p..]
        });
        prop_assert!(explained);
    }

    #[test]
    fn crossover_rejects_unequal_lengths(
        a in prop::collection::vec(any::<bool>(), 1..32),
        b in prop::collection::vec(any::<bool>(), 1..32),
        seed in any::<u64>()
    ) {
        prop_assume!(a.len() != b.len());
        let (left, right) = (a.len(), b.len());
        let mut rng = StdRng::seed_from_u64(seed);
        let result = OnePointCrossover::new().crossover(&BitString::new(a), &BitString::new(b), &mut rng);
        prop_assert_eq!(result, Err(OperatorError::LengthMismatch { left, right }));
    }

    #[test]
    fn crossover_single_gene_returns_copies(a in bit_string(1), b in bit_string(1), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let (c1, c2) = OnePointCrossover::new().crossover(&a, &b, &mut rng).unwrap();
        prop_assert_eq!(c1, a);
        prop_assert_eq!(c2, b);
    }

    // ==================== Mutation Properties ====================

    #[test]
    fn mutation_with_zero_probability_is_identity(
        genome in (1usize..64).prop_flat_map(bit_string),
        repeats in 0usize..20,
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mutation = BitFlipMutation::new(repeats, 0.0).unwrap();
        prop_assert_eq!(mutation.mutated(&genome, &mut rng).unwrap(), genome);
    }

    #[test]
    fn mutation_changes_at_most_repeats_genes(
        genome in (1usize..64).prop_flat_map(bit_string),
        repeats in 0usize..20,
        probability in 0.0f64..=1.0,
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mutation = BitFlipMutation::new(repeats, probability).unwrap();
        let mutated = mutation.mutated(&genome, &mut rng).unwrap();
        prop_assert_eq!(mutated.len(), genome.len());
        prop_assert!(mutated.hamming_distance(&genome) <= repeats);
    }

    // ==================== Selection Properties ====================

    #[test]
    fn weighted_distribution_length(scores in prop::collection::vec(0u64..50, 0..20)) {
        let distribution = WeightedDistribution::from_scores(scores.iter().copied());
        let expected: u128 = scores.iter().map(|&s| u128::from(s) + 1).sum();
        prop_assert_eq!(distribution.len(), expected);
        prop_assert_eq!(distribution.entries(), scores.len());

        // Entry i appears exactly score_i + 1 times, in order
        let expanded: Vec<usize> = distribution.iter().collect();
        prop_assert_eq!(expanded.len() as u128, expected);
        prop_assert!(expanded.windows(2).all(|w| w[0] <= w[1]));
        for (i, &score) in scores.iter().enumerate() {
            prop_assert_eq!(distribution.count_of(i), u128::from(score) + 1);
        }
    }

    #[test]
    fn select_pair_returns_members(
        scores in prop::collection::vec(0u64..10, 2..12),
        seed in any::<u64>()
    ) {
        let records: Vec<_> = scores
            .iter()
            .enumerate()
            .map(|(i, &s)| record(i as u64, BitString::zeros(4), s))
            .collect();
        let mut rng = StdRng::seed_from_u64(seed);
        let (i, j) = FitnessProportionateSelection::new()
            .select_pair(&records, &mut rng)
            .unwrap();
        prop_assert!(i < records.len());
        prop_assert!(j < records.len());
    }

    // ==================== Breeding Properties ====================

    #[test]
    fn next_generation_has_drifted_size(n in 2usize..24, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let records: Vec<_> = (0..n)
            .map(|i| record(i as u64, BitString::generate(8, &mut rng), (n - i) as Score))
            .collect();

        let next = breed_next_generation(
            &records,
            &FitnessProportionateSelection::new(),
            &OnePointCrossover::new(),
            &BitFlipMutation::default(),
            &mut IdAllocator::starting_at(n as u64),
            1,
            &mut rng,
        )
        .unwrap();

        prop_assert_eq!(next.len(), next_generation_size(n));
        prop_assert_eq!(next.len(), if n % 2 == 0 { n } else { n - 1 });
        prop_assert_eq!(&next[0], &records[0].individual);
        prop_assert_eq!(&next[1], &records[1].individual);
    }
}
