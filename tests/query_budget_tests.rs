//! Query-budget behavior of the sampling entry points, plus property-based
//! tests of the budget-selection invariants.

use proptest::prelude::*;
use seqsel::{
    least_confidence_sampling, max_norm_log_prob_sampling, random_sampling, select_by_budget,
    Budget, MockEmbeddings, MockTagger, ScorerConfig, ScorerContext, Sentence,
};

fn pool_of(token_counts: &[usize]) -> Vec<Sentence> {
    token_counts
        .iter()
        .map(|&n| Sentence::new((0..n).map(|i| format!("t{i}")).collect::<Vec<_>>()))
        .collect()
}

#[test]
fn random_sampling_is_reproducible_under_seed() {
    let tagger = MockTagger::new();
    let embeddings = MockEmbeddings::new();
    let config = ScorerConfig::new().with_seed(0);
    let ctx = ScorerContext {
        tagger: &tagger,
        embeddings: &embeddings,
        tag_type: "ner",
        config: &config,
    };

    let mut pool = pool_of(&[3; 10]);
    let first = random_sampling(&mut pool, Budget::Sentences(10), &ctx).unwrap();
    let second = random_sampling(&mut pool, Budget::Sentences(10), &ctx).unwrap();

    assert_eq!(first, second);
    let mut sorted = first.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..10).collect::<Vec<_>>());
}

#[test]
fn sampling_clamps_zero_and_caps_at_pool_size() {
    let tagger = MockTagger::new().with_log_probs(vec![-0.3, -0.2, -0.1]);
    let embeddings = MockEmbeddings::new();
    let config = ScorerConfig::new().with_seed(1);
    let ctx = ScorerContext {
        tagger: &tagger,
        embeddings: &embeddings,
        tag_type: "ner",
        config: &config,
    };

    let mut pool = pool_of(&[4, 4, 4]);
    assert_eq!(
        random_sampling(&mut pool, Budget::Sentences(0), &ctx).unwrap().len(),
        1
    );
    assert_eq!(
        least_confidence_sampling(&mut pool, Budget::Sentences(50), &ctx)
            .unwrap()
            .len(),
        3
    );
    assert_eq!(
        max_norm_log_prob_sampling(&mut pool, Budget::Sentences(0), &ctx)
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn token_budget_includes_the_crossing_sentence() {
    // Least-confident order is pool order here; 4 + 5 < 12 but 4 + 5 + 6
    // crosses the budget, so three sentences come back.
    let tagger = MockTagger::new().with_log_probs(vec![-0.4, -0.3, -0.2, -0.1]);
    let embeddings = MockEmbeddings::new();
    let config = ScorerConfig::default();
    let ctx = ScorerContext {
        tagger: &tagger,
        embeddings: &embeddings,
        tag_type: "ner",
        config: &config,
    };

    let mut pool = pool_of(&[4, 5, 6, 7]);
    let selected = least_confidence_sampling(&mut pool, Budget::Tokens(12), &ctx).unwrap();
    assert_eq!(selected, vec![0, 1, 2]);
}

#[test]
fn token_budget_returns_at_least_one_sentence() {
    let tagger = MockTagger::new().with_log_probs(vec![-0.2, -0.1]);
    let embeddings = MockEmbeddings::new();
    let config = ScorerConfig::default();
    let ctx = ScorerContext {
        tagger: &tagger,
        embeddings: &embeddings,
        tag_type: "ner",
        config: &config,
    };

    let mut pool = pool_of(&[30, 2]);
    let selected = least_confidence_sampling(&mut pool, Budget::Tokens(5), &ctx).unwrap();
    assert_eq!(selected, vec![0]);
}

proptest! {
    #[test]
    fn sentence_budget_length_invariant(
        pool_size in 0..40usize,
        requested in 0..80usize,
        seed in 0..1000u64,
    ) {
        let tagger = MockTagger::new();
        let embeddings = MockEmbeddings::new();
        let config = ScorerConfig::new().with_seed(seed);
        let ctx = ScorerContext {
            tagger: &tagger,
            embeddings: &embeddings,
            tag_type: "ner",
            config: &config,
        };

        let mut pool = pool_of(&vec![2; pool_size]);
        let selected = random_sampling(&mut pool, Budget::Sentences(requested), &ctx).unwrap();

        let expected = if pool_size == 0 {
            0
        } else {
            requested.max(1).min(pool_size)
        };
        prop_assert_eq!(selected.len(), expected);

        // No duplicates, all in range.
        let mut seen = std::collections::HashSet::new();
        for &idx in &selected {
            prop_assert!(idx < pool_size);
            prop_assert!(seen.insert(idx));
        }
    }

    #[test]
    fn token_budget_prefix_is_minimal(
        token_counts in prop::collection::vec(1..12usize, 1..30),
        required in 1..100usize,
    ) {
        let sentences = pool_of(&token_counts);
        let ranking: Vec<usize> = (0..sentences.len()).collect();
        let selected = select_by_budget(&sentences, &ranking, Budget::Tokens(required));

        prop_assert!(!selected.is_empty());

        let total: usize = selected.iter().map(|&i| sentences[i].token_count()).sum();
        let pool_total: usize = token_counts.iter().sum();
        if pool_total >= required {
            // The full batch reaches the budget and dropping its last
            // sentence would fall short.
            prop_assert!(total >= required);
            let without_last: usize = selected[..selected.len() - 1]
                .iter()
                .map(|&i| sentences[i].token_count())
                .sum();
            prop_assert!(without_last < required);
        } else {
            prop_assert_eq!(selected.len(), sentences.len());
        }
    }
}
