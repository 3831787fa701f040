//! Query budgets and the selection of a batch from a ranking.

use serde::{Deserialize, Serialize};

use crate::sentence::Sentence;

/// The quota a query call must honor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Budget {
    /// Return this many sentences. Zero is clamped to one: a query always
    /// yields at least one sentence to annotate.
    Sentences(usize),
    /// Return sentences until their cumulative token count reaches this
    /// budget. The sentence that crosses the budget is included.
    Tokens(usize),
}

/// Trim an ordered ranking of pool indices down to the budget.
///
/// The ranking is consumed front to back, so the highest-priority sentences
/// survive. An empty ranking (empty pool) yields an empty batch.
#[must_use]
pub fn select_by_budget(sentences: &[Sentence], ranking: &[usize], budget: Budget) -> Vec<usize> {
    if ranking.is_empty() {
        return Vec::new();
    }

    match budget {
        Budget::Sentences(n) => {
            let n = n.max(1).min(ranking.len());
            ranking[..n].to_vec()
        }
        Budget::Tokens(required) => {
            let mut selected = Vec::new();
            let mut total = 0usize;
            for &idx in ranking {
                selected.push(idx);
                total += sentences[idx].token_count();
                if total >= required {
                    break;
                }
            }
            selected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(token_counts: &[usize]) -> Vec<Sentence> {
        token_counts
            .iter()
            .map(|&n| Sentence::new((0..n).map(|i| format!("t{i}")).collect::<Vec<_>>()))
            .collect()
    }

    #[test]
    fn test_sentence_budget_zero_is_clamped_to_one() {
        let sentences = pool(&[3, 3, 3]);
        let ranking = vec![2, 0, 1];
        assert_eq!(select_by_budget(&sentences, &ranking, Budget::Sentences(0)), vec![2]);
    }

    #[test]
    fn test_sentence_budget_caps_at_pool_size() {
        let sentences = pool(&[3, 3]);
        let ranking = vec![1, 0];
        assert_eq!(
            select_by_budget(&sentences, &ranking, Budget::Sentences(10)),
            vec![1, 0]
        );
    }

    #[test]
    fn test_token_budget_stops_at_crossing_sentence() {
        let sentences = pool(&[4, 5, 6, 7]);
        let ranking = vec![0, 1, 2, 3];
        // 4 + 5 = 9 < 12, 4 + 5 + 6 = 15 >= 12: three sentences.
        assert_eq!(
            select_by_budget(&sentences, &ranking, Budget::Tokens(12)),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_token_budget_returns_at_least_one() {
        let sentences = pool(&[40, 2]);
        let ranking = vec![0, 1];
        assert_eq!(select_by_budget(&sentences, &ranking, Budget::Tokens(5)), vec![0]);
    }

    #[test]
    fn test_empty_ranking() {
        let sentences = pool(&[]);
        assert!(select_by_budget(&sentences, &[], Budget::Sentences(3)).is_empty());
        assert!(select_by_budget(&sentences, &[], Budget::Tokens(3)).is_empty());
    }
}
