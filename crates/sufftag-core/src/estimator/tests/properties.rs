//! Property-based tests for query ranking.
//!
//! Random model outputs and caps; the ranked result must stay within the cap,
//! keep descending order, and be reproducible.

use std::collections::HashMap;

use proptest::prelude::*;

use super::*;

fn arb_response() -> impl Strategy<Value = HashMap<TagId, f64>> {
    prop::collection::hash_map(0u32..40, prop_oneof![1 => Just(0.0), 9 => 0.0f64..1.0], 0..25)
}

proptest! {
    #[test]
    fn ranked_result_respects_cap_and_order(
        response in arb_response(),
        max_tags in 1usize..8,
        word in "[A-Za-z0-9.,:-]{1,10}",
    ) {
        let expected_len = response.len().min(max_tags);
        let best = response.values().copied().fold(f64::NEG_INFINITY, f64::max);
        let est = recording_estimator(&Vocabulary::new(), &make_settings(3, 10, max_tags), response);

        let result = est.tag_probs(&word);
        prop_assert_eq!(result.len(), expected_len);
        for pair in result.windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1, "out of order: {:?}", result);
            if pair[0].1 == pair[1].1 {
                prop_assert!(pair[0].0 < pair[1].0, "tie not broken by tag id: {:?}", result);
            }
        }
        if let Some(&(_, first)) = result.first() {
            prop_assert_eq!(first, best.ln());
        }
    }

    #[test]
    fn repeated_queries_agree(
        response in arb_response(),
        max_tags in 1usize..8,
        word in "[A-Za-z0-9.,:-]{1,10}",
    ) {
        let est = recording_estimator(&Vocabulary::new(), &make_settings(3, 10, max_tags), response);
        prop_assert_eq!(est.tag_probs(&word), est.tag_probs(&word));
    }

    #[test]
    fn query_reaches_exactly_one_model(word in "\\PC{1,10}") {
        let est = recording_estimator(&Vocabulary::new(), &make_settings(3, 10, 2), HashMap::new());
        est.tag_probs(&word);
        let queried: usize = Category::ALL
            .iter()
            .map(|&c| est.model(c).queried_words().len())
            .sum();
        prop_assert_eq!(queried, 1);
        prop_assert_eq!(est.model(est.classify(&word)).queried_words(), vec![word.clone()]);
    }
}
