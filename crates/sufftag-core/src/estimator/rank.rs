use std::cmp::Ordering;
use std::collections::HashMap;

use crate::lexicon::TagId;

use super::TagLogProbs;

/// Descending probability, then ascending tag id. `total_cmp` keeps the
/// order total even for NaN.
fn by_prob_desc(a: &(TagId, f64), b: &(TagId, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

/// Keep the `max_tags` most probable tags and convert them to natural logs.
pub(super) fn top_log_probs(probs: HashMap<TagId, f64>, max_tags: usize) -> TagLogProbs {
    if max_tags == 0 {
        return Vec::new();
    }
    let mut ranked: Vec<(TagId, f64)> = probs.into_iter().collect();
    // Partition so the best `max_tags` entries come first, then sort only those.
    if ranked.len() > max_tags {
        ranked.select_nth_unstable_by(max_tags - 1, by_prob_desc);
        ranked.truncate(max_tags);
    }
    ranked.sort_unstable_by(by_prob_desc);
    ranked.into_iter().map(|(tag, p)| (tag, p.ln())).collect()
}
