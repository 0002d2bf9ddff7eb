//! Suffix models: tag distributions estimated from word endings.
//!
//! [`SuffixModel`] is the contract the estimator trains and queries.
//! [`WordSuffixTree`] is the default implementation, a reversed-character
//! trie smoothed by successive abstraction over shorter suffixes.

mod tree;

pub use tree::WordSuffixTree;

use std::collections::{HashMap, HashSet};

use crate::lexicon::{TagFreqs, TagId};

/// A statistical model mapping word suffixes to tag probabilities.
///
/// Words are added first; queries follow once training is complete.
/// Interleaving the two is not supported.
pub trait SuffixModel: Send + Sync {
    /// Add one word with its observed tag frequencies.
    fn add_word(&mut self, word: &str, tag_freqs: &TagFreqs);

    /// Tag probabilities for `word`, seen or unseen during training.
    fn suffix_tag_probs(&self, word: &str) -> HashMap<TagId, f64>;
}

/// Smoothing weight shared by all suffix models of a vocabulary.
///
/// The sample standard deviation of the corpus tag probabilities, ignoring
/// tags in `skip`. Returns `0.0` when fewer than two tags carry mass.
pub fn calculate_theta(unigrams: &HashMap<TagId, u32>, skip: &HashSet<TagId>) -> f64 {
    let freqs: Vec<u64> = unigrams
        .iter()
        .filter(|&(tag, _)| !skip.contains(tag))
        .map(|(_, &freq)| u64::from(freq))
        .collect();
    let total: u64 = freqs.iter().sum();
    if freqs.len() < 2 || total == 0 {
        return 0.0;
    }

    let n = freqs.len() as f64;
    let probs: Vec<f64> = freqs.iter().map(|&f| f as f64 / total as f64).collect();
    let mean = probs.iter().sum::<f64>() / n;
    let variance = probs.iter().map(|p| (p - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}
