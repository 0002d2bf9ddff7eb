use std::collections::{HashMap, HashSet};

use crate::lexicon::{TagFreqs, TagId};

use super::SuffixModel;

#[derive(Debug, Default)]
struct SuffixNode {
    tag_freqs: HashMap<TagId, u64>,
    total: u64,
    children: HashMap<char, SuffixNode>,
}

impl SuffixNode {
    fn add(&mut self, freqs: &[(TagId, u64)]) {
        for &(tag, freq) in freqs {
            *self.tag_freqs.entry(tag).or_insert(0) += freq;
            self.total += freq;
        }
    }

    /// Relative frequency of `tag` at this node.
    fn mle(&self, tag: TagId) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.tag_freqs.get(&tag).copied().unwrap_or(0) as f64 / self.total as f64
    }
}

/// Suffix trie over reversed word characters.
///
/// Each node holds the summed tag frequencies of all trained words ending in
/// the node's suffix. A query interpolates from the root towards the longest
/// matching suffix:
///
/// ```text
/// P(t | s_i) = (P̂(t | s_i) + θ · P(t | s_{i-1})) / (1 + θ)
/// ```
///
/// and divides the result by the corpus probability `P(t)`, giving a value
/// proportional to `P(s | t)`.
#[derive(Debug)]
pub struct WordSuffixTree {
    /// Corpus tag probabilities, restricted to non-skipped tags with mass.
    corpus_probs: HashMap<TagId, f64>,
    skip: HashSet<TagId>,
    theta: f64,
    max_suffix_length: usize,
    root: SuffixNode,
    words: usize,
}

impl WordSuffixTree {
    pub fn new(
        unigrams: &HashMap<TagId, u32>,
        skip: &HashSet<TagId>,
        theta: f64,
        max_suffix_length: usize,
    ) -> Self {
        let total: u64 = unigrams
            .iter()
            .filter(|&(tag, _)| !skip.contains(tag))
            .map(|(_, &f)| u64::from(f))
            .sum();
        let corpus_probs = unigrams
            .iter()
            .filter(|&(tag, &f)| !skip.contains(tag) && f > 0)
            .map(|(&tag, &f)| (tag, f64::from(f) / total as f64))
            .collect();
        Self {
            corpus_probs,
            skip: skip.clone(),
            theta,
            max_suffix_length,
            root: SuffixNode::default(),
            words: 0,
        }
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }

    pub fn max_suffix_length(&self) -> usize {
        self.max_suffix_length
    }

    /// Number of words added to the tree.
    pub fn trained_words(&self) -> usize {
        self.words
    }
}

impl SuffixModel for WordSuffixTree {
    fn add_word(&mut self, word: &str, tag_freqs: &TagFreqs) {
        let freqs: Vec<(TagId, u64)> = tag_freqs
            .iter()
            .filter(|&(tag, &f)| !self.skip.contains(tag) && f > 0)
            .map(|(&tag, &f)| (tag, u64::from(f)))
            .collect();
        if freqs.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        node.add(&freqs);
        for c in word.chars().rev().take(self.max_suffix_length) {
            node = node.children.entry(c).or_default();
            node.add(&freqs);
        }
        self.words += 1;
    }

    fn suffix_tag_probs(&self, word: &str) -> HashMap<TagId, f64> {
        // Nothing trained: every tag is equally (un)likely given the suffix.
        if self.root.total == 0 {
            return self.corpus_probs.keys().map(|&tag| (tag, 1.0)).collect();
        }

        let mut probs: HashMap<TagId, f64> = self
            .root
            .tag_freqs
            .keys()
            .map(|&tag| (tag, self.root.mle(tag)))
            .collect();

        let mut node = &self.root;
        for c in word.chars().rev().take(self.max_suffix_length) {
            let Some(child) = node.children.get(&c) else {
                break;
            };
            for (&tag, p) in probs.iter_mut() {
                *p = (child.mle(tag) + self.theta * *p) / (1.0 + self.theta);
            }
            node = child;
        }

        probs
            .into_iter()
            .filter_map(|(tag, p)| self.corpus_probs.get(&tag).map(|&prior| (tag, p / prior)))
            .collect()
    }
}
