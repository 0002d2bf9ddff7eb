//! Unknown-word tag estimation from surface shape and suffix.
//!
//! `SuffixEstimator` owns one suffix model per [`Category`]. Construction
//! trains each model on the rare words of its category; queries classify the
//! word, ask the matching model, and return the best tags as
//! log-probabilities.

mod rank;
#[cfg(test)]
mod tests;

use tracing::{debug, debug_span};

use crate::lexicon::{is_sentinel, TagId, Vocabulary};
use crate::settings::Settings;
use crate::shape::{self, Category};
use crate::suffix::{calculate_theta, SuffixModel, WordSuffixTree};

/// Ranked `(tag, ln p)` pairs, most probable first.
pub type TagLogProbs = Vec<(TagId, f64)>;

pub struct SuffixEstimator<M = WordSuffixTree> {
    /// Indexed by `Category::index()`.
    models: [M; 4],
    max_tags: usize,
}

impl SuffixEstimator<WordSuffixTree> {
    /// Build four suffix trees sharing one smoothing weight computed from
    /// the vocabulary's unigram table, then train them.
    pub fn new(vocab: &Vocabulary, settings: &Settings) -> Self {
        let skip = vocab.sentinel_tags();
        let theta = calculate_theta(vocab.unigrams(), &skip);
        let max_suffix_length = settings.suffix.max_suffix_length;
        debug!(theta, max_suffix_length, "suffix tree parameters");
        Self::with_models(vocab, settings, |_| {
            WordSuffixTree::new(vocab.unigrams(), &skip, theta, max_suffix_length)
        })
    }
}

impl<M: SuffixModel> SuffixEstimator<M> {
    /// Create one model per category with `make_model` and train them on
    /// `vocab`.
    pub fn with_models<F>(vocab: &Vocabulary, settings: &Settings, make_model: F) -> Self
    where
        F: FnMut(Category) -> M,
    {
        let mut models = Category::ALL.map(make_model);
        train(&mut models, vocab, settings);
        Self {
            models,
            max_tags: settings.suffix.max_tags,
        }
    }

    /// Most probable tags for `word` as natural-log probabilities.
    ///
    /// At most `max_tags` entries, ordered by descending probability with
    /// ties broken by ascending tag id. A zero probability comes back as
    /// `f64::NEG_INFINITY`. `word` must not be empty.
    pub fn tag_probs(&self, word: &str) -> TagLogProbs {
        debug_assert!(!word.is_empty(), "tag_probs called with an empty word");
        let category = shape::classify(word);
        let _span = debug_span!("tag_probs", %category).entered();
        let probs = self.models[category.index()].suffix_tag_probs(word);
        let ranked = rank::top_log_probs(probs, self.max_tags);
        debug!(result_count = ranked.len());
        ranked
    }

    pub fn classify(&self, word: &str) -> Category {
        shape::classify(word)
    }

    pub fn model(&self, category: Category) -> &M {
        &self.models[category.index()]
    }

    pub fn max_tags(&self) -> usize {
        self.max_tags
    }
}

/// Feed every eligible vocabulary word to its category's model.
///
/// Sentinels and empty words are skipped. A word is eligible when its total
/// frequency does not exceed its category's cutoff.
fn train<M: SuffixModel>(models: &mut [M; 4], vocab: &Vocabulary, settings: &Settings) {
    let _span = debug_span!("train_suffix_models", words = vocab.lexicon().len()).entered();
    let mut ingested = [0usize; 4];
    let mut skipped = 0usize;
    let mut too_frequent = 0usize;

    for (word, tag_freqs) in vocab.lexicon() {
        if word.is_empty() || is_sentinel(word) {
            skipped += 1;
            continue;
        }

        let word_freq: u64 = tag_freqs.values().map(|&f| u64::from(f)).sum();
        let category = shape::classify(word);
        if word_freq > settings.cutoff.for_category(category) {
            too_frequent += 1;
            continue;
        }

        models[category.index()].add_word(word, tag_freqs);
        ingested[category.index()] += 1;
    }

    debug!(
        cardinal = ingested[Category::Cardinal.index()],
        capitalized = ingested[Category::Capitalized.index()],
        hyphenated = ingested[Category::Hyphenated.index()],
        lowercase = ingested[Category::Lowercase.index()],
        skipped,
        too_frequent
    );
}
