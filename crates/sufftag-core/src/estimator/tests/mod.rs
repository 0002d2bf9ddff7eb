mod properties;

use std::collections::HashMap;
use std::sync::Mutex;

use crate::lexicon::{TagFreqs, TagId, Vocabulary};
use crate::settings::{CutoffSettings, Settings, SuffixSettings};
use crate::shape::Category;
use crate::suffix::SuffixModel;

use super::SuffixEstimator;

/// Suffix model stand-in that records what it was trained on and asked for,
/// and answers every query with a fixed distribution.
pub(super) struct RecordingModel {
    pub category: Category,
    pub added: Vec<(String, TagFreqs)>,
    pub queried: Mutex<Vec<String>>,
    pub response: HashMap<TagId, f64>,
}

impl RecordingModel {
    pub fn added_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.added.iter().map(|(w, _)| w.as_str()).collect();
        words.sort_unstable();
        words
    }

    pub fn queried_words(&self) -> Vec<String> {
        self.queried.lock().unwrap().clone()
    }
}

impl SuffixModel for RecordingModel {
    fn add_word(&mut self, word: &str, tag_freqs: &TagFreqs) {
        self.added.push((word.to_string(), tag_freqs.clone()));
    }

    fn suffix_tag_probs(&self, word: &str) -> HashMap<TagId, f64> {
        self.queried.lock().unwrap().push(word.to_string());
        self.response.clone()
    }
}

pub(super) fn make_settings(max_suffix_length: usize, cutoff: u64, max_tags: usize) -> Settings {
    Settings {
        suffix: SuffixSettings {
            max_suffix_length,
            max_tags,
        },
        cutoff: CutoffSettings::uniform(cutoff),
    }
}

pub(super) fn recording_estimator(
    vocab: &Vocabulary,
    settings: &Settings,
    response: HashMap<TagId, f64>,
) -> SuffixEstimator<RecordingModel> {
    SuffixEstimator::with_models(vocab, settings, |category| RecordingModel {
        category,
        added: Vec::new(),
        queried: Mutex::new(Vec::new()),
        response: response.clone(),
    })
}
