//! Vocabulary model: per-word tag frequencies, corpus unigram frequencies,
//! and tag-name numbering.
//!
//! `Vocabulary` is what the estimator trains on. It can be filled in code
//! with [`Vocabulary::add_word`] / [`Vocabulary::add_unigram`], or loaded
//! from plain-text lexicon and n-gram files (see `text_io`).

mod text_io;

use std::collections::{HashMap, HashSet};

pub type TagId = u32;

/// Tag identifier → observed frequency.
pub type TagFreqs = HashMap<TagId, u32>;

/// Sentence-start marker. Appears both as a word and as a tag.
pub const START_TOKEN: &str = "<START>";
/// Sentence-end marker. Appears both as a word and as a tag.
pub const END_TOKEN: &str = "<END>";

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },
}

/// Dense interner for tag names. Ids are assigned in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct TagSet {
    ids: HashMap<String, TagId>,
    names: Vec<String>,
}

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, name: &str) -> TagId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.names.len() as TagId;
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        id
    }

    pub fn id(&self, name: &str) -> Option<TagId> {
        self.ids.get(name).copied()
    }

    pub fn name(&self, id: TagId) -> Option<&str> {
        self.names.get(id as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// word → (tag → frequency)
    lexicon: HashMap<String, TagFreqs>,
    /// tag → corpus frequency
    unigrams: HashMap<TagId, u32>,
    tags: TagSet,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `freq` more observations of `word` with `tag`.
    pub fn add_word(&mut self, word: &str, tag: &str, freq: u32) -> TagId {
        let id = self.tags.intern(tag);
        let freqs = self.lexicon.entry(word.to_string()).or_default();
        let slot = freqs.entry(id).or_insert(0);
        *slot = slot.saturating_add(freq);
        id
    }

    /// Record `freq` more corpus occurrences of `tag`.
    pub fn add_unigram(&mut self, tag: &str, freq: u32) -> TagId {
        let id = self.tags.intern(tag);
        let slot = self.unigrams.entry(id).or_insert(0);
        *slot = slot.saturating_add(freq);
        id
    }

    pub fn lexicon(&self) -> &HashMap<String, TagFreqs> {
        &self.lexicon
    }

    pub fn unigrams(&self) -> &HashMap<TagId, u32> {
        &self.unigrams
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Tag ids of the sentence start/end markers that are known to this
    /// vocabulary. These tags never take part in suffix statistics.
    pub fn sentinel_tags(&self) -> HashSet<TagId> {
        [START_TOKEN, END_TOKEN]
            .into_iter()
            .filter_map(|t| self.tags.id(t))
            .collect()
    }
}

/// Whether `word` is one of the sentence start/end markers.
pub fn is_sentinel(word: &str) -> bool {
    word == START_TOKEN || word == END_TOKEN
}
