//! Suffix-based tag estimation for words a tagger cannot find in its lexicon.
//!
//! The vocabulary is split into four surface-shape classes (see [`shape`]).
//! Rare words of each class train a dedicated suffix model, and queries are
//! routed to the model matching the word's shape.

pub mod estimator;
pub mod lexicon;
pub mod settings;
pub mod shape;
pub mod suffix;

pub use estimator::{SuffixEstimator, TagLogProbs};
pub use lexicon::{TagFreqs, TagId, TagSet, Vocabulary};
pub use settings::Settings;
pub use shape::{classify, Category};
pub use suffix::{SuffixModel, WordSuffixTree};
