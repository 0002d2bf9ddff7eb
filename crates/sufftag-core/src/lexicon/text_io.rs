//! Plain-text vocabulary loading.
//!
//! Lexicon file: one word per line, `word tag freq [tag freq ...]`.
//! N-gram file: `tag freq` (unigram), `tag tag freq` or `tag tag tag freq`.
//! Only unigrams are kept; bigrams and trigrams belong to the tagger's
//! transition model. Fields are separated by any whitespace and blank lines
//! are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, debug_span};

use super::{LexiconError, Vocabulary};

const MAX_NGRAM_ORDER: usize = 3;

impl Vocabulary {
    /// Load a vocabulary from lexicon and n-gram sources.
    ///
    /// The n-gram source is read first, so tag ids follow its order.
    pub fn from_readers<L, N>(lexicon: L, ngrams: N) -> Result<Self, LexiconError>
    where
        L: BufRead,
        N: BufRead,
    {
        let _span = debug_span!("load_vocabulary").entered();
        let mut vocab = Vocabulary::new();
        vocab.read_ngrams(ngrams)?;
        vocab.read_lexicon(lexicon)?;
        debug!(
            words = vocab.lexicon.len(),
            tags = vocab.tags.len(),
            unigrams = vocab.unigrams.len()
        );
        Ok(vocab)
    }

    pub fn open(lexicon_path: &Path, ngram_path: &Path) -> Result<Self, LexiconError> {
        let lexicon = BufReader::new(File::open(lexicon_path)?);
        let ngrams = BufReader::new(File::open(ngram_path)?);
        Self::from_readers(lexicon, ngrams)
    }

    fn read_lexicon<R: BufRead>(&mut self, rdr: R) -> Result<(), LexiconError> {
        for (i, line) in rdr.lines().enumerate() {
            let line = line?;
            let line_no = i + 1;
            let mut fields = line.split_whitespace();
            let Some(word) = fields.next() else {
                continue;
            };
            let rest: Vec<&str> = fields.collect();
            if rest.is_empty() || rest.len() % 2 != 0 {
                return Err(LexiconError::Parse {
                    line: line_no,
                    reason: format!("expected `{word}` to be followed by tag/frequency pairs"),
                });
            }
            for pair in rest.chunks_exact(2) {
                let freq = parse_freq(pair[1], line_no)?;
                self.add_word(word, pair[0], freq);
            }
        }
        Ok(())
    }

    fn read_ngrams<R: BufRead>(&mut self, rdr: R) -> Result<(), LexiconError> {
        for (i, line) in rdr.lines().enumerate() {
            let line = line?;
            let line_no = i + 1;
            let fields: Vec<&str> = line.split_whitespace().collect();
            let Some((freq, tags)) = fields.split_last() else {
                continue;
            };
            match tags.len() {
                1 => {
                    let freq = parse_freq(freq, line_no)?;
                    self.add_unigram(tags[0], freq);
                }
                2..=MAX_NGRAM_ORDER => {
                    parse_freq(freq, line_no)?;
                }
                n => {
                    return Err(LexiconError::Parse {
                        line: line_no,
                        reason: format!("expected 1 to {MAX_NGRAM_ORDER} tags, found {n}"),
                    })
                }
            }
        }
        Ok(())
    }
}

fn parse_freq(field: &str, line: usize) -> Result<u32, LexiconError> {
    field.parse().map_err(|_| LexiconError::Parse {
        line,
        reason: format!("invalid frequency `{field}`"),
    })
}
