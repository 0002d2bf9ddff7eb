use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use sufftag_core::{Settings, SuffixEstimator, TagId, TagLogProbs, TagSet, Vocabulary};

use super::config_ops::load_settings;
use super::CommandResult;

/// One guessed word, as printed with `--json`.
#[derive(Debug, Serialize)]
pub struct GuessRecord {
    pub word: String,
    pub category: &'static str,
    pub tags: Vec<TagScore>,
}

/// A ranked tag. `log_prob` is `null` in JSON when the probability is zero.
#[derive(Debug, Serialize)]
pub struct TagScore {
    pub tag: String,
    pub log_prob: f64,
}

impl GuessRecord {
    pub fn new(word: &str, est: &SuffixEstimator, tags: &TagSet) -> Self {
        let ranked: TagLogProbs = est.tag_probs(word);
        Self {
            word: word.to_string(),
            category: est.classify(word).name(),
            tags: ranked
                .into_iter()
                .map(|(id, log_prob)| TagScore {
                    tag: tag_name(tags, id),
                    log_prob,
                })
                .collect(),
        }
    }

    /// `word<TAB>category<TAB>tag:logp tag:logp ...`
    pub fn to_text(&self) -> String {
        let tags: Vec<String> = self
            .tags
            .iter()
            .map(|t| format!("{}:{:.4}", t.tag, t.log_prob))
            .collect();
        format!("{}\t{}\t{}", self.word, self.category, tags.join(" "))
    }
}

fn tag_name(tags: &TagSet, id: TagId) -> String {
    tags.name(id)
        .map(str::to_string)
        .unwrap_or_else(|| format!("#{id}"))
}

/// Guess tags for `words`, or for each stdin line when `words` is empty.
pub fn guess(
    lexicon: &str,
    ngrams: &str,
    settings_file: Option<&str>,
    json: bool,
    words: &[String],
) -> CommandResult {
    let settings = settings_file.map(load_settings).transpose()?.unwrap_or_default();
    let vocab = fail!(
        Vocabulary::open(Path::new(lexicon), Path::new(ngrams)),
        "Failed to load vocabulary from {lexicon} and {ngrams}: {}"
    );
    info!(
        words = vocab.lexicon().len(),
        tags = vocab.tags().len(),
        "vocabulary loaded"
    );
    let est = build_estimator(&vocab, &settings);

    let mut out = BufWriter::new(io::stdout().lock());
    if words.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = fail!(line, "Failed to read line: {}");
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            fail!(emit(&mut out, word, &est, vocab.tags(), json), "Write error: {}");
        }
    } else {
        for word in words {
            if word.is_empty() {
                warn!("skipping empty word");
                continue;
            }
            fail!(emit(&mut out, word, &est, vocab.tags(), json), "Write error: {}");
        }
    }
    fail!(out.flush(), "Write error: {}");
    Ok(())
}

pub fn classify(words: &[String]) -> CommandResult {
    for word in words {
        println!("{word}\t{}", sufftag_core::classify(word));
    }
    Ok(())
}

fn build_estimator(vocab: &Vocabulary, settings: &Settings) -> SuffixEstimator {
    let est = SuffixEstimator::new(vocab, settings);
    info!(
        max_tags = est.max_tags(),
        max_suffix_length = settings.suffix.max_suffix_length,
        "suffix models trained"
    );
    est
}

fn emit<W: Write>(
    out: &mut W,
    word: &str,
    est: &SuffixEstimator,
    tags: &TagSet,
    json: bool,
) -> io::Result<()> {
    let record = GuessRecord::new(word, est, tags);
    if json {
        let line = serde_json::to_string(&record).map_err(io::Error::other)?;
        writeln!(out, "{line}")
    } else {
        writeln!(out, "{}", record.to_text())
    }
}
