//! Surface-shape classification of words.
//!
//! Every word falls into exactly one [`Category`]. The checks run in a fixed
//! order and the first match wins: a cardinal such as `12-34` is a
//! [`Category::Cardinal`] even though it contains a hyphen.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Numeric shapes: digits, digits with a trailing period, digit/separator
/// runs ending in a digit, and digits followed by one to three letters.
/// The whole word has to match one alternative.
static CARDINAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]+|[0-9]+\.|[0-9.,:-]+[0-9]+|[0-9]+[a-zA-Z]{1,3})$")
        .unwrap_or_else(|e| panic!("cardinal pattern failed to compile: {e}"))
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Cardinal,
    Capitalized,
    Hyphenated,
    Lowercase,
}

impl Category {
    /// All categories, in classification precedence order.
    pub const ALL: [Category; 4] = [
        Category::Cardinal,
        Category::Capitalized,
        Category::Hyphenated,
        Category::Lowercase,
    ];

    /// Position of this category in [`Category::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Category::Cardinal => 0,
            Category::Capitalized => 1,
            Category::Hyphenated => 2,
            Category::Lowercase => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::Cardinal => "cardinal",
            Category::Capitalized => "capitalized",
            Category::Hyphenated => "hyphenated",
            Category::Lowercase => "lowercase",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub fn is_cardinal(word: &str) -> bool {
    CARDINAL.is_match(word)
}

/// Classify a word by its surface shape.
///
/// Callers must pass a non-empty word. An empty string is not a cardinal,
/// has no first character and no hyphen, so it ends up as
/// [`Category::Lowercase`].
pub fn classify(word: &str) -> Category {
    if is_cardinal(word) {
        Category::Cardinal
    } else if word.chars().next().is_some_and(char::is_uppercase) {
        Category::Capitalized
    } else if word.contains('-') {
        Category::Hyphenated
    } else {
        Category::Lowercase
    }
}
