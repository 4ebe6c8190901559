use super::{BOOKS, Book};
use std::collections::HashMap;
use std::sync::LazyLock;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Cannot find book {0}")]
pub struct BookNotFound(pub String);

/// Short forms that the automatic strategies would send to the wrong book,
/// or to no book at all.
const ABBREVIATIONS: &[(&str, &str)] = &[
    ("dn", "Daniel"),
    ("dt", "Deuteronomy"),
    ("gn", "Genesis"),
    ("hb", "Habakkuk"),
    ("hg", "Haggai"),
    ("jdg", "Judges"),
    ("jg", "Judges"),
    ("jm", "James"),
    ("jn", "John"),
    ("jr", "Jeremiah"),
    ("lv", "Leviticus"),
    ("mc", "Micah"),
    ("mk", "Mark"),
    ("ml", "Malachi"),
    ("mr", "Mark"),
    ("mt", "Matthew"),
    ("nb", "Numbers"),
    ("phm", "Philemon"),
    ("php", "Philippians"),
    ("pm", "Philemon"),
    ("pp", "Philippians"),
    ("zc", "Zechariah"),
    ("zp", "Zephaniah"),
];

/// Normalized names in catalog order.
static NAMES: LazyLock<Vec<(String, Book)>> =
    LazyLock::new(|| BOOKS.iter().map(|book| (normalize(book.name()), *book)).collect());

static CONSONANTS: LazyLock<HashMap<String, Book>> = LazyLock::new(|| {
    NAMES
        .iter()
        .map(|(name, book)| (strip_vowels(name), *book))
        .collect()
});

static SHORT_FORMS: LazyLock<HashMap<&'static str, Book>> = LazyLock::new(|| {
    ABBREVIATIONS
        .iter()
        .filter_map(|(short, name)| {
            let book = BOOKS.iter().find(|book| book.name() == *name)?;
            Some((*short, *book))
        })
        .collect()
});

/// One stage of the resolution chain.
///
/// Stages run in [`MatchStrategy::ALL`] order against the normalized token
/// and the first hit wins, so an earlier stage always shadows a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    Ordinal,
    FullName,
    Abbreviation,
    Consonants,
    Prefix,
    Substring,
    Fuzzy,
}

impl MatchStrategy {
    pub const ALL: [MatchStrategy; 7] = [
        MatchStrategy::Ordinal,
        MatchStrategy::FullName,
        MatchStrategy::Abbreviation,
        MatchStrategy::Consonants,
        MatchStrategy::Prefix,
        MatchStrategy::Substring,
        MatchStrategy::Fuzzy,
    ];

    /// Try this stage alone. `key` must already be normalized.
    pub fn find(self, key: &str) -> Option<Book> {
        match self {
            MatchStrategy::Ordinal => key.parse().ok().and_then(Book::from_ordinal),
            MatchStrategy::FullName => NAMES
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, book)| *book),
            MatchStrategy::Abbreviation => SHORT_FORMS.get(key).copied(),
            MatchStrategy::Consonants => CONSONANTS.get(key).copied(),
            MatchStrategy::Prefix => NAMES
                .iter()
                .find(|(name, _)| name.starts_with(key))
                .map(|(_, book)| *book),
            MatchStrategy::Substring => NAMES
                .iter()
                .find(|(name, _)| name.contains(key))
                .map(|(_, book)| *book),
            MatchStrategy::Fuzzy => NAMES
                .iter()
                .filter_map(|(name, book)| Some((fuzzy_score(key, name)?, *book)))
                .min_by_key(|(score, book)| (*score, book.ordinal()))
                .map(|(_, book)| book),
        }
    }
}

/// Resolve free text such as `"1 cor"`, `"jhn"` or `"43"` to a book.
pub fn resolve(token: &str) -> Result<Book, BookNotFound> {
    let key = normalize(token);
    MatchStrategy::ALL
        .into_iter()
        .find_map(|strategy| {
            let book = strategy.find(&key)?;
            log::debug!("resolved {token:?} to {book} by {strategy:?}");
            Some(book)
        })
        .ok_or_else(|| BookNotFound(token.to_string()))
}

fn normalize(token: &str) -> String {
    token.to_lowercase().replace(' ', "")
}

fn strip_vowels(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'))
        .collect()
}

/// Greedy left-to-right subsequence match of `token` inside `candidate`.
///
/// Each character is searched from the position of the previous hit
/// (inclusive) and the absolute position of every hit is added to the
/// score. Returns `None` when some character cannot be found in order.
fn fuzzy_score(token: &str, candidate: &str) -> Option<usize> {
    let candidate: Vec<char> = candidate.chars().collect();
    let mut cursor = 0;
    let mut score = 0;
    for c in token.chars().filter(|c| *c != ' ') {
        cursor += candidate[cursor..].iter().position(|x| *x == c)?;
        score += cursor;
    }
    Some(score)
}
