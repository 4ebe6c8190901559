//! Citation parsing: `"1cor2:11-4:13"` → a pair of verse cursors.

use crate::books::{self, Book, BookNotFound};
use regex::{Captures, Regex};
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

static CHAPTERS_WITH_VERSES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?<book>.+?)(?<start_chapter>[0-9]+)(?:[v:](?<start_verse>[0-9]+))?[-–](?<end_chapter>[0-9]+)(?:[:v](?<end_verse>[0-9]+))?$",
    )
    .unwrap()
});

static CHAPTER_WITH_VERSES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?<book>.+?)(?<chapter>[0-9]+)[:v](?<start_verse>[0-9]+)[-–](?<end_verse>[0-9]+)$",
    )
    .unwrap()
});

static CHAPTER_WITH_VERSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<book>.+?)(?<chapter>[0-9]+)[:v](?<verse>[0-9]+)$").unwrap()
});

static CHAPTER_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?<book>.+?)(?<chapter>[0-9]+)").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReferenceError {
    #[error(transparent)]
    Book(#[from] BookNotFound),
    #[error("Number {0} is too large in reference")]
    Number(String),
}

/// A position in the text. `verse == 0` selects the whole chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VerseCursor {
    pub book: Book,
    pub chapter: u32,
    pub verse: u32,
}

impl VerseCursor {
    pub fn new(book: Book, chapter: u32, verse: u32) -> Self {
        Self {
            book,
            chapter,
            verse,
        }
    }

    /// Cursor for a whole chapter.
    pub fn chapter(book: Book, chapter: u32) -> Self {
        Self::new(book, chapter, 0)
    }
}

impl fmt::Display for VerseCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.book, self.chapter)?;
        if self.verse > 0 {
            write!(f, ":{}", self.verse)?;
        }
        Ok(())
    }
}

/// A requested passage. Without `end` it is a single verse or, when
/// `start.verse` is 0, a whole chapter.
///
/// When present, `end` is in the same book and not before `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceRange {
    pub start: VerseCursor,
    pub end: Option<VerseCursor>,
}

impl ReferenceRange {
    pub fn new(start: VerseCursor, end: Option<VerseCursor>) -> Self {
        Self { start, end }
    }

    pub fn book(&self) -> Book {
        self.start.book
    }

    /// True when the range runs past the end of its first chapter.
    pub fn spans_chapters(&self) -> bool {
        self.end
            .is_some_and(|end| self.start.chapter < end.chapter)
    }

    /// The whole chapter before this range, stepping back into the previous
    /// book from a first chapter.
    pub fn previous_chapter(&self) -> VerseCursor {
        let start = self.start;
        if start.chapter <= 1 {
            let book = start.book.prev();
            VerseCursor::chapter(book, book.chapter_count())
        } else {
            VerseCursor::chapter(start.book, start.chapter - 1)
        }
    }

    /// The whole chapter after this range, stepping into the next book from
    /// a last chapter.
    pub fn next_chapter(&self) -> VerseCursor {
        let last = self.end.unwrap_or(self.start);
        if last.chapter < last.book.chapter_count() {
            VerseCursor::chapter(last.book, last.chapter + 1)
        } else {
            VerseCursor::chapter(last.book.next(), 1)
        }
    }
}

impl fmt::Display for ReferenceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)?;
        let Some(end) = self.end else {
            return Ok(());
        };
        if end.chapter != self.start.chapter {
            write!(f, "-{}", end.chapter)?;
            if end.verse > 0 {
                write!(f, ":{}", end.verse)?;
            }
        } else if end.verse > 0 {
            write!(f, "-{}", end.verse)?;
        }
        Ok(())
    }
}

/// Parse a citation such as `"John 3:16"`, `"g1v1-20"` or `"1john1-2"`.
///
/// Shapes are tried from most to least specific. A query that fits none of
/// them still yields a chapter (chapter 1 when no number can be found), so
/// the only failures are an unknown book and numbers that overflow.
pub fn parse_reference(query: &str) -> Result<ReferenceRange, ReferenceError> {
    let query = query.trim();

    if let Some(caps) = CHAPTERS_WITH_VERSES.captures(query) {
        let start_verse = optional_number(&caps, "start_verse")?;
        let end_verse = optional_number(&caps, "end_verse")?;
        // "1cor2:11-13" reads as verses 11 to 13, not as a run into chapter 13
        if !(start_verse != 0 && end_verse == 0) {
            let book = books::resolve(&caps["book"])?;
            let start = VerseCursor::new(book, number(&caps["start_chapter"])?, start_verse);
            let end = VerseCursor::new(book, number(&caps["end_chapter"])?, end_verse);
            return Ok(ReferenceRange::new(start, Some(end)));
        }
    }

    if let Some(caps) = CHAPTER_WITH_VERSES.captures(query) {
        let book = books::resolve(&caps["book"])?;
        let chapter = number(&caps["chapter"])?;
        let start = VerseCursor::new(book, chapter, number(&caps["start_verse"])?);
        let end = VerseCursor::new(book, chapter, number(&caps["end_verse"])?);
        return Ok(ReferenceRange::new(start, Some(end)));
    }

    if let Some(caps) = CHAPTER_WITH_VERSE.captures(query) {
        let book = books::resolve(&caps["book"])?;
        let start = VerseCursor::new(book, number(&caps["chapter"])?, number(&caps["verse"])?);
        return Ok(ReferenceRange::new(start, None));
    }

    let (token, chapter) = split_chapter(query)?;
    let book = books::resolve(&token)?;
    Ok(ReferenceRange::new(VerseCursor::chapter(book, chapter), None))
}

/// Split a chapter-only query into book token and chapter number.
fn split_chapter(query: &str) -> Result<(String, u32), ReferenceError> {
    let query = if query.ends_with(|c: char| c.is_ascii_digit()) {
        query.to_string()
    } else {
        // no chapter given: the first one
        format!("{query}1")
    };
    match CHAPTER_ONLY.captures(&query) {
        Some(caps) => Ok((caps["book"].to_string(), number(&caps["chapter"])?)),
        None => Ok(("1".to_string(), 1)),
    }
}

fn number(digits: &str) -> Result<u32, ReferenceError> {
    digits
        .parse()
        .map_err(|_| ReferenceError::Number(digits.to_string()))
}

fn optional_number(caps: &Captures, name: &str) -> Result<u32, ReferenceError> {
    caps.name(name).map_or(Ok(0), |m| number(m.as_str()))
}
