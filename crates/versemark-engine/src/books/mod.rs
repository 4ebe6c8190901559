//! The fixed catalog of the 66 books and lookup of a book from free text.

mod resolver;

pub use resolver::{BookNotFound, MatchStrategy, resolve};

use serde::Serialize;
use std::fmt;

/// A canonical book of the Protestant canon.
///
/// Books are plain values copied out of [`BOOKS`]; two books are equal when
/// they are the same catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Book {
    ordinal: u8,
    name: &'static str,
    chapter_count: u32,
}

impl Book {
    const fn new(ordinal: u8, name: &'static str, chapter_count: u32) -> Self {
        Self {
            ordinal,
            name,
            chapter_count,
        }
    }

    /// Position in the canon, 1 (Genesis) to 66 (Revelation).
    pub fn ordinal(&self) -> u8 {
        self.ordinal
    }

    /// Display name, e.g. `"1 Corinthians"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn chapter_count(&self) -> u32 {
        self.chapter_count
    }

    /// Look up a book by its ordinal. Returns `None` outside `1..=66`.
    pub fn from_ordinal(ordinal: u32) -> Option<Book> {
        let index = usize::try_from(ordinal).ok()?.checked_sub(1)?;
        BOOKS.get(index).copied()
    }

    /// The following book, wrapping from Revelation back to Genesis.
    pub fn next(&self) -> Book {
        BOOKS[usize::from(self.ordinal) % BOOKS.len()]
    }

    /// The preceding book, wrapping from Genesis back to Revelation.
    pub fn prev(&self) -> Book {
        let index = usize::from(self.ordinal) - 1;
        BOOKS[(index + BOOKS.len() - 1) % BOOKS.len()]
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// All books in canon order; `BOOKS[n - 1].ordinal() == n`.
pub static BOOKS: [Book; 66] = [
    Book::new(1, "Genesis", 50),
    Book::new(2, "Exodus", 40),
    Book::new(3, "Leviticus", 27),
    Book::new(4, "Numbers", 36),
    Book::new(5, "Deuteronomy", 34),
    Book::new(6, "Joshua", 24),
    Book::new(7, "Judges", 21),
    Book::new(8, "Ruth", 4),
    Book::new(9, "1 Samuel", 31),
    Book::new(10, "2 Samuel", 24),
    Book::new(11, "1 Kings", 22),
    Book::new(12, "2 Kings", 25),
    Book::new(13, "1 Chronicles", 29),
    Book::new(14, "2 Chronicles", 36),
    Book::new(15, "Ezra", 10),
    Book::new(16, "Nehemiah", 13),
    Book::new(17, "Esther", 10),
    Book::new(18, "Job", 42),
    Book::new(19, "Psalms", 150),
    Book::new(20, "Proverbs", 31),
    Book::new(21, "Ecclesiastes", 12),
    Book::new(22, "Song of Solomon", 8),
    Book::new(23, "Isaiah", 66),
    Book::new(24, "Jeremiah", 52),
    Book::new(25, "Lamentations", 5),
    Book::new(26, "Ezekiel", 48),
    Book::new(27, "Daniel", 12),
    Book::new(28, "Hosea", 14),
    Book::new(29, "Joel", 3),
    Book::new(30, "Amos", 9),
    Book::new(31, "Obadiah", 1),
    Book::new(32, "Jonah", 4),
    Book::new(33, "Micah", 7),
    Book::new(34, "Nahum", 3),
    Book::new(35, "Habakkuk", 3),
    Book::new(36, "Zephaniah", 3),
    Book::new(37, "Haggai", 2),
    Book::new(38, "Zechariah", 14),
    Book::new(39, "Malachi", 4),
    Book::new(40, "Matthew", 28),
    Book::new(41, "Mark", 16),
    Book::new(42, "Luke", 24),
    Book::new(43, "John", 21),
    Book::new(44, "Acts", 28),
    Book::new(45, "Romans", 16),
    Book::new(46, "1 Corinthians", 16),
    Book::new(47, "2 Corinthians", 13),
    Book::new(48, "Galatians", 6),
    Book::new(49, "Ephesians", 6),
    Book::new(50, "Philippians", 4),
    Book::new(51, "Colossians", 4),
    Book::new(52, "1 Thessalonians", 5),
    Book::new(53, "2 Thessalonians", 3),
    Book::new(54, "1 Timothy", 6),
    Book::new(55, "2 Timothy", 4),
    Book::new(56, "Titus", 3),
    Book::new(57, "Philemon", 1),
    Book::new(58, "Hebrews", 13),
    Book::new(59, "James", 5),
    Book::new(60, "1 Peter", 5),
    Book::new(61, "2 Peter", 3),
    Book::new(62, "1 John", 5),
    Book::new(63, "2 John", 1),
    Book::new(64, "3 John", 1),
    Book::new(65, "Jude", 1),
    Book::new(66, "Revelation", 22),
];
