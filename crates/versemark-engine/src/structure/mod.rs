//! Turns the plain-text layout of a fetched passage into markdown.
//!
//! The raw text has the passage title on its first line, section headings on
//! unindented lines, verse text on indented lines carrying inline `[n]`
//! markers, and an optional `Footnotes` block at the end.

mod document;

use crate::reference::ReferenceRange;
use crate::reflow::{BreakStyle, reflow};
use document::{Document, SEPARATOR};
use regex::Regex;
use std::sync::LazyLock;

static FOOTNOTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\(([0-9]+)\)").unwrap());
static VERSE_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([0-9]+)\] *").unwrap());
static PARAGRAPH_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^  \S").unwrap());

const FOOTNOTES_HEADING: &str = "Footnotes";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    #[error("verse markers on line {line} leave no open verse")]
    MarkerWithoutVerse { line: usize },
    #[error("verse number {0} is too large")]
    VerseNumber(String),
}

/// Render a raw passage as markdown.
///
/// With a `range` spanning several chapters, the first line of each new
/// chapter is labelled `*N*`.
pub fn structure(
    raw: &str,
    range: Option<&ReferenceRange>,
    style: BreakStyle,
) -> Result<String, StructureError> {
    let text = straighten_quotes(raw);
    let mut chapters = range.and_then(ChapterMarks::for_range);
    let mut doc = Document::new();
    let mut in_footnotes = false;

    for (index, line) in text.split('\n').enumerate() {
        if index == 0 {
            doc.push_title(line);
        } else if line == FOOTNOTES_HEADING {
            doc.push_section_header(FOOTNOTES_HEADING);
            in_footnotes = true;
        } else if line.trim().is_empty() {
            doc.push_blank();
        } else if line.starts_with(' ') {
            verse_line(&mut doc, line, index, chapters.as_mut(), style)?;
        } else if FOOTNOTE.is_match(line) {
            doc.push_line(FOOTNOTE.replace(line, "- (${1})"));
        } else if in_footnotes {
            // wrapped footnote text
            doc.push_line(line);
        } else {
            doc.push_section_header(line);
        }
    }

    Ok(doc.render())
}

fn straighten_quotes(text: &str) -> String {
    text.replace(['\u{201c}', '\u{201d}'], "\"")
        .replace(['\u{2018}', '\u{2019}'], "'")
}

/// Which chapter to label next in a multi-chapter passage.
#[derive(Debug, Clone, Copy)]
struct ChapterMarks {
    next: u32,
    last: u32,
}

impl ChapterMarks {
    fn for_range(range: &ReferenceRange) -> Option<Self> {
        let end = range.end?;
        if !range.spans_chapters() {
            return None;
        }
        let start = range.start;
        // a passage starting mid-chapter first announces the following one
        let next = if start.verse <= 1 {
            start.chapter
        } else {
            (start.chapter + 1).min(start.book.chapter_count())
        };
        Some(Self {
            next,
            last: end.chapter,
        })
    }

    /// Called as verse 1 is emitted. `pending` holds entries of the current
    /// line not yet added to `doc`.
    fn announce(&mut self, doc: &mut Document, pending: &mut Vec<String>) {
        if self.next > self.last {
            return;
        }
        if doc.mark_chapter(self.next) {
            self.next += 1;
        }
        if !pending.is_empty() {
            pending.push(SEPARATOR.to_string());
        }
    }
}

/// Lay out one indented line: split it at its `[n]` markers into numbered
/// verse entries, or continue the previous entry when it has none.
fn verse_line(
    doc: &mut Document,
    line: &str,
    index: usize,
    mut chapters: Option<&mut ChapterMarks>,
    style: BreakStyle,
) -> Result<(), StructureError> {
    if PARAGRAPH_START.is_match(line) {
        doc.start_paragraph();
    }

    let mut pending = Vec::new();
    let mut verse = 0;
    let mut start = 0;

    for (position, caps) in VERSE_MARKER.captures_iter(line).enumerate() {
        let Some(marker) = caps.get(0) else {
            continue;
        };
        let number = verse_number(&caps[1])?;
        let segment = drop_last_char(&line[start..marker.start()]);

        if verse == 0 {
            if !segment.trim().is_empty() {
                pending.push(format!("{}\n", reflow(&strip_markers(segment), None, style)));
            }
        } else {
            push_verse(doc, &mut pending, segment, verse, chapters.as_deref_mut(), style);
        }

        if position > 0 {
            while verse + 1 < number {
                verse += 1;
                pending.push(String::new());
                pending.push(format!("{verse}. \u{2003}\n"));
            }
        }
        verse = number;
        start = marker.start();
    }

    if verse > 0 {
        push_verse(doc, &mut pending, &line[start..], verse, chapters, style);
    } else if start != 0 {
        return Err(StructureError::MarkerWithoutVerse { line: index });
    } else {
        doc.continue_last(line, style);
    }

    doc.extend(pending);
    Ok(())
}

fn push_verse(
    doc: &mut Document,
    pending: &mut Vec<String>,
    segment: &str,
    verse: u32,
    chapters: Option<&mut ChapterMarks>,
    style: BreakStyle,
) {
    if let (1, Some(chapters)) = (verse, chapters) {
        chapters.announce(doc, pending);
    }
    pending.push(String::new());
    pending.push(format!(
        "{}\n",
        reflow(&strip_markers(segment), Some(verse), style)
    ));
}

fn verse_number(digits: &str) -> Result<u32, StructureError> {
    digits
        .parse()
        .map_err(|_| StructureError::VerseNumber(digits.to_string()))
}

fn strip_markers(segment: &str) -> String {
    VERSE_MARKER.replace_all(segment, "").into_owned()
}

/// The character before a marker is its separating space.
fn drop_last_char(segment: &str) -> &str {
    segment
        .char_indices()
        .next_back()
        .map_or(segment, |(index, _)| &segment[..index])
}
