use crate::reflow::{BreakStyle, reflow};

pub(crate) const SEPARATOR: &str = "---\n";
const SECTION_PREFIX: &str = "##";

/// The markdown output as a list of lines, built front to back.
///
/// Apart from appending, only the last two lines are ever edited: a verse
/// line may continue the line before it, and a chapter marker may be folded
/// into the closing separator or section header.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Document {
    lines: Vec<String>,
}

impl Document {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn lines(&self) -> &[String] {
        &self.lines
    }

    fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    pub(crate) fn push_title(&mut self, title: &str) {
        self.lines.push(format!("# {title}\n"));
    }

    pub(crate) fn push_separator(&mut self) {
        self.lines.push(SEPARATOR.to_string());
    }

    /// A separator followed by `## {title}`.
    pub(crate) fn push_section_header(&mut self, title: &str) {
        self.push_separator();
        self.lines.push(format!("{SECTION_PREFIX} {title}"));
    }

    /// A blank line, unless it would follow a header, a separator or another
    /// blank line.
    pub(crate) fn push_blank(&mut self) {
        if self.accepts_blank() {
            self.lines.push(String::new());
        }
    }

    fn accepts_blank(&self) -> bool {
        self.last().is_some_and(|last| {
            !last.is_empty() && !last.starts_with('#') && !last.starts_with(SEPARATOR)
        })
    }

    fn last_is_section_header(&self) -> bool {
        self.last()
            .is_some_and(|last| last.starts_with(SECTION_PREFIX))
    }

    /// Opens a paragraph: a blank spacer under a section header, otherwise a
    /// separator.
    pub(crate) fn start_paragraph(&mut self) {
        if self.last_is_section_header() {
            self.lines.push(String::new());
        } else {
            self.push_separator();
        }
    }

    /// Any other finished line, such as a footnote entry.
    pub(crate) fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub(crate) fn extend(&mut self, lines: impl IntoIterator<Item = String>) {
        self.lines.extend(lines);
    }

    /// Append a verse line without markers to the line before it.
    ///
    /// Under a section header the text starts its own entry after a spacer.
    pub(crate) fn continue_last(&mut self, line: &str, style: BreakStyle) {
        if let Some(last) = self.lines.last_mut() {
            let kept = last.trim_end_matches('\n').len();
            last.truncate(kept);
        }

        if self.last_is_section_header() || self.lines.is_empty() {
            self.lines.push("\n".to_string());
            self.lines.push(reflow(line.trim(), None, style));
            return;
        }

        let Some(last) = self.lines.last_mut() else {
            return;
        };
        match style {
            BreakStyle::Strict => {
                last.push_str(style.marker());
                last.push_str(&reflow(line.trim(), None, style));
            }
            BreakStyle::Plain => {
                last.push('\n');
                last.push_str(&reflow(line, None, style));
            }
        }
    }

    /// Label the start of `chapter` on the line that opens it.
    ///
    /// Either the section header sitting above a trailing blank line gets a
    /// `*N*` line in front, or a trailing separator gets one after it.
    /// Returns false when neither shape is present.
    pub(crate) fn mark_chapter(&mut self, chapter: u32) -> bool {
        match self.lines.as_mut_slice() {
            [.., header, last] if last.is_empty() && header.starts_with(SECTION_PREFIX) => {
                *header = format!("*{chapter}*\n{header}");
            }
            [.., last] if *last == SEPARATOR => {
                last.push_str(&format!("\n*{chapter}*"));
            }
            _ => return false,
        }
        log::debug!("marked start of chapter {chapter}");
        true
    }

    pub(crate) fn render(&self) -> String {
        self.lines.join("\n").trim().to_string()
    }
}
