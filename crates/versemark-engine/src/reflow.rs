//! Clause-level line breaking for a single verse.
//!
//! The text is broken after sentence ends and before quotations and
//! subordinate clauses, so that a verse reads one clause per line.

use regex::Regex;
use std::sync::LazyLock;

/// How a clause break is written into the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BreakStyle {
    /// Newline plus a four space indent, read as a continuation line.
    #[default]
    Plain,
    /// An HTML line break plus an em space, for renderers that collapse
    /// whitespace.
    Strict,
}

impl BreakStyle {
    pub fn marker(self) -> &'static str {
        match self {
            BreakStyle::Plain => "\n    ",
            BreakStyle::Strict => "<br>\u{2003}",
        }
    }
}

/// Decides on a match from the text before and after it.
type Guard = fn(before: &str, after: &str) -> bool;

/// One substitution pass. Matches are replaced by `before`, the break marker
/// and `after`, with `$n` group references expanded.
struct Rule {
    pattern: Regex,
    before: String,
    after: String,
    guard: Option<Guard>,
}

impl Rule {
    fn new(pattern: &str, before: &str, after: &str) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            before: before.to_string(),
            after: after.to_string(),
            guard: None,
        }
    }

    fn guarded(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    fn apply(&self, text: &str, marker: &str) -> String {
        let template = format!("{}{marker}{}", self.before, self.after);
        let mut out = String::with_capacity(text.len() + marker.len());
        let mut copied = 0;
        for caps in self.pattern.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            if self
                .guard
                .is_some_and(|guard| !guard(&text[..whole.start()], &text[whole.end()..]))
            {
                continue;
            }
            out.push_str(&text[copied..whole.start()]);
            caps.expand(&template, &mut out);
            copied = whole.end();
        }
        out.push_str(&text[copied..]);
        out
    }
}

/// Words that open a subordinate clause after a comma or semicolon.
const LINK_WORDS: &[&str] = &[
    "so",
    "but",
    "because",
    "not because",
    "therefore",
    "for",
    "in order that",
    "unless",
    "not only",
    "which",
    "where",
    "when",
    "who",
    "whose",
    "whom",
    "of whom",
    "of which",
    "even though",
    "since",
];

/// Openers whose leading clause ends at the first comma.
const TIME_CLAUSES: &[&str] = &["When", "But when", "So when"];

const CLOSING_MARKS: &[&str] = &["!", ";", "\"", "?", ":"];

/// `as many as`, `as well as`, ...
static COMPARISON: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\w+ as").unwrap());

/// Final item of a list: `, and bread.` or `, and daily bread;`
static LIST_TAIL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\w+ )?\w+[.;]").unwrap());

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    let mut rules = vec![
        // opening double quote inside a sentence
        Rule::new(r#" ""#, "", "\"").guarded(|before, _| {
            before.chars().next_back().is_some_and(|c| !c.is_whitespace())
        }),
        // opening single quote, leaving existing indentation alone
        Rule::new(" '", "", "'")
            .guarded(|before, _| !before.chars().next_back().is_some_and(char::is_whitespace)),
        // full stop, with an optional closing quote and footnote reference
        Rule::new(r#"\.('|")?(\([0-9]+\))? +"#, ".${1}${2}", ""),
    ];

    for mark in CLOSING_MARKS {
        rules.push(Rule::new(&format!("{} ", regex::escape(mark)), mark, ""));
    }

    // closing single quote, but not a plural possessive
    rules.push(Rule::new("' ", "'", "").guarded(|before, _| !before.ends_with('s')));

    for word in LINK_WORDS {
        rules.push(Rule::new(
            &format!(r"(,|;)(\([0-9]+\))? {} ", regex::escape(word)),
            "${1}${2}",
            &format!("{word} "),
        ));
    }

    for opener in TIME_CLAUSES {
        rules.push(Rule::new(
            &format!(r"({}( \w+)+,) ", regex::escape(opener)),
            "${1}",
            "",
        ));
    }

    rules.push(
        Rule::new(r"(,|;)(\([0-9]+\))? as ", "${1}${2}", "as ")
            .guarded(|_, after| !COMPARISON.is_match(after)),
    );
    rules.push(
        Rule::new(r"(,|;)(\([0-9]+\))? and ", "${1}${2}", "and ")
            .guarded(|_, after| !LIST_TAIL.is_match(after)),
    );

    rules
});

/// Break one verse into clause lines, optionally prefixed with `"{n}. "`.
///
/// Running the result (without prefix) through `reflow` again leaves it
/// unchanged.
pub fn reflow(text: &str, verse: Option<u32>, style: BreakStyle) -> String {
    let marker = style.marker();
    let text = RULES
        .iter()
        .fold(text.to_string(), |text, rule| rule.apply(&text, marker));
    match verse {
        Some(number) if number > 0 => format!("{number}. {text}"),
        _ => text,
    }
}
