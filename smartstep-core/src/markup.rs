//! Candidate marking.
//!
//! Recognized spans are wrapped in a pair of delimiter characters, one pair
//! per kind of match. The delimiters are private-use code points so they
//! cannot collide with anything a recipe author types; text that contains
//! them anyway is rejected before marking.
//!
//! Marking runs in a fixed order (entities, then measurements, then
//! temperatures) and each pass only rewrites text outside earlier tags.

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkKind {
    Entity,
    Measurement,
    Temperature,
}

impl MarkKind {
    pub const ALL: [MarkKind; 3] = [
        MarkKind::Entity,
        MarkKind::Measurement,
        MarkKind::Temperature,
    ];

    pub fn open(self) -> char {
        match self {
            MarkKind::Entity => '\u{E000}',
            MarkKind::Measurement => '\u{E002}',
            MarkKind::Temperature => '\u{E004}',
        }
    }

    pub fn close(self) -> char {
        match self {
            MarkKind::Entity => '\u{E001}',
            MarkKind::Measurement => '\u{E003}',
            MarkKind::Temperature => '\u{E005}',
        }
    }

    pub fn from_open(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.open() == c)
    }

    pub fn from_close(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.close() == c)
    }
}

pub fn is_reserved(c: char) -> bool {
    MarkKind::from_open(c).is_some() || MarkKind::from_close(c).is_some()
}

pub fn contains_reserved(text: &str) -> bool {
    text.chars().any(is_reserved)
}

/// Wrap every match of `pattern` that lies outside an existing tag.
pub fn mark(text: &str, pattern: &Regex, kind: MarkKind) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut rest = text;

    while let Some(start) = rest.find(|c: char| MarkKind::from_open(c).is_some()) {
        wrap_matches(&rest[..start], pattern, kind, &mut out);

        let tagged = &rest[start..];
        let end = tagged
            .chars()
            .next()
            .and_then(MarkKind::from_open)
            .and_then(|open| {
                let close = open.close();
                tagged.find(close).map(|idx| idx + close.len_utf8())
            })
            .unwrap_or(tagged.len());
        out.push_str(&tagged[..end]);
        rest = &tagged[end..];
    }

    wrap_matches(rest, pattern, kind, &mut out);
    out
}

fn wrap_matches(plain: &str, pattern: &Regex, kind: MarkKind, out: &mut String) {
    let mut last = 0;
    for m in pattern.find_iter(plain) {
        if m.as_str().is_empty() {
            continue;
        }
        out.push_str(&plain[last..m.start()]);
        out.push(kind.open());
        out.push_str(m.as_str());
        out.push(kind.close());
        last = m.end();
    }
    out.push_str(&plain[last..]);
}
