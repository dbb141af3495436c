//! Parser for the INI-style format Godot uses for `export_presets.cfg`
//! and `project.godot`.
//!
//! Each line is one of:
//! - `; comment`
//! - `key = value` (surrounding whitespace and double quotes stripped)
//! - `[section]`
//! - an empty line, which closes the active section
//!
//! Anything else is ignored. Parsing never fails.

use derive_more::Display;
use indexmap::IndexMap;
use regex::Regex;
use std::convert::Infallible;
use std::sync::LazyLock;

static LINE_BREAKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\r\n]+").unwrap());

static COMMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*;").unwrap());

static PARAM_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([^=]+?)\s*=\s*(.*?)\s*$").unwrap());

static SECTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\[\s*([^\]]*?)\s*\]\s*$").unwrap());

/// Identifies a section of a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum SectionKey {
    /// Pairs that appear before any header, or after a blank line closed
    /// the previous section.
    #[display("<top-level>")]
    TopLevel,
    #[display("{_0}")]
    Named(String),
}

impl SectionKey {
    /// Section name, or `None` for the top-level section.
    pub fn name(&self) -> Option<&str> {
        match self {
            SectionKey::TopLevel => None,
            SectionKey::Named(name) => Some(name),
        }
    }

    // `[]` addresses the top-level section.
    fn from_header(name: &str) -> Self {
        if name.is_empty() {
            SectionKey::TopLevel
        } else {
            SectionKey::Named(name.to_string())
        }
    }
}

impl From<&str> for SectionKey {
    fn from(name: &str) -> Self {
        SectionKey::Named(name.to_string())
    }
}

/// Key-value pairs of one section, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    entries: IndexMap<String, String>,
}

impl Section {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, key: String, value: String) {
        self.entries.insert(key, value);
    }
}

/// A parsed configuration file: sections in the order they first appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    sections: IndexMap<SectionKey, Section>,
}

/// What a single line contributes to the document.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Comment,
    Pair { key: &'a str, value: &'a str },
    Header(&'a str),
    Blank,
    Unrecognized,
}

/// Which section key-value lines currently land in.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Cursor {
    NoActiveSection,
    ActiveSection(SectionKey),
}

impl Cursor {
    fn target(&self) -> SectionKey {
        match self {
            Cursor::NoActiveSection => SectionKey::TopLevel,
            Cursor::ActiveSection(key) => key.clone(),
        }
    }
}

impl Document {
    /// Parse configuration text.
    ///
    /// Lines are split on any run of `\r`/`\n`, so mixed line endings are
    /// accepted and consecutive line breaks never yield an empty line.
    pub fn parse(text: &str) -> Self {
        Self::from_lines(LINE_BREAKS.split(text))
    }

    /// Build a document from lines that are already split.
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let (doc, _) = lines
            .into_iter()
            .fold((Self::default(), Cursor::NoActiveSection), |(mut doc, cursor), line| {
                let cursor = doc.apply(cursor, classify(line));
                (doc, cursor)
            });
        doc
    }

    fn apply(&mut self, cursor: Cursor, line: Line<'_>) -> Cursor {
        match line {
            Line::Comment | Line::Unrecognized => cursor,
            Line::Pair { key, value } => {
                self.sections
                    .entry(cursor.target())
                    .or_default()
                    .insert(key.to_string(), value.to_string());
                cursor
            }
            Line::Header(name) => {
                let key = SectionKey::from_header(name);
                // A repeated header starts the section over.
                self.sections.insert(key.clone(), Section::default());
                match key {
                    SectionKey::TopLevel => Cursor::NoActiveSection,
                    named => Cursor::ActiveSection(named),
                }
            }
            Line::Blank => Cursor::NoActiveSection,
        }
    }

    pub fn section(&self, key: &SectionKey) -> Option<&Section> {
        self.sections.get(key)
    }

    /// Look up a named section.
    pub fn named(&self, name: &str) -> Option<&Section> {
        self.sections.get(&SectionKey::from(name))
    }

    pub fn top_level(&self) -> Option<&Section> {
        self.sections.get(&SectionKey::TopLevel)
    }

    /// Look up `key` in the named section `section`.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.named(section).and_then(|s| s.get(key))
    }

    pub fn sections(&self) -> impl Iterator<Item = (&SectionKey, &Section)> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl std::str::FromStr for Document {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

fn classify(line: &str) -> Line<'_> {
    if COMMENT_REGEX.is_match(line) {
        return Line::Comment;
    }
    if let Some(caps) = PARAM_REGEX.captures(line) {
        let key = strip_quotes(caps.get(1).map_or("", |m| m.as_str()).trim());
        if !key.is_empty() {
            let value = strip_quotes(caps.get(2).map_or("", |m| m.as_str()));
            return Line::Pair { key, value };
        }
    }
    if let Some(caps) = SECTION_REGEX.captures(line) {
        return Line::Header(caps.get(1).map_or("", |m| m.as_str()));
    }
    if line.is_empty() {
        return Line::Blank;
    }
    Line::Unrecognized
}

fn strip_quotes(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(s)
}
