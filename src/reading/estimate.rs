//! Word-count based reading-time estimation over Markdown bodies.
//!
//! Only human-readable text is counted: prose, inline code and fenced code.
//! Raw HTML, link targets and frontmatter are skipped.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

use super::ReadingStatistic;

/// Default reading speed.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Options for markdown parsing
#[derive(Debug, Clone, Default)]
pub struct MarkdownOptions {
    /// Enable tables extension
    pub tables: bool,
    /// Enable footnotes extension
    pub footnotes: bool,
    /// Enable strikethrough extension
    pub strikethrough: bool,
    /// Enable task lists extension
    pub task_lists: bool,
}

impl MarkdownOptions {
    /// Create options with all extensions enabled
    pub fn all() -> Self {
        Self {
            tables: true,
            footnotes: true,
            strikethrough: true,
            task_lists: true,
        }
    }

    fn to_pulldown_options(&self) -> Options {
        // Metadata blocks are always recognised so a stray frontmatter is never counted.
        let mut opts = Options::ENABLE_YAML_STYLE_METADATA_BLOCKS
            | Options::ENABLE_PLUSES_DELIMITED_METADATA_BLOCKS;
        if self.tables {
            opts.insert(Options::ENABLE_TABLES);
        }
        if self.footnotes {
            opts.insert(Options::ENABLE_FOOTNOTES);
        }
        if self.strikethrough {
            opts.insert(Options::ENABLE_STRIKETHROUGH);
        }
        if self.task_lists {
            opts.insert(Options::ENABLE_TASKLISTS);
        }
        opts
    }
}

/// Estimates reading time at a fixed speed.
#[derive(Debug, Clone)]
pub struct Estimator {
    words_per_minute: u32,
    options: MarkdownOptions,
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS_PER_MINUTE)
    }
}

impl Estimator {
    pub fn new(words_per_minute: u32) -> Self {
        Self {
            words_per_minute: words_per_minute.max(1),
            options: MarkdownOptions::all(),
        }
    }

    pub const fn words_per_minute(&self) -> u32 {
        self.words_per_minute
    }

    /// Estimate a Markdown body.
    pub fn estimate(&self, markdown: &str) -> ReadingStatistic {
        ReadingStatistic::from_words(self.count_markdown(markdown), self.words_per_minute)
    }

    fn count_markdown(&self, markdown: &str) -> usize {
        let mut in_metadata = false;
        let mut words = 0;

        for event in Parser::new_ext(markdown, self.options.to_pulldown_options()) {
            match event {
                Event::Start(Tag::MetadataBlock(_)) => in_metadata = true,
                Event::End(TagEnd::MetadataBlock(_)) => in_metadata = false,
                Event::Text(text) | Event::Code(text) if !in_metadata => {
                    words += count_words(&text);
                }
                _ => {}
            }
        }

        words
    }
}

/// Count words in plain text.
///
/// A word is a maximal run of non-boundary characters. CJK characters are
/// counted one word each since those scripts do not separate words.
pub fn count_words(text: &str) -> usize {
    let mut words = 0;
    let mut in_word = false;

    for c in text.chars() {
        if is_cjk(c) {
            words += 1;
            in_word = false;
        } else if is_word_boundary(c) {
            in_word = false;
        } else if !in_word {
            words += 1;
            in_word = true;
        }
    }

    words
}

#[inline]
fn is_word_boundary(c: char) -> bool {
    c.is_whitespace() || c.is_ascii_punctuation() || is_unicode_punctuation(c)
}

/// Punctuation outside ASCII that commonly appears in prose.
#[inline]
fn is_unicode_punctuation(c: char) -> bool {
    matches!(
        c,
        '\u{2010}'..='\u{2027}' // dashes, quotes, ellipsis
            | '\u{2030}'..='\u{205E}'
            | '\u{00A1}' | '\u{00AB}' | '\u{00BB}' | '\u{00BF}'
            | '\u{3000}'..='\u{303F}' // CJK punctuation
            | '\u{FF01}'..='\u{FF0F}' // fullwidth punctuation
            | '\u{FF1A}'..='\u{FF20}'
    )
}

#[inline]
fn is_cjk(c: char) -> bool {
    matches!(
        c,
        '\u{3040}'..='\u{30FF}' // hiragana, katakana
            | '\u{3400}'..='\u{4DBF}'
            | '\u{4E00}'..='\u{9FFF}'
            | '\u{AC00}'..='\u{D7AF}' // hangul
            | '\u{F900}'..='\u{FAFF}'
    )
}
