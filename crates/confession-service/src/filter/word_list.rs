//! Word-list profanity masking
//!
//! Words are maximal runs of alphanumeric characters. A word whose lowercase
//! form is on the list is replaced by one `*` per character; everything else,
//! including punctuation and whitespace, is copied through untouched.

use std::collections::HashSet;

use confession_core::traits::ContentFilter;

const DEFAULT_WORDS: &[&str] = &[
    "arse", "arsehole", "ass", "asshole", "bastard", "bitch", "bollocks", "bullshit", "cock",
    "crap", "cunt", "damn", "dick", "dickhead", "fuck", "fucked", "fucker", "fucking", "goddamn",
    "motherfucker", "piss", "prick", "pussy", "shit", "shitty", "slut", "twat", "wanker", "whore",
];

#[derive(Debug, Clone)]
pub struct WordListFilter {
    words: HashSet<String>,
}

impl WordListFilter {
    /// Filter with exactly the given words
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().trim().to_lowercase())
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }

    /// Add words on top of the current list
    pub fn with_words<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(Self::new(extra).words);
        self
    }

    pub fn is_profane(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    fn push_word(&self, out: &mut String, word: &str) {
        if self.is_profane(word) {
            out.push_str(&"*".repeat(word.chars().count()));
        } else {
            out.push_str(word);
        }
    }
}

impl Default for WordListFilter {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS)
    }
}

impl ContentFilter for WordListFilter {
    fn clean(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut word_start = None;

        for (idx, ch) in text.char_indices() {
            if ch.is_alphanumeric() {
                word_start.get_or_insert(idx);
            } else {
                if let Some(start) = word_start.take() {
                    self.push_word(&mut out, &text[start..idx]);
                }
                out.push(ch);
            }
        }
        if let Some(start) = word_start {
            self.push_word(&mut out, &text[start..]);
        }

        out
    }
}
