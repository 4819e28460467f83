// Text Processing Service
// Sentence splitting and word counting shared by the detector and humanizer

use regex::Regex;
use std::sync::OnceLock;

/// Normalize punctuation and whitespace before analysis
pub fn normalize_punctuation(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut s = text.to_string();

    // Replace smart quotes
    s = s.replace('\u{201c}', "\"")  // "
         .replace('\u{201d}', "\"")  // "
         .replace('\u{2018}', "'")   // '
         .replace('\u{2019}', "'");  // '

    // Replace em dash
    s = s.replace('\u{2014}', "-");

    // Replace non-breaking space
    s = s.replace('\u{00a0}', " ");

    // Normalize line endings
    s = s.replace("\r\n", "\n").replace('\r', "\n");

    // Collapse horizontal whitespace
    let ws_re = ws_run_re();
    s = ws_re.replace_all(&s, " ").to_string();

    // Strip each line
    s = s.lines()
         .map(|ln| ln.trim())
         .collect::<Vec<_>>()
         .join("\n");

    s.trim().to_string()
}

fn ws_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[ \t\x0C\x0B]+").expect("whitespace regex"))
}

fn terminator_run_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]+").expect("terminator regex"))
}

fn spaced_terminator_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([.!?])\s+").expect("spaced terminator regex"))
}

/// Split text on runs of sentence terminators, dropping the punctuation.
/// Used by the detector, which only cares about sentence bodies.
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return vec![];
    }

    terminator_run_re()
        .split(text)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Split text into sentences keeping their terminators, breaking only on
/// whitespace that follows a terminator. Rust regex has no lookbehind, so a
/// sentinel byte stands in for the split point.
pub fn split_sentences_spaced(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return vec![];
    }

    let marked = spaced_terminator_re().replace_all(text, "$1\x00");
    marked
        .split('\x00')
        .filter(|p| !p.trim().is_empty())
        .map(|s| s.trim().to_string())
        .collect()
}

/// Whitespace-delimited word count
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
