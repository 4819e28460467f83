// Heuristic Detector
// Surface lexical/statistical AI-likelihood scoring: sentence-length
// uniformity, stock-phrase density, and formality markers. No model, no
// network call.

use crate::models::{ScoreAnalysis, ScoreReport};
use crate::services::text_processor::{count_words, split_sentences};

/// Stock transition phrases over-represented in machine-generated prose.
/// Ordered table; matching is case-insensitive substring occurrence.
const AI_TRANSITION_PHRASES: [&str; 10] = [
    "in conclusion",
    "furthermore",
    "moreover",
    "additionally",
    "it is important to note",
    "in summary",
    "on the other hand",
    "as a result",
    "consequently",
    "in other words",
];

/// Markers of informal register, matched as whole words.
const INFORMAL_MARKERS: [&str; 12] = [
    "gonna", "wanna", "kinda", "sorta", "yeah", "cool", "awesome", "stuff",
    "like", "basically", "actually", "literally",
];

/// Markers of formal register, matched as whole words.
const FORMAL_MARKERS: [&str; 10] = [
    "utilize",
    "facilitate",
    "demonstrate",
    "nevertheless",
    "notwithstanding",
    "subsequently",
    "accordingly",
    "henceforth",
    "whereby",
    "thereby",
];

// Formality baseline and per-100-word marker weights.
const FORMALITY_BASELINE: f64 = 50.0;
const FORMAL_WEIGHT: f64 = 10.0;
const INFORMAL_WEIGHT: f64 = 5.0;
// Long uniform texts read as machine-generated even with neutral vocabulary.
const LONG_UNIFORM_BONUS: f64 = 10.0;
const LONG_TEXT_WORDS: usize = 200;
const UNIFORMITY_BONUS_GATE: i32 = 70;

/// Score a text for AI-likelihood.
///
/// Degenerate input (empty, whitespace-only, or a single sentence) yields the
/// neutral report: there is not enough signal to say anything either way.
pub fn score(text: &str) -> ScoreReport {
    let sentences = split_sentences(text);
    if sentences.len() <= 1 {
        return ScoreReport::neutral();
    }

    let sentence_uniformity = sentence_uniformity_score(&sentences);
    let repetitive_patterns = repetitive_pattern_score(text);
    let formal_language = formality_score(text, sentence_uniformity);

    // Repetition is the strongest single signal, uniformity next.
    let composite = (sentence_uniformity as f64 * 2.0
        + repetitive_patterns as f64 * 3.0
        + formal_language as f64)
        / 6.0;
    let ai_score = composite.round().clamp(0.0, 100.0) as i32;

    ScoreReport {
        ai_score,
        human_score: 100 - ai_score,
        analysis: ScoreAnalysis {
            formal_language,
            repetitive_patterns,
            sentence_uniformity,
        },
    }
}

/// Sentence-length statistics sub-score.
/// AI output tends toward longer sentences of uniform length, so a high mean
/// with low variance pushes the score up.
pub fn sentence_uniformity_score(sentences: &[String]) -> i32 {
    if sentences.len() <= 1 {
        return 50;
    }

    let lengths: Vec<f64> = sentences.iter().map(|s| s.chars().count() as f64).collect();
    let mean = lengths.iter().sum::<f64>() / lengths.len() as f64;
    if mean <= 0.0 {
        return 50;
    }

    let variance = lengths.iter().map(|l| (l - mean).powi(2)).sum::<f64>() / lengths.len() as f64;
    let std_dev = variance.sqrt();

    let normalized_avg = ((mean / 20.0) * 50.0).clamp(0.0, 100.0);
    let uniformity = (100.0 - (std_dev / mean) * 100.0).clamp(0.0, 100.0);

    ((normalized_avg + uniformity) / 2.0).round() as i32
}

/// Stock-phrase density sub-score: occurrences of the transition-phrase table
/// per 100 words, scaled and clamped.
pub fn repetitive_pattern_score(text: &str) -> i32 {
    let word_count = count_words(text);
    if word_count == 0 {
        return 0;
    }

    let haystack = text.to_lowercase();
    let matches: usize = AI_TRANSITION_PHRASES
        .iter()
        .map(|phrase| haystack.matches(phrase).count())
        .sum();

    let density = matches as f64 / (word_count as f64 / 100.0);
    (density * 25.0).round().clamp(0.0, 100.0) as i32
}

/// Formality sub-score: formal markers raise it, informal markers lower it,
/// both per 100 words around a neutral baseline of 50.
pub fn formality_score(text: &str, sentence_uniformity: i32) -> i32 {
    let word_count = count_words(text);
    if word_count == 0 {
        return 50;
    }

    let tokens: Vec<String> = text
        .split_whitespace()
        .map(|w| {
            w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .to_lowercase()
        })
        .filter(|w| !w.is_empty())
        .collect();

    let formal_hits = tokens
        .iter()
        .filter(|t| FORMAL_MARKERS.contains(&t.as_str()))
        .count();
    let informal_hits = tokens
        .iter()
        .filter(|t| INFORMAL_MARKERS.contains(&t.as_str()))
        .count();

    let per_hundred = 100.0 / word_count as f64;
    let formal_density = formal_hits as f64 * per_hundred;
    let informal_density = informal_hits as f64 * per_hundred;

    let mut score =
        FORMALITY_BASELINE + formal_density * FORMAL_WEIGHT - informal_density * INFORMAL_WEIGHT;

    if word_count > LONG_TEXT_WORDS && sentence_uniformity > UNIFORMITY_BONUS_GATE {
        score += LONG_UNIFORM_BONUS;
    }

    score.round().clamp(0.0, 100.0) as i32
}
