// Humanyze Core Services

pub mod text_processor;
pub mod detector;
pub mod humanizer;
pub mod config_store;
pub mod remote;

pub use config_store::*;
pub use detector::{score, formality_score, repetitive_pattern_score, sentence_uniformity_score};
pub use humanizer::{
    humanize_fallback,
    humanize_with_rng,
    CONTRACTION_PROBABILITY,
    FILLER_PROBABILITY,
    SUBSTITUTION_PROBABILITY,
};
pub use remote::{resolve_base_url, HumanizerClient, HumanizerError};
pub use text_processor::*;
