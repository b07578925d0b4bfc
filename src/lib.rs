//! Pronunciation alignment and scoring for Arabic reading practice:
//! normalization, tokenization, phonetic-weighted similarity, word
//! alignment, error classification and highlight spans.

pub mod api;
pub mod config;
pub mod error;
pub mod normalize;
pub mod report;
pub mod scorer;
pub mod token;
