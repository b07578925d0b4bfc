use crate::normalize::{fold_letter, is_stripped};
use serde::{Deserialize, Serialize};

/// A word or punctuation unit cut from the original text.
///
/// Offsets are byte positions into the original (non-normalized) string,
/// end-exclusive, so `original[start_offset..end_offset] == text`.
/// Tashkeel attached to a word stays inside its span even though it is
/// absent from the normalized form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub text: String,
    pub normalized: String,
    pub start_offset: usize,
    pub end_offset: usize,
    pub is_punctuation: bool,
}

/// Characters emitted as standalone single-character tokens.
pub const PUNCTUATION: &[char] = &[
    '.', '،', '؛', '؟', '!', ':', '"', '“', '”', '\'', '‘', '’', '(', ')', '[', ']', '{', '}',
];

pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(&c)
}

/// Splits `original` into word and punctuation tokens, normalizing on the
/// fly while tracking byte offsets into the original string. Deterministic
/// and total; zero-length tokens are never produced.
pub fn tokenize(original: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word = String::new();
    let mut start = 0usize;
    let mut end = 0usize;

    for (idx, c) in original.char_indices() {
        let next = idx + c.len_utf8();

        if is_stripped(c) {
            // A mark with no word in progress is dangling and dropped.
            if !word.is_empty() {
                end = next;
            }
            continue;
        }
        if c.is_whitespace() {
            flush_word(&mut tokens, original, &mut word, start, end);
            continue;
        }
        if is_punctuation(c) {
            flush_word(&mut tokens, original, &mut word, start, end);
            tokens.push(Token {
                text: original[idx..next].to_string(),
                normalized: c.to_string(),
                start_offset: idx,
                end_offset: next,
                is_punctuation: true,
            });
            continue;
        }

        if word.is_empty() {
            start = idx;
        }
        word.push(fold_letter(c));
        end = next;
    }
    flush_word(&mut tokens, original, &mut word, start, end);
    tokens
}

fn flush_word(tokens: &mut Vec<Token>, original: &str, word: &mut String, start: usize, end: usize) {
    if word.is_empty() {
        return;
    }
    tokens.push(Token {
        text: original[start..end].to_string(),
        normalized: std::mem::take(word),
        start_offset: start,
        end_offset: end,
        is_punctuation: false,
    });
}
