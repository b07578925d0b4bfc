use super::types::{ErrorRecord, HighlightSpan};
use crate::token::Token;

/// Splits the original reference text into render-ready spans, walking
/// the tokens in order and reusing their stored offsets. Word tokens
/// carry their classification and, when a spoken word was aligned, a
/// tooltip naming it. Punctuation and the text between tokens pass
/// through unclassified. Concatenating the substrings reproduces the
/// original text byte for byte.
pub fn build_spans(original: &str, tokens: &[Token], errors: &[ErrorRecord]) -> Vec<HighlightSpan> {
    let mut spans = Vec::new();
    let mut cursor = 0usize;

    for (token, record) in tokens.iter().zip(errors.iter()) {
        if token.start_offset > cursor {
            spans.push(plain(&original[cursor..token.start_offset]));
        }
        if token.is_punctuation {
            spans.push(plain(&token.text));
        } else {
            let tooltip = record
                .matched_word
                .as_ref()
                .map(|m| format!("Recognized as: {}", m));
            spans.push(HighlightSpan {
                substring: token.text.clone(),
                classification: Some(record.kind),
                tooltip,
            });
        }
        cursor = token.end_offset;
    }

    if cursor < original.len() {
        spans.push(plain(&original[cursor..]));
    }
    spans
}

fn plain(substring: &str) -> HighlightSpan {
    HighlightSpan {
        substring: substring.to_string(),
        classification: None,
        tooltip: None,
    }
}
