use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// One step of the word-level alignment. Indices point into the token
/// slices handed to `Scorer::align`.
///
/// `Match` is a diagonal step whose thresholded cell cost was zero,
/// `Substitute` any other diagonal step; classification recomputes the
/// real similarity and treats both identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentOp {
    Match { ref_idx: usize, rec_idx: usize },
    Substitute { ref_idx: usize, rec_idx: usize },
    /// Reference word absent from the transcript.
    Delete { ref_idx: usize },
    /// Extra spoken word; consumed but never reported.
    Insert { rec_idx: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ErrorKind {
    Correct,
    Minor,
    Severe,
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRecord {
    pub word: String,
    #[serde(rename = "type")]
    pub kind: ErrorKind,
    pub matched_word: Option<String>,
    /// Phonetic-confusion label for analytics, never used for scoring.
    pub category: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightSpan {
    pub substring: String,
    /// `None` for punctuation and the text between tokens.
    pub classification: Option<ErrorKind>,
    pub tooltip: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccuracyResult {
    pub overall_accuracy: f32,
    /// One record per reference token, in reference order.
    pub errors: Vec<ErrorRecord>,
    /// Concatenating the substrings reproduces the original text.
    pub highlight_spans: Vec<HighlightSpan>,
}
