use thiserror::Error;

/// Reasons a selection cannot be matched at all.
///
/// Both variants describe bad input; a valid non-empty selection always
/// produces a [`MatchResult`](super::matcher::MatchResult).
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum MatchError {
    #[error("Selection is empty; add at least one element before mixing")]
    EmptySelection,

    #[error("Unknown element symbol '{symbol}'")]
    UnknownElement { symbol: String },
}

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },

    #[error("Question {index} is invalid: {reason}")]
    InvalidQuestion { index: usize, reason: String },

    #[error("Question bank contains no questions")]
    EmptyBank,

    #[error("At least {required} elements are needed to generate questions, found {found}")]
    NotEnoughElements { required: usize, found: usize },
}
