//! Error types.

use tabledom::Tag;
use thiserror::Error;

/// Errors building a [`ParserRegistry`](crate::parsers::ParserRegistry).
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The terminal parser does not match every input.
    #[error("parser '{0}' is not a catch-all and cannot terminate the registry")]
    NotCatchAll(String),

    /// A catch-all parser was registered ahead of other parsers.
    #[error("catch-all parser '{0}' would shadow every parser after it")]
    ShadowingCatchAll(String),

    /// Two parsers share an id.
    #[error("parser id '{0}' registered twice")]
    DuplicateId(String),

    /// A built-in pattern failed to compile.
    #[error("invalid parser pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Reasons a widget refuses to decorate an element.
///
/// A refused decoration leaves the element tree untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecorateError {
    #[error("element '{0}' not found")]
    NotFound(String),

    #[error("element '{id}' is a <{tag}>, not a <table>")]
    NotATable { id: String, tag: Tag },

    #[error("table '{0}' has no header row")]
    MissingHeaderRow(String),

    #[error("table '{0}' has no body")]
    MissingBody(String),

    #[error("column {column} is bound to unknown parser '{parser}'")]
    UnknownParser { column: usize, parser: String },

    #[error("pagination host '{0}' not found")]
    HostNotFound(String),
}
