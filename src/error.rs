// Thu Aug 27 2026 - Alex

use std::convert::Infallible;
use thiserror::Error;

/// Errors raised by descriptor lookup, construction and member access.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProxyError {
    #[error("Member name must not be empty")]
    EmptyMemberName,
    #[error("Library not found: {0}")]
    LibraryNotFound(String),
    #[error("Type not found: {class} in library {library}")]
    TypeNotFound { library: String, class: String },
    #[error("Member does not exist: {member} on {type_name}")]
    MemberNotFound { type_name: String, member: String },
    #[error("Property is not readable: {property} on {type_name}")]
    NotReadable { type_name: String, property: String },
    #[error("Property is not writable: {property} on {type_name}")]
    NotWritable { type_name: String, property: String },
    #[error("No constructor on {type_name} accepts {arity} argument(s)")]
    NoMatchingConstructor { type_name: String, arity: usize },
    #[error("Ambiguous constructor call on {type_name}: {candidates} candidates accept {arity} argument(s)")]
    AmbiguousConstructor {
        type_name: String,
        arity: usize,
        candidates: usize,
    },
    #[error("Type mismatch: expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },
}

impl ProxyError {
    pub fn mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        ProxyError::TypeMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

impl From<Infallible> for ProxyError {
    fn from(e: Infallible) -> Self {
        match e {}
    }
}
