//! Dialect detection from cheap textual signals
//!
//! Detection never fails: unrecognized text degrades to the object-literal
//! dialect and any problems surface later as diagnostics.

use serde::{Deserialize, Serialize};

/// Surface syntax of a HoloScript source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    /// Declarative scene graph: `composition "X" { ... }`
    Composition,
    /// Flat object literals without trait annotations
    ObjectLiteral,
    /// Flat object literals with `@trait` annotations
    ObjectLiteralTraits,
    Unknown,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Composition => write!(f, "composition"),
            Format::ObjectLiteral => write!(f, "object_literal"),
            Format::ObjectLiteralTraits => write!(f, "object_literal_traits"),
            Format::Unknown => write!(f, "unknown"),
        }
    }
}

/// Decide which dialect a source is written in.
///
/// An explicit `hint` always wins; the content is not checked against it.
/// With no hint: text containing `composition` is the composition dialect,
/// text containing `@` is the object-literal dialect with traits, anything
/// else (empty input included) is the plain object-literal dialect.
pub fn detect(source: &str, hint: Option<Format>) -> Format {
    if let Some(format) = hint {
        return format;
    }
    if source.contains("composition") {
        Format::Composition
    } else if source.contains('@') {
        Format::ObjectLiteralTraits
    } else {
        Format::ObjectLiteral
    }
}
