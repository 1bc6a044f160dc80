//! Structured diagnostics shared by the parsers and the validator
//!
//! Every data-validity failure in the engine is represented as a
//! `Diagnostic` inside a result value; nothing is raised across the
//! engine boundary for malformed input. Errors make a result invalid,
//! warnings never do.

use crate::ast::Ast;
use crate::detect::Format;
use serde::{Deserialize, Serialize};

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
        }
    }
}

/// Stable diagnostic codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Code {
    /// E001: empty or whitespace-only input
    #[serde(rename = "E001")]
    EmptySource,
    /// E002: open/close brace counts differ
    #[serde(rename = "E002")]
    UnbalancedBraces,
    /// E003: trait not in the registry (validator severity)
    #[serde(rename = "E003")]
    UnknownTrait,
    /// E004: geometry value not a known primitive or model path
    #[serde(rename = "E004")]
    UnknownGeometry,
    /// E005: fixed known-typo substring
    #[serde(rename = "E005")]
    KnownTypo,
    /// W001: object declared with no traits
    #[serde(rename = "W001")]
    UntraitedObject,
    /// W002: trait not in the registry (lenient parser severity)
    #[serde(rename = "W002")]
    UnrecognizedTrait,
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Code::EmptySource => write!(f, "E001"),
            Code::UnbalancedBraces => write!(f, "E002"),
            Code::UnknownTrait => write!(f, "E003"),
            Code::UnknownGeometry => write!(f, "E004"),
            Code::KnownTypo => write!(f, "E005"),
            Code::UntraitedObject => write!(f, "W001"),
            Code::UnrecognizedTrait => write!(f, "W002"),
        }
    }
}

/// Kind of structured fix. Only replacement edits exist today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixKind {
    Replace,
}

/// A machine-applicable edit attached to a diagnostic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fix {
    pub kind: FixKind,
    pub old_text: String,
    pub new_text: String,
}

impl Fix {
    pub fn replace(old_text: impl Into<String>, new_text: impl Into<String>) -> Self {
        Self { kind: FixKind::Replace, old_text: old_text.into(), new_text: new_text.into() }
    }
}

/// A structured error or warning with location and optional fix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: Code,
    /// 1-based line number; 1 when the issue has no better location.
    pub line: usize,
    /// 1-based character column of the offending token; 0 when unknown.
    #[serde(default)]
    pub column: usize,
    pub message: String,
    /// The trimmed source line the issue was found on.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub context: Option<String>,
    /// Human-readable fix advice.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub suggestion: Option<String>,
    /// Machine-applicable fix.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub fix: Option<Fix>,
}

impl Diagnostic {
    /// Create a new error.
    pub fn error(code: Code, line: usize, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            line,
            column: 0,
            message: message.into(),
            context: None,
            suggestion: None,
            fix: None,
        }
    }

    /// Create a new warning.
    pub fn warning(code: Code, line: usize, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            line,
            column: 0,
            message: message.into(),
            context: None,
            suggestion: None,
            fix: None,
        }
    }

    pub fn at_column(mut self, column: usize) -> Self {
        self.column = column;
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }
}

/// Result of parsing a source text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResult {
    /// True iff `errors` is empty.
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ast: Option<Ast>,
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
    pub detected_format: Format,
    /// Object names in order of first appearance, duplicates preserved.
    pub object_names: Vec<String>,
    /// Trait names without the sigil, deduplicated.
    pub trait_names: Vec<String>,
}

impl ParseResult {
    /// Seal the invariant `success == errors.is_empty()`.
    pub fn finish(mut self) -> Self {
        self.success = self.errors.is_empty();
        self
    }
}

/// Result of validating a source text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True iff `errors` is empty.
    pub valid: bool,
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
    pub summary: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_display_is_stable() {
        assert_eq!(Code::EmptySource.to_string(), "E001");
        assert_eq!(Code::UnbalancedBraces.to_string(), "E002");
        assert_eq!(Code::UnknownTrait.to_string(), "E003");
        assert_eq!(Code::UnknownGeometry.to_string(), "E004");
        assert_eq!(Code::KnownTypo.to_string(), "E005");
        assert_eq!(Code::UntraitedObject.to_string(), "W001");
        assert_eq!(Code::UnrecognizedTrait.to_string(), "W002");
    }

    #[test]
    fn test_diagnostic_builder() {
        let diag = Diagnostic::error(Code::UnknownTrait, 3, "Unknown trait: @flyable")
            .at_column(7)
            .with_context("orb x @flyable {")
            .with_suggestion("Did you mean @throwable?")
            .with_fix(Fix::replace("@flyable", "@throwable"));
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.line, 3);
        assert_eq!(diag.column, 7);
        assert_eq!(diag.fix.as_ref().unwrap().new_text, "@throwable");
    }

    #[test]
    fn test_diagnostic_json_shape() {
        let diag = Diagnostic::warning(Code::UntraitedObject, 2, "Object has no VR traits");
        let json = serde_json::to_string(&diag).unwrap();
        assert!(json.contains(r#""code":"W001""#));
        assert!(json.contains(r#""severity":"warning""#));
        // absent optionals stay out of the payload
        assert!(!json.contains("suggestion"));
        let parsed: Diagnostic = serde_json::from_str(&json).unwrap();
        assert_eq!(diag, parsed);
    }
}
