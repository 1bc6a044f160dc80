//! HoloScript - parsing and validation engine for the HoloScript
//! scene-description language
//!
//! This library provides functionality to:
//! - Detect which HoloScript dialect a source text is written in
//! - Parse the composition and object-literal dialects into an AST
//! - Validate source against the trait and geometry vocabulary, with
//!   typo-correction suggestions and structured fixes
//! - Look up and suggest traits from the static registry
//!
//! All malformed-input conditions are reported as diagnostics inside
//! result values; the engine never raises for bad data.

pub mod advisor;
pub mod ast;
pub mod cli;
pub mod detect;
pub mod diagnostics;
pub mod parser;
pub mod scanner;
pub mod validator;
pub mod vocabulary;
