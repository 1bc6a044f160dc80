//! Dialect parsers for HoloScript source text
//!
//! Both parsers are lenient by default: extraction never aborts on
//! malformed input, structural problems become diagnostics, and the AST is
//! populated from whatever did match. The worst case is an AST with empty
//! collections, never a fault.

use crate::ast::{
    Ast, Composition, Environment, Logic, ObjectDecl, ObjectKind, Program, SceneObject, Template,
};
use crate::detect::{detect, Format};
use crate::diagnostics::{Code, Diagnostic, ParseResult};
use crate::scanner;
use crate::vocabulary;

/// Parser behavior knobs.
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// When true (the default), structural errors are recorded and
    /// extraction continues. When false, the first structural error stops
    /// extraction and the result carries no AST.
    pub best_effort: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { best_effort: true }
    }
}

/// Parse a source text, detecting the dialect from content unless `hint`
/// overrides it.
pub fn parse(source: &str, hint: Option<Format>) -> ParseResult {
    parse_with_options(source, hint, ParseOptions::default())
}

/// Parse with explicit options.
pub fn parse_with_options(source: &str, hint: Option<Format>, options: ParseOptions) -> ParseResult {
    match detect(source, hint) {
        Format::Composition => parse_composition_with_options(source, options),
        _ => parse_object_literal_with_options(source, options),
    }
}

/// Parse the composition dialect into a scene-tree AST.
pub fn parse_composition(source: &str) -> ParseResult {
    parse_composition_with_options(source, ParseOptions::default())
}

fn parse_composition_with_options(source: &str, options: ParseOptions) -> ParseResult {
    let mut errors = Vec::new();

    let balance = scanner::brace_balance(source);
    if !balance.is_balanced() {
        errors.push(Diagnostic::error(
            Code::UnbalancedBraces,
            1,
            format!("Unbalanced braces: {} open, {} close", balance.open, balance.close),
        ));
        if !options.best_effort {
            return ParseResult {
                success: false,
                ast: None,
                errors,
                warnings: Vec::new(),
                detected_format: Format::Composition,
                object_names: Vec::new(),
                trait_names: Vec::new(),
            }
            .finish();
        }
    }

    let name = scanner::composition_name(source).unwrap_or("Unnamed").to_string();
    let object_names: Vec<String> =
        scanner::object_names(source).into_iter().map(str::to_string).collect();
    let trait_names: Vec<String> =
        scanner::trait_names(source).into_iter().map(str::to_string).collect();

    let environment = scanner::environment_block(source)
        .map(|block| Environment {
            skybox: scanner::skybox_value(block.body).map(str::to_string),
            ambient_light: scanner::ambient_light_value(block.body),
        })
        .unwrap_or_default();

    let templates = scanner::template_blocks(source)
        .into_iter()
        .map(|(name, block)| Template { name: name.to_string(), body: block.body.to_string() })
        .collect();

    let logic = scanner::logic_block(source).map(|block| Logic { body: block.body.to_string() });

    let ast = Ast::Composition(Composition {
        name,
        environment,
        templates,
        objects: object_names.iter().map(|name| SceneObject { name: name.clone() }).collect(),
        logic,
    });

    ParseResult {
        success: false,
        ast: Some(ast),
        errors,
        warnings: Vec::new(),
        detected_format: Format::Composition,
        object_names,
        trait_names,
    }
    .finish()
}

/// Parse the object-literal dialect into a flat object/trait listing.
///
/// Unknown traits are a *warning* here; the validator reports the same
/// condition as an error. The two severity policies are intentional and
/// serve different callers.
pub fn parse_object_literal(source: &str) -> ParseResult {
    parse_object_literal_with_options(source, ParseOptions::default())
}

fn parse_object_literal_with_options(source: &str, options: ParseOptions) -> ParseResult {
    let detected_format = if source.contains('@') {
        Format::ObjectLiteralTraits
    } else {
        Format::ObjectLiteral
    };

    let mut errors = Vec::new();

    let balance = scanner::brace_balance(source);
    if !balance.is_balanced() {
        errors.push(Diagnostic::error(
            Code::UnbalancedBraces,
            1,
            format!("Unbalanced braces: {} open, {} close", balance.open, balance.close),
        ));
        if !options.best_effort {
            return ParseResult {
                success: false,
                ast: None,
                errors,
                warnings: Vec::new(),
                detected_format,
                object_names: Vec::new(),
                trait_names: Vec::new(),
            }
            .finish();
        }
    }

    let decls = scanner::object_decls(source);
    let object_names: Vec<String> = decls.iter().map(|(_, name)| name.to_string()).collect();
    let objects: Vec<ObjectDecl> = decls
        .iter()
        .filter_map(|(keyword, name)| {
            ObjectKind::from_keyword(keyword).map(|kind| ObjectDecl { kind, name: name.to_string() })
        })
        .collect();

    let trait_names: Vec<String> =
        scanner::trait_names(source).into_iter().map(str::to_string).collect();

    let warnings = unrecognized_trait_warnings(source, &trait_names);

    let ast = Ast::Program(Program { objects, traits: trait_names.clone() });

    ParseResult {
        success: false,
        ast: Some(ast),
        errors,
        warnings,
        detected_format,
        object_names,
        trait_names,
    }
    .finish()
}

/// One warning per trait missing from the registry, reported at the first
/// line containing that exact `@trait` substring.
fn unrecognized_trait_warnings(source: &str, trait_names: &[String]) -> Vec<Diagnostic> {
    let mut warnings = Vec::new();
    for name in trait_names {
        if vocabulary::is_known_trait(name) {
            continue;
        }
        let needle = format!("@{name}");
        for (idx, line) in source.lines().enumerate() {
            if line.contains(&needle) {
                warnings.push(Diagnostic::warning(
                    Code::UnrecognizedTrait,
                    idx + 1,
                    format!("Unknown trait: @{name}"),
                ));
                break;
            }
        }
    }
    warnings
}
