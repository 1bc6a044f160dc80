//! Lexical scanning primitives for HoloScript source text
//!
//! The scanner owns the structural token patterns shared by both dialect
//! parsers and the validator: brace accounting, trait/object extraction,
//! and depth-tracked block extraction. Block bodies are bounded at the
//! matching close brace, with double-quoted strings respected, so nested
//! braces inside environment/template/logic bodies do not cut a block
//! short.

use regex::Regex;
use std::sync::LazyLock;

static COMPOSITION_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"composition\s+"([^"]+)""#).unwrap());

static OBJECT_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"object\s+"([^"]+)""#).unwrap());

static TRAIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@(\w+)").unwrap());

static OBJECT_DECL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(orb|cube|sphere|cylinder|model)\s+(\w+)").unwrap());

static GEOMETRY_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"geometry:\s*"([^"]+)""#).unwrap());

static SKYBOX_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"skybox:\s*"([^"]+)""#).unwrap());

static AMBIENT_LIGHT_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ambient_light:\s*([\d.]+)").unwrap());

static ENVIRONMENT_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"environment\s*\{").unwrap());

static TEMPLATE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"template\s+"([^"]+)"\s*\{"#).unwrap());

static LOGIC_OPEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"logic\s*\{").unwrap());

static UNTRAITED_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(orb|object)\s+\w+\s*\{").unwrap());

/// Open/close brace counts for a source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BraceBalance {
    pub open: usize,
    pub close: usize,
}

impl BraceBalance {
    pub fn is_balanced(&self) -> bool {
        self.open == self.close
    }
}

/// Count `{` and `}` in the source.
pub fn brace_balance(source: &str) -> BraceBalance {
    BraceBalance {
        open: source.matches('{').count(),
        close: source.matches('}').count(),
    }
}

/// A braced block body extracted from source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// Body between the braces, leading/trailing whitespace trimmed.
    pub body: &'a str,
    /// False when the close brace was never found; the body then runs to
    /// the end of the source.
    pub terminated: bool,
}

/// Extract the body of a braced block starting at `open_idx` (the byte
/// offset of the opening `{`). Tracks nesting depth and skips braces
/// inside double-quoted strings.
pub fn braced_body(source: &str, open_idx: usize) -> Block<'_> {
    let rest = &source[open_idx + 1..];
    let mut depth = 1usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (offset, ch) in rest.char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }
        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Block { body: rest[..offset].trim(), terminated: true };
                }
            }
            _ => {}
        }
    }

    Block { body: rest.trim(), terminated: false }
}

/// The composition name from the first `composition "<name>"` occurrence.
pub fn composition_name(source: &str) -> Option<&str> {
    COMPOSITION_NAME.captures(source).map(|c| c.get(1).unwrap().as_str())
}

/// Every `object "<name>"` occurrence, in order of appearance.
pub fn object_names(source: &str) -> Vec<&str> {
    OBJECT_NAME.captures_iter(source).map(|c| c.get(1).unwrap().as_str()).collect()
}

/// Every `@identifier` occurrence, deduplicated, sigil stripped,
/// first-appearance order preserved.
pub fn trait_names(source: &str) -> Vec<&str> {
    let mut seen = std::collections::HashSet::new();
    TRAIT
        .captures_iter(source)
        .map(|c| c.get(1).unwrap().as_str())
        .filter(|name| seen.insert(*name))
        .collect()
}

/// `@identifier` occurrences on a single line, with the byte offset of
/// each match's `@`.
pub fn traits_in_line(line: &str) -> Vec<(usize, &str)> {
    TRAIT
        .captures_iter(line)
        .map(|c| (c.get(0).unwrap().start(), c.get(1).unwrap().as_str()))
        .collect()
}

/// Object-literal declarations: `(orb|cube|sphere|cylinder|model) <name>`.
pub fn object_decls(source: &str) -> Vec<(&str, &str)> {
    OBJECT_DECL
        .captures_iter(source)
        .map(|c| (c.get(1).unwrap().as_str(), c.get(2).unwrap().as_str()))
        .collect()
}

/// The value of a `geometry: "<value>"` assignment on a line.
pub fn geometry_value(line: &str) -> Option<&str> {
    GEOMETRY_VALUE.captures(line).map(|c| c.get(1).unwrap().as_str())
}

/// The `skybox: "<value>"` assignment inside an environment body.
pub fn skybox_value(body: &str) -> Option<&str> {
    SKYBOX_VALUE.captures(body).map(|c| c.get(1).unwrap().as_str())
}

/// The `ambient_light: <float>` assignment inside an environment body.
pub fn ambient_light_value(body: &str) -> Option<f64> {
    AMBIENT_LIGHT_VALUE
        .captures(body)
        .and_then(|c| c.get(1).unwrap().as_str().parse().ok())
}

/// The single `environment { ... }` block, if present.
pub fn environment_block(source: &str) -> Option<Block<'_>> {
    ENVIRONMENT_OPEN
        .find(source)
        .map(|m| braced_body(source, m.end() - 1))
}

/// All `template "<name>" { ... }` blocks, in order of appearance.
pub fn template_blocks(source: &str) -> Vec<(&str, Block<'_>)> {
    TEMPLATE_OPEN
        .captures_iter(source)
        .map(|c| {
            let name = c.get(1).unwrap().as_str();
            let open = c.get(0).unwrap().end() - 1;
            (name, braced_body(source, open))
        })
        .collect()
}

/// The first `logic { ... }` block, if present.
pub fn logic_block(source: &str) -> Option<Block<'_>> {
    LOGIC_OPEN.find(source).map(|m| braced_body(source, m.end() - 1))
}

/// Whether a line opens an object declaration (`orb X {` / `object X {`)
/// with no trait annotation anywhere on the line.
pub fn is_untraited_object_line(line: &str) -> bool {
    UNTRAITED_OBJECT.is_match(line) && !line.contains('@')
}
