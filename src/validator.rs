//! Line-oriented validation against the trait and geometry vocabulary
//!
//! The validator is the strict counterpart to the lenient object-literal
//! parser: unknown vocabulary is an error here. It re-scans the source
//! line by line, cross-references every token against the registry, and
//! attaches similarity-based suggestions and structured fixes where it
//! can. Diagnostics never abort the scan; the full set from a single pass
//! is always returned.

use crate::diagnostics::{Code, Diagnostic, Fix, ValidationResult};
use crate::scanner;
use crate::vocabulary;

/// Validation behavior knobs.
#[derive(Debug, Clone, Copy)]
pub struct ValidateOptions {
    /// Deliver warnings in the result. Disabling this never changes error
    /// detection; the summary is computed from the delivered counts.
    pub include_warnings: bool,
    /// Attach "did you mean" suggestions and structured fixes.
    pub include_suggestions: bool,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self { include_warnings: true, include_suggestions: true }
    }
}

/// Validate a source text.
pub fn validate(source: &str, options: &ValidateOptions) -> ValidationResult {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    // Empty input short-circuits; no further checks run.
    if source.trim().is_empty() {
        errors.push(
            Diagnostic::error(Code::EmptySource, 1, "Empty code")
                .with_suggestion("Add HoloScript content"),
        );
        return ValidationResult {
            valid: false,
            errors,
            warnings,
            summary: "Empty code".to_string(),
        };
    }

    let balance = scanner::brace_balance(source);
    if !balance.is_balanced() {
        errors.push(
            Diagnostic::error(
                Code::UnbalancedBraces,
                1,
                format!("Unbalanced braces: {} open, {} close", balance.open, balance.close),
            )
            .with_suggestion("Check for missing or extra { or }"),
        );
    }

    for (idx, line) in source.lines().enumerate() {
        let line_number = idx + 1;
        check_traits(line, line_number, options, &mut errors);
        check_geometry(line, line_number, options, &mut errors);
        check_property_typos(line, line_number, &mut errors);
        if scanner::is_untraited_object_line(line) {
            warnings.push(
                Diagnostic::warning(Code::UntraitedObject, line_number, "Object has no VR traits")
                    .with_context(line.trim())
                    .with_suggestion(format!(
                        "Consider adding {} for basic interactivity",
                        vocabulary::DEFAULT_TRAIT
                    )),
            );
        }
    }

    if !options.include_warnings {
        warnings.clear();
    }

    // The summary reflects the delivered counts, so suppressed warnings
    // read as a clean pass.
    let summary = if !errors.is_empty() {
        format!("❌ Found {} error(s)", errors.len())
    } else if !warnings.is_empty() {
        format!("⚠️ Valid with {} warning(s)", warnings.len())
    } else {
        "✅ Valid HoloScript code".to_string()
    };

    ValidationResult { valid: errors.is_empty(), errors, warnings, summary }
}

/// E003: every trait on the line must be in the registry.
fn check_traits(
    line: &str,
    line_number: usize,
    options: &ValidateOptions,
    errors: &mut Vec<Diagnostic>,
) {
    for (offset, name) in scanner::traits_in_line(line) {
        if vocabulary::is_known_trait(name) {
            continue;
        }
        // the scanner reports byte offsets; columns are character positions
        let column = line[..offset].chars().count() + 1;
        let mut diag = Diagnostic::error(
            Code::UnknownTrait,
            line_number,
            format!("Unknown trait: @{name}"),
        )
        .at_column(column)
        .with_context(line.trim());

        if options.include_suggestions {
            if let Some(similar) = find_similar_trait(name) {
                diag = diag
                    .with_suggestion(format!("Did you mean @{similar}?"))
                    .with_fix(Fix::replace(format!("@{name}"), format!("@{similar}")));
            }
        }
        errors.push(diag);
    }
}

/// E004: `geometry:` values must be `model/` paths or known primitives.
fn check_geometry(
    line: &str,
    line_number: usize,
    options: &ValidateOptions,
    errors: &mut Vec<Diagnostic>,
) {
    let Some(geometry) = scanner::geometry_value(line) else {
        return;
    };
    if geometry.starts_with("model/") || vocabulary::is_known_geometry(geometry) {
        return;
    }

    let mut diag = Diagnostic::error(
        Code::UnknownGeometry,
        line_number,
        format!("Unknown geometry type: {geometry}"),
    )
    .with_context(line.trim());

    if options.include_suggestions {
        if let Some(similar) = find_similar_geometry(geometry) {
            diag = diag
                .with_suggestion(format!("Did you mean '{similar}'?"))
                .with_fix(Fix::replace(format!("\"{geometry}\""), format!("\"{similar}\"")));
        }
    }
    errors.push(diag);
}

/// E005: fixed known-typo substrings, matched case-insensitively. These
/// always carry a deterministic fix.
fn check_property_typos(line: &str, line_number: usize, errors: &mut Vec<Diagnostic>) {
    let lower = line.to_lowercase();
    for (typo, correct) in vocabulary::PROPERTY_TYPOS {
        if !lower.contains(typo) {
            continue;
        }
        let typo_name = typo.trim_end_matches(':');
        let correct_name = correct.trim_end_matches(':');
        errors.push(
            Diagnostic::error(
                Code::KnownTypo,
                line_number,
                format!("Typo: '{typo_name}' should be '{correct_name}'"),
            )
            .with_context(line.trim())
            .with_suggestion(format!("Use '{correct_name}' instead"))
            .with_fix(Fix::replace(typo_name, correct_name)),
        );
    }
}

/// Best-effort similar-trait lookup for suggestion purposes.
///
/// Three tiers: 3-character prefix match, then substring containment in
/// either direction, then a normalized character-overlap score accepted
/// above 0.5. Candidates are scanned in lexicographic order so ties break
/// deterministically. This is a heuristic, not edit distance.
pub fn find_similar_trait(unknown: &str) -> Option<&'static str> {
    let lower = unknown.to_lowercase();
    let prefix: String = lower.chars().take(3).collect();

    for known in vocabulary::sorted_traits().iter().copied() {
        if known.starts_with(&prefix) {
            return Some(known);
        }
    }
    for known in vocabulary::sorted_traits().iter().copied() {
        if known.contains(&lower) || lower.contains(known) {
            return Some(known);
        }
    }

    let mut best: Option<(&'static str, f64)> = None;
    let unknown_len = lower.chars().count();
    for known in vocabulary::sorted_traits().iter().copied() {
        let common = lower.chars().filter(|&c| known.contains(c)).count();
        let score = common as f64 / unknown_len.max(known.chars().count()) as f64;
        if score > 0.5 && best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((known, score));
        }
    }
    best.map(|(name, _)| name)
}

/// Similar-geometry lookup: the hard-coded typo map first, then a
/// 3-character prefix match over the known primitives.
pub fn find_similar_geometry(geometry: &str) -> Option<&'static str> {
    let lower = geometry.to_lowercase();

    for &(typo, correct) in vocabulary::GEOMETRY_TYPOS {
        if lower == typo {
            return Some(correct);
        }
    }

    let prefix: String = lower.chars().take(3).collect();
    vocabulary::KNOWN_GEOMETRIES.iter().find(|known| known.starts_with(&prefix)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{FixKind, Severity};

    fn validate_default(source: &str) -> ValidationResult {
        validate(source, &ValidateOptions::default())
    }

    #[test]
    fn test_validate_clean_source() {
        let result = validate_default("orb test { @grabbable color: \"red\" }");
        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert_eq!(result.summary, "✅ Valid HoloScript code");
    }

    #[test]
    fn test_validate_empty_source_short_circuits() {
        for source in ["", "   ", "\n\t\n"] {
            let result = validate_default(source);
            assert!(!result.valid);
            assert_eq!(result.errors.len(), 1);
            assert_eq!(result.errors[0].code, Code::EmptySource);
            assert_eq!(result.errors[0].line, 1);
            assert_eq!(result.summary, "Empty code");
        }
    }

    #[test]
    fn test_validate_unbalanced_braces_continues_checking() {
        // brace error does not short-circuit: the unknown trait on line 1
        // is still reported
        let result = validate_default("orb test { @unknown_xyz_trait");
        let codes: Vec<Code> = result.errors.iter().map(|e| e.code).collect();
        assert!(codes.contains(&Code::UnbalancedBraces));
        assert!(codes.contains(&Code::UnknownTrait));
    }

    #[test]
    fn test_validate_unknown_trait() {
        let result = validate_default("orb test { @unknown_xyz_trait }");
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        let error = result.errors[0].clone();
        assert_eq!(error.code, Code::UnknownTrait);
        assert_eq!(error.severity, Severity::Error);
        assert_eq!(error.line, 1);
        assert!(error.message.contains("@unknown_xyz_trait"));
    }

    #[test]
    fn test_unknown_trait_column_is_one_based() {
        let result = validate_default("orb x { @flyable }");
        assert_eq!(result.errors[0].column, "orb x { ".len() + 1);
    }

    #[test]
    fn test_unknown_trait_column_counts_chars_not_bytes() {
        // "é" is two bytes but one character; the column must not drift
        let result = validate_default("orb café { @flyable }");
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].column, 12);
    }

    #[test]
    fn test_unknown_trait_suggestion_and_fix() {
        // "grabable" is a one-letter typo; the prefix tier catches it
        let result = validate_default("orb x @grabable {}");
        let error = &result.errors[0];
        assert_eq!(error.suggestion.as_deref(), Some("Did you mean @grabbable?"));
        let fix = error.fix.as_ref().unwrap();
        assert_eq!(fix.kind, FixKind::Replace);
        assert_eq!(fix.old_text, "@grabable");
        assert_eq!(fix.new_text, "@grabbable");
    }

    #[test]
    fn test_suggestions_can_be_disabled() {
        let options = ValidateOptions { include_suggestions: false, ..Default::default() };
        let result = validate("orb x @grabable {}", &options);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].suggestion.is_none());
        assert!(result.errors[0].fix.is_none());
    }

    #[test]
    fn test_validate_unknown_geometry() {
        let result = validate_default("orb x @grabbable { geometry: \"spere\" }");
        assert_eq!(result.errors.len(), 1);
        let error = &result.errors[0];
        assert_eq!(error.code, Code::UnknownGeometry);
        assert_eq!(error.suggestion.as_deref(), Some("Did you mean 'sphere'?"));
        let fix = error.fix.as_ref().unwrap();
        assert_eq!(fix.old_text, "\"spere\"");
        assert_eq!(fix.new_text, "\"sphere\"");
    }

    #[test]
    fn test_model_paths_bypass_geometry_check() {
        let result = validate_default("orb x @grabbable { geometry: \"model/sword.glb\" }");
        assert!(result.valid);
    }

    #[test]
    fn test_validate_property_typo() {
        let result = validate_default("orb x @grabbable { positon: [0, 1, 0] }");
        assert_eq!(result.errors.len(), 1);
        let error = &result.errors[0];
        assert_eq!(error.code, Code::KnownTypo);
        assert_eq!(error.message, "Typo: 'positon' should be 'position'");
        let fix = error.fix.as_ref().unwrap();
        assert_eq!(fix.old_text, "positon");
        assert_eq!(fix.new_text, "position");
    }

    #[test]
    fn test_property_typo_case_insensitive() {
        let result = validate_default("orb x @grabbable { Geomety: \"cube\" }");
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].code, Code::KnownTypo);
    }

    #[test]
    fn test_untraited_object_warning() {
        let result = validate_default("orb plain {\n}");
        assert!(result.valid);
        assert_eq!(result.warnings.len(), 1);
        let warning = &result.warnings[0];
        assert_eq!(warning.code, Code::UntraitedObject);
        assert_eq!(warning.message, "Object has no VR traits");
        assert_eq!(
            warning.suggestion.as_deref(),
            Some("Consider adding @pointable for basic interactivity")
        );
        assert_eq!(result.summary, "⚠️ Valid with 1 warning(s)");
    }

    #[test]
    fn test_include_warnings_false_suppresses_delivery_only() {
        let source = "orb plain { @unknown_xyz_trait\n}\norb bare {\n}";
        let with = validate_default(source);
        let without = validate(
            source,
            &ValidateOptions { include_warnings: false, ..Default::default() },
        );
        // error detection is unchanged
        assert_eq!(with.errors, without.errors);
        assert_eq!(with.summary, without.summary);
        assert!(without.warnings.is_empty());
        assert!(!with.warnings.is_empty());
    }

    #[test]
    fn test_suppressed_warnings_yield_clean_summary() {
        // without W001 in the delivered set, the summary is a clean pass
        let result = validate(
            "orb plain {\n}",
            &ValidateOptions { include_warnings: false, ..Default::default() },
        );
        assert!(result.valid);
        assert!(result.warnings.is_empty());
        assert_eq!(result.summary, "✅ Valid HoloScript code");
    }

    #[test]
    fn test_error_summary_counts() {
        let result = validate_default("orb x { @bogus_one @bogus_two }");
        assert_eq!(result.summary, format!("❌ Found {} error(s)", result.errors.len()));
    }

    #[test]
    fn test_validate_is_idempotent() {
        let source = "orb x @grabable { geomety: \"cube\"";
        let first = validate_default(source);
        let second = validate_default(source);
        assert_eq!(first.errors, second.errors);
        assert_eq!(first.warnings, second.warnings);
        assert_eq!(first.summary, second.summary);
    }

    #[test]
    fn test_find_similar_trait_prefix_tier() {
        assert_eq!(find_similar_trait("grabbble"), Some("grabbable"));
        assert_eq!(find_similar_trait("throable"), Some("throwable"));
    }

    #[test]
    fn test_find_similar_trait_substring_tier() {
        // "lowing" is a substring of "glowing" but shares no 3-char prefix
        assert_eq!(find_similar_trait("lowing"), Some("glowing"));
    }

    #[test]
    fn test_find_similar_trait_no_match() {
        assert_eq!(find_similar_trait("qqq"), None);
    }

    #[test]
    fn test_find_similar_trait_is_deterministic() {
        let first = find_similar_trait("graviti");
        for _ in 0..10 {
            assert_eq!(find_similar_trait("graviti"), first);
        }
    }

    #[test]
    fn test_find_similar_geometry_typo_map() {
        assert_eq!(find_similar_geometry("cueb"), Some("cube"));
        assert_eq!(find_similar_geometry("cylnder"), Some("cylinder"));
    }

    #[test]
    fn test_find_similar_geometry_prefix_fallback() {
        assert_eq!(find_similar_geometry("sphericle"), Some("sphere"));
        assert_eq!(find_similar_geometry("zzz"), None);
    }
}
