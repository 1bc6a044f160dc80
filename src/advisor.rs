//! Trait documentation lookup and suggestion
//!
//! The advisor answers three questions against the registry: what does
//! this trait do (`explain_trait`), what traits exist (`list_traits`),
//! and which traits fit this description (`suggest_traits`). Misses are
//! structured payloads with candidates, never faults.

use crate::vocabulary::{
    self, TraitDoc, DEFAULT_TRAIT, SUGGESTION_KEYWORDS, TRAIT_CATEGORIES,
};
use serde::Serialize;
use thiserror::Error;

/// Outcome of a documentation lookup.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum TraitExplanation {
    Doc(&'static TraitDoc),
    Unknown {
        /// Normalized trait name including the sigil.
        trait_name: String,
        /// Up to 3 similar known traits, sigil included.
        suggestions: Vec<String>,
        /// The full trait catalog for caller-side fallback.
        all_traits: Vec<&'static str>,
    },
}

/// Get documentation for a trait, with or without the `@` sigil.
pub fn explain_trait(name: &str) -> TraitExplanation {
    let bare = name.trim_start_matches('@');
    if let Some(doc) = vocabulary::trait_doc(bare) {
        return TraitExplanation::Doc(doc);
    }
    TraitExplanation::Unknown {
        trait_name: format!("@{}", bare.to_lowercase()),
        suggestions: similar_traits(bare),
        all_traits: vocabulary::all_traits(),
    }
}

/// Requested category does not exist. Carries the valid names so callers
/// can recover without a second query.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("Unknown category: {requested}")]
pub struct UnknownCategory {
    pub requested: String,
    pub valid_categories: Vec<&'static str>,
}

/// List traits by category. `None` (or `"all"`) returns every category in
/// documentation order; a named category returns just that one.
pub fn list_traits(
    category: Option<&str>,
) -> Result<Vec<(&'static str, &'static [&'static str])>, UnknownCategory> {
    match category {
        None | Some("all") => {
            Ok(TRAIT_CATEGORIES.iter().map(|c| (c.name, c.traits)).collect())
        }
        Some(name) => match vocabulary::category(name) {
            Some(c) => Ok(vec![(c.name, c.traits)]),
            None => Err(UnknownCategory {
                requested: name.to_string(),
                valid_categories: vocabulary::category_names(),
            }),
        },
    }
}

/// Why a trait was suggested.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionReason {
    pub trait_name: &'static str,
    pub reason: String,
}

/// Traits suggested for a free-text description.
#[derive(Debug, Clone, Serialize)]
pub struct TraitSuggestion {
    pub traits: Vec<&'static str>,
    pub reasoning: Vec<SuggestionReason>,
    /// Saturating heuristic score, not a calibrated probability.
    pub confidence: f64,
}

/// Suggest traits for an object description. Always returns at least one
/// trait; `@pointable` is the baseline when no keyword matches.
pub fn suggest_traits(description: &str, context: Option<&str>) -> TraitSuggestion {
    let haystack = match context {
        Some(context) => format!("{description} {context}").to_lowercase(),
        None => description.to_lowercase(),
    };

    let mut traits: Vec<&'static str> = Vec::new();
    let mut reasoning = Vec::new();

    for &(keyword, trait_name) in SUGGESTION_KEYWORDS {
        if haystack.contains(keyword) && !traits.contains(&trait_name) {
            traits.push(trait_name);
            reasoning.push(SuggestionReason {
                trait_name,
                reason: format!("Suggested because description mentions \"{keyword}\""),
            });
        }
    }

    if traits.is_empty() {
        traits.push(DEFAULT_TRAIT);
        reasoning.push(SuggestionReason {
            trait_name: DEFAULT_TRAIT,
            reason: "Default trait for interactive objects".to_string(),
        });
    }

    let confidence = (0.5 + 0.1 * traits.len() as f64).min(0.95);

    TraitSuggestion { traits, reasoning, confidence }
}

/// Up to 3 traits similar to `name`: lexicographic prefix matches first,
/// then substring containment, same tiers as the validator's suggestion
/// path.
fn similar_traits(name: &str) -> Vec<String> {
    let lower = name.to_lowercase();
    let prefix: String = lower.chars().take(3).collect();

    let mut matches: Vec<&'static str> = Vec::new();
    for known in vocabulary::sorted_traits().iter().copied() {
        if known.starts_with(&prefix) && !matches.contains(&known) {
            matches.push(known);
        }
    }
    for known in vocabulary::sorted_traits().iter().copied() {
        if (known.contains(&lower) || lower.contains(known)) && !matches.contains(&known) {
            matches.push(known);
        }
    }
    matches.truncate(3);
    matches.into_iter().map(|name| format!("@{name}")).collect()
}
