//! Static vocabulary tables for HoloScript
//!
//! The registry holds the closed trait vocabulary (grouped by category),
//! the known geometry primitives, and per-trait documentation. All tables
//! are process-lifetime static data and are never mutated at runtime, so
//! they are safe to share across any number of concurrent callers.

use serde::Serialize;
use std::collections::HashSet;
use std::sync::LazyLock;

/// A named group of traits (e.g. "interaction", "physics").
#[derive(Debug, Clone, Copy)]
pub struct TraitCategory {
    pub name: &'static str,
    /// Trait names including the `@` sigil.
    pub traits: &'static [&'static str],
}

/// All trait categories, in documentation order.
pub const TRAIT_CATEGORIES: &[TraitCategory] = &[
    TraitCategory {
        name: "interaction",
        traits: &[
            "@grabbable",
            "@throwable",
            "@holdable",
            "@clickable",
            "@hoverable",
            "@draggable",
            "@pointable",
            "@scalable",
        ],
    },
    TraitCategory {
        name: "physics",
        traits: &["@collidable", "@physics", "@rigid", "@kinematic", "@trigger", "@gravity"],
    },
    TraitCategory {
        name: "visual",
        traits: &[
            "@glowing",
            "@emissive",
            "@transparent",
            "@reflective",
            "@animated",
            "@billboard",
        ],
    },
    TraitCategory {
        name: "networking",
        traits: &["@networked", "@synced", "@persistent", "@owned", "@host_only"],
    },
    TraitCategory {
        name: "behavior",
        traits: &["@stackable", "@attachable", "@equippable", "@consumable", "@destructible"],
    },
    TraitCategory {
        name: "spatial",
        traits: &["@anchor", "@tracked", "@world_locked", "@hand_tracked", "@eye_tracked"],
    },
    TraitCategory {
        name: "audio",
        traits: &["@spatial_audio", "@ambient", "@voice_activated"],
    },
    TraitCategory {
        name: "state",
        traits: &["@state", "@reactive", "@observable", "@computed"],
    },
    TraitCategory {
        name: "social",
        traits: &["@shareable", "@collaborative", "@tweetable"],
    },
    TraitCategory {
        name: "industrial",
        traits: &["@digital_twin", "@twin_sync", "@twin_actuator", "@sensor"],
    },
    TraitCategory {
        name: "agent",
        traits: &["@mitosis"],
    },
    TraitCategory {
        name: "web3",
        traits: &["@nft", "@token_gated", "@wallet", "@marketplace"],
    },
];

/// Geometry primitives accepted by `geometry:` assignments.
/// Anything prefixed `model/` is a mesh path and bypasses this set.
pub const KNOWN_GEOMETRIES: &[&str] = &[
    "cube", "sphere", "cylinder", "cone", "torus", "capsule", "plane", "box", "ring", "circle",
    "line",
];

/// Hard-coded geometry typo corrections, checked before prefix matching.
pub const GEOMETRY_TYPOS: &[(&str, &str)] = &[
    ("sper", "sphere"),
    ("spher", "sphere"),
    ("spere", "sphere"),
    ("cub", "cube"),
    ("cueb", "cube"),
    ("cylnder", "cylinder"),
    ("cylindr", "cylinder"),
    ("con", "cone"),
    ("coen", "cone"),
    ("plan", "plane"),
    ("plae", "plane"),
];

/// Property-name typos that always carry a deterministic replacement.
/// The trailing colon keeps `positon:` from matching inside longer words.
pub const PROPERTY_TYPOS: &[(&str, &str)] = &[
    ("geomety:", "geometry:"),
    ("positon:", "position:"),
    ("rotatoin:", "rotation:"),
    ("collideable:", "collidable:"),
];

/// Keyword table backing `suggest_traits`. First match per keyword wins;
/// suggestion order follows table order.
pub const SUGGESTION_KEYWORDS: &[(&str, &str)] = &[
    ("grab", "@grabbable"),
    ("pick up", "@grabbable"),
    ("throw", "@throwable"),
    ("glow", "@glowing"),
    ("light", "@emissive"),
    ("physics", "@physics"),
    ("collide", "@collidable"),
    ("click", "@clickable"),
    ("multiplayer", "@networked"),
    ("sync", "@synced"),
    ("share", "@shareable"),
    ("tweet", "@tweetable"),
    ("collaborate", "@collaborative"),
];

/// Fallback trait suggested when nothing else matches.
pub const DEFAULT_TRAIT: &str = "@pointable";

/// Known trait names, lowercase, without the sigil.
static KNOWN_TRAITS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    TRAIT_CATEGORIES
        .iter()
        .flat_map(|category| category.traits.iter())
        .map(|name| name.trim_start_matches('@'))
        .collect()
});

/// Known trait names without the sigil, sorted lexicographically.
/// Similarity searches iterate this list so tie-breaks are deterministic.
static SORTED_TRAITS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut traits: Vec<&'static str> = KNOWN_TRAITS.iter().copied().collect();
    traits.sort_unstable();
    traits
});

/// Check whether a trait name (without sigil) is in the registry.
/// Matching is case-insensitive.
pub fn is_known_trait(name: &str) -> bool {
    KNOWN_TRAITS.contains(name.to_lowercase().as_str())
}

/// Check whether a geometry value names a known primitive.
pub fn is_known_geometry(name: &str) -> bool {
    let lower = name.to_lowercase();
    KNOWN_GEOMETRIES.contains(&lower.as_str())
}

/// All trait names without the sigil, in stable lexicographic order.
pub fn sorted_traits() -> &'static [&'static str] {
    &SORTED_TRAITS
}

/// All trait names with the sigil, in category order.
pub fn all_traits() -> Vec<&'static str> {
    TRAIT_CATEGORIES.iter().flat_map(|category| category.traits.iter().copied()).collect()
}

/// Look up a category by name.
pub fn category(name: &str) -> Option<&'static TraitCategory> {
    TRAIT_CATEGORIES.iter().find(|c| c.name == name)
}

/// Names of all valid categories, in documentation order.
pub fn category_names() -> Vec<&'static str> {
    TRAIT_CATEGORIES.iter().map(|c| c.name).collect()
}

/// A single documented trait parameter.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TraitParam {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub type_name: &'static str,
    pub default_value: &'static str,
}

/// Documentation entry for a trait.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TraitDoc {
    /// Trait name including the sigil.
    pub name: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub parameters: &'static [TraitParam],
    /// Events the trait emits at runtime.
    pub events: &'static [&'static str],
    pub example: &'static str,
    pub related: &'static [&'static str],
}

/// Detailed documentation for traits that have it.
pub const TRAIT_DOCS: &[TraitDoc] = &[
    TraitDoc {
        name: "@grabbable",
        category: "interaction",
        description: "Allows the object to be picked up by the user in VR/AR.",
        parameters: &[
            TraitParam { name: "snap_to_hand", type_name: "boolean", default_value: "false" },
            TraitParam { name: "two_handed", type_name: "boolean", default_value: "false" },
            TraitParam { name: "highlight", type_name: "boolean", default_value: "true" },
        ],
        events: &["onGrab", "onRelease"],
        example: "orb Sword @grabbable(snap_to_hand: true) {\n  geometry: \"model/sword.glb\"\n  onGrab: { haptic.feedback('medium') }\n}",
        related: &["@throwable", "@holdable", "@equippable"],
    },
    TraitDoc {
        name: "@glowing",
        category: "visual",
        description: "Object emits a glow effect.",
        parameters: &[
            TraitParam { name: "intensity", type_name: "number", default_value: "0.5" },
            TraitParam { name: "color", type_name: "string", default_value: "inherit" },
            TraitParam { name: "pulse", type_name: "boolean", default_value: "false" },
        ],
        events: &[],
        example: "orb Crystal @glowing(intensity: 0.8, pulse: true) {\n  geometry: \"sphere\"\n  color: \"#00ffff\"\n}",
        related: &["@emissive"],
    },
    TraitDoc {
        name: "@networked",
        category: "networking",
        description: "Object state is synchronized across clients.",
        parameters: &[
            TraitParam { name: "sync_rate", type_name: "string", default_value: "20hz" },
            TraitParam { name: "interpolate", type_name: "boolean", default_value: "true" },
        ],
        events: &["onNetworkSync", "onOwnershipChange"],
        example: "orb Ball @networked(sync_rate: \"30hz\") @grabbable {\n  geometry: \"sphere\"\n  @networked position\n  @networked rotation\n}",
        related: &["@synced", "@persistent", "@owned"],
    },
    TraitDoc {
        name: "@shareable",
        category: "social",
        description: "Auto-generates X-optimized previews for sharing.",
        parameters: &[
            TraitParam { name: "camera", type_name: "array", default_value: "[5, 2, 5]" },
            TraitParam { name: "animation", type_name: "string", default_value: "rotate" },
            TraitParam { name: "duration", type_name: "string", default_value: "3s" },
        ],
        events: &["onShare"],
        example: "object Sculpture @shareable {\n  geometry: \"model/sculpture.glb\"\n  preview: {\n    camera: [5, 2, 5]\n    animation: \"rotate\"\n  }\n}",
        related: &["@tweetable", "@collaborative"],
    },
    TraitDoc {
        name: "@collaborative",
        category: "social",
        description: "Real-time multi-user editing via WebRTC.",
        parameters: &[
            TraitParam { name: "sync", type_name: "string", default_value: "realtime" },
            TraitParam { name: "maxUsers", type_name: "number", default_value: "10" },
            TraitParam {
                name: "permissions",
                type_name: "array",
                default_value: "[\"edit\", \"view\"]",
            },
        ],
        events: &["onUserJoin", "onUserLeave", "onEdit"],
        example: "spatial_group \"Workspace\" @collaborative {\n  sync: \"realtime\"\n  maxUsers: 10\n}",
        related: &["@networked", "@shareable"],
    },
    TraitDoc {
        name: "@tweetable",
        category: "social",
        description: "Generates tweet with preview when shared.",
        parameters: &[
            TraitParam {
                name: "template",
                type_name: "string",
                default_value: "\"Check out {name}!\"",
            },
            TraitParam {
                name: "hashtags",
                type_name: "array",
                default_value: "[\"HoloScript\", \"VR\"]",
            },
        ],
        events: &["onTweet"],
        example: "object Art @tweetable {\n  template: \"Check out my creation: {name}! #HoloScript #VR\"\n}",
        related: &["@shareable"],
    },
];

/// Look up documentation by trait name (without sigil, case-insensitive).
pub fn trait_doc(name: &str) -> Option<&'static TraitDoc> {
    let lower = name.to_lowercase();
    TRAIT_DOCS.iter().find(|doc| doc.name.trim_start_matches('@') == lower)
}
