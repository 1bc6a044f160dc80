//! AST value types for both HoloScript dialects
//!
//! These are plain data carriers: the composition dialect produces a
//! scene tree (`Composition`), the object-literal dialect a flat object
//! listing (`Program`). Template and logic bodies are kept as raw text;
//! interpreting them is downstream tooling's job.

use serde::{Deserialize, Serialize};

/// Root of a parsed source, tagged by dialect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Ast {
    Composition(Composition),
    Program(Program),
}

/// Scene tree produced by the composition dialect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Composition {
    pub name: String,
    pub environment: Environment,
    pub templates: Vec<Template>,
    pub objects: Vec<SceneObject>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub logic: Option<Logic>,
}

/// Environment block fields. Both fields are optional in source.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Environment {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub skybox: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ambient_light: Option<f64>,
}

/// A named template with its raw body text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Template {
    pub name: String,
    pub body: String,
}

/// An object reference inside a composition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SceneObject {
    pub name: String,
}

/// The raw body of a composition's logic block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Logic {
    pub body: String,
}

/// Flat object listing produced by the object-literal dialect.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Program {
    pub objects: Vec<ObjectDecl>,
    /// Trait names without the sigil, first-appearance order, deduplicated.
    pub traits: Vec<String>,
}

/// A single `orb X { ... }`-style declaration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ObjectDecl {
    #[serde(rename = "type")]
    pub kind: ObjectKind,
    pub name: String,
}

/// The fixed set of object-literal keywords.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Orb,
    Cube,
    Sphere,
    Cylinder,
    Model,
}

impl ObjectKind {
    /// Map a matched keyword to its kind. The scanner only ever produces
    /// the five known keywords.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "orb" => Some(ObjectKind::Orb),
            "cube" => Some(ObjectKind::Cube),
            "sphere" => Some(ObjectKind::Sphere),
            "cylinder" => Some(ObjectKind::Cylinder),
            "model" => Some(ObjectKind::Model),
            _ => None,
        }
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjectKind::Orb => write!(f, "orb"),
            ObjectKind::Cube => write!(f, "cube"),
            ObjectKind::Sphere => write!(f, "sphere"),
            ObjectKind::Cylinder => write!(f, "cylinder"),
            ObjectKind::Model => write!(f, "model"),
        }
    }
}
