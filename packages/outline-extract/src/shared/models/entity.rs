//! Code entity model
//!
//! A `CodeEntity` is one named structural unit of source code. Entities
//! live in the arena owned by a `Hierarchy` and reference their parent by
//! index, so the result is a tree without back-pointers.

use serde::{Deserialize, Serialize};

use super::span::Span;

/// Index of an entity inside its hierarchy's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub usize);

impl EntityId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// The kind of extracted entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Package,
    Import,
    Class,
    Interface,
    Enum,
    Field,
    Constructor,
    Method,
}

impl EntityKind {
    /// Whether entities of this kind own a member scope
    pub fn opens_scope(&self) -> bool {
        matches!(self, Self::Class | Self::Interface | Self::Enum)
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Package => "package",
            Self::Import => "import",
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Field => "field",
            Self::Constructor => "constructor",
            Self::Method => "method",
        };
        write!(f, "{s}")
    }
}

/// A single extracted entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeEntity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub name: String,
    /// Dot-joined path through the enclosing scopes, e.g. `Cylinder.getArea`
    pub qualified_name: String,
    pub span: Span,
    /// Enclosing entity; `None` for top-level declarations (file root)
    pub parent: Option<EntityId>,
    /// Declaration modifiers in source order, lowercased ("public",
    /// "static", "override", ...)
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub modifiers: Vec<String>,
    /// Superclass / extended-interface names, as flat name references
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub extends: Vec<String>,
    /// Implemented-interface names, as flat name references
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub implements: Vec<String>,
    /// Declaration header text, e.g. `public double getArea()`
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub signature: Option<String>,
}

impl CodeEntity {
    pub fn new(id: EntityId, kind: EntityKind, name: impl Into<String>, span: Span) -> Self {
        let name = name.into();
        Self {
            id,
            kind,
            qualified_name: name.clone(),
            name,
            span,
            parent: None,
            modifiers: Vec::new(),
            extends: Vec::new(),
            implements: Vec::new(),
            signature: None,
        }
    }

    pub fn with_parent(mut self, parent: Option<EntityId>) -> Self {
        self.parent = parent;
        self
    }

    pub fn with_qualified_name(mut self, qualified_name: impl Into<String>) -> Self {
        self.qualified_name = qualified_name.into();
        self
    }

    pub fn with_modifiers(mut self, modifiers: Vec<String>) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn with_extends(mut self, extends: Vec<String>) -> Self {
        self.extends = extends;
        self
    }

    pub fn with_implements(mut self, implements: Vec<String>) -> Self {
        self.implements = implements;
        self
    }

    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    pub fn has_modifier(&self, modifier: &str) -> bool {
        self.modifiers.iter().any(|m| m == modifier)
    }
}
