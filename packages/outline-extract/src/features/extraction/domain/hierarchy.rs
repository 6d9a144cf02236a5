//! Extracted hierarchy
//!
//! The full ordered sequence of entities from one source text, rooted
//! implicitly at the file. Built once per extract call and immutable
//! afterwards.

use serde::{Deserialize, Serialize};

use crate::shared::models::{CodeEntity, EntityId, EntityKind, Span};

/// Non-fatal condition reported during extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A declaration node had no resolvable name child; the entity was
    /// skipped, its children were still walked.
    UnresolvedName,
}

/// Ordered entity sequence for one source text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hierarchy {
    /// Entities in source order (pre-order traversal); `EntityId` indexes
    /// into this vector
    pub entities: Vec<CodeEntity>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub diagnostics: Vec<Diagnostic>,
    pub language: String,
}

impl Hierarchy {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            entities: Vec::new(),
            diagnostics: Vec::new(),
            language: language.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn get(&self, id: EntityId) -> Option<&CodeEntity> {
        self.entities.get(id.index())
    }

    /// Entities whose parent is the file root
    pub fn top_level(&self) -> impl Iterator<Item = &CodeEntity> {
        self.entities.iter().filter(|e| e.parent.is_none())
    }

    /// Direct children of `id`, in source order
    pub fn children_of(&self, id: EntityId) -> impl Iterator<Item = &CodeEntity> {
        self.entities.iter().filter(move |e| e.parent == Some(id))
    }

    /// First entity with the given name, in source order
    pub fn find_by_name(&self, name: &str) -> Option<&CodeEntity> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// First entity matching name and kind
    pub fn find(&self, name: &str, kind: EntityKind) -> Option<&CodeEntity> {
        self.entities
            .iter()
            .find(|e| e.name == name && e.kind == kind)
    }

    /// First entity with the given qualified name
    pub fn find_qualified(&self, qualified_name: &str) -> Option<&CodeEntity> {
        self.entities
            .iter()
            .find(|e| e.qualified_name == qualified_name)
    }

    /// Render the hierarchy as an indented markdown outline
    pub fn outline(&self) -> String {
        let mut out = String::new();
        for entity in self.top_level() {
            self.outline_entity(entity, 0, &mut out);
        }
        out
    }

    fn outline_entity(&self, entity: &CodeEntity, depth: usize, out: &mut String) {
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str("- ");
        out.push_str(&entity.name);
        out.push('\n');
        for child in self.children_of(entity.id) {
            self.outline_entity(child, depth + 1, out);
        }
    }

    /// Serialize to JSON for downstream consumers
    pub fn to_json(&self) -> crate::shared::models::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
