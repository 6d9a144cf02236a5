//! Python grammar rule set
//!
//! Classes, functions (methods inside a class body, `__init__` as
//! constructor) and imports. Decorators attach as modifiers to the
//! definition they precede.

use tree_sitter::{Language as TSLanguage, Node as TSNode};

use crate::features::extraction::ports::{
    EntityRule, GrammarRules, LanguageId, NameStrategy, SignatureMarker, Supertypes,
};
use crate::shared::models::EntityKind;

static CLASS: EntityRule = EntityRule {
    kind: EntityKind::Class,
    name: NameStrategy::Field("name"),
    signature_start: &[],
    signature_end: &[SignatureMarker {
        kind: "block",
        inclusive: false,
    }],
};

static FUNCTION: EntityRule = EntityRule {
    kind: EntityKind::Method,
    name: NameStrategy::Field("name"),
    signature_start: &[],
    signature_end: &[SignatureMarker {
        kind: "block",
        inclusive: false,
    }],
};

static IMPORT: EntityRule = EntityRule {
    kind: EntityKind::Import,
    name: NameStrategy::Identifier(&["dotted_name", "relative_import", "identifier"]),
    signature_start: &[],
    signature_end: &[],
};

pub struct PythonGrammar;

impl PythonGrammar {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PythonGrammar {
    fn default() -> Self {
        Self::new()
    }
}

impl GrammarRules for PythonGrammar {
    fn language(&self) -> TSLanguage {
        tree_sitter_python::language()
    }

    fn language_id(&self) -> LanguageId {
        LanguageId::Python
    }

    fn entity_rule(&self, node: &TSNode) -> Option<&EntityRule> {
        match node.kind() {
            "class_definition" => Some(&CLASS),
            "function_definition" => Some(&FUNCTION),
            "import_statement" | "import_from_statement" | "future_import_statement" => {
                Some(&IMPORT)
            }
            _ => None,
        }
    }

    fn refine_kind(&self, kind: EntityKind, name: &str) -> EntityKind {
        if kind == EntityKind::Method && name == "__init__" {
            EntityKind::Constructor
        } else {
            kind
        }
    }

    fn modifiers(&self, node: &TSNode, source: &str) -> Vec<String> {
        let mut out = Vec::new();
        let Some(parent) = node.parent() else {
            return out;
        };
        if parent.kind() != "decorated_definition" {
            return out;
        }
        let mut cursor = parent.walk();
        for child in parent.named_children(&mut cursor) {
            if child.kind() == "decorator" {
                let text = source.get(child.byte_range()).unwrap_or("");
                let name = text.trim_start_matches('@');
                let name = name.split('(').next().unwrap_or(name).trim();
                if !name.is_empty() {
                    out.push(name.to_string());
                }
            }
        }
        out
    }

    fn supertypes(&self, node: &TSNode, source: &str) -> Supertypes {
        let mut supers = Supertypes::default();
        if node.kind() != "class_definition" {
            return supers;
        }
        if let Some(bases) = node.child_by_field_name("superclasses") {
            let mut cursor = bases.walk();
            for child in bases.named_children(&mut cursor) {
                // keyword arguments (metaclass=...) are not base classes
                if matches!(child.kind(), "identifier" | "attribute") {
                    if let Some(text) = source.get(child.byte_range()) {
                        supers.extends.push(text.to_string());
                    }
                }
            }
        }
        supers
    }
}
