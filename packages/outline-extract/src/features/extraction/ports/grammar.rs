//! Grammar rules port
//!
//! The rule set that decides which syntax-tree node shapes denote
//! entities, and how to read their names, signatures, modifiers and
//! supertype references. Rule sets are supplied by the caller; the
//! bundled language rule sets live in the plugins module.

use std::collections::HashMap;

use tree_sitter::{Language as TSLanguage, Node as TSNode};

use crate::shared::models::{EntityKind, Span};

/// Language identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageId {
    Java,
    Python,
    TypeScript,
}

impl LanguageId {
    pub fn name(&self) -> &'static str {
        match self {
            LanguageId::Java => "java",
            LanguageId::Python => "python",
            LanguageId::TypeScript => "typescript",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "java" => Some(LanguageId::Java),
            "py" | "pyi" => Some(LanguageId::Python),
            "ts" | "tsx" => Some(LanguageId::TypeScript),
            _ => None,
        }
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            LanguageId::Java => &["java"],
            LanguageId::Python => &["py", "pyi"],
            LanguageId::TypeScript => &["ts", "tsx"],
        }
    }
}

/// How to resolve the declared name of an entity node
#[derive(Debug, Clone, Copy)]
pub enum NameStrategy {
    /// `child_by_field_name` on the node itself
    Field(&'static str),
    /// First descendant whose kind matches, tried in listed order
    Identifier(&'static [&'static str]),
    /// The node's own text is the name (leaf entities, e.g. enum members)
    SelfText,
    /// One entity per matching child (multi-variable declarations);
    /// name read from `name_field` of each declarator
    Declarators {
        child: &'static str,
        name_field: &'static str,
    },
}

/// Signature boundary marker
///
/// Exclusive end markers stop at the marker's start byte (a method body
/// block ends the header); inclusive markers keep the marker's text.
#[derive(Debug, Clone, Copy)]
pub struct SignatureMarker {
    pub kind: &'static str,
    pub inclusive: bool,
}

impl SignatureMarker {
    pub const fn exclusive(kind: &'static str) -> Self {
        Self {
            kind,
            inclusive: false,
        }
    }

    pub const fn inclusive(kind: &'static str) -> Self {
        Self {
            kind,
            inclusive: true,
        }
    }
}

/// One entity pattern of a grammar rule set
#[derive(Debug, Clone)]
pub struct EntityRule {
    pub kind: EntityKind,
    pub name: NameStrategy,
    /// Markers opening the signature; empty means the node's start byte
    pub signature_start: &'static [SignatureMarker],
    /// Markers closing the signature; empty means the node's end byte
    pub signature_end: &'static [SignatureMarker],
}

impl EntityRule {
    pub fn new(kind: EntityKind, name: NameStrategy) -> Self {
        Self {
            kind,
            name,
            signature_start: &[],
            signature_end: &[],
        }
    }

    pub fn ends_at(mut self, markers: &'static [SignatureMarker]) -> Self {
        self.signature_end = markers;
        self
    }

    pub fn starts_at(mut self, markers: &'static [SignatureMarker]) -> Self {
        self.signature_start = markers;
        self
    }
}

/// Supertype references recorded on a class-like entity
#[derive(Debug, Clone, Default)]
pub struct Supertypes {
    pub extends: Vec<String>,
    pub implements: Vec<String>,
}

/// Grammar rule set trait
///
/// Implementations supply the tree-sitter language plus the entity
/// patterns for it. The walker consults `entity_rule` at every node of
/// the pre-order traversal.
pub trait GrammarRules: Send + Sync {
    /// Tree-sitter language to parse with
    fn language(&self) -> TSLanguage;

    fn language_id(&self) -> LanguageId;

    /// The entity pattern this node matches, if any. The node (not just
    /// its kind) is passed so rules can be position-sensitive, e.g. a
    /// bare identifier that is an entity only inside an enum body.
    fn entity_rule(&self, node: &TSNode) -> Option<&EntityRule>;

    /// Adjust the kind after name resolution (e.g. `__init__` or
    /// `constructor` methods become constructors)
    fn refine_kind(&self, kind: EntityKind, _name: &str) -> EntityKind {
        kind
    }

    /// Declaration modifiers for an entity node, in source order.
    /// Annotations and decorators surface here, attached to the
    /// declaration they mark, never as entities of their own.
    fn modifiers(&self, _node: &TSNode, _source: &str) -> Vec<String> {
        Vec::new()
    }

    /// Superclass / interface references for an entity node, as flat
    /// name references
    fn supertypes(&self, _node: &TSNode, _source: &str) -> Supertypes {
        Supertypes::default()
    }

    fn extensions(&self) -> &[&str] {
        self.language_id().extensions()
    }

    fn supports(&self, ext: &str) -> bool {
        self.extensions()
            .iter()
            .any(|e| e.eq_ignore_ascii_case(ext))
    }
}

/// Registry for grammar rule sets
#[derive(Default)]
pub struct GrammarRegistry {
    rules: HashMap<LanguageId, Box<dyn GrammarRules>>,
}

impl GrammarRegistry {
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    pub fn register(&mut self, rules: Box<dyn GrammarRules>) {
        self.rules.insert(rules.language_id(), rules);
    }

    pub fn get(&self, lang: LanguageId) -> Option<&dyn GrammarRules> {
        self.rules.get(&lang).map(|r| r.as_ref())
    }

    pub fn get_by_extension(&self, ext: &str) -> Option<&dyn GrammarRules> {
        let lang = LanguageId::from_extension(ext)?;
        self.get(lang)
    }

    pub fn supports(&self, ext: &str) -> bool {
        self.get_by_extension(ext).is_some()
    }

    pub fn all(&self) -> impl Iterator<Item = &dyn GrammarRules> {
        self.rules.values().map(|r| r.as_ref())
    }
}

/// Helper trait for extracting spans from tree-sitter nodes
pub trait SpanExt {
    fn to_span(&self) -> Span;
}

impl SpanExt for TSNode<'_> {
    fn to_span(&self) -> Span {
        Span::new(
            self.start_byte(),
            self.end_byte(),
            self.start_position().row as u32 + 1,
            self.start_position().column as u32,
            self.end_position().row as u32 + 1,
            self.end_position().column as u32,
        )
    }
}
