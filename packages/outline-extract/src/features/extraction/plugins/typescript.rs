//! TypeScript grammar rule set
//!
//! Classes (including abstract), interfaces, enums and their members,
//! class fields, methods/constructors, top-level functions, lexical
//! declarations and imports. Heritage clauses become flat name
//! references.

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
        kind: "class_body",
        inclusive: false,
    }],
};

static INTERFACE: EntityRule = EntityRule {
    kind: EntityKind::Interface,
    name: NameStrategy::Field("name"),
    signature_start: &[],
    // grammar versions disagree on the body kind; first match wins
    signature_end: &[
        SignatureMarker {
            kind: "interface_body",
            inclusive: false,
        },
        SignatureMarker {
            kind: "object_type",
            inclusive: false,
        },
    ],
};

static ENUM: EntityRule = EntityRule {
    kind: EntityKind::Enum,
    name: NameStrategy::Field("name"),
    signature_start: &[],
    signature_end: &[SignatureMarker {
        kind: "enum_body",
        inclusive: false,
    }],
};

static ENUM_MEMBER: EntityRule = EntityRule {
    kind: EntityKind::Field,
    name: NameStrategy::SelfText,
    signature_start: &[],
    signature_end: &[],
};

static ENUM_ASSIGNMENT: EntityRule = EntityRule {
    kind: EntityKind::Field,
    name: NameStrategy::Field("name"),
    signature_start: &[],
    signature_end: &[],
};

static FIELD: EntityRule = EntityRule {
    kind: EntityKind::Field,
    name: NameStrategy::Field("name"),
    signature_start: &[],
    signature_end: &[],
};

static METHOD: EntityRule = EntityRule {
    kind: EntityKind::Method,
    name: NameStrategy::Field("name"),
    signature_start: &[],
    signature_end: &[SignatureMarker {
        kind: "statement_block",
        inclusive: false,
    }],
};

static FUNCTION: EntityRule = EntityRule {
    kind: EntityKind::Method,
    name: NameStrategy::Field("name"),
    signature_start: &[],
    signature_end: &[SignatureMarker {
        kind: "statement_block",
        inclusive: false,
    }],
};

static LEXICAL: EntityRule = EntityRule {
    kind: EntityKind::Field,
    name: NameStrategy::Declarators {
        child: "variable_declarator",
        name_field: "name",
    },
    signature_start: &[],
    signature_end: &[],
};

static IMPORT: EntityRule = EntityRule {
    kind: EntityKind::Import,
    name: NameStrategy::Identifier(&["string_fragment", "identifier"]),
    signature_start: &[],
    signature_end: &[],
};

const KNOWN_MODIFIERS: &[&str] = &[
    "static", "abstract", "readonly", "async", "declare", "get", "set",
];

pub struct TypeScriptGrammar;

impl TypeScriptGrammar {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TypeScriptGrammar {
    fn default() -> Self {
        Self::new()
    }
}

impl GrammarRules for TypeScriptGrammar {
    fn language(&self) -> TSLanguage {
        tree_sitter_typescript::language_typescript()
    }

    fn language_id(&self) -> LanguageId {
        LanguageId::TypeScript
    }

    fn entity_rule(&self, node: &TSNode) -> Option<&EntityRule> {
        match node.kind() {
            // "class" covers class expressions, e.g. an anonymous
            // default export; a missing name is reported downstream
            "class_declaration" | "abstract_class_declaration" | "class" => Some(&CLASS),
            "interface_declaration" => Some(&INTERFACE),
            "enum_declaration" => Some(&ENUM),
            "enum_assignment" => Some(&ENUM_ASSIGNMENT),
            // a bare identifier is an entity only as an enum member
            "property_identifier" => node
                .parent()
                .filter(|p| p.kind() == "enum_body")
                .map(|_| &ENUM_MEMBER),
            "public_field_definition" => Some(&FIELD),
            "method_definition" | "abstract_method_signature" | "method_signature" => {
                Some(&METHOD)
            }
            "function_declaration" => Some(&FUNCTION),
            "lexical_declaration" | "variable_declaration" => {
                // only top-level and class-scope declarations surface;
                // statement positions inside bodies are never walked
                Some(&LEXICAL)
            }
            "import_statement" => Some(&IMPORT),
            _ => None,
        }
    }

    fn refine_kind(&self, kind: EntityKind, name: &str) -> EntityKind {
        if kind == EntityKind::Method && name == "constructor" {
            EntityKind::Constructor
        } else {
            kind
        }
    }

    fn modifiers(&self, node: &TSNode, source: &str) -> Vec<String> {
        let mut out = Vec::new();
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            match child.kind() {
                "accessibility_modifier" | "override_modifier" => {
                    if let Some(text) = source.get(child.byte_range()) {
                        out.push(text.to_string());
                    }
                }
                "decorator" => {
                    let text = source.get(child.byte_range()).unwrap_or("");
                    let name = text.trim_start_matches('@');
                    let name = name.split('(').next().unwrap_or(name).trim();
                    if !name.is_empty() {
                        out.push(name.to_string());
                    }
                }
                kind if KNOWN_MODIFIERS.contains(&kind) => {
                    if let Some(text) = source.get(child.byte_range()) {
                        out.push(text.to_string());
                    }
                }
                _ => {}
            }
        }
        out
    }

    fn supertypes(&self, node: &TSNode, source: &str) -> Supertypes {
        let mut supers = Supertypes::default();
        match node.kind() {
            "class_declaration" | "abstract_class_declaration" => {
                let mut cursor = node.walk();
                let heritage = node
                    .children(&mut cursor)
                    .find(|c| c.kind() == "class_heritage");
                if let Some(heritage) = heritage {
                    let mut h_cursor = heritage.walk();
                    for clause in heritage.named_children(&mut h_cursor) {
                        match clause.kind() {
                            "extends_clause" => {
                                collect_type_refs(&clause, source, &mut supers.extends)
                            }
                            "implements_clause" => {
                                collect_type_refs(&clause, source, &mut supers.implements)
                            }
                            _ => {}
                        }
                    }
                }
            }
            "interface_declaration" => {
                let mut cursor = node.walk();
                let extends = node
                    .children(&mut cursor)
                    .find(|c| c.kind() == "extends_type_clause");
                if let Some(extends) = extends {
                    collect_type_refs(&extends, source, &mut supers.extends);
                }
            }
            _ => {}
        }
        supers
    }
}

fn collect_type_refs(clause: &TSNode, source: &str, out: &mut Vec<String>) {
    let mut cursor = clause.walk();
    for child in clause.named_children(&mut cursor) {
        if let Some(name) = type_ref_name(&child, source) {
            out.push(name);
        }
    }
}

/// Base name of a heritage type reference; type arguments are dropped
fn type_ref_name(node: &TSNode, source: &str) -> Option<String> {
    match node.kind() {
        "identifier" | "type_identifier" | "nested_type_identifier" | "member_expression" => {
            source.get(node.byte_range()).map(str::to_string)
        }
        "generic_type" => {
            let inner = node.child_by_field_name("name").or_else(|| {
                let mut cursor = node.walk();
                let found = node.named_children(&mut cursor)
                    .find(|c| matches!(c.kind(), "type_identifier" | "nested_type_identifier"));
                found
            })?;
            source.get(inner.byte_range()).map(str::to_string)
        }
        _ => None,
    }
}
