//! Entity walker
//!
//! Pre-order traversal of a parsed tree, consulting the grammar rule set
//! at every node. An explicit stack of open entities assigns parent
//! linkage: push when entering a class/interface/enum body, pop when
//! leaving it. Entities land in the hierarchy arena in source order.

use tracing::warn;
use tree_sitter::{Node as TSNode, Tree};

use crate::features::extraction::domain::{Diagnostic, DiagnosticKind, Hierarchy};
use crate::features::extraction::ports::{
    EntityRule, GrammarRules, NameStrategy, SignatureMarker, SpanExt,
};
use crate::shared::models::{CodeEntity, EntityId, Span};
use crate::shared::utils::OpenEntityStack;

pub struct EntityWalker<'a> {
    source: &'a str,
    rules: &'a dyn GrammarRules,
    entities: Vec<CodeEntity>,
    diagnostics: Vec<Diagnostic>,
    open: OpenEntityStack,
}

impl<'a> EntityWalker<'a> {
    pub fn new(source: &'a str, rules: &'a dyn GrammarRules) -> Self {
        Self {
            source,
            rules,
            entities: Vec::new(),
            diagnostics: Vec::new(),
            open: OpenEntityStack::new(),
        }
    }

    /// Walk the tree and build the hierarchy
    pub fn walk(mut self, tree: &Tree) -> Hierarchy {
        let root = tree.root_node();
        self.visit_children(&root);

        let mut hierarchy = Hierarchy::new(self.rules.language_id().name());
        hierarchy.entities = self.entities;
        hierarchy.diagnostics = self.diagnostics;
        hierarchy
    }

    fn visit_children(&mut self, node: &TSNode) {
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            self.visit(&child);
        }
    }

    fn visit(&mut self, node: &TSNode) {
        let rules = self.rules;
        match rules.entity_rule(node) {
            Some(rule) => self.emit(node, rule),
            // Not an entity: recurse so wrappers (decorated definitions,
            // export statements) still surface their declarations
            None => self.visit_children(node),
        }
    }

    fn emit(&mut self, node: &TSNode, rule: &EntityRule) {
        match rule.name {
            NameStrategy::Declarators { child, name_field } => {
                let mut emitted = false;
                let mut cursor = node.walk();
                let declarators: Vec<TSNode> = node
                    .named_children(&mut cursor)
                    .filter(|c| c.kind() == child)
                    .collect();
                for decl in declarators {
                    if let Some(name_node) = decl.child_by_field_name(name_field) {
                        let name = self.text(&name_node).to_string();
                        if !name.is_empty() {
                            self.record(node, rule, name, decl.to_span());
                            emitted = true;
                        }
                    }
                }
                if !emitted {
                    self.unresolved(node);
                }
            }
            _ => match self.resolve_name(node, rule) {
                Some(name) => self.record(node, rule, name, node.to_span()),
                None => {
                    // Skip the anonymous declaration but keep walking so
                    // its members attach to the enclosing entity
                    self.unresolved(node);
                    self.visit_children(node);
                }
            },
        }
    }

    fn record(&mut self, node: &TSNode, rule: &EntityRule, name: String, span: Span) {
        let kind = self.rules.refine_kind(rule.kind, &name);
        let id = EntityId(self.entities.len());
        let supertypes = self.rules.supertypes(node, self.source);

        let mut entity = CodeEntity::new(id, kind, name.clone(), span)
            .with_parent(self.open.current())
            .with_qualified_name(self.open.qualified(&name))
            .with_modifiers(self.rules.modifiers(node, self.source))
            .with_extends(supertypes.extends)
            .with_implements(supertypes.implements);

        let signature = self.signature(node, rule);
        if !signature.is_empty() {
            entity = entity.with_signature(signature);
        }

        self.entities.push(entity);

        if kind.opens_scope() {
            self.open.push(id, name);
            if let Some(body) = node.child_by_field_name("body") {
                self.visit_children(&body);
            }
            self.open.pop();
        }
    }

    fn resolve_name(&self, node: &TSNode, rule: &EntityRule) -> Option<String> {
        match rule.name {
            NameStrategy::Field(field) => {
                let name_node = node.child_by_field_name(field)?;
                let name = self.text(&name_node).trim();
                (!name.is_empty()).then(|| name.to_string())
            }
            NameStrategy::Identifier(kinds) => {
                for kind in kinds {
                    if let Some(found) = first_descendant(node, kind) {
                        let name = self.text(&found).trim();
                        if !name.is_empty() {
                            return Some(name.to_string());
                        }
                    }
                }
                None
            }
            NameStrategy::SelfText => {
                let name = self.text(node).trim();
                (!name.is_empty()).then(|| name.to_string())
            }
            NameStrategy::Declarators { .. } => None,
        }
    }

    /// Declaration header per the rule's markers; empty when nothing
    /// sensible can be captured
    fn signature(&self, node: &TSNode, rule: &EntityRule) -> String {
        let start = find_marker(node, rule.signature_start)
            .map(|(n, m)| if m.inclusive { n.start_byte() } else { n.end_byte() })
            .unwrap_or_else(|| node.start_byte());
        let end = find_marker(node, rule.signature_end)
            .map(|(n, m)| if m.inclusive { n.end_byte() } else { n.start_byte() })
            .unwrap_or_else(|| node.end_byte());
        if start >= end {
            return String::new();
        }
        self.source.get(start..end).unwrap_or("").trim().to_string()
    }

    fn unresolved(&mut self, node: &TSNode) {
        let span = node.to_span();
        warn!(
            "no resolvable name for {} at line {}, skipping",
            node.kind(),
            span.start_line
        );
        self.diagnostics.push(Diagnostic {
            kind: DiagnosticKind::UnresolvedName,
            message: format!("no resolvable name for {} declaration", node.kind()),
            span,
        });
    }

    fn text(&self, node: &TSNode) -> &str {
        self.source.get(node.byte_range()).unwrap_or("")
    }
}

/// First descendant with the given kind, pre-order
fn first_descendant<'t>(node: &TSNode<'t>, kind: &str) -> Option<TSNode<'t>> {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() == kind {
            return Some(child);
        }
        if let Some(found) = first_descendant(&child, kind) {
            return Some(found);
        }
    }
    None
}

/// First node in the subtree matching any marker, pre-order. Anonymous
/// children are included so punctuation markers can match.
fn find_marker<'t>(
    node: &TSNode<'t>,
    markers: &[SignatureMarker],
) -> Option<(TSNode<'t>, SignatureMarker)> {
    if markers.is_empty() {
        return None;
    }
    for marker in markers {
        if node.kind() == marker.kind {
            return Some((*node, *marker));
        }
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = find_marker(&child, markers) {
            return Some(found);
        }
    }
    None
}
