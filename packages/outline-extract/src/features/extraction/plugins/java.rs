//! Java grammar rule set
//!
//! Covers packages, imports, classes, records, interfaces, annotation
//! types, enums and their constants, fields, constructors and methods.
//! Annotations surface as lowercased modifiers on the declaration they
//! mark; `extends`/`implements` clauses become flat name references.

use tree_sitter::{Language as TSLanguage, Node as TSNode};

use crate::features::extraction::ports::{
    EntityRule, GrammarRules, LanguageId, NameStrategy, SignatureMarker, Supertypes,
};
use crate::shared::models::EntityKind;

static PACKAGE: EntityRule = EntityRule {
    kind: EntityKind::Package,
    name: NameStrategy::Identifier(&["scoped_identifier", "identifier"]),
    signature_start: &[],
    signature_end: &[],
};

static IMPORT: EntityRule = EntityRule {
    kind: EntityKind::Import,
    name: NameStrategy::Identifier(&["scoped_identifier", "identifier"]),
    signature_start: &[],
    signature_end: &[],
};

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
    signature_end: &[SignatureMarker {
        kind: "interface_body",
        inclusive: false,
    }],
};

static ANNOTATION_TYPE: EntityRule = EntityRule {
    kind: EntityKind::Interface,
    name: NameStrategy::Field("name"),
    signature_start: &[],
    signature_end: &[SignatureMarker {
        kind: "annotation_type_body",
        inclusive: false,
    }],
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

static ENUM_CONSTANT: EntityRule = EntityRule {
    kind: EntityKind::Field,
    name: NameStrategy::Field("name"),
    signature_start: &[],
    signature_end: &[],
};

static FIELD: EntityRule = EntityRule {
    kind: EntityKind::Field,
    name: NameStrategy::Declarators {
        child: "variable_declarator",
        name_field: "name",
    },
    signature_start: &[],
    signature_end: &[],
};

static CONSTRUCTOR: EntityRule = EntityRule {
    kind: EntityKind::Constructor,
    name: NameStrategy::Field("name"),
    signature_start: &[],
    signature_end: &[SignatureMarker {
        kind: "constructor_body",
        inclusive: false,
    }],
};

static METHOD: EntityRule = EntityRule {
    kind: EntityKind::Method,
    name: NameStrategy::Field("name"),
    signature_start: &[],
    signature_end: &[SignatureMarker {
        kind: "block",
        inclusive: false,
    }],
};

pub struct JavaGrammar;

impl JavaGrammar {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JavaGrammar {
    fn default() -> Self {
        Self::new()
    }
}

impl GrammarRules for JavaGrammar {
    fn language(&self) -> TSLanguage {
        tree_sitter_java::language()
    }

    fn language_id(&self) -> LanguageId {
        LanguageId::Java
    }

    fn entity_rule(&self, node: &TSNode) -> Option<&EntityRule> {
        match node.kind() {
            "package_declaration" => Some(&PACKAGE),
            "import_declaration" => Some(&IMPORT),
            "class_declaration" | "record_declaration" => Some(&CLASS),
            "interface_declaration" => Some(&INTERFACE),
            "annotation_type_declaration" => Some(&ANNOTATION_TYPE),
            "enum_declaration" => Some(&ENUM),
            "enum_constant" => Some(&ENUM_CONSTANT),
            "field_declaration" | "constant_declaration" => Some(&FIELD),
            "constructor_declaration" => Some(&CONSTRUCTOR),
            "method_declaration" => Some(&METHOD),
            _ => None,
        }
    }

    fn modifiers(&self, node: &TSNode, source: &str) -> Vec<String> {
        let mut out = Vec::new();
        let mut cursor = node.walk();
        let modifiers = node.children(&mut cursor).find(|c| c.kind() == "modifiers");
        let Some(modifiers) = modifiers else {
            return out;
        };

        let mut mod_cursor = modifiers.walk();
        for child in modifiers.children(&mut mod_cursor) {
            match child.kind() {
                "marker_annotation" | "annotation" => {
                    // @Override -> "override"; the annotation is never an
                    // entity of its own
                    if let Some(name) = child.child_by_field_name("name") {
                        let text = source.get(name.byte_range()).unwrap_or("");
                        if !text.is_empty() {
                            out.push(text.to_lowercase());
                        }
                    }
                }
                _ => {
                    let text = source.get(child.byte_range()).unwrap_or("");
                    if !text.is_empty() {
                        out.push(text.to_string());
                    }
                }
            }
        }
        out
    }

    fn supertypes(&self, node: &TSNode, source: &str) -> Supertypes {
        let mut supers = Supertypes::default();
        match node.kind() {
            "class_declaration" | "record_declaration" | "enum_declaration" => {
                if let Some(superclass) = node.child_by_field_name("superclass") {
                    let mut cursor = superclass.walk();
                    for child in superclass.named_children(&mut cursor) {
                        if let Some(name) = type_name(&child, source) {
                            supers.extends.push(name);
                        }
                    }
                }
                if let Some(interfaces) = node.child_by_field_name("interfaces") {
                    collect_type_list(&interfaces, source, &mut supers.implements);
                }
            }
            "interface_declaration" => {
                let mut cursor = node.walk();
                let extends = node
                    .children(&mut cursor)
                    .find(|c| c.kind() == "extends_interfaces");
                if let Some(extends) = extends {
                    collect_type_list(&extends, source, &mut supers.extends);
                }
            }
            _ => {}
        }
        supers
    }
}

/// Collect type names out of a `type_list`-bearing clause node
fn collect_type_list(node: &TSNode, source: &str, out: &mut Vec<String>) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if child.kind() == "type_list" {
            let mut list_cursor = child.walk();
            for ty in child.named_children(&mut list_cursor) {
                if let Some(name) = type_name(&ty, source) {
                    out.push(name);
                }
            }
        }
    }
}

/// Base name of a type reference; generic arguments are dropped
fn type_name(node: &TSNode, source: &str) -> Option<String> {
    match node.kind() {
        "type_identifier" | "scoped_type_identifier" => {
            source.get(node.byte_range()).map(str::to_string)
        }
        "generic_type" => {
            let mut cursor = node.walk();
            let inner = node
                .named_children(&mut cursor)
                .find(|c| matches!(c.kind(), "type_identifier" | "scoped_type_identifier"))?;
            source.get(inner.byte_range()).map(str::to_string)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::extraction::application::extract;
    use crate::shared::models::EntityKind;

    #[test]
    fn test_extract_class_with_members() {
        let source = r#"
package com.example.shapes;

import java.util.List;

public class Circle {
    private double radius;

    public Circle(double radius) {
        this.radius = radius;
    }

    public double getArea() {
        return Math.PI * radius * radius;
    }
}
"#;
        let hierarchy = extract(source, &JavaGrammar::new()).unwrap();

        let package = hierarchy.find("com.example.shapes", EntityKind::Package);
        assert!(package.is_some());
        assert!(package.unwrap().parent.is_none());

        assert!(hierarchy.find("java.util.List", EntityKind::Import).is_some());

        let class = hierarchy.find("Circle", EntityKind::Class).unwrap();
        assert_eq!(class.signature.as_deref(), Some("public class Circle"));

        let field = hierarchy.find("radius", EntityKind::Field).unwrap();
        assert_eq!(field.parent, Some(class.id));

        let ctor = hierarchy.find("Circle", EntityKind::Constructor).unwrap();
        assert_eq!(ctor.parent, Some(class.id));
        assert_eq!(ctor.qualified_name, "Circle.Circle");

        let method = hierarchy.find("getArea", EntityKind::Method).unwrap();
        assert_eq!(method.parent, Some(class.id));
        assert_eq!(
            method.signature.as_deref(),
            Some("public double getArea()")
        );
    }

    #[test]
    fn test_inheritance_recorded_as_name_references() {
        let source = r#"
class Cylinder extends Circle implements Shape, Comparable<Cylinder> {
}
"#;
        let hierarchy = extract(source, &JavaGrammar::new()).unwrap();
        let class = hierarchy.find("Cylinder", EntityKind::Class).unwrap();
        assert_eq!(class.extends, vec!["Circle"]);
        assert_eq!(class.implements, vec!["Shape", "Comparable"]);
    }

    #[test]
    fn test_interface_extends() {
        let source = "interface Shape extends Measurable { double getArea(); }";
        let hierarchy = extract(source, &JavaGrammar::new()).unwrap();
        let iface = hierarchy.find("Shape", EntityKind::Interface).unwrap();
        assert_eq!(iface.extends, vec!["Measurable"]);

        // Abstract method without body still gets a full-declaration
        // signature
        let method = hierarchy.find("getArea", EntityKind::Method).unwrap();
        assert_eq!(method.parent, Some(iface.id));
        assert_eq!(method.signature.as_deref(), Some("double getArea();"));
    }

    #[test]
    fn test_enum_constants_are_fields() {
        let source = "enum Status { PENDING, ACTIVE, DONE }";
        let hierarchy = extract(source, &JavaGrammar::new()).unwrap();
        let status = hierarchy.find("Status", EntityKind::Enum).unwrap();

        let constants: Vec<_> = hierarchy
            .children_of(status.id)
            .filter(|e| e.kind == EntityKind::Field)
            .collect();
        assert_eq!(constants.len(), 3);
        assert_eq!(constants[0].name, "PENDING");
        assert_eq!(constants[0].qualified_name, "Status.PENDING");
    }

    #[test]
    fn test_annotation_becomes_modifier() {
        let source = r#"
class Child extends Base {
    @Override
    public int value() {
        return 1;
    }
}
"#;
        let hierarchy = extract(source, &JavaGrammar::new()).unwrap();
        let method = hierarchy.find("value", EntityKind::Method).unwrap();
        assert!(method.has_modifier("override"));
        assert!(method.has_modifier("public"));
        // The annotation produced no entity of its own
        assert!(hierarchy.find_by_name("Override").is_none());
    }

    #[test]
    fn test_static_member_keeps_kind() {
        let source = r#"
class MathUtil {
    public static double square(double x) {
        return x * x;
    }
}
"#;
        let hierarchy = extract(source, &JavaGrammar::new()).unwrap();
        let method = hierarchy.find("square", EntityKind::Method).unwrap();
        assert!(method.has_modifier("static"));
        assert_eq!(method.kind, EntityKind::Method);
    }

    #[test]
    fn test_overloads_are_distinct_entities() {
        let source = r#"
class Printer {
    void print(int x) {}
    void print(String s) {}
}
"#;
        let hierarchy = extract(source, &JavaGrammar::new()).unwrap();
        let overloads: Vec<_> = hierarchy
            .entities
            .iter()
            .filter(|e| e.name == "print")
            .collect();
        assert_eq!(overloads.len(), 2);
        assert_ne!(overloads[0].span, overloads[1].span);
    }

    #[test]
    fn test_multi_variable_field_declaration() {
        let source = "class Pair { private int first, second; }";
        let hierarchy = extract(source, &JavaGrammar::new()).unwrap();
        let pair = hierarchy.find("Pair", EntityKind::Class).unwrap();
        let fields: Vec<_> = hierarchy.children_of(pair.id).collect();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, "first");
        assert_eq!(fields[1].name, "second");
        assert!(fields[0].has_modifier("private"));
    }

    #[test]
    fn test_nested_class_parent_linkage() {
        let source = r#"
class Outer {
    static class Inner {
        int x;
    }
}
"#;
        let hierarchy = extract(source, &JavaGrammar::new()).unwrap();
        let outer = hierarchy.find("Outer", EntityKind::Class).unwrap();
        let inner = hierarchy.find("Inner", EntityKind::Class).unwrap();
        assert_eq!(inner.parent, Some(outer.id));
        assert!(inner.has_modifier("static"));
        assert_eq!(inner.qualified_name, "Outer.Inner");

        let x = hierarchy.find("x", EntityKind::Field).unwrap();
        assert_eq!(x.parent, Some(inner.id));
        assert_eq!(x.qualified_name, "Outer.Inner.x");
    }
}
