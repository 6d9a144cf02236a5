//! Property-based tests for extraction robustness
//!
//! Verifies determinism and the span-containment invariant over randomly
//! generated sources, and that no input shape panics the walker.

mod common;

use common::{assert_containment, assert_source_order};
use outline_extract::{extract, EntityKind, JavaGrammar, PythonGrammar};
use proptest::prelude::*;

// Strategy for valid Java identifiers
fn java_identifier() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9]{0,12}".prop_filter("not a keyword", |s| {
        !matches!(
            s.as_str(),
            "class" | "interface" | "enum" | "static" | "public" | "private" | "void" | "int"
                | "new" | "return" | "extends" | "implements" | "final" | "abstract"
        )
    })
}

fn java_type_name() -> impl Strategy<Value = String> {
    "[A-Z][a-zA-Z0-9]{0,12}"
}

// Strategy for a Java class with a few members
fn java_class() -> impl Strategy<Value = String> {
    (java_type_name(), prop::collection::vec(java_identifier(), 0..4)).prop_map(
        |(class_name, methods)| {
            let mut body = String::new();
            for (i, method) in methods.iter().enumerate() {
                body.push_str(&format!("    int {method}{i}() {{ return {i}; }}\n"));
            }
            format!("class {class_name} {{\n{body}}}\n")
        },
    )
}

fn java_enum() -> impl Strategy<Value = String> {
    (
        java_type_name(),
        prop::collection::vec("[A-Z]{1,8}", 1..6),
    )
        .prop_map(|(name, constants)| format!("enum {name} {{ {} }}\n", constants.join(", ")))
}

fn java_source() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![java_class(), java_enum()], 0..5)
        .prop_map(|decls| decls.join("\n"))
}

proptest! {
    #[test]
    fn prop_extraction_is_deterministic(source in java_source()) {
        let rules = JavaGrammar::new();
        let first = extract(&source, &rules).unwrap();
        let second = extract(&source, &rules).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_spans_nest_and_order_holds(source in java_source()) {
        let hierarchy = extract(&source, &JavaGrammar::new()).unwrap();
        assert_containment(&hierarchy);
        assert_source_order(&hierarchy);
    }

    #[test]
    fn prop_every_class_is_found(source in java_class()) {
        let hierarchy = extract(&source, &JavaGrammar::new()).unwrap();
        let classes: Vec<_> = hierarchy
            .entities
            .iter()
            .filter(|e| e.kind == EntityKind::Class)
            .collect();
        prop_assert_eq!(classes.len(), 1);
    }

    #[test]
    fn prop_enum_constant_count_matches(
        name in java_type_name(),
        constants in prop::collection::vec("[A-Z]{1,8}", 1..8),
    ) {
        // dedupe: repeated constant names are invalid Java
        let mut unique = constants.clone();
        unique.sort();
        unique.dedup();
        let source = format!("enum {name} {{ {} }}", unique.join(", "));
        let hierarchy = extract(&source, &JavaGrammar::new()).unwrap();
        let members = hierarchy
            .entities
            .iter()
            .filter(|e| e.kind == EntityKind::Field)
            .count();
        prop_assert_eq!(members, unique.len());
    }

    #[test]
    fn prop_arbitrary_text_never_panics(source in ".{0,200}") {
        // Malformed input must fail cleanly or succeed, never crash
        let _ = extract(&source, &JavaGrammar::new());
        let _ = extract(&source, &PythonGrammar::new());
    }

    #[test]
    fn prop_python_functions_found(stem in "[a-z_][a-z0-9_]{0,10}") {
        // the suffix keeps generated names clear of keywords
        let name = format!("{stem}_fn");
        let source = format!("def {name}():\n    pass\n");
        let hierarchy = extract(&source, &PythonGrammar::new()).unwrap();
        prop_assert!(hierarchy.find_by_name(&name).is_some());
    }
}
