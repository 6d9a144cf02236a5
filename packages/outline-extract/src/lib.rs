//! Grammar-driven structural code-entity extraction.
//!
//! Given source text and a grammar rule set, `extract` parses the text
//! into a concrete syntax tree and walks it into an ordered hierarchy of
//! named code entities (packages, imports, classes, interfaces, enums,
//! fields, constructors, methods) with spans, parent linkage, modifiers
//! and flat supertype references.
//!
//! ```no_run
//! use outline_extract::{extract, EntityKind, JavaGrammar};
//!
//! let source = r#"
//! public class Circle {
//!     private double radius;
//!
//!     public double getArea() {
//!         return Math.PI * radius * radius;
//!     }
//! }
//! "#;
//!
//! let hierarchy = extract(source, &JavaGrammar::new()).unwrap();
//! let class = hierarchy.find("Circle", EntityKind::Class).unwrap();
//! for member in hierarchy.children_of(class.id) {
//!     println!("{} {}", member.kind, member.qualified_name);
//! }
//! ```
//!
//! Extraction is a pure function of its inputs: no shared mutable state,
//! deterministic output, no partial hierarchy on parse failure. Batch
//! extraction over independent files parallelizes with rayon via
//! [`Extractor::extract_batch`].

pub mod features;
pub mod shared;

pub use features::extraction::{
    create_full_registry, create_registry, extract, Diagnostic, DiagnosticKind, EntityRule,
    Extractor, GrammarRegistry, GrammarRules, Hierarchy, JavaGrammar, LanguageId, NameStrategy,
    PythonGrammar, SignatureMarker, SpanExt, Supertypes, TypeScriptGrammar,
};
pub use shared::models::{CodeEntity, EntityId, EntityKind, ExtractError, Result, Span};
