//! Extraction feature
//!
//! Parses source text into a concrete syntax tree and walks it into an
//! ordered hierarchy of code entities.
//!
//! ## Structure
//! - `domain/` - Hierarchy, Diagnostic
//! - `ports/` - GrammarRules trait, registry, language ids
//! - `application/` - extract(), Extractor
//! - `infrastructure/` - SourceParser, EntityWalker
//! - `plugins/` - bundled rule sets (Java, Python, TypeScript)

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod plugins;
pub mod ports;

pub use application::{extract, Extractor};
pub use domain::{Diagnostic, DiagnosticKind, Hierarchy};
pub use plugins::{
    create_full_registry, create_registry, JavaGrammar, PythonGrammar, TypeScriptGrammar,
};
pub use ports::{
    EntityRule, GrammarRegistry, GrammarRules, LanguageId, NameStrategy, SignatureMarker, SpanExt,
    Supertypes,
};
