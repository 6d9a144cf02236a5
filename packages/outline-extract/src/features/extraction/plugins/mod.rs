//! Bundled grammar rule sets
//!
//! Each language implements the GrammarRules trait. Callers with other
//! languages supply their own implementation.

pub mod java;
pub mod python;
pub mod typescript;

pub use java::JavaGrammar;
pub use python::PythonGrammar;
pub use typescript::TypeScriptGrammar;

use crate::features::extraction::ports::{GrammarRegistry, LanguageId};

/// Registry with every bundled rule set registered
pub fn create_full_registry() -> GrammarRegistry {
    let mut registry = GrammarRegistry::new();
    registry.register(Box::new(JavaGrammar::new()));
    registry.register(Box::new(PythonGrammar::new()));
    registry.register(Box::new(TypeScriptGrammar::new()));
    registry
}

/// Registry with only the requested languages
pub fn create_registry(languages: &[LanguageId]) -> GrammarRegistry {
    let mut registry = GrammarRegistry::new();
    for lang in languages {
        match lang {
            LanguageId::Java => registry.register(Box::new(JavaGrammar::new())),
            LanguageId::Python => registry.register(Box::new(PythonGrammar::new())),
            LanguageId::TypeScript => registry.register(Box::new(TypeScriptGrammar::new())),
        }
    }
    registry
}
