//! Extraction ports (interfaces)

mod grammar;

pub use grammar::{
    EntityRule, GrammarRegistry, GrammarRules, LanguageId, NameStrategy, SignatureMarker, SpanExt,
    Supertypes,
};
