//! Extraction use cases
//!
//! `extract` is the core contract: one source text, one rule set, one
//! hierarchy or an error. `Extractor` layers registry dispatch and
//! rayon-parallel batch extraction on top; calls are independent, so no
//! coordination is needed beyond the read-only registry.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::features::extraction::domain::Hierarchy;
use crate::features::extraction::infrastructure::{EntityWalker, SourceParser};
use crate::features::extraction::plugins::create_full_registry;
use crate::features::extraction::ports::{GrammarRegistry, GrammarRules, LanguageId};
use crate::shared::models::{ExtractError, Result};

/// Extract the entity hierarchy from one source text
pub fn extract(source: &str, rules: &dyn GrammarRules) -> Result<Hierarchy> {
    let tree = SourceParser::new(rules).parse(source)?;
    let hierarchy = EntityWalker::new(source, rules).walk(&tree);
    debug!(
        "extracted {} entities ({} diagnostics) from {} source",
        hierarchy.len(),
        hierarchy.diagnostics.len(),
        rules.language_id().name()
    );
    Ok(hierarchy)
}

/// Registry-backed extractor with file and batch entry points
pub struct Extractor {
    registry: GrammarRegistry,
}

impl Extractor {
    pub fn new(registry: GrammarRegistry) -> Self {
        Self { registry }
    }

    /// Extractor with every bundled language registered
    pub fn with_all_languages() -> Self {
        Self::new(create_full_registry())
    }

    pub fn extract_source(&self, source: &str, language: LanguageId) -> Result<Hierarchy> {
        let rules = self
            .registry
            .get(language)
            .ok_or_else(|| ExtractError::UnsupportedLanguage(language.name().to_string()))?;
        extract(source, rules)
    }

    /// Dispatch on the file extension
    pub fn extract_file(&self, file_name: &str, source: &str) -> Result<Hierarchy> {
        let ext = file_name.rsplit('.').next().unwrap_or("");
        let rules = self
            .registry
            .get_by_extension(ext)
            .ok_or_else(|| ExtractError::UnsupportedLanguage(file_name.to_string()))?;
        extract(source, rules)
    }

    /// Extract many files in parallel. Results keep input order; each
    /// file succeeds or fails on its own.
    pub fn extract_batch(&self, files: &[(String, String)]) -> Vec<Result<Hierarchy>> {
        info!("extracting {} files", files.len());
        files
            .par_iter()
            .map(|(name, source)| self.extract_file(name, source))
            .collect()
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::with_all_languages()
    }
}
