//! Tree-sitter parser wrapper
//!
//! This is where the tree-sitter dependency lives. Parsing either yields
//! a fully well-formed tree or fails; a tree containing ERROR or MISSING
//! nodes is rejected so that callers never see a partial hierarchy.

use tracing::debug;
use tree_sitter::{Node as TSNode, Parser as TSParser, Tree};

use crate::features::extraction::ports::GrammarRules;
use crate::shared::models::{ExtractError, Result};

/// Parses source text under a supplied grammar rule set
pub struct SourceParser<'r> {
    rules: &'r dyn GrammarRules,
}

impl<'r> SourceParser<'r> {
    pub fn new(rules: &'r dyn GrammarRules) -> Self {
        Self { rules }
    }

    /// Parse source into a concrete syntax tree
    pub fn parse(&self, source: &str) -> Result<Tree> {
        let mut parser = TSParser::new();
        parser
            .set_language(&self.rules.language())
            .map_err(|e| ExtractError::Grammar(e.to_string()))?;

        debug!(
            "parsing {} bytes as {}",
            source.len(),
            self.rules.language_id().name()
        );

        let tree = parser.parse(source, None).ok_or_else(|| ExtractError::Parse {
            message: "tree-sitter produced no tree".to_string(),
            line: 0,
            col: 0,
        })?;

        if let Some(bad) = first_syntax_error(&tree.root_node()) {
            let pos = bad.start_position();
            let message = if bad.is_missing() {
                format!("missing {:?}", bad.kind())
            } else {
                format!("syntax error near {:?}", bad.kind())
            };
            return Err(ExtractError::Parse {
                message,
                line: pos.row as u32 + 1,
                col: pos.column as u32,
            });
        }

        Ok(tree)
    }
}

/// First ERROR or MISSING node in the tree, pre-order
fn first_syntax_error<'t>(node: &TSNode<'t>) -> Option<TSNode<'t>> {
    if !node.has_error() {
        return None;
    }
    if node.is_error() || node.is_missing() {
        return Some(*node);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_syntax_error(&child) {
            return Some(found);
        }
    }
    None
}
