//! Open-entity stack
//!
//! Tracks the entities whose bodies enclose the walker's current
//! position. The stack is the single source of parent linkage: the top
//! frame is the parent of whatever is emitted next, and the frame names
//! yield qualified names.

use crate::shared::models::EntityId;

#[derive(Debug, Clone)]
struct Frame {
    id: EntityId,
    name: String,
}

/// Stack of currently-open scope-owning entities
#[derive(Debug, Clone, Default)]
pub struct OpenEntityStack {
    frames: Vec<Frame>,
}

impl OpenEntityStack {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Open a scope owned by `id`
    pub fn push(&mut self, id: EntityId, name: impl Into<String>) {
        self.frames.push(Frame {
            id,
            name: name.into(),
        });
    }

    /// Close the innermost scope
    pub fn pop(&mut self) -> Option<EntityId> {
        self.frames.pop().map(|f| f.id)
    }

    /// Entity that owns the innermost open scope, if any
    pub fn current(&self) -> Option<EntityId> {
        self.frames.last().map(|f| f.id)
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Qualified name for `name` under the open scopes
    pub fn qualified(&self, name: &str) -> String {
        if self.frames.is_empty() {
            name.to_string()
        } else {
            let mut out = String::new();
            for frame in &self.frames {
                out.push_str(&frame.name);
                out.push('.');
            }
            out.push_str(name);
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_parent_linkage() {
        let mut stack = OpenEntityStack::new();
        assert_eq!(stack.current(), None);

        stack.push(EntityId(0), "Cylinder");
        assert_eq!(stack.current(), Some(EntityId(0)));

        stack.push(EntityId(3), "Inner");
        assert_eq!(stack.current(), Some(EntityId(3)));
        assert_eq!(stack.depth(), 2);

        assert_eq!(stack.pop(), Some(EntityId(3)));
        assert_eq!(stack.current(), Some(EntityId(0)));
    }

    #[test]
    fn test_stack_qualified_names() {
        let mut stack = OpenEntityStack::new();
        assert_eq!(stack.qualified("Circle"), "Circle");

        stack.push(EntityId(0), "Circle");
        assert_eq!(stack.qualified("getArea"), "Circle.getArea");

        stack.push(EntityId(1), "Inner");
        assert_eq!(stack.qualified("field"), "Circle.Inner.field");
    }
}
