use super::{List, NodeRef};
use crate::Value;

impl List {
    /// The first node holding `target`.
    pub fn find_by_value(&self, target: Value) -> Option<NodeRef> {
        self.chain()
            .find(|&index| self.arena.node(index).value == target)
            .map(|index| self.handle(index))
    }

    /// The node at 0-based position `index`. Negative indices find nothing.
    pub fn find_by_index(&self, index: isize) -> Option<NodeRef> {
        if index < 0 {
            return None;
        }
        self.nth(index as usize).map(|index| self.handle(index))
    }

    pub(super) fn nth(&self, n: usize) -> Option<usize> {
        self.chain().nth(n)
    }
}
