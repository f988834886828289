use tracing::{trace, warn};

use super::{List, NodeRef};
use crate::{
    error::{ListErrorKind, ListResult},
    Value,
};

impl List {
    pub fn insert_at_head(&mut self, value: Value) -> ListResult<NodeRef> {
        let index = self.alloc(value, self.head)?;
        self.head = Some(index);
        trace!(value, "inserted at head");
        Ok(self.handle(index))
    }

    /// Appends `value`. Walks the whole chain to find the tail.
    pub fn insert_at_tail(&mut self, value: Value) -> ListResult<NodeRef> {
        let last = self.chain().last();
        let index = self.alloc(value, None)?;
        match last {
            Some(last) => self.arena.node_mut(last).next = Some(index),
            None => self.head = Some(index),
        }
        trace!(value, "inserted at tail");
        Ok(self.handle(index))
    }

    /// Inserts `value` so that it ends up at position `index`.
    ///
    /// `index` may be at most the current length. Nothing is allocated when
    /// the index is rejected.
    pub fn insert_at_index(&mut self, index: isize, value: Value) -> ListResult<NodeRef> {
        if index < 0 {
            warn!(index, "index cannot be negative");
            return Err(ListErrorKind::InvalidArgument.into());
        }
        if index == 0 {
            return self.insert_at_head(value);
        }

        let Some(prev) = self.nth(index as usize - 1) else {
            warn!(index, "index out of bounds");
            return Err(ListErrorKind::IndexOutOfBounds.into());
        };

        let next = self.arena.node(prev).next;
        let new = self.alloc(value, next)?;
        self.arena.node_mut(prev).next = Some(new);
        trace!(index, value, "inserted at index");
        Ok(self.handle(new))
    }

    /// Splices `value` in right after `anchor` in constant time.
    ///
    /// The anchor has to be a node of this list. A handle from another list,
    /// or one whose node has been deleted, is rejected with `NodeNotFound`.
    pub fn insert_after(&mut self, anchor: Option<NodeRef>, value: Value) -> ListResult<NodeRef> {
        let Some(anchor) = anchor else {
            warn!("anchor cannot be absent");
            return Err(ListErrorKind::InvalidArgument.into());
        };
        let Some(at) = self.resolve(anchor) else {
            warn!(?anchor, "anchor is not linked into this list");
            return Err(ListErrorKind::NodeNotFound.into());
        };

        let next = self.arena.node(at).next;
        let new = self.alloc(value, next)?;
        self.arena.node_mut(at).next = Some(new);
        trace!(value, "inserted after anchor");
        Ok(self.handle(new))
    }

    /// Splices `value` in right before `anchor`.
    ///
    /// Needs a walk from the head to find the anchor's predecessor.
    pub fn insert_before(&mut self, anchor: Option<NodeRef>, value: Value) -> ListResult<NodeRef> {
        let Some(anchor) = anchor else {
            warn!("anchor cannot be absent");
            return Err(ListErrorKind::InvalidArgument.into());
        };

        let target = self.resolve(anchor);
        if target.is_some() && target == self.head {
            return self.insert_at_head(value);
        }

        let prev = target.and_then(|t| self.predecessor(t));
        let (Some(prev), Some(target)) = (prev, target) else {
            warn!(?anchor, "anchor is not linked into this list");
            return Err(ListErrorKind::NodeNotFound.into());
        };

        let new = self.alloc(value, Some(target))?;
        self.arena.node_mut(prev).next = Some(new);
        trace!(value, "inserted before anchor");
        Ok(self.handle(new))
    }

    /// The slot whose successor is `target`.
    fn predecessor(&self, target: usize) -> Option<usize> {
        self.chain()
            .find(|&index| self.arena.node(index).next == Some(target))
    }
}
