use alloc::vec::Vec;
use core::{
    fmt::{self, Debug},
    sync::atomic::{AtomicU64, Ordering},
};

use tracing::warn;

use crate::{
    arena::{Arena, Generation, Node},
    error::{ListErrorKind, ListResult},
    Value,
};

mod insert;
mod ops;
mod remove;
mod search;

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

fn next_list_id() -> u64 {
    NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed)
}

/// A handle to a node linked into a [`List`].
///
/// Handles are plain copies and do not borrow the list. A handle stops
/// resolving once its node is deleted or the list is destroyed, and a handle
/// issued by one list never resolves against another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef {
    list: u64,
    index: usize,
    generation: Generation,
}

/// A singly linked list of [`Value`]s.
pub struct List {
    arena: Arena,
    head: Option<usize>,
    id: u64,
}

impl List {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            head: None,
            id: next_list_id(),
        }
    }

    /// Creates an empty list with room for `capacity` nodes.
    ///
    /// Fails with `AllocationFailure` if the storage cannot be reserved.
    pub fn try_with_capacity(capacity: usize) -> ListResult<Self> {
        let arena = Arena::try_with_capacity(capacity).map_err(|err| {
            warn!(capacity, "failed to reserve list storage");
            err
        })?;
        Ok(Self {
            arena,
            head: None,
            id: next_list_id(),
        })
    }

    #[inline]
    pub fn head(&self) -> Option<NodeRef> {
        self.head.map(|index| self.handle(index))
    }

    /// The payload of `node`, or `None` if the handle no longer resolves.
    pub fn value(&self, node: NodeRef) -> Option<Value> {
        self.get(node).map(|n| n.value)
    }

    pub fn successor(&self, node: NodeRef) -> Option<NodeRef> {
        let next = self.get(node)?.next?;
        Some(self.handle(next))
    }

    pub fn set_value(&mut self, node: NodeRef, value: Value) -> ListResult<()> {
        let Some(index) = self.resolve(node) else {
            return Err(ListErrorKind::NodeNotFound.into());
        };
        self.arena.node_mut(index).value = value;
        Ok(())
    }

    /// Collects the payloads from head to tail.
    pub fn values(&self) -> Vec<Value> {
        self.chain().map(|index| self.arena.node(index).value).collect()
    }

    fn get(&self, node: NodeRef) -> Option<&Node> {
        if node.list != self.id {
            return None;
        }
        self.arena.get(node.index, node.generation)
    }

    /// Maps a handle back to its slot if it names a live node of this list.
    fn resolve(&self, node: NodeRef) -> Option<usize> {
        self.get(node).map(|_| node.index)
    }

    fn handle(&self, index: usize) -> NodeRef {
        let generation = self
            .arena
            .generation(index)
            .unwrap_or_else(|| unreachable!("handle requested for vacant slot {index}"));
        NodeRef {
            list: self.id,
            index,
            generation,
        }
    }

    fn alloc(&mut self, value: Value, next: Option<usize>) -> ListResult<usize> {
        match self.arena.try_insert(Node { value, next }) {
            Ok(index) => Ok(index),
            Err(err) => {
                warn!(value, live = self.arena.live(), "failed to allocate list node");
                Err(err)
            }
        }
    }

    /// Walks slot indices from head to tail.
    fn chain(&self) -> Chain<'_> {
        Chain {
            arena: &self.arena,
            cur: self.head,
        }
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.chain().map(|index| self.arena.node(index).value))
            .finish()
    }
}

struct Chain<'a> {
    arena: &'a Arena,
    cur: Option<usize>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.cur?;
        self.cur = self.arena.node(index).next;
        Some(index)
    }
}
