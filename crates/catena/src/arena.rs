//! Slot storage for list nodes.
//!
//! Nodes live in a `Vec` of slots and name their successor by slot index.
//! Freed slots are threaded onto a free chain and handed out again by later
//! insertions. Each slot carries a generation that is bumped whenever the
//! slot is vacated, so an index captured before a removal can be told apart
//! from whatever node reuses the slot afterwards.

use alloc::vec::Vec;

use crate::{error::ListResult, Value};

/// Bumped each time a slot is vacated. Wide enough that a slot cannot cycle
/// back to an old value.
pub(crate) type Generation = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Node {
    pub value: Value,
    pub next: Option<usize>,
}

#[derive(Debug)]
enum Slot {
    Occupied { generation: Generation, node: Node },
    Vacant { generation: Generation, next_free: Option<usize> },
}

#[derive(Debug, Default)]
pub(crate) struct Arena {
    slots: Vec<Slot>,
    free: Option<usize>,
    live: usize,
}

impl Arena {
    #[inline]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            live: 0,
        }
    }

    /// Creates an arena with room for `capacity` nodes, reporting an
    /// allocation failure instead of aborting.
    pub fn try_with_capacity(capacity: usize) -> ListResult<Self> {
        let mut arena = Self::new();
        arena.slots.try_reserve(capacity)?;
        Ok(arena)
    }

    /// Stores `node` and returns its slot index.
    ///
    /// Growth goes through `try_reserve`, so running out of memory is
    /// reported instead of aborting.
    pub fn try_insert(&mut self, node: Node) -> ListResult<usize> {
        if let Some(index) = self.free {
            let Slot::Vacant {
                generation,
                next_free,
            } = self.slots[index]
            else {
                unreachable!("occupied slot {index} on the free chain");
            };

            self.free = next_free;
            self.slots[index] = Slot::Occupied { generation, node };
            self.live += 1;
            return Ok(index);
        }

        self.slots.try_reserve(1)?;
        let index = self.slots.len();
        self.slots.push(Slot::Occupied {
            generation: 0,
            node,
        });
        self.live += 1;
        Ok(index)
    }

    /// Vacates the slot at `index`, returning the node it held.
    pub fn remove(&mut self, index: usize) -> Option<Node> {
        let slot = self.slots.get_mut(index)?;
        let Slot::Occupied { generation, node } = *slot else {
            return None;
        };

        *slot = Slot::Vacant {
            generation: generation.wrapping_add(1),
            next_free: self.free,
        };
        self.free = Some(index);
        self.live -= 1;
        Some(node)
    }

    pub fn get(&self, index: usize, generation: Generation) -> Option<&Node> {
        match self.slots.get(index)? {
            Slot::Occupied {
                generation: g,
                node,
            } if *g == generation => Some(node),
            _ => None,
        }
    }

    /// The generation of an occupied slot.
    pub fn generation(&self, index: usize) -> Option<Generation> {
        match self.slots.get(index)? {
            Slot::Occupied { generation, .. } => Some(*generation),
            Slot::Vacant { .. } => None,
        }
    }

    /// The node at `index`. The index must come from a live link.
    #[inline]
    pub fn node(&self, index: usize) -> &Node {
        match &self.slots[index] {
            Slot::Occupied { node, .. } => node,
            Slot::Vacant { .. } => unreachable!("link to vacant slot {index}"),
        }
    }

    #[inline]
    pub fn node_mut(&mut self, index: usize) -> &mut Node {
        match &mut self.slots[index] {
            Slot::Occupied { node, .. } => node,
            Slot::Vacant { .. } => unreachable!("link to vacant slot {index}"),
        }
    }

    /// Number of occupied slots.
    pub fn live(&self) -> usize {
        self.live
    }

    /// Number of slots ever handed out, occupied or vacant.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Drops every slot and gives the backing storage back.
    pub fn clear(&mut self) {
        self.slots = Vec::new();
        self.free = None;
        self.live = 0;
    }
}
