use tracing::{trace, warn};

use super::List;
use crate::{
    error::{ListErrorKind, ListResult},
    Value,
};

impl List {
    /// Unlinks the first node holding `target` and returns its payload.
    ///
    /// A missing value is not an error; the list is left as it was.
    pub fn delete_by_value(&mut self, target: Value) -> Option<Value> {
        let mut prev = None;
        let mut cur = self.head;

        while let Some(index) = cur {
            let node = *self.arena.node(index);
            if node.value == target {
                return Some(self.unlink(prev, index));
            }
            prev = Some(index);
            cur = node.next;
        }

        None
    }

    /// Unlinks the node at position `index` and returns its payload.
    ///
    /// Negative indices and empty lists are silently ignored. An index past
    /// the end of a non-empty list is reported as `IndexOutOfBounds`.
    pub fn delete_by_index(&mut self, index: isize) -> ListResult<Option<Value>> {
        let Some(head) = self.head else {
            return Ok(None);
        };
        if index < 0 {
            return Ok(None);
        }
        if index == 0 {
            return Ok(Some(self.unlink(None, head)));
        }

        let target = self
            .nth(index as usize - 1)
            .and_then(|prev| Some((prev, self.arena.node(prev).next?)));
        let Some((prev, target)) = target else {
            warn!(index, "index out of bounds");
            return Err(ListErrorKind::IndexOutOfBounds.into());
        };

        Ok(Some(self.unlink(Some(prev), target)))
    }

    /// Detaches `index` from the chain and frees its slot.
    fn unlink(&mut self, prev: Option<usize>, index: usize) -> Value {
        let next = self.arena.node(index).next;
        match prev {
            Some(prev) => self.arena.node_mut(prev).next = next,
            None => self.head = next,
        }

        let value = match self.arena.remove(index) {
            Some(node) => node.value,
            None => unreachable!("unlinked vacant slot {index}"),
        };
        trace!(value, "released node");
        value
    }
}
