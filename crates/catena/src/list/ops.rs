use core::{
    fmt::{self, Display, Write},
    mem,
};

use tracing::trace;

use super::{next_list_id, List};

impl List {
    /// Counts the nodes. This walks the chain every time.
    pub fn length(&self) -> usize {
        self.chain().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Slots held by the list, including vacant ones kept for reuse.
    pub fn allocated(&self) -> usize {
        self.arena.slot_count()
    }

    /// Reverses the chain in place.
    ///
    /// Nodes keep their slots, so handles stay valid and keep naming the
    /// same payloads.
    pub fn reverse(&mut self) {
        let mut prev = None;
        let mut cur = self.head.take();

        while let Some(index) = cur {
            let node = self.arena.node_mut(index);
            cur = mem::replace(&mut node.next, prev);
            prev = Some(index);
        }

        self.head = prev;
    }

    /// Releases every node and leaves the list empty.
    ///
    /// Handles issued before the call stop resolving.
    pub fn destroy(&mut self) {
        let released = self.arena.live();
        self.arena.clear();
        self.head = None;
        self.id = next_list_id();
        trace!(released, "destroyed list");
    }

    /// Renders the chain as `1 -> 2 -> END`.
    pub fn write_chain<W: Write>(&self, w: &mut W) -> fmt::Result {
        for index in self.chain() {
            write!(w, "{} -> ", self.arena.node(index).value)?;
        }
        w.write_str("END")
    }

    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("{self}");
    }
}

impl Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_chain(f)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use crate::List;

    #[test]
    fn empty_renders_end_marker() {
        assert_eq!(List::new().to_string(), "END");
    }

    #[test]
    fn write_chain_appends() {
        let mut list = List::new();
        list.insert_at_tail(4).unwrap();
        list.insert_at_tail(-2).unwrap();

        let mut out = String::from("> ");
        list.write_chain(&mut out).unwrap();
        assert_eq!(out, "> 4 -> -2 -> END");
    }

    #[test]
    fn destroy_gives_storage_back() {
        let mut list = List::try_with_capacity(4).unwrap();
        for v in 0..4 {
            list.insert_at_tail(v).unwrap();
        }
        list.destroy();
        assert_eq!(list.allocated(), 0);
        assert_eq!(list.arena.live(), 0);
    }

    #[test]
    fn reverse_single() {
        let mut list = List::new();
        let only = list.insert_at_head(3).unwrap();
        list.reverse();
        assert_eq!(list.head(), Some(only));
        assert_eq!(list.successor(only), None);
    }
}
