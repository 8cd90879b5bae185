//! Doubly linked list implemented by `Vec`.
//!
//! Nodes live in a backing vector and are linked by index rather than by
//! pointer.  The list exclusively owns every payload through the vector;
//! back links are plain indices used only for `O(1)` relinking during
//! removal.  Slots of removed nodes are recycled through a free chain, and
//! trailing free slots are popped off the vector so that draining the list
//! also releases its storage.

use std::fmt::{self, Debug, Display};
use std::iter;

/// Null link.
const NIL: usize = usize::MAX;

#[derive(Clone)]
pub struct LinkedList<T> {
    nodes: Vec<Node<T>>,
    head: usize,
    tail: usize,
    // Head of the free chain, which is singly linked through `next`.
    free: usize,
    len: usize,
}

#[derive(Clone, Debug)]
struct Node<T> {
    value: Option<T>,
    prev: usize,
    next: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: NIL,
            tail: NIL,
            free: NIL,
            len: 0,
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for LinkedList<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Display for LinkedList<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for value in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl<T> PartialEq for LinkedList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for LinkedList<T> where T: Eq {}

impl<T> LinkedList<T> {
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Inserts `value` at the head of the list.
    pub fn insert_front(&mut self, value: T) {
        let new = self.new_node(value);
        self.nodes[new].prev = NIL;
        self.nodes[new].next = self.head;
        if self.head == NIL {
            self.tail = new;
        } else {
            self.nodes[self.head].prev = new;
        }
        self.head = new;
        self.len += 1;
    }

    /// Scans from head to tail and returns the first payload equal to
    /// `target`.
    pub fn find(&self, target: &T) -> Option<&T>
    where
        T: PartialEq,
    {
        let i = self.find_node(target);
        (i != NIL).then(|| self.get(i))
    }

    /// Removes the first payload equal to `target`, reporting whether a
    /// removal occurred.  The list is unchanged when `target` is absent.
    pub fn remove(&mut self, target: &T) -> bool
    where
        T: PartialEq,
    {
        let i = self.find_node(target);
        if i == NIL {
            return false;
        }
        self.unlink(i);
        self.len -= 1;
        self.free_node(i);
        true
    }

    /// Formats the payloads from head to tail, joined by `", "`.  An empty
    /// list yields the empty string.
    pub fn to_display_string(&self) -> String
    where
        T: Display,
    {
        self.to_string()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = NIL;
        self.tail = NIL;
        self.free = NIL;
        self.len = 0;
    }

    //
    // Helpers
    //

    fn iter(&self) -> impl Iterator<Item = &T> {
        let mut i = self.head;
        iter::from_fn(move || {
            (i != NIL).then(|| {
                let value = self.get(i);
                i = self.nodes[i].next;
                value
            })
        })
    }

    fn get(&self, i: usize) -> &T {
        self.nodes[i].value.as_ref().unwrap()
    }

    fn find_node(&self, target: &T) -> usize
    where
        T: PartialEq,
    {
        let mut i = self.head;
        while i != NIL {
            if self.get(i) == target {
                return i;
            }
            i = self.nodes[i].next;
        }
        NIL
    }

    /// Reuses a free slot when available, or grows the vector.
    ///
    /// NOTE: The `prev` and `next` of the returned node are not initialized.
    fn new_node(&mut self, value: T) -> usize {
        if self.free == NIL {
            self.nodes.push(Node::new(value));
            self.nodes.len() - 1
        } else {
            let slot = self.free;
            self.free = self.nodes[slot].next;
            self.nodes[slot].assign(value);
            slot
        }
    }

    /// Relinks the neighbors of node `i` around it, updating `head` and
    /// `tail` when `i` is at an end.  `i` itself is left untouched.
    fn unlink(&mut self, i: usize) {
        debug_assert!(!self.nodes[i].is_free());
        let (prev, next) = (self.nodes[i].prev, self.nodes[i].next);
        if prev == NIL {
            self.head = next;
        } else {
            self.nodes[prev].next = next;
        }
        if next == NIL {
            self.tail = prev;
        } else {
            self.nodes[next].prev = prev;
        }
    }

    /// Drops the value of node `i` and returns the slot to the free chain.
    fn free_node(&mut self, i: usize) {
        self.nodes[i].release();
        self.nodes[i].prev = NIL;
        self.nodes[i].next = self.free;
        self.free = i;
        self.cleanup_free_chain();
    }

    /// Pops free slots off the end of `nodes`.
    fn cleanup_free_chain(&mut self) {
        while self.nodes.last().map(Node::is_free).unwrap_or(false) {
            let last = self.nodes.len() - 1;
            self.unlink_free(last);
            self.nodes.pop();
        }
    }

    fn unlink_free(&mut self, slot: usize) {
        if self.free == slot {
            self.free = self.nodes[slot].next;
        } else {
            let mut i = self.free;
            while self.nodes[i].next != slot {
                i = self.nodes[i].next;
            }
            self.nodes[i].next = self.nodes[slot].next;
        }
    }
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value: Some(value),
            prev: NIL,
            next: NIL,
        }
    }

    fn is_free(&self) -> bool {
        self.value.is_none()
    }

    fn assign(&mut self, value: T) {
        assert!(self.is_free());
        self.value = Some(value);
    }

    fn release(&mut self) {
        assert!(!self.is_free());
        self.value = None;
    }
}
