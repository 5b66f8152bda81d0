//! Storage for the nodes of a [`CheckpointStack`](crate::CheckpointStack), backed by a
//! [`Slab`]. Nodes never move once inserted, and are addressed by a [`NodeIdx`] instead
//! of a pointer. Every insertion is stamped with a fresh generation: once a node is
//! removed, every index pointing to it stops resolving, even if the slab hands the same
//! key to another node later on. This is what allows remember points to keep a weak
//! reference to a node.

use slab::Slab;

/// Identity of a node. Two indexes are equal if and only if they designate the same
/// node: the value stored inside the node plays no part in it.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct NodeIdx {
    key: usize,
    generation: u64,
}

/// One element of the chain, with links to its neighbours
#[derive(Debug)]
pub struct Node<T> {
    pub value: T,
    pub prev: Option<NodeIdx>,
    pub next: Option<NodeIdx>,
    generation: u64,
}

impl<T> Node<T> {
    pub fn new(value: T) -> Node<T> {
        Node {
            value,
            prev: None,
            next: None,
            generation: 0,
        }
    }
}

#[derive(Debug)]
pub struct Arena<T> {
    nodes: Slab<Node<T>>,
    generation: u64,
}

impl<T> Default for Arena<T> {
    fn default() -> Arena<T> {
        Arena {
            nodes: Slab::new(),
            generation: 0,
        }
    }
}

impl<T> Arena<T> {
    pub fn new() -> Arena<T> {
        Arena::default()
    }

    /// Store a node and return its identity
    pub fn insert(&mut self, mut node: Node<T>) -> NodeIdx {
        self.generation += 1;
        node.generation = self.generation;

        NodeIdx {
            key: self.nodes.insert(node),
            generation: self.generation,
        }
    }

    /// Take a node out of the arena. Stale indexes yield `None` and leave the arena
    /// untouched
    pub fn remove(&mut self, idx: NodeIdx) -> Option<Node<T>> {
        if !self.contains(idx) {
            return None;
        }

        self.nodes.try_remove(idx.key)
    }

    pub fn get(&self, idx: NodeIdx) -> Option<&Node<T>> {
        self.nodes
            .get(idx.key)
            .filter(|node| node.generation == idx.generation)
    }

    pub fn get_mut(&mut self, idx: NodeIdx) -> Option<&mut Node<T>> {
        self.nodes
            .get_mut(idx.key)
            .filter(|node| node.generation == idx.generation)
    }

    /// Does the index still designate a live node
    pub fn contains(&self, idx: NodeIdx) -> bool {
        self.get(idx).is_some()
    }

    /// Amount of live nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_insert_and_get() {
        let mut a = Arena::new();
        let idx = a.insert(Node::new('a'));

        assert_eq!(a.get(idx).unwrap().value, 'a');
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn t_remove_invalidates_index() {
        let mut a = Arena::new();
        let idx = a.insert(Node::new(1));

        assert_eq!(a.remove(idx).unwrap().value, 1);
        assert!(!a.contains(idx));
        assert!(a.remove(idx).is_none());
        assert!(a.is_empty());
    }

    #[test]
    fn t_reused_key_has_new_identity() {
        let mut a = Arena::new();
        let old = a.insert(Node::new(1));
        a.remove(old);

        let new = a.insert(Node::new(1));

        assert_eq!(old.key, new.key);
        assert_ne!(old, new);
        assert!(a.get(old).is_none());
        assert!(a.remove(old).is_none());
        assert_eq!(a.get(new).unwrap().value, 1);
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn t_equal_values_distinct_nodes() {
        let mut a = Arena::new();
        let first = a.insert(Node::new("same"));
        let second = a.insert(Node::new("same"));

        assert_ne!(first, second);
    }

    #[test]
    fn t_get_mut_links() {
        let mut a = Arena::new();
        let low = a.insert(Node::new(0));
        let high = a.insert(Node::new(1));

        a.get_mut(low).unwrap().next = Some(high);
        a.get_mut(high).unwrap().prev = Some(low);

        assert_eq!(a.get(low).unwrap().next, Some(high));
        assert_eq!(a.get(high).unwrap().prev, Some(low));
    }
}
