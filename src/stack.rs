//! A `CheckpointStack` is a last-in-first-out stack on which "remember points" can be
//! registered. A remember point is a label attached to the node which was on top of the
//! stack when the point was registered. Later, everything pushed since that point can
//! be inspected ([`CheckpointStack::peek_till`]) or discarded
//! ([`CheckpointStack::pop_till`]) without touching the values below it.
//!
//! Remember points only keep a weak reference to their node. Popping that node with
//! [`CheckpointStack::pop`] or [`CheckpointStack::pop_all`] does not unregister the
//! label: the point simply becomes stale, and walking the stack towards it exhausts
//! the chain, which is reported as [`ErrKind::CheckpointUnreachable`].

use std::collections::HashMap;

use crate::arena::{Arena, Node, NodeIdx};
use crate::error::{ErrKind, Error, PartialDrain};
use crate::log;

#[derive(Debug)]
pub struct CheckpointStack<T> {
    nodes: Arena<T>,
    bottom: Option<NodeIdx>,
    top: Option<NodeIdx>,
    checkpoints: HashMap<String, NodeIdx>,
}

impl<T> Default for CheckpointStack<T> {
    fn default() -> CheckpointStack<T> {
        CheckpointStack {
            nodes: Arena::new(),
            bottom: None,
            top: None,
            checkpoints: HashMap::new(),
        }
    }
}

impl<T> CheckpointStack<T> {
    /// Create a new empty stack, without any remember point
    pub fn new() -> CheckpointStack<T> {
        CheckpointStack::default()
    }

    /// Push a value on top of the stack
    pub fn push(&mut self, value: T) {
        let mut node = Node::new(value);
        node.prev = self.top;
        let idx = self.nodes.insert(node);

        match self.top.and_then(|top| self.nodes.get_mut(top)) {
            Some(old_top) => old_top.next = Some(idx),
            None => self.bottom = Some(idx),
        }

        self.top = Some(idx);
    }

    fn pop_node(&mut self) -> Option<Node<T>> {
        let node = self.nodes.remove(self.top?)?;

        self.top = node.prev;
        match self.top.and_then(|top| self.nodes.get_mut(top)) {
            Some(new_top) => new_top.next = None,
            None => self.bottom = None,
        }

        Some(node)
    }

    /// Remove the value on top of the stack and return it
    pub fn pop(&mut self) -> Result<T, Error> {
        match self.pop_node() {
            Some(node) => Ok(node.value),
            None => Err(Error::new(ErrKind::EmptyStack)
                .with_msg(String::from("popping from an empty stack"))),
        }
    }

    /// Pop every value, most recently pushed first. Remember points are kept, but
    /// all of them become stale
    pub fn pop_all(&mut self) -> Vec<T> {
        let mut values = Vec::with_capacity(self.len());
        while let Ok(value) = self.pop() {
            values.push(value);
        }

        log!("popped all {} value(s)", values.len());

        values
    }

    /// Register a remember point on the current top of the stack. Registering an
    /// existing label moves it to the current top
    pub fn remember_point(&mut self, label: String) -> Result<(), Error> {
        match self.top {
            Some(top) => {
                log!(checkpoint, "remembering `{}`", label);
                self.checkpoints.insert(label, top);
                Ok(())
            }
            None => Err(Error::new(ErrKind::EmptyStack).with_msg(format!(
                "cannot set remember point `{}` in an empty stack",
                label
            ))),
        }
    }

    fn lookup(&self, label: &str) -> Result<NodeIdx, Error> {
        match self.checkpoints.get(label) {
            Some(idx) => {
                if !self.nodes.contains(*idx) {
                    log!(stale, "remember point `{}` refers to a popped value", label);
                }
                Ok(*idx)
            }
            None => Err(Error::new(ErrKind::CheckpointNotFound)
                .with_msg(format!("remember point `{}` not found", label))),
        }
    }

    fn unreachable(label: &str) -> Error {
        Error::new(ErrKind::CheckpointUnreachable).with_msg(format!(
            "remember point `{}` was never reached",
            label
        ))
    }

    /// Pop every value pushed after the remember point, most recent first. The value
    /// the point was registered on stays on top of the stack, and the point stays
    /// valid.
    ///
    /// If the point is stale, the whole stack gets drained: the drained values are
    /// returned alongside the error.
    pub fn pop_till(&mut self, label: &str) -> Result<Vec<T>, PartialDrain<T>> {
        let stop = self
            .lookup(label)
            .map_err(|e| PartialDrain::new(vec![], e))?;

        let mut values = vec![];
        while let Some(top) = self.top {
            if top == stop {
                log!(checkpoint, "popped {} value(s) till `{}`", values.len(), label);
                return Ok(values);
            }

            match self.pop_node() {
                Some(node) => values.push(node.value),
                None => break,
            }
        }

        log!(stale, "drained {} value(s) looking for `{}`", values.len(), label);

        Err(PartialDrain::new(values, CheckpointStack::<T>::unreachable(label)))
    }

    /// Look at every value pushed after the remember point, most recent first, without
    /// modifying the stack
    pub fn peek_till(&self, label: &str) -> Result<Vec<&T>, Error> {
        let stop = self.lookup(label)?;

        let mut values = vec![];
        let mut current = self.top;
        while let Some(idx) = current {
            if idx == stop {
                return Ok(values);
            }

            match self.nodes.get(idx) {
                Some(node) => {
                    values.push(&node.value);
                    current = node.prev;
                }
                None => break,
            }
        }

        Err(CheckpointStack::<T>::unreachable(label))
    }

    /// Value on top of the stack, if any
    pub fn peek(&self) -> Option<&T> {
        self.top
            .and_then(|top| self.nodes.get(top))
            .map(|node| &node.value)
    }

    /// Value at the bottom of the stack, if any
    pub fn peek_bottom(&self) -> Option<&T> {
        self.bottom
            .and_then(|bottom| self.nodes.get(bottom))
            .map(|node| &node.value)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Has a remember point been registered under this label, stale or not
    pub fn has_checkpoint(&self, label: &str) -> bool {
        self.checkpoints.contains_key(label)
    }

    /// Whether the value a remember point was registered on has been popped since.
    /// Returns `None` for unknown labels
    pub fn is_stale(&self, label: &str) -> Option<bool> {
        self.checkpoints
            .get(label)
            .map(|idx| !self.nodes.contains(*idx))
    }
}
