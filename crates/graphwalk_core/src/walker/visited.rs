//! Identity-keyed visited set.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::{NodeId, NodeRef};

/// Set of nodes already processed, keyed by identity.
///
/// The set holds a handle to every member, so a member's allocation (and
/// therefore its [`NodeId`]) cannot be reused while it is in the set.
#[derive(Default)]
pub struct VisitedSet {
    nodes: HashMap<NodeId, NodeRef>,
}

impl VisitedSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `node` is a member.
    #[inline]
    pub fn contains(&self, node: &NodeRef) -> bool {
        self.nodes.contains_key(&NodeId::of(node))
    }

    /// Adds `node`, returning false if it was already a member.
    pub fn insert(&mut self, node: &NodeRef) -> bool {
        let id = NodeId::of(node);
        if self.nodes.contains_key(&id) {
            return false;
        }
        self.nodes.insert(id, Rc::clone(node));
        true
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Removes every member.
    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}

impl fmt::Debug for VisitedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisitedSet")
            .field("len", &self.nodes.len())
            .finish()
    }
}
