//! Structural reflection.
//!
//! A [`Reflector`] is the walker's only view of a node's structure. Swap it
//! out to walk types that cannot (or should not) implement [`Node`]'s
//! reflection methods themselves, or to hide properties from a walk.

use crate::{Node, NodeRef, Property, ReflectError};

/// Lists the readable properties and collection elements of a node.
pub trait Reflector {
    /// Readable properties of `node`, in a stable order.
    fn properties(&self, node: &dyn Node) -> Result<Vec<Property>, ReflectError>;

    /// Ordered elements of `node` when it is a collection.
    fn elements(&self, node: &dyn Node) -> Option<Vec<NodeRef>>;

    /// Returns true if `node` is a collection.
    fn is_collection(&self, node: &dyn Node) -> bool {
        self.elements(node).is_some()
    }
}

/// Default reflector: every node describes itself through [`Node`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SelfDescribing;

impl Reflector for SelfDescribing {
    #[inline]
    fn properties(&self, node: &dyn Node) -> Result<Vec<Property>, ReflectError> {
        node.properties()
    }

    #[inline]
    fn elements(&self, node: &dyn Node) -> Option<Vec<NodeRef>> {
        node.elements()
    }
}

impl<R: Reflector + ?Sized> Reflector for &R {
    fn properties(&self, node: &dyn Node) -> Result<Vec<Property>, ReflectError> {
        (**self).properties(node)
    }

    fn elements(&self, node: &dyn Node) -> Option<Vec<NodeRef>> {
        (**self).elements(node)
    }

    fn is_collection(&self, node: &dyn Node) -> bool {
        (**self).is_collection(node)
    }
}
