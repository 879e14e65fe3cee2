//! Graph walking.
//!
//! # Overview
//!
//! - [`GraphWalker`] - Walks a graph and records transformation results by path
//! - [`WalkerBuilder`] - Assembles a walker, failing fast on missing parts
//! - [`VisitedSet`] - Identity-keyed record of processed nodes
//! - [`WalkStats`] - Counters for the most recent walk
//!
//! # Traversal order
//!
//! Descent is depth-first and pre-order. For each node:
//!
//! 1. Stop if the node was already recorded, or if it is already on the
//!    current branch and nothing was recorded since it was entered there
//! 2. Apply the transformation when the node conforms to the target type,
//!    recording a `Some` result under the node's path
//! 3. Descend into collection elements, `path[0]`, `path[1]`, ...
//! 4. Descend into properties, `path.name`, one at a time, for values that
//!    conform to the target type or are collections; all other values are
//!    pruned
//!
//! # Examples
//!
//! ## Cycles are walked once
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use graphwalk_core::{GraphWalker, Node, NodeRef, Property, ReflectError};
//!
//! struct Peer {
//!     name: &'static str,
//!     links: Rc<RefCell<Vec<NodeRef>>>,
//! }
//!
//! impl Node for Peer {
//!     fn properties(&self) -> Result<Vec<Property>, ReflectError> {
//!         Ok(vec![Property::node("links", &self.links)])
//!     }
//! }
//!
//! let a = Rc::new(Peer { name: "a", links: Rc::default() });
//! let b = Rc::new(Peer { name: "b", links: Rc::default() });
//! a.links.borrow_mut().push(b.clone());
//! b.links.borrow_mut().push(a.clone());
//!
//! let root: NodeRef = a.clone();
//! let mut walker = GraphWalker::typed(|peer: &Peer| Some(peer.name));
//! let results = walker.walk(Some(&root))?.results();
//!
//! assert_eq!(results.len(), 2);
//! assert_eq!(results["Peer"], "a");
//! assert_eq!(results["Peer.links[0]"], "b");
//!
//! // Break the cycle so both peers are freed.
//! a.links.borrow_mut().clear();
//! # Ok::<(), graphwalk_core::TraversalError>(())
//! ```

mod builder;
mod graph_walker;
mod visited;

pub use builder::WalkerBuilder;
pub use graph_walker::{GraphWalker, WalkStats};
pub use visited::VisitedSet;
