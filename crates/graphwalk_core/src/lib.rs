//! # graphwalk_core
//!
//! Type-filtered walker for in-memory object graphs.
//!
//! A [`GraphWalker`] descends depth-first through an arbitrary graph of
//! [`Node`]s, applies a transformation to every node that conforms to a
//! [`TargetType`], and collects the results in a map keyed by the node's
//! path (`Root.property[index]...`).
//!
//! ## Architecture
//!
//! - Nodes are shared through [`NodeRef`] (`Rc<dyn Node>`), so graphs may
//!   contain shared sub-graphs and cycles
//! - Node identity is the `Rc` allocation, never value equality
//! - Properties and collection elements are discovered through a
//!   [`Reflector`]; the default one asks each node to describe itself
//! - Descent uses an explicit work stack, so graph depth is bounded by heap
//!   memory rather than the call stack
//!
//! ## Example
//!
//! ```rust
//! use std::rc::Rc;
//! use graphwalk_core::{GraphWalker, Node, NodeRef, Property, ReflectError};
//!
//! struct Invoice {
//!     lines: Rc<Vec<NodeRef>>,
//! }
//!
//! struct Line {
//!     amount: u32,
//! }
//!
//! impl Node for Invoice {
//!     fn properties(&self) -> Result<Vec<Property>, ReflectError> {
//!         Ok(vec![Property::node("lines", &self.lines)])
//!     }
//! }
//!
//! impl Node for Line {}
//!
//! let lines: Vec<NodeRef> = vec![Rc::new(Line { amount: 10 }), Rc::new(Line { amount: 32 })];
//! let invoice: NodeRef = Rc::new(Invoice { lines: Rc::new(lines) });
//!
//! let mut walker = GraphWalker::typed(|line: &Line| Some(line.amount));
//! let results = walker.walk(Some(&invoice))?.results();
//!
//! assert_eq!(results.len(), 2);
//! assert_eq!(results.get("Invoice.lines[0]"), Some(&10));
//! assert_eq!(results.get("Invoice.lines[1]"), Some(&32));
//! # Ok::<(), graphwalk_core::TraversalError>(())
//! ```

mod config;
mod error;
mod node;
mod path;
mod reflect;
mod target;
pub mod walker;

pub use config::WalkConfig;
pub use error::{ConfigError, ReflectError, TraversalError};
pub use node::{AsAny, Node, NodeId, NodeRef, Property, simple_type_name};
pub use reflect::{Reflector, SelfDescribing};
pub use target::TargetType;
pub use walker::{GraphWalker, VisitedSet, WalkStats, WalkerBuilder};
