//! Target type descriptors.
//!
//! A [`TargetType<T>`] decides whether a node conforms to `T` and, when it
//! does, hands out the node as `&T`. Conformance is declared explicitly:
//!
//! - [`TargetType::of`] matches one concrete type
//! - [`TargetType::interface`] + [`TargetType::implemented_by`] matches every
//!   registered implementor of a trait
//! - [`TargetType::any`] matches every node
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use graphwalk_core::{Node, NodeRef, TargetType};
//!
//! trait Shape {
//!     fn area(&self) -> f64;
//! }
//!
//! struct Square(f64);
//! struct Circle(f64);
//!
//! impl Shape for Square {
//!     fn area(&self) -> f64 { self.0 * self.0 }
//! }
//! impl Shape for Circle {
//!     fn area(&self) -> f64 { 3.0 * self.0 * self.0 }
//! }
//! impl Node for Square {}
//! impl Node for Circle {}
//!
//! let shapes = TargetType::<dyn Shape>::interface("Shape")
//!     .implemented_by::<Square>(|square| square)
//!     .implemented_by::<Circle>(|circle| circle);
//!
//! let node: NodeRef = Rc::new(Square(2.0));
//! let shape = shapes.cast(&*node).expect("Square is a Shape");
//! assert_eq!(shape.area(), 4.0);
//!
//! let text: NodeRef = Rc::new(String::from("not a shape"));
//! assert!(!shapes.matches(&*text));
//! ```

use std::any::TypeId;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use crate::node::{Node, simple_type_name};

/// Views a node as a `&T` when it conforms.
trait Caster<T: ?Sized> {
    fn cast<'n>(&self, node: &'n (dyn Node + 'static)) -> Option<&'n T>;
}

/// Concrete-type conformance.
struct Downcast<C>(PhantomData<fn() -> C>);

impl<C: Node> Caster<C> for Downcast<C> {
    #[inline]
    fn cast<'n>(&self, node: &'n (dyn Node + 'static)) -> Option<&'n C> {
        node.as_any().downcast_ref::<C>()
    }
}

/// Trait-object conformance for one implementing type.
struct Upcast<C, T: ?Sized> {
    upcast: fn(&C) -> &T,
}

impl<C: Node, T: ?Sized + 'static> Caster<T> for Upcast<C, T> {
    #[inline]
    fn cast<'n>(&self, node: &'n (dyn Node + 'static)) -> Option<&'n T> {
        node.as_any().downcast_ref::<C>().map(self.upcast)
    }
}

/// Universal base type: every node conforms.
struct Universal;

impl Caster<dyn Node> for Universal {
    #[inline]
    fn cast<'n>(&self, node: &'n (dyn Node + 'static)) -> Option<&'n (dyn Node + 'static)> {
        Some(node)
    }
}

/// Type descriptor a walker filters nodes against.
pub struct TargetType<T: ?Sized + 'static> {
    name: Cow<'static, str>,
    casters: HashMap<TypeId, Box<dyn Caster<T>>>,
    universal: Option<Box<dyn Caster<T>>>,
}

impl<C: Node> TargetType<C> {
    /// Matches nodes whose runtime type is exactly `C`.
    pub fn of() -> Self {
        let mut casters: HashMap<TypeId, Box<dyn Caster<C>>> = HashMap::new();
        casters.insert(TypeId::of::<C>(), Box::new(Downcast::<C>(PhantomData)));
        Self {
            name: Cow::Borrowed(simple_type_name(std::any::type_name::<C>())),
            casters,
            universal: None,
        }
    }
}

impl TargetType<dyn Node> {
    /// Matches every node.
    pub fn any() -> Self {
        Self {
            name: Cow::Borrowed("Node"),
            casters: HashMap::new(),
            universal: Some(Box::new(Universal)),
        }
    }
}

impl<T: ?Sized + 'static> TargetType<T> {
    /// Starts an interface descriptor with no implementors.
    ///
    /// Register implementing types with [`implemented_by`](Self::implemented_by).
    pub fn interface(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            casters: HashMap::new(),
            universal: None,
        }
    }

    /// Declares that nodes of type `C` conform, viewed through `upcast`.
    ///
    /// Registering the same type twice keeps the last view.
    pub fn implemented_by<C: Node>(mut self, upcast: fn(&C) -> &T) -> Self {
        self.casters
            .insert(TypeId::of::<C>(), Box::new(Upcast { upcast }));
        self
    }

    /// Descriptor name, for logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of concrete types registered as conforming.
    pub fn implementor_count(&self) -> usize {
        self.casters.len()
    }

    /// Views `node` as `&T` if it conforms.
    pub fn cast<'n>(&self, node: &'n (dyn Node + 'static)) -> Option<&'n T> {
        if let Some(universal) = &self.universal {
            return universal.cast(node);
        }
        self.casters
            .get(&node.as_any().type_id())
            .and_then(|caster| caster.cast(node))
    }

    /// Returns true if `node` conforms.
    pub fn matches(&self, node: &(dyn Node + 'static)) -> bool {
        self.cast(node).is_some()
    }
}

impl<T: ?Sized + 'static> fmt::Debug for TargetType<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetType")
            .field("name", &self.name)
            .field("implementors", &self.casters.len())
            .field("universal", &self.universal.is_some())
            .finish()
    }
}
