//! Node model.
//!
//! Every object a walker can reach implements [`Node`]. A node describes
//! itself explicitly: its simple type name, its ordered elements when it is a
//! collection, and its readable properties.

use std::any::Any;
use std::borrow::Cow;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

use crate::ReflectError;

/// Shared handle to a node in an object graph.
pub type NodeRef = Rc<dyn Node>;

/// Access to the concrete value behind a `dyn Node`.
///
/// Implemented for every `'static` type, so node types never implement it by
/// hand.
pub trait AsAny: Any {
    /// Returns `self` as `&dyn Any` for downcasting.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A traversable object.
///
/// All methods have defaults, so a leaf type only needs `impl Node for Leaf {}`.
///
/// # Example
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use graphwalk_core::{Node, NodeRef, Property, ReflectError};
///
/// struct Team {
///     members: Rc<RefCell<Vec<NodeRef>>>,
///     lead: Option<Rc<Person>>,
/// }
///
/// struct Person;
///
/// impl Node for Team {
///     fn properties(&self) -> Result<Vec<Property>, ReflectError> {
///         Ok(vec![
///             Property::node("members", &self.members),
///             Property::optional("lead", self.lead.as_ref()),
///         ])
///     }
/// }
///
/// impl Node for Person {}
///
/// let team = Team { members: Rc::new(RefCell::new(Vec::new())), lead: None };
/// assert_eq!(team.type_name(), "Team");
/// assert_eq!(team.properties().unwrap().len(), 2);
/// ```
pub trait Node: AsAny + 'static {
    /// Simple runtime type name, used as the root path label.
    ///
    /// Defaults to the Rust type name without module path or generics.
    fn type_name(&self) -> &str {
        simple_type_name(std::any::type_name::<Self>())
    }

    /// Ordered elements when this node is a collection, `None` otherwise.
    fn elements(&self) -> Option<Vec<NodeRef>> {
        None
    }

    /// Externally readable properties, in declaration order.
    fn properties(&self) -> Result<Vec<Property>, ReflectError> {
        Ok(Vec::new())
    }
}

/// Strips the module path and generic arguments from a Rust type name.
///
/// ```rust
/// use graphwalk_core::simple_type_name;
///
/// assert_eq!(simple_type_name("alloc::string::String"), "String");
/// assert_eq!(simple_type_name("alloc::vec::Vec<alloc::rc::Rc<dyn app::Node>>"), "Vec");
/// assert_eq!(simple_type_name("u32"), "u32");
/// ```
pub fn simple_type_name(full: &str) -> &str {
    let base = full.split_once('<').map_or(full, |(head, _)| head);
    base.rsplit("::").next().unwrap_or(base)
}

/// Identity token of a node.
///
/// Derived from the `Rc` allocation address: two handles share a `NodeId`
/// exactly when they point at the same allocation. The token is only stable
/// while some handle keeps the allocation alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the identity of the node behind `node`.
    #[inline]
    pub fn of(node: &NodeRef) -> Self {
        Self(Rc::as_ptr(node).cast::<()>() as usize)
    }
}

/// A readable property of a node.
///
/// The value is read eagerly: `Ok(None)` is an unset property, `Err` is an
/// accessor that failed when invoked.
pub struct Property {
    name: Cow<'static, str>,
    value: Result<Option<NodeRef>, ReflectError>,
}

impl Property {
    /// Creates a property with an optional value.
    pub fn new(name: impl Into<Cow<'static, str>>, value: Option<NodeRef>) -> Self {
        Self {
            name: name.into(),
            value: Ok(value),
        }
    }

    /// Creates a property holding `value`.
    pub fn node<N: Node>(name: impl Into<Cow<'static, str>>, value: &Rc<N>) -> Self {
        let value: NodeRef = Rc::clone(value) as NodeRef;
        Self::new(name, Some(value))
    }

    /// Creates a property that may be unset.
    pub fn optional<N: Node>(name: impl Into<Cow<'static, str>>, value: Option<&Rc<N>>) -> Self {
        let value = value.map(|value| Rc::clone(value) as NodeRef);
        Self::new(name, value)
    }

    /// Creates a property whose accessor failed.
    pub fn failed(name: impl Into<Cow<'static, str>>, error: ReflectError) -> Self {
        Self {
            name: name.into(),
            value: Err(error),
        }
    }

    /// Property name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value read from the accessor.
    pub fn value(&self) -> Result<Option<&NodeRef>, &ReflectError> {
        self.value.as_ref().map(Option::as_ref)
    }

    /// Splits the property into its name and value.
    pub fn into_parts(self) -> (Cow<'static, str>, Result<Option<NodeRef>, ReflectError>) {
        (self.name, self.value)
    }
}

impl fmt::Debug for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match &self.value {
            Ok(Some(node)) => Ok(Some(node.type_name())),
            Ok(None) => Ok(None),
            Err(err) => Err(err),
        };
        f.debug_struct("Property")
            .field("name", &self.name)
            .field("value", &value)
            .finish()
    }
}

impl Node for Vec<NodeRef> {
    fn type_name(&self) -> &str {
        "Vec"
    }

    fn elements(&self) -> Option<Vec<NodeRef>> {
        Some(self.clone())
    }
}

impl Node for VecDeque<NodeRef> {
    fn type_name(&self) -> &str {
        "VecDeque"
    }

    fn elements(&self) -> Option<Vec<NodeRef>> {
        Some(self.iter().cloned().collect())
    }
}

/// A growable list, needed to close cycles after the nodes are allocated.
impl Node for RefCell<Vec<NodeRef>> {
    fn type_name(&self) -> &str {
        "Vec"
    }

    fn elements(&self) -> Option<Vec<NodeRef>> {
        Some(self.borrow().clone())
    }
}

macro_rules! scalar_nodes {
    ($($ty:ty),* $(,)?) => {
        $(impl Node for $ty {})*
    };
}

scalar_nodes!(
    String, bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);
