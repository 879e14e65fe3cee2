//! Walker error types.

use thiserror::Error;

/// Errors raised by a [`Reflector`](crate::Reflector) while describing a node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReflectError {
    /// The node's properties could not be enumerated.
    #[error("cannot introspect {type_name}: {message}")]
    Introspection { type_name: String, message: String },

    /// A property accessor failed when invoked.
    #[error("accessor for property `{property}` failed: {message}")]
    Accessor { property: String, message: String },
}

impl ReflectError {
    /// Creates an introspection error.
    pub fn introspection(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Introspection {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Creates an accessor error.
    pub fn accessor(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Accessor {
            property: property.into(),
            message: message.into(),
        }
    }
}

/// The single runtime error of a walk.
///
/// Wraps the reflector failure together with the path of the node (or
/// property) being read. A walk that returns this error is aborted; results
/// recorded before the failure stay in the walker.
#[derive(Debug, Error)]
#[error("Traversal error at `{path}`: {source}")]
pub struct TraversalError {
    path: String,
    #[source]
    source: ReflectError,
}

impl TraversalError {
    /// Creates a traversal error for the given path.
    pub fn new(path: impl Into<String>, source: ReflectError) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }

    /// Path of the node or property whose reflection failed.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The underlying reflector failure.
    pub fn reflect_error(&self) -> &ReflectError {
        &self.source
    }
}

/// Errors detected while building a walker or loading its configuration.
///
/// These are always reported at construction, never deferred to a walk.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No transformation function was supplied.
    #[error("Configuration error: a transformation function is required")]
    MissingTransform,

    /// No target type was supplied.
    #[error("Configuration error: a target type is required")]
    MissingTarget,

    /// The configuration document could not be parsed.
    #[error("Configuration error: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Creates an invalid-configuration error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}
