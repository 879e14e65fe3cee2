//! Step-by-step walker construction.

use std::marker::PhantomData;

use tracing::debug;

use crate::{ConfigError, Reflector, SelfDescribing, TargetType, WalkConfig};

use super::graph_walker::GraphWalker;

/// Builder for [`GraphWalker`].
///
/// Both a target type and a transformation are required; [`build`](Self::build)
/// reports whichever is missing instead of producing a half-configured walker.
///
/// ```rust
/// use graphwalk_core::{ConfigError, GraphWalker, TargetType, WalkConfig};
///
/// let walker = GraphWalker::builder()
///     .target(TargetType::<String>::of())
///     .transform(|text: &String| Some(text.len()))
///     .config(WalkConfig::new().retain_visited_on_clear(true))
///     .build()?;
///
/// assert!(walker.config().retain_visited_on_clear);
/// # Ok::<(), ConfigError>(())
/// ```
pub struct WalkerBuilder<T: ?Sized + 'static, U, F, R = SelfDescribing> {
    target: Option<TargetType<T>>,
    transform: Option<F>,
    reflector: R,
    config: WalkConfig,
    output: PhantomData<fn() -> U>,
}

impl<T: ?Sized + 'static, U, F> WalkerBuilder<T, U, F> {
    /// Creates an empty builder using self-describing reflection.
    pub fn new() -> Self {
        Self {
            target: None,
            transform: None,
            reflector: SelfDescribing,
            config: WalkConfig::default(),
            output: PhantomData,
        }
    }
}

impl<T: ?Sized + 'static, U, F> Default for WalkerBuilder<T, U, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, U, F, R> WalkerBuilder<T, U, F, R>
where
    T: ?Sized + 'static,
    F: FnMut(&T) -> Option<U>,
    R: Reflector,
{
    /// Sets the target type.
    pub fn target(mut self, target: TargetType<T>) -> Self {
        self.target = Some(target);
        self
    }

    /// Sets the transformation applied to conforming nodes.
    pub fn transform(mut self, transform: F) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Replaces the reflector used to introspect nodes.
    pub fn reflector<R2: Reflector>(self, reflector: R2) -> WalkerBuilder<T, U, F, R2> {
        WalkerBuilder {
            target: self.target,
            transform: self.transform,
            reflector,
            config: self.config,
            output: PhantomData,
        }
    }

    /// Sets the walker configuration.
    pub fn config(mut self, config: WalkConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the walker.
    pub fn build(self) -> Result<GraphWalker<T, U, F, R>, ConfigError> {
        let transform = self.transform.ok_or(ConfigError::MissingTransform)?;
        let target = self.target.ok_or(ConfigError::MissingTarget)?;

        debug!("Built walker for {}", target.name());
        Ok(GraphWalker::from_parts(
            target,
            transform,
            self.reflector,
            self.config,
        ))
    }
}
