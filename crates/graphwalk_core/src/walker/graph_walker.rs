//! The graph walker.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::path::NodePath;
use crate::{
    Node, NodeId, NodeRef, Property, Reflector, SelfDescribing, TargetType, TraversalError,
    WalkConfig,
};

use super::builder::WalkerBuilder;
use super::visited::VisitedSet;

/// Counters for the most recent walk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Nodes entered (not skipped as visited or as their own ancestor).
    pub nodes_entered: usize,
    /// Results recorded.
    pub recorded: usize,
    /// Conforming nodes whose transformation returned `None`.
    pub empty_results: usize,
    /// Occurrences skipped because the node was already recorded.
    pub skipped_visited: usize,
    /// Occurrences skipped because the node was already on the current branch
    /// and nothing was recorded since it was entered there.
    pub skipped_ancestors: usize,
    /// Property values neither conforming nor collections.
    pub pruned_properties: usize,
    /// Deepest path reached, in descents from the root.
    pub max_depth: usize,
}

/// Pending work on the explicit stack.
enum Task {
    /// Enter a node: test, transform, queue its elements.
    Visit { path: NodePath, node: NodeRef },
    /// Queue the node's properties, after its elements are done.
    Expand { path: NodePath, node: NodeRef },
    /// Read one property, after the previous property's subtree is done.
    Read { path: NodePath, property: Property },
    /// The node's whole subtree is done.
    Leave { id: NodeId },
}

/// Walks object graphs and records transformation results by path.
///
/// `T` is the target type, `U` the transformation output, `F` the
/// transformation and `R` the reflector. Results accumulate across walks
/// until [`clear`](Self::clear).
///
/// A walker is single-threaded state: `walk` takes `&mut self`, so one
/// instance cannot be walked concurrently.
pub struct GraphWalker<T: ?Sized + 'static, U, F, R = SelfDescribing> {
    target: TargetType<T>,
    transform: F,
    reflector: R,
    config: WalkConfig,
    results: BTreeMap<String, U>,
    visited: VisitedSet,
    /// Nodes on the current branch, with the `recorded` count at each entry.
    ancestors: HashMap<NodeId, Vec<usize>>,
    stats: WalkStats,
}

impl<T, U, F> GraphWalker<T, U, F>
where
    T: ?Sized + 'static,
    F: FnMut(&T) -> Option<U>,
{
    /// Creates a walker applying `transform` to nodes conforming to `target`.
    pub fn new(target: TargetType<T>, transform: F) -> Self {
        Self::from_parts(target, transform, SelfDescribing, WalkConfig::default())
    }

    /// Starts a [`WalkerBuilder`].
    pub fn builder() -> WalkerBuilder<T, U, F> {
        WalkerBuilder::new()
    }
}

impl<C, U, F> GraphWalker<C, U, F>
where
    C: Node,
    F: FnMut(&C) -> Option<U>,
{
    /// Creates a walker whose target is the parameter type of `transform`.
    pub fn typed(transform: F) -> Self {
        Self::new(TargetType::of(), transform)
    }
}

impl<T, U, F, R> GraphWalker<T, U, F, R>
where
    T: ?Sized + 'static,
    F: FnMut(&T) -> Option<U>,
    R: Reflector,
{
    pub(crate) fn from_parts(
        target: TargetType<T>,
        transform: F,
        reflector: R,
        config: WalkConfig,
    ) -> Self {
        Self {
            target,
            transform,
            reflector,
            config,
            results: BTreeMap::new(),
            visited: VisitedSet::new(),
            ancestors: HashMap::new(),
            stats: WalkStats::default(),
        }
    }

    /// Walks the graph reachable from `root`.
    ///
    /// An absent root records nothing. Properties are read in order, each one
    /// after the subtree of the previous one is done. On error the walk is
    /// aborted; results recorded before the failure are kept.
    pub fn walk(&mut self, root: Option<&NodeRef>) -> Result<&mut Self, TraversalError> {
        self.stats = WalkStats::default();

        let Some(root) = root else {
            debug!("Walk of {} skipped: no root", self.target.name());
            return Ok(self);
        };

        let label = root.type_name().to_string();
        debug!("Walking {} from root {}", self.target.name(), label);

        let mut stack = vec![Task::Visit {
            path: NodePath::root(label),
            node: Rc::clone(root),
        }];

        while let Some(task) = stack.pop() {
            match task {
                Task::Visit { path, node } => self.visit(path, node, &mut stack),
                Task::Expand { path, node } => {
                    if let Err(err) = self.expand(&path, &node, &mut stack) {
                        return Err(self.abort(err));
                    }
                }
                Task::Read { path, property } => {
                    if let Err(err) = self.read(&path, property, &mut stack) {
                        return Err(self.abort(err));
                    }
                }
                Task::Leave { id } => self.leave(id),
            }
        }

        debug!(
            "Walk finished: {} recorded, {} entered, {} pruned, max depth {}",
            self.stats.recorded,
            self.stats.nodes_entered,
            self.stats.pruned_properties,
            self.stats.max_depth
        );
        Ok(self)
    }

    fn visit(&mut self, path: NodePath, node: NodeRef, stack: &mut Vec<Task>) {
        if self.visited.contains(&node) {
            self.stats.skipped_visited += 1;
            return;
        }
        let id = NodeId::of(&node);
        // Unrecorded nodes are not in the visited set. Re-entering one is only
        // allowed once something new was recorded below its last entry, so a
        // cycle through them cannot loop forever.
        let entered_at = self
            .ancestors
            .get(&id)
            .and_then(|entries| entries.last())
            .copied();
        if entered_at == Some(self.stats.recorded) {
            self.stats.skipped_ancestors += 1;
            trace!("Skipping {}: nothing recorded since it was entered", path);
            return;
        }
        self.ancestors
            .entry(id)
            .or_default()
            .push(self.stats.recorded);

        self.stats.nodes_entered += 1;
        self.stats.max_depth = self.stats.max_depth.max(path.depth());

        if let Some(view) = self.target.cast(&*node) {
            match (self.transform)(view) {
                Some(result) => {
                    let key = path.render();
                    trace!("Recorded {}", key);
                    self.results.insert(key, result);
                    self.visited.insert(&node);
                    self.stats.recorded += 1;
                }
                None => self.stats.empty_results += 1,
            }
        }

        let elements = self.reflector.elements(&*node);

        stack.push(Task::Leave { id });
        stack.push(Task::Expand {
            path: path.clone(),
            node,
        });
        if let Some(elements) = elements {
            for (index, element) in elements.into_iter().enumerate().rev() {
                stack.push(Task::Visit {
                    path: path.index(index),
                    node: element,
                });
            }
        }
    }

    fn expand(
        &mut self,
        path: &NodePath,
        node: &NodeRef,
        stack: &mut Vec<Task>,
    ) -> Result<(), TraversalError> {
        let properties = self
            .reflector
            .properties(&**node)
            .map_err(|err| TraversalError::new(path.render(), err))?;

        stack.extend(properties.into_iter().rev().map(|property| Task::Read {
            path: path.clone(),
            property,
        }));
        Ok(())
    }

    fn read(
        &mut self,
        path: &NodePath,
        property: Property,
        stack: &mut Vec<Task>,
    ) -> Result<(), TraversalError> {
        let (name, value) = property.into_parts();
        let value =
            value.map_err(|err| TraversalError::new(path.property(name.clone()).render(), err))?;
        let Some(value) = value else {
            return Ok(());
        };

        if self.target.matches(&*value) || self.reflector.is_collection(&*value) {
            stack.push(Task::Visit {
                path: path.property(name),
                node: value,
            });
        } else {
            self.stats.pruned_properties += 1;
            trace!("Pruned {}.{} ({})", path, name, value.type_name());
        }
        Ok(())
    }

    fn leave(&mut self, id: NodeId) {
        if let Some(entries) = self.ancestors.get_mut(&id) {
            entries.pop();
            if entries.is_empty() {
                self.ancestors.remove(&id);
            }
        }
    }

    fn abort(&mut self, err: TraversalError) -> TraversalError {
        warn!("Walk aborted: {}", err);
        self.ancestors.clear();
        err
    }

    /// Results recorded so far, ordered by path.
    pub fn results(&self) -> &BTreeMap<String, U> {
        &self.results
    }

    /// Moves the results out, leaving the walker's map empty.
    ///
    /// The visited set is untouched.
    pub fn take_results(&mut self) -> BTreeMap<String, U> {
        std::mem::take(&mut self.results)
    }

    /// Consumes the walker, returning its results.
    pub fn into_results(self) -> BTreeMap<String, U> {
        self.results
    }

    /// Resets the results and, unless configured otherwise, the visited set.
    pub fn clear(&mut self) {
        self.results.clear();
        if !self.config.retain_visited_on_clear {
            self.visited.clear();
        }
        debug!(
            "Cleared walker results ({} visited nodes retained)",
            self.visited.len()
        );
    }

    /// Number of nodes in the visited set.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Counters for the most recent walk.
    pub fn last_stats(&self) -> WalkStats {
        self.stats
    }

    /// The target type descriptor.
    pub fn target(&self) -> &TargetType<T> {
        &self.target
    }

    /// The active configuration.
    pub fn config(&self) -> &WalkConfig {
        &self.config
    }
}

impl<T: ?Sized + 'static, U, F, R> fmt::Debug for GraphWalker<T, U, F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphWalker")
            .field("target", &self.target)
            .field("config", &self.config)
            .field("results", &self.results.len())
            .field("visited", &self.visited)
            .field("stats", &self.stats)
            .finish()
    }
}
