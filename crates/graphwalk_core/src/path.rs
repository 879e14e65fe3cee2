//! Traversal paths.
//!
//! A path is a chain of segments shared between siblings, so extending it is
//! O(1). The dotted/bracketed string is only rendered when a result is
//! recorded or an error is reported.

use std::borrow::Cow;
use std::fmt::{self, Write};
use std::rc::Rc;

#[derive(Debug)]
enum Segment {
    Root(String),
    Property(Cow<'static, str>),
    Index(usize),
}

#[derive(Debug)]
struct Link {
    segment: Segment,
    parent: Option<Rc<Link>>,
    depth: usize,
}

// Unlink iteratively: a chain as deep as the graph would otherwise be
// dropped recursively.
impl Drop for Link {
    fn drop(&mut self) {
        let mut parent = self.parent.take();
        while let Some(link) = parent {
            match Rc::try_unwrap(link) {
                Ok(mut link) => parent = link.parent.take(),
                Err(_) => break,
            }
        }
    }
}

/// Position of a node in a walk, e.g. `Folder.entries[2].meta`.
#[derive(Debug, Clone)]
pub(crate) struct NodePath(Rc<Link>);

impl NodePath {
    pub(crate) fn root(label: impl Into<String>) -> Self {
        Self(Rc::new(Link {
            segment: Segment::Root(label.into()),
            parent: None,
            depth: 0,
        }))
    }

    pub(crate) fn property(&self, name: Cow<'static, str>) -> Self {
        self.child(Segment::Property(name))
    }

    pub(crate) fn index(&self, index: usize) -> Self {
        self.child(Segment::Index(index))
    }

    fn child(&self, segment: Segment) -> Self {
        Self(Rc::new(Link {
            segment,
            parent: Some(Rc::clone(&self.0)),
            depth: self.0.depth + 1,
        }))
    }

    /// Number of descents from the root.
    pub(crate) fn depth(&self) -> usize {
        self.0.depth
    }

    pub(crate) fn render(&self) -> String {
        let mut segments = Vec::with_capacity(self.0.depth + 1);
        let mut cursor = Some(&self.0);
        while let Some(link) = cursor {
            segments.push(&link.segment);
            cursor = link.parent.as_ref();
        }

        let mut out = String::new();
        for segment in segments.into_iter().rev() {
            match segment {
                Segment::Root(label) => out.push_str(label),
                Segment::Property(name) => {
                    out.push('.');
                    out.push_str(name);
                }
                Segment::Index(index) => {
                    let _ = write!(out, "[{index}]");
                }
            }
        }
        out
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
