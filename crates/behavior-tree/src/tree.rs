//! Tree ownership and the per-tick entry point.

use std::fmt::Write as _;

use crate::error::check_delta;
use crate::{Node, Status, TreeError};

/// One-time construction pass producing the root node.
///
/// Implemented for any `FnOnce() -> Node<H>`, so a plain function or closure
/// can serve as a tree definition.
pub trait TreeDefinition<H> {
    fn build(self) -> Node<H>;
}

impl<H, F> TreeDefinition<H> for F
where
    F: FnOnce() -> Node<H>,
{
    fn build(self) -> Node<H> {
        self()
    }
}

/// A behavior tree with a frozen shape, evaluated once per tick.
pub struct BehaviorTree<H> {
    root: Node<H>,
    last_status: Option<Status>,
    evaluations: u64,
}

impl<H> BehaviorTree<H> {
    /// Builds the tree from `definition` and runs every node's initializer
    /// with `host`.
    pub fn new(definition: impl TreeDefinition<H>, host: &mut H) -> Self {
        let mut root = definition.build();
        root.init(host);

        tracing::debug!(
            root = root.name(),
            nodes = root.node_count(),
            "behavior tree built"
        );

        Self {
            root,
            last_status: None,
            evaluations: 0,
        }
    }

    /// Processes the root node for one tick.
    ///
    /// A fatal error leaves the recorded status of the previous tick intact.
    pub fn evaluate(&mut self, host: &mut H, dt: f32) -> Result<Status, TreeError> {
        check_delta(dt)?;

        match self.root.process(host, dt) {
            Ok(status) => {
                self.last_status = Some(status);
                self.evaluations += 1;
                Ok(status)
            }
            Err(err) => {
                tracing::error!(
                    root = self.root.name(),
                    code = err.error_code(),
                    severity = err.severity().as_str(),
                    "behavior tree evaluation failed: {}",
                    err
                );
                Err(err)
            }
        }
    }

    pub fn root(&self) -> &Node<H> {
        &self.root
    }

    /// Result of the most recent successful `evaluate` call.
    pub fn last_status(&self) -> Option<Status> {
        self.last_status
    }

    /// Number of successful `evaluate` calls so far.
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// Renders an indented snapshot of the tree for inspection tooling.
    ///
    /// One line per node: name, kind, last status and, for composites, the cursor.
    pub fn describe(&self) -> String {
        let mut out = String::new();
        describe_node(&self.root, 0, &mut out);
        out
    }
}

fn describe_node<H>(node: &Node<H>, depth: usize, out: &mut String) {
    let status = node
        .last_status()
        .map_or("-", |status| status.into());
    let _ = write!(
        out,
        "{:indent$}{} [{}] {}",
        "",
        node.name(),
        node.kind().as_str(),
        status,
        indent = depth * 2
    );
    if let Some(cursor) = node.cursor() {
        let _ = write!(out, " @{cursor}");
    }
    out.push('\n');

    for child in node.children() {
        describe_node(child, depth + 1, out);
    }
}
