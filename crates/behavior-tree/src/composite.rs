//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child nodes.
//! This module provides the fundamental building blocks for creating complex
//! decision trees: [`Sequence`] (AND logic) and [`Selector`] (OR logic).
//!
//! Both keep an explicit cursor so a child that reports `InProgress` is
//! resumed on the next tick instead of restarting from the first child.

use crate::{Node, Status, TreeError};

/// Executes children in order until one fails.
///
/// # Semantics
///
/// A `Sequence` node resumes from its cursor and evaluates children left to right:
/// - `Success`: the cursor **advances** and the next child runs in the same tick
/// - `Failure`: the sequence **stops immediately**, resets its cursor and returns `Failure`
/// - `InProgress`: the cursor stays on that child and the sequence returns `InProgress`
/// - If all children succeed, the cursor resets and the sequence returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation. An empty
/// sequence returns `Success`, the identity of AND.
pub struct Sequence<H> {
    children: Vec<Node<H>>,
    cursor: usize,
}

impl<H> Sequence<H> {
    /// Creates a new sequence with the given children.
    pub fn new(children: Vec<Node<H>>) -> Self {
        Self {
            children,
            cursor: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn children(&self) -> &[Node<H>] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut [Node<H>] {
        &mut self.children
    }

    pub(crate) fn process(&mut self, name: &str, host: &mut H, dt: f32) -> Result<Status, TreeError> {
        resume(name, &mut self.children, &mut self.cursor, Status::Success, host, dt)
    }
}

/// Executes children in order until one succeeds.
///
/// # Semantics
///
/// A `Selector` node resumes from its cursor and evaluates children left to right:
/// - `Failure`: the cursor **advances** and the next child runs in the same tick
/// - `Success`: the selector **stops immediately**, resets its cursor and returns `Success`
/// - `InProgress`: the cursor stays on that child and the selector returns `InProgress`
/// - If all children fail, the cursor resets and the selector returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation. An empty
/// selector returns `Failure`, the identity of OR.
pub struct Selector<H> {
    children: Vec<Node<H>>,
    cursor: usize,
}

impl<H> Selector<H> {
    /// Creates a new selector with the given children.
    pub fn new(children: Vec<Node<H>>) -> Self {
        Self {
            children,
            cursor: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn children(&self) -> &[Node<H>] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut [Node<H>] {
        &mut self.children
    }

    pub(crate) fn process(&mut self, name: &str, host: &mut H, dt: f32) -> Result<Status, TreeError> {
        resume(name, &mut self.children, &mut self.cursor, Status::Failure, host, dt)
    }
}

/// Shared cursor walk for both composites.
///
/// `advance_on` is the status that moves on to the next child; it is also the
/// result when the children are exhausted (or empty). Any other resolved
/// status ends the walk and resets the cursor, while `InProgress` keeps it.
fn resume<H>(
    name: &str,
    children: &mut [Node<H>],
    cursor: &mut usize,
    advance_on: Status,
    host: &mut H,
    dt: f32,
) -> Result<Status, TreeError> {
    if children.is_empty() {
        return Ok(advance_on);
    }
    if *cursor >= children.len() {
        return Err(TreeError::MalformedTree {
            node: name.to_string(),
            cursor: *cursor,
            len: children.len(),
        });
    }

    while let Some(child) = children.get_mut(*cursor) {
        let status = child.process(host, dt)?;
        if status == advance_on {
            *cursor += 1;
            continue;
        }
        if status.is_resolved() {
            *cursor = 0;
        }
        return Ok(status);
    }

    *cursor = 0;
    Ok(advance_on)
}
