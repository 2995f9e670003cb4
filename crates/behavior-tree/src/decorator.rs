//! Decorator behavior nodes.
//!
//! Decorators wrap a single child node and modify its result.
//! This module provides [`Inverter`] (NOT logic) and [`AlwaysSucceed`] (error suppression).
//! Both pass `InProgress` through untouched so a multi-tick child keeps its
//! parent waiting.

use crate::{Node, Status, TreeError};

/// Inverts the result of its child.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
/// - `InProgress` is returned as is
///
/// This is analogous to a logical NOT (!) operation.
pub struct Inverter<H> {
    child: Box<Node<H>>,
}

impl<H> Inverter<H> {
    /// Creates a new inverter that wraps the given child.
    pub fn new(child: Node<H>) -> Self {
        Self {
            child: Box::new(child),
        }
    }

    pub fn child(&self) -> &Node<H> {
        &self.child
    }

    pub(crate) fn child_mut(&mut self) -> &mut Node<H> {
        &mut self.child
    }

    pub(crate) fn process(&mut self, host: &mut H, dt: f32) -> Result<Status, TreeError> {
        Ok(self.child.process(host, dt)?.invert())
    }
}

/// Returns `Success` once its child resolves, regardless of the outcome.
///
/// # Semantics
///
/// - If the child returns `Success`, returns `Success`
/// - If the child returns `Failure`, **still returns `Success`**
/// - `InProgress` is returned as is
///
/// This is useful for:
/// - Optional behaviors that shouldn't cause a sequence to fail
/// - Logging/debugging nodes that observe state without affecting control flow
pub struct AlwaysSucceed<H> {
    child: Box<Node<H>>,
}

impl<H> AlwaysSucceed<H> {
    /// Creates a new always-succeed wrapper around the given child.
    pub fn new(child: Node<H>) -> Self {
        Self {
            child: Box::new(child),
        }
    }

    pub fn child(&self) -> &Node<H> {
        &self.child
    }

    pub(crate) fn child_mut(&mut self) -> &mut Node<H> {
        &mut self.child
    }

    pub(crate) fn process(&mut self, host: &mut H, dt: f32) -> Result<Status, TreeError> {
        match self.child.process(host, dt)? {
            Status::InProgress => Ok(Status::InProgress),
            Status::Success | Status::Failure => Ok(Status::Success),
        }
    }
}
