//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing `Node::new(name, NodeKind::Sequence(...))`,
//! you can use shorter functions like `sequence("patrol", vec![...])`.

use crate::{Behavior, Node, Status};
use crate::behavior::{Condition, FnBehavior};

/// Creates a leaf node from a [`Behavior`] implementation.
#[inline]
pub fn leaf<H>(name: impl Into<String>, behavior: impl Behavior<H> + 'static) -> Node<H> {
    Node::leaf(name, behavior)
}

/// Creates a leaf node from a closure.
///
/// Shorthand for `Node::leaf(name, FnBehavior::new(f))`.
#[inline]
pub fn action<H, F>(name: impl Into<String>, f: F) -> Node<H>
where
    F: FnMut(&mut H, f32) -> Status + 'static,
{
    Node::leaf(name, FnBehavior::new(f))
}

/// Creates a leaf node that succeeds when `predicate` holds and fails otherwise.
#[inline]
pub fn condition<H, F>(name: impl Into<String>, predicate: F) -> Node<H>
where
    F: FnMut(&H) -> bool + 'static,
{
    Node::leaf(name, Condition::new(predicate))
}

/// Creates a sequence node.
#[inline]
pub fn sequence<H>(name: impl Into<String>, children: Vec<Node<H>>) -> Node<H> {
    Node::sequence(name, children)
}

/// Creates a selector node.
#[inline]
pub fn selector<H>(name: impl Into<String>, children: Vec<Node<H>>) -> Node<H> {
    Node::selector(name, children)
}

/// Creates an inverter node.
#[inline]
pub fn inverter<H>(name: impl Into<String>, child: Node<H>) -> Node<H> {
    Node::inverter(name, child)
}

/// Creates an always-succeed node.
#[inline]
pub fn always_succeed<H>(name: impl Into<String>, child: Node<H>) -> Node<H> {
    Node::always_succeed(name, child)
}
