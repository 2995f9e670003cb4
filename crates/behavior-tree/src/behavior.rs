//! Core leaf behavior trait.
//!
//! This module defines the [`Behavior`] trait, which is the fundamental
//! abstraction for leaf nodes. The trait is generic over a host type `H`,
//! allowing leaves to read and drive the object that owns the tree.

use crate::Status;

/// A leaf action that can be processed once per tick against a host.
pub trait Behavior<H> {
    /// One-time initialization, called once when the owning tree is built.
    ///
    /// The default does nothing.
    fn init(&mut self, _host: &mut H) {}

    /// Process this behavior for one tick.
    ///
    /// # Arguments
    ///
    /// * `host` - Mutable reference to the host that owns the tree.
    /// * `dt` - Elapsed time since the previous tick, in seconds.
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the behavior finished successfully
    /// - `Status::Failure` if the behavior failed
    /// - `Status::InProgress` if it needs to be processed again next tick
    fn process(&mut self, host: &mut H, dt: f32) -> Status;

    /// Human-readable description used by inspection tooling.
    fn debug_string(&self) -> String {
        String::from("<no debug info>")
    }
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<H>>` to also implement `Behavior<H>`,
/// enabling dynamic dispatch and heterogeneous collections of leaves.
impl<H> Behavior<H> for Box<dyn Behavior<H>> {
    #[inline]
    fn init(&mut self, host: &mut H) {
        (**self).init(host)
    }

    #[inline]
    fn process(&mut self, host: &mut H, dt: f32) -> Status {
        (**self).process(host, dt)
    }

    fn debug_string(&self) -> String {
        (**self).debug_string()
    }
}

/// Leaf behavior backed by a closure.
///
/// Built by [`crate::builder::action`].
pub struct FnBehavior<F> {
    f: F,
}

impl<F> FnBehavior<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<H, F> Behavior<H> for FnBehavior<F>
where
    F: FnMut(&mut H, f32) -> Status,
{
    #[inline]
    fn process(&mut self, host: &mut H, dt: f32) -> Status {
        (self.f)(host, dt)
    }

    fn debug_string(&self) -> String {
        String::from("closure")
    }
}

/// Leaf behavior that turns a predicate into `Success`/`Failure`.
///
/// Built by [`crate::builder::condition`].
pub struct Condition<F> {
    predicate: F,
}

impl<F> Condition<F> {
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<H, F> Behavior<H> for Condition<F>
where
    F: FnMut(&H) -> bool,
{
    fn process(&mut self, host: &mut H, _dt: f32) -> Status {
        if (self.predicate)(host) {
            Status::Success
        } else {
            Status::Failure
        }
    }

    fn debug_string(&self) -> String {
        String::from("condition")
    }
}
