//! Core state trait.
//!
//! This module defines the [`State`] trait implemented by every state a
//! [`crate::StateMachine`] can hold, and the [`StateKey`] bound for the
//! descriptors that identify them.

use std::fmt::Debug;
use std::hash::Hash;

/// Descriptor identifying a state type.
///
/// Usually a fieldless enum. Two descriptors name the same state iff they
/// compare equal; the machine never looks at anything else.
pub trait StateKey: Copy + Eq + Hash + Debug + 'static {}

impl<T> StateKey for T where T: Copy + Eq + Hash + Debug + 'static {}

/// A state of a machine keyed by `K`, driving a host of type `H`.
///
/// One instance exists per key for the lifetime of the machine. Data kept on
/// `self` survives leaving and re-entering the state; clear it in
/// [`State::on_enter`] if a fresh start is wanted.
pub trait State<K, H> {
    /// One-time initialization, called once when the instance is created.
    fn init(&mut self, _host: &mut H) {}

    /// Called when the machine transitions into this state.
    fn on_enter(&mut self, _host: &mut H) {}

    /// Called once per tick while this state is current.
    ///
    /// # Returns
    ///
    /// - `None` to stay in this state
    /// - `Some(key)` to request a transition; requesting the current key is
    ///   ignored
    fn on_update(&mut self, host: &mut H, dt: f32) -> Option<K>;

    /// Called when the machine transitions out of this state.
    fn on_exit(&mut self, _host: &mut H) {}

    /// Human-readable description used by inspection tooling.
    fn debug_string(&self) -> String {
        String::from("<no debug info>")
    }
}
