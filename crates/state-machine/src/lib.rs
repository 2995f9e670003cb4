//! Tick-driven finite state machine.
//!
//! A host owns a [`StateMachine`], picks a starting state once, and calls
//! [`StateMachine::advance`] every tick. The current [`State`] decides
//! whether to stay or to request another state by key.
//!
//! - **One instance per key**: states are built lazily from registered
//!   factories and reused on every re-entry, keeping their data
//! - **Ordered lifecycle**: every real transition fires exactly one
//!   `on_exit` followed by exactly one `on_enter`
//! - **Self-transitions are free**: requesting the current key does nothing
//!
//! # Architecture
//!
//! - [`State`]: Trait implemented by every state
//! - [`StateKey`]: Bound for the descriptors identifying states
//! - [`StateRegistry`]: Factories plus the cached instances
//! - [`StateMachine`]: Current state tracking and transition policy

pub mod error;
pub mod machine;
pub mod registry;
pub mod state;

pub use error::{ErrorSeverity, MachineError};
pub use machine::{StateMachine, StateMachineBuilder};
pub use registry::{StateFactory, StateRegistry};
pub use state::{State, StateKey};
