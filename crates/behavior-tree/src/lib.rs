//! Tick-driven behavior tree library.
//!
//! This library provides a small behavior tree implementation for hosts that
//! are updated once per simulation tick.
//!
//! - **Delta time**: every tick receives the elapsed time in seconds
//! - **InProgress state**: actions may span several ticks
//! - **Resumable composites**: sequences and selectors keep an explicit cursor
//!   and resume at the child that was still in progress
//!
//! # Architecture
//!
//! - [`Behavior`]: Trait for leaf actions
//! - [`Node`]: Named node recording its last [`Status`] for inspection
//! - [`Status`]: Success, Failure or InProgress
//! - Composite nodes: [`Sequence`], [`Selector`]
//! - Decorator nodes: [`Inverter`], [`AlwaysSucceed`]
//! - [`BehaviorTree`]: Owns the root and exposes `evaluate`

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod error;
pub mod node;
pub mod status;
pub mod tree;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use composite::{Selector, Sequence};
pub use decorator::{AlwaysSucceed, Inverter};
pub use error::{ErrorSeverity, TreeError};
pub use node::{Node, NodeKind};
pub use status::Status;
pub use tree::{BehaviorTree, TreeDefinition};
