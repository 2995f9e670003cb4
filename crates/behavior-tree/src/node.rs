//! Tree nodes.
//!
//! A [`Node`] pairs a name and its last evaluated [`Status`] with the logic
//! that produces that status: a leaf [`Behavior`], a composite, or a
//! decorator. Each node exclusively owns its children.

use crate::{AlwaysSucceed, Behavior, Inverter, Selector, Sequence, Status, TreeError};

/// The logic carried by a node.
pub enum NodeKind<H> {
    Leaf(Box<dyn Behavior<H>>),
    Sequence(Sequence<H>),
    Selector(Selector<H>),
    Inverter(Inverter<H>),
    AlwaysSucceed(AlwaysSucceed<H>),
}

impl<H> NodeKind<H> {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Leaf(_) => "leaf",
            NodeKind::Sequence(_) => "sequence",
            NodeKind::Selector(_) => "selector",
            NodeKind::Inverter(_) => "inverter",
            NodeKind::AlwaysSucceed(_) => "always_succeed",
        }
    }
}

/// A named unit of behavior tree logic.
///
/// The stored last status exists for inspection only. Composites decide
/// their control flow from the live value returned by [`Node::process`].
pub struct Node<H> {
    name: String,
    last_status: Option<Status>,
    kind: NodeKind<H>,
}

impl<H> Node<H> {
    pub fn new(name: impl Into<String>, kind: NodeKind<H>) -> Self {
        Self {
            name: name.into(),
            last_status: None,
            kind,
        }
    }

    pub fn leaf(name: impl Into<String>, behavior: impl Behavior<H> + 'static) -> Self {
        Self::new(name, NodeKind::Leaf(Box::new(behavior)))
    }

    pub fn sequence(name: impl Into<String>, children: Vec<Node<H>>) -> Self {
        Self::new(name, NodeKind::Sequence(Sequence::new(children)))
    }

    pub fn selector(name: impl Into<String>, children: Vec<Node<H>>) -> Self {
        Self::new(name, NodeKind::Selector(Selector::new(children)))
    }

    pub fn inverter(name: impl Into<String>, child: Node<H>) -> Self {
        Self::new(name, NodeKind::Inverter(Inverter::new(child)))
    }

    pub fn always_succeed(name: impl Into<String>, child: Node<H>) -> Self {
        Self::new(name, NodeKind::AlwaysSucceed(AlwaysSucceed::new(child)))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &NodeKind<H> {
        &self.kind
    }

    /// Status produced by the most recent successful `process` call, if any.
    pub fn last_status(&self) -> Option<Status> {
        self.last_status
    }

    /// Resume index of a composite node; `None` for leaves and decorators.
    pub fn cursor(&self) -> Option<usize> {
        match &self.kind {
            NodeKind::Sequence(seq) => Some(seq.cursor()),
            NodeKind::Selector(sel) => Some(sel.cursor()),
            _ => None,
        }
    }

    pub fn children(&self) -> &[Node<H>] {
        match &self.kind {
            NodeKind::Leaf(_) => &[],
            NodeKind::Sequence(seq) => seq.children(),
            NodeKind::Selector(sel) => sel.children(),
            NodeKind::Inverter(inv) => std::slice::from_ref(inv.child()),
            NodeKind::AlwaysSucceed(always) => std::slice::from_ref(always.child()),
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Node::node_count).sum::<usize>()
    }

    pub fn debug_string(&self) -> String {
        match &self.kind {
            NodeKind::Leaf(behavior) => behavior.debug_string(),
            NodeKind::Sequence(seq) => {
                format!("sequence {}/{}", seq.cursor(), seq.children().len())
            }
            NodeKind::Selector(sel) => {
                format!("selector {}/{}", sel.cursor(), sel.children().len())
            }
            other => other.as_str().to_string(),
        }
    }

    /// Runs every node's one-time initializer, depth-first.
    pub(crate) fn init(&mut self, host: &mut H) {
        match &mut self.kind {
            NodeKind::Leaf(behavior) => behavior.init(host),
            NodeKind::Sequence(seq) => seq.children_mut().iter_mut().for_each(|c| c.init(host)),
            NodeKind::Selector(sel) => sel.children_mut().iter_mut().for_each(|c| c.init(host)),
            NodeKind::Inverter(inv) => inv.child_mut().init(host),
            NodeKind::AlwaysSucceed(always) => always.child_mut().init(host),
        }
    }

    /// Processes this node for one tick and records the result.
    pub fn process(&mut self, host: &mut H, dt: f32) -> Result<Status, TreeError> {
        let status = match &mut self.kind {
            NodeKind::Leaf(behavior) => behavior.process(host, dt),
            NodeKind::Sequence(seq) => seq.process(&self.name, host, dt)?,
            NodeKind::Selector(sel) => sel.process(&self.name, host, dt)?,
            NodeKind::Inverter(inv) => inv.process(host, dt)?,
            NodeKind::AlwaysSucceed(always) => always.process(host, dt)?,
        };

        tracing::trace!(node = %self.name, %status, "node processed");
        self.last_status = Some(status);
        Ok(status)
    }
}

impl<H> std::fmt::Debug for Node<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("kind", &self.kind.as_str())
            .field("last_status", &self.last_status)
            .field("children", &self.children())
            .finish()
    }
}
