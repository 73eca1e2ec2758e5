//! Tree vertices, leaf-node traits and the port resolution layer.

pub mod action;
mod control;
mod decorator;

use thiserror::Error;

use crate::{
    basic_types::{FromString, NodeStatus, PortDirection, PortRemapping, PortsList},
    blackboard::Blackboard,
    value::{FromValue, Value},
};

#[derive(Debug, Error)]
pub enum NodeError {
    #[error("port {0} is not declared or has no value")]
    PortError(String),
    #[error("could not parse value of port {0} from \"{1}\"")]
    PortValueParseError(String, String),
    #[error("blackboard error: {0}")]
    BlackboardError(String),
    #[error("invalid status: {0}")]
    StatusError(String),
}

pub type NodeResult<T = NodeStatus> = Result<T, NodeError>;

/// A leaf node. `tick` blocks the calling thread until the node has a
/// result; `halt` is invoked when an ancestor resets its children.
pub trait ActionNode: Send {
    fn tick(&mut self, node: &mut TreeNodeData) -> NodeResult;

    fn halt(&mut self, _node: &mut TreeNodeData) {}
}

/// Static port manifest of a leaf node type. Nodes without ports keep the
/// default empty list.
pub trait NodePorts {
    fn ports() -> PortsList
    where
        Self: Sized,
    {
        PortsList::new()
    }
}

/// Per-instance state handed to a leaf on every tick.
pub struct TreeNodeData {
    pub name: String,
    pub config: NodeConfig,
}

/// Port bindings of one node instance.
pub struct NodeConfig {
    pub blackboard: Blackboard,
    pub input_ports: PortRemapping,
    pub output_ports: PortRemapping,
    manifest: PortsList,
}

impl NodeConfig {
    pub(crate) fn new(blackboard: Blackboard, manifest: PortsList) -> Self {
        Self {
            blackboard,
            input_ports: PortRemapping::new(),
            output_ports: PortRemapping::new(),
            manifest,
        }
    }

    pub(crate) fn add_remap(&mut self, direction: PortDirection, name: String, value: String) {
        match direction {
            PortDirection::Input => self.input_ports.insert(name, value),
            PortDirection::Output => self.output_ports.insert(name, value),
        };
    }

    /// Resolves a typed input port: a `{key}` value reads the blackboard,
    /// anything else is parsed as a literal; a port that was not set in the
    /// tree description falls back to its declared default.
    pub fn get_input<T>(&self, port: &str) -> NodeResult<T>
    where
        T: FromString + FromValue,
    {
        let raw = match self.input_ports.get(port) {
            Some(raw) => raw.clone(),
            None => match self.manifest.get(port).and_then(|p| p.default_value()) {
                Some(default) => default.to_string(),
                None => return Err(NodeError::PortError(port.to_string())),
            },
        };

        match blackboard_pointer(&raw) {
            Some(key) => {
                let value = self.blackboard.get_value(key).ok_or_else(|| {
                    NodeError::BlackboardError(format!("couldn't load blackboard key {key}"))
                })?;
                T::from_value(&value).ok_or_else(|| {
                    NodeError::BlackboardError(format!(
                        "blackboard key {key} holds an incompatible value: {}",
                        value.as_string()
                    ))
                })
            }
            None => {
                T::from_string(&raw).ok_or(NodeError::PortValueParseError(port.to_string(), raw))
            }
        }
    }

    /// Writes an output port through its blackboard remapping.
    pub fn set_output(&mut self, port: &str, value: impl Into<Value>) -> NodeResult<()> {
        let key = {
            let raw = self
                .output_ports
                .get(port)
                .ok_or_else(|| NodeError::PortError(port.to_string()))?;
            blackboard_pointer(raw)
                .ok_or_else(|| {
                    NodeError::PortError(format!(
                        "output port {port} must be remapped to a blackboard entry"
                    ))
                })?
                .to_string()
        };
        self.blackboard.set(key, value);
        Ok(())
    }
}

/// `{key}` port values address the blackboard; everything else is a literal.
fn blackboard_pointer(raw: &str) -> Option<&str> {
    let key = raw.strip_prefix('{')?.strip_suffix('}')?;
    Some(key.trim())
}

pub(crate) enum NodeKind {
    Action(Box<dyn ActionNode>),
    Sequence { cursor: usize },
    Fallback { cursor: usize },
    Inverter,
}

/// One vertex of an instantiated tree.
pub struct TreeNode {
    data: TreeNodeData,
    status: NodeStatus,
    children: Vec<TreeNode>,
    kind: NodeKind,
}

impl TreeNode {
    pub(crate) fn new(data: TreeNodeData, kind: NodeKind, children: Vec<TreeNode>) -> Self {
        Self {
            data,
            status: NodeStatus::Idle,
            children,
            kind,
        }
    }

    /// The name the node type was registered under.
    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn status(&self) -> NodeStatus {
        self.status
    }

    pub fn tick(&mut self) -> NodeResult {
        let previous = self.status;
        let status = match &self.kind {
            NodeKind::Action(_) => self.tick_action(),
            NodeKind::Sequence { .. } => self.tick_sequence(),
            NodeKind::Fallback { .. } => self.tick_fallback(),
            NodeKind::Inverter => self.tick_inverter(),
        }?;

        if status == NodeStatus::Idle {
            return Err(NodeError::StatusError(format!(
                "node {} returned Idle from tick",
                self.data.name
            )));
        }
        if status != previous {
            log::debug!("{}: {previous} -> {status}", self.data.name);
        }
        self.status = status;
        Ok(status)
    }

    fn tick_action(&mut self) -> NodeResult {
        let NodeKind::Action(action) = &mut self.kind else {
            unreachable!()
        };
        action.tick(&mut self.data)
    }

    pub fn halt(&mut self) {
        if let NodeKind::Action(action) = &mut self.kind {
            action.halt(&mut self.data);
        }
        if let NodeKind::Sequence { cursor } | NodeKind::Fallback { cursor } = &mut self.kind {
            *cursor = 0;
        }
        halt_all(&mut self.children);
        self.status = NodeStatus::Idle;
    }

    pub(crate) fn visit<'a>(&'a self, nodes: &mut Vec<&'a TreeNode>) {
        nodes.push(self);
        for child in &self.children {
            child.visit(nodes);
        }
    }
}

pub(crate) fn halt_all(children: &mut [TreeNode]) {
    for child in children {
        child.halt();
    }
}
