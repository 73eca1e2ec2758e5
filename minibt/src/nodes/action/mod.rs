//! Built-in leaf nodes, registered with every factory.

use crate::basic_types::NodeStatus;

use super::{ActionNode, NodePorts, NodeResult, TreeNodeData};

/// Leaf that always succeeds without doing anything.
#[derive(Debug, Default)]
pub struct AlwaysSuccess;

impl ActionNode for AlwaysSuccess {
    fn tick(&mut self, _node: &mut TreeNodeData) -> NodeResult {
        Ok(NodeStatus::Success)
    }
}

impl NodePorts for AlwaysSuccess {}

/// Leaf that always fails without doing anything.
#[derive(Debug, Default)]
pub struct AlwaysFailure;

impl ActionNode for AlwaysFailure {
    fn tick(&mut self, _node: &mut TreeNodeData) -> NodeResult {
        Ok(NodeStatus::Failure)
    }
}

impl NodePorts for AlwaysFailure {}
