use crate::basic_types::NodeStatus;

use super::super::{halt_all, NodeResult, TreeNode};

impl TreeNode {
    /// Returns Failure on Success and Success on Failure; `Running` passes
    /// through untouched.
    pub(crate) fn tick_inverter(&mut self) -> NodeResult {
        let status = match self.children[0].tick()? {
            NodeStatus::Success => NodeStatus::Failure,
            NodeStatus::Failure => NodeStatus::Success,
            NodeStatus::Running => return Ok(NodeStatus::Running),
            NodeStatus::Idle => unreachable!(),
        };
        halt_all(&mut self.children);
        Ok(status)
    }
}
