use crate::basic_types::NodeStatus;

use super::super::{halt_all, NodeKind, NodeResult, TreeNode};

impl TreeNode {
    /// Ticks children in order. Fails as soon as one child fails, resumes at
    /// a `Running` child on the next tick, succeeds when all children did.
    pub(crate) fn tick_sequence(&mut self) -> NodeResult {
        let NodeKind::Sequence { cursor } = &mut self.kind else {
            unreachable!()
        };

        while *cursor < self.children.len() {
            match self.children[*cursor].tick()? {
                NodeStatus::Success => *cursor += 1,
                NodeStatus::Running => return Ok(NodeStatus::Running),
                NodeStatus::Failure => {
                    *cursor = 0;
                    halt_all(&mut self.children);
                    return Ok(NodeStatus::Failure);
                }
                NodeStatus::Idle => unreachable!(),
            }
        }

        *cursor = 0;
        halt_all(&mut self.children);
        Ok(NodeStatus::Success)
    }
}
