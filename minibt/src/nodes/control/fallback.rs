use crate::basic_types::NodeStatus;

use super::super::{halt_all, NodeKind, NodeResult, TreeNode};

impl TreeNode {
    /// Ticks children in order until one succeeds. Fails only when every
    /// child failed; resumes at a `Running` child on the next tick.
    pub(crate) fn tick_fallback(&mut self) -> NodeResult {
        let NodeKind::Fallback { cursor } = &mut self.kind else {
            unreachable!()
        };

        while *cursor < self.children.len() {
            match self.children[*cursor].tick()? {
                NodeStatus::Failure => *cursor += 1,
                NodeStatus::Running => return Ok(NodeStatus::Running),
                NodeStatus::Success => {
                    *cursor = 0;
                    halt_all(&mut self.children);
                    return Ok(NodeStatus::Success);
                }
                NodeStatus::Idle => unreachable!(),
            }
        }

        *cursor = 0;
        halt_all(&mut self.children);
        Ok(NodeStatus::Failure)
    }
}
