//! An instantiated tree, ready to tick.

use std::{thread, time::Duration};

use crate::{
    basic_types::NodeStatus,
    blackboard::Blackboard,
    nodes::{NodeResult, TreeNode},
};

const TICK_PAUSE: Duration = Duration::from_millis(10);

pub struct Tree {
    root: TreeNode,
    blackboard: Blackboard,
}

impl Tree {
    pub(crate) fn new(root: TreeNode, blackboard: Blackboard) -> Self {
        Self { root, blackboard }
    }

    /// Propagates a single tick from the root.
    pub fn tick_once(&mut self) -> NodeResult {
        self.root.tick()
    }

    /// Ticks the root until it reports a completed status, pausing briefly
    /// between ticks while the tree is `Running`.
    pub fn tick_while_running(&mut self) -> NodeResult {
        let mut status = self.root.tick()?;
        while status == NodeStatus::Running {
            thread::sleep(TICK_PAUSE);
            status = self.root.tick()?;
        }
        Ok(status)
    }

    /// Resets every node back to `Idle`.
    pub fn halt(&mut self) {
        self.root.halt();
    }

    pub fn blackboard(&self) -> &Blackboard {
        &self.blackboard
    }

    /// Pre-order traversal over the instantiated nodes.
    pub fn visit_nodes(&self) -> impl Iterator<Item = &TreeNode> + '_ {
        let mut nodes = Vec::new();
        self.root.visit(&mut nodes);
        nodes.into_iter()
    }
}

impl std::fmt::Debug for Tree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tree").finish_non_exhaustive()
    }
}
