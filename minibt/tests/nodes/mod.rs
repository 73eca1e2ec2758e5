use minibt::prelude::*;

/// Test helper returning whatever status its `status` port names.
#[derive(Default)]
pub struct StatusNode;

impl ActionNode for StatusNode {
    fn tick(&mut self, node: &mut TreeNodeData) -> NodeResult {
        let status: NodeStatus = node.config.get_input("status")?;
        Ok(status)
    }
}

impl NodePorts for StatusNode {
    fn ports() -> PortsList {
        define_ports!(input_port!("status"))
    }
}

/// Like [`StatusNode`], but counts its ticks in the blackboard slot `ticks`
/// and defaults to `Success` when no status is given.
#[derive(Default)]
pub struct CountingNode;

impl ActionNode for CountingNode {
    fn tick(&mut self, node: &mut TreeNodeData) -> NodeResult {
        let ticks: i64 = node.config.blackboard.get("ticks").unwrap_or(0);
        node.config.blackboard.set("ticks", ticks + 1);
        let status: NodeStatus = node.config.get_input("status")?;
        Ok(status)
    }
}

impl NodePorts for CountingNode {
    fn ports() -> PortsList {
        define_ports!(input_port!("status", NodeStatus::Success))
    }
}
