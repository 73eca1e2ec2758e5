//! Leaf nodes of the ball-in-bin task.
//!
//! The conditions are stubs: each prints why the step is still open and
//! fails, which sends the tree into the paired action. The actions simulate
//! work by sleeping for their `delay_ms` port (default [`DEFAULT_DELAY_MS`])
//! and then succeed.

use std::{thread, time::Duration};

use minibt::prelude::*;

/// Where `FindBall` reports the ball, as x;y;z.
pub const BALL_LOCATION: [i64; 3] = [1, 2, 3];

const DEFAULT_DELAY_MS: u64 = 3000;
const HELP_DELAY_MS: u64 = 10000;

fn simulate_work(node: &TreeNodeData) -> NodeResult<()> {
    let delay_ms: u64 = node.config.get_input("delay_ms")?;
    thread::sleep(Duration::from_millis(delay_ms));
    Ok(())
}

/// ConditionNode "BallFound"
#[derive(Default)]
pub struct BallFound;

impl ActionNode for BallFound {
    fn tick(&mut self, _node: &mut TreeNodeData) -> NodeResult {
        println!("Ball not found");
        Ok(NodeStatus::Failure)
    }
}

impl NodePorts for BallFound {}

/// ActionNode "FindBall": reports the ball location through its output port.
#[derive(Default)]
pub struct FindBall;

impl ActionNode for FindBall {
    fn tick(&mut self, node: &mut TreeNodeData) -> NodeResult {
        simulate_work(node)?;
        node.config
            .set_output("ball_location", BALL_LOCATION.to_vec())?;
        println!("Ball Found");
        Ok(NodeStatus::Success)
    }
}

impl NodePorts for FindBall {
    fn ports() -> PortsList {
        define_ports!(
            input_port!("delay_ms", DEFAULT_DELAY_MS),
            output_port!("ball_location")
        )
    }
}

/// ConditionNode "BallClose"
#[derive(Default)]
pub struct BallClose;

impl ActionNode for BallClose {
    fn tick(&mut self, _node: &mut TreeNodeData) -> NodeResult {
        println!("Ball not close");
        Ok(NodeStatus::Failure)
    }
}

impl NodePorts for BallClose {}

/// ActionNode "ApproachBall": drives to the location `FindBall` reported.
/// Fails when the location was never written.
#[derive(Default)]
pub struct ApproachBall;

impl ActionNode for ApproachBall {
    fn tick(&mut self, node: &mut TreeNodeData) -> NodeResult {
        let location: Vec<i64> = node.config.get_input("ball_location")?;
        simulate_work(node)?;
        println!("Ball Approached at {location:?}");
        Ok(NodeStatus::Success)
    }
}

impl NodePorts for ApproachBall {
    fn ports() -> PortsList {
        define_ports!(
            input_port!("delay_ms", DEFAULT_DELAY_MS),
            input_port!("ball_location")
        )
    }
}

/// ConditionNode "BallGrasped"
#[derive(Default)]
pub struct BallGrasped;

impl ActionNode for BallGrasped {
    fn tick(&mut self, _node: &mut TreeNodeData) -> NodeResult {
        println!("Ball not grasped");
        Ok(NodeStatus::Failure)
    }
}

impl NodePorts for BallGrasped {}

/// ActionNode "GraspBall"
#[derive(Default)]
pub struct GraspBall;

impl ActionNode for GraspBall {
    fn tick(&mut self, node: &mut TreeNodeData) -> NodeResult {
        simulate_work(node)?;
        println!("Ball Grasped");
        Ok(NodeStatus::Success)
    }
}

impl NodePorts for GraspBall {
    fn ports() -> PortsList {
        define_ports!(input_port!("delay_ms", DEFAULT_DELAY_MS))
    }
}

/// ConditionNode "BinClose"
#[derive(Default)]
pub struct BinClose;

impl ActionNode for BinClose {
    fn tick(&mut self, _node: &mut TreeNodeData) -> NodeResult {
        println!("Bin not close");
        Ok(NodeStatus::Failure)
    }
}

impl NodePorts for BinClose {}

/// ActionNode "ApproachBin"
#[derive(Default)]
pub struct ApproachBin;

impl ActionNode for ApproachBin {
    fn tick(&mut self, node: &mut TreeNodeData) -> NodeResult {
        simulate_work(node)?;
        println!("Bin approached");
        Ok(NodeStatus::Success)
    }
}

impl NodePorts for ApproachBin {
    fn ports() -> PortsList {
        define_ports!(input_port!("delay_ms", DEFAULT_DELAY_MS))
    }
}

/// ConditionNode "BallPlaced"
#[derive(Default)]
pub struct BallPlaced;

impl ActionNode for BallPlaced {
    fn tick(&mut self, _node: &mut TreeNodeData) -> NodeResult {
        println!("Ball not placed");
        Ok(NodeStatus::Failure)
    }
}

impl NodePorts for BallPlaced {}

/// ActionNode "PlaceBall"
#[derive(Default)]
pub struct PlaceBall;

impl ActionNode for PlaceBall {
    fn tick(&mut self, node: &mut TreeNodeData) -> NodeResult {
        simulate_work(node)?;
        println!("Ball Placed");
        Ok(NodeStatus::Success)
    }
}

impl NodePorts for PlaceBall {
    fn ports() -> PortsList {
        define_ports!(input_port!("delay_ms", DEFAULT_DELAY_MS))
    }
}

/// ActionNode "AskForHelp": last resort when the task sequence gave up.
/// Announces itself first, then waits for the operator.
#[derive(Default)]
pub struct AskForHelp;

impl ActionNode for AskForHelp {
    fn tick(&mut self, node: &mut TreeNodeData) -> NodeResult {
        let delay_ms: u64 = node.config.get_input("delay_ms")?;
        println!("Asking for help. Waiting for {}s here...", delay_ms / 1000);
        thread::sleep(Duration::from_millis(delay_ms));
        Ok(NodeStatus::Success)
    }
}

impl NodePorts for AskForHelp {
    fn ports() -> PortsList {
        define_ports!(input_port!("delay_ms", HELP_DELAY_MS))
    }
}
