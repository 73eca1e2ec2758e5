//! Behavior tree demo of a robot fetch-and-place task.
//!
//! The tree topology lives in `bt_tree.xml`; this crate contributes the leaf
//! nodes (five stub conditions, six simulated actions) and their
//! registration with the [`Factory`].

pub mod nodes;

use minibt::prelude::*;

use crate::nodes::*;

/// Registers every leaf node of the demo.
pub fn register_nodes(factory: &mut Factory) {
    // find ball subtree
    register_action_node!(factory, "BallFound", BallFound);
    register_action_node!(factory, "FindBall", FindBall);

    // approach ball subtree
    register_action_node!(factory, "BallClose", BallClose);
    register_action_node!(factory, "ApproachBall", ApproachBall);

    // grasp ball subtree
    register_action_node!(factory, "BallGrasped", BallGrasped);
    register_action_node!(factory, "GraspBall", GraspBall);

    // approach bin subtree
    register_action_node!(factory, "BinClose", BinClose);
    register_action_node!(factory, "ApproachBin", ApproachBin);

    // place ball subtree
    register_action_node!(factory, "BallPlaced", BallPlaced);
    register_action_node!(factory, "PlaceBall", PlaceBall);

    // ask for help
    register_action_node!(factory, "AskForHelp", AskForHelp);
}
