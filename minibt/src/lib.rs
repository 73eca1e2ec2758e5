//! Minimal synchronous behavior tree engine.
//!
//! Leaf nodes implement [`nodes::ActionNode`] and are registered by name with
//! a [`Factory`], which builds a tree from an XML description. Data flows
//! between nodes through a shared [`Blackboard`] via declared ports.
//!
//! The engine is strictly single-threaded: a tick blocks the calling thread
//! until the leaf returns.

pub mod basic_types;
mod blackboard;
mod factory;
mod macros;
pub mod nodes;
mod tree;
pub mod value;
mod xml;

pub use blackboard::Blackboard;
pub use factory::{CreationError, Factory};
pub use tree::Tree;
pub use xml::ParseError;

pub mod prelude {
    pub use crate::{
        basic_types::{FromString, NodeStatus, PortsList},
        blackboard::Blackboard,
        define_ports,
        factory::Factory,
        input_port,
        nodes::{ActionNode, NodePorts, NodeResult, TreeNodeData},
        output_port, register_action_node,
        tree::Tree,
        value::{FromValue, Value},
    };
}
