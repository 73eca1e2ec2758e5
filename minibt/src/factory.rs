//! Node registration and XML-driven tree construction.

use std::collections::HashMap;

use thiserror::Error;

use crate::{
    basic_types::PortsList,
    blackboard::Blackboard,
    nodes::{
        action::{AlwaysFailure, AlwaysSuccess},
        ActionNode, NodeConfig, NodeKind, NodePorts, TreeNode, TreeNodeData,
    },
    tree::Tree,
    xml::{self, ParseError, XmlElement},
};

#[derive(Debug, Error)]
pub enum CreationError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("no node is registered under the name {0}")]
    UnregisteredNode(String),
    #[error("node {0} does not declare a port named {1}")]
    UndeclaredPort(String, String),
    #[error("there is no BehaviorTree with ID {0}")]
    UnknownTree(String),
    #[error("{0}")]
    Structure(String),
}

type NodeConstructor = Box<dyn Fn() -> Box<dyn ActionNode>>;

struct Registration {
    ports: PortsList,
    constructor: NodeConstructor,
}

/// Builds trees out of registered node types.
pub struct Factory {
    registry: HashMap<String, Registration>,
}

impl Default for Factory {
    fn default() -> Self {
        let mut factory = Self {
            registry: HashMap::new(),
        };
        factory.register_node::<AlwaysSuccess>("AlwaysSuccess");
        factory.register_node::<AlwaysFailure>("AlwaysFailure");
        factory
    }
}

impl Factory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a leaf node type under `name`. Re-registering a name
    /// replaces the previous entry.
    pub fn register_node<T>(&mut self, name: impl Into<String>)
    where
        T: ActionNode + NodePorts + Default + 'static,
    {
        let name = name.into();
        log::debug!("registering action node {name}");
        self.registry.insert(
            name,
            Registration {
                ports: T::ports(),
                constructor: Box::new(|| Box::<T>::default() as Box<dyn ActionNode>),
            },
        );
    }

    /// Parses a tree description and instantiates the tree named by
    /// `main_tree_to_execute`, or the first one when the attribute is absent.
    pub fn create_tree_from_text(
        &self,
        xml: String,
        blackboard: &Blackboard,
    ) -> Result<Tree, CreationError> {
        let document = xml::parse_document(&xml)?;
        if document.name != "root" {
            return Err(CreationError::Structure(
                "document root element must be <root>".to_string(),
            ));
        }

        let definition = match document.attribute("main_tree_to_execute") {
            Some(id) => document
                .children
                .iter()
                .find(|child| child.name == "BehaviorTree" && child.attribute("ID") == Some(id))
                .ok_or_else(|| CreationError::UnknownTree(id.to_string()))?,
            None => document
                .children
                .iter()
                .find(|child| child.name == "BehaviorTree")
                .ok_or_else(|| {
                    CreationError::Structure(
                        "document contains no <BehaviorTree> element".to_string(),
                    )
                })?,
        };
        if definition.children.len() != 1 {
            return Err(CreationError::Structure(format!(
                "BehaviorTree {} must have exactly one root node",
                definition.attribute("ID").unwrap_or("<anonymous>")
            )));
        }

        log::debug!(
            "creating tree {}",
            definition.attribute("ID").unwrap_or("<anonymous>")
        );
        let root = self.instantiate(&definition.children[0], blackboard)?;
        Ok(Tree::new(root, blackboard.clone()))
    }

    fn instantiate(
        &self,
        element: &XmlElement,
        blackboard: &Blackboard,
    ) -> Result<TreeNode, CreationError> {
        match element.name.as_str() {
            "Sequence" | "Fallback" => {
                if element.children.is_empty() {
                    return Err(CreationError::Structure(format!(
                        "control node {} needs at least one child",
                        element.name
                    )));
                }
                let children = self.instantiate_children(element, blackboard)?;
                let kind = if element.name == "Sequence" {
                    NodeKind::Sequence { cursor: 0 }
                } else {
                    NodeKind::Fallback { cursor: 0 }
                };
                Ok(TreeNode::new(
                    self.plain_data(&element.name, blackboard),
                    kind,
                    children,
                ))
            }
            "Inverter" => {
                if element.children.len() != 1 {
                    return Err(CreationError::Structure(
                        "decorator Inverter needs exactly one child".to_string(),
                    ));
                }
                let children = self.instantiate_children(element, blackboard)?;
                Ok(TreeNode::new(
                    self.plain_data(&element.name, blackboard),
                    NodeKind::Inverter,
                    children,
                ))
            }
            name => {
                let registration = self
                    .registry
                    .get(name)
                    .ok_or_else(|| CreationError::UnregisteredNode(name.to_string()))?;
                if !element.children.is_empty() {
                    return Err(CreationError::Structure(format!(
                        "leaf node {name} cannot have children"
                    )));
                }

                let mut config =
                    NodeConfig::new(blackboard.clone(), registration.ports.clone());
                for (key, value) in &element.attributes {
                    if key == "name" || key == "ID" {
                        continue;
                    }
                    let port = registration.ports.get(key).ok_or_else(|| {
                        CreationError::UndeclaredPort(name.to_string(), key.clone())
                    })?;
                    config.add_remap(port.direction(), key.clone(), value.clone());
                }

                let data = TreeNodeData {
                    name: name.to_string(),
                    config,
                };
                Ok(TreeNode::new(
                    data,
                    NodeKind::Action((registration.constructor)()),
                    Vec::new(),
                ))
            }
        }
    }

    fn instantiate_children(
        &self,
        element: &XmlElement,
        blackboard: &Blackboard,
    ) -> Result<Vec<TreeNode>, CreationError> {
        element
            .children
            .iter()
            .map(|child| self.instantiate(child, blackboard))
            .collect()
    }

    fn plain_data(&self, name: &str, blackboard: &Blackboard) -> TreeNodeData {
        TreeNodeData {
            name: name.to_string(),
            config: NodeConfig::new(blackboard.clone(), PortsList::new()),
        }
    }
}
