//! Status, port and conversion types shared across the engine.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use crate::value::{FromValue, Value};

/// Result of ticking a node.
///
/// `Idle` marks a node that has not been ticked since creation or the last
/// halt; returning it from `tick` is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeStatus {
    #[default]
    Idle,
    Running,
    Success,
    Failure,
}

impl NodeStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, NodeStatus::Success | NodeStatus::Failure)
    }
}

impl Display for NodeStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            NodeStatus::Idle => "Idle",
            NodeStatus::Running => "Running",
            NodeStatus::Success => "Success",
            NodeStatus::Failure => "Failure",
        };
        f.write_str(name)
    }
}

impl FromString for NodeStatus {
    fn from_string(value: &str) -> Option<Self> {
        match value.trim() {
            "Idle" => Some(NodeStatus::Idle),
            "Running" => Some(NodeStatus::Running),
            "Success" => Some(NodeStatus::Success),
            "Failure" => Some(NodeStatus::Failure),
            _ => None,
        }
    }
}

impl FromValue for NodeStatus {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => NodeStatus::from_string(s),
            _ => None,
        }
    }
}

/// Conversion from the string form a port carries in XML.
pub trait FromString: Sized {
    fn from_string(value: &str) -> Option<Self>;
}

macro_rules! impl_from_string_via_parse {
    ($($ty:ty)+) => {
        $(
            impl FromString for $ty {
                fn from_string(value: &str) -> Option<Self> {
                    value.trim().parse().ok()
                }
            }
        )+
    };
}

impl_from_string_via_parse! { i8 u8 i16 u16 i32 u32 i64 u64 f32 f64 bool }

impl FromString for String {
    fn from_string(value: &str) -> Option<Self> {
        Some(value.to_string())
    }
}

/// Semicolon-separated integer list, e.g. `1;2;3`.
impl FromString for Vec<i64> {
    fn from_string(value: &str) -> Option<Self> {
        value
            .split(';')
            .map(|part| part.trim().parse().ok())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortDirection {
    Input,
    Output,
}

/// Declaration of a single port in a node's manifest.
#[derive(Debug, Clone)]
pub struct PortInfo {
    name: String,
    direction: PortDirection,
    default: Option<String>,
}

impl PortInfo {
    pub fn input(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: PortDirection::Input,
            default: None,
        }
    }

    pub fn output(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: PortDirection::Output,
            default: None,
        }
    }

    pub fn with_default(mut self, default: impl ToString) -> Self {
        self.default = Some(default.to_string());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn direction(&self) -> PortDirection {
        self.direction
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }
}

/// The ports a node type declares, keyed by port name.
#[derive(Debug, Clone, Default)]
pub struct PortsList {
    ports: HashMap<String, PortInfo>,
}

impl PortsList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, port: PortInfo) {
        self.ports.insert(port.name.clone(), port);
    }

    pub fn get(&self, name: &str) -> Option<&PortInfo> {
        self.ports.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.ports.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PortInfo> {
        self.ports.values()
    }

    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }
}

/// XML attribute values per port name, as written in the tree description.
pub type PortRemapping = HashMap<String, String>;
