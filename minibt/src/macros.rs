//! Declarative helpers for port manifests and node registration.

/// Builds a [`PortsList`](crate::basic_types::PortsList) from port
/// declarations:
///
/// ```ignore
/// define_ports!(input_port!("message", "hello"), output_port!("text"))
/// ```
#[macro_export]
macro_rules! define_ports {
    ($($port:expr),+ $(,)?) => {{
        let mut ports = $crate::basic_types::PortsList::new();
        $( ports.add($port); )+
        ports
    }};
}

/// Declares an input port, optionally with a default value.
#[macro_export]
macro_rules! input_port {
    ($name:expr) => {
        $crate::basic_types::PortInfo::input($name)
    };
    ($name:expr, $default:expr) => {
        $crate::basic_types::PortInfo::input($name).with_default($default)
    };
}

/// Declares an output port.
#[macro_export]
macro_rules! output_port {
    ($name:expr) => {
        $crate::basic_types::PortInfo::output($name)
    };
}

/// Registers a leaf node type with a factory under a name:
///
/// ```ignore
/// register_action_node!(factory, "FindBall", FindBall);
/// ```
#[macro_export]
macro_rules! register_action_node {
    ($factory:expr, $name:expr, $type:ty) => {
        $factory.register_node::<$type>($name)
    };
}
