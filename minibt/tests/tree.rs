use minibt::{prelude::*, CreationError};

use nodes::{CountingNode, StatusNode};

mod nodes;

fn make_factory() -> Factory {
    let mut factory = Factory::new();
    register_action_node!(factory, "StatusNode", StatusNode);
    register_action_node!(factory, "CountingNode", CountingNode);
    factory
}

#[test]
fn visitor() {
    let xml = r#"
        <root>
            <BehaviorTree ID="main">
                <Sequence>
                    <Sequence>
                        <Inverter>
                            <StatusNode status="Success" />
                        </Inverter>
                        <StatusNode status = "Failure" />
                    </Sequence>
                </Sequence>
            </BehaviorTree>
        </root>
    "#
    .to_string();

    let factory = make_factory();
    let blackboard = Blackboard::create();

    let tree = factory.create_tree_from_text(xml, &blackboard);
    assert!(tree.is_ok());
    let tree = tree.unwrap();

    let nodes: Vec<&str> = tree.visit_nodes().map(|node| node.name()).collect();

    assert_eq!(
        nodes,
        vec![
            "Sequence",
            "Sequence",
            "Inverter",
            "StatusNode",
            "StatusNode"
        ]
    );
}

#[test]
fn sequence_stops_at_first_failure() {
    let xml = r#"
        <root>
            <BehaviorTree ID="main">
                <Sequence>
                    <CountingNode status="Success" />
                    <CountingNode status="Failure" />
                    <CountingNode status="Success" />
                </Sequence>
            </BehaviorTree>
        </root>
    "#
    .to_string();

    let factory = make_factory();
    let blackboard = Blackboard::create();
    let mut tree = factory.create_tree_from_text(xml, &blackboard).unwrap();

    assert_eq!(tree.tick_once().unwrap(), NodeStatus::Failure);
    // the third child is never reached
    assert_eq!(blackboard.get::<i64>("ticks"), Some(2));
}

#[test]
fn sequence_succeeds_when_all_children_do() {
    let xml = r#"
        <root>
            <BehaviorTree ID="main">
                <Sequence>
                    <CountingNode />
                    <CountingNode />
                </Sequence>
            </BehaviorTree>
        </root>
    "#
    .to_string();

    let factory = make_factory();
    let blackboard = Blackboard::create();
    let mut tree = factory.create_tree_from_text(xml, &blackboard).unwrap();

    // the status port defaults to Success
    assert_eq!(tree.tick_once().unwrap(), NodeStatus::Success);
    assert_eq!(blackboard.get::<i64>("ticks"), Some(2));
}

#[test]
fn sequence_resumes_at_running_child() {
    let xml = r#"
        <root>
            <BehaviorTree ID="main">
                <Sequence>
                    <CountingNode status="Success" />
                    <StatusNode status="Running" />
                </Sequence>
            </BehaviorTree>
        </root>
    "#
    .to_string();

    let factory = make_factory();
    let blackboard = Blackboard::create();
    let mut tree = factory.create_tree_from_text(xml, &blackboard).unwrap();

    assert_eq!(tree.tick_once().unwrap(), NodeStatus::Running);
    assert_eq!(tree.tick_once().unwrap(), NodeStatus::Running);
    // the completed first child is not ticked again while the second runs
    assert_eq!(blackboard.get::<i64>("ticks"), Some(1));
}

#[test]
fn fallback_stops_at_first_success() {
    let xml = r#"
        <root>
            <BehaviorTree ID="main">
                <Fallback>
                    <CountingNode status="Failure" />
                    <CountingNode status="Success" />
                    <CountingNode status="Success" />
                </Fallback>
            </BehaviorTree>
        </root>
    "#
    .to_string();

    let factory = make_factory();
    let blackboard = Blackboard::create();
    let mut tree = factory.create_tree_from_text(xml, &blackboard).unwrap();

    assert_eq!(tree.tick_once().unwrap(), NodeStatus::Success);
    assert_eq!(blackboard.get::<i64>("ticks"), Some(2));
}

#[test]
fn fallback_fails_when_all_children_do() {
    let xml = r#"
        <root>
            <BehaviorTree ID="main">
                <Fallback>
                    <AlwaysFailure />
                    <CountingNode status="Failure" />
                </Fallback>
            </BehaviorTree>
        </root>
    "#
    .to_string();

    let factory = make_factory();
    let blackboard = Blackboard::create();
    let mut tree = factory.create_tree_from_text(xml, &blackboard).unwrap();

    assert_eq!(tree.tick_once().unwrap(), NodeStatus::Failure);
    assert_eq!(blackboard.get::<i64>("ticks"), Some(1));
}

#[test]
fn inverter_flips_the_result() {
    let xml = r#"
        <root>
            <BehaviorTree ID="main">
                <Inverter>
                    <AlwaysSuccess />
                </Inverter>
            </BehaviorTree>
        </root>
    "#
    .to_string();

    let factory = make_factory();
    let blackboard = Blackboard::create();
    let mut tree = factory.create_tree_from_text(xml, &blackboard).unwrap();

    assert_eq!(tree.tick_once().unwrap(), NodeStatus::Failure);
}

#[test]
fn main_tree_is_selected_by_id() {
    let xml = r#"
        <root main_tree_to_execute="Second">
            <BehaviorTree ID="First">
                <AlwaysFailure />
            </BehaviorTree>
            <BehaviorTree ID="Second">
                <AlwaysSuccess />
            </BehaviorTree>
        </root>
    "#
    .to_string();

    let factory = make_factory();
    let blackboard = Blackboard::create();
    let mut tree = factory.create_tree_from_text(xml, &blackboard).unwrap();

    assert_eq!(tree.tick_once().unwrap(), NodeStatus::Success);
}

#[test]
fn unregistered_node_is_rejected() {
    let xml = r#"
        <root>
            <BehaviorTree ID="main">
                <Sequence>
                    <DoesNotExist />
                </Sequence>
            </BehaviorTree>
        </root>
    "#
    .to_string();

    let factory = make_factory();
    let blackboard = Blackboard::create();

    let err = factory.create_tree_from_text(xml, &blackboard).unwrap_err();
    assert!(matches!(err, CreationError::UnregisteredNode(name) if name == "DoesNotExist"));
}

#[test]
fn undeclared_port_is_rejected() {
    let xml = r#"
        <root>
            <BehaviorTree ID="main">
                <StatusNode status="Success" bogus="1" />
            </BehaviorTree>
        </root>
    "#
    .to_string();

    let factory = make_factory();
    let blackboard = Blackboard::create();

    let err = factory.create_tree_from_text(xml, &blackboard).unwrap_err();
    assert!(
        matches!(err, CreationError::UndeclaredPort(node, port) if node == "StatusNode" && port == "bogus")
    );
}

#[test]
fn inverter_needs_exactly_one_child() {
    let xml = r#"
        <root>
            <BehaviorTree ID="main">
                <Inverter>
                    <AlwaysSuccess />
                    <AlwaysSuccess />
                </Inverter>
            </BehaviorTree>
        </root>
    "#
    .to_string();

    let factory = make_factory();
    let blackboard = Blackboard::create();

    let err = factory.create_tree_from_text(xml, &blackboard).unwrap_err();
    assert!(matches!(err, CreationError::Structure(_)));
}

#[test]
fn halt_resets_the_tree() {
    let xml = r#"
        <root>
            <BehaviorTree ID="main">
                <Sequence>
                    <CountingNode status="Success" />
                    <StatusNode status="Running" />
                </Sequence>
            </BehaviorTree>
        </root>
    "#
    .to_string();

    let factory = make_factory();
    let blackboard = Blackboard::create();
    let mut tree = factory.create_tree_from_text(xml, &blackboard).unwrap();

    assert_eq!(tree.tick_once().unwrap(), NodeStatus::Running);
    tree.halt();

    // after a halt the sequence starts over from its first child
    assert_eq!(tree.tick_once().unwrap(), NodeStatus::Running);
    assert_eq!(blackboard.get::<i64>("ticks"), Some(2));
}
