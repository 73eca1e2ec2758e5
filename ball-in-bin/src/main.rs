use std::{fs::File, io::Read, path::Path};

use ball_in_bin::register_nodes;
use minibt::prelude::*;

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    // create BT environment
    let mut factory = Factory::new();
    let blackboard = Blackboard::create();

    // register all needed nodes
    register_nodes(&mut factory);

    // read the tree topology shipped next to this crate
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("bt_tree.xml");
    let mut xml = String::new();
    File::open(path)?.read_to_string(&mut xml)?;

    // create the BT
    let mut tree = factory.create_tree_from_text(xml, &blackboard)?;

    // run the BT
    log::debug!("ticking tree");
    let result = tree.tick_while_running()?;
    println!("tree result is {result}");

    Ok(())
}
