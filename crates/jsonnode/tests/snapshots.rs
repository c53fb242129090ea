#![allow(missing_docs)]
#![allow(clippy::needless_raw_string_hashes)]

use core::fmt::Write;

use jsonnode::{CodecOptions, Navigate, Node, Value};

const PLATTER: &str = r#"{
    "platter": "slate",
    "cheeses": ["cheddar", "swiss", "manchego"],
    "with": {
        "fruit": [
            {"type": "grapes", "count": 8},
            {"type": "strawberries", "count": 3}
        ],
        "meat": "prosciutto"
    }
}"#;

/// Lists every node reachable from `node`, depth first, with its value.
fn render_tree(node: &Node, out: &mut String) {
    writeln!(out, "{node:?} = {}", node.value()).unwrap();
    match node.value() {
        Value::Object(map) => {
            for key in map.keys() {
                render_tree(&node.get(key).unwrap(), out);
            }
        }
        Value::Array(_) => {
            for element in node.as_array().unwrap() {
                render_tree(&element, out);
            }
        }
        _ => {}
    }
}

#[test]
fn snapshot_platter_tree() {
    let root = jsonnode::from_str(PLATTER).unwrap();
    let mut out = String::new();
    render_tree(&root, &mut out);

    insta::assert_snapshot!(out, @r#"
    Node($) = {"cheeses":["cheddar","swiss","manchego"],"platter":"slate","with":{"fruit":[{"count":8,"type":"grapes"},{"count":3,"type":"strawberries"}],"meat":"prosciutto"}}
    Node($.cheeses) = ["cheddar","swiss","manchego"]
    Node($.cheeses[0]) = "cheddar"
    Node($.cheeses[1]) = "swiss"
    Node($.cheeses[2]) = "manchego"
    Node($.platter) = "slate"
    Node($.with) = {"fruit":[{"count":8,"type":"grapes"},{"count":3,"type":"strawberries"}],"meat":"prosciutto"}
    Node($.with.fruit) = [{"count":8,"type":"grapes"},{"count":3,"type":"strawberries"}]
    Node($.with.fruit[0]) = {"count":8,"type":"grapes"}
    Node($.with.fruit[0].count) = 8
    Node($.with.fruit[0].type) = "grapes"
    Node($.with.fruit[1]) = {"count":3,"type":"strawberries"}
    Node($.with.fruit[1].count) = 3
    Node($.with.fruit[1].type) = "strawberries"
    Node($.with.meat) = "prosciutto"
    "#);
}

#[test]
fn snapshot_pretty_element() {
    let root = jsonnode::from_str(PLATTER).unwrap();
    let fruit = root.get("with").get("fruit").as_array().unwrap();
    let options = CodecOptions {
        pretty: true,
        ..Default::default()
    };

    insta::assert_snapshot!(jsonnode::to_string_with(Some(&fruit[0]), options).unwrap(), @r#"
    {
      "count": 8,
      "type": "grapes"
    }
    "#);
}
