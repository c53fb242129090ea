//! Walks a small order document the way a consumer of an HTTP API would:
//! pull out a few typed fields, expand the arrays, and bail out quietly at
//! the first field that is missing or has an unexpected shape.
//!
//! Run with
//!
//! ```bash
//! cargo run -p jsonnode --example platter
//! ```

#![allow(clippy::needless_raw_string_hashes)]

use jsonnode::Navigate;

const RAW: &str = r#"{
    "platter": "slate",
    "cheeses": ["cheddar", "swiss", "manchego"],
    "with": {
        "fruit": [{
                "type": "grapes",
                "count": 8
            },
            {
                "type": "strawberries",
                "count": 3
            }
        ],
        "meat": "prosciutto"
    }
}"#;

fn main() -> Result<(), jsonnode::Error> {
    let root = jsonnode::from_str(RAW)?;

    let Some(platter) = root.get("platter").as_string().map(str::to_owned) else {
        return Ok(());
    };
    println!("Platter: {platter}");

    let Some(cheeses) = root.get("cheeses").as_array() else {
        return Ok(());
    };
    println!("Cheeses ({}):", cheeses.len());
    for cheese in &cheeses {
        let Some(name) = cheese.as_string() else {
            return Ok(());
        };
        println!("    {name}");
    }

    // Nothing to check between links: a missing "with" makes "meat" missing too.
    let with = root.get("with");
    let Some(meat) = with.get("meat").as_string().map(str::to_owned) else {
        return Ok(());
    };
    println!("Meat: {meat}");

    let Some(fruit) = with.get("fruit").as_array() else {
        return Ok(());
    };
    println!("Fruit ({}):", fruit.len());
    for item in &fruit {
        let item = item.as_node();
        let (Some(kind), Some(count)) = (
            item.get("type").as_string().map(str::to_owned),
            item.get("count").as_number(),
        ) else {
            return Ok(());
        };
        println!("    {kind} x{count}");
    }

    Ok(())
}
