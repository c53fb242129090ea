#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use jsonnode::{CodecOptions, Navigate, Node, Value};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

const HEADER: usize = 1; // option flags
const MAX_CHECKED_DEPTH: usize = 128;

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8 & 0x03);
        HEADER + append_value(&mut data[HEADER..], size, max_size - HEADER)
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Writes a structurally valid document so the navigation paths get exercised
/// rather than only the decoder's error handling.
fn append_value(data: &mut [u8], size: usize, limit: usize) -> usize {
    let value = loop {
        let s = with_rng(|rng| rng.random_range(size / 2..=size * 2).min(limit));
        let bytes: Vec<u8> = with_rng(|rng| (0..s).map(|_| rng.random::<u8>()).collect());
        if let Ok(value) = ArbitraryValue::arbitrary(&mut arbitrary::Unstructured::new(&bytes)) {
            break value;
        }
    };

    let serialized = serde_json::to_vec(&value.0).expect("Failed to serialize arbitrary value");

    let len = serialized.len().min(limit);
    data[..len].copy_from_slice(&serialized[..len]);

    len
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug)]
struct ArbitraryValue(serde_json::Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        use serde_json::{Map, Number, Value};

        let value = match u.choose_index(21)? {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => {
                let n: f64 = u.arbitrary()?;
                Value::Number(Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?)
            }
            3..=10 => Value::String(u.arbitrary()?),
            11..=15 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            16..=20 => {
                let m: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                Value::Object(Map::from_iter(m.into_iter().map(|(k, v)| (k, v.0))))
            }
            _ => Err(arbitrary::Error::IncorrectFormat)?,
        };
        Ok(ArbitraryValue(value))
    }
}

/// Deepest nesting of arrays and objects in `value`, walked without recursion.
fn nesting_depth(value: &Value) -> usize {
    let mut deepest = 0;
    let mut pending = vec![(value, 0)];
    while let Some((value, depth)) = pending.pop() {
        deepest = deepest.max(depth);
        match value {
            Value::Object(map) => pending.extend(map.values().map(|v| (v, depth + 1))),
            Value::Array(items) => pending.extend(items.iter().map(|v| (v, depth + 1))),
            _ => {}
        }
    }
    deepest
}

/// Every handle below `node` must resolve to the matching part of `expected`.
fn check_tree(node: &Node, expected: &Value) {
    assert_eq!(node.value(), expected);
    match expected {
        Value::Object(map) => {
            let narrowed = node.as_node().expect("object narrows to a node");
            for (key, member) in map {
                let child = node.get(key).expect("existing key is found");
                if key.is_empty() {
                    assert_eq!(child.value(), expected);
                    continue;
                }
                assert_eq!(narrowed.get(key).value(), member);
                check_tree(&child, member);
            }
        }
        Value::Array(items) => {
            let elements = node.as_array().expect("array expands");
            assert_eq!(elements.len(), items.len());
            for (element, item) in elements.iter().zip(items) {
                check_tree(element, item);
            }
        }
        _ => {
            assert!(node.get("").is_none());
            assert!(node.as_node().is_none());
            assert!(node.as_array().is_none());
        }
    }
}

fn navigate(data: &[u8]) {
    if data.len() < HEADER {
        return;
    }

    let flags = data[0];
    let options = CodecOptions {
        require_object_root: flags & 1 != 0,
        pretty: flags & 2 != 0,
    };

    let Ok(root) = jsonnode::from_slice_with(&data[HEADER..], options) else {
        return;
    };
    if options.require_object_root {
        assert!(root.value().is_object());
    }

    // Decoding has no depth limit, but the recursive checks and the encoder do.
    if nesting_depth(root.value()) > MAX_CHECKED_DEPTH {
        return;
    }

    let expected = root.value().clone();
    check_tree(&root, &expected);

    let encoded = jsonnode::to_vec_with(Some(&root), options).expect("decoded values encode");
    let decoded = jsonnode::from_slice(&encoded).expect("encoded values decode");
    assert_eq!(decoded.value(), &expected);
}

fuzz_target!(|data: &[u8]| navigate(data));
