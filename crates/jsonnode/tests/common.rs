#![allow(missing_docs)]
#![allow(clippy::needless_raw_string_hashes)]

use jsonnode::{Navigate, Value};

pub const ORIGINAL: &str = r#"
{
    "status": "ok",
    "installation": {
        "license_key": null,
        "entitlement": null,
        "product": {
            "id": 103,
            "name": "Nebula Cloud Console Account",
            "customer_type": "business",
            "active": true,
            "code": "NCCA-B",
            "grace_multiplier": 1.0,
            "grace_term_days": 0,
            "is_trial_allowed": false,
            "trial_duration": 30,
            "parent_id": null,
            "real_product_codes": null,
            "created_at": "2017-02-07T18:08:32Z"
        },
        "installation_token": "3SGWHsMh6Sxtcovhgvsz1487266817",
        "trial_status": "trial_available",
        "machine_id": "b4aa12b3-4110-4966-8f4c-ef8ff298d613",
        "product_id": 103,
        "ip_address": "207.98.208.136, 207.98.208.136",
        "volume_used": 1,
        "registered_at": "2017-02-16T17:40:17Z",
        "redeemed_at": null
    }
}"#;

#[test]
fn nested_record_fields_resolve() {
    let root = jsonnode::from_str(ORIGINAL).unwrap();
    let installation = root.get("installation");
    let product = installation.get("product");

    assert_eq!(root.get("status").as_string(), Some("ok"));
    assert_eq!(product.get("id").as_number(), Some(103.0));
    assert_eq!(product.get("grace_multiplier").as_number(), Some(1.0));
    assert_eq!(product.get("active").as_bool(), Some(true));
    assert_eq!(product.get("is_trial_allowed").as_bool(), Some(false));
    assert_eq!(
        installation.get("machine_id").as_string(),
        Some("b4aa12b3-4110-4966-8f4c-ef8ff298d613")
    );

    // Present but null.
    let license_key = installation.get("license_key");
    assert!(license_key.is_some());
    assert_eq!(license_key.value(), &Value::Null);
    assert_eq!(license_key.as_string(), None);

    // Timestamps stay strings.
    assert_eq!(
        product.get("created_at").as_string(),
        Some("2017-02-07T18:08:32Z")
    );
}

#[test]
fn document_matches_reference_decoder() {
    let root = jsonnode::from_str(ORIGINAL).unwrap();
    let reference: serde_json::Value = serde_json::from_str(ORIGINAL).unwrap();

    // Re-decode the reference decoder's compact rendering and compare trees.
    let theirs = serde_json::to_string(&reference).unwrap();
    assert_eq!(jsonnode::from_str(&theirs).unwrap().value(), root.value());

    // Our own encoding is valid JSON for the reference decoder.
    let ours = jsonnode::to_string(Some(&root)).unwrap();
    let reparsed: serde_json::Value = serde_json::from_str(&ours).unwrap();
    assert_eq!(reparsed["installation"]["product"]["id"], 103);
    assert_eq!(reparsed["installation"]["product"]["grace_multiplier"], 1);
}
