//! Example query bodies in the node's query DSL.

use serde_json::{json, Value};

/// Matches documents where `Area` is present and not null.
pub fn area_exists() -> Value {
    json!({
        "query": {
            "exists": {
                "field": "Area"
            }
        }
    })
}

/// Latitude between 10 and 50, boosted 2x, sorted by `NumericCode`.
pub fn latitude_range() -> Value {
    json!({
        "query": {
            "range": {
                "Latitude": {
                    "gte": 10,
                    "lte": 50,
                    "boost": 2
                }
            }
        },
        "sort": {
            "NumericCode": "asc"
        }
    })
}

/// Countries whose `CurrencyCode` is GIP or UAH.
pub fn currency_codes() -> Value {
    json!({
        "query": {
            "match": {
                "CurrencyCode": "GIP UAH"
            }
        }
    })
}

/// "Pound" across currency fields; `CurrencyName` weighs 3x.
pub fn currency_multi_match() -> Value {
    json!({
        "query": {
            "multi_match": {
                "query": "Pound",
                "fields": ["CurrencyName^3", "CurrencyCode"]
            }
        }
    })
}

/// Full-text match on `Name`.
pub fn name_match(name: &str) -> Value {
    json!({
        "query": {
            "match": {
                "Name": name
            }
        }
    })
}

/// The four example queries, in the order they are run.
pub fn examples() -> [Value; 4] {
    [
        area_exists(),
        latitude_range(),
        currency_codes(),
        currency_multi_match(),
    ]
}
