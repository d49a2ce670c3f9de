use std::collections::HashSet;

use serde_json::{Map, Value};

/// An address as the service returns it: an open mapping whose shape is not
/// fixed up front. Key order is the service's own (serde_json is built with
/// `preserve_order`).
pub type AddressRecord = Map<String, Value>;

/// Keys the service is known to emit, in display priority order. Keys not
/// listed here render after these, in the order the service sent them.
pub const FIELD_ORDER: &[&str] = &[
    "Full Name",
    "Gender",
    "Birthday",
    "Phone Number",
    "Credit card brand",
    "Credit card number",
    "Expire",
    "CVV",
    "Street",
    "City/Town",
    "State/Province/Region",
    "Zip/Postal Code",
    "Country",
    "Country_Code",
    "Latitude",
    "Longitude",
    "Social Security Number",
];

pub const NO_ADDRESS_DATA: &str = "No address data.";

/// Renders a record as one `key: value` line per key, known keys first in
/// [`FIELD_ORDER`] sequence, everything else after in record order. Presence
/// means the key exists; empty strings and zeros still render.
pub fn format_address(record: Option<&AddressRecord>) -> String {
    let record = match record {
        Some(record) => record,
        None => return NO_ADDRESS_DATA.to_string(),
    };

    let mut formatted = String::new();
    let mut displayed: HashSet<&str> = HashSet::new();

    for key in FIELD_ORDER {
        if let Some(value) = record.get(*key) {
            formatted.push_str(&format!("{}: {}\n", key, scalar_text(value)));
            displayed.insert(key);
        }
    }

    for (key, value) in record {
        if !displayed.contains(key.as_str()) {
            formatted.push_str(&format!("{}: {}\n", key, scalar_text(value)));
        }
    }

    formatted
}

// Strings render bare, everything else as its JSON form.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> AddressRecord {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn absent_record_renders_placeholder() {
        assert_eq!(format_address(None), NO_ADDRESS_DATA);
    }

    #[test]
    fn known_keys_render_in_field_order() {
        // Input order is deliberately scrambled; Street precedes Country in
        // FIELD_ORDER and Foo is unlisted.
        let record = record(json!({
            "Foo": "bar",
            "Country": "US",
            "Street": "1 Main"
        }));
        let rendered = format_address(Some(&record));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines, vec!["Street: 1 Main", "Country: US", "Foo: bar"]);
    }

    #[test]
    fn unlisted_keys_keep_record_order() {
        let record = record(json!({
            "Zeta": 1,
            "Alpha": 2,
            "Country": "BD"
        }));
        let rendered = format_address(Some(&record));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines, vec!["Country: BD", "Zeta: 1", "Alpha: 2"]);
    }

    #[test]
    fn every_key_renders_exactly_once() {
        let record = record(json!({
            "Full Name": "Jane Roe",
            "Street": "1 Main",
            "Country": "US",
            "Extra": "x"
        }));
        let output = format_address(Some(&record));
        assert_eq!(output.lines().count(), record.len());
        for key in record.keys() {
            assert_eq!(
                output.lines().filter(|l| l.starts_with(&format!("{}:", key))).count(),
                1,
                "{} should appear once",
                key
            );
        }
    }

    #[test]
    fn falsy_but_present_values_render() {
        let record = record(json!({
            "Street": "",
            "CVV": 0
        }));
        let rendered = format_address(Some(&record));
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines, vec!["CVV: 0", "Street: "]);
    }

    #[test]
    fn string_values_render_without_quotes() {
        let record = record(json!({
            "Country": "Bangladesh",
            "Latitude": 23.81
        }));
        let output = format_address(Some(&record));
        assert!(output.contains("Country: Bangladesh\n"));
        assert!(output.contains("Latitude: 23.81\n"));
    }
}
