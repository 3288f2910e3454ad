//! Wire types exchanged with the customers endpoint.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Server-assigned record identifier.
///
/// Treated as opaque text. Any other JSON value is kept as its JSON text,
/// so `5` and `"5"` address the same record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Other(serde_json::Value),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => RecordId(text),
            Raw::Other(value) => RecordId(value.to_string()),
        })
    }
}

/// A customer as returned by `GET /customers` and `GET /customers/{id}`.
///
/// Every field may be absent or null on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Body of `POST /customers` and `PUT /customers/{id}`: the four visible
/// form fields, verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_accepts_string_and_numeric_ids() {
        let text: CustomerRecord = serde_json::from_value(json!({ "id": "abc" })).unwrap();
        let number: CustomerRecord = serde_json::from_value(json!({ "id": 5 })).unwrap();

        assert_eq!(text.id, Some(RecordId::from("abc")));
        assert_eq!(number.id, Some(RecordId::from("5")));
    }

    #[test]
    fn test_record_keeps_float_and_bool_ids_as_text() {
        let float: CustomerRecord = serde_json::from_value(json!({ "id": 1.5 })).unwrap();
        let flag: CustomerRecord = serde_json::from_value(json!({ "id": true })).unwrap();

        assert_eq!(float.id, Some(RecordId::from("1.5")));
        assert_eq!(flag.id, Some(RecordId::from("true")));
    }

    #[test]
    fn test_list_with_unusual_id_still_decodes() {
        let records: Vec<CustomerRecord> = serde_json::from_value(json!([
            { "id": 7, "name": "Ann" },
            { "id": 2.0, "name": "Bob" },
            { "id": false, "name": "Cy" },
        ]))
        .unwrap();

        let ids: Vec<_> = records.iter().filter_map(|r| r.id.as_ref()).map(RecordId::as_str).collect();
        assert_eq!(ids, ["7", "2.0", "false"]);
    }

    #[test]
    fn test_record_tolerates_missing_and_null_fields() {
        let record: CustomerRecord =
            serde_json::from_value(json!({ "id": null, "name": "Ann", "phone": null })).unwrap();

        assert_eq!(record.id, None);
        assert_eq!(record.name.as_deref(), Some("Ann"));
        assert_eq!(record.email, None);
        assert_eq!(record.phone, None);
        assert_eq!(record.address, None);
    }

    #[test]
    fn test_payload_serializes_exactly_four_fields() {
        let payload = CustomerPayload {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            phone: String::new(),
            address: "1 Road".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "name": "Ann", "email": "ann@example.com", "phone": "", "address": "1 Road" })
        );
    }
}
