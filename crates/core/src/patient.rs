//! Patient demographics record.

use crate::Record;
use medrec_types::{EmailAddress, NonEmptyText};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A patient's demographic record.
///
/// `email` is the business key and must be unique across stored patients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Server-assigned identity; absent until the record is stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[schema(value_type = String, example = "John")]
    pub first_name: NonEmptyText,
    #[schema(value_type = String, example = "Smith")]
    pub last_name: NonEmptyText,
    /// Government identifier.
    #[schema(example = "123-12-1234")]
    pub ssn: String,
    #[schema(value_type = String, example = "email1@mail.com")]
    pub email: EmailAddress,
    pub age: i32,
    pub height: i32,
    pub weight: i32,
    #[serde(default)]
    pub insurance: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
}

impl Record for Patient {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_without_id() {
        let json = r#"{
            "firstName": "John",
            "lastName": "Smith",
            "ssn": "123-12-1234",
            "email": "email1@mail.com",
            "age": 29,
            "height": 80,
            "weight": 150,
            "insurance": "Self-Insured",
            "gender": "Male",
            "street": "1 Main St",
            "city": "New York",
            "state": "NY",
            "zipCode": "29445"
        }"#;

        let patient: Patient = serde_json::from_str(json).unwrap();
        assert_eq!(patient.id, None);
        assert_eq!(patient.email.as_str(), "email1@mail.com");
        assert_eq!(patient.zip_code, "29445");
    }

    #[test]
    fn rejects_blank_first_name() {
        let json = r#"{
            "firstName": " ",
            "lastName": "Smith",
            "ssn": "123-12-1234",
            "email": "email1@mail.com",
            "age": 29,
            "height": 80,
            "weight": 150
        }"#;

        assert!(serde_json::from_str::<Patient>(json).is_err());
    }
}
