//! Person entity
//!
//! Storage document shape, external representation, and write-time
//! field constraints.

mod validator;

pub use validator::{validate, ValidationFailure, NAME_MIN_LEN, NUMBER_MIN_LEN};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A person record as held by the document store.
///
/// Carries storage metadata (document id, revision counter) that must never
/// reach API clients; convert with [`Person::from`] before serializing a
/// response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDocument {
    /// Store-assigned identifier, stable for the record's lifetime.
    pub id: Uuid,
    pub name: String,
    pub number: String,
    /// Bumped on every write.
    pub revision: u64,
}

/// External representation returned to API clients.
///
/// Exactly `id`, `name`, `number` - no storage metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub number: String,
}

impl From<&PersonDocument> for Person {
    fn from(document: &PersonDocument) -> Self {
        Self {
            id: document.id.to_string(),
            name: document.name.clone(),
            number: document.number.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> PersonDocument {
        PersonDocument {
            id: Uuid::new_v4(),
            name: "Arto Hellas".to_string(),
            number: "040-12345678".to_string(),
            revision: 3,
        }
    }

    #[test]
    fn external_representation_has_exactly_three_fields() {
        let person = Person::from(&sample_document());
        let value = serde_json::to_value(&person).unwrap();

        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert!(object.contains_key("id"));
        assert!(object.contains_key("name"));
        assert!(object.contains_key("number"));
    }

    #[test]
    fn external_id_is_the_stringified_document_id() {
        let document = sample_document();
        let person = Person::from(&document);
        assert_eq!(person.id, document.id.to_string());
        assert_eq!(person.name, document.name);
        assert_eq!(person.number, document.number);
    }

    #[test]
    fn serialization_round_trips() {
        let person = Person::from(&sample_document());
        let json = serde_json::to_string(&person).unwrap();
        let back: Person = serde_json::from_str(&json).unwrap();
        assert_eq!(back, person);
    }
}
