use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The editable contact fields, named as the remote service expects them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ContactField {
    FirstName,
    LastName,
    Email,
    Phone,
}

/// A not-yet-persisted contact. `local_id` targets the row in the form and
/// never crosses the wire.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ContactDraft {
    #[serde(skip)]
    pub local_id: Uuid,
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Phone")]
    pub phone: String,
}

impl ContactDraft {
    pub fn new() -> ContactDraft {
        ContactDraft {
            local_id: Uuid::new_v4(),
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
        }
    }

    /// Field copy under a fresh `local_id`.
    pub fn duplicate(&self) -> ContactDraft {
        ContactDraft { local_id: Uuid::new_v4(), ..self.clone() }
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::FirstName => self.first_name = value,
            ContactField::LastName => self.last_name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.first_name.is_empty()
            && self.last_name.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
    }
}

impl Default for ContactDraft {
    fn default() -> Self {
        ContactDraft::new()
    }
}

impl Hash for ContactDraft {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.local_id.hash(state);
    }
}

impl std::cmp::PartialEq<ContactDraft> for ContactDraft {
    fn eq(&self, other: &Self) -> bool {
        self.local_id == other.local_id
    }
}

impl Eq for ContactDraft {}

/// A contact confirmed by the remote save, carrying the server identifier.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ContactRecord {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Phone")]
    pub phone: String,
}

impl ContactRecord {
    pub fn new(
        id: String,
        first_name: String,
        last_name: String,
        email: String,
        phone: String,
    ) -> ContactRecord {
        ContactRecord { id, first_name, last_name, email, phone }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    pub fn record_url(&self) -> String {
        format!("/contacts/{}", self.id)
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::FirstName => &self.first_name,
            ContactField::LastName => &self.last_name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::FirstName => self.first_name = value,
            ContactField::LastName => self.last_name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
        }
    }
}

impl Hash for ContactRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::cmp::PartialEq<ContactRecord> for ContactRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ContactRecord {}

/// A single-cell update captured from the inline-editable table, keyed by the
/// server identifier of the record it belongs to.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CellPatch {
    #[serde(rename = "Id")]
    pub id: String,
    pub field: ContactField,
    pub value: String,
}

/// Merges each patch into the record with the matching identifier. Patches
/// without a match are not an error; their ids are handed back so the caller
/// can log the drop.
pub fn apply_patches(
    records: &[ContactRecord],
    patches: &[CellPatch],
) -> (Vec<ContactRecord>, Vec<String>) {
    let mut merged: Vec<ContactRecord> = records.to_vec();
    let mut unmatched = Vec::new();

    for patch in patches {
        match merged.iter_mut().find(|record| record.id == patch.id) {
            Some(record) => record.set_field(patch.field, patch.value.clone()),
            None => unmatched.push(patch.id.clone()),
        }
    }

    (merged, unmatched)
}

#[cfg(test)]
mod model_tests {
    use super::*;

    fn ann() -> ContactRecord {
        ContactRecord::new(
            "001".to_string(),
            "Ann".to_string(),
            "Lee".to_string(),
            "ann@x.com".to_string(),
            "5551234567".to_string(),
        )
    }

    #[test]
    fn draft_serialises_to_wire_casing_without_local_id() {
        let mut draft = ContactDraft::new();
        draft.set_field(ContactField::FirstName, "Ann".to_string());
        draft.set_field(ContactField::Email, "ann@x.com".to_string());

        let value = serde_json::to_value(&draft).unwrap();

        assert_eq!(value["FirstName"], "Ann");
        assert_eq!(value["Email"], "ann@x.com");
        assert!(value.get("local_id").is_none());
    }

    #[test]
    fn record_serialises_with_server_identifier() {
        let value = serde_json::to_value(&ann()).unwrap();

        assert_eq!(value["Id"], "001");
        assert_eq!(value["Phone"], "5551234567");
    }

    #[test]
    fn display_name_composes_both_names() {
        assert_eq!("Ann Lee", ann().display_name());
    }

    #[test]
    fn display_name_tolerates_a_missing_name_part() {
        let mut record = ann();
        record.set_field(ContactField::LastName, String::new());

        assert_eq!("Ann", record.display_name());
    }

    #[test]
    fn record_url_points_at_the_record_view() {
        assert_eq!("/contacts/001", ann().record_url());
    }

    #[test]
    fn matching_patch_overwrites_exactly_one_field() {
        let patch = CellPatch {
            id: "001".to_string(),
            field: ContactField::Email,
            value: "lee@x.com".to_string(),
        };

        let (merged, unmatched) = apply_patches(&[ann()], &[patch]);

        assert!(unmatched.is_empty());
        assert_eq!("lee@x.com", merged[0].email);
        assert_eq!("Ann", merged[0].first_name);
        assert_eq!("5551234567", merged[0].phone);
    }

    #[test]
    fn unmatched_patch_is_dropped_and_reported() {
        let patch = CellPatch {
            id: "999".to_string(),
            field: ContactField::Email,
            value: "x".to_string(),
        };

        let (merged, unmatched) = apply_patches(&[ann()], &[patch]);

        assert_eq!(vec!["999".to_string()], unmatched);
        assert_eq!("ann@x.com", merged[0].email);
    }

    #[test]
    fn duplicate_copies_fields_under_a_fresh_id() {
        let mut draft = ContactDraft::new();
        draft.set_field(ContactField::FirstName, "Ann".to_string());

        let copy = draft.duplicate();

        assert_eq!(draft.first_name, copy.first_name);
        assert_ne!(draft.local_id, copy.local_id);
    }
}
