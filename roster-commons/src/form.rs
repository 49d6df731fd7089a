use failure::Fail;
use uuid::Uuid;

use crate::model::{ContactDraft, ContactField};

#[derive(Debug, Fail)]
pub enum FormError {
    #[fail(display = "At least one contact row must remain")]
    LastRow,
    #[fail(display = "No contact row with id: {}", id)]
    UnknownRow { id: Uuid },
}

/// Ordered draft rows behind the contact form. Every operation is a pure
/// transformation producing the next state; rows are targeted by their
/// `local_id`, never by position.
#[derive(Clone, Debug)]
pub struct FormState {
    rows: Vec<ContactDraft>,
}

impl FormState {
    pub fn new() -> FormState {
        FormState { rows: vec![ContactDraft::new()] }
    }

    pub fn rows(&self) -> &[ContactDraft] {
        &self.rows
    }

    pub fn add_row(&self) -> FormState {
        let mut rows = self.rows.clone();
        rows.push(ContactDraft::new());
        FormState { rows }
    }

    /// Refuses to remove the final row: the form never goes empty.
    pub fn remove_row(&self, id: Uuid) -> Result<FormState, FormError> {
        if self.rows.len() == 1 {
            return Err(FormError::LastRow);
        }

        let position = self.position(id)?;
        let mut rows = self.rows.clone();
        rows.remove(position);
        Ok(FormState { rows })
    }

    pub fn update_field(
        &self,
        id: Uuid,
        field: ContactField,
        value: &str,
    ) -> Result<FormState, FormError> {
        let position = self.position(id)?;
        let mut rows = self.rows.clone();
        rows[position].set_field(field, value.to_string());
        Ok(FormState { rows })
    }

    /// Inserts a field copy of the identified row directly after it.
    pub fn clone_row(&self, id: Uuid) -> Result<FormState, FormError> {
        let position = self.position(id)?;
        let mut rows = self.rows.clone();
        let copy = rows[position].duplicate();
        rows.insert(position + 1, copy);
        Ok(FormState { rows })
    }

    pub fn reset(&self) -> FormState {
        FormState::new()
    }

    fn position(&self, id: Uuid) -> Result<usize, FormError> {
        self.rows
            .iter()
            .position(|row| row.local_id == id)
            .ok_or(FormError::UnknownRow { id })
    }
}

impl Default for FormState {
    fn default() -> Self {
        FormState::new()
    }
}

#[cfg(test)]
mod form_tests {
    use super::*;

    #[test]
    fn starts_with_a_single_blank_row() {
        let form = FormState::new();

        assert_eq!(1, form.rows().len());
        assert!(form.rows()[0].is_blank());
    }

    #[test]
    fn added_rows_are_appended_blank() {
        let mut form = FormState::new();
        for _ in 0..3 {
            form = form.add_row();
        }

        assert_eq!(4, form.rows().len());
        assert!(form.rows().iter().all(ContactDraft::is_blank));
    }

    #[test]
    fn removing_the_last_row_is_refused() {
        let form = FormState::new();
        let id = form.rows()[0].local_id;

        let result = form.remove_row(id);

        assert!(match result {
            Err(FormError::LastRow) => true,
            _ => false,
        });
        assert_eq!(1, form.rows().len());
    }

    #[test]
    fn removal_targets_the_identified_row() {
        let form = FormState::new().add_row().add_row();
        let removed_id = form.rows()[1].local_id;

        let next = form.remove_row(removed_id).unwrap();

        assert_eq!(2, next.rows().len());
        assert!(next.rows().iter().all(|row| row.local_id != removed_id));
    }

    #[test]
    fn update_touches_exactly_one_field() {
        let form = FormState::new().add_row();
        let id = form.rows()[0].local_id;

        let next = form.update_field(id, ContactField::Email, "a@b.com").unwrap();

        assert_eq!("a@b.com", next.rows()[0].email);
        assert!(next.rows()[0].first_name.is_empty());
        assert!(next.rows()[1].is_blank());
    }

    #[test]
    fn clone_inserts_the_copy_after_the_original() {
        let form = FormState::new().add_row();
        let first = form.rows()[0].local_id;
        let form = form.update_field(first, ContactField::FirstName, "Ann").unwrap();

        let next = form.clone_row(first).unwrap();

        assert_eq!(3, next.rows().len());
        assert_eq!("Ann", next.rows()[1].first_name);
        assert_ne!(first, next.rows()[1].local_id);
    }

    #[test]
    fn mutating_the_copy_leaves_the_original_alone() {
        let form = FormState::new();
        let original = form.rows()[0].local_id;
        let form = form.update_field(original, ContactField::FirstName, "Ann").unwrap();
        let form = form.clone_row(original).unwrap();
        let copy = form.rows()[1].local_id;

        let next = form.update_field(copy, ContactField::FirstName, "Bea").unwrap();

        assert_eq!("Ann", next.rows()[0].first_name);
        assert_eq!("Bea", next.rows()[1].first_name);
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let form = FormState::new().add_row();

        let result = form.update_field(Uuid::new_v4(), ContactField::Phone, "5551234567");

        assert!(match result {
            Err(FormError::UnknownRow { .. }) => true,
            _ => false,
        });
    }

    #[test]
    fn reset_returns_to_a_single_blank_row() {
        let form = FormState::new().add_row().add_row();
        let id = form.rows()[0].local_id;
        let form = form.update_field(id, ContactField::LastName, "Lee").unwrap();

        let next = form.reset();

        assert_eq!(1, next.rows().len());
        assert!(next.rows()[0].is_blank());
    }
}
