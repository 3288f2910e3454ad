//! The create/edit customer form.

use validator::Validate;

use crate::model::{CustomerPayload, CustomerRecord, RecordId};

/// Field order used when reporting the first constraint violation.
const FIELD_ORDER: [&str; 2] = ["name", "email"];

/// Form field values, exactly as typed.
///
/// Only the constraints an HTML form would enforce natively are checked:
/// name and email are required and email must look like an address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct CustomerForm {
    /// Hidden id field, filled while editing
    pub id: String,
    #[validate(length(min = 1, message = "Please fill out the name field."))]
    pub name: String,
    #[validate(
        length(min = 1, message = "Please fill out the email field."),
        email(message = "Please enter a valid email address.")
    )]
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl CustomerForm {
    /// Clear every field, including the hidden id.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Populate the form from a fetched record; absent values become empty.
    pub fn fill(&mut self, id: &RecordId, record: &CustomerRecord) {
        self.id = id.to_string();
        self.name = record.name.clone().unwrap_or_default();
        self.email = record.email.clone().unwrap_or_default();
        self.phone = record.phone.clone().unwrap_or_default();
        self.address = record.address.clone().unwrap_or_default();
    }

    /// The request body for the four visible fields.
    pub fn payload(&self) -> CustomerPayload {
        CustomerPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
        }
    }

    /// Check native constraints, returning the first violation's message.
    pub fn check_validity(&self) -> Result<(), String> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };

        let field_errors = errors.field_errors();
        let message = FIELD_ORDER
            .iter()
            .filter_map(|field| field_errors.get(field))
            .filter_map(|errors| errors.first())
            .find_map(|error| error.message.as_ref())
            .map(|msg| msg.to_string())
            .unwrap_or_else(|| "Please correct the highlighted fields.".to_string());

        Err(message)
    }
}
