//! Customer domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Customer domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Create a new customer from a draft
    pub fn new(id: Uuid, draft: CustomerDraft) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            address: draft.address,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every editable field with the draft's values
    pub fn apply(&mut self, draft: CustomerDraft) {
        self.name = draft.name;
        self.email = draft.email;
        self.phone = draft.phone;
        self.address = draft.address;
        self.updated_at = Utc::now();
    }
}

/// Customer creation/update data transfer object.
///
/// Updates are full replacements: an absent phone or address clears it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomerDraft {
    /// Customer display name
    pub name: String,
    /// Contact email address
    pub email: String,
    /// Contact phone number
    pub phone: Option<String>,
    /// Postal address
    pub address: Option<String>,
}

impl CustomerDraft {
    /// Create a draft with only the required fields
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: None,
            address: None,
        }
    }

    /// Set the phone number
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set the postal address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Trim surrounding whitespace; blank optional fields become `None`.
    pub fn normalized(self) -> Self {
        fn optional(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: optional(self.phone),
            address: optional(self.address),
        }
    }

    /// Normalize, then require a non-blank name and email.
    pub fn validated(self) -> DomainResult<Self> {
        let draft = self.normalized();
        if draft.name.is_empty() {
            return Err(DomainError::invalid("name", "Name is required"));
        }
        if draft.email.is_empty() {
            return Err(DomainError::invalid("email", "Email is required"));
        }
        Ok(draft)
    }
}

/// Customer response (the REST wire shape)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CustomerResponse {
    /// Server-assigned identifier
    #[cfg_attr(feature = "openapi", schema(example = "1f0c3a52-8a0e-4f3e-9d7c-1b2a3c4d5e6f"))]
    pub id: String,
    /// Customer display name
    #[cfg_attr(feature = "openapi", schema(example = "John Doe"))]
    pub name: String,
    /// Contact email address
    #[cfg_attr(feature = "openapi", schema(example = "john.doe@example.com"))]
    pub email: String,
    /// Contact phone number
    #[cfg_attr(feature = "openapi", schema(example = "555-123-4567"))]
    pub phone: Option<String>,
    /// Postal address
    #[cfg_attr(feature = "openapi", schema(example = "123 Main St, Anytown, USA"))]
    pub address: Option<String>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id.to_string(),
            name: customer.name,
            email: customer.email,
            phone: customer.phone,
            address: customer.address,
        }
    }
}

impl From<&Customer> for CustomerResponse {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id.to_string(),
            name: customer.name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
            address: customer.address.clone(),
        }
    }
}
