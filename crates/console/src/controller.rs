//! User actions on the customer screen.
//!
//! Every action makes at most one mutating request, followed by a list
//! reload when it succeeds. Failures are reported through the error banner
//! and leave the form as it was.

use std::time::Instant;

use crate::api::CustomerApi;
use crate::form::CustomerForm;
use crate::model::RecordId;
use crate::page::{FormMode, Page};

/// Prompt shown before a record is deleted.
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this customer?";

/// Asks the user a yes/no question.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

/// How a user action ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    /// The request failed; the error banner says why
    Failed,
    /// The user declined the confirmation
    Cancelled,
    /// The form broke a native constraint; nothing was sent
    Invalid,
}

impl Outcome {
    /// Nothing went wrong; a declined confirmation counts.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

/// Drives the page through the customers API.
pub struct CustomerController<A, C> {
    api: A,
    confirm: C,
    page: Page,
}

impl<A, C> CustomerController<A, C>
where
    A: CustomerApi,
    C: Confirm,
{
    pub fn new(api: A, confirm: C) -> Self {
        Self {
            api,
            confirm,
            page: Page::new(),
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Form fields, for the caller to fill before `submit`.
    pub fn form_mut(&mut self) -> &mut CustomerForm {
        &mut self.page.form
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Fetch all records and replace the table.
    pub async fn load_customers(&mut self) -> Outcome {
        self.page.loading = true;

        let outcome = match self.api.list().await {
            Ok(customers) => {
                tracing::debug!(count = customers.len(), "Customers loaded");
                self.page.set_customers(customers);
                Outcome::Completed
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load customers");
                self.page.show_error(format!("Error loading customers: {}", e));
                Outcome::Failed
            }
        };

        self.page.loading = false;
        outcome
    }

    /// Create or update from the current form, depending on the mode.
    pub async fn submit(&mut self) -> Outcome {
        if let Err(message) = self.page.form.check_validity() {
            tracing::debug!(message = %message, "Form rejected");
            self.page.validation = Some(message);
            return Outcome::Invalid;
        }
        self.page.validation = None;

        let payload = self.page.form.payload();
        self.page.loading = true;

        let (result, success, failure) = match self.page.mode.clone() {
            FormMode::Create => (
                self.api.create(&payload).await,
                "Customer added successfully",
                "Error adding customer",
            ),
            FormMode::Edit { id } => (
                self.api.update(&id, &payload).await,
                "Customer updated successfully",
                "Error updating customer",
            ),
        };

        match result {
            Ok(_) => {
                tracing::info!(message = success, "Customer saved");
                self.page.show_success(success);
                self.page.reset_form();
                self.load_customers().await;
                Outcome::Completed
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save customer");
                self.page.show_error(format!("{}: {}", failure, e));
                self.page.loading = false;
                Outcome::Failed
            }
        }
    }

    /// Fetch one record into the form and switch to edit mode.
    pub async fn edit(&mut self, id: RecordId) -> Outcome {
        self.page.loading = true;

        let outcome = match self.api.get(&id).await {
            Ok(record) => {
                tracing::debug!(id = %id, "Editing customer");
                self.page.enter_edit(id, &record);
                Outcome::Completed
            }
            Err(e) => {
                tracing::error!(id = %id, error = %e, "Failed to load customer details");
                self.page
                    .show_error(format!("Error loading customer details: {}", e));
                Outcome::Failed
            }
        };

        self.page.loading = false;
        outcome
    }

    /// Delete one record after confirmation, then reload.
    pub async fn delete(&mut self, id: RecordId) -> Outcome {
        if !self.confirm.confirm(DELETE_CONFIRMATION) {
            tracing::debug!(id = %id, "Delete cancelled");
            return Outcome::Cancelled;
        }

        self.page.loading = true;

        match self.api.delete(&id).await {
            Ok(()) => {
                tracing::info!(id = %id, "Customer deleted");
                self.page.show_success("Customer deleted successfully");
                self.load_customers().await;
                Outcome::Completed
            }
            Err(e) => {
                tracing::error!(id = %id, error = %e, "Failed to delete customer");
                self.page.show_error(format!("Error deleting customer: {}", e));
                self.page.loading = false;
                Outcome::Failed
            }
        }
    }

    pub fn reset_form(&mut self) {
        self.page.reset_form();
    }

    pub fn dismiss_error(&mut self) {
        self.page.dismiss_error();
    }

    pub fn dismiss_success(&mut self) {
        self.page.dismiss_success();
    }

    pub fn expire_banners(&mut self, now: Instant) {
        self.page.expire_banners(now);
    }
}
